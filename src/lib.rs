//! Folio - a static portfolio page renderer
//!
//! Fixed content (profile, data stack, project case studies) is rendered
//! through Handlebars fragments into a single self-contained HTML page.

pub mod content;
pub mod error;
pub mod render;
pub mod theme;

pub use error::{FolioError, Result};
