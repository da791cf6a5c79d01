//! Render - turn content into HTML
//!
//! Fragments are Handlebars templates; components render them from borrowed
//! data and the page composer stitches the fragments together.

mod components;
mod engine;
mod page;
mod templates;

pub use components::{grid_card, project_card, section_heading};
pub use engine::TemplateEngine;
pub use page::{
    DEFAULT_SCENE_URL, NAV, NavLink, PageContext, PageRenderer, VIEWER_SCRIPT_URL, digest, render_page,
};
