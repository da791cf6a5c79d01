//! Content - the fixed data the page is rendered from
//!
//! Everything here is plain data. The builtin set is what the page ships
//! with; a YAML file with the same shape can replace it.

mod profile;
mod project;
mod stack;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use profile::{ContactLinks, Profile};
pub use project::Project;
pub use stack::StackGroup;

/// Everything the page displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default = "StackGroup::builtin")]
    pub stack: Vec<StackGroup>,
    #[serde(default = "Project::builtin")]
    pub projects: Vec<Project>,
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Content {
    pub fn builtin() -> Self {
        Self {
            profile: Profile::default(),
            stack: StackGroup::builtin(),
            projects: Project::builtin(),
        }
    }

    /// Load content from a YAML file; omitted sections fall back to the builtin set
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(&path)?;
        let content: Self = serde_yaml::from_str(&raw)?;
        log::info!(
            "Loaded content from {} ({} projects, {} stack groups)",
            path.as_ref().display(),
            content.projects.len(),
            content.stack.len()
        );
        Ok(content)
    }
}
