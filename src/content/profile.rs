//! Who the page is about and how to reach them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLinks {
    pub github: String,
    pub linkedin: String,
    /// Bare address; the page renders it as a `mailto:` link
    pub email: String,
}

impl Default for ContactLinks {
    fn default() -> Self {
        Self {
            github: "https://github.com/your-username".to_string(),
            linkedin: "https://www.linkedin.com/in/your-profile".to_string(),
            email: "you@example.com".to_string(),
        }
    }
}

impl ContactLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub specialization: String,
    pub about: String,
    /// Lines of the "values I optimize for" block
    pub values: Vec<String>,
    pub links: ContactLinks,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "[Your Name]".to_string(),
            role: "Data Engineer".to_string(),
            specialization: "[Your Specialization]".to_string(),
            about: "Over the last several years, I have delivered data platforms powering analytics \
                    and ML across e-commerce, SaaS, and fintech. My approach emphasizes event-driven \
                    design, declarative transformations, and strong contracts between producers and \
                    consumers. I champion observability, testing, and documentation so teams can ship \
                    confidently."
                .to_string(),
            values: vec![
                "Freshness, quality, and cost".to_string(),
                "Simplicity over complexity".to_string(),
                "Reproducibility and lineage".to_string(),
            ],
            links: ContactLinks::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placeholders() {
        let profile = Profile::default();
        assert_eq!(profile.name, "[Your Name]");
        assert_eq!(profile.specialization, "[Your Specialization]");
        assert_eq!(profile.role, "Data Engineer");
        assert_eq!(profile.values.len(), 3);
    }

    #[test]
    fn test_mailto() {
        let links = ContactLinks {
            email: "ada@example.org".to_string(),
            ..Default::default()
        };
        assert_eq!(links.mailto(), "mailto:ada@example.org");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let profile: Profile = serde_yaml::from_str("name: Ada Lovelace\n").unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.role, "Data Engineer");
        assert_eq!(profile.links, ContactLinks::default());
    }
}
