//! Theme - page colours and the inline stylesheet

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

pub const DEFAULT_ACCENT: &str = "#FF4F00";
pub const DEFAULT_DEEP: &str = "#0A2540";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Buttons, links and highlights
    pub accent: String,
    /// Page background and card text
    pub deep: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT.to_string(),
            deep: DEFAULT_DEEP.to_string(),
        }
    }
}

fn is_hex_colour(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl Theme {
    pub fn new(accent: impl Into<String>, deep: impl Into<String>) -> Result<Self> {
        let theme = Self {
            accent: accent.into(),
            deep: deep.into(),
        };
        theme.validate()?;
        Ok(theme)
    }

    /// Both colours must be `#RRGGBB`; they are spliced into CSS unescaped
    pub fn validate(&self) -> Result<()> {
        for colour in [&self.accent, &self.deep] {
            if !is_hex_colour(colour) {
                return Err(FolioError::InvalidTheme(colour.clone()));
            }
        }
        Ok(())
    }

    /// Stylesheet for the page, with the theme colours as CSS variables
    pub fn css(&self) -> String {
        format!(
            ":root{{--accent:{accent};--deep:{deep};}}\n{stylesheet}",
            accent = self.accent,
            deep = self.deep,
            stylesheet = STYLESHEET
        )
    }
}

const STYLESHEET: &str = r#"*{box-sizing:border-box}
body{margin:0;min-height:100vh;background:var(--deep);color:#fff;font-family:system-ui,-apple-system,"Segoe UI",sans-serif}
a{color:inherit;text-decoration:none}
.grid-bg{position:fixed;inset:0;pointer-events:none;background-image:linear-gradient(rgba(255,255,255,0.05) 1px,transparent 1px),linear-gradient(90deg,rgba(255,255,255,0.05) 1px,transparent 1px);background-size:48px 48px,48px 48px}
.container{max-width:72rem;margin:0 auto;padding:0 1rem}
.narrow{max-width:56rem}
.site-header{position:sticky;top:0;z-index:50;backdrop-filter:blur(8px);border-bottom:1px solid rgba(255,255,255,0.1)}
.site-header .container{display:flex;align-items:center;justify-content:space-between;padding-top:.75rem;padding-bottom:.75rem}
.brand{font-weight:600}
.site-nav{display:flex;gap:1.5rem;color:rgba(255,255,255,0.8)}
.btn{display:inline-block;padding:.5rem 1rem;border-radius:.375rem;font-weight:500}
.btn-accent{background:var(--accent);color:#fff}
.btn-outline{border:1px solid rgba(255,255,255,0.3)}
.btn-outline-deep{border:1px solid rgba(10,37,64,0.2);color:var(--deep)}
.hero{position:relative;height:90vh;width:100%}
.hero-scene{position:absolute;inset:0}
.hero-scene spline-viewer{width:100%;height:100%}
.hero-copy{position:relative;height:100%;display:flex;align-items:center}
.glass{background:rgba(255,255,255,0.1);backdrop-filter:blur(12px);padding:2rem;border-radius:1rem;border:1px solid rgba(255,255,255,0.2)}
.hero h1{font-size:3rem;font-weight:600;max-width:48rem;margin:0}
.muted{color:rgba(255,255,255,0.8)}
.actions{margin-top:1.5rem;display:flex;gap:.75rem;align-items:center}
.section{position:relative;padding:6rem 0}
.section-heading{max-width:64rem;margin:0 auto 2rem;text-align:center}
.kicker{letter-spacing:.1em;text-transform:uppercase;font-size:.875rem;color:rgba(255,255,255,0.6);margin-bottom:.5rem}
.section-heading h2{font-size:2.25rem;font-weight:600;margin:0}
.subtitle{margin-top:.75rem;color:rgba(255,255,255,0.8)}
.card{background:#fff;color:var(--deep);border-radius:1rem;padding:2rem;box-shadow:0 20px 25px -5px rgba(0,0,0,0.1)}
.values{margin-top:1.5rem;padding:1rem;border-radius:.5rem;background:var(--deep);color:#fff;font-family:ui-monospace,monospace;font-size:.875rem;overflow:auto}
.stack-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(18rem,1fr));gap:1.5rem}
.grid-card{background:rgba(255,255,255,0.05);border:1px solid rgba(255,255,255,0.1);border-radius:.75rem;padding:1.25rem}
.grid-card h3{font-weight:500;margin:0 0 .75rem}
.chips{display:flex;flex-wrap:wrap;gap:.5rem}
.chip{font-size:.875rem;padding:.25rem .75rem;border-radius:9999px;border:1px solid rgba(255,255,255,0.15);background:rgba(255,255,255,0.05)}
.project-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(24rem,1fr));gap:1.5rem}
.project-head{display:flex;align-items:center;justify-content:space-between;gap:1rem;margin-bottom:.5rem}
.project-head h3{font-size:1.5rem;font-weight:600;margin:0}
.project-link{font-size:.875rem;font-weight:500;color:var(--accent)}
.label{font-weight:600}
.tech-tag{font-size:.75rem;padding:.25rem .5rem;border-radius:.25rem;border:1px solid rgba(10,37,64,0.1);background:rgba(10,37,64,0.05)}
.contact{display:flex;flex-wrap:wrap;align-items:center;justify-content:space-between;gap:1rem}
.site-footer{border-top:1px solid rgba(255,255,255,0.1);padding:2rem 0;font-size:.875rem;color:rgba(255,255,255,0.6)}
.site-footer .container{display:flex;flex-wrap:wrap;justify-content:space-between;gap:1rem}
.accent{color:var(--accent)}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_valid() {
        assert!(Theme::default().validate().is_ok());
    }

    #[test]
    fn test_new_accepts_lowercase_hex() {
        let theme = Theme::new("#ff4f00", "#0a2540").unwrap();
        assert_eq!(theme.accent, "#ff4f00");
    }

    #[test]
    fn test_rejects_named_colour() {
        let result = Theme::new("orange", DEFAULT_DEEP);
        assert!(matches!(result, Err(FolioError::InvalidTheme(c)) if c == "orange"));
    }

    #[test]
    fn test_rejects_css_injection() {
        assert!(Theme::new(DEFAULT_ACCENT, "#000;}body{").is_err());
        assert!(Theme::new("#12345", DEFAULT_DEEP).is_err());
        assert!(Theme::new("#12345G", DEFAULT_DEEP).is_err());
    }

    #[test]
    fn test_css_declares_variables() {
        let css = Theme::default().css();
        assert!(css.starts_with(":root{--accent:#FF4F00;--deep:#0A2540;}"));
        assert!(css.contains(".tech-tag{"));
    }
}
