//! Page - compose every section into one HTML document

use chrono::Datelike;
use serde::Serialize;
use sha2::{Digest, Sha256};

use super::components::{grid_card, project_card, section_heading};
use super::engine::TemplateEngine;
use super::templates;
use crate::content::Content;
use crate::error::Result;
use crate::theme::Theme;

pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/zhZFnwyOYLgqlLWk/scene.splinecode";
pub const VIEWER_SCRIPT_URL: &str = "https://unpkg.com/@splinetool/viewer@1.9.48/build/spline-viewer.js";

/// In-page anchors, in nav order. Each id is also a section id.
pub const NAV: [NavLink; 4] = [
    NavLink { id: "summary", label: "Summary" },
    NavLink { id: "stack", label: "My Data Stack" },
    NavLink { id: "projects", label: "Case Studies" },
    NavLink { id: "contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

/// Inputs that are not content: the year, colours and the 3D scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub year: i32,
    pub theme: Theme,
    pub scene_url: String,
}

impl PageContext {
    pub fn new(year: i32, theme: Theme, scene_url: impl Into<String>) -> Self {
        Self {
            year,
            theme,
            scene_url: scene_url.into(),
        }
    }

    /// Context stamped with the current local year
    pub fn current(theme: Theme, scene_url: impl Into<String>) -> Self {
        Self::new(chrono::Local::now().year(), theme, scene_url)
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

#[derive(Serialize)]
struct PageView<'a> {
    name: &'a str,
    role: &'a str,
    specialization: &'a str,
    about: &'a str,
    values: &'a [String],
    github: &'a str,
    linkedin: &'a str,
    mailto: String,
    nav: &'a [NavLink],
    scene_url: &'a str,
    viewer_script: &'a str,
    css: String,
    year: i32,
    summary_heading: String,
    stack_heading: String,
    projects_heading: String,
    contact_heading: String,
    stack_cards: Vec<String>,
    project_cards: Vec<String>,
}

/// Renders whole pages; holds the template registry between renders
pub struct PageRenderer {
    engine: TemplateEngine,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    pub fn render(&self, content: &Content, ctx: &PageContext) -> Result<String> {
        ctx.theme.validate()?;
        let engine = &self.engine;
        let profile = &content.profile;

        let summary_subtitle = format!(
            "I focus on {}. I design fault-tolerant ingestion, scalable storage, and governed \
             transformation layers that keep data fresh and trustworthy.",
            profile.specialization
        );

        let stack_cards = content
            .stack
            .iter()
            .map(|group| grid_card(engine, &group.title, &group.items))
            .collect::<Result<Vec<_>>>()?;

        let project_cards = content
            .projects
            .iter()
            .map(|project| project_card(engine, project))
            .collect::<Result<Vec<_>>>()?;

        let view = PageView {
            name: &profile.name,
            role: &profile.role,
            specialization: &profile.specialization,
            about: &profile.about,
            values: &profile.values,
            github: &profile.links.github,
            linkedin: &profile.links.linkedin,
            mailto: profile.links.mailto(),
            nav: &NAV,
            scene_url: &ctx.scene_url,
            viewer_script: VIEWER_SCRIPT_URL,
            css: ctx.theme.css(),
            year: ctx.year,
            summary_heading: section_heading(engine, Some("Summary"), "About Me", Some(summary_subtitle.as_str()))?,
            stack_heading: section_heading(
                engine,
                Some("Technical Architecture"),
                "My Data Stack",
                Some("Expertise across the modern data lifecycle."),
            )?,
            projects_heading: section_heading(
                engine,
                Some("Case Studies"),
                "Selected Projects",
                Some("How I turn requirements into reliable, production data systems."),
            )?,
            contact_heading: section_heading(
                engine,
                Some("Contact"),
                "Let’s build something. Get in touch.",
                None,
            )?,
            stack_cards,
            project_cards,
        };

        let html = engine.render(templates::PAGE, &view)?;
        log::debug!(
            "Rendered page: {} bytes, {} projects, {} stack groups",
            html.len(),
            content.projects.len(),
            content.stack.len()
        );
        Ok(html)
    }
}

/// One-shot render with a fresh template registry
pub fn render_page(content: &Content, ctx: &PageContext) -> Result<String> {
    PageRenderer::new()?.render(content, ctx)
}

/// Hex SHA-256 of a rendered page
pub fn digest(html: &str) -> String {
    hex::encode(Sha256::digest(html.as_bytes()))
}
