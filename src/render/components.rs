//! Components - the reusable fragments the page is built from

use serde::Serialize;

use super::engine::TemplateEngine;
use super::templates;
use crate::content::Project;
use crate::error::Result;

#[derive(Serialize)]
struct HeadingView<'a> {
    kicker: Option<&'a str>,
    title: &'a str,
    subtitle: Option<&'a str>,
}

#[derive(Serialize)]
struct GridCardView<'a> {
    title: &'a str,
    items: &'a [String],
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Kicker label, title and optional subtitle; absent parts emit no element
pub fn section_heading(
    engine: &TemplateEngine,
    kicker: Option<&str>,
    title: &str,
    subtitle: Option<&str>,
) -> Result<String> {
    let view = HeadingView {
        kicker: non_empty(kicker),
        title,
        subtitle: non_empty(subtitle),
    };
    engine.render(templates::SECTION_HEADING, &view)
}

/// Titled card with one chip per item
pub fn grid_card(engine: &TemplateEngine, title: &str, items: &[String]) -> Result<String> {
    engine.render(templates::GRID_CARD, &GridCardView { title, items })
}

/// Case-study card linking out to the project
pub fn project_card(engine: &TemplateEngine, project: &Project) -> Result<String> {
    engine.render(templates::PROJECT_CARD, project)
}
