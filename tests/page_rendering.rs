//! Page rendering integration tests
//!
//! Exercises the public API end to end: builtin content through the page
//! composer, checking what ends up in the HTML.

use folio::content::{Content, Project};
use folio::render::{DEFAULT_SCENE_URL, PageContext, PageRenderer, digest, project_card, render_page};
use folio::theme::Theme;
use handlebars::html_escape;

fn ctx(year: i32) -> PageContext {
    PageContext::new(year, Theme::default(), DEFAULT_SCENE_URL)
}

/// Slice of the page holding the rendered project cards
fn projects_section(html: &str) -> &str {
    let start = html.find(r#"<section id="projects""#).unwrap();
    let end = html[start..].find("</section>").unwrap();
    &html[start..start + end]
}

const CARD_OPEN: &str = r#"<article class="card project-card">"#;

/// Each rendered project card, in page order
fn project_cards(section: &str) -> Vec<&str> {
    section
        .split(CARD_OPEN)
        .skip(1)
        .map(|rest| &rest[..rest.find("</article>").unwrap()])
        .collect()
}

#[test]
fn test_every_project_field_appears_once() -> folio::Result<()> {
    let content = Content::builtin();
    let renderer = PageRenderer::new()?;

    for project in &content.projects {
        let card = project_card(renderer.engine(), project)?;
        for text in [&project.title, &project.goal, &project.solution, &project.outcome] {
            assert_eq!(card.matches(&html_escape(text)).count(), 1, "{}", text);
        }
        for tag in &project.tech {
            let chip = format!(r#"<span class="tech-tag">{}</span>"#, html_escape(tag));
            assert_eq!(card.matches(&chip).count(), 1, "{}", tag);
        }
    }
    Ok(())
}

#[test]
fn test_project_cards_in_page() -> folio::Result<()> {
    let content = Content::builtin();
    let html = render_page(&content, &ctx(2030))?;
    let cards = project_cards(projects_section(&html));

    assert_eq!(cards.len(), content.projects.len());
    for (card, project) in cards.iter().zip(&content.projects) {
        assert_eq!(card.matches(&format!("<h3>{}</h3>", html_escape(&project.title))).count(), 1);
        for tag in &project.tech {
            let chip = format!(r#"<span class="tech-tag">{}</span>"#, html_escape(tag));
            assert_eq!(card.matches(&chip).count(), 1, "{} in {}", tag, project.title);
        }
        assert_eq!(card.matches(r#"class="tech-tag""#).count(), project.tech.len());
    }
    Ok(())
}

#[test]
fn test_shared_tags_render_once_per_card() -> folio::Result<()> {
    let content = Content::builtin();
    let html = render_page(&content, &ctx(2030))?;
    let section = projects_section(&html);
    let chip = r#"<span class="tech-tag">dbt</span>"#;

    // both builtin projects use dbt
    assert_eq!(section.matches(chip).count(), 2);
    for card in project_cards(section) {
        assert_eq!(card.matches(chip).count(), 1);
    }
    Ok(())
}

#[test]
fn test_project_links_match_stored_urls() -> folio::Result<()> {
    let content = Content::builtin();
    let html = render_page(&content, &ctx(2030))?;
    let section = projects_section(&html);

    let hrefs: Vec<&str> = section
        .match_indices(r#"class="project-link" href=""#)
        .map(|(i, m)| {
            let rest = &section[i + m.len()..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect();
    let stored: Vec<&str> = content.projects.iter().map(|p| p.link.as_str()).collect();
    assert_eq!(hrefs, stored);
    Ok(())
}

#[test]
fn test_footer_shows_current_year() -> folio::Result<()> {
    let ctx = PageContext::current(Theme::default(), DEFAULT_SCENE_URL);
    let html = render_page(&Content::builtin(), &ctx)?;
    let footer = &html[html.find("<footer").unwrap()..];
    assert!(footer.contains(&format!("© {} ", ctx.year)));
    Ok(())
}

#[test]
fn test_render_is_idempotent() -> folio::Result<()> {
    let content = Content::builtin();
    let ctx = ctx(2030);
    let renderer = PageRenderer::new()?;

    let first = renderer.render(&content, &ctx)?;
    let second = renderer.render(&content, &ctx)?;
    let fresh = render_page(&content, &ctx)?;

    assert_eq!(first, second);
    assert_eq!(first, fresh);
    assert_eq!(digest(&first), digest(&fresh));
    Ok(())
}

#[test]
fn test_stack_grid_renders_every_group() -> folio::Result<()> {
    let content = Content::builtin();
    let html = render_page(&content, &ctx(2030))?;
    let start = html.find(r#"<section id="stack""#).unwrap();
    let stack = &html[start..start + html[start..].find("</section>").unwrap()];

    assert_eq!(stack.matches(r#"<div class="grid-card">"#).count(), 6);
    assert!(stack.contains("<h3>Reliability &amp; Observability</h3>"));
    for group in &content.stack {
        for item in &group.items {
            assert!(stack.contains(&format!(r#"<span class="chip">{}</span>"#, html_escape(item))));
        }
    }
    Ok(())
}

#[test]
fn test_custom_content_is_escaped() -> folio::Result<()> {
    let mut content = Content::builtin();
    content.profile.name = "Ada <script>".to_string();
    content.projects = vec![Project::new(
        "Pipes & Filters",
        "Move \"data\".",
        "Wrote it.",
        &["C++"],
        "It worked.",
        "https://example.com/pipes",
    )];

    let html = render_page(&content, &ctx(2030))?;
    assert!(!html.contains("Ada <script>"));
    assert!(html.contains("Ada &lt;script&gt;"));
    assert!(html.contains("<h3>Pipes &amp; Filters</h3>"));
    assert!(html.contains("Move &quot;data&quot;."));
    Ok(())
}

#[test]
fn test_empty_project_list() -> folio::Result<()> {
    let mut content = Content::builtin();
    content.projects.clear();
    let html = render_page(&content, &ctx(2030))?;
    assert!(!projects_section(&html).contains("project-card"));
    assert!(html.contains("Selected Projects"));
    Ok(())
}

#[test]
fn test_theme_changes_only_styles() -> folio::Result<()> {
    let content = Content::builtin();
    let base = render_page(&content, &ctx(2030))?;
    let themed_ctx = PageContext {
        theme: Theme::new("#00AA88", "#101010")?,
        ..ctx(2030)
    };
    let themed = render_page(&content, &themed_ctx)?;

    assert_ne!(base, themed);
    let body = |html: &str| html[html.find("<body>").unwrap()..].to_string();
    assert_eq!(body(&base), body(&themed));
    Ok(())
}
