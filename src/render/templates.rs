//! Handlebars sources for every page fragment.
//!
//! Double-stash values are HTML-escaped; triple-stash is reserved for
//! fragments produced by other templates and for the generated stylesheet.

pub const SECTION_HEADING: &str = "section_heading";
pub const GRID_CARD: &str = "grid_card";
pub const PROJECT_CARD: &str = "project_card";
pub const PAGE: &str = "page";

pub const SECTION_HEADING_SRC: &str = r#"<div class="section-heading">
{{#if kicker}}  <p class="kicker">{{kicker}}</p>
{{/if}}  <h2>{{title}}</h2>
{{#if subtitle}}  <p class="subtitle">{{subtitle}}</p>
{{/if}}</div>"#;

pub const GRID_CARD_SRC: &str = r#"<div class="grid-card">
  <h3>{{title}}</h3>
  <div class="chips">{{#each items}}<span class="chip">{{this}}</span>{{/each}}</div>
</div>"#;

pub const PROJECT_CARD_SRC: &str = r#"<article class="card project-card">
  <div class="project-head">
    <h3>{{title}}</h3>
    <a class="project-link" href="{{link}}" target="_blank" rel="noreferrer">GitHub ↗</a>
  </div>
  <p><span class="label">The Goal:</span> {{goal}}</p>
  <p><span class="label">My Solution:</span> {{solution}}</p>
  <div><span class="label">Architecture/Tech:</span>
    <div class="chips">{{#each tech}}<span class="tech-tag">{{this}}</span>{{/each}}</div>
  </div>
  <p><span class="label">The Outcome:</span> {{outcome}}</p>
</article>"#;

pub const PAGE_SRC: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{name}} | {{role}}</title>
  <script type="module" src="{{viewer_script}}"></script>
  <style>{{{css}}}</style>
</head>
<body>
<div class="grid-bg" aria-hidden="true"></div>
<header class="site-header">
  <div class="container">
    <a class="brand" href="#top">{{name}}</a>
    <nav class="site-nav">
{{#each nav}}      <a href="#{{id}}">{{label}}</a>
{{/each}}    </nav>
    <a class="btn btn-accent" href="#contact">Get in touch</a>
  </div>
</header>
<section id="top" class="hero">
  <div class="hero-scene"><spline-viewer url="{{scene_url}}"></spline-viewer></div>
  <div class="hero-copy">
    <div class="container">
      <div class="glass">
        <p class="muted">{{role}}</p>
        <h1>Hi, I'm {{name}}. I architect the data systems that power intelligent applications.</h1>
        <p class="muted">Specializing in {{specialization}}. Building reliable, observable, and cost-aware pipelines end-to-end.</p>
        <div class="actions">
          <a class="btn btn-accent" href="#projects">View Case Studies</a>
          <a class="btn btn-outline" href="#stack">My Data Stack</a>
        </div>
      </div>
    </div>
  </div>
</section>
<section id="summary" class="section">
{{{summary_heading}}}
  <div class="container narrow">
    <div class="card">
      <p>{{about}}</p>
      <pre class="values"># values I optimize for{{#each values}}
- {{this}}{{/each}}</pre>
    </div>
  </div>
</section>
<section id="stack" class="section">
{{{stack_heading}}}
  <div class="container stack-grid">
{{#each stack_cards}}{{{this}}}
{{/each}}  </div>
</section>
<section id="projects" class="section">
{{{projects_heading}}}
  <div class="container project-grid">
{{#each project_cards}}{{{this}}}
{{/each}}  </div>
</section>
<section id="contact" class="section">
{{{contact_heading}}}
  <div class="container narrow">
    <div class="card contact">
      <p>I’m open to roles, consulting, and collaborations.</p>
      <div class="actions">
        <a class="btn btn-accent" href="{{github}}" target="_blank" rel="noreferrer">GitHub</a>
        <a class="btn btn-outline-deep" href="{{linkedin}}" target="_blank" rel="noreferrer">LinkedIn</a>
        <a class="btn btn-outline-deep" href="{{mailto}}">Email</a>
      </div>
    </div>
  </div>
</section>
<footer class="site-footer">
  <div class="container">
    <p>© {{year}} {{name}}. All rights reserved.</p>
    <p>Built with a data-centric design • <span class="accent">Deep Blue</span> + White + Orange</p>
  </div>
</footer>
</body>
</html>
"##;

/// Every template, keyed by the name it is registered under
pub const ALL: [(&str, &str); 4] = [
    (SECTION_HEADING, SECTION_HEADING_SRC),
    (GRID_CARD, GRID_CARD_SRC),
    (PROJECT_CARD, PROJECT_CARD_SRC),
    (PAGE, PAGE_SRC),
];
