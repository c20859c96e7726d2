//! Project card markup.
//!
//! The whole catalog is turned into one string so the container is written
//! with a single `inner_html` assignment instead of one update per card.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use crate::catalog::Project;

/// Render every project as a card, in catalog order.
///
/// An empty catalog renders to an empty string.
pub fn render_projects(projects: &[Project]) -> String {
    let mut out = String::new();
    for project in projects {
        render_card(project, &mut out);
    }
    out
}

fn render_card(project: &Project, out: &mut String) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        concat!(
            r#"<div class="project-card">"#,
            r#"<div class="project-image-container">"#,
            r#"<img src="{src}" alt="{alt}" class="project-image">"#,
            r#"</div>"#,
            r#"<div class="project-info">"#,
            r#"<h3>{title}</h3>"#,
            r#"<p>{description}</p>"#,
            r#"<div class="project-links">"#,
            r#"<a href="{live}" class="btn" target="_blank" rel="noopener noreferrer">Live Demo</a>"#,
            r#"<a href="{code}" class="btn btn-secondary" target="_blank" rel="noopener noreferrer">View Code</a>"#,
            r#"</div>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        src = escape_html(&project.image_url),
        alt = escape_html(&project.image_alt()),
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        live = escape_html(&project.live_url),
        code = escape_html(&project.code_url),
    );
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
