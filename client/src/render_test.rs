use super::*;
use crate::catalog::default_catalog;

fn project(title: &str) -> Project {
    Project::new(
        title,
        format!("{title} description"),
        format!("./images/{title}.jpg"),
        format!("https://live.example.com/{title}"),
        format!("https://github.com/example/{title}"),
    )
}

#[test]
fn empty_catalog_renders_nothing() {
    assert_eq!(render_projects(&[]), "");
}

#[test]
fn one_card_per_record_in_order() {
    let projects = vec![project("alpha"), project("beta"), project("gamma")];
    let html = render_projects(&projects);

    assert_eq!(html.matches(r#"<div class="project-card">"#).count(), 3);
    let alpha = html.find("<h3>alpha</h3>").unwrap();
    let beta = html.find("<h3>beta</h3>").unwrap();
    let gamma = html.find("<h3>gamma</h3>").unwrap();
    assert!(alpha < beta && beta < gamma);
}

#[test]
fn card_contains_title_description_and_links() {
    let html = render_projects(&[project("alpha")]);
    assert!(html.contains("<h3>alpha</h3>"));
    assert!(html.contains("<p>alpha description</p>"));
    assert!(html.contains(r#"href="https://live.example.com/alpha" class="btn""#));
    assert!(html.contains(r#"href="https://github.com/example/alpha" class="btn btn-secondary""#));
    assert!(html.contains(">Live Demo</a>"));
    assert!(html.contains(">View Code</a>"));
    assert_eq!(html.matches(r#"target="_blank" rel="noopener noreferrer""#).count(), 2);
}

#[test]
fn image_uses_path_and_title_alt_text() {
    let html = render_projects(&[project("alpha")]);
    assert!(html.contains(
        r#"<img src="./images/alpha.jpg" alt="Screenshot of the alpha project" class="project-image">"#
    ));
}

#[test]
fn duplicates_render_twice() {
    let html = render_projects(&[project("same"), project("same")]);
    assert_eq!(html.matches("<h3>same</h3>").count(), 2);
}

#[test]
fn rendering_is_idempotent() {
    let catalog = default_catalog();
    assert_eq!(render_projects(&catalog), render_projects(&catalog));
}

#[test]
fn catalog_text_is_escaped() {
    let mut p = project("x");
    p.title = "<script>alert('hi')</script>".to_owned();
    p.description = "Fish & \"Chips\"".to_owned();
    let html = render_projects(&[p]);
    assert!(!html.contains("<script>"));
    assert!(html.contains("<h3>&lt;script&gt;alert(&#39;hi&#39;)&lt;/script&gt;</h3>"));
    assert!(html.contains("<p>Fish &amp; &quot;Chips&quot;</p>"));
}

#[test]
fn placeholder_links_render_as_is() {
    let p = Project::new("t", "d", "./images/t.jpg", "#", "#");
    let html = render_projects(&[p]);
    assert_eq!(html.matches(r##"href="#""##).count(), 2);
}

#[test]
fn escape_html_passes_plain_text_through() {
    assert_eq!(escape_html("Task Management App"), "Task Management App");
}
