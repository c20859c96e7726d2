//! Project cards container.

use leptos::prelude::*;

use crate::catalog::Project;
use crate::render::render_projects;

/// Renders the catalog into `.projects-container` with one bulk write.
#[component]
pub fn ProjectList(projects: Vec<Project>) -> impl IntoView {
    let markup = render_projects(&projects);
    view! { <div class="projects-container" inner_html=markup></div> }
}
