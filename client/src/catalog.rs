//! Project catalog: the hand-edited list of portfolio entries.
//!
//! DESIGN
//! ======
//! The catalog is plain data handed to the renderer as an explicit argument.
//! Order is display order; duplicates are allowed and render twice.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Placeholder used for links that do not point anywhere yet.
pub const PLACEHOLDER_URL: &str = "#";

/// One portfolio project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Image path, relative to the page.
    pub image_url: String,
    /// Live demo URL, or [`PLACEHOLDER_URL`].
    pub live_url: String,
    /// Source code URL, or [`PLACEHOLDER_URL`].
    pub code_url: String,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        live_url: impl Into<String>,
        code_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            live_url: live_url.into(),
            code_url: code_url.into(),
        }
    }

    /// Alternative text for the card image, derived from the title.
    pub fn image_alt(&self) -> String {
        format!("Screenshot of the {} project", self.title)
    }
}

/// The projects shown on the page, in display order.
pub fn default_catalog() -> Vec<Project> {
    vec![
        Project::new(
            "Portfolio Project (This Website!)",
            "A responsive personal portfolio built from scratch with Rust, Leptos and WebAssembly. \
             Features a persisted theme switcher and is populated from a typed project catalog.",
            "./images/portfolio-project-preview.jpg",
            "https://your-live-site.com",
            "https://github.com/your-username/your-repo-name",
        ),
        Project::new(
            "E-commerce Website Concept",
            "A concept design and front-end implementation for an e-commerce platform. Focused on a \
             clean UI, responsive product grids, and a streamlined checkout process using modern CSS \
             techniques.",
            "./images/ecommerce-project-preview.jpg",
            PLACEHOLDER_URL,
            "https://github.com/your-username/ecommerce-repo",
        ),
        Project::new(
            "Task Management App",
            "A client-side task management application. Allows users to add, edit, delete, and mark \
             tasks as complete, with all data saved to localStorage.",
            "./images/task-app-preview.jpg",
            PLACEHOLDER_URL,
            "https://github.com/your-username/task-app-repo",
        ),
    ]
}
