//! Root page component and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::catalog::{Project, default_catalog};
use crate::components::{contact_form::ContactForm, project_list::ProjectList, theme_toggle::ThemeToggle};
use crate::config::SiteConfig;
use crate::util::theme::boot_script;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let boot = boot_script();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=boot></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: the portfolio built from the default catalog
/// and the build-time configuration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = SiteConfig::from_build_env();
    let projects = default_catalog();
    view! { <Portfolio config projects/> }
}

/// The single portfolio page.
#[component]
pub fn Portfolio(config: SiteConfig, projects: Vec<Project>) -> impl IntoView {
    let title = config.page_title();
    let SiteConfig { owner_name, contact_action } = config;
    let has_contact = contact_action.is_some();

    let contact = contact_action.map(|action| {
        view! {
            <section id="contact" class="section">
                <h2>"Get In Touch"</h2>
                <p>"Have a question or want to work together? Send me a message."</p>
                <ContactForm action/>
            </section>
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=title/>

        <header class="site-header">
            <a href="#" class="site-header__name">{owner_name.clone()}</a>
            <nav class="site-header__nav">
                <a href="#projects">"Projects"</a>
                {has_contact.then(|| view! { <a href="#contact">"Contact"</a> })}
            </nav>
            <ThemeToggle/>
        </header>

        <main>
            <section id="projects" class="section">
                <h2>"My Projects"</h2>
                <ProjectList projects/>
            </section>
            {contact}
        </main>

        <footer class="site-footer">
            <p>{format!("© {owner_name}")}</p>
        </footer>
    }
}
