//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, navigation, and footer.

use maud::{html, Markup, DOCTYPE};

/// Site name appended to every page title.
pub const SITE_NAME: &str = "Profile Viewer";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    description: Option<&'a str>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub const fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
        }
    }

    /// Set the meta description used by link previews.
    #[must_use]
    pub const fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" data-theme="dark" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="dark";
                    @if let Some(description) = self.description {
                        meta name="description" content=(description);
                    }
                    title { (self.title) " - " (SITE_NAME) }
                    link rel="stylesheet" href="/static/css/style.css";
                }
                body {
                    (Self::render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                    script src="/static/js/app.js" {}
                }
            }
        }
    }

    /// Render the page header with navigation.
    fn render_header() -> Markup {
        html! {
            header class="container" {
                nav {
                    a href="/" class="site-logo" { strong { (SITE_NAME) } }
                    a href="/" { "Search" }
                }
            }
        }
    }

    /// Render the page footer.
    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small { (SITE_NAME) " | Profiles and posts are fetched live and never stored." }
            }
        }
    }
}
