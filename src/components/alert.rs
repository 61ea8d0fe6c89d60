//! Alert components for reporting failures to the visitor.
//!
//! The search page reports problems in a dialog over the form; the profile
//! page uses an inline panel in place of the profile.

use maud::{html, Markup, Render};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Error,
    Info,
}

impl AlertVariant {
    /// Get the CSS class for the alert article element.
    #[must_use]
    pub const fn article_class(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// An inline alert panel.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::error("User not found").with_title("This account doesn't exist");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub title: Option<&'a str>,
    pub message: &'a str,
    pub id: Option<&'a str>,
}

impl<'a> Alert<'a> {
    /// Create a new alert with the given variant and message.
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self {
            variant,
            title: None,
            message,
            id: None,
        }
    }

    /// Create an error alert.
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    /// Create an info alert.
    #[must_use]
    pub const fn info(message: &'a str) -> Self {
        Self::new(AlertVariant::Info, message)
    }

    /// Add a title to the alert.
    #[must_use]
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the element ID.
    #[must_use]
    pub const fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.article_class();

        html! {
            article class=(class) id=[self.id] {
                @if let Some(title) = self.title {
                    h3 { (title) }
                }
                p { (self.message) }
            }
        }
    }
}

/// A modal error dialog, rendered already open.
///
/// The close button uses `method="dialog"` so it works without scripts.
#[derive(Debug, Clone)]
pub struct ErrorDialog<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

impl<'a> ErrorDialog<'a> {
    #[must_use]
    pub const fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }
}

impl Render for ErrorDialog<'_> {
    fn render(&self) -> Markup {
        html! {
            dialog id="errorModal" open aria-labelledby="errorModalLabel" {
                article {
                    header {
                        h2 id="errorModalLabel" { (self.title) }
                    }
                    p id="errorModalText" { (self.message) }
                    footer {
                        form method="dialog" {
                            button type="submit" { "Close" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_with_title() {
        let html = Alert::error("User not found")
            .with_title("Oops")
            .with_id("errorState")
            .render()
            .into_string();

        assert!(html.contains("class=\"error\""));
        assert!(html.contains("id=\"errorState\""));
        assert!(html.contains("<h3>Oops</h3>"));
        assert!(html.contains("<p>User not found</p>"));
    }

    #[test]
    fn test_alert_without_title() {
        let html = Alert::info("No posts found").render().into_string();
        assert!(html.contains("class=\"info\""));
        assert!(!html.contains("<h3>"));
        assert!(!html.contains("id="));
    }

    #[test]
    fn test_dialog_escapes_message() {
        let html = ErrorDialog::new("Error", "<img src=x onerror=alert(1)>")
            .render()
            .into_string();

        assert!(html.contains("<dialog id=\"errorModal\" open"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
    }
}
