//! Form components for maud templates.
//!
//! Generic form builders plus the handle search form.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional form ID
    pub id: Option<&'a str>,
}

impl<'a> Form<'a> {
    /// Create a new form with the given action and method.
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            id: None,
        }
    }

    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
    }

    /// Set the form ID.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) id=[self.id] {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Input name attribute
    pub name: &'a str,
    /// Input type ("text", "search", "hidden", etc.)
    pub r#type: &'a str,
    /// Current value
    pub value: Option<&'a str>,
    /// Placeholder text
    pub placeholder: Option<&'a str>,
    /// Whether the field is required
    pub required: bool,
    /// Optional ID attribute
    pub id: Option<&'a str>,
    /// Autocomplete attribute
    pub autocomplete: Option<&'a str>,
    /// Maximum input length
    pub maxlength: Option<usize>,
    /// Pattern for validation
    pub pattern: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Create a new text input.
    #[must_use]
    pub fn text(name: &'a str) -> Self {
        Self {
            name,
            r#type: "text",
            value: None,
            placeholder: None,
            required: false,
            id: None,
            autocomplete: None,
            maxlength: None,
            pattern: None,
        }
    }

    /// Set the current value.
    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Mark as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the ID attribute.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the autocomplete attribute.
    #[must_use]
    pub fn autocomplete(mut self, autocomplete: &'a str) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }

    /// Set the maximum length.
    #[must_use]
    pub fn maxlength(mut self, maxlength: usize) -> Self {
        self.maxlength = Some(maxlength);
        self
    }

    /// Set a validation pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: &'a str) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                id=[self.id]
                value=[self.value]
                placeholder=[self.placeholder]
                autocomplete=[self.autocomplete]
                maxlength=[self.maxlength]
                pattern=[self.pattern]
                required[self.required];
        }
    }
}

/// The handle search form.
///
/// Browsers get the same validation rule as the server through `pattern`;
/// an optional leading `@` is allowed and stripped server-side.
#[derive(Debug, Clone, Copy)]
pub struct SearchForm<'a> {
    /// Previously entered value, re-filled after a rejected search.
    pub value: &'a str,
}

impl<'a> SearchForm<'a> {
    #[must_use]
    pub const fn new(value: &'a str) -> Self {
        Self { value }
    }
}

impl Render for SearchForm<'_> {
    fn render(&self) -> Markup {
        let input = Input::text("username")
            .id("usernameInput")
            .value(self.value)
            .placeholder("@username")
            .autocomplete("off")
            .maxlength(16)
            .pattern(r"\s*@?[A-Za-z0-9_]{1,15}\s*")
            .required();

        Form::post(
            "/",
            html! {
                fieldset role="group" {
                    (input)
                    button type="submit" id="searchBtn" { "Search" }
                }
            },
        )
        .id("searchForm")
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_attributes() {
        let html = Input::text("q")
            .id("q")
            .placeholder("Search")
            .required()
            .render()
            .into_string();

        assert!(html.contains("type=\"text\""));
        assert!(html.contains("name=\"q\""));
        assert!(html.contains("placeholder=\"Search\""));
        assert!(html.contains("required"));
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_search_form_refills_value() {
        let html = SearchForm::new("bad\"value").render().into_string();

        assert!(html.contains("action=\"/\""));
        assert!(html.contains("method=\"post\""));
        assert!(html.contains("value=\"bad&quot;value\""));
        assert!(html.contains("id=\"searchBtn\""));
        assert!(!html.contains("disabled"));
    }
}
