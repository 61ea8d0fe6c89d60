//! Search (home) page for the web UI.

use maud::{html, Markup, Render};
use urlencoding::encode;

use crate::components::{BaseLayout, ErrorDialog, SearchForm};
use crate::error::Notice;
use crate::recent::RecentSearches;

/// Parameters for rendering the search page.
#[derive(Debug)]
pub struct SearchPageParams<'a> {
    /// Value to re-fill into the search box
    pub value: &'a str,
    /// Handles searched recently by this visitor
    pub recent: &'a RecentSearches,
    /// Failure from the last submission, shown as a dialog
    pub notice: Option<&'a Notice>,
}

impl<'a> SearchPageParams<'a> {
    /// Parameters for a fresh visit with no pending error.
    #[must_use]
    pub const fn new(recent: &'a RecentSearches) -> Self {
        Self {
            value: "",
            recent,
            notice: None,
        }
    }

    /// Re-render after a rejected submission.
    #[must_use]
    pub const fn with_notice(mut self, value: &'a str, notice: &'a Notice) -> Self {
        self.value = value;
        self.notice = Some(notice);
        self
    }
}

/// Render the search page.
#[must_use]
pub fn render_search_page(params: &SearchPageParams<'_>) -> Markup {
    let content = html! {
        section class="search-hero" {
            h1 { "Find a profile" }
            p class="muted" { "Enter a username to see their profile and latest posts." }
            (SearchForm::new(params.value))
        }

        @if !params.recent.is_empty() {
            (RecentList { recent: params.recent })
        }

        @if let Some(notice) = params.notice {
            (ErrorDialog::new(&notice.title, &notice.message))
        }
    };

    BaseLayout::new("Search")
        .with_description("Look up a profile by username")
        .render(content)
}

/// Links to recently searched profiles.
struct RecentList<'a> {
    recent: &'a RecentSearches,
}

impl Render for RecentList<'_> {
    fn render(&self) -> Markup {
        html! {
            section id="recentSearches" class="recent-searches" {
                h2 { "Recent searches" }
                div id="recentList" class="recent-list" {
                    @for handle in self.recent.iter() {
                        a class="recent-item" href=(format!("/{}", encode(handle))) { "@" (handle) }
                    }
                }
            }
        }
    }
}
