//! Maud HTML template components for the web UI.
//!
//! This module provides reusable maud components for generating HTML.
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout and navigation
//! - `alert`: Inline error panels and the search error dialog
//! - `badge`: Verification and protected-account badges
//! - `card`: Post cards, quoted posts and the feed
//! - `form`: Form elements and the handle search form
//! - `media`: Photo grids and video players
//!
//! Every value spliced into markup goes through maud's HTML escaping; only
//! the static SVG icons are inserted with `PreEscaped`.
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Alert, BaseLayout, SearchForm};
//!
//! fn my_page() -> Markup {
//!     let content = html! {
//!         h1 { "Hello World" }
//!         (Alert::error("Something went wrong"))
//!         (SearchForm::new(""))
//!     };
//!     BaseLayout::new("My Page").render(content)
//! }
//! ```

pub mod alert;
pub mod badge;
pub mod card;
pub mod form;
pub mod layout;
pub mod media;

// Re-export layout components
pub use layout::{BaseLayout, SITE_NAME};

// Re-export alert components
pub use alert::{Alert, AlertVariant, ErrorDialog};

// Re-export badge components
pub use badge::{ProtectedBadge, VerificationBadge};

// Re-export card components
pub use card::{QuoteCard, TweetCard, TweetFeed};

// Re-export form components
pub use form::{Form, Input, SearchForm};

// Re-export media components
pub use media::{PhotoGrid, TweetMedia, VideoPlayer};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
