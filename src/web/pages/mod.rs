//! Maud-based page templates for the web UI.
//!
//! This module contains full page implementations using maud templates.
//! Each page module exports a render function that produces the complete HTML.

pub mod home;
pub mod profile;

// Re-export page rendering functions for convenience
pub use home::{render_search_page, SearchPageParams};
pub use profile::{render_profile_error_page, render_profile_page};
