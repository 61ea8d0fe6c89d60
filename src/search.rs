//! Handle search: validate, confirm the user exists, remember it.

use tracing::{info, warn};

use crate::api::{ApiError, ProfileApi};
use crate::error::{FailureKind, Notice};
use crate::handle::Handle;
use crate::recent::RecentSearches;

/// Result of submitting the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The user exists; continue to their profile page.
    Found(Handle),
    /// Show the notice and stay on the search page.
    Rejected(Notice),
}

/// Validate `input`, check the handle against the API and, on success,
/// record it in `recent`.
///
/// Invalid input is rejected without a network round trip.
pub async fn submit(
    api: &dyn ProfileApi,
    input: &str,
    recent: &mut RecentSearches,
) -> SearchOutcome {
    let handle = match Handle::parse(input) {
        Ok(handle) => handle,
        Err(e) => {
            return SearchOutcome::Rejected(Notice::new(
                FailureKind::InvalidInput,
                e.title(),
                e.to_string(),
            ));
        }
    };

    match api.check_user(handle.as_str()).await {
        Ok(()) => {
            info!(handle = %handle, "Search found user");
            recent.record(handle.as_str());
            SearchOutcome::Found(handle)
        }
        Err(e) => {
            warn!(handle = %handle, "Search failed: {e}");
            SearchOutcome::Rejected(rejection(&handle, &e))
        }
    }
}

fn rejection(handle: &Handle, err: &ApiError) -> Notice {
    let kind = FailureKind::from(err);
    match err {
        ApiError::NotFound => Notice::new(
            kind,
            "User Not Found",
            format!("The user @{handle} does not exist or is unavailable."),
        ),
        ApiError::Server { .. } | ApiError::Decode(_) => Notice::new(
            kind,
            "Error",
            err.body_text().unwrap_or("Failed to fetch user data"),
        ),
        ApiError::Connection(_) => Notice::new(
            kind,
            "Connection Error",
            "Unable to connect to the server. Please try again.",
        ),
    }
}
