use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use super::pages::{
    render_profile_error_page, render_profile_page, render_search_page, SearchPageParams,
};
use super::AppState;
use crate::profile;
use crate::recent::{RecentSearches, STORAGE_KEY};
use crate::search::{self, SearchOutcome};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home).post(submit_search))
        .route("/healthz", get(health))
        .route("/favicon.ico", get(favicon))
        .route("/:handle", get(profile_page))
}

// ========== Search Routes ==========

async fn home(headers: HeaderMap) -> Response {
    let recent = recent_searches(&headers);
    let html = render_search_page(&SearchPageParams::new(&recent));
    Html(html.into_string()).into_response()
}

#[derive(Debug, Deserialize)]
struct SearchSubmission {
    #[serde(default)]
    username: String,
}

/// Handler for the search form (POST /).
///
/// On success the handle is remembered in the recent searches cookie and
/// the visitor is redirected to the profile page. Failures re-render the
/// search page with an error dialog.
async fn submit_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SearchSubmission>,
) -> Response {
    let mut recent = recent_searches(&headers);

    match search::submit(state.api.as_ref(), &form.username, &mut recent).await {
        SearchOutcome::Found(handle) => {
            let redirect = Redirect::to(&handle.profile_path());
            match recent.set_cookie_header(state.config.cookie_secure) {
                Some(cookie) => ([(header::SET_COOKIE, cookie)], redirect).into_response(),
                None => redirect.into_response(),
            }
        }
        SearchOutcome::Rejected(notice) => {
            let params = SearchPageParams::new(&recent).with_notice(&form.username, &notice);
            let html = render_search_page(&params);
            (notice.status_code(), Html(html.into_string())).into_response()
        }
    }
}

// ========== Profile Routes ==========

async fn profile_page(State(state): State<AppState>, Path(handle): Path<String>) -> Response {
    let handle = handle.trim();
    if handle.is_empty() {
        return Redirect::to("/").into_response();
    }

    match profile::load(state.api.as_ref(), handle).await {
        Ok(view) => {
            let html = render_profile_page(&view, chrono::Utc::now());
            Html(html.into_string()).into_response()
        }
        Err(notice) => {
            let html = render_profile_error_page(&notice);
            (notice.status_code(), Html(html.into_string())).into_response()
        }
    }
}

// ========== Misc Routes ==========

async fn health() -> &'static str {
    "OK"
}

async fn favicon() -> Response {
    // Return a simple SVG favicon (magnifying glass emoji)
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">🔍</text></svg>"#;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/svg+xml")],
        svg,
    )
        .into_response()
}

/// Read the recent searches cookie; anything unreadable is an empty list.
fn recent_searches(headers: &HeaderMap) -> RecentSearches {
    let prefix = format!("{STORAGE_KEY}=");
    let raw = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| cookie.trim().strip_prefix(prefix.as_str()));

    RecentSearches::from_storage(raw)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_recent_searches_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; recent_searches=%5B%22bob%22%2C%22alice%22%5D"),
        );

        let recent = recent_searches(&headers);
        assert_eq!(recent.iter().collect::<Vec<_>>(), vec!["bob", "alice"]);
    }

    #[test]
    fn test_recent_searches_without_cookie() {
        assert!(recent_searches(&HeaderMap::new()).is_empty());
    }
}
