//! Profile page data loading: the user record and the post feed.

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::api::{ApiError, ProfileApi, Tweet, User};
use crate::error::{FailureKind, Notice};

/// Title used on the profile error panel.
const PROFILE_ERROR_TITLE: &str = "This account doesn't exist";

/// State of the post feed once loading has settled.
#[derive(Debug, Clone)]
pub enum Timeline {
    /// Posts that loaded, in the order the API listed their IDs.
    Loaded(Vec<Tweet>),
    /// The user has no posts.
    Empty,
    /// The feed could not be shown.
    Failed(TimelineFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineFailure {
    /// The post ID list could not be fetched.
    IdList,
    /// Every post detail request failed.
    AllDetails,
}

impl Timeline {
    /// Message shown in place of the feed, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loaded(_) => None,
            Self::Empty => Some("No posts found"),
            Self::Failed(TimelineFailure::IdList) => Some("Failed to load tweets"),
            Self::Failed(TimelineFailure::AllDetails) => Some("Failed to load post details"),
        }
    }
}

/// Everything the profile page renders.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub user: User,
    pub timeline: Timeline,
}

/// Load the user and, once that succeeds, their feed.
///
/// # Errors
///
/// Returns a notice describing why the user could not be loaded. Feed
/// failures never fail the page; they are reported through [`Timeline`].
pub async fn load(api: &dyn ProfileApi, handle: &str) -> Result<ProfileView, Notice> {
    let user = load_user(api, handle).await?;
    let timeline = load_timeline(api, handle).await;
    Ok(ProfileView { user, timeline })
}

/// Fetch the user record.
///
/// # Errors
///
/// Returns a notice when the request fails or the payload lacks a user.
pub async fn load_user(api: &dyn ProfileApi, handle: &str) -> Result<User, Notice> {
    let response = api.fetch_user(handle).await.map_err(|e| {
        warn!(handle = %handle, "Failed to load user: {e}");
        user_failure(&e)
    })?;

    match response.user {
        Some(user) if response.code == 200 => Ok(user),
        _ => {
            let message = response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "User not found".to_string());
            warn!(handle = %handle, code = response.code, "API returned no user: {message}");
            Err(Notice::new(FailureKind::NotFound, PROFILE_ERROR_TITLE, message))
        }
    }
}

fn user_failure(err: &ApiError) -> Notice {
    let message = match err {
        ApiError::NotFound => "User not found",
        ApiError::Server { .. } | ApiError::Decode(_) => {
            err.body_text().unwrap_or("Failed to load user")
        }
        ApiError::Connection(_) => "Unable to connect to the server. Please try again.",
    };
    Notice::new(FailureKind::from(err), PROFILE_ERROR_TITLE, message)
}

/// Fetch the post ID list, then every post's detail concurrently.
///
/// Individual detail failures are dropped; only a feed where nothing at all
/// loaded is reported as a failure.
pub async fn load_timeline(api: &dyn ProfileApi, handle: &str) -> Timeline {
    let ids = match api.fetch_tweet_ids(handle).await {
        Ok(ids) => ids,
        Err(e) => {
            warn!(handle = %handle, "Failed to load post IDs: {e}");
            return Timeline::Failed(TimelineFailure::IdList);
        }
    };

    if ids.is_empty() {
        return Timeline::Empty;
    }

    let requested = ids.len();
    let details = join_all(ids.iter().map(|id| load_tweet(api, handle, id))).await;
    let tweets: Vec<Tweet> = details.into_iter().flatten().collect();

    if tweets.is_empty() {
        warn!(handle = %handle, requested, "No post details could be loaded");
        return Timeline::Failed(TimelineFailure::AllDetails);
    }

    info!(handle = %handle, requested, loaded = tweets.len(), "Loaded timeline");
    Timeline::Loaded(tweets)
}

async fn load_tweet(api: &dyn ProfileApi, handle: &str, id: &str) -> Option<Tweet> {
    match api.fetch_tweet(handle, id).await {
        Ok(response) => {
            if response.tweet.is_none() {
                debug!(id = %id, "Post detail had no tweet");
            }
            response.tweet
        }
        Err(e) => {
            debug!(id = %id, "Skipping post: {e}");
            None
        }
    }
}
