//! Payload types returned by the backend profile API.
//!
//! The backend serialises absent strings as `""` rather than omitting them,
//! so the accessor methods below treat empty strings as missing.

use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::format::web_link;

/// Response of `GET /api/users/{handle}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserResponse {
    pub code: i64,
    pub message: Option<String>,
    pub user: Option<User>,
}

/// Response of `GET /api/users/{handle}/tweets`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TweetIdsResponse {
    pub username: Option<String>,
    /// May be `null` when the user has no posts.
    pub tweet_ids: Option<Vec<String>>,
}

/// Response of `GET /api/users/{handle}/tweets/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TweetResponse {
    pub code: i64,
    pub message: Option<String>,
    pub tweet: Option<Tweet>,
}

/// A user profile snapshot.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub screen_name: String,
    pub url: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub joined: Option<String>,
    pub followers: i64,
    pub following: i64,
    pub tweets: i64,
    pub likes: i64,
    pub media_count: i64,
    pub verification: Option<Verification>,
    pub protected: bool,
}

impl User {
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn banner_url(&self) -> Option<&str> {
        present(self.banner_url.as_ref())
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        present(self.description.as_ref())
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        present(self.location.as_ref())
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        present(self.website.as_ref())
    }

    #[must_use]
    pub fn joined(&self) -> Option<&str> {
        present(self.joined.as_ref())
    }

    /// Link to the profile on the source network.
    ///
    /// Falls back to the twitter.com profile when `url` is missing or is not
    /// an `http`/`https` link.
    #[must_use]
    pub fn external_url(&self) -> String {
        present(self.url.as_ref())
            .and_then(web_link)
            .map_or_else(
                || format!("https://twitter.com/{}", encode(&self.screen_name)),
                str::to_string,
            )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Verification {
    pub verified: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Verification {
    /// Business and government accounts get the gold checkmark.
    #[must_use]
    pub fn is_gold(&self) -> bool {
        matches!(self.kind.as_str(), "Business" | "Government")
    }
}

/// A single post.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Tweet {
    pub id: String,
    pub url: String,
    pub text: String,
    pub author: Option<Author>,
    pub replies: i64,
    pub retweets: i64,
    pub likes: i64,
    pub views: Option<i64>,
    pub created_at: String,
    pub media: Option<Media>,
    pub quote: Option<Box<Tweet>>,
}

impl Tweet {
    /// View count, hidden when unknown or zero.
    #[must_use]
    pub fn views(&self) -> Option<i64> {
        self.views.filter(|v| *v > 0)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub screen_name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Media {
    pub photos: Vec<Photo>,
    pub videos: Vec<Video>,
}

impl Media {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty() && self.videos.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Photo {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Video {
    pub url: String,
    pub thumbnail_url: String,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_with_empty_strings() {
        let json = r#"{
            "code": 200,
            "message": "OK",
            "user": {
                "screen_name": "jack",
                "name": "jack",
                "followers": 6000000,
                "description": "",
                "location": "",
                "banner_url": "https://pbs.example.com/banner.jpg",
                "website": null,
                "joined": "Tue Mar 21 20:50:14 +0000 2006",
                "protected": false,
                "verification": {"verified": true, "type": "Business"}
            }
        }"#;
        let response: UserResponse = serde_json::from_str(json).unwrap();
        let user = response.user.unwrap();

        assert_eq!(response.code, 200);
        assert_eq!(user.followers, 6_000_000);
        assert!(user.description().is_none());
        assert!(user.location().is_none());
        assert!(user.website().is_none());
        assert_eq!(user.banner_url(), Some("https://pbs.example.com/banner.jpg"));
        assert!(user.verification.as_ref().unwrap().is_gold());
        assert_eq!(user.external_url(), "https://twitter.com/jack");
    }

    #[test]
    fn test_external_url_ignores_non_web_links() {
        let mut user = User {
            screen_name: "jack".to_string(),
            url: Some("javascript:alert(2)".to_string()),
            ..User::default()
        };
        assert_eq!(user.external_url(), "https://twitter.com/jack");

        user.url = Some("https://x.com/jack".to_string());
        assert_eq!(user.external_url(), "https://x.com/jack");
    }

    #[test]
    fn test_tweet_ids_null() {
        let response: TweetIdsResponse =
            serde_json::from_str(r#"{"username": "jack", "tweet_ids": null}"#).unwrap();
        assert!(response.tweet_ids.is_none());
    }

    #[test]
    fn test_tweet_with_quote_and_media() {
        let json = r#"{
            "code": 200,
            "tweet": {
                "id": "1",
                "url": "https://x.com/jack/status/1",
                "text": "hello",
                "replies": 1,
                "retweets": 2,
                "likes": 3,
                "created_at": "2024-01-01T12:00:00Z",
                "media": {
                    "photos": [{"url": "https://pbs.example.com/1.jpg", "width": 10, "height": 10}],
                    "videos": [{"url": "https://video.example.com/1.mp4", "thumbnail_url": "https://pbs.example.com/t.jpg"}]
                },
                "quote": {
                    "id": "0",
                    "text": "quoted",
                    "author": {"name": "Other", "screen_name": "other", "avatar_url": "https://pbs.example.com/a.jpg"}
                }
            }
        }"#;
        let response: TweetResponse = serde_json::from_str(json).unwrap();
        let tweet = response.tweet.unwrap();

        assert!(tweet.views().is_none());
        let media = tweet.media.as_ref().unwrap();
        assert_eq!(media.photos.len(), 1);
        assert_eq!(media.videos.len(), 1);
        let quote = tweet.quote.unwrap();
        assert_eq!(quote.author.unwrap().screen_name, "other");
    }

    #[test]
    fn test_verification_kinds() {
        let plain = Verification {
            verified: true,
            kind: "Individual".to_string(),
        };
        let gov = Verification {
            verified: true,
            kind: "Government".to_string(),
        };
        assert!(!plain.is_gold());
        assert!(gov.is_gold());
    }
}
