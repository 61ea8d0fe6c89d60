//! Profile page: header card plus the post feed.

use chrono::{DateTime, Utc};
use maud::{html, Markup, Render};

use crate::api::User;
use crate::components::{Alert, BaseLayout, ProtectedBadge, TweetFeed, VerificationBadge};
use crate::error::Notice;
use crate::format::{format_count, format_joined, format_url, web_link};
use crate::profile::{ProfileView, Timeline};

/// Render a loaded profile.
///
/// `now` is the reference time for relative post dates.
#[must_use]
pub fn render_profile_page(view: &ProfileView, now: DateTime<Utc>) -> Markup {
    let user = &view.user;
    let title = format!("{} (@{})", user.name, user.screen_name);

    let content = html! {
        div id="profileContent" {
            (ProfileHeader { user })
            section class="profile-feed" {
                h2 { "Posts" }
                (feed(&view.timeline, now))
            }
        }
    };

    let mut layout = BaseLayout::new(&title);
    if let Some(bio) = user.description() {
        layout = layout.with_description(bio);
    }
    layout.render(content)
}

/// Render the inline error panel shown when the user could not be loaded.
#[must_use]
pub fn render_profile_error_page(notice: &Notice) -> Markup {
    let content = html! {
        (Alert::error(&notice.message).with_title(&notice.title).with_id("errorState"))
        p { a href="/" { "Search for another account" } }
    };

    BaseLayout::new("Profile unavailable").render(content)
}

fn feed(timeline: &Timeline, now: DateTime<Utc>) -> Markup {
    match timeline {
        Timeline::Loaded(tweets) => TweetFeed::new(tweets, now).render(),
        other => {
            let message = other.message().unwrap_or("Failed to load posts");
            Alert::info(message).with_id("tweetsError").render()
        }
    }
}

struct ProfileHeader<'a> {
    user: &'a User,
}

impl Render for ProfileHeader<'_> {
    fn render(&self) -> Markup {
        let user = self.user;

        html! {
            section class="profile-header" {
                div class="profile-topbar" {
                    strong id="headerName" { (user.name) }
                    small class="muted" id="headerTweets" { (format_count(user.tweets)) " posts" }
                }

                @if let Some(banner) = user.banner_url() {
                    img id="banner" class="profile-banner" src=(banner) alt="Profile banner";
                }

                div class="profile-identity" {
                    img id="avatar" class="profile-avatar" src=(user.avatar_url()) alt=(format!("{}'s avatar", user.name));
                    a id="twitterLink" class="profile-external" href=(user.external_url()) target="_blank" rel="noopener noreferrer" {
                        "View on X"
                    }
                }

                h1 class="profile-name" {
                    span id="displayName" { (user.name) }
                    @if let Some(verification) = &user.verification {
                        (VerificationBadge::from_verification(verification))
                    }
                    @if user.protected {
                        (ProtectedBadge)
                    }
                }
                p id="username" class="muted" { "@" (user.screen_name) }

                @if let Some(bio) = user.description() {
                    p id="bio" class="profile-bio" { (bio) }
                }

                ul class="profile-meta" {
                    @if let Some(location) = user.location() {
                        li id="locationWrapper" { span id="location" { (location) } }
                    }
                    @if let Some(website) = user.website() {
                        li id="websiteWrapper" {
                            @if let Some(link) = web_link(website) {
                                a id="website" href=(link) target="_blank" rel="noopener noreferrer nofollow" {
                                    (format_url(link))
                                }
                            } @else {
                                span id="website" { (website) }
                            }
                        }
                    }
                    @if let Some(joined) = user.joined() {
                        li id="joinedWrapper" { span id="joined" { "Joined " (format_joined(joined)) } }
                    }
                }

                ul class="profile-stats" {
                    (stat("following", user.following, "Following"))
                    (stat("followers", user.followers, "Followers"))
                    (stat("tweets", user.tweets, "Posts"))
                    (stat("likes", user.likes, "Likes"))
                    (stat("media", user.media_count, "Media"))
                }
            }
        }
    }
}

fn stat(id: &str, count: i64, label: &str) -> Markup {
    html! {
        li { strong id=(id) { (format_count(count)) } " " span class="muted" { (label) } }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::api::{Tweet, Verification};
    use crate::error::FailureKind;
    use crate::profile::TimelineFailure;

    fn user() -> User {
        User {
            name: "Jack".to_string(),
            screen_name: "jack".to_string(),
            avatar_url: Some("https://p.example.com/a.jpg".to_string()),
            followers: 6_543_210,
            following: 4_321,
            tweets: 29_000,
            ..User::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_optional_sections_hidden() {
        let view = ProfileView {
            user: user(),
            timeline: Timeline::Empty,
        };
        let html = render_profile_page(&view, now()).into_string();

        assert!(html.contains("<title>Jack (@jack) - Profile Viewer</title>"));
        assert!(html.contains("29K posts"));
        assert!(html.contains("id=\"followers\">6.5M<"));
        assert!(html.contains("id=\"following\">4.3K<"));
        assert!(!html.contains("id=\"banner\""));
        assert!(!html.contains("verification-badge"));
        assert!(!html.contains("protected-badge"));
        assert!(!html.contains("id=\"bio\""));
        assert!(!html.contains("locationWrapper"));
        assert!(!html.contains("websiteWrapper"));
        assert!(!html.contains("joinedWrapper"));
        assert!(html.contains("href=\"https://twitter.com/jack\""));
        assert!(html.contains("No posts found"));
    }

    #[test]
    fn test_optional_sections_shown() {
        let mut user = user();
        user.banner_url = Some("https://p.example.com/b.jpg".to_string());
        user.description = Some("Bio <here>".to_string());
        user.location = Some("California".to_string());
        user.website = Some("https://www.example.com/some/page".to_string());
        user.joined = Some("Tue Mar 21 20:50:14 +0000 2006".to_string());
        user.protected = true;
        user.verification = Some(Verification {
            verified: true,
            kind: "Government".to_string(),
        });
        let view = ProfileView {
            user,
            timeline: Timeline::Failed(TimelineFailure::IdList),
        };
        let html = render_profile_page(&view, now()).into_string();

        assert!(html.contains("id=\"banner\""));
        assert!(html.contains("verified-icon gold"));
        assert!(html.contains("protected-badge"));
        assert!(html.contains("Bio &lt;here&gt;"));
        assert!(html.contains("California"));
        assert!(html.contains(">example.com/some/page<"));
        assert!(html.contains("Joined March 2006"));
        assert!(html.contains("Failed to load tweets"));
    }

    #[test]
    fn test_non_web_links_are_not_clickable() {
        let mut user = user();
        user.website = Some("javascript:alert(document.cookie)".to_string());
        user.url = Some("javascript:alert(2)".to_string());
        let view = ProfileView {
            user,
            timeline: Timeline::Loaded(vec![Tweet {
                id: "7".to_string(),
                url: "javascript:alert(3)".to_string(),
                text: "post".to_string(),
                ..Tweet::default()
            }]),
        };
        let html = render_profile_page(&view, now()).into_string();

        assert!(!html.contains("href=\"javascript:"));
        assert!(html.contains("<span id=\"website\">javascript:alert(document.cookie)</span>"));
        assert!(html.contains("href=\"https://twitter.com/jack\""));
        assert!(html.contains("data-tweet-id=\"7\""));
    }

    #[test]
    fn test_loaded_feed() {
        let view = ProfileView {
            user: user(),
            timeline: Timeline::Loaded(vec![Tweet {
                id: "42".to_string(),
                text: "first post".to_string(),
                ..Tweet::default()
            }]),
        };
        let html = render_profile_page(&view, now()).into_string();

        assert!(html.contains("id=\"tweetsList\""));
        assert!(html.contains("first post"));
        assert!(!html.contains("tweetsError"));
    }

    #[test]
    fn test_error_page() {
        let notice = Notice::new(FailureKind::NotFound, "This account doesn't exist", "User not found");
        let html = render_profile_error_page(&notice).into_string();

        assert!(html.contains("id=\"errorState\""));
        assert!(html.contains("User not found"));
        assert!(!html.contains("profileContent"));
    }
}
