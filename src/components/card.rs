//! Card components for displaying posts.
//!
//! This module provides maud components for rendering post cards, quoted
//! posts and the feed that holds them.

use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped, Render};

use crate::api::Tweet;
use crate::components::media::TweetMedia;
use crate::format::{format_count, format_relative, web_link};

const REPLY_ICON: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M21.99 4c0-1.1-.89-2-1.99-2H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h14l4 4-.01-18z"/></svg>"#;
const RETWEET_ICON: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M7 7h10v3l4-4-4-4v3H5v6h2V7zm10 10H7v-3l-4 4 4 4v-3h12v-6h-2v4z"/></svg>"#;
const LIKE_ICON: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z"/></svg>"#;
const VIEW_ICON: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M12 4.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 11-7.5c-1.73-4.39-6-7.5-11-7.5zM12 17c-2.76 0-5-2.24-5-5s2.24-5 5-5 5 2.24 5 5-2.24 5-5 5zm0-8c-1.66 0-3 1.34-3 3s1.34 3 3 3 3-1.34 3-3-1.34-3-3-3z"/></svg>"#;
const EXTERNAL_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M14 3v2h3.59l-9.83 9.83 1.41 1.41L19 6.41V10h2V3h-7zm-2 16H5V5h7V3H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2v-7h-2v7h-7z"/></svg>"#;

/// A post card.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::TweetCard;
///
/// let card = TweetCard::new(&tweet, chrono::Utc::now());
/// ```
#[derive(Debug, Clone)]
pub struct TweetCard<'a> {
    pub tweet: &'a Tweet,
    /// Reference time for relative timestamps.
    pub now: DateTime<Utc>,
}

impl<'a> TweetCard<'a> {
    #[must_use]
    pub const fn new(tweet: &'a Tweet, now: DateTime<Utc>) -> Self {
        Self { tweet, now }
    }
}

impl Render for TweetCard<'_> {
    fn render(&self) -> Markup {
        let tweet = self.tweet;

        html! {
            article class="tweet-card" data-tweet-id=(tweet.id) {
                div class="tweet-header" {
                    small class="tweet-date" title=(tweet.created_at) {
                        (format_relative(&tweet.created_at, self.now))
                    }
                    @if let Some(link) = web_link(&tweet.url) {
                        a href=(link) target="_blank" rel="noopener noreferrer" class="tweet-link" title="Open original" {
                            (PreEscaped(EXTERNAL_ICON))
                        }
                    }
                }
                p class="tweet-text" { (tweet.text) }
                @if let Some(media) = &tweet.media {
                    (TweetMedia::new(media))
                }
                @if let Some(quote) = &tweet.quote {
                    (QuoteCard::new(quote))
                }
                div class="tweet-stats" {
                    (Stat::new("Replies", REPLY_ICON, tweet.replies))
                    (Stat::new("Retweets", RETWEET_ICON, tweet.retweets))
                    (Stat::new("Likes", LIKE_ICON, tweet.likes))
                    @if let Some(views) = tweet.views() {
                        (Stat::new("Views", VIEW_ICON, views))
                    }
                }
            }
        }
    }
}

/// A quoted post nested inside a card: author line and text only.
#[derive(Debug, Clone)]
pub struct QuoteCard<'a> {
    pub quote: &'a Tweet,
}

impl<'a> QuoteCard<'a> {
    #[must_use]
    pub const fn new(quote: &'a Tweet) -> Self {
        Self { quote }
    }
}

impl Render for QuoteCard<'_> {
    fn render(&self) -> Markup {
        let quote = self.quote;

        html! {
            blockquote class="tweet-quote" {
                @if let Some(author) = &quote.author {
                    div class="quote-author" {
                        @if !author.avatar_url.is_empty() {
                            img class="quote-avatar" src=(author.avatar_url) alt=(author.name) width="20" height="20";
                        }
                        strong { (author.name) }
                        span class="muted" { "@" (author.screen_name) }
                    }
                }
                p class="tweet-text" { (quote.text) }
            }
        }
    }
}

/// One engagement counter.
struct Stat<'a> {
    label: &'a str,
    icon: &'static str,
    count: i64,
}

impl<'a> Stat<'a> {
    const fn new(label: &'a str, icon: &'static str, count: i64) -> Self {
        Self { label, icon, count }
    }
}

impl Render for Stat<'_> {
    fn render(&self) -> Markup {
        html! {
            span class="tweet-stat" title=(self.label) {
                (PreEscaped(self.icon))
                " "
                (format_count(self.count))
            }
        }
    }
}

/// The list of post cards.
#[derive(Debug, Clone)]
pub struct TweetFeed<'a> {
    pub tweets: &'a [Tweet],
    pub now: DateTime<Utc>,
}

impl<'a> TweetFeed<'a> {
    #[must_use]
    pub const fn new(tweets: &'a [Tweet], now: DateTime<Utc>) -> Self {
        Self { tweets, now }
    }
}

impl Render for TweetFeed<'_> {
    fn render(&self) -> Markup {
        html! {
            section id="tweetsList" class="tweet-feed" {
                @for tweet in self.tweets {
                    (TweetCard::new(tweet, self.now))
                }
            }
        }
    }
}
