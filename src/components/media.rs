//! Photo and video attachments on post cards.

use maud::{html, Markup, Render};

use crate::api::{Media, Photo, Video};

/// A video player with an optional poster image.
#[derive(Debug, Clone)]
pub struct VideoPlayer<'a> {
    /// Source URL for the video
    pub src: &'a str,
    /// Optional poster image URL
    pub poster: Option<&'a str>,
}

impl<'a> VideoPlayer<'a> {
    /// Create a new video player.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self { src, poster: None }
    }

    /// Set a poster image for the video.
    #[must_use]
    pub fn with_poster(mut self, poster: &'a str) -> Self {
        self.poster = Some(poster).filter(|p| !p.is_empty());
        self
    }

    /// Infer the video MIME type from the source URL extension.
    fn inferred_type(&self) -> &'static str {
        let path = self.src.split(['?', '#']).next().unwrap_or_default();
        let extension = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match extension.as_str() {
            "webm" => "video/webm",
            "mov" => "video/quicktime",
            _ => "video/mp4",
        }
    }
}

impl Render for VideoPlayer<'_> {
    fn render(&self) -> Markup {
        html! {
            video class="tweet-video" controls preload="metadata" poster=[self.poster] {
                source src=(self.src) type=(self.inferred_type());
                "Your browser does not support the video tag."
            }
        }
    }
}

/// Photos laid out one per row, or in a two-column grid when there are several.
#[derive(Debug, Clone)]
pub struct PhotoGrid<'a> {
    pub photos: &'a [Photo],
}

impl Render for PhotoGrid<'_> {
    fn render(&self) -> Markup {
        let class = if self.photos.len() > 1 {
            "photo-grid multi"
        } else {
            "photo-grid"
        };

        html! {
            div class=(class) {
                @for photo in self.photos {
                    img src=(photo.url) alt="Post image" loading="lazy";
                }
            }
        }
    }
}

/// All attachments of a post.
#[derive(Debug, Clone)]
pub struct TweetMedia<'a> {
    pub media: &'a Media,
}

impl<'a> TweetMedia<'a> {
    #[must_use]
    pub const fn new(media: &'a Media) -> Self {
        Self { media }
    }
}

impl Render for TweetMedia<'_> {
    fn render(&self) -> Markup {
        html! {
            @if !self.media.is_empty() {
                div class="tweet-media" {
                    @if !self.media.photos.is_empty() {
                        (PhotoGrid { photos: &self.media.photos })
                    }
                    @for video in &self.media.videos {
                        (video_player(video))
                    }
                }
            }
        }
    }
}

fn video_player(video: &Video) -> VideoPlayer<'_> {
    VideoPlayer::new(&video.url).with_poster(&video.thumbnail_url)
}
