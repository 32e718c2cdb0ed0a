//! Core types for SocialHub

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platforms::PlatformId;

/// A post as held by the store.
///
/// Posts are append-only: once created they are never edited or deleted,
/// and no background mechanism moves a scheduled post to published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    pub platforms: Vec<PlatformId>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Lifecycle status of a post.
///
/// `scheduled` implies `scheduled_at` is set and `published_at` absent;
/// `published` implies the reverse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
    Failed,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "scheduled" => Ok(Self::Scheduled),
            "published" => Ok(Self::Published),
            "failed" => Ok(Self::Failed),
            _ => Err(format!(
                "Invalid status: '{}'. Valid options: draft, scheduled, published, failed",
                s
            )),
        }
    }
}

/// Compose-form input prior to creation of a [`Post`].
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub content: String,
    pub platforms: Vec<PlatformId>,
    pub images: Vec<String>,
    pub scheduled: bool,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl PostDraft {
    pub fn new(content: impl Into<String>, platforms: Vec<PlatformId>) -> Self {
        Self {
            content: content.into(),
            platforms,
            ..Default::default()
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Mark the draft for deferred publication.
    ///
    /// The timestamp is optional; the compose form allows ticking the
    /// schedule box without picking a date.
    pub fn scheduled_for(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.scheduled = true;
        self.scheduled_at = at;
        self
    }
}
