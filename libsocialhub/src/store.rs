//! In-memory post store
//!
//! Owns the post collection exclusively; every mutation goes through
//! [`PostStore::create`]. Posts are kept newest-first and are append-only:
//! there is no update or delete, and a scheduled post never transitions on
//! its own.

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::error::{Result, SocialHubError};
use crate::types::{Post, PostDraft, PostStatus};

/// Maximum post length in characters, inclusive.
pub const MAX_CONTENT_CHARS: usize = 280;

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over an existing collection, assumed newest-first.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Validate a draft and add it to the store.
    ///
    /// Content is stored trimmed. A scheduled draft becomes a `scheduled`
    /// post carrying the draft's timestamp; anything else is published on
    /// the spot with `published_at = now`. The new post is prepended so the
    /// collection stays newest-first.
    ///
    /// # Errors
    ///
    /// Returns `SocialHubError::Validation` if the trimmed content is empty
    /// or over [`MAX_CONTENT_CHARS`], or if no platform is targeted.
    pub fn create(&mut self, draft: PostDraft) -> Result<Post> {
        let content = draft.content.trim().to_string();
        validate_draft(&content, &draft)?;

        let now = Utc::now();

        if let Some(at) = draft.scheduled_at {
            if draft.scheduled && at < now {
                // Soft constraint: the compose form prevents past dates, but
                // the store accepts them.
                warn!(scheduled_at = %at, "scheduled time is in the past");
            }
        }

        let (status, scheduled_at, published_at) = if draft.scheduled {
            (PostStatus::Scheduled, draft.scheduled_at, None)
        } else {
            (PostStatus::Published, None, Some(now))
        };

        let post = Post {
            id: Uuid::new_v4().to_string(),
            content,
            images: draft.images,
            platforms: draft.platforms,
            status,
            created_at: now,
            scheduled_at,
            published_at,
        };

        self.posts.insert(0, post.clone());
        Ok(post)
    }

    /// All posts, newest-first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by id.
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn validate_draft(trimmed_content: &str, draft: &PostDraft) -> Result<()> {
    if trimmed_content.is_empty() {
        return Err(SocialHubError::Validation(
            "content cannot be empty".to_string(),
        ));
    }

    let chars = trimmed_content.chars().count();
    if chars > MAX_CONTENT_CHARS {
        return Err(SocialHubError::Validation(format!(
            "content exceeds {} character limit (got {} characters)",
            MAX_CONTENT_CHARS, chars
        )));
    }

    if draft.platforms.is_empty() {
        return Err(SocialHubError::Validation(
            "at least one platform must be selected".to_string(),
        ));
    }

    Ok(())
}
