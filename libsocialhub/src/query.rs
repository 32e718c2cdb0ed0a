//! Derived views over the post collection
//!
//! Pure functions the UI layer calls on every render: aggregate dashboard
//! statistics and the filtered/sorted history list. Nothing here mutates
//! state and nothing here fails; a query that matches no posts yields an
//! empty result.

use serde::{Deserialize, Serialize};

use crate::registry::PlatformRegistry;
use crate::types::{Post, PostStatus};

/// How many posts the dashboard's "recent" panel shows.
pub const RECENT_POSTS_LIMIT: usize = 5;

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub published: usize,
    pub scheduled: usize,
    pub connected_platforms: usize,
}

/// Compute dashboard statistics.
///
/// The connected-platform count comes from the registry, not from posts.
pub fn summarize(posts: &[Post], registry: &PlatformRegistry) -> DashboardStats {
    DashboardStats {
        total_posts: posts.len(),
        published: posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .count(),
        scheduled: posts
            .iter()
            .filter(|p| p.status == PostStatus::Scheduled)
            .count(),
        connected_platforms: registry.connected_count(),
    }
}

/// The most recently created posts.
///
/// The store keeps the collection newest-first, so these are simply the
/// leading elements.
pub fn recent_posts(posts: &[Post], limit: usize) -> &[Post] {
    &posts[..limit.min(posts.len())]
}

/// Sort direction for the history view, by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(Self::NewestFirst),
            "oldest" => Ok(Self::OldestFirst),
            _ => Err(format!(
                "Invalid sort order: '{}'. Valid options: newest, oldest",
                s
            )),
        }
    }
}

/// Filter and sort parameters for the history view.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    /// Case-insensitive substring match against content; empty matches all.
    pub search: String,
    /// Status to match; `None` matches all statuses.
    pub status: Option<PostStatus>,
    pub sort: SortOrder,
}

/// Produce the history view: matching posts ordered by creation time.
///
/// The sort is stable, so posts sharing a timestamp keep their original
/// relative order in either direction.
pub fn filter_and_sort(posts: &[Post], query: &HistoryQuery) -> Vec<Post> {
    let needle = query.search.to_lowercase();

    let mut matched: Vec<Post> = posts
        .iter()
        .filter(|post| {
            let matches_search =
                needle.is_empty() || post.content.to_lowercase().contains(&needle);
            let matches_status = query.status.map_or(true, |s| post.status == s);
            matches_search && matches_status
        })
        .cloned()
        .collect();

    match query.sort {
        SortOrder::NewestFirst => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::OldestFirst => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    matched
}
