//! End-to-end compose flow through the service facade

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use libsocialhub::platforms::simulated::SimulatedConnector;
use libsocialhub::{PlatformId, PostDraft, PostStatus, SocialHub, SocialHubError};

fn hub() -> SocialHub {
    SocialHub::new(Arc::new(SimulatedConnector::instant()))
}

#[test]
fn compose_publishes_immediately_by_default() {
    let mut hub = hub();

    let post = hub
        .compose(PostDraft::new(
            "Hello world",
            vec![PlatformId::Twitter, PlatformId::Linkedin],
        ))
        .unwrap();

    assert_eq!(post.status, PostStatus::Published);
    assert!(post.published_at.is_some());
    assert!(post.scheduled_at.is_none());
    assert_eq!(post.platforms.len(), 2);
}

#[test]
fn compose_scheduled_defers_publication() {
    let mut hub = hub();
    let when = Utc::now() + Duration::days(1);

    let post = hub
        .compose(PostDraft::new("Later", vec![PlatformId::Facebook]).scheduled_for(Some(when)))
        .unwrap();

    assert_eq!(post.status, PostStatus::Scheduled);
    assert_eq!(post.scheduled_at, Some(when));
    assert!(post.published_at.is_none());

    // No mechanism fires the schedule; the post stays scheduled
    assert_eq!(hub.posts()[0].status, PostStatus::Scheduled);
}

#[test]
fn compose_assigns_unique_ids_across_many_posts() {
    let mut hub = hub();

    let mut ids = HashSet::new();
    for i in 0..50 {
        let post = hub
            .compose(PostDraft::new(
                format!("post number {}", i),
                vec![PlatformId::Twitter],
            ))
            .unwrap();
        assert!(ids.insert(post.id), "duplicate post id");
    }
}

#[test]
fn compose_keeps_newest_first_order() {
    let mut hub = hub();

    for content in ["first", "second", "third"] {
        hub.compose(PostDraft::new(content, vec![PlatformId::Twitter]))
            .unwrap();
    }

    let contents: Vec<&str> = hub.posts().iter().map(|p| p.content.as_str()).collect();
    assert_eq!(contents, vec!["third", "second", "first"]);
}

#[test]
fn compose_rejects_invalid_drafts() {
    let mut hub = hub();

    let empty = hub.compose(PostDraft::new("   ", vec![PlatformId::Twitter]));
    assert!(matches!(empty, Err(SocialHubError::Validation(_))));

    let no_platforms = hub.compose(PostDraft::new("Hello", vec![]));
    assert!(matches!(no_platforms, Err(SocialHubError::Validation(_))));

    let too_long = hub.compose(PostDraft::new("x".repeat(281), vec![PlatformId::Twitter]));
    assert!(matches!(too_long, Err(SocialHubError::Validation(_))));

    // Failed drafts leave the store untouched
    assert!(hub.posts().is_empty());
}

#[test]
fn compose_carries_images_in_order() {
    let mut hub = hub();

    let post = hub
        .compose(
            PostDraft::new("With images", vec![PlatformId::Instagram]).with_images(vec![
                "blob:a".to_string(),
                "blob:b".to_string(),
                "blob:c".to_string(),
            ]),
        )
        .unwrap();

    assert_eq!(post.images, vec!["blob:a", "blob:b", "blob:c"]);
}

#[test]
fn dashboard_counts_mixed_statuses() {
    let mut hub = hub();
    let when = Utc::now() + Duration::hours(1);

    hub.compose(PostDraft::new("now", vec![PlatformId::Twitter]))
        .unwrap();
    hub.compose(PostDraft::new("now too", vec![PlatformId::Twitter]))
        .unwrap();
    hub.compose(PostDraft::new("later", vec![PlatformId::Twitter]).scheduled_for(Some(when)))
        .unwrap();

    let stats = hub.dashboard();
    assert_eq!(stats.total_posts, 3);
    assert_eq!(stats.published, 2);
    assert_eq!(stats.scheduled, 1);
}

#[test]
fn recent_posts_caps_at_five() {
    let mut hub = hub();

    for i in 0..7 {
        hub.compose(PostDraft::new(format!("post {}", i), vec![PlatformId::Twitter]))
            .unwrap();
    }

    let recent = hub.recent_posts();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].content, "post 6");
    assert_eq!(recent[4].content, "post 2");
}
