//! SocialHub - post management for multi-platform social publishing
//!
//! This library provides the core domain model behind SocialHub: an in-memory
//! post store, pure query functions for dashboard and history views, and a
//! registry of connectable platforms with a simulated connection round-trip.

pub mod config;
pub mod error;
pub mod logging;
pub mod platforms;
pub mod query;
pub mod registry;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SocialHubError};
pub use platforms::{Connector, PlatformId, SocialPlatform};
pub use query::{DashboardStats, HistoryQuery, SortOrder};
pub use registry::PlatformRegistry;
pub use service::SocialHub;
pub use store::PostStore;
pub use types::{Post, PostDraft, PostStatus};
