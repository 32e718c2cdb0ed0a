//! Service facade
//!
//! [`SocialHub`] is the single entry point a UI layer talks to. It owns the
//! post store and the platform registry and routes every operation through
//! their public APIs, so no caller ever touches the underlying collections
//! directly.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::platforms::simulated::SimulatedConnector;
use crate::platforms::{Connector, PlatformId, SocialPlatform};
use crate::query::{self, DashboardStats, HistoryQuery, RECENT_POSTS_LIMIT};
use crate::registry::PlatformRegistry;
use crate::store::PostStore;
use crate::types::{Post, PostDraft};

pub struct SocialHub {
    store: PostStore,
    registry: PlatformRegistry,
    /// Platforms with a connection round-trip in flight. Mirrors the
    /// compose UI's disabled button: a second connect for the same platform
    /// is not issued while one is outstanding.
    connecting: HashSet<PlatformId>,
}

impl SocialHub {
    /// Create a hub with the given connector and an empty store.
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            store: PostStore::new(),
            registry: PlatformRegistry::new(connector),
            connecting: HashSet::new(),
        }
    }

    /// Create a hub using the simulated connector at the configured latency.
    pub fn from_config(config: &Config) -> Self {
        let connector = SimulatedConnector::with_delay(Duration::from_millis(
            config.connect.latency_ms,
        ));
        Self::new(Arc::new(connector))
    }

    /// Validate and store a composed post.
    pub fn compose(&mut self, draft: PostDraft) -> Result<Post> {
        self.store.create(draft)
    }

    /// Aggregate statistics for the dashboard.
    pub fn dashboard(&self) -> DashboardStats {
        query::summarize(self.store.posts(), &self.registry)
    }

    /// The dashboard's recent-posts panel.
    pub fn recent_posts(&self) -> &[Post] {
        query::recent_posts(self.store.posts(), RECENT_POSTS_LIMIT)
    }

    /// The filtered and sorted history view.
    pub fn history(&self, query: &HistoryQuery) -> Vec<Post> {
        query::filter_and_sort(self.store.posts(), query)
    }

    /// All posts, newest-first.
    pub fn posts(&self) -> &[Post] {
        self.store.posts()
    }

    /// All platforms in declared order.
    pub fn platforms(&self) -> &[SocialPlatform] {
        self.registry.list()
    }

    /// Whether a connect round-trip is currently outstanding for the
    /// platform. Callers use this to disable the connect action.
    pub fn is_connecting(&self, id: PlatformId) -> bool {
        self.connecting.contains(&id)
    }

    /// Connect a platform, debounced.
    ///
    /// If a round-trip for this platform is already in flight the call is
    /// not re-issued; the current entry is returned unchanged. The in-flight
    /// marker is cleared when the round-trip completes, on failure too.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown identifier, or the connector's failure.
    pub async fn connect(&mut self, id: &str) -> Result<SocialPlatform> {
        let current = self.registry.get(id)?.clone();
        if self.connecting.contains(&current.id) {
            debug!(platform = %current.id, "connect already in flight, skipping");
            return Ok(current);
        }

        self.connecting.insert(current.id);
        let result = self.registry.connect(id).await.map(|p| p.clone());
        self.connecting.remove(&current.id);

        result
    }

    /// Disconnect a platform. Synchronous and idempotent.
    pub fn disconnect(&mut self, id: &str) -> Result<SocialPlatform> {
        self.registry.disconnect(id).map(|p| p.clone())
    }
}
