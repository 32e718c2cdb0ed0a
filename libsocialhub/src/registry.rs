//! Platform registry
//!
//! Owns the fixed set of platform entries and their connection state. The
//! connection round-trip itself goes through an injected [`Connector`], so
//! the simulated implementation can be swapped for a real one without
//! touching the registry. State is process-local and resets on restart;
//! there is no external integration to stay in sync with.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Result, SocialHubError};
use crate::platforms::{Connector, PlatformId, SocialPlatform};

pub struct PlatformRegistry {
    platforms: Vec<SocialPlatform>,
    connector: Arc<dyn Connector>,
}

impl PlatformRegistry {
    /// Create a registry seeded with every supported platform, all
    /// disconnected, in declared order.
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            platforms: PlatformId::ALL.iter().map(|&id| SocialPlatform::new(id)).collect(),
            connector,
        }
    }

    /// All platforms in stable declared order.
    pub fn list(&self) -> &[SocialPlatform] {
        &self.platforms
    }

    /// Look up a platform by its string identifier.
    ///
    /// # Errors
    ///
    /// Returns `SocialHubError::NotFound` if the identifier is not one of
    /// the supported platforms.
    pub fn get(&self, id: &str) -> Result<&SocialPlatform> {
        let platform_id = parse_id(id)?;
        Ok(self.entry(platform_id))
    }

    /// Number of currently connected platforms.
    pub fn connected_count(&self) -> usize {
        self.platforms.iter().filter(|p| p.connected).count()
    }

    /// Connect a platform.
    ///
    /// Performs the connector round-trip and, on success, flips the entry's
    /// `connected` flag and returns it. Already-connected platforms still go
    /// through the round-trip and simply stay connected.
    ///
    /// # Errors
    ///
    /// Returns `SocialHubError::NotFound` for an unknown identifier (the
    /// registry is left untouched), or propagates the connector's
    /// `Connection` error, in which case `connected` is unchanged.
    pub async fn connect(&mut self, id: &str) -> Result<&SocialPlatform> {
        let platform_id = parse_id(id)?;

        debug!(platform = %platform_id, "starting connection round-trip");
        self.connector.connect(platform_id).await?;

        let entry = self.entry_mut(platform_id);
        entry.connected = true;
        info!(platform = %platform_id, "platform connected");
        Ok(self.entry(platform_id))
    }

    /// Disconnect a platform.
    ///
    /// Synchronous and idempotent: disconnecting an already-disconnected
    /// platform succeeds and leaves it disconnected.
    ///
    /// # Errors
    ///
    /// Returns `SocialHubError::NotFound` for an unknown identifier.
    pub fn disconnect(&mut self, id: &str) -> Result<&SocialPlatform> {
        let platform_id = parse_id(id)?;

        let entry = self.entry_mut(platform_id);
        if entry.connected {
            entry.connected = false;
            info!(platform = %platform_id, "platform disconnected");
        }
        Ok(self.entry(platform_id))
    }

    fn entry(&self, id: PlatformId) -> &SocialPlatform {
        // The registry always holds every variant
        self.platforms.iter().find(|p| p.id == id).unwrap()
    }

    fn entry_mut(&mut self, id: PlatformId) -> &mut SocialPlatform {
        self.platforms.iter_mut().find(|p| p.id == id).unwrap()
    }
}

fn parse_id(id: &str) -> Result<PlatformId> {
    PlatformId::from_str(id).map_err(|_| SocialHubError::NotFound(id.to_string()))
}
