//! Platform identity and the connection abstraction
//!
//! Platforms form a closed set, so they are modeled as an enum rather than
//! looked up by string key. The string form ("twitter", "facebook", ...)
//! only exists at the boundary: callers hand the registry an identifier and
//! it is parsed exactly once.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod simulated;

/// Identifier for a supported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
}

impl PlatformId {
    /// All supported platforms in stable declared order.
    pub const ALL: [PlatformId; 4] = [
        PlatformId::Twitter,
        PlatformId::Facebook,
        PlatformId::Instagram,
        PlatformId::Linkedin,
    ];

    /// Stable lowercase identifier, as used on the wire and in CLIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
        }
    }

    /// Canonical display name.
    ///
    /// The original UI derived history labels by capitalizing the raw id,
    /// which produced "Twitter" where the registry says "Twitter/X". The
    /// canonical name is authoritative everywhere here.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter/X",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Linkedin => "LinkedIn",
        }
    }

    /// Brand color as a hex string, display metadata only.
    pub fn brand_color(&self) -> &'static str {
        match self {
            Self::Twitter => "#1DA1F2",
            Self::Facebook => "#1877F2",
            Self::Instagram => "#E4405F",
            Self::Linkedin => "#0A66C2",
        }
    }
}

impl std::fmt::Display for PlatformId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlatformId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitter" => Ok(Self::Twitter),
            "facebook" => Ok(Self::Facebook),
            "instagram" => Ok(Self::Instagram),
            "linkedin" => Ok(Self::Linkedin),
            _ => Err(format!(
                "'{}' is not a supported platform (twitter, facebook, instagram, linkedin)",
                s
            )),
        }
    }
}

/// A platform entry as held by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPlatform {
    pub id: PlatformId,
    pub name: String,
    pub color: String,
    pub connected: bool,
    pub requires_auth: bool,
}

impl SocialPlatform {
    /// Seed an entry from the platform's built-in metadata, disconnected.
    pub fn new(id: PlatformId) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            color: id.brand_color().to_string(),
            connected: false,
            requires_auth: true,
        }
    }
}

/// The external round-trip performed when connecting a platform.
///
/// Connecting is the only suspending operation in the domain. The concrete
/// implementation is swappable: the shipped [`simulated::SimulatedConnector`]
/// sleeps for a fixed latency, a real one would drive an OAuth flow. There
/// is no cancellation; a caller that loses interest simply drops the result.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Perform the connection round-trip for a platform.
    ///
    /// # Errors
    ///
    /// Returns `SocialHubError::Connection` if the round-trip fails. The
    /// registry leaves the platform's `connected` flag unchanged in that
    /// case.
    async fn connect(&self, platform: PlatformId) -> Result<()>;
}
