//! Simulated connector
//!
//! Stands in for the real authorization round-trip: sleeps for a fixed
//! latency and then reports success or a configured failure. Call counts
//! and a log of attempted platforms are recorded so tests can verify
//! behavior without credentials or network access.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::error::{Result, SocialHubError};
use crate::platforms::{Connector, PlatformId};

/// Latency of the simulated round-trip when none is given (matches the
/// original app's 2s connect spinner).
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

pub struct SimulatedConnector {
    delay: Duration,
    succeeds: bool,
    error: Option<String>,
    call_count: Arc<Mutex<usize>>,
    attempted: Arc<Mutex<Vec<PlatformId>>>,
}

impl Default for SimulatedConnector {
    fn default() -> Self {
        Self::with_delay(DEFAULT_LATENCY)
    }
}

impl SimulatedConnector {
    /// Connector that succeeds after the given latency.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            succeeds: true,
            error: None,
            call_count: Arc::new(Mutex::new(0)),
            attempted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Connector that succeeds immediately, for tests.
    pub fn instant() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    /// Connector that fails every attempt with the given message.
    pub fn failing(error: &str) -> Self {
        Self {
            succeeds: false,
            error: Some(error.to_string()),
            ..Self::instant()
        }
    }

    /// Number of round-trips attempted so far.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Platforms attempted, in call order.
    pub fn attempted(&self) -> Vec<PlatformId> {
        self.attempted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for SimulatedConnector {
    async fn connect(&self, platform: PlatformId) -> Result<()> {
        *self.call_count.lock().unwrap() += 1;
        self.attempted.lock().unwrap().push(platform);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if self.succeeds {
            Ok(())
        } else {
            let message = self
                .error
                .clone()
                .unwrap_or_else(|| "simulated connection failure".to_string());
            Err(SocialHubError::Connection(message))
        }
    }
}
