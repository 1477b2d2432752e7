//! Change broadcast configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for the real-time change feed
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastConfig {
    /// Upper bound on one delivery to one subscriber, in milliseconds
    #[serde(default = "default_send_timeout_ms")]
    pub send_timeout_ms: u64,

    /// Outbound messages buffered per subscriber before sends start waiting
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl BroadcastConfig {
    /// Send timeout as Duration
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    /// Validate broadcast configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.send_timeout_ms == 0 || self.send_timeout_ms > 60_000 {
            return Err(ValidationError::InvalidSendTimeout);
        }
        if self.channel_capacity == 0 {
            return Err(ValidationError::InvalidChannelCapacity);
        }
        Ok(())
    }
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            send_timeout_ms: default_send_timeout_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_send_timeout_ms() -> u64 {
    1_000
}

fn default_channel_capacity() -> usize {
    32
}
