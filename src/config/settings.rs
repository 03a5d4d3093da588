use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{BridgeError, Result};

pub const DEFAULT_WEB_PORT: u16 = 52307;
pub const DEFAULT_ADDON_ID: &str = "plugin.audio.squeezebox";
pub const DEFAULT_SEEK_STEP_SECS: u32 = 10;

/// Bridge settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Port of the local stream server serving `/track/...`
    pub web_port: u16,
    /// Add-on id used in plugin URLs and the playlist view path
    pub addon_id: String,
    /// Seconds skipped per fast-forward / rewind notification
    pub seek_step_secs: u32,
    pub wait: WaitPolicy,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            web_port: DEFAULT_WEB_PORT,
            addon_id: DEFAULT_ADDON_ID.to_string(),
            seek_step_secs: DEFAULT_SEEK_STEP_SECS,
            wait: WaitPolicy::default(),
        }
    }
}

impl BridgeConfig {
    pub fn with_port(web_port: u16) -> Self {
        Self {
            web_port,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.web_port == 0 {
            return Err(BridgeError::InvalidPort(self.web_port));
        }
        Ok(())
    }

    /// Folder path of the add-on's own "current playlist" view
    pub fn playlist_view_path(&self) -> String {
        format!("plugin://{}/?action=currentplaylist", self.addon_id)
    }
}

/// Bounded poll used while the local player comes up after a start notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitPolicy {
    pub initial_delay_ms: u64,
    pub poll_interval_ms: u64,
    pub max_polls: u32,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            initial_delay_ms: 500,
            poll_interval_ms: 250,
            max_polls: 10,
        }
    }
}

impl WaitPolicy {
    /// A policy that never sleeps; the local player is polled exactly once per slot.
    pub fn immediate(max_polls: u32) -> Self {
        Self {
            initial_delay_ms: 0,
            poll_interval_ms: 0,
            max_polls,
        }
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Longest time a caller can be held up by this policy
    pub fn upper_bound(&self) -> Duration {
        self.initial_delay() + self.poll_interval() * self.max_polls
    }
}
