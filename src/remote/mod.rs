use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod command;
pub mod track;

pub use command::{RemoteAction, RemoteCommand};
pub use track::RemoteTrack;

/// Transport mode reported by the LMS player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum PlayerMode {
    Play,
    Pause,
    #[default]
    Stop,
    Other(String),
}

impl PlayerMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Stop => "stop",
            Self::Other(mode) => mode,
        }
    }
}

impl From<&str> for PlayerMode {
    fn from(value: &str) -> Self {
        match value {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "stop" => Self::Stop,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PlayerMode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<PlayerMode> for String {
    fn from(mode: PlayerMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for PlayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Control handle of the LMS player.
///
/// State getters return the last known values and never block; the
/// implementation refreshes them on its own. Commands go over the wire.
#[async_trait]
pub trait RemotePlayer: Send + Sync {
    fn player_id(&self) -> String;

    fn mode(&self) -> PlayerMode;

    /// Elapsed seconds of the current track
    fn time(&self) -> f64;

    /// Last known playlist position
    fn cur_index(&self) -> Option<usize>;

    /// The LMS player is switching state itself (track change, seek, ...)
    fn state_changing(&self) -> bool;

    async fn play(&self) -> anyhow::Result<()>;

    async fn pause(&self) -> anyhow::Result<()>;

    async fn unpause(&self) -> anyhow::Result<()>;

    async fn stop(&self) -> anyhow::Result<()>;

    async fn send_command(&self, command: &str) -> anyhow::Result<()>;

    async fn cur_playlist(&self, force_refresh: bool) -> anyhow::Result<Vec<RemoteTrack>>;
}
