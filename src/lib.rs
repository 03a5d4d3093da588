//! Bridge between a local media player and a Squeezebox (LMS) player.
//!
//! The local player drives [`PlaybackBridge`] through lifecycle notifications;
//! the bridge turns genuine user actions into LMS commands and mirrors the LMS
//! playlist into the local queue.

pub mod bridge;
pub mod config;
pub mod error;
pub mod logging;
pub mod player;
pub mod remote;

pub use crate::bridge::{spawn_event_loop, PlaybackBridge};
pub use crate::config::{BridgeConfig, WaitPolicy};
pub use crate::error::{BridgeError, Result};
pub use crate::player::{LocalPlayer, LocalQueue, MirrorQueue, PlayableEntry, PlayerEvent};
pub use crate::remote::{PlayerMode, RemoteCommand, RemotePlayer, RemoteTrack};
