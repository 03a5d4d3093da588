use tracing::debug;

use crate::remote::{PlayerMode, RemoteCommand};

/// What the bridge saw on both players when a notification arrived
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Local player is playing audio
    pub local_audio: bool,
    /// The playing local item carries the remote-sourced marker
    pub marked_item: bool,
    /// Bridge believes LMS audio is playing locally
    pub bridge_playing: bool,
    pub mode: PlayerMode,
    pub state_changing: bool,
    pub busy: bool,
}

impl Observation {
    pub fn remote_sourced_audio(&self) -> bool {
        self.local_audio && self.marked_item
    }
}

/// Which local condition makes a notification ours to forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    LocalAudio,
    RemoteSourcedAudio,
    BridgePlaying,
}

/// Conditions under which a local notification is a genuine user action and
/// not an echo of something the LMS player did.
#[derive(Debug, Clone, Copy)]
pub struct Gate {
    pub name: &'static str,
    pub source: Source,
    /// Accepted LMS modes; empty accepts any mode
    pub modes: &'static [PlayerMode],
    pub skip_while_changing: bool,
    pub skip_while_busy: bool,
}

pub const PAUSE: Gate = Gate {
    name: "pause",
    source: Source::RemoteSourcedAudio,
    modes: &[PlayerMode::Play],
    skip_while_changing: false,
    skip_while_busy: false,
};

pub const RESUME: Gate = Gate {
    name: "resume",
    source: Source::RemoteSourcedAudio,
    modes: &[PlayerMode::Pause],
    skip_while_changing: false,
    skip_while_busy: false,
};

pub const SPEED: Gate = Gate {
    name: "speed",
    source: Source::RemoteSourcedAudio,
    modes: &[PlayerMode::Play],
    skip_while_changing: false,
    skip_while_busy: false,
};

pub const SEEK: Gate = Gate {
    name: "seek",
    source: Source::BridgePlaying,
    modes: &[],
    skip_while_changing: true,
    skip_while_busy: true,
};

// Checked from inside the start handler, which holds the busy flag itself.
pub const TRACK_JUMP: Gate = Gate {
    name: "track-jump",
    source: Source::BridgePlaying,
    modes: &[],
    skip_while_changing: true,
    skip_while_busy: false,
};

pub const STOP: Gate = Gate {
    name: "stop",
    source: Source::LocalAudio,
    modes: &[PlayerMode::Play, PlayerMode::Pause],
    skip_while_changing: false,
    skip_while_busy: false,
};

impl Gate {
    pub fn allows(&self, observed: &Observation) -> bool {
        let source = match self.source {
            Source::LocalAudio => observed.local_audio,
            Source::RemoteSourcedAudio => observed.remote_sourced_audio(),
            Source::BridgePlaying => observed.bridge_playing,
        };
        let mode = self.modes.is_empty() || self.modes.contains(&observed.mode);
        let changing = self.skip_while_changing && observed.state_changing;
        let busy = self.skip_while_busy && observed.busy;
        let allowed = source && mode && !changing && !busy;
        if !allowed {
            debug!(
                "Suppressed {}: source={}, mode={}, changing={}, busy={}",
                self.name, source, observed.mode, observed.state_changing, observed.busy
            );
        }
        allowed
    }
}

/// Fast forward skips ahead, rewind skips back; any speed in `0..=1` is normal
/// playback.
pub fn speed_command(speed: f64, step_secs: u32) -> Option<RemoteCommand> {
    let step = i64::from(step_secs);
    if speed > 1.0 {
        Some(RemoteCommand::SeekBy(step))
    } else if speed < 0.0 {
        Some(RemoteCommand::SeekBy(-step))
    } else {
        None
    }
}

/// Absolute seek target, truncated to whole seconds
pub fn seek_command(time_ms: i64) -> RemoteCommand {
    RemoteCommand::SeekTo((time_ms.max(0) / 1000) as u64)
}

/// Queue position the user jumped to, if it differs from what the LMS player
/// is playing.
pub fn track_jump(local_position: Option<usize>, remote_index: Option<usize>) -> Option<usize> {
    let position = local_position?;
    (Some(position) != remote_index).then_some(position)
}
