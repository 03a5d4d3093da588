use std::fmt;

/// Free-form LMS commands the bridge sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteCommand {
    Power(bool),
    /// Relative seek in seconds
    SeekBy(i64),
    /// Absolute seek in whole seconds
    SeekTo(u64),
    PlaylistIndex(usize),
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(on) => write!(f, "power {}", u8::from(*on)),
            Self::SeekBy(seconds) => write!(f, "time {:+}", seconds),
            Self::SeekTo(seconds) => write!(f, "time {}", seconds),
            Self::PlaylistIndex(index) => write!(f, "playlist index {}", index),
        }
    }
}

/// What the bridge asks of the LMS player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    Pause,
    Unpause,
    Stop,
    Command(RemoteCommand),
}

impl fmt::Display for RemoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pause => f.write_str("pause"),
            Self::Unpause => f.write_str("unpause"),
            Self::Stop => f.write_str("stop"),
            Self::Command(command) => command.fmt(f),
        }
    }
}
