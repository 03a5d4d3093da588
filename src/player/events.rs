/// Local player notifications the bridge reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Playback has started (including the next track of the queue)
    Started,
    /// Playback was paused
    Paused,
    /// Playback was resumed after a pause
    Resumed,
    /// Playback reached the end of the queue
    Ended,
    /// Playback was stopped by the user
    Stopped,
    /// Fast forward / rewind speed changed
    SpeedChanged { speed: f64 },
    /// User seeked; both values in milliseconds
    Seek { time_ms: i64, offset_ms: i64 },
    /// Unknown notification
    Unknown(String),
}

impl PlayerEvent {
    /// Map a host callback name and its numeric arguments to an event.
    pub fn from_event_name(name: &str, args: &[f64]) -> Self {
        let arg = |index: usize| args.get(index).copied().unwrap_or(0.0);
        match name {
            "onPlayBackStarted" => Self::Started,
            "onPlayBackPaused" => Self::Paused,
            "onPlayBackResumed" => Self::Resumed,
            "onPlayBackEnded" => Self::Ended,
            "onPlayBackStopped" => Self::Stopped,
            "onPlayBackSpeedChanged" => Self::SpeedChanged { speed: arg(0) },
            "onPlayBackSeek" => Self::Seek {
                time_ms: arg(0) as i64,
                offset_ms: arg(1) as i64,
            },
            _ => Self::Unknown(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Started => "started",
            Self::Paused => "paused",
            Self::Resumed => "resumed",
            Self::Ended => "ended",
            Self::Stopped => "stopped",
            Self::SpeedChanged { .. } => "speed-changed",
            Self::Seek { .. } => "seek",
            Self::Unknown(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_event_name() {
        assert_eq!(
            PlayerEvent::from_event_name("onPlayBackPaused", &[]),
            PlayerEvent::Paused
        );
        assert_eq!(
            PlayerEvent::from_event_name("onPlayBackSpeedChanged", &[-2.0]),
            PlayerEvent::SpeedChanged { speed: -2.0 }
        );
        assert_eq!(
            PlayerEvent::from_event_name("onPlayBackSeek", &[12345.0, 5000.0]),
            PlayerEvent::Seek {
                time_ms: 12345,
                offset_ms: 5000
            }
        );
    }

    #[test]
    fn test_missing_arguments_default_to_zero() {
        assert_eq!(
            PlayerEvent::from_event_name("onPlayBackSeek", &[]),
            PlayerEvent::Seek {
                time_ms: 0,
                offset_ms: 0
            }
        );
    }

    #[test]
    fn test_unknown_event() {
        let event = PlayerEvent::from_event_name("onQueueNextItem", &[]);
        assert_eq!(event, PlayerEvent::Unknown("onQueueNextItem".to_string()));
        assert_eq!(event.name(), "onQueueNextItem");
    }
}
