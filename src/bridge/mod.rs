use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::BridgeConfig;
use crate::player::{EntryProperty, LocalPlayer, LocalQueue, PlayerEvent};
use crate::remote::{RemoteAction, RemoteCommand, RemotePlayer};

pub mod entry;
pub mod reconcile;
pub mod sync;
pub mod wait;

#[cfg(test)]
pub(crate) mod testing;

use reconcile::{Gate, Observation};

/// Clears the busy flag when the start handler returns, whichever way it returns.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn new(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl<'a> Drop for BusyGuard<'a> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Mediates between the local player and the LMS player for one local
/// playback session.
pub struct PlaybackBridge {
    remote: Arc<dyn RemotePlayer>,
    local: Arc<dyn LocalPlayer>,
    queue: Mutex<Option<Arc<dyn LocalQueue>>>,
    config: BridgeConfig,
    is_playing: AtomicBool,
    is_busy: AtomicBool,
    exiting: AtomicBool,
}

impl PlaybackBridge {
    pub fn new(
        remote: Arc<dyn RemotePlayer>,
        local: Arc<dyn LocalPlayer>,
        queue: Arc<dyn LocalQueue>,
        config: BridgeConfig,
    ) -> Self {
        info!(
            "Start monitoring events for player {} (stream port {})",
            remote.player_id(),
            config.web_port
        );
        Self {
            remote,
            local,
            queue: Mutex::new(Some(queue)),
            config,
            is_playing: AtomicBool::new(false),
            is_busy: AtomicBool::new(false),
            exiting: AtomicBool::new(false),
        }
    }

    /// LMS audio is playing locally
    pub fn is_playing(&self) -> bool {
        self.is_playing.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy.load(Ordering::SeqCst)
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting.load(Ordering::SeqCst)
    }

    /// Stop reconciling and let go of the local queue.
    pub fn close(&self) {
        info!("Stop monitoring events for player {}", self.remote.player_id());
        self.exiting.store(true, Ordering::SeqCst);
        self.queue.lock().take();
    }

    pub(crate) fn queue(&self) -> Option<Arc<dyn LocalQueue>> {
        self.queue.lock().clone()
    }

    pub async fn handle_event(&self, event: PlayerEvent) {
        if self.is_exiting() {
            debug!("Ignoring {} event, bridge is closed", event.name());
            return;
        }
        match event {
            PlayerEvent::Started => self.on_playback_started().await,
            PlayerEvent::Paused => self.on_playback_paused().await,
            PlayerEvent::Resumed => self.on_playback_resumed().await,
            PlayerEvent::Ended => self.on_playback_ended(),
            PlayerEvent::Stopped => self.on_playback_stopped().await,
            PlayerEvent::SpeedChanged { speed } => self.on_speed_changed(speed).await,
            PlayerEvent::Seek { time_ms, .. } => self.on_seek(time_ms).await,
            PlayerEvent::Unknown(name) => debug!("Unhandled player event: {}", name),
        }
    }

    pub async fn on_playback_paused(&self) {
        if self.passes(&reconcile::PAUSE) {
            info!("Playback paused");
            self.dispatch(RemoteAction::Pause).await;
        }
    }

    pub async fn on_playback_resumed(&self) {
        if self.passes(&reconcile::RESUME) {
            info!("Playback unpaused");
            self.dispatch(RemoteAction::Unpause).await;
        }
    }

    pub fn on_playback_ended(&self) {
        self.is_playing.store(false, Ordering::SeqCst);
    }

    pub async fn on_playback_started(&self) {
        if self.is_exiting() {
            return;
        }
        let _busy = BusyGuard::new(&self.is_busy);

        if self.local.is_playing_video() {
            self.is_playing.store(false, Ordering::SeqCst);
            info!("Local player started video, powering off the LMS player");
            self.dispatch(RemoteAction::Command(RemoteCommand::Power(false)))
                .await;
            return;
        }

        wait::await_local_audio(self.local.as_ref(), &self.config.wait).await;
        let playing = self.local.is_playing_audio() && self.marked_item();
        self.is_playing.store(playing, Ordering::SeqCst);

        if !self.passes(&reconcile::TRACK_JUMP) {
            return;
        }
        let position = self.queue().and_then(|queue| queue.position());
        if let Some(index) = reconcile::track_jump(position, self.remote.cur_index()) {
            info!("Other track requested by local player - index: {}", index);
            self.dispatch(RemoteAction::Command(RemoteCommand::PlaylistIndex(index)))
                .await;
        }
    }

    pub async fn on_speed_changed(&self, speed: f64) {
        if !self.passes(&reconcile::SPEED) {
            return;
        }
        if let Some(command) = reconcile::speed_command(speed, self.config.seek_step_secs) {
            info!("User is requesting to fast forward or rewind (speed {})", speed);
            self.dispatch(RemoteAction::Command(command)).await;
        }
    }

    pub async fn on_seek(&self, time_ms: i64) {
        if self.passes(&reconcile::SEEK) {
            self.dispatch(RemoteAction::Command(reconcile::seek_command(time_ms)))
                .await;
        }
    }

    pub async fn on_playback_stopped(&self) {
        if self.passes(&reconcile::STOP) {
            info!("Playback stopped");
            self.dispatch(RemoteAction::Stop).await;
        }
        self.is_playing.store(false, Ordering::SeqCst);
    }

    /// Elapsed seconds of the current track, from the local player when it
    /// knows, otherwise from the LMS player.
    pub fn current_time(&self) -> f64 {
        match self.local.elapsed() {
            Ok(elapsed) => elapsed,
            Err(e) => {
                debug!("Local position unavailable ({}), using LMS time", e);
                self.remote.time()
            }
        }
    }

    fn marked_item(&self) -> bool {
        self.local
            .current_item_property(EntryProperty::RemotePath.property_name())
            .is_some_and(|value| !value.is_empty())
    }

    fn observe(&self) -> Observation {
        Observation {
            local_audio: self.local.is_playing_audio(),
            marked_item: self.marked_item(),
            bridge_playing: self.is_playing(),
            mode: self.remote.mode(),
            state_changing: self.remote.state_changing(),
            busy: self.is_busy(),
        }
    }

    /// The one place deciding whether a notification is a user action to
    /// forward or an echo of the LMS player's own change.
    fn passes(&self, gate: &Gate) -> bool {
        !self.is_exiting() && gate.allows(&self.observe())
    }

    async fn dispatch(&self, action: RemoteAction) {
        let result = match action {
            RemoteAction::Pause => self.remote.pause().await,
            RemoteAction::Unpause => self.remote.unpause().await,
            RemoteAction::Stop => self.remote.stop().await,
            RemoteAction::Command(command) => {
                self.remote.send_command(&command.to_string()).await
            }
        };
        match result {
            Ok(()) => debug!("Sent LMS {}", action),
            Err(e) => warn!("Failed to send LMS {}: {}", action, e),
        }
    }
}

/// Feed local player notifications to the bridge one at a time.
pub fn spawn_event_loop(
    bridge: Arc<PlaybackBridge>,
    mut rx: mpsc::UnboundedReceiver<PlayerEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if bridge.is_exiting() {
                break;
            }
            bridge.handle_event(event).await;
        }
        debug!("Player event loop finished");
    })
}
