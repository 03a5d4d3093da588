//! Recording fakes for both players.

use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use crate::player::{EntryProperty, LocalPlayer};
use crate::remote::{PlayerMode, RemotePlayer, RemoteTrack};

/// Last known LMS state the fake answers its getters from
#[derive(Default)]
pub struct RemoteStatus {
    mode: RwLock<PlayerMode>,
    time: RwLock<f64>,
    cur_index: RwLock<Option<usize>>,
    state_changing: RwLock<bool>,
}

impl RemoteStatus {
    pub fn get_mode(&self) -> PlayerMode {
        self.mode.read().clone()
    }

    pub fn set_mode(&self, mode: PlayerMode) {
        *self.mode.write() = mode;
    }

    pub fn get_time(&self) -> f64 {
        *self.time.read()
    }

    pub fn set_time(&self, time: f64) {
        *self.time.write() = time;
    }

    pub fn get_cur_index(&self) -> Option<usize> {
        *self.cur_index.read()
    }

    pub fn set_cur_index(&self, index: Option<usize>) {
        *self.cur_index.write() = index;
    }

    pub fn is_state_changing(&self) -> bool {
        *self.state_changing.read()
    }

    pub fn set_state_changing(&self, changing: bool) {
        *self.state_changing.write() = changing;
    }
}

pub struct FakeRemote {
    pub status: Arc<RemoteStatus>,
    playlist: Mutex<Vec<RemoteTrack>>,
    sent: Mutex<Vec<String>>,
    fail: Mutex<bool>,
}

impl FakeRemote {
    pub fn new(mode: PlayerMode) -> Arc<Self> {
        let status = Arc::new(RemoteStatus::default());
        status.set_mode(mode);
        Arc::new(Self {
            status,
            playlist: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
            fail: Mutex::new(false),
        })
    }

    pub fn set_playlist(&self, titles: &[&str]) {
        *self.playlist.lock() = titles
            .iter()
            .enumerate()
            .map(|(index, title)| RemoteTrack {
                title: title.to_string(),
                duration: Some(180.0 + index as f64),
                url: format!("file:///music/{}.flac", title),
                playlist_index: index,
                ..Default::default()
            })
            .collect();
    }

    pub fn fail_requests(&self, fail: bool) {
        *self.fail.lock() = fail;
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    fn record(&self, command: &str) -> anyhow::Result<()> {
        if *self.fail.lock() {
            return Err(anyhow!("LMS unreachable"));
        }
        self.sent.lock().push(command.to_string());
        Ok(())
    }
}

#[async_trait]
impl RemotePlayer for FakeRemote {
    fn player_id(&self) -> String {
        "00:04:20:aa:bb:cc".to_string()
    }

    fn mode(&self) -> PlayerMode {
        self.status.get_mode()
    }

    fn time(&self) -> f64 {
        self.status.get_time()
    }

    fn cur_index(&self) -> Option<usize> {
        self.status.get_cur_index()
    }

    fn state_changing(&self) -> bool {
        self.status.is_state_changing()
    }

    async fn play(&self) -> anyhow::Result<()> {
        self.record("play")
    }

    async fn pause(&self) -> anyhow::Result<()> {
        self.record("pause")
    }

    async fn unpause(&self) -> anyhow::Result<()> {
        self.record("unpause")
    }

    async fn stop(&self) -> anyhow::Result<()> {
        self.record("stop")
    }

    async fn send_command(&self, command: &str) -> anyhow::Result<()> {
        self.record(command)
    }

    async fn cur_playlist(&self, _force_refresh: bool) -> anyhow::Result<Vec<RemoteTrack>> {
        if *self.fail.lock() {
            return Err(anyhow!("LMS unreachable"));
        }
        Ok(self.playlist.lock().clone())
    }
}

#[derive(Default)]
struct LocalState {
    playing_audio: bool,
    playing_video: bool,
    marker: Option<String>,
    elapsed: Option<f64>,
    folder_path: Option<String>,
    refreshes: usize,
    audio_ready_after: u32,
    has_audio_calls: u32,
}

#[derive(Default)]
pub struct FakeLocal {
    state: Mutex<LocalState>,
}

impl FakeLocal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local player playing an LMS-sourced track
    pub fn playing_remote_track() -> Arc<Self> {
        let local = Self::new();
        local.set_playing_audio(true);
        local.set_marker(Some("file:///music/track.flac"));
        Arc::new(local)
    }

    pub fn set_playing_audio(&self, playing: bool) {
        self.state.lock().playing_audio = playing;
    }

    pub fn set_playing_video(&self, playing: bool) {
        self.state.lock().playing_video = playing;
    }

    pub fn set_marker(&self, marker: Option<&str>) {
        self.state.lock().marker = marker.map(str::to_string);
    }

    pub fn set_elapsed(&self, elapsed: Option<f64>) {
        self.state.lock().elapsed = elapsed;
    }

    pub fn set_folder_path(&self, path: &str) {
        self.state.lock().folder_path = Some(path.to_string());
    }

    /// `has_audio` answers false this many times before turning true
    pub fn audio_ready_after(&self, calls: u32) {
        self.state.lock().audio_ready_after = calls;
    }

    pub fn has_audio_calls(&self) -> u32 {
        self.state.lock().has_audio_calls
    }

    pub fn refreshes(&self) -> usize {
        self.state.lock().refreshes
    }
}

impl LocalPlayer for FakeLocal {
    fn is_playing_audio(&self) -> bool {
        self.state.lock().playing_audio
    }

    fn is_playing_video(&self) -> bool {
        self.state.lock().playing_video
    }

    fn has_audio(&self) -> bool {
        let mut state = self.state.lock();
        state.has_audio_calls += 1;
        state.has_audio_calls > state.audio_ready_after
    }

    fn current_item_property(&self, key: &str) -> Option<String> {
        if key != EntryProperty::RemotePath.property_name() {
            return None;
        }
        self.state.lock().marker.clone()
    }

    fn elapsed(&self) -> anyhow::Result<f64> {
        self.state
            .lock()
            .elapsed
            .ok_or_else(|| anyhow!("no valid position"))
    }

    fn container_folder_path(&self) -> Option<String> {
        self.state.lock().folder_path.clone()
    }

    fn refresh_container(&self) {
        self.state.lock().refreshes += 1;
    }
}
