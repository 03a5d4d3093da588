use tracing::{debug, info, warn};

use super::entry::build_entry;
use super::PlaybackBridge;

/// Folder path of the local player's own music playlist view
pub const NOW_PLAYING_VIEW: &str = "playlistmusic://";

impl PlaybackBridge {
    /// Mirror the LMS playlist into the local queue.
    ///
    /// A shorter LMS playlist clears the local queue first; no partial diff is
    /// attempted. Each track then lands at its LMS playlist position.
    pub async fn sync_playlist(&self) {
        if self.is_exiting() {
            return;
        }
        let Some(queue) = self.queue() else {
            return;
        };
        let tracks = match self.remote.cur_playlist(true).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warn!("Failed to fetch LMS playlist: {}", e);
                return;
            }
        };

        if queue.len() > tracks.len() {
            info!(
                "Clearing local queue ({} entries, LMS has {})",
                queue.len(),
                tracks.len()
            );
            queue.clear();
        }
        for track in &tracks {
            let entry = build_entry(track, self.config.web_port, &self.config.addon_id);
            queue.put(track.playlist_index, entry);
        }
        debug!("Mirrored {} LMS tracks", tracks.len());

        self.refresh_playlist_view();
    }

    fn refresh_playlist_view(&self) {
        let Some(path) = self.local.container_folder_path() else {
            return;
        };
        if path == NOW_PLAYING_VIEW || path == self.config.playlist_view_path() {
            debug!("Refreshing playlist view {}", path);
            self.local.refresh_container();
        }
    }
}
