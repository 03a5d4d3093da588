/// The local media player runtime, as seen by the bridge.
///
/// Implementations answer from the host's own state; every call is cheap and
/// made from the thread that delivers notifications.
pub trait LocalPlayer: Send + Sync {
    fn is_playing_audio(&self) -> bool;

    fn is_playing_video(&self) -> bool;

    /// The player has an active audio stream (it may still be buffering).
    fn has_audio(&self) -> bool;

    /// Property value of the item that is currently playing, if any.
    fn current_item_property(&self, key: &str) -> Option<String>;

    /// Elapsed seconds of the current item. Fails while the player has no valid
    /// position yet, e.g. right after a track switch.
    fn elapsed(&self) -> anyhow::Result<f64>;

    /// Folder path of the view the user is looking at.
    fn container_folder_path(&self) -> Option<String>;

    /// Re-render the view the user is looking at.
    fn refresh_container(&self);
}
