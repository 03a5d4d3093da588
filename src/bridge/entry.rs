use url::form_urlencoded;

use crate::player::{Artwork, EntryProperty, PlayableEntry, TrackInfo};
use crate::remote::{RemoteCommand, RemoteTrack};

const STREAM_HOST: &str = "127.0.0.1";

/// Local stream server URL for a track.
///
/// Tracks without a fixed length go through the radio endpoint; everything else
/// is served per whole-second duration.
pub fn stream_url(track: &RemoteTrack, web_port: u16) -> String {
    match track.duration_secs() {
        Some(duration) if !track.is_live_stream() => {
            format!("http://{}:{}/track/{}", STREAM_HOST, web_port, duration)
        }
        _ => radio_url(web_port),
    }
}

pub fn radio_url(web_port: u16) -> String {
    format!("http://{}:{}/track/radio", STREAM_HOST, web_port)
}

/// Plugin URL that makes the LMS player jump to `index` when invoked.
pub fn original_item_url(addon_id: &str, index: usize) -> String {
    let command = RemoteCommand::PlaylistIndex(index).to_string();
    let params: String = form_urlencoded::byte_serialize(command.as_bytes()).collect();
    format!("plugin://{}?action=command&params={}", addon_id, params)
}

pub fn build_entry(track: &RemoteTrack, web_port: u16, addon_id: &str) -> PlayableEntry {
    let mut entry = PlayableEntry::new(track.title.clone(), stream_url(track, web_port));
    entry.info = TrackInfo {
        title: track.title.clone(),
        artist: track.trackartist.clone(),
        album: track.album.clone(),
        duration: track.duration,
        disc_number: track.disc,
        rating: track.rating,
        genres: track.genres.clone(),
        track_number: track.track_number,
        lyrics: track.lyrics.clone(),
        year: track.year,
        comment: track.comment.clone(),
    };
    entry.art = Artwork::from_thumb(&track.thumb);
    entry.content_lookup = false;
    entry.set_property(EntryProperty::RemotePath, track.url.clone());
    entry.set_property(EntryProperty::DoNotAnalyze, "true");
    entry.set_property(
        EntryProperty::OriginalItemUrl,
        original_item_url(addon_id, track.playlist_index),
    );
    entry
}
