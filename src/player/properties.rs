use std::collections::BTreeMap;

/// Properties the bridge attaches to queue entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryProperty {
    /// LMS url of the track; marks the entry as remote-sourced
    RemotePath,
    /// Keeps the local player from probing the stream
    DoNotAnalyze,
    /// Plugin URL that re-selects the track on the LMS side
    OriginalItemUrl,
}

impl EntryProperty {
    pub fn property_name(self) -> &'static str {
        match self {
            Self::RemotePath => "sl_path",
            Self::DoNotAnalyze => "do_not_analyze",
            Self::OriginalItemUrl => "original_listitem_url",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sl_path" => Some(Self::RemotePath),
            "do_not_analyze" => Some(Self::DoNotAnalyze),
            "original_listitem_url" => Some(Self::OriginalItemUrl),
            _ => None,
        }
    }
}

/// Music info shown by the local player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: Option<f64>,
    pub disc_number: Option<u32>,
    pub rating: Option<f64>,
    pub genres: Vec<String>,
    pub track_number: Option<u32>,
    pub lyrics: Option<String>,
    pub year: Option<u32>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artwork {
    pub thumb: String,
    pub icon: String,
    pub fanart: String,
}

impl Artwork {
    pub fn from_thumb(thumb: &str) -> Self {
        Self {
            thumb: thumb.to_string(),
            icon: thumb.to_string(),
            fanart: thumb.to_string(),
        }
    }
}

/// Local queue entry built from an LMS track
#[derive(Debug, Clone, PartialEq)]
pub struct PlayableEntry {
    pub label: String,
    pub stream_url: String,
    pub info: TrackInfo,
    pub art: Artwork,
    /// Whether the local player may resolve the entry as a library item
    pub content_lookup: bool,
    properties: BTreeMap<String, String>,
}

impl PlayableEntry {
    pub fn new(label: impl Into<String>, stream_url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            stream_url: stream_url.into(),
            info: TrackInfo::default(),
            art: Artwork::default(),
            content_lookup: true,
            properties: BTreeMap::new(),
        }
    }

    pub fn set_property(&mut self, property: EntryProperty, value: impl Into<String>) {
        self.properties
            .insert(property.property_name().to_string(), value.into());
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn is_remote_sourced(&self) -> bool {
        self.property(EntryProperty::RemotePath.property_name())
            .is_some_and(|value| !value.is_empty())
    }
}
