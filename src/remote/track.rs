use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A track of the LMS playlist, as returned by the `status` query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteTrack {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "artist")]
    pub trackartist: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub disc: Option<u32>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "genre_list")]
    pub genres: Vec<String>,
    #[serde(default, alias = "tracknum", deserialize_with = "lenient_u32")]
    pub track_number: Option<u32>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub year: Option<u32>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub url: String,
    /// Set for live streams
    #[serde(default)]
    pub remote_title: Option<String>,
    #[serde(rename = "playlist index", deserialize_with = "lenient_index")]
    pub playlist_index: usize,
}

impl RemoteTrack {
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a `playlist_loop` array
    pub fn list_from_json(value: Value) -> Result<Vec<Self>> {
        Ok(serde_json::from_value(value)?)
    }

    /// Live or radio streams have no fixed length.
    pub fn is_live_stream(&self) -> bool {
        let remote = self
            .remote_title
            .as_deref()
            .is_some_and(|title| !title.is_empty());
        remote || self.duration_secs().is_none()
    }

    /// Duration in whole seconds, `None` when absent or zero.
    pub fn duration_secs(&self) -> Option<u64> {
        match self.duration {
            Some(duration) if duration > 0.0 => Some(duration.trunc() as u64),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl Lenient {
    fn into_f64(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Other(_) => None,
        }
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Lenient>::deserialize(deserializer)?;
    Ok(value.and_then(Lenient::into_f64))
}

fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?;
    Ok(value
        .filter(|v| *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32))
}

fn lenient_index<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Lenient::deserialize(deserializer)?;
    value
        .into_f64()
        .filter(|v| *v >= 0.0)
        .map(|v| v as usize)
        .ok_or_else(|| serde::de::Error::custom("invalid playlist index"))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Genres {
    List(Vec<String>),
    Text(String),
}

fn genre_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let genres = match Option::<Genres>::deserialize(deserializer)? {
        Some(Genres::List(list)) => list,
        Some(Genres::Text(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };
    Ok(genres)
}
