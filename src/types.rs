use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Primary artist first, in the order the API reported them.
    pub artists: Vec<Artist>,
    pub uri: String,
    pub href: String,
    pub preview_url: Option<String>,
}

impl Track {
    pub fn primary_artist(&self) -> Option<&Artist> {
        self.artists.first()
    }

    /// `"<name> by <artist>, <artist>"`
    pub fn display_name(&self) -> String {
        let artist_names = self
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} by {}", self.name, artist_names)
    }
}

#[derive(Debug, Clone)]
pub struct LyricsResult {
    pub track: Track,
    pub lyrics: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[value(name = "short_term")]
    ShortTerm,
    #[value(name = "medium_term")]
    MediumTerm,
    #[default]
    #[value(name = "long_term")]
    LongTerm,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Spotify wire records

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub items: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
    pub uri: String,
    pub href: Option<String>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: Option<String>,
    pub name: String,
}

impl From<ArtistObject> for Artist {
    fn from(a: ArtistObject) -> Artist {
        Artist {
            id: a.id.unwrap_or_default(),
            name: a.name,
        }
    }
}

impl From<TrackObject> for Track {
    fn from(t: TrackObject) -> Track {
        Track {
            id: t.id.unwrap_or_default(),
            name: t.name,
            artists: t.artists.into_iter().map(Artist::from).collect(),
            uri: t.uri,
            href: t.href.unwrap_or_default(),
            preview_url: t.preview_url,
        }
    }
}

// Genius wire records

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub response: SearchHits,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub result: Option<SongHit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongHit {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub primary_artist: Option<PrimaryArtist>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryArtist {
    #[serde(default)]
    pub name: String,
}

impl SearchResponse {
    /// Song records in ranking order; hits without a result object are dropped.
    pub fn into_songs(self) -> Vec<SongHit> {
        self.response
            .hits
            .into_iter()
            .filter_map(|hit| hit.result)
            .collect()
    }
}

impl SongHit {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn primary_artist_name(&self) -> &str {
        self.primary_artist
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or_default()
    }
}
