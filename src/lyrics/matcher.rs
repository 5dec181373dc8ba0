use tracing::debug;

use crate::types::{SongHit, Track};

/// How far best-hit selection may degrade before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Title + artist, then title only, then the first hit.
    #[default]
    BestEffort,
    /// Title + artist, then title only. Never falls back to an unrelated hit.
    Strict,
}

pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Picks the search hit that most likely is `track`.
///
/// Passes run in order over the ranked list, comparing trimmed lower-case
/// strings:
/// 1. first hit whose title and primary artist both match
/// 2. first hit whose title matches
/// 3. the first hit ([`MatchMode::BestEffort`] only)
///
/// An empty list always yields `None`.
pub fn select_best_hit<'a>(hits: &'a [SongHit], track: &Track, mode: MatchMode) -> Option<&'a SongHit> {
    let track_title = normalize(&track.name);
    let track_artist = track
        .primary_artist()
        .map(|a| normalize(&a.name))
        .unwrap_or_default();

    if let Some(hit) = hits.iter().find(|hit| {
        normalize(hit.title()) == track_title
            && normalize(hit.primary_artist_name()) == track_artist
    }) {
        debug!("Title and artist match for '{}'", track.name);
        return Some(hit);
    }

    if let Some(hit) = hits.iter().find(|hit| normalize(hit.title()) == track_title) {
        debug!("Title-only match for '{}'", track.name);
        return Some(hit);
    }

    match mode {
        MatchMode::BestEffort => {
            debug!("No title match for '{}', using first hit", track.name);
            hits.first()
        }
        MatchMode::Strict => None,
    }
}

/// Absolute song page URL for a hit: the direct URL if present, otherwise the
/// relative path appended to `web_url`.
pub fn resolve_song_url(hit: &SongHit, web_url: &str) -> Option<String> {
    if let Some(url) = hit.url.as_deref().filter(|u| !u.is_empty()) {
        return Some(url.to_string());
    }

    hit.path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|path| format!("{web_url}{path}"))
}
