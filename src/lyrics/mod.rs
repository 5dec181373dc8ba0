//! Lyrics resolution.
//!
//! A [`LyricsProvider`] turns a [`Track`] into lyrics text or "not found".
//! [`fetch_all`] applies a provider across a candidate list. New providers
//! plug in by implementing the trait; the pipeline does not change.

use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::Result,
    types::{LyricsResult, Track},
};

pub mod dummy;
pub mod genius;
pub mod matcher;
pub mod scrape;

pub use dummy::DummyProvider;
pub use genius::{GeniusClient, GeniusProvider, GeniusTransport};
pub use matcher::MatchMode;

#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Returns the full lyrics of `track`.
    ///
    /// * `Ok(Some(text))` if lyrics were found
    /// * `Ok(None)` if they were not
    /// * `Err` for network or API failures
    async fn resolve_lyrics(&self, track: &Track) -> Result<Option<String>>;
}

/// Resolves lyrics for every track in order and keeps the successes.
///
/// Tracks without lyrics (or with blank lyrics) are skipped silently. A
/// provider error aborts the whole run; callers that need per-track isolation
/// must catch errors themselves.
pub async fn fetch_all(
    provider: &dyn LyricsProvider,
    tracks: &[Track],
) -> Result<Vec<LyricsResult>> {
    let mut results = Vec::new();

    for track in tracks {
        match provider.resolve_lyrics(track).await? {
            Some(lyrics) if !lyrics.trim().is_empty() => results.push(LyricsResult {
                track: track.clone(),
                lyrics,
            }),
            _ => debug!("No lyrics for {}", track.display_name()),
        }
    }

    Ok(results)
}
