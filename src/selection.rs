use tracing::debug;

use crate::{
    error::Result,
    language::{DetectLanguage, detect_track_language},
    spotify::TopTracksSource,
    types::{TimeRange, Track},
};

/// Keeps the tracks whose detected language equals `target_language`.
///
/// The comparison is literal and case-sensitive: `"en"` does not match
/// `"en-US"` or `"EN"`. Input order is preserved.
pub fn filter_tracks_by_language(
    tracks: Vec<Track>,
    target_language: &str,
    detector: &dyn DetectLanguage,
) -> Vec<Track> {
    tracks
        .into_iter()
        .filter(|track| {
            let detected = detect_track_language(detector, track);
            debug!("{} -> {:?}", track.display_name(), detected);
            detected.as_deref() == Some(target_language)
        })
        .collect()
}

/// Fetches the listener's top tracks and keeps those in `target_language`.
///
/// This is only a prefilter based on track and artist names. A failure of the
/// top-tracks request propagates unchanged; there are no partial results.
///
/// # Example
///
/// ```
/// let spotify = SpotifyClient::new(client, config.spotify);
/// let detector = LinguaDetector::new();
/// let tracks = select_candidates(&spotify, &detector, "es", 50, TimeRange::LongTerm).await?;
/// ```
pub async fn select_candidates(
    source: &dyn TopTracksSource,
    detector: &dyn DetectLanguage,
    target_language: &str,
    limit: u32,
    time_range: TimeRange,
) -> Result<Vec<Track>> {
    let tracks = source.top_tracks(limit, time_range).await?;
    let fetched = tracks.len();

    let candidates = filter_tracks_by_language(tracks, target_language, detector);
    debug!(
        "{} of {} top tracks detected as '{}'",
        candidates.len(),
        fetched,
        target_language
    );

    Ok(candidates)
}
