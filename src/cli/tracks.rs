use reqwest::Client;

use crate::{
    config::Config,
    error, info,
    language::LinguaDetector,
    selection::select_candidates,
    spotify::SpotifyClient,
    types::{TimeRange, Track},
    utils, warning,
};

/// Prints the top tracks detected as `lang` and returns them.
///
/// Terminates the program if the Spotify request fails; nothing is printed in
/// that case.
pub async fn list_candidates(
    config: &Config,
    client: Client,
    lang: &str,
    limit: u32,
    time_range: TimeRange,
) -> Vec<Track> {
    let spotify = SpotifyClient::new(client, config.spotify.clone());
    let detector = LinguaDetector::new();

    let pb = utils::spinner(format!("Fetching top tracks ({time_range}, limit {limit})..."));
    let result = select_candidates(&spotify, &detector, lang, limit, time_range).await;
    pb.finish_and_clear();

    let candidates = match result {
        Ok(tracks) => tracks,
        Err(e) => error!("Cannot fetch top tracks. Err: {}", e),
    };

    info!("Tracks matching {}: {}", lang, candidates.len());
    if candidates.is_empty() {
        warning!("None of your top tracks look like '{}'.", lang);
        return candidates;
    }

    for track in &candidates {
        println!("{}", track.display_name());
    }

    candidates
}
