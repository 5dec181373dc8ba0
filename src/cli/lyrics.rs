use reqwest::Client;

use crate::{
    config::Config,
    error, info,
    lyrics::{GeniusProvider, MatchMode, fetch_all},
    success,
    types::Track,
    utils,
};

/// Fetches lyrics for `tracks` from Genius and prints a short preview of each.
pub async fn print_lyrics(
    config: &Config,
    client: Client,
    tracks: &[Track],
    preview_lines: usize,
    match_mode: MatchMode,
) {
    let provider =
        GeniusProvider::from_config(client, config.genius.clone()).with_match_mode(match_mode);

    let pb = utils::spinner(format!("Fetching lyrics for {} tracks...", tracks.len()));
    let result = fetch_all(&provider, tracks).await;
    pb.finish_and_clear();

    let results = match result {
        Ok(r) => r,
        Err(e) => error!("Cannot fetch lyrics. Err: {}", e),
    };

    for res in &results {
        println!();
        success!("{}", res.track.display_name());
        println!("{}", utils::lyrics_preview(&res.lyrics, preview_lines));
    }

    println!();
    info!(
        "Lyrics found for {} of {} tracks",
        results.len(),
        tracks.len()
    );
}
