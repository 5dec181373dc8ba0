use reqwest::{Client, StatusCode, header};
use tracing::debug;

use crate::{
    config::SpotifyConfig,
    error::{Error, Result},
    types::{TimeRange, TopTracksResponse, Track},
};

/// Retrieves the current user's top tracks from the Spotify Web API.
///
/// Requests a single page from `/me/top/tracks` and converts every item into a
/// [`Track`], keeping the artist order reported by Spotify.
///
/// # Arguments
///
/// * `client` - HTTP client carrying the per-request timeout
/// * `config` - API base URL and bearer token
/// * `limit` - Maximum number of tracks to return in this request
/// * `time_range` - Listening window the ranking is computed over
///
/// # Errors
///
/// - `401 Unauthorized` → [`Error::UpstreamAuth`]
/// - Any other non-success status → [`Error::UpstreamApi`] with the body text
/// - Network failures and malformed JSON → [`Error::UpstreamTransport`]
///
/// Nothing is retried.
///
/// # Example
///
/// ```
/// let tracks = get_top_tracks(&client, &config.spotify, 50, TimeRange::LongTerm).await?;
/// for track in tracks {
///     println!("{}", track.display_name());
/// }
/// ```
pub async fn get_top_tracks(
    client: &Client,
    config: &SpotifyConfig,
    limit: u32,
    time_range: TimeRange,
) -> Result<Vec<Track>> {
    let api_url = format!("{uri}/me/top/tracks", uri = config.api_url);
    debug!("GET {api_url} limit={limit} time_range={time_range}");

    let response = client
        .get(&api_url)
        .bearer_auth(&config.access_token)
        .header(header::CONTENT_TYPE, "application/json")
        .query(&[
            ("limit", limit.to_string()),
            ("time_range", time_range.to_string()),
        ])
        .send()
        .await
        .map_err(Error::UpstreamTransport)?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::UpstreamAuth);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::UpstreamApi { status, body });
    }

    let res = response
        .json::<TopTracksResponse>()
        .await
        .map_err(Error::UpstreamTransport)?;
    debug!("Spotify returned {} top tracks", res.items.len());

    Ok(res.items.into_iter().map(Track::from).collect())
}
