//! Genius search-and-scrape lyrics provider.
//!
//! Resolution is linear and never retried:
//! 1. search Genius for `"<track name> <primary artist>"`
//! 2. pick the best hit (see [`select_best_hit`])
//! 3. resolve the song page URL
//! 4. fetch the page and scrape the lyrics blocks
//!
//! The HTTP side sits behind [`GeniusTransport`] so the decision logic runs
//! against fixtures in tests.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    config::GeniusConfig,
    error::{Error, Result},
    lyrics::{
        LyricsProvider,
        matcher::{MatchMode, resolve_song_url, select_best_hit},
        scrape::extract_lyrics,
    },
    types::{SearchResponse, SongHit, Track},
};

/// The two Genius endpoints the provider talks to.
#[async_trait]
pub trait GeniusTransport: Send + Sync {
    /// Ranked song records for a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<SongHit>>;

    /// Raw markup of a song page.
    async fn fetch_document(&self, url: &str) -> Result<String>;
}

/// reqwest-backed transport. Search is authenticated, page fetches are not.
pub struct GeniusClient {
    client: Client,
    config: GeniusConfig,
}

impl GeniusClient {
    pub fn new(client: Client, config: GeniusConfig) -> Self {
        GeniusClient { client, config }
    }
}

#[async_trait]
impl GeniusTransport for GeniusClient {
    async fn search(&self, query: &str) -> Result<Vec<SongHit>> {
        let api_url = format!("{uri}/search", uri = self.config.api_url);
        debug!("GET {api_url} q={query}");

        let response = self
            .client
            .get(&api_url)
            .bearer_auth(&self.config.access_token)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| Error::Provider(format!("Genius search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Provider(format!(
                "Genius search error {status}: {body}"
            )));
        }

        let res = response
            .json::<SearchResponse>()
            .await
            .map_err(|e| Error::Provider(format!("Genius search response unreadable: {e}")))?;

        Ok(res.into_songs())
    }

    async fn fetch_document(&self, url: &str) -> Result<String> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Provider(format!("Genius page fetch failed for {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Provider(format!(
                "Genius page error {status} for {url}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Provider(format!("Genius page fetch failed for {url}: {e}")))
    }
}

pub struct GeniusProvider<T = GeniusClient> {
    transport: T,
    web_url: String,
    mode: MatchMode,
}

impl GeniusProvider<GeniusClient> {
    pub fn from_config(client: Client, config: GeniusConfig) -> Self {
        let web_url = config.web_url.clone();
        GeniusProvider::new(GeniusClient::new(client, config), web_url)
    }
}

impl<T: GeniusTransport> GeniusProvider<T> {
    pub fn new(transport: T, web_url: impl Into<String>) -> Self {
        GeniusProvider {
            transport,
            web_url: web_url.into(),
            mode: MatchMode::default(),
        }
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// `"<track name> <primary artist>"`, trimmed.
pub fn build_search_query(track: &Track) -> String {
    let primary_artist = track
        .primary_artist()
        .map(|a| a.name.as_str())
        .unwrap_or_default();
    format!("{} {}", track.name, primary_artist).trim().to_string()
}

#[async_trait]
impl<T: GeniusTransport> LyricsProvider for GeniusProvider<T> {
    async fn resolve_lyrics(&self, track: &Track) -> Result<Option<String>> {
        let query = build_search_query(track);
        let hits = self.transport.search(&query).await?;
        if hits.is_empty() {
            debug!("Genius has no results for '{query}'");
            return Ok(None);
        }

        let Some(best) = select_best_hit(&hits, track, self.mode) else {
            return Ok(None);
        };

        let Some(song_url) = resolve_song_url(best, &self.web_url) else {
            debug!("Best hit for '{query}' has neither url nor path");
            return Ok(None);
        };

        let html = self.transport.fetch_document(&song_url).await?;
        Ok(extract_lyrics(&html))
    }
}
