//! # Spotify Integration Module
//!
//! This module is the boundary between lingotracks and the Spotify Web API. The
//! rest of the crate only needs one thing from Spotify: the listener's top
//! tracks for a time window. That need is expressed by the
//! [`TopTracksSource`] capability so the candidate selection can be exercised
//! against fixture data without touching the network.
//!
//! ## Architecture
//!
//! ```text
//! Candidate Selection
//!          ↓
//! TopTracksSource (capability)
//!          ↓
//! SpotifyClient (reqwest, bearer token)
//!          ↓
//! GET /me/top/tracks
//! ```
//!
//! ## Error Handling
//!
//! Calls are made once, without retries or backoff:
//! - **401 Unauthorized**: surfaces as [`Error::UpstreamAuth`]
//! - **Other non-2xx**: surfaces as [`Error::UpstreamApi`] with the response body
//! - **Network / decoding**: surfaces as [`Error::UpstreamTransport`]
//!
//! [`Error::UpstreamAuth`]: crate::error::Error::UpstreamAuth
//! [`Error::UpstreamApi`]: crate::error::Error::UpstreamApi
//! [`Error::UpstreamTransport`]: crate::error::Error::UpstreamTransport
//!
//! ## Pagination
//!
//! Only the first page is ever requested. `limit` bounds the page size.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::SpotifyConfig,
    error::Result,
    types::{TimeRange, Track},
};

pub mod tracks;

/// Anything that can report a listener's most-played tracks.
#[async_trait]
pub trait TopTracksSource: Send + Sync {
    /// Returns up to `limit` top tracks for `time_range`, most played first.
    async fn top_tracks(&self, limit: u32, time_range: TimeRange) -> Result<Vec<Track>>;
}

/// Spotify Web API client authenticated with a pre-issued bearer token.
pub struct SpotifyClient {
    client: Client,
    config: SpotifyConfig,
}

impl SpotifyClient {
    pub fn new(client: Client, config: SpotifyConfig) -> Self {
        SpotifyClient { client, config }
    }
}

#[async_trait]
impl TopTracksSource for SpotifyClient {
    async fn top_tracks(&self, limit: u32, time_range: TimeRange) -> Result<Vec<Track>> {
        tracks::get_top_tracks(&self.client, &self.config, limit, time_range).await
    }
}
