use reqwest::StatusCode;
use thiserror::Error;

/// Every hard failure the pipeline can raise.
///
/// Soft outcomes (no language match, no lyrics) are never errors; they show up
/// as filtered or empty results instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unauthorized. Your Spotify access token is invalid or expired.")]
    UpstreamAuth,

    #[error("Spotify API error {status}: {body}")]
    UpstreamApi { status: StatusCode, body: String },

    #[error("Spotify request failed: {0}")]
    UpstreamTransport(#[source] reqwest::Error),

    #[error("Lyrics provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
