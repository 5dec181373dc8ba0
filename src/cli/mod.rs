//! # CLI Module
//!
//! Command-line layer of lingotracks. It turns parsed arguments into calls on
//! the library, shows progress while the network is busy and prints results.
//!
//! ## Flow
//!
//! ```text
//! Config (env)  ──fatal if a token is missing──▶ exit 1, nothing fetched
//!      ↓
//! Candidate selection (Spotify top tracks → language filter)
//!      ↓ prints matching tracks
//! Lyrics pipeline (only with --print-lyrics)
//!      ↓ prints lyric previews
//! ```
//!
//! ## Error Handling
//!
//! Hard errors are reported through the `error!` macro, which terminates the
//! process. A failure while fetching top tracks therefore prevents any output;
//! a failure while resolving lyrics aborts the remaining lookups but leaves the
//! already printed track list intact.

mod lyrics;
mod tracks;

pub use lyrics::print_lyrics;
pub use tracks::list_candidates;

use crate::{config::Config, error, lyrics::MatchMode, types::TimeRange};

/// Options collected from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub lang: String,
    pub limit: u32,
    pub time_range: TimeRange,
    pub print_lyrics: bool,
    pub preview_lines: usize,
    pub match_mode: MatchMode,
}

pub async fn run(opts: RunOptions) {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let client = match config.http_client() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let candidates =
        list_candidates(&config, client.clone(), &opts.lang, opts.limit, opts.time_range).await;

    if opts.print_lyrics && !candidates.is_empty() {
        print_lyrics(
            &config,
            client,
            &candidates,
            opts.preview_lines,
            opts.match_mode,
        )
        .await;
    }
}
