//! lingotracks library
//!
//! This library picks a listener's most-played Spotify tracks that are in a
//! target language and optionally fetches their lyrics, as raw material for
//! language learning.
//!
//! # Modules
//!
//! - `cli` - Command implementations that print results
//! - `config` - Configuration management and environment variables
//! - `error` - Error kinds shared by every module
//! - `language` - Heuristic language detection for tracks
//! - `lyrics` - Lyrics providers and the fetch pipeline
//! - `selection` - Candidate selection (fetch, detect, filter)
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and wire records
//! - `utils` - Output helpers
//!
//! # Example
//!
//! ```
//! use lingotracks::{config, language::LinguaDetector, selection, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> lingotracks::Result<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let spotify = SpotifyClient::new(config.http_client()?, config.spotify.clone());
//!     let detector = LinguaDetector::new();
//!     let tracks = selection::select_candidates(
//!         &spotify,
//!         &detector,
//!         "es",
//!         50,
//!         Default::default(),
//!     )
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod lyrics;
pub mod selection;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Tracks matching {}: {}", lang, count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro terminates the process with exit code 1 right after printing.
/// It is the single place where hard errors are reported to the user, so it
/// should only be used from the binary's command layer.
///
/// # Example
///
/// ```
/// error!("Cannot load configuration. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
