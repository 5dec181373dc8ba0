use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use tracing_subscriber::EnvFilter;

use lingotracks::{
    cli::{self, RunOptions},
    config, error,
    lyrics::MatchMode,
    types::TimeRange,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Language code to keep, compared literally (e.g. "es")
    #[clap(long)]
    lang: String,

    /// Number of top tracks to request
    #[clap(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    limit: u32,

    /// Listening window the top tracks are computed over
    #[clap(long, value_enum, default_value_t = TimeRange::LongTerm)]
    time_range: TimeRange,

    /// Fetch lyrics for the matching tracks and print a preview
    #[clap(long)]
    print_lyrics: bool,

    /// Number of lyric lines shown per track
    #[clap(long, default_value_t = 5)]
    preview_lines: usize,

    /// Skip a track instead of using the top search hit when no title matches
    #[clap(long)]
    strict_match: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    cli::run(RunOptions {
        lang: cli.lang,
        limit: cli.limit,
        time_range: cli.time_range,
        print_lyrics: cli.print_lyrics,
        preview_lines: cli.preview_lines,
        match_mode: if cli.strict_match {
            MatchMode::Strict
        } else {
            MatchMode::BestEffort
        },
    })
    .await;
}
