use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub const TRUNCATION_MARKER: &str = "...";

/// First `max_lines` lines of `lyrics`, followed by the truncation marker.
pub fn lyrics_preview(lyrics: &str, max_lines: usize) -> String {
    let mut preview: Vec<&str> = lyrics.lines().take(max_lines).collect();
    preview.push(TRUNCATION_MARKER);
    preview.join("\n")
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
