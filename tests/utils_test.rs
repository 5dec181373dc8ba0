use lingotracks::utils::*;

#[test]
fn test_lyrics_preview_truncates_to_max_lines() {
    let lyrics = "line 1\nline 2\nline 3\nline 4";
    let preview = lyrics_preview(lyrics, 2);

    assert_eq!(preview, "line 1\nline 2\n...");
}

#[test]
fn test_lyrics_preview_short_lyrics_keep_all_lines() {
    let preview = lyrics_preview("only line", 5);

    // Marker is always appended
    assert_eq!(preview, "only line\n...");
}

#[test]
fn test_lyrics_preview_zero_lines() {
    assert_eq!(lyrics_preview("a\nb", 0), TRUNCATION_MARKER);
}
