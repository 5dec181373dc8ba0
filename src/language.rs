//! Heuristic language identification for tracks.
//!
//! Detection runs on the track name plus artist names only. Short or
//! non-linguistic text (a single proper noun, a stage name) gives unreliable
//! results; that is accepted, the result is only a prefilter.

use lingua::{LanguageDetector, LanguageDetectorBuilder};

use crate::types::Track;

/// Converts free text into a best-guess language code.
pub trait DetectLanguage: Send + Sync {
    /// Returns a lower-case ISO 639-1 code such as `"en"`, or `None` when no
    /// language can be determined.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Statistical detector backed by `lingua`, covering every language it ships.
pub struct LinguaDetector {
    detector: LanguageDetector,
}

impl LinguaDetector {
    pub fn new() -> Self {
        LinguaDetector {
            detector: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }
}

impl Default for LinguaDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectLanguage for LinguaDetector {
    fn detect(&self, text: &str) -> Option<String> {
        self.detector
            .detect_language_of(text)
            .map(|language| language.iso_code_639_1().to_string())
    }
}

/// Track name and artist names joined by single spaces, empty parts skipped.
pub fn detection_text(track: &Track) -> String {
    std::iter::once(track.name.as_str())
        .chain(track.artists.iter().map(|a| a.name.as_str()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Detects the language of a track, never calling the detector on blank text.
pub fn detect_track_language(detector: &dyn DetectLanguage, track: &Track) -> Option<String> {
    let text = detection_text(track);
    if text.trim().is_empty() {
        return None;
    }
    detector.detect(&text)
}
