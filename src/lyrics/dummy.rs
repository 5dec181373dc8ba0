use async_trait::async_trait;

use crate::{error::Result, lyrics::LyricsProvider, types::Track};

/// Returns the same canned answer for every track.
///
/// Handy for wiring the pipeline without network access: `DummyProvider::default()`
/// never finds lyrics.
#[derive(Debug, Clone, Default)]
pub struct DummyProvider {
    lyrics: Option<String>,
}

impl DummyProvider {
    pub fn with_lyrics(lyrics: impl Into<String>) -> Self {
        DummyProvider {
            lyrics: Some(lyrics.into()),
        }
    }
}

#[async_trait]
impl LyricsProvider for DummyProvider {
    async fn resolve_lyrics(&self, _track: &Track) -> Result<Option<String>> {
        Ok(self.lyrics.clone())
    }
}
