use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

// Current song pages split lyrics over several containers.
static CONTAINER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[data-lyrics-container="true"]"#).expect("valid lyrics container selector")
});

// Older pages keep everything in one block.
static LEGACY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.lyrics").expect("valid legacy lyrics selector"));

/// Extracts the lyrics text from a song page.
///
/// Container blocks win whenever at least one exists; the legacy block is only
/// consulted when there are none. Script content is ignored. Returns `None`
/// when neither layout is present or the extracted text is blank.
pub fn extract_lyrics(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let containers: Vec<ElementRef<'_>> = document.select(&CONTAINER_SELECTOR).collect();
    if !containers.is_empty() {
        debug!("Found {} lyrics containers", containers.len());
        let text = containers
            .into_iter()
            .map(element_text)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        return non_blank(text);
    }

    let legacy = document.select(&LEGACY_SELECTOR).next()?;
    debug!("Falling back to legacy lyrics block");
    non_blank(element_text(legacy))
}

/// Every text node below `element`, trimmed, one per line.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let in_script = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|e| e.name() == "script")
                });
                (!in_script).then(|| text.trim())
            }
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_blank(text: String) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
