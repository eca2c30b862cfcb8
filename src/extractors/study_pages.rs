// src/extractors/study_pages.rs

use crate::extractors::ScriptureMap;
use crate::sources::{catalog, client};
use crate::utils::error::FetchError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// --- CSS Selectors (Lazy Static) ---
// Verses on the study site sit inside <span class="verse"> or
// <p class="verse"> elements, with the number in a nested element.
static VERSE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".verse, span.verse, p.verse").expect("Failed to compile VERSE_SELECTOR")
});

static VERSE_NUMBER_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".verse-number").expect("Failed to compile VERSE_NUMBER_SELECTOR")
});

/// Extracts verses from one study-site page.
///
/// Keys use the fragment path (query parameters removed, uppercased) plus
/// the verse number when one is present: "DC/4 1". Elements yielding an
/// empty key or empty text after trimming are skipped.
pub fn extract_page_verses(fragment: &str, html: &str) -> ScriptureMap {
    let document = Html::parse_document(html);
    // The URL fragment stands in for a canonical book name; a full catalog
    // run would map these paths onto proper book labels.
    let label = fragment
        .split('?')
        .next()
        .unwrap_or(fragment)
        .to_uppercase();

    let mut verses = ScriptureMap::new();
    for element in document.select(&VERSE_SELECTOR) {
        let number = element
            .select(&VERSE_NUMBER_SELECTOR)
            .next()
            .map(element_text)
            .filter(|n| !n.is_empty());

        let mut text = element_text(element);
        if let Some(num) = &number {
            // The number renders inside the verse element too; drop the
            // duplicated leading prefix from the body text.
            if let Some(rest) = text.strip_prefix(num.as_str()) {
                text = rest.trim().to_string();
            }
        }

        let key = format!("{} {}", label, number.as_deref().unwrap_or(""))
            .trim()
            .to_string();
        if !key.is_empty() && !text.is_empty() {
            verses.insert(key, text);
        }
    }

    verses
}

/// Whitespace-normalized text content of an element: each text node is
/// trimmed and the non-empty ones are joined with single spaces.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fetches each configured study-site page and extracts its verses.
///
/// Fault isolation is per page: a fetch failure is logged and that page is
/// skipped, the loop continues with the next one.
pub async fn run(
    client: &reqwest::Client,
    fragments: &[String],
) -> Result<ScriptureMap, FetchError> {
    tracing::info!("Fetching study-site pages ({} configured)...", fragments.len());

    let mut verses = ScriptureMap::new();
    for fragment in fragments {
        let url = catalog::study_page_url(fragment);
        match client::fetch_text(client, &url).await {
            Ok(html) => {
                let page = extract_page_verses(fragment, &html);
                tracing::debug!("Extracted {} verses from {}", page.len(), url);
                verses.extend(page);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {} - skipping page", url, e);
            }
        }
    }

    tracing::info!("Parsed {} verses from sample study pages.", verses.len());
    Ok(verses)
}
