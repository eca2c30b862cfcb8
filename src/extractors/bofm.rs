// src/extractors/bofm.rs

use crate::extractors::rules;
use crate::extractors::ScriptureMap;
use crate::sources::{catalog, client};
use crate::utils::error::FetchError;

/// Extracts verses from Book of Mormon style lines.
///
/// Headings here are block-capital lines ("FIRST BOOK OF NEPHI") and verse
/// lines carry their own "chapter:verse" marker, so only the current book is
/// tracked; no chapter state is carried between lines. Verse lines seen
/// before the first heading are dropped silently.
pub fn extract_verses<'a, I>(lines: I) -> ScriptureMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut verses = ScriptureMap::new();
    let mut current_book: Option<String> = None;

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if rules::is_caps_heading(line) {
            current_book = Some(rules::sanitize_book_name(line));
            continue;
        }

        if let Some((chapter, verse, text)) = rules::parse_inline_verse(line) {
            if let Some(book) = &current_book {
                verses.insert(format!("{} {}:{}", book, chapter, verse), text);
            }
        }
    }

    verses
}

/// Fetches the Gutenberg Book of Mormon plain text and extracts its verses.
pub async fn run(client: &reqwest::Client) -> Result<ScriptureMap, FetchError> {
    tracing::info!("Parsing Book of Mormon (Project Gutenberg)...");
    let body = client::fetch_text(client, catalog::BOOK_OF_MORMON_TEXT_URL).await?;
    let verses = extract_verses(body.lines());
    tracing::info!("Parsed {} Book of Mormon verses (approx).", verses.len());
    Ok(verses)
}
