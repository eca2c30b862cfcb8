// src/extractors/kjv.rs

use crate::extractors::rules::{self, LineEvent};
use crate::extractors::ScriptureMap;
use crate::sources::{catalog, client};
use crate::utils::error::FetchError;

/// Rolling extraction state for line-oriented texts: the current book and
/// chapter stay "sticky" until a later heading or chapter line overwrites
/// them. There is no reset between books; a missing heading carries the
/// previous book forward.
#[derive(Debug, Default, Clone)]
pub struct ExtractorState {
    book: Option<String>,
    chapter: Option<u32>,
}

/// Extracts verses from a flat sequence of KJV-style lines.
///
/// Each line is trimmed, blank lines are skipped, and the rest are folded
/// through the classifier. Verse lines before the first book heading are
/// dropped; the first verse line seen before any chapter heading defaults
/// the chapter to 1, and that default then sticks like a real chapter.
pub fn extract_verses<'a, I>(lines: I) -> ScriptureMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut verses = ScriptureMap::new();
    let mut state = ExtractorState::default();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match rules::classify_line(line) {
            Some(LineEvent::BookHeading(book)) => {
                // Chapter is intentionally carried over across headings.
                state.book = Some(book);
            }
            Some(LineEvent::Verse { number, text }) => {
                if let Some(book) = &state.book {
                    let chapter = *state.chapter.get_or_insert(1);
                    verses.insert(format!("{} {}:{}", book, chapter, number), text);
                }
            }
            Some(LineEvent::Chapter(number)) => {
                state.chapter = Some(number);
            }
            None => {}
        }
    }

    verses
}

/// Fetches the Gutenberg KJV plain text and extracts its verses.
pub async fn run(client: &reqwest::Client) -> Result<ScriptureMap, FetchError> {
    tracing::info!("Parsing KJV (Project Gutenberg)...");
    let body = client::fetch_text(client, catalog::KJV_TEXT_URL).await?;
    let verses = extract_verses(body.lines());
    tracing::info!("Parsed {} KJV verses (approx).", verses.len());
    Ok(verses)
}
