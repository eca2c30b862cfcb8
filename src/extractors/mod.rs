// src/extractors/mod.rs
pub mod bofm;
pub mod kjv;
pub mod rules;
pub mod study_pages;

use std::collections::BTreeMap;

/// Mapping from a canonical verse key ("Book Chapter:Verse", or
/// "Fragment Verse" for study pages) to the extracted verse text.
/// The ordered map keeps the JSON output deterministic and diffable.
pub type ScriptureMap = BTreeMap<String, String>;
