// src/aggregator/mod.rs

use crate::extractors::{bofm, kjv, study_pages, ScriptureMap};
use crate::utils::error::FetchError;
use serde::Serialize;

/// Per-pipeline outcome, reported to the operator and written into the run
/// metadata sidecar.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub source: String,
    pub verses: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of one full extraction run: the merged corpus plus the
/// per-pipeline reports in execution order.
#[derive(Debug)]
pub struct RunOutcome {
    pub corpus: ScriptureMap,
    pub reports: Vec<PipelineReport>,
}

/// Runs every pipeline sequentially and merges their output.
///
/// Each pipeline is guarded: a failure is logged and contributes zero
/// verses rather than aborting the run. Merge order is fixed (KJV, Book of
/// Mormon, study pages); on key collision the later pipeline wins.
pub async fn run(client: &reqwest::Client, fragments: &[String]) -> RunOutcome {
    let (kjv_verses, kjv_report) = guard("kjv", kjv::run(client).await);
    let (bofm_verses, bofm_report) = guard("book-of-mormon", bofm::run(client).await);
    let (study_verses, study_report) =
        guard("study-pages", study_pages::run(client, fragments).await);

    let corpus = merge(vec![kjv_verses, bofm_verses, study_verses]);
    RunOutcome {
        corpus,
        reports: vec![kjv_report, bofm_report, study_report],
    }
}

/// Converts a pipeline failure into an empty contribution, logging either
/// the verse count or the caught error.
fn guard(
    source: &str,
    result: Result<ScriptureMap, FetchError>,
) -> (ScriptureMap, PipelineReport) {
    match result {
        Ok(verses) => {
            tracing::info!("Pipeline '{}' contributed {} verses", source, verses.len());
            let report = PipelineReport {
                source: source.to_string(),
                verses: verses.len(),
                error: None,
            };
            (verses, report)
        }
        Err(e) => {
            tracing::error!("Pipeline '{}' failed: {} (contributing no verses)", source, e);
            let report = PipelineReport {
                source: source.to_string(),
                verses: 0,
                error: Some(e.to_string()),
            };
            (ScriptureMap::new(), report)
        }
    }
}

/// Merges pipeline outputs in order; later maps overwrite earlier ones on
/// key collision (last-writer-wins, no conflict reporting).
pub fn merge(parts: Vec<ScriptureMap>) -> ScriptureMap {
    let mut merged = ScriptureMap::new();
    for part in parts {
        merged.extend(part);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> ScriptureMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_is_last_writer_wins() {
        let first = map(&[("Genesis 1:1", "from the first"), ("Genesis 1:2", "only here")]);
        let second = map(&[("Genesis 1:1", "from the second")]);
        let merged = merge(vec![first, second]);
        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.get("Genesis 1:1").map(String::as_str),
            Some("from the second")
        );
        assert_eq!(merged.get("Genesis 1:2").map(String::as_str), Some("only here"));
    }

    #[test]
    fn test_merge_is_deterministic() {
        let parts = || {
            vec![
                map(&[("A 1:1", "a"), ("B 1:1", "b")]),
                map(&[("B 1:1", "b2"), ("C 1:1", "c")]),
            ]
        };
        assert_eq!(merge(parts()), merge(parts()));
    }

    #[test]
    fn test_guard_success_passes_map_through() {
        let (verses, report) = guard("kjv", Ok(map(&[("Genesis 1:1", "text")])));
        assert_eq!(verses.len(), 1);
        assert_eq!(report.source, "kjv");
        assert_eq!(report.verses, 1);
        assert!(report.error.is_none());
    }

    #[test]
    fn test_guard_failure_contributes_nothing() {
        let (verses, report) = guard(
            "book-of-mormon",
            Err(FetchError::Http(reqwest::StatusCode::NOT_FOUND)),
        );
        assert!(verses.is_empty());
        assert_eq!(report.verses, 0);
        assert!(report.error.is_some());
    }

    #[test]
    fn test_one_failed_pipeline_yields_union_of_the_others() {
        let kjv = map(&[("Genesis 1:1", "kjv text")]);
        let (bofm, _) = guard("book-of-mormon", Err(FetchError::Http(reqwest::StatusCode::NOT_FOUND)));
        let study = map(&[("DC/4 1", "study text")]);

        let merged = merge(vec![kjv.clone(), bofm, study.clone()]);
        let mut expected = kjv;
        expected.extend(study);
        assert_eq!(merged, expected);
    }
}
