// src/storage/mod.rs
use crate::aggregator::PipelineReport;
use crate::extractors::ScriptureMap;
use crate::utils::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    output_path: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager for the given output file, creating the
    /// parent directory if it doesn't exist.
    pub fn new<P: AsRef<Path>>(output_path: P) -> Result<Self, StorageError> {
        let output_path = output_path.as_ref().to_path_buf();

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { output_path })
    }

    /// Writes the merged corpus as pretty-printed JSON, overwriting the
    /// destination unconditionally. serde_json leaves non-ASCII characters
    /// unescaped, which keeps the output readable for spot-checking.
    pub fn save_corpus(&self, corpus: &ScriptureMap) -> Result<PathBuf, StorageError> {
        let json = serde_json::to_string_pretty(corpus)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&self.output_path, json)?;
        tracing::info!(
            "Saved {} entries to {}",
            corpus.len(),
            self.output_path.display()
        );

        Ok(self.output_path.clone())
    }

    /// Writes a run-metadata sidecar next to the corpus file: extraction
    /// timestamp, total verse count, and the per-pipeline reports.
    pub fn save_run_metadata(
        &self,
        reports: &[PipelineReport],
        total_verses: usize,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.output_path.with_extension("meta.json");

        let metadata = serde_json::json!({
            "total_verses": total_verses,
            "pipelines": reports,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&file_path, metadata_str)?;
        tracing::info!("Saved run metadata to {}", file_path.display());

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn temp_output(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("scripture_extractor_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_corpus_round_trips_through_json() {
        let path = temp_output("roundtrip.json");
        let mut corpus = ScriptureMap::new();
        corpus.insert(
            "Genesis 1:1".to_string(),
            "In the beginning God created the heaven and the earth.".to_string(),
        );
        corpus.insert("DC/4 1".to_string(), "Now behold, a marvelous work.".to_string());

        let storage = StorageManager::new(&path).unwrap();
        let written = storage.save_corpus(&corpus).unwrap();

        let raw = fs::read_to_string(&written).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, corpus);

        fs::remove_file(written).ok();
    }

    #[test]
    fn test_non_ascii_preserved_literally() {
        let path = temp_output("unicode.json");
        let mut corpus = ScriptureMap::new();
        corpus.insert("Genesis 1:1".to_string(), "Au commencement, Dieu créa…".to_string());

        let storage = StorageManager::new(&path).unwrap();
        let written = storage.save_corpus(&corpus).unwrap();

        let raw = fs::read_to_string(&written).unwrap();
        assert!(raw.contains("créa…"));
        assert!(!raw.contains("\\u"));

        fs::remove_file(written).ok();
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let path = temp_output("overwrite.json");
        fs::write(&path, "stale contents").unwrap();

        let mut corpus = ScriptureMap::new();
        corpus.insert("Genesis 1:1".to_string(), "fresh".to_string());

        let storage = StorageManager::new(&path).unwrap();
        storage.save_corpus(&corpus).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("fresh"));
        assert!(!raw.contains("stale"));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_metadata_sidecar_path_and_shape() {
        let path = temp_output("corpus.json");
        let storage = StorageManager::new(&path).unwrap();
        let reports = vec![PipelineReport {
            source: "kjv".to_string(),
            verses: 3,
            error: None,
        }];

        let meta_path = storage.save_run_metadata(&reports, 3).unwrap();
        assert!(meta_path.to_string_lossy().ends_with("corpus.meta.json"));

        let raw = fs::read_to_string(&meta_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["total_verses"], 3);
        assert_eq!(value["pipelines"][0]["source"], "kjv");
        assert!(value["extraction_timestamp"].is_string());

        fs::remove_file(meta_path).ok();
    }
}
