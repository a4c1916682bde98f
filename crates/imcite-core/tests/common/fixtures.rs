//! Test fixture loading utilities

use std::path::PathBuf;

use chrono::NaiveDate;
use imcite_core::Corpus;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Seed the shared five-publication corpus
#[allow(dead_code)]
pub fn load_corpus() -> Corpus {
    Corpus::load_json(fixture_path("corpus.json"))
        .unwrap_or_else(|e| panic!("Failed to seed corpus fixture: {}", e))
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_path() {
        let path = fixture_path("corpus.json");
        assert!(path.to_string_lossy().contains("test_fixtures"));
    }

    #[test]
    fn test_load_fixture() {
        let content = load_fixture("corpus.json");
        assert!(content.contains("\"publications\""));
    }
}
