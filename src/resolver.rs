// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document set resolver.
//!
//! Walks the canonical language tree and produces the universe of relative
//! document paths that every target language is measured against. Directory
//! listing order is filesystem-dependent, so the collected set is sorted
//! lexicographically before it is returned; report output and tests rely on
//! that ordering.

use crate::config::Config;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect the relative paths of all canonical documents, sorted.
///
/// Fails before any other work when the canonical tree does not exist —
/// a missing source tree is a configuration error, not "zero documents".
pub fn resolve_documents(config: &Config) -> Result<Vec<PathBuf>> {
    let canonical_root = config.language_root(&config.canonical);
    if !canonical_root.is_dir() {
        bail!(
            "canonical tree not found: {} (language '{}')",
            canonical_root.display(),
            config.canonical
        );
    }

    let mut documents = Vec::new();
    if config.categories.is_empty() {
        collect(&canonical_root, &canonical_root, &config.extension, &mut documents);
    } else {
        for category in &config.categories {
            let category_root = canonical_root.join(category);
            // A category directory may legitimately not exist yet
            if category_root.is_dir() {
                collect(&canonical_root, &category_root, &config.extension, &mut documents);
            }
        }
    }

    documents.sort();
    // Overlapping or repeated categories may visit a document twice
    documents.dedup();
    Ok(documents)
}

fn collect(canonical_root: &Path, start: &Path, extension: &str, documents: &mut Vec<PathBuf>) {
    let walker = WalkDir::new(start).into_iter().filter_entry(|entry| {
        let name = entry.file_name().to_string_lossy();
        !(entry.file_type().is_dir() && name.starts_with('.'))
    });

    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if !matches {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(canonical_root) {
            documents.push(relative.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_at(root: &Path) -> Config {
        Config {
            root: root.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn missing_canonical_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = resolve_documents(&config_at(dir.path()))
            .unwrap_err()
            .to_string();
        assert!(err.contains("canonical tree not found"), "{err}");
    }

    #[test]
    fn collects_only_matching_extension() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("docs/en/architecture");
        fs::create_dir_all(&en).unwrap();
        fs::write(en.join("SOLID.md"), "# SOLID").unwrap();
        fs::write(en.join("notes.txt"), "scratch").unwrap();

        let docs = resolve_documents(&config_at(&dir.path().join("docs"))).unwrap();
        assert_eq!(docs, vec![PathBuf::from("architecture/SOLID.md")]);
    }

    #[test]
    fn paths_are_sorted_lexicographically() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("docs/en");
        fs::create_dir_all(en.join("infrastructure")).unwrap();
        fs::create_dir_all(en.join("architecture")).unwrap();
        fs::write(en.join("infrastructure/ci.md"), "").unwrap();
        fs::write(en.join("architecture/DDD.md"), "").unwrap();
        fs::write(en.join("architecture/SOLID.md"), "").unwrap();

        let docs = resolve_documents(&config_at(&dir.path().join("docs"))).unwrap();
        assert_eq!(
            docs,
            vec![
                PathBuf::from("architecture/DDD.md"),
                PathBuf::from("architecture/SOLID.md"),
                PathBuf::from("infrastructure/ci.md"),
            ]
        );
    }

    #[test]
    fn categories_restrict_the_universe() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("docs/en");
        fs::create_dir_all(en.join("architecture")).unwrap();
        fs::create_dir_all(en.join("development")).unwrap();
        fs::write(en.join("architecture/DDD.md"), "").unwrap();
        fs::write(en.join("development/tdd.md"), "").unwrap();

        let mut config = config_at(&dir.path().join("docs"));
        config.categories = vec!["development".to_string()];

        let docs = resolve_documents(&config).unwrap();
        assert_eq!(docs, vec![PathBuf::from("development/tdd.md")]);
    }

    #[test]
    fn overlapping_categories_yield_each_document_once() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("docs/en");
        fs::create_dir_all(en.join("architecture/core")).unwrap();
        fs::write(en.join("architecture/DDD.md"), "").unwrap();
        fs::write(en.join("architecture/core/layers.md"), "").unwrap();

        let mut config = config_at(&dir.path().join("docs"));
        config.categories = vec![
            "architecture".to_string(),
            "architecture".to_string(),
            "architecture/core".to_string(),
        ];

        let docs = resolve_documents(&config).unwrap();
        assert_eq!(
            docs,
            vec![
                PathBuf::from("architecture/DDD.md"),
                PathBuf::from("architecture/core/layers.md"),
            ]
        );
    }

    #[test]
    fn absent_category_yields_no_documents() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs/en")).unwrap();

        let mut config = config_at(&dir.path().join("docs"));
        config.categories = vec!["architecture".to_string()];

        let docs = resolve_documents(&config).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn hidden_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("docs/en");
        fs::create_dir_all(en.join(".drafts")).unwrap();
        fs::write(en.join(".drafts/wip.md"), "").unwrap();
        fs::write(en.join("README.md"), "").unwrap();

        let docs = resolve_documents(&config_at(&dir.path().join("docs"))).unwrap();
        assert_eq!(docs, vec![PathBuf::from("README.md")]);
    }
}
