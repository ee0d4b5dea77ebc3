// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration for the coverage reporter and stub synchronizer.
//!
//! Everything the resolver, reporter, and synchronizer need is carried in an
//! explicit [`Config`] value handed down from `main` — no process-wide
//! globals. Defaults mirror the documentation corpus this tool was written
//! for (English canonical tree, French and Japanese targets), and can be
//! overridden by a YAML config file and then by CLI flags, in that order.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder line written into every scaffolded stub file.
pub const DEFAULT_PLACEHOLDER: &str = "# TODO: Translate from English";

/// Resolved configuration for a single `check` or `sync` run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Documentation root containing one subtree per language.
    pub root: PathBuf,
    /// Language whose tree defines the document universe.
    pub canonical: String,
    /// Target languages, in report order.
    pub targets: Vec<String>,
    /// Category subdirectories to consider; empty means the whole tree.
    pub categories: Vec<String>,
    /// Document file extension, without the leading dot.
    pub extension: String,
    /// Single line written into scaffolded stubs.
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            canonical: "en".to_string(),
            targets: vec!["fr".to_string(), "ja".to_string()],
            categories: Vec::new(),
            extension: "md".to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// On-disk YAML shape. Every field is optional; absent fields keep defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    root: Option<PathBuf>,
    canonical: Option<String>,
    targets: Option<Vec<String>>,
    categories: Option<Vec<String>>,
    extension: Option<String>,
    placeholder: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file, merged over the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file: {}", path.display()))?;
        let file: FileConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid config file: {}", path.display()))?;

        let mut config = Config::default();
        if let Some(root) = file.root {
            config.root = root;
        }
        if let Some(canonical) = file.canonical {
            config.canonical = canonical;
        }
        if let Some(targets) = file.targets {
            config.targets = targets;
        }
        if let Some(categories) = file.categories {
            config.categories = categories;
        }
        if let Some(extension) = file.extension {
            config.extension = extension.trim_start_matches('.').to_string();
        }
        if let Some(placeholder) = file.placeholder {
            config.placeholder = placeholder;
        }
        config.validate()?;
        Ok(config)
    }

    /// Restrict the target set to the given codes, preserving the order in
    /// which they were requested. Repeated codes keep their first occurrence;
    /// unknown codes are a configuration error.
    pub fn restrict_targets(&mut self, requested: &[String]) -> Result<()> {
        let mut restricted: Vec<String> = Vec::with_capacity(requested.len());
        for code in requested {
            if !self.targets.iter().any(|t| t == code) {
                bail!(
                    "unknown target language '{}' (configured: {})",
                    code,
                    self.targets.join(", ")
                );
            }
            if !restricted.contains(code) {
                restricted.push(code.clone());
            }
        }
        self.targets = restricted;
        Ok(())
    }

    /// Root of a single language's tree.
    pub fn language_root(&self, language: &str) -> PathBuf {
        self.root.join(language)
    }

    fn validate(&self) -> Result<()> {
        if self.canonical.is_empty() {
            bail!("canonical language must not be empty");
        }
        if self.targets.is_empty() {
            bail!("at least one target language is required");
        }
        if self.targets.iter().any(|t| t == &self.canonical) {
            bail!(
                "canonical language '{}' must not appear in targets",
                self.canonical
            );
        }
        Ok(())
    }
}
