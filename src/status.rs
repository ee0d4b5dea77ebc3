// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation coverage reporting.
//!
//! Read-only: probes each (document, language) slot fresh on every run and
//! builds an in-memory [`CoverageReport`]. A slot whose file content is
//! exactly the configured placeholder line is reported as a stub rather than
//! a finished translation; existence is still the only thing `sync` acts on.

use crate::config::Config;
use crate::resolver;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// State of one (document, language) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    /// File exists with content other than the placeholder line.
    Ok,
    /// File exists but still contains only the placeholder line.
    Stub,
    /// No file at the expected path.
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotStatus {
    pub language: String,
    pub state: SlotState,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentStatus {
    /// Path relative to a language root; the join key across languages.
    pub path: String,
    /// One slot per target language, in configured order.
    pub slots: Vec<SlotStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageSummary {
    pub language: String,
    pub translated: usize,
    pub stubs: usize,
    pub missing: usize,
}

/// Complete coverage report for one `check` run.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub created_at: String,
    pub root: String,
    pub canonical: String,
    pub total_documents: usize,
    pub documents: Vec<DocumentStatus>,
    pub summary: Vec<LanguageSummary>,
}

impl CoverageReport {
    /// True when every slot holds a real translation (no stubs, no gaps).
    pub fn fully_translated(&self) -> bool {
        self.documents
            .iter()
            .flat_map(|doc| &doc.slots)
            .all(|slot| slot.state == SlotState::Ok)
    }
}

/// Probe every slot and assemble the report, in resolver order.
pub fn build_report(config: &Config) -> Result<CoverageReport> {
    let documents = resolver::resolve_documents(config)?;

    let mut statuses = Vec::with_capacity(documents.len());
    for relative in &documents {
        let mut slots = Vec::with_capacity(config.targets.len());
        for language in &config.targets {
            let target = config.language_root(language).join(relative);
            slots.push(SlotStatus {
                language: language.clone(),
                state: probe_slot(&target, &config.placeholder),
            });
        }
        statuses.push(DocumentStatus {
            path: relative.to_string_lossy().replace('\\', "/"),
            slots,
        });
    }

    let summary = summarize(&statuses, &config.targets);

    Ok(CoverageReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        root: config.root.display().to_string(),
        canonical: config.canonical.clone(),
        total_documents: statuses.len(),
        documents: statuses,
        summary,
    })
}

fn probe_slot(path: &Path, placeholder: &str) -> SlotState {
    if !path.is_file() {
        return SlotState::Missing;
    }
    // Unreadable content still counts as present; existence is the contract
    match fs::read_to_string(path) {
        Ok(content) if content.trim() == placeholder => SlotState::Stub,
        _ => SlotState::Ok,
    }
}

fn summarize(documents: &[DocumentStatus], targets: &[String]) -> Vec<LanguageSummary> {
    targets
        .iter()
        .map(|language| {
            let states = documents
                .iter()
                .flat_map(|doc| &doc.slots)
                .filter(|slot| &slot.language == language);
            let mut summary = LanguageSummary {
                language: language.clone(),
                translated: 0,
                stubs: 0,
                missing: 0,
            };
            for slot in states {
                match slot.state {
                    SlotState::Ok => summary.translated += 1,
                    SlotState::Stub => summary.stubs += 1,
                    SlotState::Missing => summary.missing += 1,
                }
            }
            summary
        })
        .collect()
}

/// Print the report as a colored table, one line per document.
pub fn print_report(report: &CoverageReport) {
    println!(
        "\n{}",
        "=== TRANSLATION COVERAGE ===".bold().cyan()
    );
    println!(
        "Root: {}  |  Canonical: {}  |  Documents: {}",
        report.root, report.canonical, report.total_documents
    );
    println!();

    if report.documents.is_empty() {
        println!("  No documents found under the canonical tree.");
        return;
    }

    let width = report
        .documents
        .iter()
        .map(|doc| doc.path.len())
        .max()
        .unwrap_or(0);

    for doc in &report.documents {
        let markers: Vec<String> = doc
            .slots
            .iter()
            .map(|slot| {
                let marker = match slot.state {
                    SlotState::Ok => "ok".green(),
                    SlotState::Stub => "stub".yellow(),
                    SlotState::Missing => "missing".red(),
                };
                format!("{}:{}", slot.language, marker)
            })
            .collect();
        println!("  {:<width$}  {}", doc.path, markers.join("  "));
    }

    println!();
    for summary in &report.summary {
        println!(
            "  {}: {} translated, {} stubs, {} missing",
            summary.language.bold(),
            summary.translated.to_string().green(),
            summary.stubs.to_string().yellow(),
            summary.missing.to_string().red(),
        );
    }
}

/// Write the report as pretty JSON.
pub fn write_report(report: &CoverageReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("cannot write report: {}", path.display()))?;
    Ok(())
}
