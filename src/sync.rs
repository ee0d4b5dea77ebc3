// SPDX-License-Identifier: PMPL-1.0-or-later

//! Stub synchronizer.
//!
//! Fills every missing (document, language) slot with a one-line placeholder
//! file. Existing files are never touched, so the operation is idempotent and
//! non-destructive. Each stub is written to a temporary sibling and renamed
//! into place, so a failed write never leaves a partial file behind.
//!
//! Write failures are collected per slot and the run continues; the caller
//! decides the exit code from the outcome.

use crate::config::Config;
use crate::resolver;
use anyhow::Result;
use colored::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A slot the synchronizer could not fill.
#[derive(Debug)]
pub struct SyncFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of one `sync` run.
#[derive(Debug, Default)]
pub struct SyncOutcome {
    /// Stub files created this run, in processing order.
    pub created: Vec<PathBuf>,
    /// Slots that already had a file and were left untouched.
    pub skipped: usize,
    /// Slots that could not be filled.
    pub failures: Vec<SyncFailure>,
}

impl SyncOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Scaffold placeholder files for every missing slot.
///
/// With `dry_run` set, missing slots are recorded in `created` but nothing
/// is written. Only a resolver failure (missing canonical tree) aborts the
/// run; per-slot write errors are collected in the outcome.
pub fn run(config: &Config, dry_run: bool) -> Result<SyncOutcome> {
    let documents = resolver::resolve_documents(config)?;
    let mut outcome = SyncOutcome::default();

    for relative in &documents {
        for language in &config.targets {
            let target = config.language_root(language).join(relative);
            if target.exists() {
                outcome.skipped += 1;
                continue;
            }
            if dry_run {
                outcome.created.push(target);
                continue;
            }
            match write_stub(&target, &config.placeholder) {
                Ok(()) => outcome.created.push(target),
                Err(e) => outcome.failures.push(SyncFailure {
                    path: target,
                    error: e.to_string(),
                }),
            }
        }
    }

    Ok(outcome)
}

fn write_stub(target: &Path, placeholder: &str) -> io::Result<()> {
    let parent = target.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "target path has no parent")
    })?;
    // create_dir_all treats an already existing directory as success
    fs::create_dir_all(parent)?;

    let file_name = target
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "target path has no name"))?;
    let tmp = parent.join(format!(".{}.transync-tmp", file_name.to_string_lossy()));

    fs::write(&tmp, format!("{placeholder}\n"))?;
    if let Err(e) = fs::rename(&tmp, target) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

/// Print the outcome; created files to stdout, failures to stderr.
pub fn print_outcome(outcome: &SyncOutcome, dry_run: bool) {
    let verb = if dry_run { "would create" } else { "created" };

    if outcome.created.is_empty() {
        println!(
            "{} ({} slots already filled)",
            "Nothing to do".green(),
            outcome.skipped
        );
    } else {
        for path in &outcome.created {
            println!("  {} {}", verb.green(), path.display());
        }
        println!(
            "\n{} stub(s) {}, {} slot(s) already filled",
            outcome.created.len().to_string().bold(),
            verb,
            outcome.skipped
        );
    }

    if !outcome.failures.is_empty() {
        eprintln!("\n{}", "Failed slots:".red().bold());
        for failure in &outcome.failures {
            eprintln!("  {}: {}", failure.path.display(), failure.error);
        }
    }
}
