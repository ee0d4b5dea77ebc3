// SPDX-License-Identifier: PMPL-1.0-or-later

//! transync: translation coverage reporting and stub scaffolding
//!
//! Two subcommands over the same document universe: `check` reports which
//! canonical documents have a counterpart file per target language, `sync`
//! creates placeholder stubs for the missing ones.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use transync::config::Config;
use transync::{status, sync};

#[derive(Parser)]
#[command(name = "transync")]
#[command(version)]
#[command(about = "Translation coverage reporting and stub scaffolding for documentation trees")]
#[command(long_about = None)]
struct Cli {
    /// Documentation root (contains one subtree per language)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// YAML config file (languages, categories, placeholder)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Restrict target languages (comma-separated, report order)
    #[arg(short, long, global = true, value_delimiter = ',')]
    lang: Option<Vec<String>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report translation coverage per document and language
    Check {
        /// Write the coverage report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit non-zero unless every slot holds a real translation
        #[arg(short, long)]
        strict: bool,
    },

    /// Create placeholder stubs for missing translations
    Sync {
        /// Placeholder line written into each stub
        #[arg(short, long)]
        placeholder: Option<String>,

        /// List what would be created without writing anything
        #[arg(short, long)]
        dry_run: bool,
    },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(langs) = &cli.lang {
        config.restrict_targets(langs)?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match cli.command {
        Commands::Check { output, strict } => {
            let report = status::build_report(&config)?;
            status::print_report(&report);

            if let Some(path) = output {
                status::write_report(&report, &path)?;
                println!("\nReport saved to: {}", path.display());
            }

            if strict && !report.fully_translated() {
                bail!("translation coverage is incomplete");
            }
        }

        Commands::Sync {
            placeholder,
            dry_run,
        } => {
            if let Some(line) = placeholder {
                config.placeholder = line;
            }

            let outcome = sync::run(&config, dry_run)?;
            sync::print_outcome(&outcome, dry_run);

            if !outcome.is_clean() {
                bail!("{} slot(s) could not be filled", outcome.failures.len());
            }
        }
    }

    Ok(())
}
