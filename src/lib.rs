// SPDX-License-Identifier: PMPL-1.0-or-later

//! transync — translation coverage and stub scaffolding for documentation trees.
//!
//! A documentation corpus published in several languages keeps one subtree per
//! language under a shared root (`<root>/<language>/<category>/<file>`). The
//! canonical language's tree defines which documents exist; this crate checks
//! which of them have a counterpart file in each target language (`check`) and
//! scaffolds one-line placeholder stubs into the missing slots (`sync`).
//!
//! The filesystem is the single source of truth: every run probes it fresh,
//! nothing is cached, and `sync` never overwrites an existing file.

pub mod config;
pub mod resolver;
pub mod status;
pub mod sync;
