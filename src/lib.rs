//! # protcompare - DNA translation and protein comparison
//!
//! Translates two DNA sequences with the standard genetic code and compares
//! the resulting proteins, either by amino acid composition (stacked-bar
//! chart) or position by position (matches and differences).
//!
//! ## Architecture
//!
//! Core, leaf first:
//! - `amino_acid`: amino acid codes with `Stop` and `Unknown` sentinels
//! - `codon_table`: the fixed 64-entry standard code
//! - `genetic_code`: NCBI genetic code tables with strict translation
//! - `translate`: the `Translator` strategy and protein sequences
//! - `compare`: frequency and positional comparators
//! - `pipeline`: one compare request, from raw text to report
//!
//! Presentation:
//! - `report`: plain-text output for the command line
//! - `model`, `event`, `ui`, `controller`: the interactive terminal UI
//!
//! `session_log` writes optional diagnostics to a file.
//!
//! ```
//! use protcompare::compare::{compare_by_position, MismatchPolicy};
//! use protcompare::translate::translate;
//!
//! let first = translate("ATGGCCATT");
//! let second = translate("ATGGCAATT");
//! assert_eq!(first.to_string(), "MetAlaIle");
//!
//! let cmp = compare_by_position(&first, &second, MismatchPolicy::default());
//! assert_eq!((cmp.matches, cmp.mismatches), (3, 0));
//! ```

pub mod amino_acid;
pub mod codon_table;
pub mod compare;
pub mod controller;
pub mod event;
pub mod genetic_code;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod session_log;
pub mod translate;
pub mod ui;
