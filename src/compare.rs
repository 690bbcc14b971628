//! Protein comparison.
//!
//! Two comparators, neither of which performs alignment:
//! - Frequency: count each amino acid in both proteins and line the counts
//!   up for a stacked-bar chart
//! - Positional: walk both proteins index by index and count identical
//!   residues

use std::collections::BTreeMap;

use crate::amino_acid::AminoAcid;
use crate::translate::ProteinSequence;

/// Occurrence count of each amino acid code in one protein.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AminoAcidCounts(BTreeMap<AminoAcid, usize>);

impl AminoAcidCounts {
    /// Count for `aa`, 0 when absent.
    pub fn get(&self, aa: AminoAcid) -> usize {
        self.0.get(&aa).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of distinct codes seen.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, usize)> + '_ {
        self.0.iter().map(|(aa, n)| (*aa, *n))
    }
}

/// Counts every amino acid code in a protein, in one pass.
pub fn count_amino_acids(protein: &ProteinSequence) -> AminoAcidCounts {
    let mut counts = BTreeMap::new();
    for &aa in protein {
        *counts.entry(aa).or_insert(0) += 1;
    }
    AminoAcidCounts(counts)
}

/// Counts of two proteins aligned on the union of their amino acids.
///
/// `labels`, `first` and `second` always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyComparison {
    pub labels: Vec<AminoAcid>,
    pub first: Vec<usize>,
    pub second: Vec<usize>,
}

impl FrequencyComparison {
    /// `(amino acid, first count, second count)` per chart column.
    pub fn rows(&self) -> impl Iterator<Item = (AminoAcid, usize, usize)> + '_ {
        self.labels
            .iter()
            .zip(self.first.iter().zip(&self.second))
            .map(|(aa, (a, b))| (*aa, *a, *b))
    }

    /// Height of the tallest stacked column.
    pub fn max_stacked(&self) -> usize {
        self.rows().map(|(_, a, b)| a + b).max().unwrap_or(0)
    }

    /// Total residues counted on each side.
    pub fn totals(&self) -> (usize, usize) {
        (self.first.iter().sum(), self.second.iter().sum())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Lines up two count maps on the union of their keys, filling gaps with 0.
///
/// Keys come out in [`AminoAcid`] declaration order, each exactly once.
pub fn compare_frequencies(
    first: &AminoAcidCounts,
    second: &AminoAcidCounts,
) -> FrequencyComparison {
    let mut labels: Vec<AminoAcid> = first.keys().chain(second.keys()).collect();
    labels.sort_unstable();
    labels.dedup();

    let first_series = labels.iter().map(|&aa| first.get(aa)).collect();
    let second_series = labels.iter().map(|&aa| second.get(aa)).collect();

    FrequencyComparison {
        labels,
        first: first_series,
        second: second_series,
    }
}

/// How mismatches are counted when the proteins differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// `len(first) - matches`. Ignores any extra length of the second
    /// protein and counts extra length of the first as mismatches.
    FirstLength,
    /// `max(len(first), len(second)) - matches`. Every unpaired residue
    /// counts as a mismatch, whichever side it is on.
    #[default]
    LongerLength,
    /// `min(len(first), len(second)) - matches`. Only paired residues
    /// count; the length difference is reported as `unpaired`.
    ComparedOnly,
}

impl MismatchPolicy {
    pub fn label(self) -> &'static str {
        match self {
            MismatchPolicy::FirstLength => "first",
            MismatchPolicy::LongerLength => "longer",
            MismatchPolicy::ComparedOnly => "compared",
        }
    }

    /// Parses the names accepted by the `:policy` command.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "first" => Some(MismatchPolicy::FirstLength),
            "longer" => Some(MismatchPolicy::LongerLength),
            "compared" => Some(MismatchPolicy::ComparedOnly),
            _ => None,
        }
    }
}

/// Result of a position-by-position comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionalComparison {
    /// Paired positions with identical codes
    pub matches: usize,
    /// Mismatches under the chosen [`MismatchPolicy`]
    pub mismatches: usize,
    /// Number of paired positions, `min(len1, len2)`
    pub compared: usize,
    /// Residues of the longer protein left without a partner
    pub unpaired: usize,
    pub policy: MismatchPolicy,
}

impl PositionalComparison {
    /// Percentage of paired positions that match; 0 when nothing was paired.
    pub fn identity(&self) -> f64 {
        if self.compared == 0 {
            0.0
        } else {
            self.matches as f64 * 100.0 / self.compared as f64
        }
    }
}

/// Compares two proteins index by index up to the shorter length.
///
/// No gaps and no partial credit: extra residues of the longer protein are
/// never paired.
pub fn compare_by_position(
    first: &ProteinSequence,
    second: &ProteinSequence,
    policy: MismatchPolicy,
) -> PositionalComparison {
    let matches = first
        .iter()
        .zip(second.iter())
        .filter(|(a, b)| a == b)
        .count();
    let compared = first.len().min(second.len());
    let longer = first.len().max(second.len());

    let mismatches = match policy {
        MismatchPolicy::FirstLength => first.len() - matches,
        MismatchPolicy::LongerLength => longer - matches,
        MismatchPolicy::ComparedOnly => compared - matches,
    };

    PositionalComparison {
        matches,
        mismatches,
        compared,
        unpaired: longer - compared,
        policy,
    }
}
