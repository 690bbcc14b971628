//! One compare request, from raw text to a comparison report.
//!
//! Every run recomputes everything from the input text. Failures end the
//! request and are reported to the user:
//! - [`ComparisonError::MissingInput`] is a warning, nothing is computed
//! - [`ComparisonError::TranslationFailed`] is an error, nothing is shown
//! - [`ComparisonError::EmptyProtein`] is an error: the input was shorter
//!   than one codon

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use crate::compare::{
    compare_by_position, compare_frequencies, count_amino_acids, FrequencyComparison,
    MismatchPolicy, PositionalComparison,
};
use crate::session_log;
use crate::translate::{trailing_bases, try_translate, ProteinSequence, Translator};

/// Which input field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// How bad a failed request is, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Errors that end a compare request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("Please enter both DNA sequences (the {0} one is empty)")]
    MissingInput(Side),

    #[error("Could not translate the {0} sequence")]
    TranslationFailed(Side),

    #[error("The {0} sequence is shorter than one codon")]
    EmptyProtein(Side),
}

impl ComparisonError {
    pub fn severity(&self) -> Severity {
        match self {
            ComparisonError::MissingInput(_) => Severity::Warning,
            ComparisonError::TranslationFailed(_) | ComparisonError::EmptyProtein(_) => {
                Severity::Error
            }
        }
    }
}

/// Which comparator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonMode {
    /// Amino acid counts, shown as a stacked-bar chart
    #[default]
    Frequency,
    /// Position-by-position identity
    Positional,
}

impl ComparisonMode {
    pub fn label(self) -> &'static str {
        match self {
            ComparisonMode::Frequency => "frequency",
            ComparisonMode::Positional => "positional",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ComparisonMode::Frequency => ComparisonMode::Positional,
            ComparisonMode::Positional => ComparisonMode::Frequency,
        }
    }

    /// Parses the names accepted by the `:mode` command.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "freq" | "frequency" => Some(ComparisonMode::Frequency),
            "pos" | "positional" => Some(ComparisonMode::Positional),
            _ => None,
        }
    }
}

/// Raw input for one compare request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub first: String,
    pub second: String,
    pub mode: ComparisonMode,
    pub policy: MismatchPolicy,
    /// Remove whitespace before translating. Off by default: the text is
    /// read as typed and a space inside a codon makes it `Unknown`.
    pub strip_whitespace: bool,
}

/// The comparator output.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonResult {
    Frequency(FrequencyComparison),
    Positional(PositionalComparison),
}

/// One translated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedInput {
    pub protein: ProteinSequence,
    /// Characters handed to the translator
    pub bases: usize,
    /// Trailing bases that did not fill a codon
    pub dropped: usize,
}

/// Everything the presentation needs after a successful request.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub first: TranslatedInput,
    pub second: TranslatedInput,
    pub result: ComparisonResult,
}

/// Removes whitespace (line breaks from pasted text, spaces).
pub fn clean_input(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// The text one side is translated from.
fn input_text(raw: &str, strip_whitespace: bool) -> Cow<'_, str> {
    if strip_whitespace {
        Cow::Owned(clean_input(raw))
    } else {
        Cow::Borrowed(raw)
    }
}

fn translate_side(
    translator: &dyn Translator,
    text: &str,
    side: Side,
) -> Result<TranslatedInput, ComparisonError> {
    let protein = try_translate(translator, text).ok_or(ComparisonError::TranslationFailed(side))?;
    if protein.is_empty() {
        return Err(ComparisonError::EmptyProtein(side));
    }
    let bases = text.chars().count();
    Ok(TranslatedInput {
        protein,
        bases,
        dropped: trailing_bases(bases),
    })
}

/// Runs one full translate-and-compare pass.
pub fn run_comparison(
    request: &ComparisonRequest,
    translator: &dyn Translator,
) -> Result<ComparisonReport, ComparisonError> {
    let outcome = run_inner(request, translator);
    match &outcome {
        Ok(report) => session_log::log(format_args!(
            "{} comparison with {}: {} vs {} residues",
            request.mode.label(),
            translator.name(),
            report.first.protein.len(),
            report.second.protein.len()
        )),
        Err(err) => session_log::log(format_args!("comparison rejected: {}", err)),
    }
    outcome
}

fn run_inner(
    request: &ComparisonRequest,
    translator: &dyn Translator,
) -> Result<ComparisonReport, ComparisonError> {
    let first_text = input_text(&request.first, request.strip_whitespace);
    let second_text = input_text(&request.second, request.strip_whitespace);
    if first_text.is_empty() {
        return Err(ComparisonError::MissingInput(Side::First));
    }
    if second_text.is_empty() {
        return Err(ComparisonError::MissingInput(Side::Second));
    }

    let first = translate_side(translator, &first_text, Side::First)?;
    let second = translate_side(translator, &second_text, Side::Second)?;

    let result = match request.mode {
        ComparisonMode::Frequency => ComparisonResult::Frequency(compare_frequencies(
            &count_amino_acids(&first.protein),
            &count_amino_acids(&second.protein),
        )),
        ComparisonMode::Positional => ComparisonResult::Positional(compare_by_position(
            &first.protein,
            &second.protein,
            request.policy,
        )),
    };

    Ok(ComparisonReport {
        first,
        second,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amino_acid::AminoAcid::*;
    use crate::translate::{translate, CodonTableTranslator, GeneticCodeTranslator};

    fn request(first: &str, second: &str, mode: ComparisonMode) -> ComparisonRequest {
        ComparisonRequest {
            first: first.to_string(),
            second: second.to_string(),
            mode,
            ..ComparisonRequest::default()
        }
    }

    #[test]
    fn test_positional_scenario() {
        let req = request("ATGGCCATT", "ATGGCAATT", ComparisonMode::Positional);
        let report = run_comparison(&req, &CodonTableTranslator).unwrap();
        assert_eq!(report.first.protein.to_string(), "MetAlaIle");
        assert_eq!(report.second.protein.to_string(), "MetAlaIle");
        match report.result {
            ComparisonResult::Positional(cmp) => {
                assert_eq!(cmp.matches, 3);
                assert_eq!(cmp.mismatches, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_frequency_scenario() {
        let req = request("ATGGCCATT", "TAAGGG", ComparisonMode::Frequency);
        let report = run_comparison(&req, &CodonTableTranslator).unwrap();
        match report.result {
            ComparisonResult::Frequency(cmp) => {
                assert_eq!(cmp.labels, vec![Ala, Gly, Ile, Met, Stop]);
                assert_eq!(cmp.first, vec![1, 0, 1, 1, 0]);
                assert_eq!(cmp.second, vec![0, 1, 0, 0, 1]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_input() {
        let req = request("", "ATG", ComparisonMode::Frequency);
        let err = run_comparison(&req, &CodonTableTranslator).unwrap_err();
        assert_eq!(err, ComparisonError::MissingInput(Side::First));
        assert_eq!(err.severity(), Severity::Warning);

        let req = request("ATG", "", ComparisonMode::Frequency);
        let err = run_comparison(&req, &CodonTableTranslator).unwrap_err();
        assert_eq!(err, ComparisonError::MissingInput(Side::Second));
    }

    #[test]
    fn test_whitespace_only_input_is_translated() {
        let req = request("   ", "ATG", ComparisonMode::Frequency);
        let report = run_comparison(&req, &CodonTableTranslator).unwrap();
        assert_eq!(report.first.protein.residues(), &[Unknown]);

        let stripped = ComparisonRequest {
            strip_whitespace: true,
            ..req
        };
        let err = run_comparison(&stripped, &CodonTableTranslator).unwrap_err();
        assert_eq!(err, ComparisonError::MissingInput(Side::First));
    }

    #[test]
    fn test_translation_failure() {
        let strict = GeneticCodeTranslator::default();
        let err = run_comparison(&request("ATG", "ATZ", ComparisonMode::Positional), &strict)
            .unwrap_err();
        assert_eq!(err, ComparisonError::TranslationFailed(Side::Second));
        assert_eq!(err.severity(), Severity::Error);
    }

    #[test]
    fn test_unknown_codon_is_not_an_error() {
        let req = request("ATN", "ATG", ComparisonMode::Frequency);
        let report = run_comparison(&req, &CodonTableTranslator).unwrap();
        assert_eq!(report.first.protein.residues(), &[Unknown]);
    }

    #[test]
    fn test_empty_protein() {
        let req = request("AT", "ATG", ComparisonMode::Frequency);
        let err = run_comparison(&req, &CodonTableTranslator).unwrap_err();
        assert_eq!(err, ComparisonError::EmptyProtein(Side::First));
    }

    #[test]
    fn test_raw_text_matches_translate() {
        for raw in ["ATG GCC", "ATGGCC\nATT", "atg gcc att"] {
            let req = request(raw, "ATG", ComparisonMode::Frequency);
            let report = run_comparison(&req, &CodonTableTranslator).unwrap();
            assert_eq!(report.first.protein, translate(raw), "input {:?}", raw);
            assert_eq!(report.first.bases, raw.chars().count());
        }

        let report = run_comparison(
            &request("ATG GCC", "ATG", ComparisonMode::Frequency),
            &CodonTableTranslator,
        )
        .unwrap();
        assert_eq!(report.first.protein.residues(), &[Met, Unknown]);
        assert_eq!(report.first.dropped, 1);
    }

    #[test]
    fn test_whitespace_is_stripped_on_request() {
        let req = ComparisonRequest {
            strip_whitespace: true,
            ..request("ATG GCC\nATT\n", "ATGGCAATTGC", ComparisonMode::Positional)
        };
        let report = run_comparison(&req, &CodonTableTranslator).unwrap();
        assert_eq!(report.first.bases, 9);
        assert_eq!(report.first.dropped, 0);
        assert_eq!(report.second.bases, 11);
        assert_eq!(report.second.dropped, 2);
        assert_eq!(report.first.protein, report.second.protein);
    }

    #[test]
    fn test_idempotent() {
        for mode in [ComparisonMode::Frequency, ComparisonMode::Positional] {
            let req = request("ATGGCCATTTAA", "ATGGCAATTNNNGG", mode);
            let a = run_comparison(&req, &CodonTableTranslator);
            let b = run_comparison(&req, &CodonTableTranslator);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_mode_parse_and_toggle() {
        assert_eq!(ComparisonMode::parse("pos"), Some(ComparisonMode::Positional));
        assert_eq!(ComparisonMode::parse("frequency"), Some(ComparisonMode::Frequency));
        assert_eq!(ComparisonMode::parse("chart"), None);
        assert_eq!(ComparisonMode::Frequency.toggled(), ComparisonMode::Positional);
        assert_eq!(ComparisonMode::Positional.toggled(), ComparisonMode::Frequency);
    }
}
