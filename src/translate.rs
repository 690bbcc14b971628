//! Nucleotide to protein translation.
//!
//! Translation always starts at offset 0 and reads non-overlapping codons.
//! A trailing remainder of one or two bases is dropped without error; see
//! [`codon_count`] and [`trailing_bases`].
//!
//! Two interchangeable strategies implement [`Translator`]:
//! - [`CodonTableTranslator`] looks codons up in the fixed standard table
//!   and never fails: unknown codons become [`AminoAcid::Unknown`]
//! - [`GeneticCodeTranslator`] delegates to the NCBI tables in
//!   [`crate::genetic_code`], which reject unreadable characters

use std::fmt;

use thiserror::Error;

use crate::amino_acid::AminoAcid;
use crate::codon_table;
use crate::genetic_code::{self, GeneticCode, InvalidCodon};
use crate::session_log;

/// Errors raised by a [`Translator`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error(transparent)]
    InvalidCodon(#[from] InvalidCodon),

    #[error("Unknown genetic code: {0}")]
    UnknownGeneticCode(u8),
}

/// An ordered sequence of amino acid codes, one per input codon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProteinSequence(Vec<AminoAcid>);

impl ProteinSequence {
    pub fn new(residues: Vec<AminoAcid>) -> Self {
        Self(residues)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AminoAcid> {
        self.0.iter()
    }

    /// One-letter rendering (`MAI*X`).
    pub fn to_one_letter(&self) -> String {
        self.0.iter().map(|aa| aa.one_letter()).collect()
    }
}

/// Three-letter codes concatenated, e.g. `MetAlaIle`.
impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in &self.0 {
            f.write_str(aa.three_letter())?;
        }
        Ok(())
    }
}

impl FromIterator<AminoAcid> for ProteinSequence {
    fn from_iter<I: IntoIterator<Item = AminoAcid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ProteinSequence {
    type Item = &'a AminoAcid;
    type IntoIter = std::slice::Iter<'a, AminoAcid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Number of complete codons in a sequence of `len` bases.
pub fn codon_count(len: usize) -> usize {
    len / 3
}

/// Number of trailing bases dropped from a sequence of `len` bases.
pub fn trailing_bases(len: usize) -> usize {
    len % 3
}

/// A nucleotide to protein translation strategy.
pub trait Translator {
    /// Short name shown in the UI and the log.
    fn name(&self) -> &str;

    /// Translates a nucleotide sequence in frame +1.
    fn translate(&self, sequence: &str) -> Result<ProteinSequence, TranslationError>;
}

/// Translates through the fixed standard codon table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodonTableTranslator;

impl Translator for CodonTableTranslator {
    fn name(&self) -> &str {
        "codon table"
    }

    fn translate(&self, sequence: &str) -> Result<ProteinSequence, TranslationError> {
        Ok(translate(sequence))
    }
}

/// Translates through an NCBI genetic code.
#[derive(Debug, Clone)]
pub struct GeneticCodeTranslator {
    code: &'static GeneticCode,
    name: String,
}

impl GeneticCodeTranslator {
    /// Uses the NCBI genetic code with the given ID (1-33).
    pub fn new(id: u8) -> Result<Self, TranslationError> {
        let code = genetic_code::genetic_code(id).ok_or(TranslationError::UnknownGeneticCode(id))?;
        Ok(Self {
            code,
            name: format!("NCBI {} ({})", code.id, code.name),
        })
    }

    pub fn code(&self) -> &GeneticCode {
        self.code
    }
}

impl Default for GeneticCodeTranslator {
    fn default() -> Self {
        let code = genetic_code::standard_code();
        Self {
            code,
            name: format!("NCBI {} ({})", code.id, code.name),
        }
    }
}

impl Translator for GeneticCodeTranslator {
    fn name(&self) -> &str {
        &self.name
    }

    fn translate(&self, sequence: &str) -> Result<ProteinSequence, TranslationError> {
        let letters = self.code.translate(sequence)?;
        Ok(letters.chars().map(AminoAcid::from_one_letter).collect())
    }
}

/// Which [`Translator`] to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslatorKind {
    /// [`CodonTableTranslator`]
    #[default]
    CodonTable,
    /// [`GeneticCodeTranslator`] with an NCBI genetic code ID
    GeneticCode(u8),
}

impl TranslatorKind {
    /// Short label for the status bar.
    pub fn label(self) -> String {
        match self {
            TranslatorKind::CodonTable => "codon table".to_string(),
            TranslatorKind::GeneticCode(id) => format!("NCBI code {}", id),
        }
    }

    pub fn build(self) -> Result<Box<dyn Translator>, TranslationError> {
        Ok(match self {
            TranslatorKind::CodonTable => Box::new(CodonTableTranslator),
            TranslatorKind::GeneticCode(id) => Box::new(GeneticCodeTranslator::new(id)?),
        })
    }
}

/// Translates with the standard codon table.
///
/// The input is uppercased first. Empty input gives an empty protein, and
/// characters outside `ACGT` produce [`AminoAcid::Unknown`] entries.
pub fn translate(sequence: &str) -> ProteinSequence {
    let bases: Vec<char> = sequence.chars().map(|c| c.to_ascii_uppercase()).collect();
    bases
        .chunks_exact(3)
        .map(|codon| {
            let codon: String = codon.iter().collect();
            codon_table::lookup(&codon)
        })
        .collect()
}

/// Runs a translator and turns any failure into `None`.
///
/// `Some(empty)` means the translation succeeded but produced no residues.
pub fn try_translate(translator: &dyn Translator, sequence: &str) -> Option<ProteinSequence> {
    match translator.translate(sequence) {
        Ok(protein) => Some(protein),
        Err(err) => {
            session_log::log(format_args!("{} translation failed: {}", translator.name(), err));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amino_acid::AminoAcid::*;

    #[test]
    fn test_translate_scenario() {
        let p1 = translate("ATGGCCATT");
        let p2 = translate("ATGGCAATT");
        assert_eq!(p1.residues(), &[Met, Ala, Ile]);
        assert_eq!(p1, p2);
        assert_eq!(p1.to_string(), "MetAlaIle");
        assert_eq!(p1.to_one_letter(), "MAI");
    }

    #[test]
    fn test_translate_length_is_floor_third() {
        let bases = "ATGGCCATTGCAAGT";
        for len in 0..=bases.len() {
            let protein = translate(&bases[..len]);
            assert_eq!(protein.len(), len / 3, "length {}", len);
            assert_eq!(protein.len(), codon_count(len));
        }
    }

    #[test]
    fn test_trailing_bases_dropped() {
        assert_eq!(translate("ATGGC").residues(), &[Met]);
        assert_eq!(trailing_bases(5), 2);
        assert_eq!(trailing_bases(6), 0);
        assert!(translate("AT").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(translate("").is_empty());
        assert_eq!(CodonTableTranslator.translate(""), Ok(ProteinSequence::default()));
    }

    #[test]
    fn test_lowercase_input() {
        assert_eq!(translate("atggcc").residues(), &[Met, Ala]);
    }

    #[test]
    fn test_stop_and_unknown() {
        assert_eq!(translate("TAA").residues(), &[Stop]);
        assert_eq!(translate("ATN").residues(), &[Unknown]);
        assert_eq!(translate("ATGxyz").residues(), &[Met, Unknown]);
        assert_eq!(translate("ATN").to_string(), "Unknown");
    }

    #[test]
    fn test_non_ascii_input() {
        // Codons are counted in characters, not bytes
        let protein = translate("ATGé");
        assert_eq!(protein.residues(), &[Met]);
        let protein = translate("éATGCC");
        assert_eq!(protein.residues(), &[Unknown, Ala]);
    }

    #[test]
    fn test_genetic_code_translator() {
        let translator = GeneticCodeTranslator::default();
        let protein = translator.translate("ATGGCCATTTAA").unwrap();
        assert_eq!(protein.residues(), &[Met, Ala, Ile, Stop]);
        assert_eq!(translator.translate("ATN").unwrap().residues(), &[Unknown]);
        assert_eq!(translator.translate("AUG").unwrap().residues(), &[Met]);
    }

    #[test]
    fn test_genetic_code_translator_rejects_invalid() {
        let translator = GeneticCodeTranslator::default();
        let err = translator.translate("ATGATZ").unwrap_err();
        assert!(matches!(err, TranslationError::InvalidCodon(ref c) if c.position == 3));
    }

    #[test]
    fn test_unknown_genetic_code() {
        assert_eq!(
            GeneticCodeTranslator::new(8).unwrap_err(),
            TranslationError::UnknownGeneticCode(8)
        );
        let mito = GeneticCodeTranslator::new(2).unwrap();
        assert_eq!(mito.translate("TGA").unwrap().residues(), &[Trp]);
        assert!(mito.name().contains("Vertebrate Mitochondrial"));
    }

    #[test]
    fn test_translator_kind_build() {
        let table = TranslatorKind::default().build().unwrap();
        assert_eq!(table.name(), "codon table");
        let ncbi = TranslatorKind::GeneticCode(11).build().unwrap();
        assert!(ncbi.name().starts_with("NCBI 11"));
        assert!(TranslatorKind::GeneticCode(0).build().is_err());
    }

    #[test]
    fn test_try_translate_distinguishes_failure_from_empty() {
        let strict = GeneticCodeTranslator::default();
        assert_eq!(try_translate(&strict, "AT"), Some(ProteinSequence::default()));
        assert_eq!(try_translate(&strict, "ATZ"), None);
        assert_eq!(try_translate(&CodonTableTranslator, "ATZ").map(|p| p.len()), Some(1));
    }
}
