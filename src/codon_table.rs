//! The standard genetic code as a fixed lookup table.
//!
//! The table is an immutable static with exactly 64 entries, one per
//! codon, laid out in NCBI order (T, C, A, G for each base position).
//! Lookups are case-sensitive: only uppercase `A`, `C`, `G`, `T` keys exist,
//! so callers uppercase first. Every other key maps to
//! [`AminoAcid::Unknown`].

use crate::amino_acid::AminoAcid;
use crate::amino_acid::AminoAcid::*;

/// Bases in NCBI table order.
const BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];

/// Standard genetic code (NCBI table 1).
pub static STANDARD_CODONS: [(&str, AminoAcid); 64] = [
    ("TTT", Phe), ("TTC", Phe), ("TTA", Leu), ("TTG", Leu),
    ("TCT", Ser), ("TCC", Ser), ("TCA", Ser), ("TCG", Ser),
    ("TAT", Tyr), ("TAC", Tyr), ("TAA", Stop), ("TAG", Stop),
    ("TGT", Cys), ("TGC", Cys), ("TGA", Stop), ("TGG", Trp),
    ("CTT", Leu), ("CTC", Leu), ("CTA", Leu), ("CTG", Leu),
    ("CCT", Pro), ("CCC", Pro), ("CCA", Pro), ("CCG", Pro),
    ("CAT", His), ("CAC", His), ("CAA", Gln), ("CAG", Gln),
    ("CGT", Arg), ("CGC", Arg), ("CGA", Arg), ("CGG", Arg),
    ("ATT", Ile), ("ATC", Ile), ("ATA", Ile), ("ATG", Met),
    ("ACT", Thr), ("ACC", Thr), ("ACA", Thr), ("ACG", Thr),
    ("AAT", Asn), ("AAC", Asn), ("AAA", Lys), ("AAG", Lys),
    ("AGT", Ser), ("AGC", Ser), ("AGA", Arg), ("AGG", Arg),
    ("GTT", Val), ("GTC", Val), ("GTA", Val), ("GTG", Val),
    ("GCT", Ala), ("GCC", Ala), ("GCA", Ala), ("GCG", Ala),
    ("GAT", Asp), ("GAC", Asp), ("GAA", Glu), ("GAG", Glu),
    ("GGT", Gly), ("GGC", Gly), ("GGA", Gly), ("GGG", Gly),
];

fn base_index(b: u8) -> Option<usize> {
    BASES.iter().position(|&base| base == b)
}

/// Index of an uppercase DNA codon in [`STANDARD_CODONS`].
pub(crate) fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Looks up a codon in the standard table.
///
/// Returns [`AminoAcid::Unknown`] for anything that is not one of the 64
/// uppercase DNA codons (lowercase, `N`, `U`, wrong length, ...).
pub fn lookup(codon: &str) -> AminoAcid {
    codon_index(codon.as_bytes())
        .map(|idx| STANDARD_CODONS[idx].1)
        .unwrap_or(AminoAcid::Unknown)
}

/// Returns true if the codon is one of the three stop codons.
pub fn is_stop_codon(codon: &str) -> bool {
    lookup(codon) == AminoAcid::Stop
}

/// All codons encoding the given amino acid.
pub fn codons_for(aa: AminoAcid) -> impl Iterator<Item = &'static str> {
    STANDARD_CODONS
        .iter()
        .filter(move |(_, target)| *target == aa)
        .map(|(codon, _)| *codon)
}
