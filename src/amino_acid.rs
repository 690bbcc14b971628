//! Amino acid codes.
//!
//! The twenty standard residues plus two sentinels:
//! - `Stop` for the three stop codons
//! - `Unknown` for any codon the table does not know (ambiguous bases,
//!   invalid characters)
//!
//! Residues are displayed with their three-letter abbreviation ("Ala",
//! "Gly", ...). The one-letter form is used to talk to the NCBI tables.

use std::fmt;

/// An amino acid, a stop signal, or the unknown sentinel.
///
/// The declaration order is the order used for chart columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    Stop,
    Unknown,
}

impl AminoAcid {
    /// All codes, in display order.
    pub const ALL: [AminoAcid; 22] = [
        AminoAcid::Ala,
        AminoAcid::Arg,
        AminoAcid::Asn,
        AminoAcid::Asp,
        AminoAcid::Cys,
        AminoAcid::Gln,
        AminoAcid::Glu,
        AminoAcid::Gly,
        AminoAcid::His,
        AminoAcid::Ile,
        AminoAcid::Leu,
        AminoAcid::Lys,
        AminoAcid::Met,
        AminoAcid::Phe,
        AminoAcid::Pro,
        AminoAcid::Ser,
        AminoAcid::Thr,
        AminoAcid::Trp,
        AminoAcid::Tyr,
        AminoAcid::Val,
        AminoAcid::Stop,
        AminoAcid::Unknown,
    ];

    /// Three-letter abbreviation, or "Stop"/"Unknown" for the sentinels.
    pub fn three_letter(self) -> &'static str {
        match self {
            AminoAcid::Ala => "Ala",
            AminoAcid::Arg => "Arg",
            AminoAcid::Asn => "Asn",
            AminoAcid::Asp => "Asp",
            AminoAcid::Cys => "Cys",
            AminoAcid::Gln => "Gln",
            AminoAcid::Glu => "Glu",
            AminoAcid::Gly => "Gly",
            AminoAcid::His => "His",
            AminoAcid::Ile => "Ile",
            AminoAcid::Leu => "Leu",
            AminoAcid::Lys => "Lys",
            AminoAcid::Met => "Met",
            AminoAcid::Phe => "Phe",
            AminoAcid::Pro => "Pro",
            AminoAcid::Ser => "Ser",
            AminoAcid::Thr => "Thr",
            AminoAcid::Trp => "Trp",
            AminoAcid::Tyr => "Tyr",
            AminoAcid::Val => "Val",
            AminoAcid::Stop => "Stop",
            AminoAcid::Unknown => "Unknown",
        }
    }

    /// IUPAC one-letter code (`*` for stop, `X` for unknown).
    pub fn one_letter(self) -> char {
        match self {
            AminoAcid::Ala => 'A',
            AminoAcid::Arg => 'R',
            AminoAcid::Asn => 'N',
            AminoAcid::Asp => 'D',
            AminoAcid::Cys => 'C',
            AminoAcid::Gln => 'Q',
            AminoAcid::Glu => 'E',
            AminoAcid::Gly => 'G',
            AminoAcid::His => 'H',
            AminoAcid::Ile => 'I',
            AminoAcid::Leu => 'L',
            AminoAcid::Lys => 'K',
            AminoAcid::Met => 'M',
            AminoAcid::Phe => 'F',
            AminoAcid::Pro => 'P',
            AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T',
            AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y',
            AminoAcid::Val => 'V',
            AminoAcid::Stop => '*',
            AminoAcid::Unknown => 'X',
        }
    }

    /// Parses a one-letter code. Anything unrecognised becomes `Unknown`.
    pub fn from_one_letter(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'A' => AminoAcid::Ala,
            'R' => AminoAcid::Arg,
            'N' => AminoAcid::Asn,
            'D' => AminoAcid::Asp,
            'C' => AminoAcid::Cys,
            'Q' => AminoAcid::Gln,
            'E' => AminoAcid::Glu,
            'G' => AminoAcid::Gly,
            'H' => AminoAcid::His,
            'I' => AminoAcid::Ile,
            'L' => AminoAcid::Leu,
            'K' => AminoAcid::Lys,
            'M' => AminoAcid::Met,
            'F' => AminoAcid::Phe,
            'P' => AminoAcid::Pro,
            'S' => AminoAcid::Ser,
            'T' => AminoAcid::Thr,
            'W' => AminoAcid::Trp,
            'Y' => AminoAcid::Tyr,
            'V' => AminoAcid::Val,
            '*' => AminoAcid::Stop,
            _ => AminoAcid::Unknown,
        }
    }

    /// True for the twenty real residues.
    pub fn is_residue(self) -> bool {
        !matches!(self, AminoAcid::Stop | AminoAcid::Unknown)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.three_letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_letter_display() {
        assert_eq!(AminoAcid::Ala.to_string(), "Ala");
        assert_eq!(AminoAcid::Stop.to_string(), "Stop");
        assert_eq!(AminoAcid::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_one_letter_round_trip() {
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_one_letter(aa.one_letter()), aa);
        }
    }

    #[test]
    fn test_unrecognised_one_letter() {
        assert_eq!(AminoAcid::from_one_letter('B'), AminoAcid::Unknown);
        assert_eq!(AminoAcid::from_one_letter('-'), AminoAcid::Unknown);
        assert_eq!(AminoAcid::from_one_letter('m'), AminoAcid::Met);
    }

    #[test]
    fn test_residue_count() {
        let residues = AminoAcid::ALL.iter().filter(|aa| aa.is_residue()).count();
        assert_eq!(residues, 20);
    }
}
