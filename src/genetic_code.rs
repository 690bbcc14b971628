//! NCBI genetic code tables.
//!
//! This module provides:
//! - The NCBI genetic code tables (1-33) as static data
//! - A strict codon translator that returns one-letter amino acid codes
//!
//! Unlike the fixed lookup in [`crate::codon_table`], this translator reads
//! RNA (`U` as `T`), accepts lowercase input, maps IUPAC ambiguity codes to
//! `X`, and rejects anything else with an [`InvalidCodon`] error.

use thiserror::Error;

use crate::codon_table::codon_index;

/// A codon the genetic code cannot read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid codon '{codon}' at position {position}")]
pub struct InvalidCodon {
    /// The offending codon, as written in the input
    pub codon: String,
    /// 0-based offset of the codon's first base
    pub position: usize,
}

/// A genetic code table for translating codons to amino acids.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    /// NCBI genetic code ID
    pub id: u8,
    /// Name of the genetic code
    pub name: &'static str,
    /// One-letter amino acids in NCBI codon order (TTT, TTC, TTA, ...)
    amino_acids: [u8; 64],
}

impl GeneticCode {
    /// Creates a genetic code from a 64-character NCBI `ncbieaa` string.
    const fn new(id: u8, name: &'static str, ncbieaa: &'static str) -> Self {
        let bytes = ncbieaa.as_bytes();
        let mut amino_acids = [b'X'; 64];
        let mut idx = 0;
        while idx < 64 && idx < bytes.len() {
            amino_acids[idx] = bytes[idx];
            idx += 1;
        }
        Self {
            id,
            name,
            amino_acids,
        }
    }

    /// Translates one codon to a one-letter amino acid code.
    ///
    /// `position` is only used to report errors.
    ///
    /// # Rules:
    /// - `U` is read as `T`, case is ignored
    /// - Codons containing IUPAC ambiguity codes (N, R, Y, ...) return 'X'
    /// - Any other character is an error
    pub fn translate_codon(&self, codon: &[u8], position: usize) -> Result<char, InvalidCodon> {
        let invalid = || InvalidCodon {
            codon: String::from_utf8_lossy(codon).into_owned(),
            position,
        };

        if codon.len() != 3 {
            return Err(invalid());
        }

        let mut normalized = [0u8; 3];
        let mut ambiguous = false;
        for (slot, &b) in normalized.iter_mut().zip(codon) {
            *slot = match b.to_ascii_uppercase() {
                b'U' => b'T',
                base @ (b'A' | b'C' | b'G' | b'T') => base,
                b'N' | b'R' | b'Y' | b'S' | b'W' | b'K' | b'M' | b'B' | b'D' | b'H' | b'V' => {
                    ambiguous = true;
                    b'N'
                }
                _ => return Err(invalid()),
            };
        }

        if ambiguous {
            return Ok('X');
        }

        codon_index(&normalized)
            .map(|idx| self.amino_acids[idx] as char)
            .ok_or_else(invalid)
    }

    /// Translates a whole nucleotide sequence in frame +1.
    ///
    /// A trailing partial codon is ignored. The first unreadable codon
    /// aborts the translation.
    pub fn translate(&self, sequence: &str) -> Result<String, InvalidCodon> {
        sequence
            .as_bytes()
            .chunks_exact(3)
            .enumerate()
            .map(|(i, codon)| self.translate_codon(codon, i * 3))
            .collect()
    }
}

/// All NCBI genetic codes, standard code first.
pub static GENETIC_CODES: [GeneticCode; 27] = [
    GeneticCode::new(1, "Standard",
        "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(2, "Vertebrate Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG"),
    GeneticCode::new(3, "Yeast Mitochondrial",
        "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(4, "Mold/Protozoan/Coelenterate Mito...",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(5, "Invertebrate Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG"),
    GeneticCode::new(6, "Ciliate/Dasycladacean/Hexamita Nuclear",
        "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(9, "Echinoderm/Flatworm Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    GeneticCode::new(10, "Euplotid Nuclear",
        "FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(11, "Bacterial/Archaeal/Plant Plastid",
        "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(12, "Alternative Yeast Nuclear",
        "FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(13, "Ascidian Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG"),
    GeneticCode::new(14, "Alternative Flatworm Mitochondrial",
        "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    GeneticCode::new(15, "Blepharisma Macronuclear",
        "FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(16, "Chlorophycean Mitochondrial",
        "FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(21, "Trematode Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    GeneticCode::new(22, "Scenedesmus obliquus Mitochondrial",
        "FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(23, "Thraustochytrium Mitochondrial",
        "FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(24, "Rhabdopleuridae Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
    GeneticCode::new(25, "Candidate Division SR1/Gracilibacteria",
        "FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(26, "Pachysolen tannophilus Nuclear",
        "FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(27, "Karyorelict Nuclear",
        "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(28, "Condylostoma Nuclear",
        "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(29, "Mesodinium Nuclear",
        "FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(30, "Peritrich Nuclear",
        "FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(31, "Blastocrithidia Nuclear",
        "FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(32, "Balanophoraceae Plastid",
        "FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    GeneticCode::new(33, "Cephalodiscidae Mitochondrial",
        "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
];

/// Gets a genetic code by NCBI ID.
pub fn genetic_code(id: u8) -> Option<&'static GeneticCode> {
    GENETIC_CODES.iter().find(|c| c.id == id)
}

/// The standard genetic code (NCBI table 1).
pub fn standard_code() -> &'static GeneticCode {
    &GENETIC_CODES[0]
}
