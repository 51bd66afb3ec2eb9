//! Residue alphabets.
//!
//! Each alphabet is a closed enum implementing [`Residue`]. The enum
//! discriminant is the residue's dense ordinal, so scoring tables index by
//! `ordinal()` with no hashing. Ordinals are fixed at compile time.

use core::fmt;
use core::hash::Hash;

/// A symbol of a fixed residue alphabet.
///
/// Implementors are small `Copy` enums whose variants enumerate the whole
/// alphabet, including the gap symbol and any ambiguity codes.
pub trait Residue: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Human-readable alphabet name (e.g. "nucleotide").
    const ALPHABET: &'static str;

    /// Number of symbols in the alphabet, gap included.
    const COUNT: usize;

    /// Every residue of the alphabet, in ordinal order.
    const ALL: &'static [Self];

    /// Dense ordinal in `0..COUNT`.
    fn ordinal(self) -> usize;

    /// Canonical uppercase one-letter code.
    fn symbol(self) -> char;

    /// Parse a one-letter code, case-insensitively.
    fn from_symbol(b: u8) -> Option<Self>;

    /// The alphabet's gap residue.
    fn gap() -> Self;

    /// Look up a residue by ordinal.
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Whether this residue is the gap symbol.
    fn is_gap(self) -> bool {
        self == Self::gap()
    }

    /// Iterate the alphabet in ordinal order.
    fn all() -> core::iter::Copied<core::slice::Iter<'static, Self>> {
        Self::ALL.iter().copied()
    }
}

// ---------------------------------------------------------------------------
// Nucleotides
// ---------------------------------------------------------------------------

/// IUPAC nucleotide alphabet: `ACGT`, ambiguity codes `NRYSWKMBDHV`, and gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    /// Any base.
    N,
    /// A or G (purine).
    R,
    /// C or T (pyrimidine).
    Y,
    /// G or C.
    S,
    /// A or T.
    W,
    /// G or T.
    K,
    /// A or C.
    M,
    /// Not A.
    B,
    /// Not C.
    D,
    /// Not G.
    H,
    /// Not T.
    V,
    Gap,
}

impl Nucleotide {
    /// Whether this is one of the four unambiguous bases.
    pub fn is_unambiguous(self) -> bool {
        matches!(self, Nucleotide::A | Nucleotide::C | Nucleotide::G | Nucleotide::T)
    }
}

impl Residue for Nucleotide {
    const ALPHABET: &'static str = "nucleotide";
    const COUNT: usize = 16;
    const ALL: &'static [Self] = &[
        Nucleotide::A,
        Nucleotide::C,
        Nucleotide::G,
        Nucleotide::T,
        Nucleotide::N,
        Nucleotide::R,
        Nucleotide::Y,
        Nucleotide::S,
        Nucleotide::W,
        Nucleotide::K,
        Nucleotide::M,
        Nucleotide::B,
        Nucleotide::D,
        Nucleotide::H,
        Nucleotide::V,
        Nucleotide::Gap,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn symbol(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
            Nucleotide::N => 'N',
            Nucleotide::R => 'R',
            Nucleotide::Y => 'Y',
            Nucleotide::S => 'S',
            Nucleotide::W => 'W',
            Nucleotide::K => 'K',
            Nucleotide::M => 'M',
            Nucleotide::B => 'B',
            Nucleotide::D => 'D',
            Nucleotide::H => 'H',
            Nucleotide::V => 'V',
            Nucleotide::Gap => '-',
        }
    }

    /// `U` is read as `T`.
    fn from_symbol(b: u8) -> Option<Self> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' | b'U' => Some(Nucleotide::T),
            b'N' => Some(Nucleotide::N),
            b'R' => Some(Nucleotide::R),
            b'Y' => Some(Nucleotide::Y),
            b'S' => Some(Nucleotide::S),
            b'W' => Some(Nucleotide::W),
            b'K' => Some(Nucleotide::K),
            b'M' => Some(Nucleotide::M),
            b'B' => Some(Nucleotide::B),
            b'D' => Some(Nucleotide::D),
            b'H' => Some(Nucleotide::H),
            b'V' => Some(Nucleotide::V),
            b'-' => Some(Nucleotide::Gap),
            _ => None,
        }
    }

    fn gap() -> Self {
        Nucleotide::Gap
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Amino acids
// ---------------------------------------------------------------------------

/// Amino acid alphabet in NCBI matrix order.
///
/// The 20 standard residues, ambiguity codes B (Asx), Z (Glx) and X (any),
/// the stop symbol `*`, and gap. The first 24 ordinals match the row order
/// of NCBI substitution matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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
    /// Asn or Asp.
    Asx,
    /// Gln or Glu.
    Glx,
    /// Unknown residue.
    Xaa,
    Stop,
    Gap,
}

impl AminoAcid {
    /// Whether this is one of the 20 standard residues.
    pub fn is_standard(self) -> bool {
        self.ordinal() < 20
    }
}

impl Residue for AminoAcid {
    const ALPHABET: &'static str = "amino acid";
    const COUNT: usize = 25;
    const ALL: &'static [Self] = &[
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
        AminoAcid::Asx,
        AminoAcid::Glx,
        AminoAcid::Xaa,
        AminoAcid::Stop,
        AminoAcid::Gap,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn symbol(self) -> char {
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
            AminoAcid::Asx => 'B',
            AminoAcid::Glx => 'Z',
            AminoAcid::Xaa => 'X',
            AminoAcid::Stop => '*',
            AminoAcid::Gap => '-',
        }
    }

    fn from_symbol(b: u8) -> Option<Self> {
        match b.to_ascii_uppercase() {
            b'A' => Some(AminoAcid::Ala),
            b'R' => Some(AminoAcid::Arg),
            b'N' => Some(AminoAcid::Asn),
            b'D' => Some(AminoAcid::Asp),
            b'C' => Some(AminoAcid::Cys),
            b'Q' => Some(AminoAcid::Gln),
            b'E' => Some(AminoAcid::Glu),
            b'G' => Some(AminoAcid::Gly),
            b'H' => Some(AminoAcid::His),
            b'I' => Some(AminoAcid::Ile),
            b'L' => Some(AminoAcid::Leu),
            b'K' => Some(AminoAcid::Lys),
            b'M' => Some(AminoAcid::Met),
            b'F' => Some(AminoAcid::Phe),
            b'P' => Some(AminoAcid::Pro),
            b'S' => Some(AminoAcid::Ser),
            b'T' => Some(AminoAcid::Thr),
            b'W' => Some(AminoAcid::Trp),
            b'Y' => Some(AminoAcid::Tyr),
            b'V' => Some(AminoAcid::Val),
            b'B' => Some(AminoAcid::Asx),
            b'Z' => Some(AminoAcid::Glx),
            b'X' => Some(AminoAcid::Xaa),
            b'*' => Some(AminoAcid::Stop),
            b'-' => Some(AminoAcid::Gap),
            _ => None,
        }
    }

    fn gap() -> Self {
        AminoAcid::Gap
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
