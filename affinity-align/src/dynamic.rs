//! Alphabet selection at runtime.
//!
//! The generic API rules out alphabet mismatches at compile time. Callers
//! that only learn the alphabet from their input (a file, a request) use the
//! `Any*` wrappers here instead, which check alphabet agreement up front and
//! report a mismatch as [`AffinityError::InvalidInput`].

use core::fmt;

use affinity_core::{AffinityError, Result};
use affinity_seq::{AminoAcid, Nucleotide, Sequence};

use crate::aligner;
use crate::result::PairwiseAlignment;
use crate::scoring::{GapPenalties, ScoringMatrix};
use crate::types::AlignmentMode;

/// The residue alphabets known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlphabetKind {
    /// DNA/RNA with IUPAC ambiguity codes.
    Nucleotide,
    /// Protein.
    AminoAcid,
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetKind::Nucleotide => f.write_str("nucleotide"),
            AlphabetKind::AminoAcid => f.write_str("amino acid"),
        }
    }
}

/// A sequence over an alphabet chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnySequence {
    /// Nucleotide sequence.
    Nucleotide(Sequence<Nucleotide>),
    /// Amino acid sequence.
    AminoAcid(Sequence<AminoAcid>),
}

impl AnySequence {
    /// Parse `bytes` as a sequence of the given alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidInput`] on the first symbol outside
    /// the alphabet.
    pub fn parse(kind: AlphabetKind, bytes: impl AsRef<[u8]>) -> Result<Self> {
        Ok(match kind {
            AlphabetKind::Nucleotide => AnySequence::Nucleotide(Sequence::from_bytes(bytes)?),
            AlphabetKind::AminoAcid => AnySequence::AminoAcid(Sequence::from_bytes(bytes)?),
        })
    }

    /// Alphabet of this sequence.
    pub fn kind(&self) -> AlphabetKind {
        match self {
            AnySequence::Nucleotide(_) => AlphabetKind::Nucleotide,
            AnySequence::AminoAcid(_) => AlphabetKind::AminoAcid,
        }
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        match self {
            AnySequence::Nucleotide(s) => s.len(),
            AnySequence::AminoAcid(s) => s.len(),
        }
    }

    /// Whether the sequence has no residues.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Sequence<Nucleotide>> for AnySequence {
    fn from(seq: Sequence<Nucleotide>) -> Self {
        AnySequence::Nucleotide(seq)
    }
}

impl From<Sequence<AminoAcid>> for AnySequence {
    fn from(seq: Sequence<AminoAcid>) -> Self {
        AnySequence::AminoAcid(seq)
    }
}

/// A scoring matrix over an alphabet chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyScoringMatrix {
    /// Nucleotide scores.
    Nucleotide(ScoringMatrix<Nucleotide>),
    /// Amino acid scores.
    AminoAcid(ScoringMatrix<AminoAcid>),
}

impl AnyScoringMatrix {
    /// Alphabet of this matrix.
    pub fn kind(&self) -> AlphabetKind {
        match self {
            AnyScoringMatrix::Nucleotide(_) => AlphabetKind::Nucleotide,
            AnyScoringMatrix::AminoAcid(_) => AlphabetKind::AminoAcid,
        }
    }

    /// Default matrix for `kind`: +2/-1 for nucleotides, BLOSUM62 for amino
    /// acids.
    pub fn default_for(kind: AlphabetKind) -> Self {
        match kind {
            AlphabetKind::Nucleotide => {
                AnyScoringMatrix::Nucleotide(ScoringMatrix::nucleotide_default())
            }
            AlphabetKind::AminoAcid => AnyScoringMatrix::AminoAcid(ScoringMatrix::blosum62()),
        }
    }

    /// Parse an NCBI-format matrix for `kind`.
    ///
    /// # Errors
    ///
    /// See [`ScoringMatrix::parse_ncbi`].
    pub fn parse_ncbi(kind: AlphabetKind, name: impl Into<String>, text: &str) -> Result<Self> {
        Ok(match kind {
            AlphabetKind::Nucleotide => {
                AnyScoringMatrix::Nucleotide(ScoringMatrix::parse_ncbi(name, text)?)
            }
            AlphabetKind::AminoAcid => {
                AnyScoringMatrix::AminoAcid(ScoringMatrix::parse_ncbi(name, text)?)
            }
        })
    }
}

impl From<ScoringMatrix<Nucleotide>> for AnyScoringMatrix {
    fn from(matrix: ScoringMatrix<Nucleotide>) -> Self {
        AnyScoringMatrix::Nucleotide(matrix)
    }
}

impl From<ScoringMatrix<AminoAcid>> for AnyScoringMatrix {
    fn from(matrix: ScoringMatrix<AminoAcid>) -> Self {
        AnyScoringMatrix::AminoAcid(matrix)
    }
}

/// An alignment over an alphabet chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyAlignment {
    /// Nucleotide alignment.
    Nucleotide(PairwiseAlignment<Nucleotide>),
    /// Amino acid alignment.
    AminoAcid(PairwiseAlignment<AminoAcid>),
}

impl AnyAlignment {
    /// Alphabet of the aligned sequences.
    pub fn kind(&self) -> AlphabetKind {
        match self {
            AnyAlignment::Nucleotide(_) => AlphabetKind::Nucleotide,
            AnyAlignment::AminoAcid(_) => AlphabetKind::AminoAcid,
        }
    }

    /// Optimal alignment score.
    pub fn score(&self) -> f64 {
        match self {
            AnyAlignment::Nucleotide(a) => a.score(),
            AnyAlignment::AminoAcid(a) => a.score(),
        }
    }

    /// Gapped query as text.
    pub fn gapped_query_string(&self) -> String {
        match self {
            AnyAlignment::Nucleotide(a) => a.gapped_query_string(),
            AnyAlignment::AminoAcid(a) => a.gapped_query_string(),
        }
    }

    /// Gapped subject as text.
    pub fn gapped_subject_string(&self) -> String {
        match self {
            AnyAlignment::Nucleotide(a) => a.gapped_subject_string(),
            AnyAlignment::AminoAcid(a) => a.gapped_subject_string(),
        }
    }

    /// CIGAR string.
    pub fn cigar_string(&self) -> String {
        match self {
            AnyAlignment::Nucleotide(a) => a.cigar_string(),
            AnyAlignment::AminoAcid(a) => a.cigar_string(),
        }
    }

    /// The nucleotide alignment, if that is what this is.
    pub fn as_nucleotide(&self) -> Option<&PairwiseAlignment<Nucleotide>> {
        match self {
            AnyAlignment::Nucleotide(a) => Some(a),
            AnyAlignment::AminoAcid(_) => None,
        }
    }

    /// The amino acid alignment, if that is what this is.
    pub fn as_amino_acid(&self) -> Option<&PairwiseAlignment<AminoAcid>> {
        match self {
            AnyAlignment::AminoAcid(a) => Some(a),
            AnyAlignment::Nucleotide(_) => None,
        }
    }
}

/// Align two runtime-typed sequences.
///
/// # Errors
///
/// - [`AffinityError::InvalidInput`] if the query, subject and matrix do not
///   all share one alphabet. Checked before any DP work.
/// - Anything [`aligner::align`] returns.
pub fn align_any(
    query: &AnySequence,
    subject: &AnySequence,
    matrix: &AnyScoringMatrix,
    gaps: GapPenalties,
    mode: AlignmentMode,
) -> Result<AnyAlignment> {
    match (query, subject, matrix) {
        (
            AnySequence::Nucleotide(q),
            AnySequence::Nucleotide(s),
            AnyScoringMatrix::Nucleotide(m),
        ) => aligner::align(q, s, m, gaps, mode).map(AnyAlignment::Nucleotide),
        (AnySequence::AminoAcid(q), AnySequence::AminoAcid(s), AnyScoringMatrix::AminoAcid(m)) => {
            aligner::align(q, s, m, gaps, mode).map(AnyAlignment::AminoAcid)
        }
        _ => Err(AffinityError::InvalidInput(format!(
            "alphabet mismatch: query is {}, subject is {}, matrix is {}",
            query.kind(),
            subject.kind(),
            matrix.kind()
        ))),
    }
}
