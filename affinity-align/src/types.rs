//! Core types describing alignment modes and aligned columns.

use core::fmt;

use affinity_seq::Residue;

/// The alignment strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentMode {
    /// Local alignment (Smith-Waterman): finds the best-scoring local region.
    Local,
    /// Global alignment (Needleman-Wunsch): aligns sequences end-to-end.
    Global,
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentMode::Local => f.write_str("local"),
            AlignmentMode::Global => f.write_str("global"),
        }
    }
}

/// One column of a pairwise alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentElement<R: Residue> {
    /// Identical residues in query and subject.
    Match(R),
    /// Different residues in query and subject.
    Mismatch {
        /// Query residue.
        query: R,
        /// Subject residue.
        subject: R,
    },
    /// Gap in the query; carries the subject residue it is aligned against.
    GapInQuery(R),
    /// Gap in the subject; carries the query residue it is aligned against.
    GapInSubject(R),
}

impl<R: Residue> AlignmentElement<R> {
    /// Classify an aligned residue pair.
    pub fn aligned(query: R, subject: R) -> Self {
        if query == subject {
            AlignmentElement::Match(query)
        } else {
            AlignmentElement::Mismatch { query, subject }
        }
    }

    /// The query-side residue, or the gap residue.
    pub fn query(&self) -> R {
        match *self {
            AlignmentElement::Match(r) => r,
            AlignmentElement::Mismatch { query, .. } => query,
            AlignmentElement::GapInQuery(_) => R::gap(),
            AlignmentElement::GapInSubject(r) => r,
        }
    }

    /// The subject-side residue, or the gap residue.
    pub fn subject(&self) -> R {
        match *self {
            AlignmentElement::Match(r) => r,
            AlignmentElement::Mismatch { subject, .. } => subject,
            AlignmentElement::GapInQuery(r) => r,
            AlignmentElement::GapInSubject(_) => R::gap(),
        }
    }

    /// Whether this column is a gap on either side.
    pub fn is_gap(&self) -> bool {
        matches!(
            self,
            AlignmentElement::GapInQuery(_) | AlignmentElement::GapInSubject(_)
        )
    }

    /// Whether this column consumes a query residue.
    pub fn consumes_query(&self) -> bool {
        !matches!(self, AlignmentElement::GapInQuery(_))
    }

    /// Whether this column consumes a subject residue.
    pub fn consumes_subject(&self) -> bool {
        !matches!(self, AlignmentElement::GapInSubject(_))
    }

    /// The CIGAR operation this column contributes, with length 1.
    pub fn cigar_op(&self) -> CigarOp {
        match self {
            AlignmentElement::Match(_) => CigarOp::Match(1),
            AlignmentElement::Mismatch { .. } => CigarOp::Mismatch(1),
            AlignmentElement::GapInQuery(_) => CigarOp::Deletion(1),
            AlignmentElement::GapInSubject(_) => CigarOp::Insertion(1),
        }
    }
}

/// A run-length CIGAR operation summarizing alignment columns.
///
/// The subject plays the role of the reference: a gap in the query is a
/// deletion, a gap in the subject is an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CigarOp {
    /// Matching residues. SAM op `=`.
    Match(usize),
    /// Mismatching residues. SAM op `X`.
    Mismatch(usize),
    /// Residues present only in the query. SAM op `I`.
    Insertion(usize),
    /// Residues present only in the subject. SAM op `D`.
    Deletion(usize),
}

impl CigarOp {
    /// Single-character SAM CIGAR code.
    pub fn code(&self) -> char {
        match self {
            CigarOp::Match(_) => '=',
            CigarOp::Mismatch(_) => 'X',
            CigarOp::Insertion(_) => 'I',
            CigarOp::Deletion(_) => 'D',
        }
    }

    /// Number of columns covered by this operation.
    pub fn len(&self) -> usize {
        match self {
            CigarOp::Match(n)
            | CigarOp::Mismatch(n)
            | CigarOp::Insertion(n)
            | CigarOp::Deletion(n) => *n,
        }
    }

    /// Whether this operation has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Absorb `other` into this run if `other` is the same kind of operation.
    fn try_merge(&mut self, other: CigarOp) -> bool {
        match (self, other) {
            (CigarOp::Match(n), CigarOp::Match(k))
            | (CigarOp::Mismatch(n), CigarOp::Mismatch(k))
            | (CigarOp::Insertion(n), CigarOp::Insertion(k))
            | (CigarOp::Deletion(n), CigarOp::Deletion(k)) => {
                *n += k;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len(), self.code())
    }
}

/// Collapse alignment columns into run-length CIGAR operations.
pub fn cigar_from_elements<R: Residue>(elements: &[AlignmentElement<R>]) -> Vec<CigarOp> {
    let mut ops: Vec<CigarOp> = Vec::new();
    for op in elements.iter().map(AlignmentElement::cigar_op) {
        let merged = ops.last_mut().map_or(false, |last| last.try_merge(op));
        if !merged {
            ops.push(op);
        }
    }
    ops
}
