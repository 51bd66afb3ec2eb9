//! Path reconstruction over a filled [`AlignmentMatrix`].
//!
//! Starting at the matrix's end cell, the recorded pointers are followed back
//! one element per step. The walk stops at the grid origin (global) or right
//! after emitting an element whose pointer is [`Pointer::Start`] (local).
//! Elements are collected end-first and reversed once at the end.

use core::ops::Range;

use affinity_core::{AffinityError, Result};
use affinity_seq::Residue;

use crate::matrix::{AlignmentMatrix, Layer, Pointer};
use crate::types::AlignmentElement;

/// The reconstructed path: ordered columns and the residues they span.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePath<R: Residue> {
    /// Alignment columns, first to last.
    pub elements: Vec<AlignmentElement<R>>,
    /// Half-open range of query residues covered.
    pub query_range: Range<usize>,
    /// Half-open range of subject residues covered.
    pub subject_range: Range<usize>,
}

impl<R: Residue> TracePath<R> {
    fn empty() -> Self {
        Self {
            elements: Vec::new(),
            query_range: 0..0,
            subject_range: 0..0,
        }
    }
}

/// Walk the pointers of `matrix` back from its end cell.
///
/// `query` and `subject` must be the slices the matrix was filled from.
///
/// # Errors
///
/// Returns [`AffinityError::InvalidInput`] if the path leaves the grid, which
/// happens only when no finite-scoring path exists (e.g. infinite gap
/// penalties forced on sequences of different lengths).
pub fn traceback<R: Residue>(
    matrix: &AlignmentMatrix,
    query: &[R],
    subject: &[R],
) -> Result<TracePath<R>> {
    debug_assert_eq!(matrix.rows(), query.len() + 1);
    debug_assert_eq!(matrix.cols(), subject.len() + 1);

    let Some(end) = matrix.end() else {
        return Ok(TracePath::empty());
    };

    let (mut i, mut j, mut layer) = (end.i, end.j, end.layer);
    let mut elements = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let pointer = matrix.pointer(i, j, layer);
        match layer {
            Layer::M if i > 0 && j > 0 => {
                elements.push(AlignmentElement::aligned(query[i - 1], subject[j - 1]));
                i -= 1;
                j -= 1;
            }
            Layer::Ix if i > 0 => {
                elements.push(AlignmentElement::GapInSubject(query[i - 1]));
                i -= 1;
            }
            Layer::Iy if j > 0 => {
                elements.push(AlignmentElement::GapInQuery(subject[j - 1]));
                j -= 1;
            }
            _ => {
                return Err(AffinityError::InvalidInput(format!(
                    "no finite-scoring path: traceback left the grid at ({}, {})",
                    i, j
                )));
            }
        }
        match pointer {
            Pointer::From(next) => layer = next,
            Pointer::Start => break,
        }
    }

    elements.reverse();
    Ok(TracePath {
        elements,
        query_range: i..end.i,
        subject_range: j..end.j,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{GapPenalties, ScoringMatrix};
    use crate::types::AlignmentMode;
    use affinity_seq::{AminoAcid, Nucleotide, Sequence};

    fn trace<R: Residue>(
        q: &Sequence<R>,
        s: &Sequence<R>,
        matrix: &ScoringMatrix<R>,
        gaps: GapPenalties,
        mode: AlignmentMode,
    ) -> TracePath<R> {
        let filled =
            AlignmentMatrix::fill(q.residues(), s.residues(), matrix, gaps, mode, None).unwrap();
        traceback(&filled, q.residues(), s.residues()).unwrap()
    }

    fn render<R: Residue>(path: &TracePath<R>) -> (String, String) {
        (
            path.elements.iter().map(|e| e.query().symbol()).collect(),
            path.elements.iter().map(|e| e.subject().symbol()).collect(),
        )
    }

    #[test]
    fn global_textbook_path() {
        let q: Sequence<AminoAcid> = "PAWHEAE".parse().unwrap();
        let s: Sequence<AminoAcid> = "HEAGAWGHEE".parse().unwrap();
        let path = trace(
            &q,
            &s,
            &ScoringMatrix::blosum50(),
            GapPenalties::linear(-8.0),
            AlignmentMode::Global,
        );
        let (gq, gs) = render(&path);
        assert_eq!(gq, "--P-AW-HEAE");
        assert_eq!(gs, "HEAGAWGHE-E");
        assert_eq!(path.query_range, 0..7);
        assert_eq!(path.subject_range, 0..10);
    }

    #[test]
    fn local_textbook_path() {
        let q: Sequence<AminoAcid> = "PAWHEAE".parse().unwrap();
        let s: Sequence<AminoAcid> = "HEAGAWGHEE".parse().unwrap();
        let path = trace(
            &q,
            &s,
            &ScoringMatrix::blosum50(),
            GapPenalties::linear(-8.0),
            AlignmentMode::Local,
        );
        let (gq, gs) = render(&path);
        assert_eq!(gq, "AW-HE");
        assert_eq!(gs, "AWGHE");
        assert_eq!(path.query_range, 1..5);
        assert_eq!(path.subject_range, 4..9);
    }

    #[test]
    fn global_against_empty_is_all_gaps() {
        let q: Sequence<Nucleotide> = Sequence::empty();
        let s: Sequence<Nucleotide> = "ACG".parse().unwrap();
        let matrix = ScoringMatrix::nucleotide_default();
        let gaps = GapPenalties::nucleotide_default();

        let path = trace(&q, &s, &matrix, gaps, AlignmentMode::Global);
        assert_eq!(render(&path), ("---".to_string(), "ACG".to_string()));
        assert_eq!(path.subject_range, 0..3);

        let path = trace(&s, &q, &matrix, gaps, AlignmentMode::Global);
        assert_eq!(render(&path), ("ACG".to_string(), "---".to_string()));
        assert_eq!(path.query_range, 0..3);
    }

    #[test]
    fn local_without_positive_cell_is_empty() {
        let q: Sequence<Nucleotide> = "AAA".parse().unwrap();
        let s: Sequence<Nucleotide> = "CCC".parse().unwrap();
        let path = trace(
            &q,
            &s,
            &ScoringMatrix::nucleotide_default(),
            GapPenalties::nucleotide_default(),
            AlignmentMode::Local,
        );
        assert_eq!(path, TracePath::empty());
    }

    #[test]
    fn unreachable_end_is_reported() {
        let q: Sequence<Nucleotide> = "ACGT".parse().unwrap();
        let s: Sequence<Nucleotide> = "AC".parse().unwrap();
        let filled = AlignmentMatrix::fill(
            q.residues(),
            s.residues(),
            &ScoringMatrix::nucleotide_default(),
            GapPenalties::linear(f64::NEG_INFINITY),
            AlignmentMode::Global,
            None,
        )
        .unwrap();
        assert!(matches!(
            traceback(&filled, q.residues(), s.residues()),
            Err(AffinityError::InvalidInput(_))
        ));
    }
}
