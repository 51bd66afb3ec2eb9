//! Pairwise sequence alignment for the affinity workspace.
//!
//! Smith-Waterman (local) and Needleman-Wunsch (global) alignment with affine
//! gap penalties, generic over the residue alphabet: one implementation serves
//! nucleotides and amino acids, with substitution scores from a
//! [`ScoringMatrix`] (match/mismatch, BLOSUM, PAM or parsed from NCBI text).
//!
//! # Quick start
//!
//! ```
//! use affinity_align::{NucleotideNeedlemanWunsch, PairwiseAligner};
//! use affinity_seq::NucleotideSequence;
//!
//! let q: NucleotideSequence = "ACGT".parse().unwrap();
//! let aln = NucleotideNeedlemanWunsch::with_defaults().align(&q, &q).unwrap();
//! assert_eq!(aln.score(), 8.0);
//! assert_eq!(aln.cigar_string(), "4=");
//! ```

pub mod types;
pub mod scoring;
pub mod matrix;
pub mod traceback;
pub mod result;
pub mod aligner;
pub mod dynamic;
pub mod batch;

pub use types::{cigar_from_elements, AlignmentElement, AlignmentMode, CigarOp};
pub use scoring::{GapPenalties, ScoringMatrix};
pub use matrix::{AlignmentMatrix, Cell, Layer, Pointer};
pub use traceback::{traceback, TracePath};
pub use result::PairwiseAlignment;
pub use aligner::{
    align, AminoAcidNeedlemanWunsch, AminoAcidSmithWaterman, NeedlemanWunsch,
    NucleotideNeedlemanWunsch, NucleotideSmithWaterman, PairwiseAligner, SmithWaterman,
};
pub use dynamic::{align_any, AlphabetKind, AnyAlignment, AnyScoringMatrix, AnySequence};
pub use batch::align_batch;

#[cfg(test)]
mod tests {
    use super::*;
    use affinity_seq::{AminoAcid, Nucleotide, Residue, Sequence};

    /// Recompute an alignment's score from its columns.
    fn rescore<R: Residue>(
        aln: &PairwiseAlignment<R>,
        matrix: &ScoringMatrix<R>,
        gaps: GapPenalties,
    ) -> f64 {
        let mut score = 0.0;
        let mut prev: Option<AlignmentElement<R>> = None;
        for &e in aln.elements() {
            score += match (prev, e) {
                (Some(AlignmentElement::GapInQuery(_)), AlignmentElement::GapInQuery(_))
                | (Some(AlignmentElement::GapInSubject(_)), AlignmentElement::GapInSubject(_)) => {
                    gaps.extend
                }
                (_, AlignmentElement::GapInQuery(_) | AlignmentElement::GapInSubject(_)) => {
                    gaps.open
                }
                (_, e) => matrix.score(e.query(), e.subject()).unwrap(),
            };
            prev = Some(e);
        }
        score
    }

    #[test]
    fn reported_score_matches_columns() {
        let matrix = ScoringMatrix::blosum50();
        let q: Sequence<AminoAcid> = "PAWHEAE".parse().unwrap();
        let s: Sequence<AminoAcid> = "HEAGAWGHEE".parse().unwrap();
        for gaps in [GapPenalties::linear(-8.0), GapPenalties::new(-10.0, -1.0)] {
            for mode in [AlignmentMode::Global, AlignmentMode::Local] {
                let aln = align(&q, &s, &matrix, gaps, mode).unwrap();
                assert_eq!(rescore(&aln, &matrix, gaps), aln.score(), "{mode} {gaps:?}");
            }
        }
    }

    #[test]
    fn custom_matrix_via_from_fn() {
        // Transitions (A<->G, C<->T) are cheaper than transversions.
        let matrix = ScoringMatrix::<Nucleotide>::from_fn("ts/tv", |a, b| {
            use Nucleotide::*;
            Some(match (a, b) {
                _ if a == b => 1.0,
                (A, G) | (G, A) | (C, T) | (T, C) => -0.5,
                _ => -2.0,
            })
        });
        let q: Sequence<Nucleotide> = "ACGT".parse().unwrap();
        let s: Sequence<Nucleotide> = "GCGC".parse().unwrap();
        let gaps = GapPenalties::new(-3.0, -1.0);
        let aln = align(&q, &s, &matrix, gaps, AlignmentMode::Global).unwrap();
        assert_eq!(aln.score(), 1.0);
        assert_eq!(aln.positives(), 2);
        assert_eq!(aln.mismatches(), 2);
    }
}
