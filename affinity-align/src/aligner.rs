//! Smith-Waterman (local) and Needleman-Wunsch (global) aligners.
//!
//! Both run the same affine-gap core in [`crate::matrix`] and differ only in
//! the boundary policy they hand it. An aligner borrows its scoring matrix,
//! so one matrix can back any number of aligners and threads.

use std::sync::atomic::AtomicBool;
use std::sync::OnceLock;

use affinity_core::{AffinityError, Result};
use affinity_seq::{AminoAcid, Nucleotide, Residue, Sequence};

use crate::matrix::AlignmentMatrix;
use crate::result::PairwiseAlignment;
use crate::scoring::{GapPenalties, ScoringMatrix};
use crate::traceback::traceback;
use crate::types::AlignmentMode;

/// A configured pairwise aligner over alphabet `R`.
///
/// Stateless: every call is an independent computation.
pub trait PairwiseAligner<R: Residue> {
    /// Boundary policy supplied to the DP core.
    fn mode(&self) -> AlignmentMode;

    /// Substitution scores.
    fn matrix(&self) -> &ScoringMatrix<R>;

    /// Gap penalties.
    fn gaps(&self) -> GapPenalties;

    /// Align `query` against `subject`.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::IncompleteScoringMatrix`] if the matrix lacks
    /// a score for a residue pair that has to be evaluated.
    fn align(&self, query: &Sequence<R>, subject: &Sequence<R>) -> Result<PairwiseAlignment<R>> {
        run(query, subject, self.matrix(), self.gaps(), self.mode(), None)
    }

    /// Like [`align`](Self::align), but abandons the computation with
    /// [`AffinityError::Cancelled`] once `cancel` is set. The flag is checked
    /// once per DP row.
    fn align_cancellable(
        &self,
        query: &Sequence<R>,
        subject: &Sequence<R>,
        cancel: &AtomicBool,
    ) -> Result<PairwiseAlignment<R>> {
        run(query, subject, self.matrix(), self.gaps(), self.mode(), Some(cancel))
    }
}

/// Align two sequences with the given scoring and mode.
///
/// # Example
///
/// ```
/// use affinity_align::{align, AlignmentMode, GapPenalties, ScoringMatrix};
/// use affinity_seq::{AminoAcid, Sequence};
///
/// let q: Sequence<AminoAcid> = "PAWHEAE".parse().unwrap();
/// let s: Sequence<AminoAcid> = "HEAGAWGHEE".parse().unwrap();
/// let aln = align(
///     &q,
///     &s,
///     &ScoringMatrix::blosum50(),
///     GapPenalties::linear(-8.0),
///     AlignmentMode::Global,
/// )
/// .unwrap();
/// assert_eq!(aln.score(), 1.0);
/// assert_eq!(aln.gapped_query_string(), "--P-AW-HEAE");
/// assert_eq!(aln.gapped_subject_string(), "HEAGAWGHE-E");
/// ```
///
/// # Errors
///
/// See [`PairwiseAligner::align`].
pub fn align<R: Residue>(
    query: &Sequence<R>,
    subject: &Sequence<R>,
    matrix: &ScoringMatrix<R>,
    gaps: GapPenalties,
    mode: AlignmentMode,
) -> Result<PairwiseAlignment<R>> {
    run(query, subject, matrix, gaps, mode, None)
}

pub(crate) fn run<R: Residue>(
    query: &Sequence<R>,
    subject: &Sequence<R>,
    matrix: &ScoringMatrix<R>,
    gaps: GapPenalties,
    mode: AlignmentMode,
    cancel: Option<&AtomicBool>,
) -> Result<PairwiseAlignment<R>> {
    if gaps.open.is_nan() || gaps.extend.is_nan() {
        return Err(AffinityError::InvalidInput(format!(
            "gap penalties must be numbers, got open {} extend {}",
            gaps.open, gaps.extend
        )));
    }

    log::debug!(
        "{} {} alignment: {} x {} with {}, gaps ({}, {})",
        R::ALPHABET,
        mode,
        query.len(),
        subject.len(),
        matrix.name(),
        gaps.open,
        gaps.extend
    );

    let (q, s) = (query.residues(), subject.residues());
    let filled = AlignmentMatrix::fill(q, s, matrix, gaps, mode, cancel)?;
    log::trace!("traceback starts at {:?}", filled.end());

    let path = traceback(&filled, q, s)?;
    log::trace!(
        "traceback: {} columns, query {:?}, subject {:?}",
        path.elements.len(),
        path.query_range,
        path.subject_range
    );

    let alignment = PairwiseAlignment::from_path(path, filled.score(), mode, matrix)?;
    log::debug!("{} alignment score {}", mode, alignment.score());
    Ok(alignment)
}

/// Smith-Waterman local alignment with affine gaps.
///
/// Cell scores are floored at zero and the alignment ends at the best `M`
/// cell anywhere in the grid.
#[derive(Debug, Clone, Copy)]
pub struct SmithWaterman<'m, R: Residue> {
    matrix: &'m ScoringMatrix<R>,
    gaps: GapPenalties,
}

impl<'m, R: Residue> SmithWaterman<'m, R> {
    /// Create a local aligner.
    pub fn new(matrix: &'m ScoringMatrix<R>, gaps: GapPenalties) -> Self {
        Self { matrix, gaps }
    }
}

impl<R: Residue> PairwiseAligner<R> for SmithWaterman<'_, R> {
    fn mode(&self) -> AlignmentMode {
        AlignmentMode::Local
    }

    fn matrix(&self) -> &ScoringMatrix<R> {
        self.matrix
    }

    fn gaps(&self) -> GapPenalties {
        self.gaps
    }
}

/// Needleman-Wunsch global alignment with affine gaps.
///
/// Both sequences are aligned end to end; leading and trailing gaps pay the
/// full gap cost.
#[derive(Debug, Clone, Copy)]
pub struct NeedlemanWunsch<'m, R: Residue> {
    matrix: &'m ScoringMatrix<R>,
    gaps: GapPenalties,
}

impl<'m, R: Residue> NeedlemanWunsch<'m, R> {
    /// Create a global aligner.
    pub fn new(matrix: &'m ScoringMatrix<R>, gaps: GapPenalties) -> Self {
        Self { matrix, gaps }
    }
}

impl<R: Residue> PairwiseAligner<R> for NeedlemanWunsch<'_, R> {
    fn mode(&self) -> AlignmentMode {
        AlignmentMode::Global
    }

    fn matrix(&self) -> &ScoringMatrix<R> {
        self.matrix
    }

    fn gaps(&self) -> GapPenalties {
        self.gaps
    }
}

/// Local nucleotide aligner.
pub type NucleotideSmithWaterman<'m> = SmithWaterman<'m, Nucleotide>;
/// Global nucleotide aligner.
pub type NucleotideNeedlemanWunsch<'m> = NeedlemanWunsch<'m, Nucleotide>;
/// Local amino acid aligner.
pub type AminoAcidSmithWaterman<'m> = SmithWaterman<'m, AminoAcid>;
/// Global amino acid aligner.
pub type AminoAcidNeedlemanWunsch<'m> = NeedlemanWunsch<'m, AminoAcid>;

fn nucleotide_default_matrix() -> &'static ScoringMatrix<Nucleotide> {
    static MATRIX: OnceLock<ScoringMatrix<Nucleotide>> = OnceLock::new();
    MATRIX.get_or_init(ScoringMatrix::nucleotide_default)
}

fn blosum62() -> &'static ScoringMatrix<AminoAcid> {
    static MATRIX: OnceLock<ScoringMatrix<AminoAcid>> = OnceLock::new();
    MATRIX.get_or_init(ScoringMatrix::blosum62)
}

impl NucleotideSmithWaterman<'static> {
    /// +2/-1 match/mismatch with gaps -5/-2.
    pub fn with_defaults() -> Self {
        Self::new(nucleotide_default_matrix(), GapPenalties::nucleotide_default())
    }
}

impl NucleotideNeedlemanWunsch<'static> {
    /// +2/-1 match/mismatch with gaps -5/-2.
    pub fn with_defaults() -> Self {
        Self::new(nucleotide_default_matrix(), GapPenalties::nucleotide_default())
    }
}

impl AminoAcidSmithWaterman<'static> {
    /// BLOSUM62 with gaps -11/-1.
    pub fn with_defaults() -> Self {
        Self::new(blosum62(), GapPenalties::amino_acid_default())
    }
}

impl AminoAcidNeedlemanWunsch<'static> {
    /// BLOSUM62 with gaps -11/-1.
    pub fn with_defaults() -> Self {
        Self::new(blosum62(), GapPenalties::amino_acid_default())
    }
}
