//! The pairwise alignment result and its statistics.

use core::fmt;
use core::ops::Range;

use affinity_core::{Result, Scored, Summarizable};
use affinity_seq::Residue;

use crate::scoring::ScoringMatrix;
use crate::traceback::TracePath;
use crate::types::{cigar_from_elements, AlignmentElement, AlignmentMode, CigarOp};

/// A completed pairwise alignment.
///
/// Immutable once built. Column statistics are computed up front, including
/// `positives`, which needs the scoring matrix the alignment was made with.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseAlignment<R: Residue> {
    score: f64,
    mode: AlignmentMode,
    elements: Vec<AlignmentElement<R>>,
    query_range: Range<usize>,
    subject_range: Range<usize>,
    matches: usize,
    mismatches: usize,
    positives: usize,
    gaps: usize,
    gap_openings: usize,
}

impl<R: Residue> PairwiseAlignment<R> {
    /// Assemble a result from a traceback path.
    ///
    /// # Errors
    ///
    /// Propagates a failed lookup of a mismatched pair in `matrix`.
    pub(crate) fn from_path(
        path: TracePath<R>,
        score: f64,
        mode: AlignmentMode,
        matrix: &ScoringMatrix<R>,
    ) -> Result<Self> {
        let mut matches = 0;
        let mut mismatches = 0;
        let mut positives = 0;
        let mut gaps = 0;
        let mut gap_openings = 0;
        let mut prev: Option<&AlignmentElement<R>> = None;

        for element in &path.elements {
            match *element {
                AlignmentElement::Match(_) => {
                    matches += 1;
                    positives += 1;
                }
                AlignmentElement::Mismatch { query, subject } => {
                    mismatches += 1;
                    if matrix.score(query, subject)? > 0.0 {
                        positives += 1;
                    }
                }
                AlignmentElement::GapInQuery(_) => {
                    gaps += 1;
                    if !matches!(prev, Some(AlignmentElement::GapInQuery(_))) {
                        gap_openings += 1;
                    }
                }
                AlignmentElement::GapInSubject(_) => {
                    gaps += 1;
                    if !matches!(prev, Some(AlignmentElement::GapInSubject(_))) {
                        gap_openings += 1;
                    }
                }
            }
            prev = Some(element);
        }

        Ok(Self {
            score,
            mode,
            elements: path.elements,
            query_range: path.query_range,
            subject_range: path.subject_range,
            matches,
            mismatches,
            positives,
            gaps,
            gap_openings,
        })
    }

    /// Optimal alignment score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Whether this is a local or global alignment.
    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// Alignment columns in order.
    pub fn elements(&self) -> &[AlignmentElement<R>] {
        &self.elements
    }

    /// Half-open range of query residues covered. The whole query for global
    /// alignments.
    pub fn query_range(&self) -> Range<usize> {
        self.query_range.clone()
    }

    /// Half-open range of subject residues covered.
    pub fn subject_range(&self) -> Range<usize> {
        self.subject_range.clone()
    }

    /// Whether the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of columns.
    pub fn length(&self) -> usize {
        self.elements.len()
    }

    /// Columns with identical residues.
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Columns with differing residues.
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    /// Matches plus mismatches scoring above zero.
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Gap columns on either side.
    pub fn gaps(&self) -> usize {
        self.gaps
    }

    /// Number of maximal gap runs.
    ///
    /// A gap in the query directly followed by a gap in the subject counts
    /// as two openings.
    pub fn gap_openings(&self) -> usize {
        self.gap_openings
    }

    /// Fraction of columns that are matches.
    pub fn identity(&self) -> Option<f64> {
        self.fraction(self.matches)
    }

    /// Fraction of columns that are positives.
    pub fn similarity(&self) -> Option<f64> {
        self.fraction(self.positives)
    }

    /// [`identity`](Self::identity) as a percentage.
    pub fn percent_identity(&self) -> Option<f64> {
        self.identity().map(|f| f * 100.0)
    }

    /// [`similarity`](Self::similarity) as a percentage.
    pub fn percent_similarity(&self) -> Option<f64> {
        self.similarity().map(|f| f * 100.0)
    }

    fn fraction(&self, count: usize) -> Option<f64> {
        match self.length() {
            0 => None,
            len => Some(count as f64 / len as f64),
        }
    }

    /// Query side with gap residues inserted.
    pub fn gapped_query(&self) -> Vec<R> {
        self.elements.iter().map(AlignmentElement::query).collect()
    }

    /// Subject side with gap residues inserted.
    pub fn gapped_subject(&self) -> Vec<R> {
        self.elements.iter().map(AlignmentElement::subject).collect()
    }

    /// Query side as text, e.g. `"--P-AW-HEAE"`.
    pub fn gapped_query_string(&self) -> String {
        self.elements.iter().map(|e| e.query().symbol()).collect()
    }

    /// Subject side as text.
    pub fn gapped_subject_string(&self) -> String {
        self.elements.iter().map(|e| e.subject().symbol()).collect()
    }

    /// Run-length CIGAR operations.
    pub fn cigar(&self) -> Vec<CigarOp> {
        cigar_from_elements(&self.elements)
    }

    /// CIGAR string, e.g. `"2D1X1D2=1D2=1I1="`. Empty for an empty alignment.
    pub fn cigar_string(&self) -> String {
        self.cigar().iter().map(ToString::to_string).collect()
    }
}

impl<R: Residue> Scored for PairwiseAlignment<R> {
    fn score(&self) -> f64 {
        self.score
    }
}

impl<R: Residue> Summarizable for PairwiseAlignment<R> {
    fn summary(&self) -> String {
        match self.percent_identity() {
            Some(pct) => format!(
                "{} {} alignment: score {}, length {}, identity {:.1}%, gaps {}",
                R::ALPHABET,
                self.mode,
                self.score,
                self.length(),
                pct,
                self.gaps
            ),
            None => format!(
                "{} {} alignment: score {}, empty",
                R::ALPHABET,
                self.mode,
                self.score
            ),
        }
    }
}

/// Three-line text view: query, match line, subject.
///
/// The match line marks identical columns with `|`.
impl<R: Residue> fmt::Display for PairwiseAlignment<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.gapped_query_string())?;
        let marks: String = self
            .elements
            .iter()
            .map(|e| match e {
                AlignmentElement::Match(_) => '|',
                _ => ' ',
            })
            .collect();
        writeln!(f, "{}", marks)?;
        write!(f, "{}", self.gapped_subject_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affinity_seq::{AminoAcid, Nucleotide};

    use crate::types::AlignmentElement::*;

    fn build<R: Residue>(
        elements: Vec<AlignmentElement<R>>,
        matrix: &ScoringMatrix<R>,
    ) -> PairwiseAlignment<R> {
        let q = elements.iter().filter(|e| e.consumes_query()).count();
        let s = elements.iter().filter(|e| e.consumes_subject()).count();
        let path = TracePath {
            elements,
            query_range: 0..q,
            subject_range: 0..s,
        };
        PairwiseAlignment::from_path(path, 1.0, AlignmentMode::Global, matrix).unwrap()
    }

    #[test]
    fn statistics_of_textbook_alignment() {
        // --P-AW-HEAE / HEAGAWGHE-E
        let aln = build(
            vec![
                GapInQuery(AminoAcid::His),
                GapInQuery(AminoAcid::Glu),
                Mismatch {
                    query: AminoAcid::Pro,
                    subject: AminoAcid::Ala,
                },
                GapInQuery(AminoAcid::Gly),
                Match(AminoAcid::Ala),
                Match(AminoAcid::Trp),
                GapInQuery(AminoAcid::Gly),
                Match(AminoAcid::His),
                Match(AminoAcid::Glu),
                GapInSubject(AminoAcid::Ala),
                Match(AminoAcid::Glu),
            ],
            &ScoringMatrix::blosum50(),
        );
        assert_eq!(aln.length(), 11);
        assert_eq!(aln.matches(), 5);
        assert_eq!(aln.mismatches(), 1);
        // BLOSUM50 P/A = -1
        assert_eq!(aln.positives(), 5);
        assert_eq!(aln.gaps(), 5);
        assert_eq!(aln.gap_openings(), 4);
        assert_eq!(aln.gapped_query_string(), "--P-AW-HEAE");
        assert_eq!(aln.gapped_subject_string(), "HEAGAWGHE-E");
        assert_eq!(aln.cigar_string(), "2D1X1D2=1D2=1I1=");
        assert_eq!(aln.query_range(), 0..7);
        assert_eq!(aln.subject_range(), 0..10);
    }

    #[test]
    fn positives_count_conservative_substitutions() {
        // BLOSUM62 I/V = 3, A/W = -3
        let aln = build(
            vec![
                Mismatch {
                    query: AminoAcid::Ile,
                    subject: AminoAcid::Val,
                },
                Mismatch {
                    query: AminoAcid::Ala,
                    subject: AminoAcid::Trp,
                },
                Match(AminoAcid::Leu),
                Match(AminoAcid::Lys),
            ],
            &ScoringMatrix::blosum62(),
        );
        assert_eq!(aln.identity(), Some(0.5));
        assert_eq!(aln.similarity(), Some(0.75));
        assert_eq!(aln.percent_similarity(), Some(75.0));
    }

    #[test]
    fn adjacent_gaps_on_opposite_sides_are_separate_openings() {
        let aln = build(
            vec![
                Match(Nucleotide::A),
                GapInQuery(Nucleotide::C),
                GapInSubject(Nucleotide::G),
                GapInSubject(Nucleotide::G),
                Match(Nucleotide::T),
            ],
            &ScoringMatrix::nucleotide_default(),
        );
        assert_eq!(aln.gaps(), 3);
        assert_eq!(aln.gap_openings(), 2);
    }

    #[test]
    fn empty_alignment_has_no_identity() {
        let aln = build(
            Vec::<AlignmentElement<Nucleotide>>::new(),
            &ScoringMatrix::nucleotide_default(),
        );
        assert!(aln.is_empty());
        assert_eq!(aln.identity(), None);
        assert_eq!(aln.percent_similarity(), None);
        assert_eq!(aln.cigar_string(), "");
        assert!(aln.summary().contains("empty"));
    }

    #[test]
    fn gapped_sides_use_gap_residue() {
        let aln = build(
            vec![Match(Nucleotide::A), GapInQuery(Nucleotide::C)],
            &ScoringMatrix::nucleotide_default(),
        );
        assert_eq!(aln.gapped_query(), vec![Nucleotide::A, Nucleotide::Gap]);
        assert_eq!(aln.gapped_subject(), vec![Nucleotide::A, Nucleotide::C]);
    }

    #[test]
    fn display_and_summary() {
        let aln = build(
            vec![
                Match(Nucleotide::A),
                Mismatch {
                    query: Nucleotide::C,
                    subject: Nucleotide::G,
                },
                GapInSubject(Nucleotide::T),
            ],
            &ScoringMatrix::nucleotide_default(),
        );
        assert_eq!(aln.to_string(), "ACT\n|  \nAG-");
        let summary = aln.summary();
        assert!(summary.starts_with("nucleotide global alignment"));
        assert!(summary.contains("identity 33.3%"));
        assert_eq!(Scored::score(&aln), 1.0);
    }
}
