//! Batch pairwise alignment over multiple sequence pairs.
//!
//! Every pair is an independent alignment sharing one scoring matrix. With
//! the `parallel` feature the pairs are spread over the rayon thread pool;
//! otherwise they run serially. Either way results come back in input order.

use affinity_core::Result;
use affinity_seq::{Residue, Sequence};

use crate::aligner::align;
use crate::result::PairwiseAlignment;
use crate::scoring::{GapPenalties, ScoringMatrix};
use crate::types::AlignmentMode;

/// Align a batch of `(query, subject)` pairs with the same scoring and mode.
///
/// # Errors
///
/// Returns the first error any pair produces (in input order when serial;
/// any failing pair when parallel).
pub fn align_batch<R: Residue>(
    pairs: &[(&Sequence<R>, &Sequence<R>)],
    matrix: &ScoringMatrix<R>,
    gaps: GapPenalties,
    mode: AlignmentMode,
) -> Result<Vec<PairwiseAlignment<R>>> {
    log::debug!("aligning batch of {} {} pairs ({})", pairs.len(), R::ALPHABET, mode);

    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|(query, subject)| align(query, subject, matrix, gaps, mode))
            .collect::<Result<Vec<_>>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let results = pairs
        .iter()
        .map(|(query, subject)| align(query, subject, matrix, gaps, mode))
        .collect::<Result<Vec<_>>>()?;

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use affinity_core::AffinityError;
    use affinity_seq::{AminoAcid, Nucleotide};

    fn nuc(s: &str) -> Sequence<Nucleotide> {
        s.parse().unwrap()
    }

    #[test]
    fn batch_multiple_pairs() {
        let (a, b, c, d, e) = (nuc("ACGT"), nuc("AAAA"), nuc("TTTT"), nuc("ACT"), nuc(""));
        let pairs = vec![(&a, &a), (&b, &c), (&a, &d), (&e, &a)];
        let results = align_batch(
            &pairs,
            &ScoringMatrix::nucleotide_default(),
            GapPenalties::nucleotide_default(),
            AlignmentMode::Global,
        )
        .unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].score(), 8.0); // perfect match
        assert_eq!(results[1].score(), -4.0); // all mismatches
        assert_eq!(results[2].score(), 1.0); // ACGT / AC-T
        assert_eq!(results[3].gapped_query_string(), "----");
    }

    #[test]
    fn batch_local_mode() {
        let (q, s) = (nuc("AAACGTAAA"), nuc("TTTCGTTTT"));
        let results = align_batch(
            &[(&q, &s)],
            &ScoringMatrix::nucleotide_default(),
            GapPenalties::nucleotide_default(),
            AlignmentMode::Local,
        )
        .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].gapped_query_string(), "CGT");
        assert_eq!(results[0].score(), 6.0);
    }

    #[test]
    fn batch_matches_individual_calls() {
        let seqs: Vec<Sequence<AminoAcid>> = ["HEAGAWGHEE", "PAWHEAE", "MKTAYIAKQR", "WWWW"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let pairs: Vec<_> = seqs
            .iter()
            .flat_map(|a| seqs.iter().map(move |b| (a, b)))
            .collect();
        let matrix = ScoringMatrix::blosum62();
        let gaps = GapPenalties::amino_acid_default();
        let results = align_batch(&pairs, &matrix, gaps, AlignmentMode::Local).unwrap();
        for ((q, s), result) in pairs.iter().zip(&results) {
            assert_eq!(result, &align(q, s, &matrix, gaps, AlignmentMode::Local).unwrap());
        }
    }

    #[test]
    fn empty_batch() {
        let pairs: Vec<(&Sequence<Nucleotide>, &Sequence<Nucleotide>)> = vec![];
        let results = align_batch(
            &pairs,
            &ScoringMatrix::nucleotide_default(),
            GapPenalties::nucleotide_default(),
            AlignmentMode::Global,
        )
        .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn batch_propagates_errors() {
        let matrix = ScoringMatrix::nucleotide_default().without_score(Nucleotide::A, Nucleotide::A);
        let (ok, bad) = (nuc("CG"), nuc("A"));
        let err = align_batch(
            &[(&ok, &ok), (&bad, &bad)],
            &matrix,
            GapPenalties::nucleotide_default(),
            AlignmentMode::Global,
        )
        .unwrap_err();
        assert!(matches!(err, AffinityError::IncompleteScoringMatrix { .. }));
    }
}
