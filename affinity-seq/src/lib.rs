//! Residue alphabets and sequences for the affinity alignment workspace.
//!
//! - **Alphabets**: the [`Residue`] trait with closed enums [`Nucleotide`]
//!   and [`AminoAcid`], each mapping symbols to dense ordinals
//! - **Sequences**: [`Sequence<R>`], an immutable residue list with O(1) access
//!
//! # Example
//!
//! ```
//! use affinity_seq::{AminoAcid, Residue, Sequence};
//!
//! let seq: Sequence<AminoAcid> = "pawheae".parse().unwrap();
//! assert_eq!(seq.to_string(), "PAWHEAE");
//! assert_eq!(seq[2], AminoAcid::Trp);
//! assert_eq!(AminoAcid::Trp.ordinal(), 17);
//! ```

pub mod alphabet;
pub mod sequence;

pub use alphabet::{AminoAcid, Nucleotide, Residue};
pub use sequence::Sequence;

/// A nucleotide sequence.
pub type NucleotideSequence = Sequence<Nucleotide>;

/// An amino acid sequence.
pub type AminoAcidSequence = Sequence<AminoAcid>;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nucleotide_text_round_trips(text in "[ACGTNRYSWKMBDHV-]{0,100}") {
            let seq: NucleotideSequence = text.parse().unwrap();
            prop_assert_eq!(seq.len(), text.len());
            prop_assert_eq!(seq.to_string(), text);
        }

        #[test]
        fn amino_acid_parse_is_case_insensitive(text in "[ARNDCQEGHILKMFPSTWYVBZX*]{0,100}") {
            let upper: AminoAcidSequence = text.parse().unwrap();
            let lower: AminoAcidSequence = text.to_ascii_lowercase().parse().unwrap();
            prop_assert_eq!(upper, lower);
        }

        #[test]
        fn ordinals_are_dense(ordinal in 0usize..AminoAcid::COUNT) {
            let aa = AminoAcid::from_ordinal(ordinal).unwrap();
            prop_assert_eq!(aa.ordinal(), ordinal);
            prop_assert_eq!(AminoAcid::from_symbol(aa.symbol() as u8), Some(aa));
        }

        #[test]
        fn subsequence_matches_slice(
            text in "[ACGT]{1,60}",
            a in 0usize..60,
            b in 0usize..60,
        ) {
            let seq: NucleotideSequence = text.parse().unwrap();
            let (start, end) = (a.min(b).min(seq.len()), a.max(b).min(seq.len()));
            let sub = seq.subsequence(start, end).unwrap();
            prop_assert_eq!(sub.residues(), &seq.residues()[start..end]);
        }
    }
}
