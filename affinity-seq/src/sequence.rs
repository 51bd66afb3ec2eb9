//! Generic immutable residue sequence.
//!
//! [`Sequence<R>`] stores residues of one alphabet in a shared slice, so
//! cloning is cheap and the contents can never change after construction.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use std::sync::Arc;

use affinity_core::{AffinityError, Result, Summarizable};

use crate::alphabet::Residue;

/// An immutable, ordered sequence of residues from alphabet `R`.
///
/// Positions are 0-based. A zero-length sequence is valid.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<R: Residue> {
    residues: Arc<[R]>,
}

impl<R: Residue> Sequence<R> {
    /// Wrap a residue vector.
    pub fn new(residues: Vec<R>) -> Self {
        Self {
            residues: residues.into(),
        }
    }

    /// The zero-length sequence.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse one-letter codes, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidInput`] naming the first byte that is
    /// not a symbol of `R`.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        let mut residues = Vec::with_capacity(bytes.len());
        for (i, &b) in bytes.iter().enumerate() {
            let residue = R::from_symbol(b).ok_or_else(|| {
                AffinityError::InvalidInput(format!(
                    "invalid {} symbol '{}' (0x{:02X}) at position {}",
                    R::ALPHABET,
                    b as char,
                    b,
                    i
                ))
            })?;
            residues.push(residue);
        }
        Ok(Self::new(residues))
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Whether the sequence has no residues.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Residue at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<R> {
        self.residues.get(index).copied()
    }

    /// The residues as a slice.
    pub fn residues(&self) -> &[R] {
        &self.residues
    }

    /// Iterate residues in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = R> + '_ {
        self.residues.iter().copied()
    }

    /// Copy out the residues in `start..end`.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidInput`] if the range is reversed or
    /// extends past the end of the sequence.
    pub fn subsequence(&self, start: usize, end: usize) -> Result<Self> {
        if start > end || end > self.len() {
            return Err(AffinityError::InvalidInput(format!(
                "range {}..{} out of bounds for sequence of length {}",
                start,
                end,
                self.len()
            )));
        }
        Ok(Self::new(self.residues[start..end].to_vec()))
    }
}

impl<R: Residue> Index<usize> for Sequence<R> {
    type Output = R;

    fn index(&self, index: usize) -> &R {
        &self.residues[index]
    }
}

impl<R: Residue> FromStr for Sequence<R> {
    type Err = AffinityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

impl<R: Residue> FromIterator<R> for Sequence<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R: Residue> From<Vec<R>> for Sequence<R> {
    fn from(residues: Vec<R>) -> Self {
        Self::new(residues)
    }
}

impl<R: Residue> fmt::Display for Sequence<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in self.iter() {
            write!(f, "{}", r.symbol())?;
        }
        Ok(())
    }
}

impl<R: Residue> fmt::Debug for Sequence<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence<{}>(\"{}\")", R::ALPHABET, self)
    }
}

impl<R: Residue> Summarizable for Sequence<R> {
    fn summary(&self) -> String {
        let preview: String = self.iter().take(20).map(|r| r.symbol()).collect();
        if self.len() > 20 {
            format!("{} sequence ({} residues): {}...", R::ALPHABET, self.len(), preview)
        } else {
            format!("{} sequence ({} residues): {}", R::ALPHABET, self.len(), preview)
        }
    }
}
