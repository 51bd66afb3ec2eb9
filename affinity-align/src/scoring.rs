//! Substitution scoring and the affine gap model.
//!
//! [`ScoringMatrix<R>`] is a dense `COUNT x COUNT` table indexed by residue
//! ordinals. Entries may be absent: a matrix only covers the residues it
//! declares, and scoring an uncovered pair is an error rather than a silent
//! default. [`GapPenalties`] carries the open/extend costs that accompany a
//! matrix.

use core::fmt;
use core::marker::PhantomData;

use affinity_core::{AffinityError, Result};
use affinity_seq::{AminoAcid, Nucleotide, Residue};

// ---------------------------------------------------------------------------
// Gap model
// ---------------------------------------------------------------------------

/// Affine gap penalties.
///
/// A gap of length `k >= 1` costs `open + (k - 1) * extend`. Both values are
/// added to the score as-is, so penalties are normally negative; no sign
/// validation is performed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapPenalties {
    /// Score added for the first position of a gap.
    pub open: f64,
    /// Score added for every further contiguous gap position.
    pub extend: f64,
}

impl GapPenalties {
    /// Create gap penalties from open and extend scores.
    pub fn new(open: f64, extend: f64) -> Self {
        Self { open, extend }
    }

    /// Linear gap model: every gap position costs `penalty`.
    pub fn linear(penalty: f64) -> Self {
        Self::new(penalty, penalty)
    }

    /// Default nucleotide penalties: -5 open, -2 extend.
    pub fn nucleotide_default() -> Self {
        Self::new(-5.0, -2.0)
    }

    /// Default amino acid penalties (BLOSUM62 convention): -11 open, -1 extend.
    pub fn amino_acid_default() -> Self {
        Self::new(-11.0, -1.0)
    }

    /// Total score of a contiguous gap of `len` positions.
    pub fn cost(&self, len: usize) -> f64 {
        match len {
            0 => 0.0,
            n => self.open + (n - 1) as f64 * self.extend,
        }
    }
}

// ---------------------------------------------------------------------------
// Substitution matrix
// ---------------------------------------------------------------------------

/// A substitution score table over alphabet `R`.
///
/// Row is the query residue, column the subject residue. Symmetry is not
/// required. The matrix is immutable once built and can be shared freely
/// across threads.
#[derive(Clone, PartialEq)]
pub struct ScoringMatrix<R: Residue> {
    name: String,
    /// `R::COUNT x R::COUNT` flattened table (row-major).
    scores: Vec<Option<f64>>,
    _alphabet: PhantomData<R>,
}

impl<R: Residue> ScoringMatrix<R> {
    /// Build a matrix from a scoring function.
    ///
    /// `f` returns `None` for pairs the matrix does not cover.
    pub fn from_fn(name: impl Into<String>, f: impl Fn(R, R) -> Option<f64>) -> Self {
        let mut scores = Vec::with_capacity(R::COUNT * R::COUNT);
        for a in R::all() {
            for b in R::all() {
                scores.push(f(a, b));
            }
        }
        Self {
            name: name.into(),
            scores,
            _alphabet: PhantomData,
        }
    }

    /// A total matrix scoring `match_score` for identical residues and
    /// `mismatch_score` for everything else, gap symbol included.
    pub fn match_mismatch(match_score: f64, mismatch_score: f64) -> Self {
        Self::from_fn(
            format!("match {} / mismatch {}", match_score, mismatch_score),
            |a, b| Some(if a == b { match_score } else { mismatch_score }),
        )
    }

    /// Score an ordered `(query, subject)` residue pair.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::IncompleteScoringMatrix`] if the matrix does
    /// not cover the pair.
    #[inline]
    pub fn score(&self, a: R, b: R) -> Result<f64> {
        self.scores[a.ordinal() * R::COUNT + b.ordinal()].ok_or_else(|| {
            AffinityError::IncompleteScoringMatrix {
                alphabet: R::ALPHABET,
                a: a.symbol(),
                b: b.symbol(),
            }
        })
    }

    /// Whether the matrix declares any score in the row of `r`.
    pub fn covers(&self, r: R) -> bool {
        let row = r.ordinal() * R::COUNT;
        self.scores[row..row + R::COUNT].iter().any(Option::is_some)
    }

    /// Whether `score(a, b) == score(b, a)` for every pair, coverage included.
    pub fn is_symmetric(&self) -> bool {
        (0..R::COUNT).all(|i| {
            (i + 1..R::COUNT).all(|j| self.scores[i * R::COUNT + j] == self.scores[j * R::COUNT + i])
        })
    }

    /// Matrix name (e.g. "BLOSUM62").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return a copy with the score of `(a, b)` replaced.
    pub fn with_score(mut self, a: R, b: R, score: f64) -> Self {
        self.scores[a.ordinal() * R::COUNT + b.ordinal()] = Some(score);
        self
    }

    /// Return a copy with the score of `(a, b)` removed.
    pub fn without_score(mut self, a: R, b: R) -> Self {
        self.scores[a.ordinal() * R::COUNT + b.ordinal()] = None;
        self
    }

    /// Parse a matrix in NCBI text format.
    ///
    /// Lines starting with `#` and blank lines are ignored. The first
    /// remaining line lists the column symbols; every following line is a
    /// row symbol and one score per column. Residues that appear in neither
    /// header nor rows stay uncovered.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::Parse`] for symbols outside the alphabet,
    /// ragged or repeated rows, or non-numeric scores.
    pub fn parse_ncbi(name: impl Into<String>, text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| AffinityError::Parse("matrix text has no header line".into()))?;
        let columns = header
            .split_whitespace()
            .map(|tok| parse_symbol::<R>(tok, header_line))
            .collect::<Result<Vec<R>>>()?;

        let mut scores = vec![None; R::COUNT * R::COUNT];
        let mut seen_rows = vec![false; R::COUNT];
        for (line_num, line) in lines {
            let mut fields = line.split_whitespace();
            let row = match fields.next() {
                Some(tok) => parse_symbol::<R>(tok, line_num)?,
                None => continue,
            };
            if std::mem::replace(&mut seen_rows[row.ordinal()], true) {
                return Err(AffinityError::Parse(format!(
                    "line {}: duplicate row '{}'",
                    line_num,
                    row.symbol()
                )));
            }
            let values: Vec<&str> = fields.collect();
            if values.len() != columns.len() {
                return Err(AffinityError::Parse(format!(
                    "line {}: expected {} scores, found {}",
                    line_num,
                    columns.len(),
                    values.len()
                )));
            }
            for (&col, value) in columns.iter().zip(values) {
                let score: f64 = value.parse().map_err(|_| {
                    AffinityError::Parse(format!("line {}: invalid score '{}'", line_num, value))
                })?;
                scores[row.ordinal() * R::COUNT + col.ordinal()] = Some(score);
            }
        }

        Ok(Self {
            name: name.into(),
            scores,
            _alphabet: PhantomData,
        })
    }
}

fn parse_symbol<R: Residue>(token: &str, line_num: usize) -> Result<R> {
    match token.as_bytes() {
        [b] => R::from_symbol(*b).ok_or_else(|| {
            AffinityError::Parse(format!(
                "line {}: '{}' is not a {} symbol",
                line_num,
                token,
                R::ALPHABET
            ))
        }),
        _ => Err(AffinityError::Parse(format!(
            "line {}: expected a single residue symbol, found '{}'",
            line_num, token
        ))),
    }
}

impl<R: Residue> fmt::Debug for ScoringMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let covered = R::all().filter(|&r| self.covers(r)).count();
        f.debug_struct("ScoringMatrix")
            .field("name", &self.name)
            .field("alphabet", &R::ALPHABET)
            .field("covered", &covered)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Nucleotide defaults
// ---------------------------------------------------------------------------

impl ScoringMatrix<Nucleotide> {
    /// Default nucleotide scoring: +2 match, -1 mismatch.
    pub fn nucleotide_default() -> Self {
        Self::match_mismatch(2.0, -1.0)
    }
}

// ---------------------------------------------------------------------------
// Amino acid substitution matrices
// Order: A R N D C Q E G H I L K M F P S T W Y V B Z X *
// ---------------------------------------------------------------------------

impl ScoringMatrix<AminoAcid> {
    /// Build from a 24x24 NCBI table. The gap row and column stay uncovered.
    fn from_ncbi_table(name: &str, table: &[i32; AA_DIM * AA_DIM]) -> Self {
        Self::from_fn(name, |a, b| {
            let (i, j) = (a.ordinal(), b.ordinal());
            if i < AA_DIM && j < AA_DIM {
                Some(f64::from(table[i * AA_DIM + j]))
            } else {
                None
            }
        })
    }

    /// BLOSUM62, the usual default for protein alignment.
    pub fn blosum62() -> Self {
        Self::from_ncbi_table("BLOSUM62", &BLOSUM62)
    }

    /// BLOSUM30, for very distant homologs.
    pub fn blosum30() -> Self {
        Self::from_ncbi_table("BLOSUM30", &BLOSUM30)
    }

    /// BLOSUM45, for distantly related proteins.
    pub fn blosum45() -> Self {
        Self::from_ncbi_table("BLOSUM45", &BLOSUM45)
    }

    /// BLOSUM50.
    pub fn blosum50() -> Self {
        Self::from_ncbi_table("BLOSUM50", &BLOSUM50)
    }

    /// BLOSUM80, for closely related proteins.
    pub fn blosum80() -> Self {
        Self::from_ncbi_table("BLOSUM80", &BLOSUM80)
    }

    /// PAM40, for short, closely related sequences.
    pub fn pam40() -> Self {
        Self::from_ncbi_table("PAM40", &PAM40)
    }

    /// PAM120.
    pub fn pam120() -> Self {
        Self::from_ncbi_table("PAM120", &PAM120)
    }

    /// PAM250 (Dayhoff).
    pub fn pam250() -> Self {
        Self::from_ncbi_table("PAM250", &PAM250)
    }
}

/// Dimension of the NCBI amino acid tables.
const AA_DIM: usize = 24;

// ===========================================================================
// NCBI substitution matrix data
// Row/column order: A R N D C Q E G H I L K M F P S T W Y V B Z X *
// ===========================================================================

/// BLOSUM62, 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const BLOSUM62: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4, // A
    -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4, // R
    -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4, // N
    -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4, // D
     0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4, // C
    -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4, // Q
    -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // E
     0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4, // G
    -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4, // H
    -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4, // I
    -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4, // L
    -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4, // K
    -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4, // M
    -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4, // F
    -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4, // T
    -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4, // W
    -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4, // Y
     0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4, // V
    -2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4, // B
    -1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // Z
     0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4, // X
    -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// BLOSUM45, 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const BLOSUM45: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     5, -2, -1, -2, -1, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -2, -2,  0, -1, -1,  0, -5, // A
    -2,  7,  0, -1, -3,  1,  0, -2,  0, -3, -2,  3, -1, -2, -2, -1, -1, -2, -1, -2, -1,  0, -1, -5, // R
    -1,  0,  6,  2, -2,  0,  0,  0,  1, -2, -3,  0, -2, -2, -2,  1,  0, -4, -2, -3,  4,  0, -1, -5, // N
    -2, -1,  2,  7, -3,  0,  2, -1,  0, -4, -3,  0, -3, -4, -1,  0, -1, -4, -2, -3,  5,  1, -1, -5, // D
    -1, -3, -2, -3, 12, -3, -3, -3, -3, -3, -2, -3, -2, -2, -4, -1, -1, -5, -3, -1, -2, -3, -2, -5, // C
    -1,  1,  0,  0, -3,  6,  2, -2,  1, -2, -2,  1,  0, -4, -1,  0, -1, -2, -1, -3,  0,  4, -1, -5, // Q
    -1,  0,  0,  2, -3,  2,  6, -2,  0, -3, -2,  1, -2, -3,  0,  0, -1, -3, -2, -3,  1,  4, -1, -5, // E
     0, -2,  0, -1, -3, -2, -2,  7, -2, -4, -3, -2, -2, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -5, // G
    -2,  0,  1,  0, -3,  1,  0, -2, 10, -3, -2, -1,  0, -2, -2, -1, -2, -3,  2, -3,  0,  0, -1, -5, // H
    -1, -3, -2, -4, -3, -2, -3, -4, -3,  5,  2, -3,  2,  0, -2, -2, -1, -2,  0,  3, -3, -3, -1, -5, // I
    -1, -2, -3, -3, -2, -2, -2, -3, -2,  2,  5, -3,  2,  1, -3, -3, -1, -2,  0,  1, -3, -2, -1, -5, // L
    -1,  3,  0,  0, -3,  1,  1, -2, -1, -3, -3,  5, -1, -3, -1, -1, -1, -2, -1, -2,  0,  1, -1, -5, // K
    -1, -1, -2, -3, -2,  0, -2, -2,  0,  2,  2, -1,  6,  0, -2, -2, -1, -2,  0,  1, -2, -1, -1, -5, // M
    -2, -2, -2, -4, -2, -4, -3, -3, -2,  0,  1, -3,  0,  8, -3, -2, -1,  1,  3,  0, -3, -3, -1, -5, // F
    -1, -2, -2, -1, -4, -1,  0, -2, -2, -2, -3, -1, -2, -3,  9, -1, -1, -3, -3, -3, -2, -1, -1, -5, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -3, -1, -2, -2, -1,  4,  2, -4, -2, -1,  0,  0,  0, -5, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -1, -1,  2,  5, -3, -1,  0,  0, -1,  0, -5, // T
    -2, -2, -4, -4, -5, -2, -3, -2, -3, -2, -2, -2, -2,  1, -3, -4, -3, 15,  3, -3, -4, -2, -2, -5, // W
    -2, -1, -2, -2, -3, -1, -2, -3,  2,  0,  0, -1,  0,  3, -3, -2, -1,  3,  8, -1, -2, -2, -1, -5, // Y
     0, -2, -3, -3, -1, -3, -3, -3, -3,  3,  1, -2,  1,  0, -3, -1,  0, -3, -1,  5, -3, -3, -1, -5, // V
    -1, -1,  4,  5, -2,  0,  1, -1,  0, -3, -3,  0, -2, -3, -2,  0,  0, -4, -2, -3,  4,  2, -1, -5, // B
    -1,  0,  0,  1, -3,  4,  4, -2,  0, -3, -2,  1, -1, -3, -1,  0, -1, -2, -2, -3,  2,  4, -1, -5, // Z
     0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0,  0, -2, -1, -1, -1, -1, -1, -5, // X
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// BLOSUM50, 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const BLOSUM50: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     5, -2, -1, -2, -1, -1, -1,  0, -2, -1, -2, -1, -1, -3, -1,  1,  0, -3, -2,  0, -2, -1, -1, -5, // A
    -2,  7, -1, -2, -4,  1,  0, -3,  0, -4, -3,  3, -2, -3, -3, -1, -1, -3, -1, -3, -1,  0, -1, -5, // R
    -1, -1,  7,  2, -2,  0,  0,  0,  1, -3, -4,  0, -2, -4, -2,  1,  0, -4, -2, -3,  4,  0, -1, -5, // N
    -2, -2,  2,  8, -4,  0,  2, -1, -1, -4, -4, -1, -4, -5, -1,  0, -1, -5, -3, -4,  5,  1, -1, -5, // D
    -1, -4, -2, -4, 13, -3, -3, -3, -3, -2, -2, -3, -2, -2, -4, -1, -1, -5, -3, -1, -3, -3, -2, -5, // C
    -1,  1,  0,  0, -3,  7,  2, -2,  1, -3, -2,  2,  0, -4, -1,  0, -1, -1, -1, -3,  0,  4, -1, -5, // Q
    -1,  0,  0,  2, -3,  2,  6, -3,  0, -4, -3,  1, -2, -3, -1, -1, -1, -3, -2, -3,  1,  5, -1, -5, // E
     0, -3,  0, -1, -3, -2, -3,  8, -2, -4, -4, -2, -3, -4, -2,  0, -2, -3, -3, -4, -1, -2, -2, -5, // G
    -2,  0,  1, -1, -3,  1,  0, -2, 10, -4, -3,  0, -1, -1, -2, -1, -2, -3,  2, -4,  0,  0, -1, -5, // H
    -1, -4, -3, -4, -2, -3, -4, -4, -4,  5,  2, -3,  2,  0, -3, -3, -1, -3, -1,  4, -4, -3, -1, -5, // I
    -2, -3, -4, -4, -2, -2, -3, -4, -3,  2,  5, -3,  3,  1, -4, -3, -1, -2, -1,  1, -4, -3, -1, -5, // L
    -1,  3,  0, -1, -3,  2,  1, -2,  0, -3, -3,  6, -2, -4, -1,  0, -1, -3, -2, -3,  0,  1, -1, -5, // K
    -1, -2, -2, -4, -2,  0, -2, -3, -1,  2,  3, -2,  7,  0, -3, -2, -1, -1,  0,  1, -3, -1, -1, -5, // M
    -3, -3, -4, -5, -2, -4, -3, -4, -1,  0,  1, -4,  0,  8, -4, -3, -2,  1,  4, -1, -4, -4, -2, -5, // F
    -1, -3, -2, -1, -4, -1, -1, -2, -2, -3, -4, -1, -3, -4, 10, -1, -1, -4, -3, -3, -2, -1, -2, -5, // P
     1, -1,  1,  0, -1,  0, -1,  0, -1, -3, -3,  0, -2, -3, -1,  5,  2, -4, -2, -2,  0,  0, -1, -5, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  2,  5, -3, -2,  0,  0, -1,  0, -5, // T
    -3, -3, -4, -5, -5, -1, -3, -3, -3, -3, -2, -3, -1,  1, -4, -4, -3, 15,  2, -3, -5, -2, -3, -5, // W
    -2, -1, -2, -3, -3, -1, -2, -3,  2, -1, -1, -2,  0,  4, -3, -2, -2,  2,  8, -1, -3, -2, -1, -5, // Y
     0, -3, -3, -4, -1, -3, -3, -4, -4,  4,  1, -3,  1, -1, -3, -2,  0, -3, -1,  5, -4, -3, -1, -5, // V
    -2, -1,  4,  5, -3,  0,  1, -1,  0, -4, -4,  0, -3, -4, -2,  0,  0, -5, -3, -4,  5,  2, -1, -5, // B
    -1,  0,  0,  1, -3,  4,  5, -2,  0, -3, -3,  1, -1, -4, -1,  0, -1, -2, -2, -3,  2,  5, -1, -5, // Z
    -1, -1, -1, -1, -2, -1, -1, -2, -1, -1, -1, -1, -1, -2, -2, -1,  0, -3, -1, -1, -1, -1, -1, -5, // X
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// BLOSUM80, 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const BLOSUM80: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     7, -3, -3, -3, -1, -2, -2,  0, -3, -3, -3, -1, -2, -4, -1,  2,  0, -5, -4, -1, -3, -2, -1, -8, // A
    -3,  9, -1, -3, -6,  1, -1, -4,  0, -5, -4,  3, -3, -5, -3, -2, -2, -5, -4, -4, -2,  0, -2, -8, // R
    -3, -1,  9,  2, -5,  0, -1, -1,  1, -6, -6,  0, -4, -6, -4,  1,  0, -7, -4, -5,  5,  0, -2, -8, // N
    -3, -3,  2, 10, -7, -1,  2, -3, -2, -7, -7, -2, -6, -6, -3, -1, -2, -8, -6, -6,  6,  1, -3, -8, // D
    -1, -6, -5, -7, 13, -5, -7, -6, -7, -2, -3, -6, -3, -4, -6, -2, -2, -5, -5, -2, -6, -7, -4, -8, // C
    -2,  1,  0, -1, -5,  9,  3, -4,  1, -5, -4,  2, -1, -5, -3, -1, -1, -4, -3, -4, -1,  5, -2, -8, // Q
    -2, -1, -1,  2, -7,  3,  8, -4,  0, -6, -6,  1, -4, -6, -2,  0, -2, -6, -5, -4,  1,  6, -2, -8, // E
     0, -4, -1, -3, -6, -4, -4,  9, -4, -7, -7, -3, -5, -6, -5, -1, -3, -6, -6, -6, -2, -4, -3, -8, // G
    -3,  0,  1, -2, -7,  1,  0, -4, 12, -6, -5, -1, -4, -2, -4, -2, -3, -4,  3, -5, -1,  0, -2, -8, // H
    -3, -5, -6, -7, -2, -5, -6, -7, -6,  7,  2, -5,  2, -1, -5, -4, -2, -5, -3,  4, -6, -6, -2, -8, // I
    -3, -4, -6, -7, -3, -4, -6, -7, -5,  2,  6, -4,  3,  0, -5, -4, -3, -4, -2,  1, -7, -5, -2, -8, // L
    -1,  3,  0, -2, -6,  2,  1, -3, -1, -5, -4,  8, -3, -5, -2, -1, -1, -6, -4, -4, -1,  1, -2, -8, // K
    -2, -3, -4, -6, -3, -1, -4, -5, -4,  2,  3, -3,  9, -1, -4, -3, -1, -3, -3,  1, -5, -3, -2, -8, // M
    -4, -5, -6, -6, -4, -5, -6, -6, -2, -1,  0, -5, -1, 10, -6, -4, -4,  0,  4, -2, -6, -6, -3, -8, // F
    -1, -3, -4, -3, -6, -3, -2, -5, -4, -5, -5, -2, -4, -6, 12, -2, -3, -7, -6, -4, -4, -2, -3, -8, // P
     2, -2,  1, -1, -2, -1,  0, -1, -2, -4, -4, -1, -3, -4, -2,  7,  2, -6, -3, -3,  0, -1, -1, -8, // S
     0, -2,  0, -2, -2, -1, -2, -3, -3, -2, -3, -1, -1, -4, -3,  2,  8, -5, -3,  0, -1, -2, -1, -8, // T
    -5, -5, -7, -8, -5, -4, -6, -6, -4, -5, -4, -6, -3,  0, -7, -6, -5, 16,  3, -5, -8, -5, -5, -8, // W
    -4, -4, -4, -6, -5, -3, -5, -6,  3, -3, -2, -4, -3,  4, -6, -3, -3,  3, 11, -3, -5, -4, -3, -8, // Y
    -1, -4, -5, -6, -2, -4, -4, -6, -5,  4,  1, -4,  1, -2, -4, -3,  0, -5, -3,  7, -6, -4, -2, -8, // V
    -3, -2,  5,  6, -6, -1,  1, -2, -1, -6, -7, -1, -5, -6, -4,  0, -1, -8, -5, -6,  6,  0, -3, -8, // B
    -2,  0,  0,  1, -7,  5,  6, -4,  0, -6, -5,  1, -3, -6, -2, -1, -2, -5, -4, -4,  0,  6, -1, -8, // Z
    -1, -2, -2, -3, -4, -2, -2, -3, -2, -2, -2, -2, -2, -3, -3, -1, -1, -5, -3, -2, -3, -1, -2, -8, // X
    -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM250, 24x24 flattened, NCBI/Dayhoff reference.
#[rustfmt::skip]
const PAM250: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     2, -2,  0,  0, -2,  0,  0,  1, -1, -1, -2, -1, -1, -3,  1,  1,  1, -6, -3,  0,  0,  0,  0, -8, // A
    -2,  6,  0, -1, -4,  1, -1, -3,  2, -2, -3,  3,  0, -4,  0,  0, -1,  2, -4, -2, -1,  0, -1, -8, // R
     0,  0,  2,  2, -4,  1,  1,  0,  2, -2, -3,  1, -2, -3,  0,  1,  0, -4, -2, -2,  2,  1,  0, -8, // N
     0, -1,  2,  4, -5,  2,  3,  1,  1, -2, -4,  0, -3, -6, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // D
    -2, -4, -4, -5, 12, -5, -5, -3, -3, -2, -6, -5, -5, -4, -3,  0, -2, -8,  0, -2, -4, -5, -3, -8, // C
     0,  1,  1,  2, -5,  4,  2, -1,  3, -2, -2,  1, -1, -5,  0, -1, -1, -5, -4, -2,  1,  3, -1, -8, // Q
     0, -1,  1,  3, -5,  2,  4,  0,  1, -2, -3,  0, -2, -5, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // E
     1, -3,  0,  1, -3, -1,  0,  5, -2, -3, -4, -2, -3, -5,  0,  1,  0, -7, -5, -1,  0,  0, -1, -8, // G
    -1,  2,  2,  1, -3,  3,  1, -2,  6, -2, -2,  0, -2, -2,  0, -1, -1, -3,  0, -2,  1,  2, -1, -8, // H
    -1, -2, -2, -2, -2, -2, -2, -3, -2,  5,  2, -2,  2,  1, -2, -1,  0, -5, -1,  4, -2, -2, -1, -8, // I
    -2, -3, -3, -4, -6, -2, -3, -4, -2,  2,  6, -3,  4,  2, -3, -3, -2, -2, -1,  2, -3, -3, -1, -8, // L
    -1,  3,  1,  0, -5,  1,  0, -2,  0, -2, -3,  5,  0, -5, -1,  0,  0, -3, -4, -2,  1,  0, -1, -8, // K
    -1,  0, -2, -3, -5, -1, -2, -3, -2,  2,  4,  0,  6,  0, -2, -2, -1, -4, -2,  2, -2, -2, -1, -8, // M
    -3, -4, -3, -6, -4, -5, -5, -5, -2,  1,  2, -5,  0,  9, -5, -3, -3,  0,  7, -1, -4, -5, -2, -8, // F
     1,  0,  0, -1, -3,  0, -1,  0,  0, -2, -3, -1, -2, -5,  6,  1,  0, -6, -5, -1, -1,  0, -1, -8, // P
     1,  0,  1,  0,  0, -1,  0,  1, -1, -1, -3,  0, -2, -3,  1,  2,  1, -2, -3, -1,  0,  0,  0, -8, // S
     1, -1,  0,  0, -2, -1,  0,  0, -1,  0, -2,  0, -1, -3,  0,  1,  3, -5, -3,  0,  0, -1,  0, -8, // T
    -6,  2, -4, -7, -8, -5, -7, -7, -3, -5, -2, -3, -4,  0, -6, -2, -5, 17,  0, -6, -5, -6, -4, -8, // W
    -3, -4, -2, -4,  0, -4, -4, -5,  0, -1, -1, -4, -2,  7, -5, -3, -3,  0, 10, -2, -3, -4, -2, -8, // Y
     0, -2, -2, -2, -2, -2, -2, -1, -2,  4,  2, -2,  2, -1, -1, -1,  0, -6, -2,  4, -2, -2, -1, -8, // V
     0, -1,  2,  3, -4,  1,  3,  0,  1, -2, -3,  1, -2, -4, -1,  0,  0, -5, -3, -2,  3,  2, -1, -8, // B
     0,  0,  1,  3, -5,  3,  3,  0,  2, -2, -3,  0, -2, -5,  0,  0, -1, -6, -4, -2,  2,  3, -1, -8, // Z
     0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -1, -1, -1, -2, -1,  0,  0, -4, -2, -1, -1, -1, -1, -8, // X
    -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM120, 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const PAM120: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     3, -3, -1,  0, -3, -1,  0,  1, -3, -1, -3, -2, -2, -4,  1,  1,  1, -7, -4,  0,  0, -1, -1, -8, // A
    -3,  6, -1, -3, -4,  1, -3, -4,  1, -2, -4,  2, -1, -5, -1, -1, -2,  1, -5, -3, -2, -1, -2, -8, // R
    -1, -1,  4,  2, -5,  0,  1,  0,  2, -2, -4,  1, -3, -4, -2,  1,  0, -4, -2, -3,  3,  0, -1, -8, // N
     0, -3,  2,  5, -7,  1,  3,  0,  0, -3, -5, -1, -4, -7, -3,  0, -1, -8, -5, -3,  4,  3, -2, -8, // D
    -3, -4, -5, -7,  9, -7, -7, -4, -4, -3, -7, -7, -6, -6, -4,  0, -3, -8, -1, -3, -6, -7, -4, -8, // C
    -1,  1,  0,  1, -7,  6,  2, -3,  3, -3, -2,  0, -1, -6,  0, -2, -2, -6, -5, -3,  0,  4, -1, -8, // Q
     0, -3,  1,  3, -7,  2,  5, -1, -1, -3, -4, -1, -3, -7, -2, -1, -2, -8, -5, -3,  3,  4, -1, -8, // E
     1, -4,  0,  0, -4, -3, -1,  5, -4, -4, -5, -3, -4, -5, -2,  1, -1, -8, -6, -2,  0, -2, -2, -8, // G
    -3,  1,  2,  0, -4,  3, -1, -4,  7, -4, -3, -2, -4, -3, -1, -2, -3, -3, -1, -3,  1,  1, -2, -8, // H
    -1, -2, -2, -3, -3, -3, -3, -4, -4,  6,  1, -3,  1,  0, -3, -2,  0, -6, -2,  3, -3, -3, -1, -8, // I
    -3, -4, -4, -5, -7, -2, -4, -5, -3,  1,  5, -4,  3,  0, -3, -4, -3, -3, -2,  1, -4, -3, -2, -8, // L
    -2,  2,  1, -1, -7,  0, -1, -3, -2, -3, -4,  5,  0, -7, -2, -1, -1, -5, -5, -4,  0, -1, -2, -8, // K
    -2, -1, -3, -4, -6, -1, -3, -4, -4,  1,  3,  0,  8, -1, -3, -2, -1, -6, -4,  1, -4, -2, -2, -8, // M
    -4, -5, -4, -7, -6, -6, -7, -5, -3,  0,  0, -7, -1,  8, -5, -3, -4, -1,  4, -3, -5, -6, -3, -8, // F
     1, -1, -2, -3, -4,  0, -2, -2, -1, -3, -3, -2, -3, -5,  6,  1, -1, -7, -6, -2, -2, -1, -2, -8, // P
     1, -1,  1,  0,  0, -2, -1,  1, -2, -2, -4, -1, -2, -3,  1,  3,  2, -2, -3, -2,  0, -1, -1, -8, // S
     1, -2,  0, -1, -3, -2, -2, -1, -3,  0, -3, -1, -1, -4, -1,  2,  4, -6, -3,  0,  0, -2, -1, -8, // T
    -7,  1, -4, -8, -8, -6, -8, -8, -3, -6, -3, -5, -6, -1, -7, -2, -6, 12, -2, -8, -6, -7, -5, -8, // W
    -4, -5, -2, -5, -1, -5, -5, -6, -1, -2, -2, -5, -4,  4, -6, -3, -3, -2,  8, -3, -3, -5, -3, -8, // Y
     0, -3, -3, -3, -3, -3, -3, -2, -3,  3,  1, -4,  1, -3, -2, -2,  0, -8, -3,  5, -3, -3, -1, -8, // V
     0, -2,  3,  4, -6,  0,  3,  0,  1, -3, -4,  0, -4, -5, -2,  0,  0, -6, -3, -3,  4,  2, -1, -8, // B
    -1, -1,  0,  3, -7,  4,  4, -2,  1, -3, -3, -1, -2, -6, -1, -1, -2, -7, -5, -3,  2,  4, -1, -8, // Z
    -1, -2, -1, -2, -4, -1, -1, -2, -2, -1, -2, -2, -2, -3, -2, -1, -1, -5, -3, -1, -1, -1, -2, -8, // X
    -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];


/// BLOSUM30, 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const BLOSUM30: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     4, -1,  0,  0, -3,  1,  0,  0, -2,  0, -1,  0,  1, -2, -1,  1,  1, -5, -4,  1,  0,  0,  0, -7, // A
    -1,  8, -2, -1, -2,  3, -1, -2, -1, -3, -2,  1,  0, -1, -1, -1, -3,  0,  0, -1, -2,  0, -1, -7, // R
     0, -2,  8,  1, -1, -1, -1,  0,  0, -2, -2,  0, -1, -1, -3,  0,  1, -7, -4, -2,  5, -1, -1, -7, // N
     0, -1,  1,  9, -3, -1,  1, -1, -2, -4, -1,  0, -3, -5, -1,  0, -1, -4, -1, -2,  5,  0, -1, -7, // D
    -3, -2, -1, -3, 17, -2,  1, -4, -5,  0, -2,  0, -2, -3, -3, -2, -2, -2, -6, -2, -2,  0, -2, -7, // C
     1,  3, -1, -1, -2,  8,  2, -2,  0, -2,  0,  0, -1, -3,  0, -1,  0, -1, -1, -3, -1,  4, -1, -7, // Q
     0, -1, -1,  1,  1,  2,  6, -2,  0, -3, -1,  1, -1, -4,  1,  0, -2, -1, -2, -3,  0,  5, -1, -7, // E
     0, -2,  0, -1, -4, -2, -2,  8, -3, -1, -2, -1, -2, -3, -1,  0, -2,  1, -3, -3,  0, -2, -1, -7, // G
    -2, -1,  0, -2, -5,  0,  0, -3, 14, -2, -1, -2,  2, -3,  1, -1, -2, -5,  0, -3, -1,  0, -1, -7, // H
     0, -3, -2, -4,  0, -2, -3, -1, -2,  6,  2, -2,  1,  0, -3, -1,  0, -3, -1,  4, -3, -3,  0, -7, // I
    -1, -2, -2, -1, -2,  0, -1, -2, -1,  2,  4, -2,  2,  2, -3, -2,  0, -2,  3,  1, -1, -1, -1, -7, // L
     0,  1,  0,  0,  0,  0,  1, -1, -2, -2, -2,  4,  2, -1,  0,  0, -1, -2, -1, -2,  0,  0,  0, -7, // K
     1,  0, -1, -3, -2, -1, -1, -2,  2,  1,  2,  2,  6,  0, -4, -2,  0, -3, -1,  0, -2, -1,  0, -7, // M
    -2, -1, -1, -5, -3, -3, -4, -3, -3,  0,  2, -1,  0, 10, -4, -1, -2,  0,  3, -1, -3, -4, -1, -7, // F
    -1, -1, -3, -1, -3,  0,  1, -1,  1, -3, -3,  0, -4, -4, 11, -1,  0, -3, -2, -4, -2,  0, -1, -7, // P
     1, -1,  0,  0, -2, -1,  0,  0, -1, -1, -2,  0, -2, -1, -1,  4,  2, -3, -2, -1,  0,  0,  0, -7, // S
     1, -3,  1, -1, -2,  0, -2, -2, -2,  0,  0, -1,  0, -2,  0,  2,  5, -5, -1,  1,  0, -1,  0, -7, // T
    -5,  0, -7, -4, -2, -1, -1,  1, -5, -3, -2, -2, -3,  0, -3, -3, -5, 20,  5, -3, -5, -1, -2, -7, // W
    -4,  0, -4, -1, -6, -1, -2, -3,  0, -1,  3, -1, -1,  3, -2, -2, -1,  5,  9,  1, -3, -2, -1, -7, // Y
     1, -1, -2, -2, -2, -3, -3, -3, -3,  4,  1, -2,  0, -1, -4, -1,  1, -3,  1,  5, -2, -3,  0, -7, // V
     0, -2,  5,  5, -2, -1,  0,  0, -1, -3, -1,  0, -2, -3, -2,  0,  0, -5, -3, -2,  5,  0, -1, -7, // B
     0,  0, -1,  0,  0,  4,  5, -2,  0, -3, -1,  0, -1, -4,  0,  0, -1, -1, -2, -3,  0,  4, -1, -7, // Z
     0, -1, -1, -1, -2, -1, -1, -1, -1,  0, -1,  0,  0, -1, -1,  0,  0, -2, -1,  0, -1, -1, -1, -7, // X
    -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,  1, // *
];

/// PAM40, 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const PAM40: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     6, -6, -3, -3, -6, -3, -2, -1, -6, -4, -5, -6, -4, -7, -1,  0,  0, -12, -7, -2, -3, -2, -3, -15, // A
    -6,  8, -5, -9, -7, -1, -8, -8, -1, -5, -8,  1, -3, -8, -3, -2, -5, -1, -9, -7, -6, -3, -5, -15, // R
    -3, -5,  7,  2, -9, -3, -1, -2,  1, -4, -6,  0, -7, -8, -5,  1, -1, -7, -4, -7,  6, -2, -3, -15, // N
    -3, -9,  2,  7, -12, -2,  3, -3, -3, -6, -11, -4, -9, -13, -7, -3, -4, -13, -10, -7,  6,  2, -5, -15, // D
    -6, -7, -9, -12,  9, -12, -12, -8, -7, -5, -13, -12, -12, -11, -7, -2, -7, -14, -3, -5, -11, -12, -8, -15, // C
    -3, -1, -3, -2, -12,  8,  2, -6,  1, -7, -4, -2, -3, -11, -2, -4, -5, -11, -10, -6, -2,  6, -4, -15, // Q
    -2, -8, -1,  3, -12,  2,  7, -3, -4, -5, -8, -4, -6, -12, -5, -4, -5, -15, -8, -6,  2,  6, -4, -15, // E
    -1, -8, -2, -3, -8, -6, -3,  6, -8, -9, -9, -6, -7, -8, -5, -1, -5, -13, -12, -5, -2, -4, -4, -15, // G
    -6, -1,  1, -3, -7,  1, -4, -8,  9, -8, -5, -5, -8, -5, -3, -5, -6, -6, -3, -6, -1,  0, -4, -15, // H
    -4, -5, -4, -6, -5, -7, -5, -9, -8,  8, -1, -5,  1, -2, -7, -6, -2, -12, -5,  2, -5, -5, -4, -15, // I
    -5, -8, -6, -11, -13, -4, -8, -9, -5, -1,  7, -7,  1, -2, -6, -7, -6, -5, -6, -2, -8, -6, -5, -15, // L
    -6,  1,  0, -4, -12, -2, -4, -6, -5, -5, -7,  6, -1, -12, -6, -3, -2, -10, -8, -7, -1, -3, -4, -15, // K
    -4, -3, -7, -9, -12, -3, -6, -7, -8,  1,  1, -1, 11, -3, -7, -5, -3, -11, -10, -1, -8, -4, -4, -15, // M
    -7, -8, -8, -13, -11, -11, -12, -8, -5, -2, -2, -12, -3,  9, -9, -6, -8, -4,  2, -7, -10, -12, -7, -15, // F
    -1, -3, -5, -7, -7, -2, -5, -5, -3, -7, -6, -6, -7, -9,  8, -1, -3, -12, -12, -5, -6, -3, -4, -15, // P
     0, -2,  1, -3, -2, -4, -4, -1, -5, -6, -7, -3, -5, -6, -1,  6,  1, -4, -6, -5,  0, -4, -2, -15, // S
     0, -5, -1, -4, -7, -5, -5, -5, -6, -2, -6, -2, -3, -8, -3,  1,  7, -11, -6, -2, -2, -5, -3, -15, // T
    -12, -1, -7, -13, -14, -11, -15, -13, -6, -12, -5, -10, -11, -4, -12, -4, -11, 13, -4, -14, -9, -13, -9, -15, // W
    -7, -9, -4, -10, -3, -10, -8, -12, -3, -5, -6, -8, -10,  2, -12, -6, -6, -4, 10, -6, -6, -9, -7, -15, // Y
    -2, -7, -7, -7, -5, -6, -6, -5, -6,  2, -2, -7, -1, -7, -5, -5, -2, -14, -6,  7, -7, -6, -4, -15, // V
    -3, -6,  6,  6, -11, -2,  2, -2, -1, -5, -8, -1, -8, -10, -6,  0, -2, -9, -6, -7,  6,  1, -5, -15, // B
    -2, -3, -2,  2, -12,  6,  6, -4,  0, -5, -6, -3, -4, -12, -3, -4, -5, -13, -9, -6,  1,  6, -4, -15, // Z
    -3, -5, -3, -5, -8, -4, -4, -4, -4, -4, -5, -4, -4, -7, -4, -2, -3, -9, -7, -4, -5, -4, -4, -15, // X
    -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15,  1, // *
];

#[cfg(test)]
mod tests {
    use super::*;

    use affinity_seq::AminoAcid::*;

    #[test]
    fn gap_cost_is_affine() {
        let gaps = GapPenalties::new(-10.0, -1.0);
        assert_eq!(gaps.cost(0), 0.0);
        assert_eq!(gaps.cost(1), -10.0);
        assert_eq!(gaps.cost(4), -13.0);
        assert_eq!(GapPenalties::linear(-8.0).cost(3), -24.0);
    }

    #[test]
    fn nucleotide_default_values() {
        let m = ScoringMatrix::nucleotide_default();
        assert_eq!(m.score(Nucleotide::A, Nucleotide::A).unwrap(), 2.0);
        assert_eq!(m.score(Nucleotide::A, Nucleotide::T).unwrap(), -1.0);
        assert_eq!(m.score(Nucleotide::N, Nucleotide::Gap).unwrap(), -1.0);
        assert!(m.is_symmetric());
        assert!(Nucleotide::all().all(|r| m.covers(r)));
    }

    #[test]
    fn blosum62_spot_checks() {
        let m = ScoringMatrix::blosum62();
        assert_eq!(m.score(Ala, Ala).unwrap(), 4.0);
        assert_eq!(m.score(Trp, Trp).unwrap(), 11.0);
        assert_eq!(m.score(Ala, Arg).unwrap(), -1.0);
        assert_eq!(m.score(Stop, Stop).unwrap(), 1.0);
        assert_eq!(m.name(), "BLOSUM62");
    }

    #[test]
    fn blosum50_textbook_entries() {
        let m = ScoringMatrix::blosum50();
        assert_eq!(m.score(His, His).unwrap(), 10.0);
        assert_eq!(m.score(Trp, Trp).unwrap(), 15.0);
        assert_eq!(m.score(Glu, Glu).unwrap(), 6.0);
        assert_eq!(m.score(Pro, His).unwrap(), -2.0);
        assert_eq!(m.score(Pro, Trp).unwrap(), -4.0);
        assert_eq!(m.score(Ala, Gly).unwrap(), 0.0);
        assert_eq!(m.score(His, Glu).unwrap(), 0.0);
    }

    #[test]
    fn published_entries_per_table() {
        // (matrix, A/A, C/C, W/W, L/F, W/R, */*)
        let cases = [
            (ScoringMatrix::blosum30(), 4.0, 17.0, 20.0, 2.0, 0.0, 1.0),
            (ScoringMatrix::blosum45(), 5.0, 12.0, 15.0, 1.0, -2.0, 1.0),
            (ScoringMatrix::blosum50(), 5.0, 13.0, 15.0, 1.0, -3.0, 1.0),
            (ScoringMatrix::blosum62(), 4.0, 9.0, 11.0, 0.0, -3.0, 1.0),
            (ScoringMatrix::blosum80(), 7.0, 13.0, 16.0, 0.0, -5.0, 1.0),
            (ScoringMatrix::pam40(), 6.0, 9.0, 13.0, -2.0, -1.0, 1.0),
            (ScoringMatrix::pam120(), 3.0, 9.0, 12.0, 0.0, 1.0, 1.0),
            (ScoringMatrix::pam250(), 2.0, 12.0, 17.0, 2.0, 2.0, 1.0),
        ];
        for (m, aa, cc, ww, lf, wr, stop) in cases {
            let name = m.name().to_string();
            assert_eq!(m.score(Ala, Ala).unwrap(), aa, "{name} A/A");
            assert_eq!(m.score(Cys, Cys).unwrap(), cc, "{name} C/C");
            assert_eq!(m.score(Trp, Trp).unwrap(), ww, "{name} W/W");
            assert_eq!(m.score(Leu, Phe).unwrap(), lf, "{name} L/F");
            assert_eq!(m.score(Trp, Arg).unwrap(), wr, "{name} W/R");
            assert_eq!(m.score(Stop, Stop).unwrap(), stop, "{name} */*");
        }
    }

    #[test]
    fn pam120_leu_phe_is_zero_both_ways() {
        let m = ScoringMatrix::pam120();
        assert_eq!(m.score(Leu, Phe).unwrap(), 0.0);
        assert_eq!(m.score(Phe, Leu).unwrap(), 0.0);
    }

    #[test]
    fn pam120_diagonal() {
        let m = ScoringMatrix::pam120();
        let expected = [
            3.0, 6.0, 4.0, 5.0, 9.0, 6.0, 5.0, 5.0, 7.0, 6.0, 5.0, 5.0, 8.0, 8.0, 6.0, 3.0, 4.0,
            12.0, 8.0, 5.0, 4.0, 4.0, -2.0, 1.0,
        ];
        for (r, want) in AminoAcid::all().zip(expected) {
            assert_eq!(m.score(r, r).unwrap(), want, "{}", r.symbol());
        }
    }

    #[test]
    fn standard_tables_are_symmetric() {
        for m in [
            ScoringMatrix::blosum30(),
            ScoringMatrix::blosum45(),
            ScoringMatrix::blosum50(),
            ScoringMatrix::blosum62(),
            ScoringMatrix::blosum80(),
            ScoringMatrix::pam40(),
            ScoringMatrix::pam120(),
            ScoringMatrix::pam250(),
        ] {
            assert!(m.is_symmetric(), "{} not symmetric", m.name());
        }
    }

    #[test]
    fn amino_acid_tables_do_not_cover_gap() {
        let m = ScoringMatrix::pam250();
        assert!(m.covers(Xaa));
        assert!(!m.covers(Gap));
        let err = m.score(Trp, Gap).unwrap_err();
        assert_eq!(
            err,
            AffinityError::IncompleteScoringMatrix {
                alphabet: "amino acid",
                a: 'W',
                b: '-',
            }
        );
    }

    #[test]
    fn with_and_without_score() {
        let m = ScoringMatrix::blosum62()
            .with_score(Ala, Gap, -4.0)
            .without_score(Ala, Arg);
        assert_eq!(m.score(Ala, Gap).unwrap(), -4.0);
        assert!(m.score(Ala, Arg).is_err());
        assert!(!m.is_symmetric());
    }

    #[test]
    fn parse_ncbi_partial_matrix() {
        let text = "\
# toy matrix
   A  C  G  T
A  5 -4 -4 -4
C -4  5 -4 -4
G -4 -4  5 -4
T -4 -4 -4  5
";
        let m = ScoringMatrix::<Nucleotide>::parse_ncbi("toy", text).unwrap();
        assert_eq!(m.name(), "toy");
        assert_eq!(m.score(Nucleotide::G, Nucleotide::G).unwrap(), 5.0);
        assert_eq!(m.score(Nucleotide::G, Nucleotide::T).unwrap(), -4.0);
        assert!(m.covers(Nucleotide::T));
        assert!(!m.covers(Nucleotide::N));
        assert!(m.score(Nucleotide::A, Nucleotide::N).is_err());
        assert!(m.is_symmetric());
    }

    #[test]
    fn parse_ncbi_accepts_decimals() {
        let text = "A C\nA 1.5 -0.5\nC -0.5 1.5\n";
        let m = ScoringMatrix::<Nucleotide>::parse_ncbi("half", text).unwrap();
        assert_eq!(m.score(Nucleotide::A, Nucleotide::C).unwrap(), -0.5);
    }

    #[test]
    fn parse_ncbi_rejects_malformed_text() {
        let parse = |t: &str| ScoringMatrix::<Nucleotide>::parse_ncbi("bad", t);
        assert!(matches!(parse(""), Err(AffinityError::Parse(_))));
        assert!(matches!(parse("A C\nA 1\n"), Err(AffinityError::Parse(_))));
        assert!(matches!(parse("A Q\nA 1 2\n"), Err(AffinityError::Parse(_))));
        assert!(matches!(parse("A C\nA 1 x\n"), Err(AffinityError::Parse(_))));
        assert!(matches!(parse("A CG\nA 1 2\n"), Err(AffinityError::Parse(_))));
    }

    #[test]
    fn parse_ncbi_rejects_duplicate_rows() {
        let text = "A C\nA 1 -1\nC -1 1\nA 2 -2\n";
        match ScoringMatrix::<Nucleotide>::parse_ncbi("dup", text) {
            Err(AffinityError::Parse(msg)) => {
                assert!(msg.contains("line 4"), "{msg}");
                assert!(msg.contains("duplicate row 'A'"), "{msg}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn matrix_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoringMatrix<AminoAcid>>();
        assert_send_sync::<ScoringMatrix<Nucleotide>>();
    }

    #[test]
    fn debug_reports_coverage() {
        let dbg = format!("{:?}", ScoringMatrix::blosum62());
        assert!(dbg.contains("BLOSUM62"));
        assert!(dbg.contains("covered: 24"));
    }
}
