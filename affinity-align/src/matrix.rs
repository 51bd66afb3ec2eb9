//! Affine-gap dynamic-programming core (Gotoh, 1982).
//!
//! Three coupled layers are computed over the `(n + 1) x (m + 1)` grid of a
//! query of length `n` and a subject of length `m`:
//!
//! - **M**: best score ending in a match/mismatch at `(i, j)`
//! - **Ix**: best score ending in a gap in the subject (consumes `query[i]`)
//! - **Iy**: best score ending in a gap in the query (consumes `subject[j]`)
//!
//! ```text
//! M[i,j]  = s(query[i], subject[j]) + max(M[i-1,j-1], Ix[i-1,j-1], Iy[i-1,j-1])
//! Ix[i,j] = max(M[i-1,j] + open, Ix[i-1,j] + extend)
//! Iy[i,j] = max(M[i,j-1] + open, Iy[i,j-1] + extend)
//! ```
//!
//! Each row only reads the row above it, so scores live in two rolling rows.
//! The predecessor chosen for every layer of every cell is kept for the whole
//! grid, packed two bits per layer into one byte per cell, which is all the
//! traceback needs.
//!
//! Ties between predecessors resolve `M > Ix > Iy` using exact floating
//! point comparison.

use std::sync::atomic::{AtomicBool, Ordering};

use affinity_core::{AffinityError, Result};
use affinity_seq::Residue;

use crate::scoring::{GapPenalties, ScoringMatrix};
use crate::types::AlignmentMode;

/// One of the three score layers of a DP cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Match/mismatch.
    M,
    /// Gap in the subject.
    Ix,
    /// Gap in the query.
    Iy,
}

/// The predecessor recorded for one layer of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointer {
    /// Continue in the given layer of the predecessor cell.
    From(Layer),
    /// No predecessor: the path starts here (local floor or grid origin).
    Start,
}

impl Pointer {
    const fn bits(self) -> u8 {
        match self {
            Pointer::From(Layer::M) => 0,
            Pointer::From(Layer::Ix) => 1,
            Pointer::From(Layer::Iy) => 2,
            Pointer::Start => 3,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Pointer::From(Layer::M),
            1 => Pointer::From(Layer::Ix),
            2 => Pointer::From(Layer::Iy),
            _ => Pointer::Start,
        }
    }
}

/// Bit offset of each layer's pointer inside a packed cell byte.
const fn shift(layer: Layer) -> u8 {
    match layer {
        Layer::M => 0,
        Layer::Ix => 2,
        Layer::Iy => 4,
    }
}

/// A packed cell with every layer pointing at `Start`.
const ALL_START: u8 = 0b11_11_11;

fn pack(m: Pointer, ix: Pointer, iy: Pointer) -> u8 {
    m.bits() << shift(Layer::M) | ix.bits() << shift(Layer::Ix) | iy.bits() << shift(Layer::Iy)
}

/// A grid position together with the layer the path occupies there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row: number of query residues consumed.
    pub i: usize,
    /// Column: number of subject residues consumed.
    pub j: usize,
    /// Active layer.
    pub layer: Layer,
}

/// Pick the best candidate. Earlier candidates win ties.
#[inline]
fn best<const N: usize>(candidates: [(f64, Layer); N]) -> (f64, Layer) {
    let mut best = candidates[0];
    for &(value, layer) in &candidates[1..] {
        if value > best.0 {
            best = (value, layer);
        }
    }
    best
}

/// Score one layer of one cell.
///
/// `candidates` are `(predecessor value, score added, predecessor layer)`
/// in tie-break order. Under the local floor a non-positive result is
/// clamped to 0, and a path whose predecessor carries no positive score
/// starts fresh here.
#[inline]
fn step<const N: usize>(
    candidates: [(f64, f64, Layer); N],
    mode: AlignmentMode,
) -> (f64, Pointer) {
    let mut choice = candidates[0];
    for &candidate in &candidates[1..] {
        if candidate.0 + candidate.1 > choice.0 + choice.1 {
            choice = candidate;
        }
    }
    let (pred, added, layer) = choice;
    let value = pred + added;
    match mode {
        AlignmentMode::Global => (value, Pointer::From(layer)),
        AlignmentMode::Local if value <= 0.0 => (0.0, Pointer::Start),
        AlignmentMode::Local if pred <= 0.0 => (value, Pointer::Start),
        AlignmentMode::Local => (value, Pointer::From(layer)),
    }
}

/// Two rolling rows of the three score layers.
struct Row {
    m: Vec<f64>,
    ix: Vec<f64>,
    iy: Vec<f64>,
}

impl Row {
    fn filled(cols: usize, value: f64) -> Self {
        Self {
            m: vec![value; cols],
            ix: vec![value; cols],
            iy: vec![value; cols],
        }
    }
}

/// A filled alignment matrix: traceback pointers plus the located end cell.
///
/// Exclusively owned by one alignment computation; read-only once
/// [`AlignmentMatrix::fill`] returns.
#[derive(Debug, Clone)]
pub struct AlignmentMatrix {
    mode: AlignmentMode,
    rows: usize,
    cols: usize,
    /// Packed pointers, row-major, one byte per cell.
    pointers: Vec<u8>,
    score: f64,
    end: Option<Cell>,
}

impl AlignmentMatrix {
    /// Run the recurrence over `query x subject`.
    ///
    /// `cancel` is polled once before every row; setting it aborts the fill.
    ///
    /// # Errors
    ///
    /// - [`AffinityError::IncompleteScoringMatrix`] at the first residue pair
    ///   `matrix` cannot score.
    /// - [`AffinityError::InvalidInput`] if the grid size overflows `usize`.
    /// - [`AffinityError::Cancelled`] if `cancel` was set.
    pub fn fill<R: Residue>(
        query: &[R],
        subject: &[R],
        matrix: &ScoringMatrix<R>,
        gaps: GapPenalties,
        mode: AlignmentMode,
        cancel: Option<&AtomicBool>,
    ) -> Result<Self> {
        let rows = query.len() + 1;
        let cols = subject.len() + 1;
        let cells = rows.checked_mul(cols).ok_or_else(|| {
            AffinityError::InvalidInput(format!(
                "alignment grid {} x {} is too large",
                rows, cols
            ))
        })?;

        let GapPenalties { open, extend } = gaps;
        let mut pointers = vec![ALL_START; cells];

        let mut prev = match mode {
            AlignmentMode::Local => Row::filled(cols, 0.0),
            AlignmentMode::Global => {
                let mut row = Row::filled(cols, f64::NEG_INFINITY);
                row.m[0] = 0.0;
                for j in 1..cols {
                    let (value, ptr) = step(
                        [
                            (row.m[j - 1], open, Layer::M),
                            (row.iy[j - 1], extend, Layer::Iy),
                        ],
                        mode,
                    );
                    row.iy[j] = value;
                    pointers[j] = pack(Pointer::Start, Pointer::Start, ptr);
                }
                row
            }
        };
        let mut cur = Row::filled(cols, f64::NEG_INFINITY);

        let mut best_score = 0.0;
        let mut best_cell: Option<Cell> = None;

        for i in 1..rows {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return Err(AffinityError::Cancelled);
            }
            let q = query[i - 1];
            let row_base = i * cols;

            // Column 0: only a gap in the subject can reach it.
            match mode {
                AlignmentMode::Local => {
                    cur.m[0] = 0.0;
                    cur.ix[0] = 0.0;
                    cur.iy[0] = 0.0;
                }
                AlignmentMode::Global => {
                    let (value, ptr) = step(
                        [
                            (prev.m[0], open, Layer::M),
                            (prev.ix[0], extend, Layer::Ix),
                        ],
                        mode,
                    );
                    cur.m[0] = f64::NEG_INFINITY;
                    cur.ix[0] = value;
                    cur.iy[0] = f64::NEG_INFINITY;
                    pointers[row_base] = pack(Pointer::Start, ptr, Pointer::Start);
                }
            }

            for j in 1..cols {
                let sub = matrix.score(q, subject[j - 1])?;

                let (m, m_ptr) = step(
                    [
                        (prev.m[j - 1], sub, Layer::M),
                        (prev.ix[j - 1], sub, Layer::Ix),
                        (prev.iy[j - 1], sub, Layer::Iy),
                    ],
                    mode,
                );
                let (ix, ix_ptr) = step(
                    [
                        (prev.m[j], open, Layer::M),
                        (prev.ix[j], extend, Layer::Ix),
                    ],
                    mode,
                );
                let (iy, iy_ptr) = step(
                    [
                        (cur.m[j - 1], open, Layer::M),
                        (cur.iy[j - 1], extend, Layer::Iy),
                    ],
                    mode,
                );

                cur.m[j] = m;
                cur.ix[j] = ix;
                cur.iy[j] = iy;
                pointers[row_base + j] = pack(m_ptr, ix_ptr, iy_ptr);

                if mode == AlignmentMode::Local && m > best_score {
                    best_score = m;
                    best_cell = Some(Cell { i, j, layer: Layer::M });
                }
            }

            std::mem::swap(&mut prev, &mut cur);
        }

        // `prev` now holds the last row.
        let (score, end) = match mode {
            AlignmentMode::Local => (best_score, best_cell),
            AlignmentMode::Global => {
                let last = cols - 1;
                let (score, layer) = best([
                    (prev.m[last], Layer::M),
                    (prev.ix[last], Layer::Ix),
                    (prev.iy[last], Layer::Iy),
                ]);
                (
                    score,
                    Some(Cell {
                        i: rows - 1,
                        j: last,
                        layer,
                    }),
                )
            }
        };

        Ok(Self {
            mode,
            rows,
            cols,
            pointers,
            score,
            end,
        })
    }

    /// Optimal score: the value at the end cell, or 0 for an empty local
    /// alignment.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Where traceback starts. `None` when no local alignment scores above 0.
    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Boundary policy the matrix was filled with.
    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// Grid height, `query.len() + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width, `subject.len() + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Predecessor recorded for `layer` at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the grid.
    pub fn pointer(&self, i: usize, j: usize, layer: Layer) -> Pointer {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) outside grid");
        Pointer::from_bits(self.pointers[i * self.cols + j] >> shift(layer))
    }
}
