//! Spread scoring over the line sweep
//!
//! For each maximal line, every run of the target color "spreads" its
//! length onto the empty cells that would extend it (the two cells past
//! its end) or back it (the two cells before its start). A cell crossed
//! by runs in several directions accumulates the sum of all of them.

use tracing::trace;

use crate::board::lines::{lines, Line};
use crate::board::{Grid, Stone};

/// Per-cell move priorities for one color.
///
/// Fully rebuilt by [`rebuild`](ScoreGrid::rebuild) on every pass, never
/// updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGrid {
    size: usize,
    cells: Vec<u32>,
}

impl ScoreGrid {
    /// Create an all-zero grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Side length of the square grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Priority of (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    #[inline]
    fn add(&mut self, row: usize, col: usize, amount: u32) {
        self.cells[row * self.size + col] += amount;
    }

    /// Zero the grid and recompute every priority for `color` from the
    /// snapshot.
    pub fn rebuild(&mut self, snapshot: &Grid, color: Stone) {
        debug_assert_eq!(snapshot.size(), self.size);
        debug_assert!(!color.is_empty());
        self.cells.fill(0);
        for line in lines(self.size) {
            self.spread_line(snapshot, &line, color);
        }
        trace!(?color, "score grid rebuilt");
    }

    /// One line of the spread pass.
    ///
    /// A synthetic empty cell past the end flushes a run touching the
    /// last real cell. When a run of `stack` stones ends at index `j`,
    /// the cells at `j`, `j+1`, `j-stack-1` and `j-stack-2` each earn
    /// `stack` — indices on the line and empty in the snapshot only.
    fn spread_line(&mut self, snapshot: &Grid, line: &Line, color: Stone) {
        let len = line.len();
        let mut stack = 0u32;
        for j in 0..=len {
            let stone = if j < len {
                let (row, col) = line.cell(j);
                snapshot.get(row, col)
            } else {
                Stone::Empty
            };
            if stone == color {
                stack += 1;
                continue;
            }
            if stack > 0 {
                let j = j as i64;
                let back = j - stack as i64;
                for target in [j, j + 1, back - 1, back - 2] {
                    if target < 0 || target >= len as i64 {
                        continue;
                    }
                    let (row, col) = line.cell(target as usize);
                    if snapshot.get(row, col) == Stone::Empty {
                        self.add(row, col, stack);
                    }
                }
                stack = 0;
            }
        }
    }
}
