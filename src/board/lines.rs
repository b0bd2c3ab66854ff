//! Maximal-line enumeration
//!
//! Decomposes an N×N grid into every maximal straight line: N rows, N
//! columns, 2N-1 falling diagonals and 2N-1 rising diagonals, each yielded
//! exactly once as a start cell, a direction vector and a length. The win
//! sweep and the scorer both walk this same set.

/// The four line families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Row,
    Column,
    /// Step (1, 1), top-left towards bottom-right.
    Falling,
    /// Step (1, -1), top-right towards bottom-left.
    Rising,
}

/// One maximal straight line across the grid.
///
/// `offset` identifies the line within its family: the row or column index,
/// or the signed diagonal offset where 0 is the main (anti-)diagonal,
/// positive offsets start on the top edge and negative ones on a side edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub orientation: Orientation,
    pub offset: i32,
    start: (usize, usize),
    step: (i32, i32),
    len: usize,
}

impl Line {
    /// Number of cells on the line.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Map an index along the line back to 2-D coordinates.
    #[inline]
    pub fn cell(&self, i: usize) -> (usize, usize) {
        debug_assert!(i < self.len);
        let row = self.start.0 as i32 + self.step.0 * i as i32;
        let col = self.start.1 as i32 + self.step.1 * i as i32;
        (row as usize, col as usize)
    }

    /// Walk the line cell by cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len).map(move |i| self.cell(i))
    }
}

/// Enumerate every maximal line of an N×N grid, each exactly once.
///
/// The main diagonal of each diagonal family appears only at offset 0.
pub fn lines(size: usize) -> Vec<Line> {
    let n = size;
    let mut out = Vec::with_capacity(6 * n);

    for i in 0..n {
        out.push(Line {
            orientation: Orientation::Row,
            offset: i as i32,
            start: (i, 0),
            step: (0, 1),
            len: n,
        });
    }
    for i in 0..n {
        out.push(Line {
            orientation: Orientation::Column,
            offset: i as i32,
            start: (0, i),
            step: (1, 0),
            len: n,
        });
    }
    for k in 0..n {
        out.push(Line {
            orientation: Orientation::Falling,
            offset: k as i32,
            start: (0, k),
            step: (1, 1),
            len: n - k,
        });
    }
    for k in 1..n {
        out.push(Line {
            orientation: Orientation::Falling,
            offset: -(k as i32),
            start: (k, 0),
            step: (1, 1),
            len: n - k,
        });
    }
    for k in 0..n {
        out.push(Line {
            orientation: Orientation::Rising,
            offset: k as i32,
            start: (0, n - 1 - k),
            step: (1, -1),
            len: n - k,
        });
    }
    for k in 1..n {
        out.push(Line {
            orientation: Orientation::Rising,
            offset: -(k as i32),
            start: (k, n - 1),
            step: (1, -1),
            len: n - k,
        });
    }

    out
}
