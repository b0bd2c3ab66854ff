//! Positional addressing for board writes
//!
//! The validated placement path accepts only the single-cell form; every
//! other form is reserved for the unchecked [`Setup`](super::Setup) path,
//! which uses them to seed whole layouts in one call.

use std::ops::Range;

/// A set of cells addressed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// One cell.
    Cell { row: i32, col: i32 },
    /// A horizontal span within one row.
    ColSpan { row: i32, cols: Range<i32> },
    /// A vertical span within one column.
    RowSpan { rows: Range<i32>, col: i32 },
    /// A rectangular block.
    Block {
        rows: Range<i32>,
        cols: Range<i32>,
    },
    /// Whole rows by index.
    Rows(Vec<i32>),
    /// Paired row/column lists naming individual cells. The lists are
    /// zipped; callers must keep them the same length.
    Pairs { rows: Vec<i32>, cols: Vec<i32> },
}

impl Selector {
    /// The single cell this selector addresses, if it addresses exactly
    /// one.
    pub fn single_cell(&self) -> Option<(i32, i32)> {
        match self {
            Selector::Cell { row, col } => Some((*row, *col)),
            _ => None,
        }
    }

    /// Expand to concrete cells on a `size`-sized board.
    ///
    /// Span ends are clamped to the board edge; out-of-range cells and
    /// row indices are dropped.
    pub fn cells(&self, size: usize) -> Vec<(usize, usize)> {
        let clamp = |range: &Range<i32>| -> Range<usize> {
            let lo = range.start.clamp(0, size as i32) as usize;
            let hi = range.end.clamp(0, size as i32) as usize;
            lo..hi.max(lo)
        };
        let on_board = |row: i32, col: i32| -> Option<(usize, usize)> {
            (row >= 0 && col >= 0 && row < size as i32 && col < size as i32)
                .then(|| (row as usize, col as usize))
        };

        match self {
            Selector::Cell { row, col } => on_board(*row, *col).into_iter().collect(),
            Selector::ColSpan { row, cols } => clamp(cols)
                .filter_map(|col| on_board(*row, col as i32))
                .collect(),
            Selector::RowSpan { rows, col } => clamp(rows)
                .filter_map(|row| on_board(row as i32, *col))
                .collect(),
            Selector::Block { rows, cols } => {
                let cols = clamp(cols);
                clamp(rows)
                    .flat_map(|row| cols.clone().map(move |col| (row, col)))
                    .collect()
            }
            Selector::Rows(rows) => rows
                .iter()
                .filter(|&&row| row >= 0 && row < size as i32)
                .flat_map(|&row| (0..size).map(move |col| (row as usize, col)))
                .collect(),
            Selector::Pairs { rows, cols } => {
                debug_assert_eq!(rows.len(), cols.len());
                rows.iter()
                    .zip(cols.iter())
                    .filter_map(|(&row, &col)| on_board(row, col))
                    .collect()
            }
        }
    }
}

impl From<(i32, i32)> for Selector {
    fn from((row, col): (i32, i32)) -> Self {
        Selector::Cell { row, col }
    }
}
