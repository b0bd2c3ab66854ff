//! Text rendering of board snapshots
//!
//! One fixed glyph per cell state: `` ` `` for empty, `○` for White,
//! `●` for Black. Deterministic and read-only; rendering never touches
//! the board.

use std::fmt;

use crate::board::{Board, Grid, Stone};

#[inline]
fn glyph(stone: Stone) -> char {
    match stone {
        Stone::Empty => '`',
        Stone::White => '○',
        Stone::Black => '●',
    }
}

/// Render a snapshot as a space-separated glyph grid, one rank per line.
pub fn render(snapshot: &Grid) -> String {
    let size = snapshot.size();
    let mut out = String::with_capacity(size * (size * 2 + 1));
    for row in 0..size {
        for col in 0..size {
            out.push(glyph(snapshot.get(row, col)));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board Shape : ({n}, {n})", n = self.size())?;
        writeln!(f, "Last Stone : {:?}", self.last_stone())?;
        writeln!(f)?;
        writeln!(f, "Board View")?;
        f.write_str(&render(&self.snapshot()))
    }
}
