//! Win detection over the full line sweep
//!
//! A game ends the moment any maximal line holds five consecutive stones
//! of one color. The sweep walks every line from
//! [`lines`](crate::board::lines::lines) once, keeping a run length and a
//! run color; overlines are still caught at the step a run first reaches
//! exactly five.

use tracing::debug;

use crate::board::lines::lines;
use crate::board::{Grid, Stone};

/// Run length that ends the game.
pub const WIN_LEN: usize = 5;

/// Sweep every maximal line of the snapshot for a completed five.
///
/// Returns the winning color the instant any run reaches [`WIN_LEN`] and
/// stops scanning; `None` if no line holds a five.
pub fn check_winner(grid: &Grid) -> Option<Stone> {
    for line in lines(grid.size()) {
        let mut run_color = Stone::Empty;
        let mut run_len = 0;
        for (row, col) in line.cells() {
            match grid.get(row, col) {
                Stone::Empty => run_len = 0,
                stone if stone != run_color => {
                    run_color = stone;
                    run_len = 1;
                }
                _ => run_len += 1,
            }
            if run_len == WIN_LEN {
                debug!(
                    winner = ?run_color,
                    orientation = ?line.orientation,
                    offset = line.offset,
                    "five in a row"
                );
                return Some(run_color);
            }
        }
    }
    None
}
