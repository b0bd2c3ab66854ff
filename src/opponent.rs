//! Computer opponent built on the priority grid
//!
//! The opponent binds one color, owns a [`ScoreGrid`], and picks its move
//! by rebuilding the grid from a fresh snapshot and taking the
//! highest-priority empty cell. Selection is the only policy here; all
//! legality stays with [`Board::place`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::{Board, Grid, Stone};
use crate::error::OpponentError;
use crate::eval::ScoreGrid;

/// Computer player for one color.
#[derive(Debug)]
pub struct Opponent {
    color: Stone,
    scores: ScoreGrid,
    rng: StdRng,
}

impl Opponent {
    /// Bind an opponent to `color` on boards shaped like `board`.
    pub fn new(board: &Board, color: Stone) -> Result<Self, OpponentError> {
        Self::with_rng(board, color, StdRng::from_os_rng())
    }

    /// Seeded variant for reproducible tie-breaking.
    pub fn with_rng(board: &Board, color: Stone, rng: StdRng) -> Result<Self, OpponentError> {
        if color.is_empty() {
            return Err(OpponentError::EmptyColorNotAllowed);
        }
        Ok(Self {
            color,
            scores: ScoreGrid::new(board.size()),
            rng,
        })
    }

    /// The color this opponent plays.
    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }

    /// The priority grid as of the last rebuild.
    pub fn scores(&self) -> &ScoreGrid {
        &self.scores
    }

    /// Rebuild the priority grid from the board's current state.
    pub fn refresh_scores(&mut self, board: &Board) {
        self.scores.rebuild(&board.snapshot(), self.color);
    }

    /// Select and commit one move.
    ///
    /// Rebuilds the priorities, then places on the highest-scoring empty
    /// cell, breaking ties uniformly at random; with no scored run on the
    /// board this degenerates to a uniform choice among all empty cells.
    /// Fails with [`OpponentError::NoBoardChange`] when the board is
    /// byte-identical before and after the call (no empty cell was left,
    /// or the placement was rejected). A completed five surfaces as the
    /// underlying [`Win`](crate::error::MoveError::Win) with the stone on
    /// the board.
    pub fn play(&mut self, board: &mut Board) -> Result<(usize, usize), OpponentError> {
        let before = board.snapshot();
        self.scores.rebuild(&before, self.color);

        let Some((row, col)) = self.pick_target(&before) else {
            return Err(OpponentError::NoBoardChange);
        };
        let placed = board.place((row as i32, col as i32), self.color);
        if board.snapshot() == before {
            return Err(OpponentError::NoBoardChange);
        }
        debug!(row, col, color = ?self.color, "opponent moved");
        match placed {
            Ok(()) => Ok((row, col)),
            Err(err) => Err(err.into()),
        }
    }

    /// Highest-scoring empty cell, ties broken uniformly at random.
    fn pick_target(&mut self, snapshot: &Grid) -> Option<(usize, usize)> {
        let mut best = 0;
        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for row in 0..snapshot.size() {
            for col in 0..snapshot.size() {
                if !snapshot.get(row, col).is_empty() {
                    continue;
                }
                let score = self.scores.get(row, col);
                if score > best {
                    best = score;
                    candidates.clear();
                }
                if score == best {
                    candidates.push((row, col));
                }
            }
        }
        if candidates.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..candidates.len());
        Some(candidates[idx])
    }
}
