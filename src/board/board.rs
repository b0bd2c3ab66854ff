//! Board state machine with validated placement
//!
//! The board owns the grid and the color of the last accepted move, and
//! enforces the rules: one stone per cell, alternating colors, Black
//! opens. A committed move is immediately followed by a full-board win
//! sweep; a completed five is reported from the same call with the stone
//! left in place.

use tracing::debug;

use crate::error::{IllegalMove, MoveError, OutOfBounds};
use crate::rules::win::{check_winner, WIN_LEN};

use super::grid::Grid;
use super::selector::Selector;
use super::{Stone, DEFAULT_BOARD_SIZE, OPENING_STONE};

/// Game board enforcing the placement rules.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    last_stone: Stone,
}

impl Board {
    /// Standard 15×15 board.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Board of a custom size, e.g. the compact 10×10 variant. A board
    /// smaller than a winning run cannot host a game.
    pub fn with_size(size: usize) -> Self {
        debug_assert!(size >= WIN_LEN);
        Self {
            grid: Grid::new(size),
            last_stone: Stone::Empty,
        }
    }

    /// Side length of the square board.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Color of the most recently accepted move, `Empty` before the first.
    #[inline]
    pub fn last_stone(&self) -> Stone {
        self.last_stone
    }

    /// Stone at (row, col).
    pub fn get(&self, row: i32, col: i32) -> Result<Stone, OutOfBounds> {
        if !self.grid.in_bounds(row, col) {
            return Err(OutOfBounds {
                row,
                col,
                size: self.size(),
            });
        }
        Ok(self.grid.get(row as usize, col as usize))
    }

    /// Validated placement.
    ///
    /// Checks run in a fixed order and the first failure wins, with no
    /// mutation before or during validation:
    ///
    /// 1. the selector must address exactly one cell,
    /// 2. neither coordinate may reach past the board,
    /// 3. the target cell must be empty,
    /// 4. the stone must be a real color,
    /// 5. neither coordinate may be negative,
    /// 6. the color must differ from the previous accepted move,
    /// 7. the first move of a game must be [`OPENING_STONE`].
    ///
    /// On success the stone is committed, `last_stone` updated, and the
    /// whole board swept for a five. A completed five is reported as
    /// [`MoveError::Win`]; the mutation is not rolled back and the board
    /// stays in the winning state.
    pub fn place(&mut self, selector: impl Into<Selector>, stone: Stone) -> Result<(), MoveError> {
        let selector = selector.into();
        let Some((row, col)) = selector.single_cell() else {
            return Err(IllegalMove::MalformedIndex.into());
        };
        let size = self.size() as i32;
        if row >= size || col >= size {
            return Err(OutOfBounds {
                row,
                col,
                size: self.size(),
            }
            .into());
        }
        // Occupancy is only observable in bounds; negative coordinates
        // fall through to the NegativeIndex check below.
        if self.grid.in_bounds(row, col) && self.grid.get(row as usize, col as usize) != Stone::Empty
        {
            return Err(IllegalMove::NotEmpty { row, col }.into());
        }
        if stone == Stone::Empty {
            return Err(IllegalMove::CannotPlaceEmpty.into());
        }
        if row < 0 || col < 0 {
            return Err(IllegalMove::NegativeIndex { row, col }.into());
        }
        if stone == self.last_stone {
            return Err(IllegalMove::RepeatedColor { stone }.into());
        }
        if self.last_stone == Stone::Empty && stone != OPENING_STONE {
            return Err(IllegalMove::WrongOpeningColor {
                expected: OPENING_STONE,
            }
            .into());
        }

        self.grid.set(row as usize, col as usize, stone);
        self.last_stone = stone;
        debug!(row, col, ?stone, "stone placed");

        match check_winner(&self.snapshot()) {
            Some(winner) => Err(MoveError::Win(winner)),
            None => Ok(()),
        }
    }

    /// Independent copy of the grid contents for external inspection.
    /// Mutating the copy never affects the board.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Independent board with the same stone layout.
    ///
    /// `last_stone` is reset to `Empty`: clones are meant for read-only
    /// analysis, and resuming play on one re-enters the opening rule.
    pub fn clone_board(&self) -> Board {
        let mut copy = Board::with_size(self.size());
        copy.setup().copy_grid(&self.grid);
        copy
    }

    /// Grant the unchecked setup capability.
    pub fn setup(&mut self) -> Setup<'_> {
        Setup { board: self }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked bulk-write capability.
///
/// Borrows the board mutably and writes stones with no validation, no win
/// check and no `last_stone` update. Meant for seeding test layouts and
/// for [`Board::clone_board`]; normal play goes through [`Board::place`].
#[derive(Debug)]
pub struct Setup<'a> {
    board: &'a mut Board,
}

impl Setup<'_> {
    /// Write `stone` into every cell the selector addresses.
    pub fn fill(&mut self, selector: impl Into<Selector>, stone: Stone) {
        let selector = selector.into();
        for (row, col) in selector.cells(self.board.size()) {
            self.board.grid.set(row, col, stone);
        }
    }

    /// Overwrite the whole grid from another of the same size.
    pub fn copy_grid(&mut self, src: &Grid) {
        debug_assert_eq!(src.size(), self.board.size());
        self.board.grid = src.clone();
    }
}
