//! Game state engine: an append-only history of board snapshots with
//! jump-to-step navigation. All derived values (winner, draw, winning line)
//! are recomputed from the board on demand rather than cached.

use anyhow::{Result, bail};
use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// The 8 win lines: 3 rows, 3 columns, 2 diagonals, scanned in this order.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Cell index `i` maps to row `i / 3`, column `i % 3`.
pub type Board = [Option<Mark>; BOARD_CELLS];

/// Returns the winning mark, scanning the fixed lines in order.
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some(mark);
            }
        }
    }
    None
}

/// Returns the completed line's index triple, if any. Same scan order as
/// [`winner`]; used only to highlight cells.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some(line);
            }
        }
    }
    None
}

/// True iff every cell is filled. Does not exclude won boards; callers
/// must check [`winner`] first.
pub fn is_draw(board: &Board) -> bool {
    board.iter().all(|cell| cell.is_some())
}

/// One snapshot in the move history. `last_move` is `None` only for the
/// initial empty board at step 0.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub board: Board,
    pub last_move: Option<usize>,
}

impl HistoryEntry {
    /// (column, row) of the move that produced this entry.
    pub fn coords(&self) -> Option<(usize, usize)> {
        self.last_move
            .map(|cell| (cell % BOARD_SIDE, cell / BOARD_SIDE))
    }
}

/// Whether a placement took effect or was absorbed as a no-op.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    Placed,
    Ignored,
}

/// The complete game state: history grows by appending, never by mutating
/// existing entries. Turn alternation is derived from step parity.
#[derive(Debug)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
    x_is_next: bool,
    descending: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: [None; BOARD_CELLS],
                last_move: None,
            }],
            current_step: 0,
            x_is_next: true,
            descending: false,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// The mark that moves next at the current step.
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    pub fn history_descending(&self) -> bool {
        self.descending
    }

    pub fn winner(&self) -> Option<Mark> {
        winner(self.current_board())
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(self.current_board())
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && is_draw(self.current_board())
    }

    /// True once the path at the current step can accept no further moves.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || is_draw(self.current_board())
    }

    /// Places the active mark at `cell`, validated against the board at the
    /// current step. A filled cell or a finished game is a silent no-op;
    /// entries beyond the current step are discarded before appending, so
    /// undo-then-move replaces the abandoned future.
    pub fn place_mark(&mut self, cell: usize) -> Result<Placement> {
        if cell >= BOARD_CELLS {
            bail!("cell index {} out of range 0..{}", cell, BOARD_CELLS);
        }

        let board = self.current_board();
        if winner(board).is_some() || board[cell].is_some() {
            return Ok(Placement::Ignored);
        }

        let mut board = *board;
        board[cell] = Some(self.next_mark());

        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(cell),
        });
        self.current_step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        Ok(Placement::Placed)
    }

    /// Rewinds (or fast-forwards) to `step`. History is untouched; the
    /// active player is recomputed from step parity.
    pub fn jump_to(&mut self, step: usize) -> Result<()> {
        if step >= self.history.len() {
            bail!(
                "step {} out of range 0..{}",
                step,
                self.history.len()
            );
        }

        self.current_step = step;
        self.x_is_next = step % 2 == 0;
        Ok(())
    }

    /// Flips the history display order. Presentation only.
    pub fn toggle_history_order(&mut self) {
        self.descending = !self.descending;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
