//! Tic-tac-toe as a search fixture.
//!
//! Tic-tac-toe is solved (perfect play draws) and full of transpositions:
//! the same board is reached by every ordering of the same moves. X is the
//! first party.

use duel_core::{Game, GameError, Outcome, Result, Side};
use rand::Rng;
use std::fmt;

/// Tic-tac-toe board state.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TicTacToeState {
    /// Board: 9 cells, indexed 0-8 (row-major).
    /// ```text
    /// 0 | 1 | 2
    /// ---------
    /// 3 | 4 | 5
    /// ---------
    /// 6 | 7 | 8
    /// ```
    board: [Option<Side>; 9],

    /// Side to move.
    current: Side,

    /// Cached winner (if any).
    winner: Option<Side>,
}

impl TicTacToeState {
    /// Create a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: Side::First,
            winner: None,
        }
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Get the mark at a cell, if any.
    pub fn get(&self, cell: usize) -> Option<Side> {
        self.board.get(cell).copied().flatten()
    }

    fn check_winner(&self) -> Option<Side> {
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

        LINES.iter().find_map(|line| {
            let side = self.board[line[0]]?;
            (self.board[line[1]] == Some(side) && self.board[line[2]] == Some(side)).then_some(side)
        })
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(|c| c.is_some())
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.board[row * 3 + col] {
                    Some(Side::First) => write!(f, " X ")?,
                    Some(Side::Second) => write!(f, " O ")?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tic-tac-toe action (cell index 0-8).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TicTacToeAction(pub u8);

impl fmt::Display for TicTacToeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0 / 3, self.0 % 3)
    }
}

/// Tic-tac-toe game implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl TicTacToe {
    pub fn initial_state(&self) -> TicTacToeState {
        TicTacToeState::new()
    }
}

impl Game for TicTacToe {
    type State = TicTacToeState;
    type Action = TicTacToeAction;

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.winner.is_some() || state.is_full()
    }

    fn outcome(&self, state: &Self::State) -> Result<Outcome> {
        match state.winner {
            Some(side) => Ok(Outcome::win_for(side)),
            None if state.is_full() => Ok(Outcome::Draw),
            None => Err(GameError::NotTerminal),
        }
    }

    fn side_to_move(&self, state: &Self::State) -> Side {
        state.current
    }

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if state.winner.is_some() {
            return Vec::new();
        }
        state
            .board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| TicTacToeAction(i as u8))
            .collect()
    }

    fn apply_action<R: Rng + ?Sized>(
        &self,
        state: &Self::State,
        action: Self::Action,
        _rng: &mut R,
    ) -> Result<Self::State> {
        let cell = action.0 as usize;
        if self.is_terminal(state) || state.get(cell).is_some() || cell >= 9 {
            return Err(GameError::IllegalAction(format!(
                "cell {} on board\n{}",
                action.0, state
            )));
        }

        let mut next = state.clone();
        next.board[cell] = Some(state.current);
        next.current = state.current.opposite();
        next.winner = next.check_winner();
        Ok(next)
    }
}
