//! Read model handed to renderers.
//!
//! [`GameView`] is derived from a [`GameState`] on demand and owns all of
//! its data, so a renderer can hold it while the state moves on.

use super::game::GameState;
use super::rules::draw::is_full;
use super::rules::win::{WinResult, evaluate};
use super::{Board, Mark, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Label of the sort toggle while the list is oldest-first.
pub const SORT_DESCENDING_LABEL: &str = "Sort Descending";
/// Label of the sort toggle while the list is newest-first.
pub const SORT_ASCENDING_LABEL: &str = "Sort Ascending";

/// Status line for the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The displayed board has a winning line.
    #[display("win by {}", _0)]
    Won(Mark),
    /// No winner yet; this mark plays next.
    #[display("next player: {}", _0)]
    NextPlayer(Mark),
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    label: usize,
    /// Square filled by that step, `None` for the game start.
    last_moved: Option<Position>,
    /// Whether this step is the one displayed.
    is_current: bool,
}

impl MoveEntry {
    /// Button text, e.g. "Go to move # 3 (2,1)".
    ///
    /// Coordinates are `(column,row)`, both 1-based.
    pub fn description(&self) -> String {
        match self.last_moved {
            Some(pos) if self.label != 0 => {
                format!("Go to move # {} ({},{})", self.label, pos.column(), pos.row())
            }
            _ => "Go to game start".to_string(),
        }
    }
}

/// Everything a renderer needs, derived from one [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Board of the displayed snapshot.
    board: Board,
    /// Squares of the winning line, empty when there is none.
    highlighted: Vec<Position>,
    /// Status line.
    status: Status,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Text of the sort toggle (the order it would switch to).
    #[getter(skip)]
    sort_label: &'static str,
    /// Whether the displayed board is full with no winner.
    is_draw: bool,
}

impl GameView {
    /// Derives the view from a game state.
    #[instrument(skip(game), fields(step = game.current_step(), len = game.history().len()))]
    pub fn from_state(game: &GameState) -> Self {
        let board = game.current().board().clone();
        let win: Option<WinResult> = evaluate(&board);

        let status = match win {
            Some(result) => Status::Won(*result.mark()),
            None => Status::NextPlayer(game.next_mark()),
        };
        let highlighted = win.map(|result| result.line().to_vec()).unwrap_or_default();
        let is_draw = win.is_none() && is_full(&board);

        let len = game.history().len();
        let moves = (0..len)
            .map(|p| {
                let label = if game.display_ascending() { p } else { len - 1 - p };
                MoveEntry::new(
                    label,
                    *game.history()[label].last_moved(),
                    label == game.current_step(),
                )
            })
            .collect();

        let sort_label = if game.display_ascending() {
            SORT_DESCENDING_LABEL
        } else {
            SORT_ASCENDING_LABEL
        };

        Self {
            board,
            highlighted,
            status,
            moves,
            sort_label,
            is_draw,
        }
    }

    /// Text of the sort toggle (the order it would switch to).
    pub fn sort_label(&self) -> &'static str {
        self.sort_label
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.contains(&pos)
    }

    /// Position in the displayed list of the current entry.
    pub fn current_row(&self) -> Option<usize> {
        self.moves.iter().position(|entry| entry.is_current)
    }
}
