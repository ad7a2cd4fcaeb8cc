//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_core::{GameError, GameEvent, GameOptions, GameState, GameView, MoveOutcome, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the move-list selection.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Owns the game; the UI reads [`App::view`], which is rebuilt from the
/// game on every call.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(options: GameOptions) -> Self {
        Self {
            game: GameState::with_options(options),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Read model for the current game state.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last rejected move, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError`] from a jump, which only happens if the
    /// list selection is out of sync with the history.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), GameError> {
        if let Some(pos) = digit_position(key) {
            return self.dispatch(GameEvent::CellClicked(pos.to_index()));
        }

        match (key, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => {
                info!("User quit");
                self.should_quit = true;
            }
            (KeyCode::Tab, _) => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            (KeyCode::Char('s'), _) => self.dispatch(GameEvent::ToggleSortClicked)?,
            (KeyCode::Char('r'), _) => self.dispatch(GameEvent::ResetClicked)?,
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => {
                self.dispatch(GameEvent::CellClicked(self.cursor.to_index()))?
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Moves) => {
                let view = self.view();
                if let Some(entry) = view.moves().get(self.selected) {
                    self.dispatch(GameEvent::HistoryEntryClicked(*entry.label()))?;
                }
            }
            (KeyCode::Up, Focus::Moves) => self.selected = self.selected.saturating_sub(1),
            (KeyCode::Down, Focus::Moves) => {
                let last = self.game.history().len() - 1;
                self.selected = (self.selected + 1).min(last);
            }
            (arrow, Focus::Board) => self.cursor = move_cursor(self.cursor, arrow),
            _ => {}
        }
        Ok(())
    }

    /// Forwards an event to the game and resyncs the list selection.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) -> Result<(), GameError> {
        self.notice = None;
        match event {
            GameEvent::CellClicked(index) => {
                if let MoveOutcome::Ignored(reason) = self.game.apply_move(index) {
                    self.notice = Some(reason.to_string());
                }
            }
            other => self.game.handle(other)?,
        }

        if let Some(row) = self.view().current_row() {
            self.selected = row;
        }
        Ok(())
    }
}
