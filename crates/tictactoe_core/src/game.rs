//! History-backed game state machine.
//!
//! Every move appends a [`Snapshot`]; jumping only moves the cursor. The
//! read model is rebuilt from scratch by [`GameState::view`] whenever a
//! caller asks for it, so nothing derived is ever stored here.

use super::action::{IgnoredMove, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::error::{GameError, GameErrorKind};
use super::events::GameEvent;
use super::rules::win::{WinResult, evaluate};
use super::view::GameView;
use super::{GameOptions, Mark, Position, Snapshot};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Complete game state: history, the displayed step, and list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_step: usize,
    pub(crate) next_mark: Mark,
    pub(crate) display_ascending: bool,
    pub(crate) options: GameOptions,
}

impl GameState {
    /// Creates a new game with the classic options.
    #[instrument]
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    /// Creates a new game with the given options.
    #[instrument]
    pub fn with_options(options: GameOptions) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_step: 0,
            next_mark: Mark::X,
            display_ascending: !options.start_descending(),
            options,
        }
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Mark that the next move on the displayed snapshot would place.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Whether the move list is shown oldest-first.
    pub fn display_ascending(&self) -> bool {
        self.display_ascending
    }

    /// Options this game was created with.
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Index of the newest snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Whether the displayed snapshot is the newest one.
    pub fn is_at_latest(&self) -> bool {
        self.current_step == self.latest_step()
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// Winning line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        evaluate(self.current().board())
    }

    /// Places `next_mark` at the square with the given index (0-8).
    ///
    /// A move that breaks a rule changes nothing; the returned outcome
    /// says why. With branching enabled, a move from a past snapshot first
    /// discards every snapshot after it.
    #[instrument(skip(self), fields(step = self.current_step, mark = %self.next_mark))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let Some(pos) = Position::from_index(index) else {
            return self.ignore(IgnoredMove::OutOfRange(index));
        };

        if let Err(reason) = MoveContract::pre(self, &pos) {
            return self.ignore(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        if self.current_step < self.latest_step() {
            debug!(
                keep = self.current_step + 1,
                dropped = self.latest_step() - self.current_step,
                "Branching from past snapshot"
            );
            self.history.truncate(self.current_step + 1);
        }

        let next = self.current().advance(pos, self.next_mark);
        self.history.push(next);
        self.current_step = self.latest_step();
        self.next_mark = self.next_mark.opponent();

        debug!(position = %pos, step = self.current_step, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, self) {
            debug_assert!(false, "Postcondition failed: {:?}", violations);
        }

        MoveOutcome::Applied
    }

    /// Displays the snapshot at `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::StepOutOfRange`] if `step` is not a
    /// history index. The state is left unchanged.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::new(GameErrorKind::StepOutOfRange {
                step,
                len: self.history.len(),
            }));
        }

        self.current_step = step;
        self.next_mark = Mark::for_step(step);
        debug!(next_mark = %self.next_mark, "Jumped to step");
        Ok(())
    }

    /// Flips the move list between oldest-first and newest-first.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.display_ascending = !self.display_ascending;
        debug!(ascending = self.display_ascending, "Sort order toggled");
    }

    /// Starts over with an empty board, keeping the options.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::with_options(self.options);
    }

    /// Applies an inbound UI event.
    ///
    /// # Errors
    ///
    /// Only [`GameEvent::HistoryEntryClicked`] can fail, when its label is
    /// not a history index.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: GameEvent) -> Result<(), GameError> {
        match event {
            GameEvent::CellClicked(index) => {
                self.apply_move(index);
            }
            GameEvent::HistoryEntryClicked(label) => self.jump_to(label)?,
            GameEvent::ToggleSortClicked => self.toggle_sort_order(),
            GameEvent::ResetClicked => self.reset(),
        }
        Ok(())
    }

    /// Builds the read model for the current state.
    pub fn view(&self) -> GameView {
        GameView::from_state(self)
    }

    fn ignore(&self, reason: IgnoredMove) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
