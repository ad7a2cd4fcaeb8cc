//! Tic-tac-toe game logic with move history and time travel.
//!
//! The crate is split the same way a front-end consumes it:
//!
//! - **Types**: [`Board`], [`Square`], [`Mark`] and the named [`Position`]s
//! - **Rules**: pure win detection over a board ([`rules::win::evaluate`])
//! - **State**: [`GameState`], an owned history of [`Snapshot`]s with a
//!   cursor into it
//! - **Events**: [`GameEvent`], the inbound actions a UI forwards
//! - **View**: [`GameView`], the read model recomputed after every transition
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Mark, Status};
//!
//! let mut game = GameState::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//!
//! let view = game.view();
//! assert_eq!(view.status(), &Status::Won(Mark::X));
//! assert_eq!(view.status().to_string(), "win by X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod events;
mod game;
pub mod invariants;
mod options;
mod position;
pub mod rules;
mod snapshot;
mod types;
mod view;

pub use action::{IgnoredMove, MoveOutcome};
pub use contracts::{Contract, MoveContract};
pub use error::{GameError, GameErrorKind};
pub use events::GameEvent;
pub use game::GameState;
pub use options::GameOptions;
pub use position::Position;
pub use rules::win::{WinResult, evaluate};
pub use snapshot::Snapshot;
pub use types::{Board, Mark, Square};
pub use view::{GameView, MoveEntry, Status};
