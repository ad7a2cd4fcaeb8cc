//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board.
//! Rules are separated from board storage and from history so the
//! state machine and the read model can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinResult, evaluate};
