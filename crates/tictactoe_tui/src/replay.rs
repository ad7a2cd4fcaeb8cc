//! Headless replay of an event script.

use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe_core::{GameEvent, GameOptions, GameState, GameView, IgnoredMove};
use tracing::{debug, info, instrument, warn};

use super::cli::ReplayArgs;

/// Outcome of a replay: the final view plus every move that was refused.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// View after all events (and the optional final jump).
    pub view: GameView,
    /// Refused moves as (square index, reason).
    pub ignored: Vec<(usize, IgnoredMove)>,
}

/// Parses a comma-separated event script.
///
/// Tokens: `N` clicks square N, `@N` jumps to step N, `s` toggles the
/// sort order, `r` restarts. Blank tokens are skipped.
#[instrument]
pub fn parse_moves(script: &str) -> Result<Vec<GameEvent>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token {
            "s" | "S" => Ok(GameEvent::ToggleSortClicked),
            "r" | "R" => Ok(GameEvent::ResetClicked),
            _ => match token.strip_prefix('@') {
                Some(step) => step
                    .parse()
                    .map(GameEvent::HistoryEntryClicked)
                    .with_context(|| format!("Invalid jump step: {}", token)),
                None => token
                    .parse()
                    .map(GameEvent::CellClicked)
                    .with_context(|| format!("Invalid move: {}", token)),
            },
        })
        .collect()
}

/// Plays a script against a fresh game and returns the final view.
///
/// Refused moves are recorded and logged, not fatal. A jump outside the
/// history is an error.
#[instrument(skip(args), fields(moves = %args.moves, jump = ?args.jump))]
pub fn run_replay(args: &ReplayArgs, options: GameOptions) -> Result<ReplayReport> {
    let events = parse_moves(&args.moves)?;
    info!(events = events.len(), "Replaying events");

    let mut game = GameState::with_options(options);
    let mut ignored = Vec::new();

    for event in events {
        match event {
            GameEvent::CellClicked(index) => {
                if let Some(reason) = game.apply_move(index).ignored() {
                    warn!(index, %reason, "Move ignored");
                    ignored.push((index, reason));
                }
            }
            other => game.handle(other)?,
        }
    }

    if let Some(step) = args.jump {
        game.jump_to(step)?;
    }

    debug!(step = game.current_step(), "Replay finished");
    Ok(ReplayReport {
        view: game.view(),
        ignored,
    })
}

/// Renders a view as plain text: board, status, move list.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(&view.board().display());
    out.push_str("\n\n");
    out.push_str(&view.status().to_string());
    if !view.highlighted().is_empty() {
        let line: Vec<String> = view
            .highlighted()
            .iter()
            .map(|pos| pos.to_index().to_string())
            .collect();
        out.push_str(&format!(" [{}]", line.join(",")));
    }
    out.push('\n');
    for entry in view.moves() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.description()));
    }
    out.push_str(view.sort_label());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, Position, Status};

    fn args(moves: &str, jump: Option<usize>) -> ReplayArgs {
        ReplayArgs {
            moves: moves.to_string(),
            jump,
            descending: false,
            allow_branching: false,
            json: false,
        }
    }

    #[test]
    fn test_parse_moves() {
        let events = parse_moves("0, 4,@1 ,s,r,").expect("valid script");
        assert_eq!(
            events,
            vec![
                GameEvent::CellClicked(0),
                GameEvent::CellClicked(4),
                GameEvent::HistoryEntryClicked(1),
                GameEvent::ToggleSortClicked,
                GameEvent::ResetClicked,
            ]
        );
        assert!(parse_moves("").expect("empty script").is_empty());
        assert!(parse_moves("0,x").is_err());
        assert!(parse_moves("@-1").is_err());
    }

    #[test]
    fn test_replay_records_ignored_moves() {
        let report = run_replay(&args("0,0,3,1,4,2,8", None), GameOptions::default())
            .expect("replay succeeds");
        assert_eq!(*report.view.status(), Status::Won(Mark::X));
        assert_eq!(
            report.ignored,
            vec![
                (0, IgnoredMove::SquareOccupied(Position::TopLeft)),
                (8, IgnoredMove::GameOver),
            ]
        );
    }

    #[test]
    fn test_replay_final_jump() {
        let report =
            run_replay(&args("0,4,1,3,8", Some(0)), GameOptions::default()).expect("replay succeeds");
        assert_eq!(*report.view.status(), Status::NextPlayer(Mark::X));
        assert_eq!(report.view.board().occupied(), 0);
        assert!(run_replay(&args("0", Some(2)), GameOptions::default()).is_err());
    }

    #[test]
    fn test_replay_branching_script() {
        let options = GameOptions::new().with_allow_branching(true);
        let report = run_replay(&args("0,4,8,@1,2", None), options).expect("replay succeeds");
        assert_eq!(report.view.moves().len(), 3);
        assert!(report.ignored.is_empty());
    }

    #[test]
    fn test_render_text() {
        let report = run_replay(&args("0,3,1,4,2", None), GameOptions::default())
            .expect("replay succeeds");
        let text = render_text(&report.view);
        assert!(text.starts_with("X|X|X\n-+-+-\nO|O|6"));
        assert!(text.contains("win by X [0,1,2]"));
        assert!(text.contains("> Go to move # 5 (3,1)"));
        assert!(text.ends_with("Sort Descending"));
    }
}
