//! End-to-end tests for the headless replay and key-driven play.

use crossterm::event::KeyCode;
use tictactoe_core::{GameOptions, IgnoredMove, Mark, Status};
use tictactoe_tui::{App, Focus, ReplayArgs, render_text, run_replay};

fn replay(moves: &str, jump: Option<usize>, descending: bool) -> tictactoe_tui::ReplayReport {
    let args = ReplayArgs {
        moves: moves.to_string(),
        jump,
        descending,
        allow_branching: false,
        json: false,
    };
    let options = GameOptions::new().with_start_descending(descending);
    run_replay(&args, options).expect("replay succeeds")
}

#[test]
fn test_drawn_out_game_reports_next_player() {
    let report = replay("0,4,1,3,8", None, false);
    assert_eq!(report.view.status().to_string(), "next player: O");
    assert_eq!(report.view.moves().len(), 6);
    assert_eq!(report.view.current_row(), Some(5));
}

#[test]
fn test_win_then_clicks_are_reported() {
    let report = replay("0,3,1,4,2,5,6", None, false);
    assert_eq!(*report.view.status(), Status::Won(Mark::X));
    assert!(report.ignored.iter().all(|(_, reason)| *reason == IgnoredMove::GameOver));
    assert_eq!(report.ignored.len(), 2);
}

#[test]
fn test_descending_text_lists_newest_first() {
    let report = replay("4,0", Some(1), true);
    let text = render_text(&report.view);
    let lines: Vec<&str> = text.lines().skip(7).collect();
    assert_eq!(
        lines,
        vec![
            "  Go to move # 2 (1,1)",
            "> Go to move # 1 (2,2)",
            "  Go to game start",
            "Sort Ascending",
        ]
    );
}

#[test]
fn test_json_report_shape() {
    let report = replay("4,4", None, false);
    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["view"]["sort_label"], "Sort Descending");
    assert_eq!(json["ignored"][0][0], 4);
}

#[test]
fn test_keyboard_time_travel_session() {
    let mut app = App::new(GameOptions::default());
    for key in ['1', '5', '9'] {
        app.handle_key(KeyCode::Char(key)).expect("key handled");
    }

    app.handle_key(KeyCode::Tab).expect("key handled");
    assert_eq!(app.focus(), Focus::Moves);
    for key in [KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Enter] {
        app.handle_key(key).expect("key handled");
    }
    assert_eq!(app.game().current_step(), 0);
    assert_eq!(app.view().board().occupied(), 0);

    // Playing from the start is refused without branching.
    app.handle_key(KeyCode::Char('3')).expect("key handled");
    assert_eq!(app.game().history().len(), 4);
    assert!(app.notice().is_some());
}
