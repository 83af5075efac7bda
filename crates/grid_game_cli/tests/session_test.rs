//! Tests for the interactive session.

use grid_game::{Cell, GridGame, Mark, Outcome};
use grid_game_cli::{CliConfig, Session};
use std::io::Cursor;

/// Feeds a script to a session and returns its output and final game.
fn run(script: &str) -> (String, GridGame) {
    let mut session = Session::new(
        CliConfig::default(),
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    session.run().expect("session runs");
    let game = session.game().clone();
    let output = String::from_utf8(session.into_output()).expect("utf8 output");
    (output, game)
}

#[test]
fn test_win_is_announced() {
    let (output, game) = run("0\n3\n1\n4\n2\nquit\n");
    assert_eq!(game.evaluate_outcome(), Outcome::Win(Mark::X));
    assert!(output.contains("Winner: X"));
}

#[test]
fn test_labels_and_numbers_both_work() {
    let (_, game) = run("center\n0\n");
    assert_eq!(game.board().cell(4), Some(Cell::Marked(Mark::X)));
    assert_eq!(game.board().cell(0), Some(Cell::Marked(Mark::O)));
}

#[test]
fn test_rejected_moves_are_reported_and_ignored() {
    let (output, game) = run("0\n0\n9\n");
    assert!(output.contains("Top-left is already occupied"));
    assert!(output.contains("Position 9 is out of range"));
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.turn(), Mark::O);
}

#[test]
fn test_moves_after_game_over_are_refused() {
    let (output, game) = run("0\n3\n1\n4\n2\n8\n");
    assert!(output.contains("Game is already over"));
    assert_eq!(game.board().cell(8), Some(Cell::Empty));
}

#[test]
fn test_reset_starts_over() {
    let (output, game) = run("0\n3\n1\n4\n2\nreset\n4\n");
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.board().cell(4), Some(Cell::Marked(Mark::X)));
    assert!(output.contains("Next player: O"));
}

#[test]
fn test_draw_is_announced() {
    let (output, game) = run("0\n1\n2\n4\n3\n5\n7\n6\n8\n");
    assert_eq!(game.evaluate_outcome(), Outcome::Draw);
    assert!(output.contains("Draw! Reset to play again."));
}

#[test]
fn test_unknown_command_and_help() {
    let (output, game) = run("dance\nhelp\n");
    assert!(output.contains("Unknown command \"dance\""));
    assert!(output.contains("Commands:"));
    assert!(game.history().is_empty());
}

#[test]
fn test_quit_stops_reading() {
    let (_, game) = run("4\nquit\n0\n");
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_typing_a_shown_hint_marks_that_cell() {
    let (output, _) = run("quit\n");
    let top_row = output
        .lines()
        .find(|line| line.contains('|'))
        .expect("board printed");
    let hints: Vec<&str> = top_row.split('|').map(str::trim).collect();
    assert_eq!(hints, vec!["0", "1", "2"]);

    for (cell, hint) in hints.iter().enumerate() {
        let (_, game) = run(&format!("{}\n", hint));
        assert_eq!(game.board().cell(cell), Some(Cell::Marked(Mark::X)));
        assert_eq!(game.history().len(), 1);
    }

    let (_, game) = run("8\n");
    assert_eq!(game.board().cell(8), Some(Cell::Marked(Mark::X)));
}

#[test]
fn test_huge_number_is_out_of_range() {
    let (output, game) = run("99999999999999999999\n");
    assert!(output.contains("is out of range (must be 0-8)"));
    assert!(!output.contains("Unknown command"));
    assert!(game.history().is_empty());
}
