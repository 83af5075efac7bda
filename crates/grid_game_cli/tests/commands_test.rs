//! Tests for the one-shot commands.

use grid_game_cli::{CliConfig, commands};

fn output_of(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).expect("command succeeds");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn test_evaluate_win_names_line() {
    let config = CliConfig::default();
    let text = output_of(|out| commands::evaluate("XXX/OO./...", &config, out));
    assert!(text.contains("Outcome: X wins"));
    assert!(text.contains("Line: Top-left, Top-center, Top-right"));
}

#[test]
fn test_evaluate_draw_and_in_progress() {
    let config = CliConfig::default();
    let text = output_of(|out| commands::evaluate("XOXXOOOXX", &config, out));
    assert!(text.contains("Outcome: Draw"));
    assert!(!text.contains("Line:"));

    let text = output_of(|out| commands::evaluate(".........", &config, out));
    assert!(text.contains("Outcome: In progress"));
}

#[test]
fn test_evaluate_bad_board() {
    let config = CliConfig::default();
    let err = commands::evaluate("XO", &config, &mut Vec::<u8>::new()).unwrap_err();
    assert!(format!("{:#}", err).contains("expected 9 cells, got 2"));
}

#[test]
fn test_replay_text() {
    let config = CliConfig::default();
    let text = output_of(|out| commands::replay(&[0, 3, 1, 4, 2], false, &config, out));
    assert!(text.contains("Winner: X"));
}

#[test]
fn test_replay_json() {
    let config = CliConfig::default();
    let text = output_of(|out| commands::replay(&[4, 0], true, &config, out));
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["turn"], "X");
    assert_eq!(value["outcome"], "InProgress");
    assert_eq!(value["history"], serde_json::json!(["Center", "TopLeft"]));
}

#[test]
fn test_replay_rejected_move() {
    let config = CliConfig::default();
    let err = commands::replay(&[4, 4], false, &config, &mut Vec::<u8>::new()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Move 2 rejected"));
    assert!(message.contains("Center is already occupied"));
}
