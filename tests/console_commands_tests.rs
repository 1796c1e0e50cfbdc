//! Command handler tests

use hwctl::console::commands::{execute, CommandContext, COMMANDS};
use hwctl::console::history::HistoryBuffer;
use hwctl::console::parser::parse_line;
use hwctl::console::ConsoleError;
use hwctl::params::{ParamStore, ParamValue};

fn run(line: &str, params: &mut ParamStore, history: &mut HistoryBuffer) -> (Result<(), ConsoleError>, String) {
    let cmd = parse_line(line);
    let mut ctx = CommandContext { params, history };
    let mut out = String::new();
    let result = execute(&cmd, &mut ctx, &mut out);
    (result, out)
}

fn run_fresh(line: &str) -> (Result<(), ConsoleError>, String) {
    let mut params = ParamStore::new();
    let mut history = HistoryBuffer::new(8);
    run(line, &mut params, &mut history)
}

#[test]
fn test_command_registry_has_all_commands() {
    let expected = ["help", "set", "show", "history", "status", "reset"];

    for name in expected {
        assert!(
            COMMANDS.iter().any(|c| c.name == name),
            "Command '{}' should be in registry",
            name
        );
    }
}

#[test]
fn test_execute_unknown_command() {
    let (result, _) = run_fresh("foobar");
    assert_eq!(result, Err(ConsoleError::UnknownCommand));
}

#[test]
fn test_execute_empty_line() {
    let (result, out) = run_fresh("");
    assert!(result.is_ok());
    assert!(out.is_empty());
}

#[test]
fn test_execute_help() {
    let (result, out) = run_fresh("help");
    assert!(result.is_ok());
    assert!(out.contains("help"));
    assert!(out.contains("history"));
}

#[test]
fn test_execute_help_unknown_topic() {
    let (result, _) = run_fresh("help bogus");
    assert_eq!(result, Err(ConsoleError::UnknownCommand));
}

#[test]
fn test_set_and_show_roundtrip() {
    let mut params = ParamStore::new();
    let mut history = HistoryBuffer::new(8);

    let (result, out) = run("set fan.speed 75", &mut params, &mut history);
    assert!(result.is_ok());
    assert!(out.contains("fan.speed=75"));
    assert_eq!(params.get("fan.speed"), Some(ParamValue::U8(75)));

    let (result, out) = run("show fan.speed", &mut params, &mut history);
    assert!(result.is_ok());
    assert!(out.contains("fan.speed=75"));
}

#[test]
fn test_set_missing_argument() {
    let (result, _) = run_fresh("set fan.speed");
    assert_eq!(result, Err(ConsoleError::MissingArg));
}

#[test]
fn test_set_unknown_parameter() {
    let (result, _) = run_fresh("set nosuch.param 1");
    assert_eq!(result, Err(ConsoleError::UnknownParam));
}

#[test]
fn test_set_out_of_range() {
    let (result, _) = run_fresh("set fan.speed 101");
    assert_eq!(result, Err(ConsoleError::OutOfRange));

    let (result, _) = run_fresh("set power.limit_w 5");
    assert_eq!(result, Err(ConsoleError::OutOfRange));

    let (result, _) = run_fresh("set led.mode 4");
    assert_eq!(result, Err(ConsoleError::OutOfRange));
}

#[test]
fn test_set_invalid_value() {
    let (result, _) = run_fresh("set fan.speed fast");
    assert_eq!(result, Err(ConsoleError::InvalidValue));

    let (result, _) = run_fresh("set fan.auto maybe");
    assert_eq!(result, Err(ConsoleError::InvalidValue));
}

#[test]
fn test_set_bool_spellings() {
    let mut params = ParamStore::new();
    let mut history = HistoryBuffer::new(8);

    for (text, expected) in [("on", true), ("off", false), ("1", true), ("false", false)] {
        let (result, _) = run(&format!("set fan.auto {}", text), &mut params, &mut history);
        assert!(result.is_ok());
        assert_eq!(params.get("fan.auto"), Some(ParamValue::Bool(expected)));
    }
}

#[test]
fn test_show_wildcard() {
    let (result, out) = run_fresh("show fan.*");
    assert!(result.is_ok());
    assert!(out.contains("fan.speed="));
    assert!(out.contains("fan.auto="));
    assert!(!out.contains("power.limit_w"));
}

#[test]
fn test_show_all() {
    let (result, out) = run_fresh("show");
    assert!(result.is_ok());
    assert!(out.contains("fan.speed="));
    assert!(out.contains("sensor.poll_ms="));
}

#[test]
fn test_show_unknown_parameter() {
    let (result, _) = run_fresh("show nosuch.param");
    assert_eq!(result, Err(ConsoleError::UnknownParam));
}

#[test]
fn test_history_command_lists_entries() {
    let mut params = ParamStore::new();
    let mut history = HistoryBuffer::new(8);
    history.append("help");
    history.append("show");

    let (result, out) = run("history", &mut params, &mut history);
    assert!(result.is_ok());
    assert!(out.contains("1  help"));
    assert!(out.contains("2  show"));
}

#[test]
fn test_history_command_clear() {
    let mut params = ParamStore::new();
    let mut history = HistoryBuffer::new(8);
    history.append("help");

    let (result, out) = run("history clear", &mut params, &mut history);
    assert!(result.is_ok());
    assert!(out.contains("history cleared"));
    assert!(history.is_empty());
}

#[test]
fn test_history_command_bad_arg() {
    let (result, _) = run_fresh("history wipe");
    assert_eq!(result, Err(ConsoleError::InvalidValue));
}

#[test]
fn test_status_reports_history_fill() {
    let mut params = ParamStore::new();
    let mut history = HistoryBuffer::new(8);
    history.append("help");

    let (result, out) = run("status", &mut params, &mut history);
    assert!(result.is_ok());
    assert!(out.contains("history: 1/8 entries"));
}

#[test]
fn test_reset_requires_confirm() {
    let (result, _) = run_fresh("reset");
    assert_eq!(result, Err(ConsoleError::RequiresConfirm));
}

#[test]
fn test_reset_restores_defaults() {
    let mut params = ParamStore::new();
    let mut history = HistoryBuffer::new(8);

    run("set fan.speed 90", &mut params, &mut history);
    let (result, _) = run("reset confirm", &mut params, &mut history);
    assert!(result.is_ok());
    assert_eq!(params.get("fan.speed"), Some(ParamValue::U8(40)));
}

#[test]
fn test_error_codes_are_stable() {
    assert_eq!(ConsoleError::UnknownCommand.code(), "E01");
    assert_eq!(ConsoleError::RequiresConfirm.code(), "E05");
    assert_eq!(ConsoleError::UnknownCommand.to_string(), "E01: unknown command");
}
