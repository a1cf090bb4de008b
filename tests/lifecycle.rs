// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Integration tests for the process-wide logging lifecycle.
//!
//! The logger state is process-global, so every test takes one gate
//! mutex and leaves the logger shut down before releasing it.

use std::sync::{Mutex, MutexGuard, OnceLock};

use diaglog::logging::{
    self, init_with_sink, set_level, shutdown, LogLevel, MemorySink, MAX_LEVEL,
};

fn serialize() -> MutexGuard<'static, ()> {
    static GATE: OnceLock<Mutex<()>> = OnceLock::new();
    GATE.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn gating_by_threshold() {
    let _gate = serialize();
    let (sink, lines) = MemorySink::new();
    let guard = init_with_sink(LogLevel::WARNING, Box::new(sink));

    logging::log(LogLevel::INFO, format_args!("invisible"));
    logging::log(LogLevel::WARNING, format_args!("at threshold"));
    logging::log(LogLevel::ERROR, format_args!("visible"));
    drop(guard);

    let lines = lines.lock().unwrap();
    // 3 init banner lines, 2 records, 3 shutdown banner lines.
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[3], "[WARNING]: at threshold");
    assert_eq!(lines[4], "[ERROR]: visible");
    assert!(!lines.iter().any(|line| line.contains("invisible")));
}

#[test]
fn gated_out_records_do_no_work() {
    let _gate = serialize();
    let (sink, lines) = MemorySink::new();
    let guard = init_with_sink(LogLevel::OFF, Box::new(sink));

    logging::log(LogLevel::ERROR, format_args!("dropped"));
    logging::log_at(LogLevel::DEBUG4, 7, "/tmp/x.rs", format_args!("dropped too"));
    drop(guard);

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 6, "banners only");
}

#[test]
fn set_level_clamps_both_ends() {
    let _gate = serialize();

    set_level(LogLevel::from_raw(-5));
    assert_eq!(logging::level(), LogLevel::OFF);
    assert!(!logging::should_emit(LogLevel::CRITICAL));

    set_level(LogLevel::from_raw(999));
    assert_eq!(logging::level(), MAX_LEVEL);
    assert!(logging::should_emit(MAX_LEVEL));

    set_level(MAX_LEVEL);
}

#[test]
fn duplicate_init_is_rejected_with_warning() {
    let _gate = serialize();
    let (sink_a, lines_a) = MemorySink::new();
    let (sink_b, lines_b) = MemorySink::new();

    let guard = init_with_sink(LogLevel::DEBUG4, Box::new(sink_a));
    let second = init_with_sink(LogLevel::ERROR, Box::new(sink_b));

    // Threshold and sink are untouched by the second call.
    assert_eq!(logging::level(), LogLevel::DEBUG4);
    logging::log(LogLevel::DEBUG4, format_args!("still verbose"));

    drop(second);
    drop(guard);

    let lines_a = lines_a.lock().unwrap();
    assert!(lines_a
        .iter()
        .any(|line| line == "[WARNING]: Init has already been called. Exiting Init"));
    assert!(lines_a.iter().any(|line| line == "[DEBUG4]: still verbose"));
    assert_eq!(
        lines_a
            .iter()
            .filter(|line| line.contains("Shutting down"))
            .count(),
        1,
        "the inert guard must not add a second banner"
    );
    assert!(lines_b.lock().unwrap().is_empty());
}

#[test]
fn shutdown_is_idempotent() {
    let _gate = serialize();

    // Without a prior init: silent no-op.
    shutdown();

    let (sink, lines) = MemorySink::new();
    let guard = init_with_sink(LogLevel::INFO, Box::new(sink));
    guard.disarm();

    shutdown();
    shutdown();

    let lines = lines.lock().unwrap();
    assert_eq!(
        lines
            .iter()
            .filter(|line| line.contains("Shutting down"))
            .count(),
        1
    );
}

#[test]
fn guard_drop_after_manual_shutdown_is_silent() {
    let _gate = serialize();
    let (sink, lines) = MemorySink::new();

    let guard = init_with_sink(LogLevel::INFO, Box::new(sink));
    shutdown();
    drop(guard);

    let lines = lines.lock().unwrap();
    assert_eq!(
        lines
            .iter()
            .filter(|line| line.contains("Shutting down"))
            .count(),
        1
    );
}

#[test]
fn end_to_end_line_shapes() {
    let _gate = serialize();
    let (sink, lines) = MemorySink::new();
    let guard = init_with_sink(LogLevel::INFO, Box::new(sink));

    logging::log(LogLevel::INFO, format_args!("value={}", 5));
    logging::log_at(
        LogLevel::WARNING,
        42,
        "/src/App.rs",
        format_args!("bad state {}", "X"),
    );
    drop(guard);

    let lines = lines.lock().unwrap();
    assert_eq!(lines[3], "[INFO]: value=5");

    let contextual = &lines[4];
    let (head, message) = contextual.split_once("]: ").unwrap();
    assert_eq!(message, "bad state X");

    let fields: Vec<&str> = head.strip_prefix('[').unwrap().split(' ').collect();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[1], "WARNING");
    assert_eq!(fields[2], "App.rs");
    assert_eq!(fields[3], "42");

    let stamp = fields[0].as_bytes();
    assert_eq!(stamp.len(), 8);
    assert_eq!(stamp[2], b':');
    assert_eq!(stamp[5], b':');
}

#[test]
fn long_message_survives_untruncated() {
    let _gate = serialize();
    let (sink, lines) = MemorySink::new();
    let guard = init_with_sink(LogLevel::INFO, Box::new(sink));

    let payload = "m".repeat(2000);
    logging::log(LogLevel::INFO, format_args!("{}", payload));
    drop(guard);

    let lines = lines.lock().unwrap();
    assert_eq!(lines[3], format!("[INFO]: {}", payload));
}

#[test]
fn macros_capture_call_site() {
    let _gate = serialize();
    let (sink, lines) = MemorySink::new();
    let guard = init_with_sink(LogLevel::DEBUG4, Box::new(sink));

    diaglog::log_error!("boom {}", 7);
    diaglog::log_plain!(LogLevel::INFO, "no context");
    drop(guard);

    let lines = lines.lock().unwrap();
    let contextual = &lines[3];
    assert!(contextual.contains(" ERROR lifecycle.rs "));
    assert!(contextual.ends_with("]: boom 7"));
    assert_eq!(lines[4], "[INFO]: no context");
}

#[test]
fn init_banner_shape() {
    let _gate = serialize();
    let (sink, lines) = MemorySink::new();
    let guard = init_with_sink(LogLevel::INFO, Box::new(sink));
    drop(guard);

    let lines = lines.lock().unwrap();
    assert!(lines[0].trim_start().chars().all(|c| c == '-'));
    assert!(lines[1].starts_with('|') && lines[1].ends_with('|'));
    assert!(lines[1].contains("Initializing"));
    assert_eq!(lines[0], lines[2]);
    assert!(lines[4].contains("Shutting down"));
}
