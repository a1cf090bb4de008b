// SPDX-License-Identifier: Apache-2.0 OR MIT
// Process-wide logger state, lifecycle, and entry points

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};

use super::context;
use super::format;
use super::level::{LogLevel, MAX_LEVEL};
use super::record::{CallSite, LogRecord};
use super::sink::{LogSink, StdoutSink};

/// Active threshold, read on every gate check.
static THRESHOLD: AtomicU8 = AtomicU8::new(MAX_LEVEL.as_u8());

static STATE: OnceLock<Mutex<SinkState>> = OnceLock::new();

/// Sink and lifecycle flag; one lock serializes state transitions and
/// line writes.
struct SinkState {
    sink: Box<dyn LogSink>,
    initialized: bool,
}

fn state() -> &'static Mutex<SinkState> {
    STATE.get_or_init(|| {
        Mutex::new(SinkState {
            sink: Box::new(StdoutSink::new()),
            initialized: false,
        })
    })
}

const INIT_BANNER: [&str; 3] = [
    " -----------------------------------",
    "| Initializing diaglog              |",
    " -----------------------------------",
];

const SHUTDOWN_BANNER: [&str; 3] = [
    " -----------------------------------",
    "| Shutting down diaglog             |",
    " -----------------------------------",
];

/// Check whether a record at `level` would currently be emitted.
#[inline]
pub fn should_emit(level: LogLevel) -> bool {
    level.as_u8() <= THRESHOLD.load(Ordering::Relaxed)
}

/// Set the active threshold, clamped to `[OFF, MAX_LEVEL]`.
pub fn set_level(level: LogLevel) {
    THRESHOLD.store(level.clamp_to_max().as_u8(), Ordering::Relaxed);
}

/// Read back the active threshold.
pub fn level() -> LogLevel {
    LogLevel::from_raw(THRESHOLD.load(Ordering::Relaxed) as i32)
}

/// Write a plain record: `[<LEVELNAME>]: <message>`.
///
/// Rejected records return before any formatting work happens.
pub fn log(level: LogLevel, args: fmt::Arguments<'_>) {
    if !should_emit(level) {
        return;
    }
    let message = format::render(args);
    let record = LogRecord {
        level,
        message: &message,
        site: None,
    };
    write_record(&record);
}

/// Write a contextual record enriched with timestamp, stripped source
/// file, and line: `[<HH:MM:SS> <LEVELNAME> <file> <line>]: <message>`.
pub fn log_at(level: LogLevel, line: u32, file: &str, args: fmt::Arguments<'_>) {
    if !should_emit(level) {
        return;
    }
    let message = format::render(args);
    let record = LogRecord {
        level,
        message: &message,
        site: Some(CallSite {
            file: context::strip_path(file),
            line,
            timestamp: context::wall_clock(),
        }),
    };
    write_record(&record);
}

fn write_record(record: &LogRecord<'_>) {
    let mut state = state().lock().unwrap();
    state.sink.write_line(&record.render());
    state.sink.flush();
}

/// Initialize logging against standard output.
pub fn init(level: LogLevel) -> ShutdownGuard {
    init_with_sink(level, Box::new(StdoutSink::new()))
}

/// Initialize logging against the supplied sink.
///
/// Only the first call takes effect: it installs the sink, sets the
/// threshold, writes the init banner, and returns an armed guard whose
/// drop tears logging down. A repeat call logs a warning through the
/// already-installed sink, changes nothing, and returns an inert guard.
pub fn init_with_sink(level: LogLevel, sink: Box<dyn LogSink>) -> ShutdownGuard {
    let mut state = state().lock().unwrap();
    if state.initialized {
        drop(state);
        log(
            LogLevel::WARNING,
            format_args!("Init has already been called. Exiting Init"),
        );
        return ShutdownGuard { armed: false };
    }

    state.sink = sink;
    set_level(level);
    for line in INIT_BANNER {
        state.sink.write_line(line);
    }
    state.sink.flush();
    state.initialized = true;

    ShutdownGuard { armed: true }
}

/// Tear logging down: write the shutdown banner and fall back to the
/// default sink. A no-op unless a productive `init` happened, so manual
/// calls and the guard's drop can overlap without a double banner.
pub fn shutdown() {
    let mut state = state().lock().unwrap();
    if !state.initialized {
        return;
    }
    for line in SHUTDOWN_BANNER {
        state.sink.write_line(line);
    }
    state.sink.flush();
    state.sink = Box::new(StdoutSink::new());
    state.initialized = false;
}

/// RAII handle returned by [`init`]; its drop runs [`shutdown`].
///
/// Hold it in `main` so teardown happens at a deterministic point on
/// the way out instead of through a process-exit hook.
#[must_use = "dropping the guard shuts logging down immediately"]
pub struct ShutdownGuard {
    armed: bool,
}

impl ShutdownGuard {
    /// Consume the guard without triggering shutdown, leaving teardown
    /// entirely to manual [`shutdown`] calls.
    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        if self.armed {
            shutdown();
        }
    }
}
