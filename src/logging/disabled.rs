// SPDX-License-Identifier: Apache-2.0 OR MIT
// No-op entry points compiled when the `logging` feature is off.
// Signatures mirror logger.rs exactly so call sites need no cfg.

use std::fmt;

use super::level::LogLevel;
use super::sink::LogSink;

pub fn should_emit(_level: LogLevel) -> bool {
    false
}

pub fn set_level(_level: LogLevel) {}

pub fn level() -> LogLevel {
    LogLevel::OFF
}

pub fn log(_level: LogLevel, _args: fmt::Arguments<'_>) {}

pub fn log_at(_level: LogLevel, _line: u32, _file: &str, _args: fmt::Arguments<'_>) {}

pub fn init(_level: LogLevel) -> ShutdownGuard {
    ShutdownGuard {}
}

pub fn init_with_sink(_level: LogLevel, _sink: Box<dyn LogSink>) -> ShutdownGuard {
    ShutdownGuard {}
}

pub fn shutdown() {}

/// Inert stand-in for the armed guard of the real implementation.
#[must_use = "dropping the guard shuts logging down immediately"]
pub struct ShutdownGuard {}

impl ShutdownGuard {
    pub fn disarm(self) {}
}
