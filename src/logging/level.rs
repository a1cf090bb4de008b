// SPDX-License-Identifier: Apache-2.0 OR MIT
// Severity scale for log records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log severity level (0-8, lower is more severe, OFF suppresses everything).
///
/// The scale is open-ended upward: values past `DEBUG4` are representable
/// and render as `DEBUG>4`, but the compile-time [`MAX_LEVEL`] ceiling keeps
/// them from ever passing the filter.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(u8);

impl LogLevel {
    /// Suppress all output.
    pub const OFF: LogLevel = LogLevel(0);
    /// Unrecoverable conditions.
    pub const CRITICAL: LogLevel = LogLevel(1);
    /// Error conditions.
    pub const ERROR: LogLevel = LogLevel(2);
    /// Warning conditions.
    pub const WARNING: LogLevel = LogLevel(3);
    /// Informational messages.
    pub const INFO: LogLevel = LogLevel(4);
    /// First (least verbose) debug level.
    pub const DEBUG1: LogLevel = LogLevel(5);
    /// Second debug level.
    pub const DEBUG2: LogLevel = LogLevel(6);
    /// Third debug level.
    pub const DEBUG3: LogLevel = LogLevel(7);
    /// Fourth (most verbose) debug level.
    pub const DEBUG4: LogLevel = LogLevel(8);

    /// Get the level as u8.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Build a level from a raw ordinal. Negative values become `OFF`;
    /// values past `u8::MAX` saturate.
    pub const fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            LogLevel::OFF
        } else if raw > u8::MAX as i32 {
            LogLevel(u8::MAX)
        } else {
            LogLevel(raw as u8)
        }
    }

    /// Get the level name as a static string.
    pub const fn as_str(self) -> &'static str {
        match self.0 {
            0 => "OFF",
            1 => "CRITICAL",
            2 => "ERROR",
            3 => "WARNING",
            4 => "INFO",
            5 => "DEBUG1",
            6 => "DEBUG2",
            7 => "DEBUG3",
            8 => "DEBUG4",
            _ => "DEBUG>4",
        }
    }

    /// Clamp to the compile-time ceiling.
    pub(crate) const fn clamp_to_max(self) -> Self {
        if self.0 > MAX_LEVEL.0 {
            MAX_LEVEL
        } else {
            self
        }
    }
}

/// The most verbose level this build will ever emit.
///
/// Defaults to [`LogLevel::DEBUG4`]; the `max-level-*` cargo features
/// lower it so verbose call sites compile down to rejected records.
pub const MAX_LEVEL: LogLevel = max_level();

const fn max_level() -> LogLevel {
    if cfg!(feature = "max-level-off") {
        LogLevel::OFF
    } else if cfg!(feature = "max-level-critical") {
        LogLevel::CRITICAL
    } else if cfg!(feature = "max-level-error") {
        LogLevel::ERROR
    } else if cfg!(feature = "max-level-warning") {
        LogLevel::WARNING
    } else if cfg!(feature = "max-level-info") {
        LogLevel::INFO
    } else if cfg!(feature = "max-level-debug1") {
        LogLevel::DEBUG1
    } else if cfg!(feature = "max-level-debug2") {
        LogLevel::DEBUG2
    } else if cfg!(feature = "max-level-debug3") {
        LogLevel::DEBUG3
    } else {
        LogLevel::DEBUG4
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.as_str(), self.0)
    }
}
