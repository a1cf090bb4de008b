// SPDX-License-Identifier: Apache-2.0 OR MIT
// Per-call log record and line rendering

use super::level::LogLevel;
use std::fmt;

/// Where a contextual record was produced.
pub struct CallSite<'a> {
    /// Source file, already stripped to its base name.
    pub file: &'a str,
    /// Source line number.
    pub line: u32,
    /// Local wall-clock time, `HH:MM:SS`.
    pub timestamp: String,
}

/// One log record, built per call and serialized immediately.
///
/// A record has no lifetime beyond the call that creates it; the
/// rendered line is what reaches the sink.
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub message: &'a str,
    pub site: Option<CallSite<'a>>,
}

impl LogRecord<'_> {
    /// Render the record as a single output line (without terminator).
    ///
    /// Plain records: `[<LEVELNAME>]: <message>`.
    /// Contextual records: `[<HH:MM:SS> <LEVELNAME> <file> <line>]: <message>`.
    pub fn render(&self) -> String {
        match &self.site {
            None => format!("[{}]: {}", self.level, self.message),
            Some(site) => format!(
                "[{} {} {} {}]: {}",
                site.timestamp, self.level, site.file, site.line, self.message
            ),
        }
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("LogRecord");
        debug.field("level", &self.level).field("message", &self.message);
        if let Some(site) = &self.site {
            debug.field("file", &site.file).field("line", &site.line);
        }
        debug.finish()
    }
}
