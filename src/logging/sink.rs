// SPDX-License-Identifier: Apache-2.0 OR MIT
// Output sinks for rendered log lines

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Destination for rendered log lines.
///
/// Sinks never surface I/O failure to callers.
pub trait LogSink: Send {
    /// Write one rendered line, appending the terminator.
    fn write_line(&mut self, line: &str);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Standard output sink (the default).
pub struct StdoutSink {
    stdout: std::io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.stdout, "{}", line);
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

/// Standard error sink.
pub struct StderrSink {
    stderr: std::io::Stderr,
}

impl StderrSink {
    pub fn new() -> Self {
        Self {
            stderr: std::io::stderr(),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StderrSink {
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.stderr, "{}", line);
    }

    fn flush(&mut self) {
        let _ = self.stderr.flush();
    }
}

/// Sink over any writable text stream (a file, a pipe, a `Vec<u8>`).
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{}", line);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// In-memory sink that captures lines for later inspection.
///
/// `new` returns the sink together with a shared handle to the captured
/// lines, so the handle stays readable after the sink is installed.
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                lines: Arc::clone(&lines),
            },
            lines,
        )
    }
}

impl LogSink for MemorySink {
    fn write_line(&mut self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn flush(&mut self) {}
}
