// Process-wide diagnostic logging
//
// Gating is a single atomic compare; the sink and lifecycle flag live
// behind one mutex so state transitions and line writes serialize.

mod context;
mod format;
mod level;
#[macro_use]
mod macros;
mod record;
mod sink;

#[cfg(feature = "logging")]
mod logger;
#[cfg(not(feature = "logging"))]
mod disabled;

// Public exports
pub use context::{strip_path, wall_clock};
pub use format::{render, OVERSIZE_FALLBACK};
pub use level::{LogLevel, MAX_LEVEL};
pub use record::{CallSite, LogRecord};
pub use sink::{LogSink, MemorySink, StderrSink, StdoutSink, WriterSink};

#[cfg(feature = "logging")]
pub use logger::{
    init, init_with_sink, level, log, log_at, set_level, should_emit, shutdown, ShutdownGuard,
};
#[cfg(not(feature = "logging"))]
pub use disabled::{
    init, init_with_sink, level, log, log_at, set_level, should_emit, shutdown, ShutdownGuard,
};
