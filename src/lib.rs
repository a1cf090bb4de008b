// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide diagnostic logging core.
//!
//! Every component of the host project reports through this crate: a
//! level-gated, line-oriented text log with optional call-site context
//! (timestamp, source file, line), a pluggable output sink defaulting
//! to standard output, and an idempotent init/shutdown lifecycle.
//!
//! The `logging` cargo feature (default on) selects the real
//! implementation; without it every entry point compiles to a no-op
//! with the same signature. The `self-test` feature adds a runtime
//! check harness and the `selftest` binary.

pub mod logging;
pub mod util;

#[cfg(feature = "self-test")]
pub mod selftest;
