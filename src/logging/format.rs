// SPDX-License-Identifier: Apache-2.0 OR MIT
// Message rendering with bounded capacity growth

use std::fmt::{self, Write};

/// Starting capacity for a message buffer.
const INITIAL_CAPACITY: usize = 512;

/// Hard ceiling on message capacity. Rendering past this fails and the
/// record carries [`OVERSIZE_FALLBACK`] instead.
const MAX_CAPACITY: usize = 1 << 20;

/// Replacement text for a message that would exceed [`MAX_CAPACITY`].
pub const OVERSIZE_FALLBACK: &str = "message too long to render";

/// Materialize a format invocation into an owned string.
///
/// Capacity starts at 512 bytes and doubles whenever a write needs more,
/// so the result is never truncated. Growth stops at 1 MiB; a message
/// that will not fit under that bound is replaced wholesale by
/// [`OVERSIZE_FALLBACK`].
pub fn render(args: fmt::Arguments<'_>) -> String {
    let mut buffer = GrowBuffer::new();
    match buffer.write_fmt(args) {
        Ok(()) => buffer.into_string(),
        Err(_) => OVERSIZE_FALLBACK.to_string(),
    }
}

/// String buffer with explicit doubling growth and a capacity ceiling.
struct GrowBuffer {
    text: String,
    capacity: usize,
}

impl GrowBuffer {
    fn new() -> Self {
        Self {
            text: String::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Double capacity until `additional` more bytes fit, or fail once
    /// the ceiling is passed.
    fn ensure(&mut self, additional: usize) -> fmt::Result {
        let required = self.text.len() + additional;
        if required <= self.capacity {
            return Ok(());
        }
        let mut capacity = self.capacity;
        while capacity < required {
            capacity *= 2;
            if capacity > MAX_CAPACITY {
                return Err(fmt::Error);
            }
        }
        self.text.reserve(capacity - self.text.len());
        self.capacity = capacity;
        Ok(())
    }

    fn into_string(self) -> String {
        self.text
    }
}

impl Write for GrowBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.ensure(s.len())?;
        self.text.push_str(s);
        Ok(())
    }
}
