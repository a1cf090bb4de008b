// SPDX-License-Identifier: Apache-2.0 OR MIT
// Case-insensitive string comparison

use std::cmp::Ordering;

/// Compare two strings without case sensitivity (ASCII folding).
///
/// Returns the lexicographic ordering of the folded strings, so
/// `Equal` means the strings match up to case.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

/// Compare at most the first `n` bytes of two strings without case
/// sensitivity.
pub fn cmp_ignore_case_n(a: &str, b: &str, n: usize) -> Ordering {
    a.bytes()
        .take(n)
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().take(n).map(|byte| byte.to_ascii_lowercase()))
}
