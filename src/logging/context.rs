// SPDX-License-Identifier: Apache-2.0 OR MIT
// Call-site context: wall-clock timestamp and source path stripping

use chrono::Local;

/// Current local wall-clock time as fixed-width `HH:MM:SS`.
pub fn wall_clock() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Strip the directory portion of a source-file path.
///
/// Both `/` and `\` count as separators so paths captured on either
/// convention reduce to the same base name. Input without a separator
/// comes back unchanged.
pub fn strip_path(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_unix_path() {
        assert_eq!(strip_path("/a/b/c.cpp"), "c.cpp");
        assert_eq!(strip_path("/src/logging/logger.rs"), "logger.rs");
    }

    #[test]
    fn test_strip_windows_path() {
        assert_eq!(strip_path("C:\\a\\b.cpp"), "b.cpp");
    }

    #[test]
    fn test_strip_bare_name() {
        assert_eq!(strip_path("c.cpp"), "c.cpp");
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip_path(""), "");
    }

    #[test]
    fn test_strip_mixed_separators() {
        assert_eq!(strip_path("C:\\project/src\\main.rs"), "main.rs");
    }

    #[test]
    fn test_strip_trailing_separator() {
        assert_eq!(strip_path("/a/b/"), "");
    }

    #[test]
    fn test_wall_clock_shape() {
        let stamp = wall_clock();
        let bytes = stamp.as_bytes();
        assert_eq!(bytes.len(), 8);
        assert_eq!(bytes[2], b':');
        assert_eq!(bytes[5], b':');
        for &position in &[0, 1, 3, 4, 6, 7] {
            assert!(bytes[position].is_ascii_digit());
        }
    }
}
