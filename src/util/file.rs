// SPDX-License-Identifier: Apache-2.0 OR MIT
// File existence and deletion helpers

use std::fs;
use std::path::Path;

/// Check whether a file exists at the given location.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Delete a file from disk.
///
/// Failures are reported through the logging surface (an error line
/// plus a debug detail line) and surface to the caller only as `false`.
pub fn delete_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(err) => {
            crate::log_error!("Error deleting '{}'.", path.display());
            crate::log_debug1!("Error code: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_file_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scratch.txt");

        assert!(!file_exists(&path));

        let mut file = File::create(&path).unwrap();
        writeln!(file, "This is a test file.").unwrap();
        drop(file);

        assert!(file_exists(&path));
        assert!(delete_file(&path));
        assert!(!file_exists(&path));
    }

    #[test]
    fn test_delete_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-created.txt");

        assert!(!delete_file(&path));
    }
}
