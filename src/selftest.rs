// SPDX-License-Identifier: Apache-2.0 OR MIT
// Runtime self-test: named checks with a printed report

use std::cmp::Ordering;

use crate::logging::{self, strip_path, LogLevel, OVERSIZE_FALLBACK};
use crate::util::{file, string};

/// Named-assertion harness: records each check, prints a report, and
/// answers overall success.
pub struct TestSuite {
    name: String,
    checks: Vec<(String, bool)>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    /// Record one check under its label. Returns the outcome so checks
    /// can chain.
    pub fn check(&mut self, passed: bool, label: &str) -> bool {
        self.checks.push((label.to_string(), passed));
        passed
    }

    /// True iff every recorded check passed.
    pub fn success(&self) -> bool {
        self.checks.iter().all(|(_, passed)| *passed)
    }

    /// Print one line per check and a summary tally.
    pub fn report(&self) {
        println!("=== {} ===", self.name);
        let mut failed = 0usize;
        for (label, passed) in &self.checks {
            if *passed {
                println!("[PASS] {}", label);
            } else {
                failed += 1;
                println!("[FAIL] {}", label);
            }
        }
        println!(
            "{}: {} checks, {} failed",
            self.name,
            self.checks.len(),
            failed
        );
    }
}

/// Execute the library's runtime checks and print the report.
///
/// Expects to run in a process that has not initialized logging; the
/// lifecycle section installs and tears down its own capture sink.
pub fn run_core_tests() -> bool {
    let mut suite = TestSuite::new("diaglog core self test");

    check_levels(&mut suite);
    check_formatter(&mut suite);
    check_paths(&mut suite);
    check_strings(&mut suite);
    check_files(&mut suite);
    #[cfg(feature = "logging")]
    check_lifecycle(&mut suite);

    suite.report();
    suite.success()
}

fn check_levels(suite: &mut TestSuite) {
    suite.check(LogLevel::from_raw(-5) == LogLevel::OFF, "clamp negative level");
    suite.check(
        LogLevel::from_raw(999).clamp_to_max() == logging::MAX_LEVEL,
        "clamp oversized level",
    );
    suite.check(LogLevel::WARNING.as_str() == "WARNING", "level name");
    suite.check(LogLevel::from_raw(9).as_str() == "DEBUG>4", "level name past scale");
    suite.check(LogLevel::CRITICAL < LogLevel::DEBUG4, "level ordering");
}

fn check_formatter(suite: &mut TestSuite) {
    suite.check(
        logging::render(format_args!("value={}", 5)) == "value=5",
        "format simple arguments",
    );
    let long = "x".repeat(2000);
    suite.check(
        logging::render(format_args!("{}", long)) == long,
        "format past initial capacity",
    );
    let oversize = "y".repeat((1 << 20) + 1);
    suite.check(
        logging::render(format_args!("{}", oversize)) == OVERSIZE_FALLBACK,
        "format past capacity ceiling",
    );
}

fn check_paths(suite: &mut TestSuite) {
    suite.check(strip_path("/a/b/c.cpp") == "c.cpp", "strip unix path");
    suite.check(strip_path("C:\\a\\b.cpp") == "b.cpp", "strip windows path");
    suite.check(strip_path("c.cpp") == "c.cpp", "strip bare name");
    suite.check(strip_path("").is_empty(), "strip empty path");
}

fn check_strings(suite: &mut TestSuite) {
    suite.check(
        string::cmp_ignore_case("Test", "tEST") == Ordering::Equal,
        "case-insensitive compare equal",
    );
    suite.check(
        string::cmp_ignore_case("Crap", "Test") == Ordering::Less,
        "case-insensitive compare less",
    );
    suite.check(
        string::cmp_ignore_case_n("teSTint", "Test", 4) == Ordering::Equal,
        "case-insensitive bounded compare",
    );
}

fn check_files(suite: &mut TestSuite) {
    let path = std::env::temp_dir().join(format!("diaglog-selftest-{}.tmp", std::process::id()));

    suite.check(!file::file_exists(&path), "scratch file absent");
    let created = std::fs::write(&path, "This is a test file.\n").is_ok();
    suite.check(created, "scratch file created");
    suite.check(file::file_exists(&path), "scratch file present");
    suite.check(file::delete_file(&path), "scratch file deleted");
    suite.check(!file::delete_file(&path), "second delete fails");
}

#[cfg(feature = "logging")]
fn check_lifecycle(suite: &mut TestSuite) {
    use crate::logging::MemorySink;

    let (sink, lines) = MemorySink::new();
    let guard = logging::init_with_sink(LogLevel::WARNING, Box::new(sink));

    logging::log(LogLevel::INFO, format_args!("suppressed"));
    logging::log(LogLevel::ERROR, format_args!("emitted"));
    drop(guard);

    let lines = lines.lock().unwrap();
    suite.check(
        lines.iter().any(|line| line == "[ERROR]: emitted"),
        "record above threshold emitted",
    );
    suite.check(
        !lines.iter().any(|line| line.contains("suppressed")),
        "record below threshold suppressed",
    );
    suite.check(
        lines.iter().filter(|line| line.contains("Shutting down")).count() == 1,
        "single shutdown banner",
    );
}
