// SPDX-License-Identifier: Apache-2.0 OR MIT
// Runs the library self-test and fails the process if any check fails.

use anyhow::{bail, Result};

fn main() -> Result<()> {
    if !diaglog::selftest::run_core_tests() {
        bail!("self test failed");
    }
    Ok(())
}
