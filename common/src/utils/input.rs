// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::io::{self, Write};

use anyhow::{Context, ensure};

/// Prompts on stdout and reads one target address line from stdin.
///
/// Used when the binary starts without a target argument. The returned
/// string is untrimmed; the target parser handles surrounding whitespace.
pub fn prompt_target() -> anyhow::Result<String> {
    print!("Enter the IP address you want to investigate: ");
    io::stdout().flush().context("Could not flush stdout")?;

    let mut line = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut line)
        .context("Could not read from stdin")?;
    ensure!(bytes_read > 0, "No input received (stdin closed)");

    Ok(line)
}
