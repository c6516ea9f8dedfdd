// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;

use crate::sprint;
use crate::terminal::colors;

const LOGO: &str = r#"
          ███████╗ ██████╗ ███╗   ██╗██████╗  █████╗
          ██╔════╝██╔═══██╗████╗  ██║██╔══██╗██╔══██╗
          ███████╗██║   ██║██╔██╗ ██║██║  ██║███████║
          ╚════██║██║   ██║██║╚██╗██║██║  ██║██╔══██║
          ███████║╚██████╔╝██║ ╚████║██████╔╝██║  ██║
          ╚══════╝ ╚═════╝ ╚═╝  ╚═══╝╚═════╝ ╚═╝  ╚═╝"#;

pub fn print() {
    for line in LOGO.lines().skip(1) {
        sprint!("{}", line.color(colors::PRIMARY).bold());
    }
    sprint!();
}
