// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! This module defines the strict schema for user input.
//!
//! It serves as the single source of truth for the application's command-line interface.
//! The *execution* logic lives in [`investigate`]; the *definition* of the arguments,
//! flags, and help text is centralized here.
//!
//! ## Architectural Role
//!
//! This module performs two key architectural functions:
//!
//! 1.  **Input Normalization**: It uses `clap` to validate user inputs, making sure that
//!     flags are well-formed before the application attempts to run. The target address
//!     itself stays a free-form string here; the semantic validation (is this a usable
//!     IP address?) belongs to the core model layer.
//! 2.  **State Translation**: via the `From<&CommandLine> for Config` implementation, it
//!     decouples the external interface (CLI flags) from the internal application state
//!     (`Config`). This allows the core libraries to remain agnostic of the user
//!     interface layer.
//!
//! Sonda performs exactly one operation, so there is no subcommand tree: the only
//! positional argument is the target address, and it may be omitted in favor of an
//! interactive prompt.

pub mod investigate;

use clap::{ArgAction, Parser};
use sonda_common::config::Config;

#[derive(Parser)]
#[command(name = "sonda")]
#[command(about = "Point-and-shoot intelligence gathering for IP addresses.")]
pub struct CommandLine {
    /// IPv4 or IPv6 address to investigate (prompts when omitted)
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Keep logs and colors but hide the ASCII art
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Reduce UI visual density (-q: reduce styling, -qq: raw findings)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Redact sensitive info (public addresses, hostnames, coordinates)
    #[arg(long = "redact")]
    pub redact: bool,

    /// Increase logging detail (-v: lookup outcomes, -vv: parser internals)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            no_banner: cmd.no_banner,
            redact: cmd.redact,
            quiet: cmd.quiet,
        }
    }
}
