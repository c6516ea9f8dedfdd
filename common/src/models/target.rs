// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Investigation Target Model
//!
//! Parses the raw input string into a validated address and assigns its
//! scope (private or public) exactly once. Every later branch in the
//! pipeline keys off that verdict; nothing re-classifies downstream.

use std::fmt;
use std::net::IpAddr;

use thiserror::Error;

use crate::info;
use crate::utils::ip;

/// The input could not be parsed as an IPv4 or IPv6 address.
///
/// This is the only fatal error in the pipeline: it aborts the run
/// before any lookup is performed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid IPv4 or IPv6 address")]
pub struct InvalidAddress(pub String);

/// Where an address lives, from the investigator's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressScope {
    /// RFC1918, link-local, loopback and unique-local space.
    Private,
    /// Everything routable on the open internet.
    Public,
}

impl fmt::Display for AddressScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressScope::Private => write!(f, "private"),
            AddressScope::Public => write!(f, "public"),
        }
    }
}

/// A validated investigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub addr: IpAddr,
    pub scope: AddressScope,
}

impl Target {
    /// Parses and classifies a raw input string.
    ///
    /// Surrounding whitespace is ignored. Anything that does not parse
    /// as a bare address (hostnames, CIDR blocks, garbage) is rejected
    /// with [`InvalidAddress`].
    pub fn parse(input: &str) -> Result<Self, InvalidAddress> {
        let trimmed = input.trim();
        let addr: IpAddr = trimmed
            .parse()
            .map_err(|_| InvalidAddress(trimmed.to_string()))?;

        let scope = if ip::is_private(&addr) {
            AddressScope::Private
        } else {
            AddressScope::Public
        };

        info!(
            verbosity = 2,
            "Parsed '{trimmed}' as a {scope} {} address",
            family_of(&addr)
        );
        Ok(Self { addr, scope })
    }

    pub fn is_private(&self) -> bool {
        self.scope == AddressScope::Private
    }

    /// Address family label for display.
    pub fn family(&self) -> &'static str {
        family_of(&self.addr)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.addr)
    }
}

fn family_of(addr: &IpAddr) -> &'static str {
    match addr {
        IpAddr::V4(_) => "IPv4",
        IpAddr::V6(_) => "IPv6",
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
