// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Lookup Outcomes & Report
//!
//! Every lookup step resolves to a [`Finding`]: either its payload or
//! the error explaining why it produced nothing. A failed finding is
//! never fatal — the investigator records it and moves on. The
//! [`Report`] carries one run's findings from the investigator to the
//! terminal and is discarded afterwards; nothing is persisted.

use std::fmt;
use std::net::IpAddr;

use thiserror::Error;

use crate::models::geo::GeoRecord;
use crate::models::target::Target;

/// Non-fatal failure modes of the individual lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The echo probe subprocess could not be spawned.
    #[error("Probe failed: {0}")]
    ProbeFailed(String),

    /// Reverse DNS found no PTR record for the address.
    #[error("No PTR record")]
    NoRecord,

    /// The geolocation service had nothing usable for the address.
    #[error("No geo-location data: {0}")]
    NoData(String),

    /// The public-address discovery endpoint could not be used.
    #[error("Discovery failed: {0}")]
    DiscoveryFailed(String),

    /// A diagnostic subprocess could not run or exited with an error.
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No supporting utility exists for this lookup on the host platform.
    #[error("Not supported on this platform")]
    UnsupportedPlatform,
}

/// Outcome of a single lookup step.
pub type Finding<T> = Result<T, LookupError>;

/// Verdict of the ICMP echo probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable,
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reachability::Reachable => write!(f, "reachable"),
            Reachability::Unreachable => write!(f, "not reachable"),
        }
    }
}

/// Findings gathered on the local network path (private targets only).
#[derive(Debug, Clone)]
pub struct LocalFindings {
    pub reachability: Finding<Reachability>,
    pub hostname: Finding<String>,
    pub arp: Finding<String>,
    pub netbios: Finding<String>,
}

/// Findings gathered against a publicly routable subject address.
#[derive(Debug, Clone)]
pub struct PublicFindings {
    /// The address the open-source lookups ran against. On the private
    /// path this is the discovered public address of the network, not
    /// the target itself.
    pub subject: IpAddr,
    pub geo: Finding<GeoRecord>,
    pub hostname: Finding<String>,
    pub whois: Finding<String>,
}

/// Everything one investigation produced, in the order it was produced.
#[derive(Debug, Clone)]
pub struct Report {
    pub target: Target,
    pub local: Option<LocalFindings>,
    pub discovery: Option<Finding<IpAddr>>,
    pub public: Option<PublicFindings>,
}

impl Report {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            local: None,
            discovery: None,
            public: None,
        }
    }

    /// Number of lookups that actually ran, successful or not.
    pub fn lookup_count(&self) -> usize {
        let mut count = 0;
        if self.local.is_some() {
            count += 4;
        }
        if self.discovery.is_some() {
            count += 1;
        }
        if self.public.is_some() {
            count += 3;
        }
        count
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
