// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::IpAddr;

use crate::models::report::{Finding, Reachability};

/// Defines the contract for lookups answered by the host system.
///
/// This abstracts the diagnostic utilities (ping, arp, nbtstat, whois)
/// and the system resolver, so the investigator never touches process
/// spawning or resolver APIs directly. Every method is blocking and
/// returns a [`Finding`]; failures are data, not panics.
pub trait SystemTools: Send + Sync {
    /// Sends one ICMP echo request and reports the verdict from the
    /// utility's exit status.
    fn ping(&self, addr: IpAddr) -> Finding<Reachability>;

    /// Resolves the PTR record for an address through the system resolver.
    fn reverse_dns(&self, addr: IpAddr) -> Finding<String>;

    /// Queries the ARP table for the address and returns the raw,
    /// unparsed utility output.
    fn arp_entry(&self, addr: IpAddr) -> Finding<String>;

    /// Queries NetBIOS device status where the platform has a utility
    /// for it; otherwise reports `UnsupportedPlatform` without spawning.
    fn netbios_status(&self, addr: IpAddr) -> Finding<String>;

    /// Runs the WHOIS client for the address and returns the raw
    /// registry text.
    fn whois(&self, addr: IpAddr) -> Finding<String>;
}
