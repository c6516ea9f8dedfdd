// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Utilities for privacy-preserving output.
//!
//! Provides functions to mask personally identifiable information (PII) from
//! investigation reports, such as resolved hostnames and public addresses,
//! while preserving enough structure for the output to stay readable.

use std::net::{Ipv4Addr, Ipv6Addr};

/// Redacts a hostname to protect privacy while maintaining some recognizability.
///
/// It preserves the first 2 and last 2 characters, replacing the middle with a fixed
/// number of 'X's. For very short hostnames (<= 4 chars), it redacts the entire string.
///
/// # Examples
/// ```
/// use sonda_common::utils::redact;
///
/// assert_eq!(redact::hostname("dns.google"), "dnXXXXXle");
/// assert_eq!(redact::hostname("workstation"), "woXXXXXon");
/// assert_eq!(redact::hostname("pc"), "XXXXX");
/// ```
pub fn hostname(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();

    // If the name is too short to leave 2 chars on each side, just redact it fully
    if chars.len() <= 4 {
        return "XXXXX".to_string();
    }

    let first_two: String = chars[..2].iter().collect();
    let last_two: String = chars[chars.len() - 2..].iter().collect();

    format!("{first_two}XXXXX{last_two}")
}

/// Masks the host portion of a public IPv4 address.
///
/// The first two octets stay visible so the provider block remains
/// recognizable; the concrete host is hidden.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use sonda_common::utils::redact;
///
/// let ip = Ipv4Addr::new(203, 0, 113, 47);
/// assert_eq!(redact::ipv4_addr(&ip), "203.0.XXX.XXX");
/// ```
pub fn ipv4_addr(ip: &Ipv4Addr) -> String {
    let octets = ip.octets();
    format!("{}.{}.XXX.XXX", octets[0], octets[1])
}

/// Masks the decimal places of a geographic coordinate.
///
/// The whole degrees stay visible, which narrows the location to a band of
/// roughly 100 km while hiding the street-level precision.
///
/// # Examples
/// ```
/// use sonda_common::utils::redact;
///
/// assert_eq!(redact::coordinate(48.2085), "48.XXXX");
/// assert_eq!(redact::coordinate(-33.8688), "-33.XXXX");
/// ```
pub fn coordinate(value: f64) -> String {
    format!("{}.XXXX", value.trunc() as i64)
}

/// Redacts an IPv6 Global Unicast Address by preserving only the first 16-bit segment.
///
/// This function keeps the first block (hextet) of the address to identify the
/// high-level network registry or provider, while masking the remaining 112 bits
/// (including the subnet ID and the Interface Identifier).
///
/// # Examples
/// ```
/// use std::net::Ipv6Addr;
/// use sonda_common::utils::redact;
///
/// let ip = "2a02:908:8c1:b880:1234:5678:9abc:def0".parse::<Ipv6Addr>().unwrap();
/// // Only the first 16-bit segment (s[0]) remains visible
/// assert_eq!(redact::global_unicast(&ip), "2a02::XXXX");
/// ```
pub fn global_unicast(ip: &Ipv6Addr) -> String {
    let s = ip.segments();
    format!("{:x}::XXXX", s[0])
}

/// Redacts the device-specific portion of an IPv6 Link-Local Address.
///
/// Preserves the prefix and the first two hextets of the IID (Vendor OUI)
/// while masking the final 32 bits to prevent hardware tracking.
///
/// # Examples
/// ```
/// use std::net::Ipv6Addr;
/// use sonda_common::utils::redact;
///
/// let ip = "fe80::ca52:61ff:fec7:594".parse::<Ipv6Addr>().unwrap();
/// assert_eq!(redact::link_local(&ip), "fe80::ca52:61ff:XXXX:XXXX");
/// ```
pub fn link_local(ip: &Ipv6Addr) -> String {
    let s = ip.segments();
    format!("{:x}::{:x}:{:x}:XXXX:XXXX", s[0], s[4], s[5])
}

/// Redacts an IPv6 Unique Local Address (ULA) to prevent network fingerprinting.
///
/// This function preserves only the first 16-bit segment (typically starting with `fd` or `fc`),
/// masking the 40-bit Global ID, the 16-bit Subnet ID, and the 64-bit Interface Identifier.
/// The Global ID is statistically unique to a specific network site, so revealing it
/// allows correlating the network across sessions or data leaks.
///
/// # Examples
/// ```
/// use sonda_common::utils::redact;
/// use std::net::Ipv6Addr;
///
/// let ip = "fd12:3456:789a:1:a8b2:c3d4:e5f6:1234".parse::<Ipv6Addr>().unwrap();
/// // Preserves "fd12", masks the unique Global ID ("3456:789a:1") and the rest
/// assert_eq!(redact::unique_local(&ip), "fd12::XXXX");
/// ```
pub fn unique_local(addr: &Ipv6Addr) -> String {
    let segments = addr.segments();
    format!("{:x}::XXXX", segments[0])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_hostname_standard() {
        assert_eq!(hostname("kabelbox.local"), "kaXXXXXal");
        assert_eq!(hostname("raspberrypi"), "raXXXXXpi");
    }

    #[test]
    fn test_redact_hostname_short() {
        // Names 4 chars or less should be fully masked
        assert_eq!(hostname("ipad"), "XXXXX");
        assert_eq!(hostname("pc"), "XXXXX");
        assert_eq!(hostname(""), "XXXXX");
    }

    #[test]
    fn test_redact_hostname_medium() {
        // Just enough to show first 2 and last 2
        assert_eq!(hostname("iphone"), "ipXXXXXne");
    }

    #[test]
    fn test_redact_hostname_multibyte() {
        // Must not panic on non-ASCII characters
        assert_eq!(hostname("köln-router"), "köXXXXXer");
    }

    #[test]
    fn ipv4_redaction_standard() {
        let ip = Ipv4Addr::new(203, 0, 113, 47);
        assert_eq!(ipv4_addr(&ip), "203.0.XXX.XXX");
    }

    #[test]
    fn ipv4_redaction_keeps_provider_block() {
        let a = Ipv4Addr::new(84, 119, 3, 7);
        let b = Ipv4Addr::new(84, 119, 200, 1);
        assert_eq!(ipv4_addr(&a), ipv4_addr(&b));
    }

    #[test]
    fn coordinate_redaction_keeps_degrees() {
        assert_eq!(coordinate(48.2085), "48.XXXX");
        assert_eq!(coordinate(0.31), "0.XXXX");
    }

    #[test]
    fn coordinate_redaction_southern_hemisphere() {
        assert_eq!(coordinate(-33.8688), "-33.XXXX");
    }

    #[test]
    fn gua_redaction_standard() {
        let ip = Ipv6Addr::new(0x2001, 0xdb8, 0x0, 0x0, 0x8a2e, 0x370, 0x7334, 0x1234);
        assert_eq!(global_unicast(&ip), "2001::XXXX");
    }

    #[test]
    fn gua_redaction_short_prefix() {
        let ip = Ipv6Addr::new(0x2001, 0, 0, 0, 0, 0, 0, 0x1);
        assert_eq!(global_unicast(&ip), "2001::XXXX");
    }

    #[test]
    fn lla_redaction_standard() {
        let ip = "fe80::ca52:61ff:fec7:594".parse::<Ipv6Addr>().unwrap();
        assert_eq!(link_local(&ip), "fe80::ca52:61ff:XXXX:XXXX");
    }

    #[test]
    fn lla_redaction_zero_segments() {
        let ip = "fe80::ff:fe00:1".parse::<Ipv6Addr>().unwrap();
        assert_eq!(link_local(&ip), "fe80::0:ff:XXXX:XXXX");
    }

    #[test]
    fn ula_redaction_standard() {
        let ip = Ipv6Addr::new(0xfd12, 0x3456, 0x789a, 0x1, 0xa8b2, 0xc3d4, 0xe5f6, 0x1234);
        assert_eq!(unique_local(&ip), "fd12::XXXX");
    }

    #[test]
    fn ula_redaction_hides_global_id() {
        let ip1 = "fd00:1111:1111::1".parse::<Ipv6Addr>().unwrap();
        let ip2 = "fd00:2222:2222::1".parse::<Ipv6Addr>().unwrap();
        assert_eq!(unique_local(&ip1), unique_local(&ip2));
        assert_eq!(unique_local(&ip1), "fd00::XXXX");
    }
}
