// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sonda_common::intel::WebIntel;
use sonda_common::models::geo::GeoRecord;
use sonda_common::models::report::{Finding, LookupError, Reachability};
use sonda_common::models::target::Target;
use sonda_common::system::SystemTools;
use sonda_core::investigator::Investigator;

/// Shared journal recording every lookup in arrival order.
#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Host toolkit double that answers every lookup from a script.
struct ScriptedTools {
    log: CallLog,
}

impl SystemTools for ScriptedTools {
    fn ping(&self, addr: IpAddr) -> Finding<Reachability> {
        self.log.push(format!("ping {addr}"));
        Ok(Reachability::Reachable)
    }

    fn reverse_dns(&self, addr: IpAddr) -> Finding<String> {
        self.log.push(format!("rdns {addr}"));
        Ok(format!("host-{addr}.example"))
    }

    fn arp_entry(&self, addr: IpAddr) -> Finding<String> {
        self.log.push(format!("arp {addr}"));
        Ok(format!("? ({addr}) at aa:bb:cc:dd:ee:ff on en0"))
    }

    fn netbios_status(&self, addr: IpAddr) -> Finding<String> {
        self.log.push(format!("netbios {addr}"));
        Err(LookupError::UnsupportedPlatform)
    }

    fn whois(&self, addr: IpAddr) -> Finding<String> {
        self.log.push(format!("whois {addr}"));
        Ok(format!("inetnum: {addr}"))
    }
}

/// Host toolkit double where every lookup fails.
struct BrokenTools;

impl SystemTools for BrokenTools {
    fn ping(&self, _addr: IpAddr) -> Finding<Reachability> {
        Err(LookupError::ProbeFailed("ping: No such file".to_string()))
    }

    fn reverse_dns(&self, _addr: IpAddr) -> Finding<String> {
        Err(LookupError::NoRecord)
    }

    fn arp_entry(&self, _addr: IpAddr) -> Finding<String> {
        Err(LookupError::CommandFailed("arp exited with 1".to_string()))
    }

    fn netbios_status(&self, _addr: IpAddr) -> Finding<String> {
        Err(LookupError::UnsupportedPlatform)
    }

    fn whois(&self, _addr: IpAddr) -> Finding<String> {
        Err(LookupError::CommandFailed("whois: timed out".to_string()))
    }
}

struct ScriptedIntel {
    log: CallLog,
    discovery: Finding<IpAddr>,
}

#[async_trait]
impl WebIntel for ScriptedIntel {
    async fn discover_public_ip(&self) -> Finding<IpAddr> {
        self.log.push("discover");
        self.discovery.clone()
    }

    async fn geolocate(&self, addr: IpAddr) -> Finding<GeoRecord> {
        self.log.push(format!("geo {addr}"));
        Ok(GeoRecord {
            city: Some("Vienna".to_string()),
            country: Some("Austria".to_string()),
            ..Default::default()
        })
    }
}

fn scripted_investigator(discovery: Finding<IpAddr>) -> (Investigator, CallLog) {
    let log = CallLog::default();
    let tools = Arc::new(ScriptedTools { log: log.clone() });
    let intel = Arc::new(ScriptedIntel {
        log: log.clone(),
        discovery,
    });
    (Investigator::new(tools, intel), log)
}

#[tokio::test]
async fn test_private_target_walks_local_lookups_then_pivots() {
    let public_ip: IpAddr = "203.0.113.7".parse().unwrap();
    let (investigator, log) = scripted_investigator(Ok(public_ip));
    let target = Target::parse("192.168.1.42").unwrap();

    let report = investigator.investigate(target).await.unwrap();

    assert_eq!(
        log.entries(),
        vec![
            "ping 192.168.1.42",
            "rdns 192.168.1.42",
            "arp 192.168.1.42",
            "netbios 192.168.1.42",
            "discover",
            "geo 203.0.113.7",
            "rdns 203.0.113.7",
            "whois 203.0.113.7",
        ]
    );

    let local = report
        .local
        .as_ref()
        .expect("private targets gather local intel");
    assert_eq!(local.reachability, Ok(Reachability::Reachable));
    assert_eq!(report.discovery, Some(Ok(public_ip)));

    let public = report
        .public
        .as_ref()
        .expect("a discovered address gets enriched");
    assert_eq!(public.subject, public_ip);
    assert_eq!(public.geo.as_ref().unwrap().city.as_deref(), Some("Vienna"));

    assert_eq!(report.lookup_count(), 8);
}

#[tokio::test]
async fn test_failed_discovery_skips_public_enrichment() {
    let failure = LookupError::DiscoveryFailed("connection refused".to_string());
    let (investigator, log) = scripted_investigator(Err(failure.clone()));
    let target = Target::parse("10.0.0.9").unwrap();

    let report = investigator.investigate(target).await.unwrap();

    assert_eq!(log.entries().last().map(String::as_str), Some("discover"));
    assert!(
        !log.entries().iter().any(|e| e.starts_with("geo")),
        "no geo lookup may run without a discovered address"
    );

    assert!(report.local.is_some());
    assert_eq!(report.discovery, Some(Err(failure)));
    assert!(report.public.is_none());
    assert_eq!(report.lookup_count(), 5);
}

#[tokio::test]
async fn test_public_target_skips_local_lookups() {
    let (investigator, log) = scripted_investigator(Ok("198.51.100.1".parse().unwrap()));
    let target = Target::parse("9.9.9.9").unwrap();

    let report = investigator.investigate(target).await.unwrap();

    assert_eq!(
        log.entries(),
        vec!["geo 9.9.9.9", "rdns 9.9.9.9", "whois 9.9.9.9"]
    );

    assert!(report.local.is_none());
    assert!(report.discovery.is_none());
    assert_eq!(report.public.as_ref().unwrap().subject, target.addr);
    assert_eq!(report.lookup_count(), 3);
}

#[tokio::test]
async fn test_unparsable_input_fails_before_any_lookup() {
    let (_investigator, log) = scripted_investigator(Ok("203.0.113.7".parse().unwrap()));

    let verdict = Target::parse("not-an-address");

    let error = verdict.expect_err("junk input must be rejected");
    assert_eq!(
        error.to_string(),
        "'not-an-address' is not a valid IPv4 or IPv6 address"
    );
    assert!(
        log.entries().is_empty(),
        "no lookup may run without a parsed target"
    );
}

#[tokio::test]
async fn test_lookup_failures_never_abort_the_run() {
    let log = CallLog::default();
    let tools = Arc::new(BrokenTools);
    let intel = Arc::new(ScriptedIntel {
        log,
        discovery: Err(LookupError::DiscoveryFailed("no route".to_string())),
    });
    let investigator = Investigator::new(tools, intel);
    let target = Target::parse("172.16.0.5").unwrap();

    let report = investigator
        .investigate(target)
        .await
        .expect("failed lookups are findings, not faults");

    let local = report.local.unwrap();
    assert!(local.reachability.is_err());
    assert!(local.hostname.is_err());
    assert!(local.arp.is_err());
    assert!(local.netbios.is_err());
    assert!(report.public.is_none());
}

/// Exercises the real toolkit and HTTP client end to end. Needs a
/// resolving network plus the system lookup utilities on PATH.
#[tokio::test]
#[ignore = "requires network access"]
async fn test_live_loopback_investigation() -> anyhow::Result<()> {
    let investigator = Investigator::with_defaults()?;
    let target = Target::parse("127.0.0.1")?;
    assert!(target.is_private());

    let report = investigator.investigate(target).await?;

    let local = report.local.expect("loopback takes the private path");
    assert_eq!(local.reachability, Ok(Reachability::Reachable));
    assert!(
        report.discovery.is_some(),
        "the private path always attempts discovery"
    );
    Ok(())
}
