// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Orchestration logic for an investigation run.
//!
//! The classifier verdict selects exactly one of two paths:
//! - **Private**: echo probe → reverse DNS → ARP table → NetBIOS status,
//!   then public-address discovery; a discovered address gets the full
//!   open-source treatment (geo-location, reverse DNS, WHOIS).
//! - **Public**: geo-location → reverse DNS → WHOIS against the target.
//!
//! Every step runs to completion (or non-fatal failure) before the next
//! begins — lookups never overlap. Blocking work goes through the
//! blocking pool so the spinner stays responsive, and the module
//! publishes the active step for the spinner's status line.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use sonda_common::intel::WebIntel;
use sonda_common::models::report::{LocalFindings, PublicFindings, Report};
use sonda_common::models::target::Target;
use sonda_common::system::SystemTools;
use sonda_common::{info, success, warn};

use crate::intel::IpApiClient;
use crate::system::SystemToolkit;

static ACTIVE_STEP: AtomicU8 = AtomicU8::new(0);

/// The lookup currently in flight, for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Step {
    Idle = 0,
    Probing = 1,
    ResolvingPtr = 2,
    ReadingArp = 3,
    QueryingNetbios = 4,
    DiscoveringPublicIp = 5,
    Geolocating = 6,
    QueryingWhois = 7,
}

impl Step {
    pub fn label(&self) -> &'static str {
        match self {
            Step::Idle => "Preparing investigation",
            Step::Probing => "Probing reachability",
            Step::ResolvingPtr => "Resolving PTR record",
            Step::ReadingArp => "Reading the ARP table",
            Step::QueryingNetbios => "Querying NetBIOS status",
            Step::DiscoveringPublicIp => "Discovering the public address",
            Step::Geolocating => "Fetching geo-location intel",
            Step::QueryingWhois => "Querying the WHOIS registry",
        }
    }
}

fn set_step(step: Step) {
    ACTIVE_STEP.store(step as u8, Ordering::Relaxed);
}

pub fn active_step() -> Step {
    match ACTIVE_STEP.load(Ordering::Relaxed) {
        1 => Step::Probing,
        2 => Step::ResolvingPtr,
        3 => Step::ReadingArp,
        4 => Step::QueryingNetbios,
        5 => Step::DiscoveringPublicIp,
        6 => Step::Geolocating,
        7 => Step::QueryingWhois,
        _ => Step::Idle,
    }
}

/// The primary entry point for an investigation.
///
/// ### Capabilities
/// - **Scope Aware**: Private targets get the local treatment (probe,
///   PTR, ARP, NetBIOS) before pivoting to the network's public address;
///   public targets go straight to the open-source lookups.
/// - **Failure Tolerant**: Every lookup failure is recorded in the
///   report and execution continues; only an internal fault aborts.
///
/// ### Integration Notes
/// - **State**: Publishes the in-flight step via [`active_step`] for the
///   spinner status line.
/// - **Concurrency**: None between lookups — each one is awaited before
///   the next is dispatched.
pub struct Investigator {
    tools: Arc<dyn SystemTools>,
    intel: Arc<dyn WebIntel>,
}

impl Investigator {
    pub fn new(tools: Arc<dyn SystemTools>, intel: Arc<dyn WebIntel>) -> Self {
        Self { tools, intel }
    }

    /// Wires up the host toolkit and the live HTTP client.
    pub fn with_defaults() -> anyhow::Result<Self> {
        Ok(Self::new(
            Arc::new(SystemToolkit::new()),
            Arc::new(IpApiClient::new()?),
        ))
    }

    pub async fn investigate(&self, target: Target) -> anyhow::Result<Report> {
        let mut report = Report::new(target);

        if target.is_private() {
            info!("Private address detected, gathering as much local intel as possible");
            report.local = Some(self.local_findings(target.addr).await?);

            set_step(Step::DiscoveringPublicIp);
            let discovery = self.intel.discover_public_ip().await;
            match &discovery {
                Ok(public_ip) => {
                    success!("This network is publicly visible as {public_ip}");
                    report.public = Some(self.public_findings(*public_ip).await?);
                }
                Err(e) => warn!("{e} - skipping the public enrichment steps"),
            }
            report.discovery = Some(discovery);
        } else {
            info!("Public address detected, querying open sources");
            report.public = Some(self.public_findings(target.addr).await?);
        }

        set_step(Step::Idle);
        Ok(report)
    }

    async fn local_findings(&self, addr: IpAddr) -> anyhow::Result<LocalFindings> {
        set_step(Step::Probing);
        let reachability = self.run_blocking(move |tools| tools.ping(addr)).await?;
        match &reachability {
            Ok(verdict) => info!(verbosity = 1, "Echo probe: {addr} is {verdict}"),
            Err(e) => warn!(verbosity = 1, "Echo probe: {e}"),
        }

        set_step(Step::ResolvingPtr);
        let hostname = self
            .run_blocking(move |tools| tools.reverse_dns(addr))
            .await?;
        match &hostname {
            Ok(name) => info!(verbosity = 1, "Reverse DNS: {addr} resolves to {name}"),
            Err(e) => warn!(verbosity = 1, "Reverse DNS: {e}"),
        }

        set_step(Step::ReadingArp);
        let arp = self
            .run_blocking(move |tools| tools.arp_entry(addr))
            .await?;
        match &arp {
            Ok(text) => info!(verbosity = 1, "ARP table answered with {} bytes", text.len()),
            Err(e) => warn!(verbosity = 1, "ARP table: {e}"),
        }

        set_step(Step::QueryingNetbios);
        let netbios = self
            .run_blocking(move |tools| tools.netbios_status(addr))
            .await?;
        if let Err(e) = &netbios {
            info!(verbosity = 1, "NetBIOS status: {e}");
        }

        Ok(LocalFindings {
            reachability,
            hostname,
            arp,
            netbios,
        })
    }

    async fn public_findings(&self, subject: IpAddr) -> anyhow::Result<PublicFindings> {
        set_step(Step::Geolocating);
        let geo = self.intel.geolocate(subject).await;
        match &geo {
            Ok(record) if record.is_empty() => {
                warn!(verbosity = 1, "Geo-location: service returned an empty record")
            }
            Ok(_) => info!(verbosity = 1, "Geo-location record received for {subject}"),
            Err(e) => warn!(verbosity = 1, "Geo-location: {e}"),
        }

        set_step(Step::ResolvingPtr);
        let hostname = self
            .run_blocking(move |tools| tools.reverse_dns(subject))
            .await?;
        match &hostname {
            Ok(name) => info!(verbosity = 1, "Reverse DNS: {subject} resolves to {name}"),
            Err(e) => warn!(verbosity = 1, "Reverse DNS: {e}"),
        }

        set_step(Step::QueryingWhois);
        let whois = self.run_blocking(move |tools| tools.whois(subject)).await?;
        match &whois {
            Ok(text) => info!(verbosity = 1, "WHOIS answered with {} bytes", text.len()),
            Err(e) => warn!(verbosity = 1, "WHOIS: {e}"),
        }

        Ok(PublicFindings {
            subject,
            geo,
            hostname,
            whois,
        })
    }

    /// Hands one blocking lookup to the blocking pool and waits for it.
    /// Sequencing is preserved: the next step is not dispatched until
    /// this one resolves.
    async fn run_blocking<T, F>(&self, op: F) -> anyhow::Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn SystemTools) -> T + Send + 'static,
    {
        let tools = Arc::clone(&self.tools);
        let outcome = tokio::task::spawn_blocking(move || op(tools.as_ref())).await?;
        Ok(outcome)
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
