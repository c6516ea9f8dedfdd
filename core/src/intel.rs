// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Web Intel Client
//!
//! Implements [`WebIntel`] over two public HTTP endpoints: a discovery
//! service answering "which address does this network egress from", and
//! a geolocation service keyed by address. Responses are parsed by pure
//! helpers so the tolerance rules (bad JSON, fail envelopes, absent
//! fields) stay testable without a network.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use sonda_common::debug;
use sonda_common::intel::WebIntel;
use sonda_common::models::geo::GeoRecord;
use sonda_common::models::report::{Finding, LookupError};

const DISCOVERY_ENDPOINT: &str = "https://api.ipify.org?format=json";
const GEO_ENDPOINT: &str = "http://ip-api.com/json";

/// Safety net against a hanging service; well under interactive patience.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-backed implementation of [`WebIntel`].
pub struct IpApiClient {
    client: reqwest::Client,
}

impl IpApiClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebIntel for IpApiClient {
    async fn discover_public_ip(&self) -> Finding<IpAddr> {
        debug!("Requesting public address from {DISCOVERY_ENDPOINT}");
        let response = self
            .client
            .get(DISCOVERY_ENDPOINT)
            .send()
            .await
            .map_err(|e| LookupError::DiscoveryFailed(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::DiscoveryFailed(e.to_string()))?;

        parse_discovery_body(&body)
    }

    async fn geolocate(&self, addr: IpAddr) -> Finding<GeoRecord> {
        let url = format!("{GEO_ENDPOINT}/{addr}");
        debug!("Requesting geo-location from {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::NoData(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::NoData(format!(
                "service returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::NoData(e.to_string()))?;

        parse_geo_body(&body)
    }
}

#[derive(Debug, Deserialize)]
struct DiscoveredIp {
    ip: String,
}

/// The geolocation service wraps its record in a status envelope and
/// reports lookup problems as `status: "fail"` with a message.
#[derive(Debug, Deserialize)]
struct GeoEnvelope {
    status: Option<String>,
    message: Option<String>,
    #[serde(flatten)]
    record: GeoRecord,
}

fn parse_discovery_body(body: &str) -> Finding<IpAddr> {
    let discovered: DiscoveredIp = serde_json::from_str(body)
        .map_err(|e| LookupError::DiscoveryFailed(format!("invalid JSON: {e}")))?;

    discovered.ip.parse().map_err(|_| {
        LookupError::DiscoveryFailed(format!(
            "service returned '{}', which is not an address",
            discovered.ip
        ))
    })
}

fn parse_geo_body(body: &str) -> Finding<GeoRecord> {
    let envelope: GeoEnvelope = serde_json::from_str(body)
        .map_err(|e| LookupError::NoData(format!("invalid JSON: {e}")))?;

    if envelope.status.as_deref() == Some("fail") {
        let reason = envelope
            .message
            .unwrap_or_else(|| "service reported failure".to_string());
        return Err(LookupError::NoData(reason));
    }

    Ok(envelope.record)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
