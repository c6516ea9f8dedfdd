// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::IpAddr;

use async_trait::async_trait;

use crate::models::geo::GeoRecord;
use crate::models::report::Finding;

/// Defines the contract for lookups answered over HTTP.
///
/// Covers the two open-source intel operations: discovering the
/// network's public address and geolocating a subject address. Both
/// return [`Finding`]s — transport and decode problems are non-fatal
/// data, like every other lookup failure.
#[async_trait]
pub trait WebIntel: Send + Sync {
    /// Asks the discovery endpoint which public address this network
    /// egresses from.
    async fn discover_public_ip(&self) -> Finding<IpAddr>;

    /// Fetches geo-location metadata for the subject address.
    async fn geolocate(&self, addr: IpAddr) -> Finding<GeoRecord>;
}
