// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::Deserialize;

/// Geo-location metadata for one address, as reported by the
/// geolocation service.
///
/// Every field is independently optional — the service omits what it
/// does not know, and an absent field is not an error. The rendering
/// layer decides how to present gaps (`N/A`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeoRecord {
    pub city: Option<String>,
    #[serde(rename = "regionName")]
    pub region: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub isp: Option<String>,
    pub timezone: Option<String>,
}

impl GeoRecord {
    /// True when the service answered but every field came back empty.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.region.is_none()
            && self.country.is_none()
            && self.lat.is_none()
            && self.lon.is_none()
            && self.isp.is_none()
            && self.timezone.is_none()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        assert!(GeoRecord::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_record_non_empty() {
        let record = GeoRecord {
            country: Some("United States".to_string()),
            ..Default::default()
        };
        assert!(!record.is_empty());

        let record = GeoRecord {
            lat: Some(37.751),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }
}
