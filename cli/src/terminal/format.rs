use colored::*;
use std::net::IpAddr;

use sonda_common::models::geo::GeoRecord;
use sonda_common::models::report::{Finding, LookupError, Reachability};
use sonda_common::utils::{ip, redact};

use crate::terminal::colors;

pub const NOT_AVAILABLE: &str = "N/A";

type Detail = (String, ColoredString);

/// Renders an address for display, applying the privacy mask when asked.
///
/// Private IPv4 addresses are never masked; they carry no information
/// outside the local network. IPv6 addresses are masked according to
/// their scope, same as public IPv4 hosts.
pub fn addr_to_string(addr: &IpAddr, redact_on: bool) -> String {
    if !redact_on {
        return addr.to_string();
    }

    match addr {
        IpAddr::V4(ipv4_addr) if ip::is_private(addr) => ipv4_addr.to_string(),
        IpAddr::V4(ipv4_addr) => redact::ipv4_addr(ipv4_addr),
        IpAddr::V6(ipv6_addr) => match ip::get_ipv6_type(ipv6_addr) {
            ip::Ipv6AddressType::GlobalUnicast => redact::global_unicast(ipv6_addr),
            ip::Ipv6AddressType::UniqueLocal => redact::unique_local(ipv6_addr),
            ip::Ipv6AddressType::LinkLocal => redact::link_local(ipv6_addr),
            _ => ipv6_addr.to_string(),
        },
    }
}

pub fn addr_to_colored(addr: &IpAddr, redact_on: bool) -> ColoredString {
    let text: String = addr_to_string(addr, redact_on);
    if addr.is_ipv4() {
        text.color(colors::IPV4_ADDR)
    } else {
        text.color(colors::IPV6_ADDR)
    }
}

pub fn reachability_to_detail(finding: &Finding<Reachability>) -> Detail {
    let value: ColoredString = match finding {
        Ok(Reachability::Reachable) => "reachable".green().bold(),
        Ok(Reachability::Unreachable) => "not reachable".red(),
        Err(e) => placeholder(e),
    };
    ("Reachability".to_string(), value)
}

pub fn hostname_text(finding: &Finding<String>, redact_on: bool) -> String {
    match finding {
        Ok(name) if redact_on => redact::hostname(name),
        Ok(name) => name.clone(),
        Err(e) => e.to_string(),
    }
}

pub fn hostname_to_detail(finding: &Finding<String>, redact_on: bool) -> Detail {
    let value: ColoredString = match finding {
        Ok(_) => hostname_text(finding, redact_on).color(colors::HOSTNAME),
        Err(e) => placeholder(e),
    };
    ("Hostname".to_string(), value)
}

/// The geo-location record as labeled rows, in presentation order.
/// Fields the service did not supply are filled with [`NOT_AVAILABLE`].
pub fn geo_rows(record: &GeoRecord, redact_on: bool) -> Vec<(&'static str, String)> {
    let text = |field: &Option<String>| -> String {
        field.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    vec![
        ("City", text(&record.city)),
        ("Region", text(&record.region)),
        ("Country", text(&record.country)),
        ("Latitude", coordinate_text(record.lat, redact_on)),
        ("Longitude", coordinate_text(record.lon, redact_on)),
        ("ISP", text(&record.isp)),
        ("Timezone", text(&record.timezone)),
    ]
}

pub fn geo_to_details(record: &GeoRecord, redact_on: bool) -> Vec<Detail> {
    geo_rows(record, redact_on)
        .into_iter()
        .map(|(key, value)| {
            let value: ColoredString = if value == NOT_AVAILABLE {
                value.dimmed()
            } else {
                value.color(colors::SECONDARY)
            };
            (key.to_string(), value)
        })
        .collect()
}

pub fn placeholder(error: &LookupError) -> ColoredString {
    error.to_string().dimmed().italic()
}

fn coordinate_text(value: Option<f64>, redact_on: bool) -> String {
    match value {
        Some(v) if redact_on => redact::coordinate(v),
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
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
    use sonda_common::models::report::LookupError;

    #[test]
    fn geo_rows_fill_missing_fields_with_na() {
        let record = GeoRecord {
            city: Some("Vienna".to_string()),
            country: Some("Austria".to_string()),
            ..Default::default()
        };

        let rows = geo_rows(&record, false);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ("City", "Vienna".to_string()));
        assert_eq!(rows[1], ("Region", NOT_AVAILABLE.to_string()));
        assert_eq!(rows[3], ("Latitude", NOT_AVAILABLE.to_string()));
    }

    #[test]
    fn geo_rows_mask_coordinates_when_redacting() {
        let record = GeoRecord {
            lat: Some(48.2085),
            lon: Some(16.3721),
            ..Default::default()
        };

        let rows = geo_rows(&record, true);
        assert_eq!(rows[3], ("Latitude", "48.XXXX".to_string()));
        assert_eq!(rows[4], ("Longitude", "16.XXXX".to_string()));
    }

    #[test]
    fn private_v4_is_never_masked() {
        let addr: IpAddr = "192.168.1.42".parse().unwrap();
        assert_eq!(addr_to_string(&addr, true), "192.168.1.42");
    }

    #[test]
    fn public_v4_is_masked_on_request() {
        let addr: IpAddr = "203.0.113.47".parse().unwrap();
        assert_eq!(addr_to_string(&addr, true), "203.0.XXX.XXX");
        assert_eq!(addr_to_string(&addr, false), "203.0.113.47");
    }

    #[test]
    fn hostname_errors_keep_their_message() {
        let finding: Finding<String> = Err(LookupError::NoRecord);
        assert_eq!(hostname_text(&finding, true), "No PTR record");
    }
}
