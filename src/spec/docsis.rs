//! The top-level DOCSIS TLV spec table (spec.md §4.2).
//!
//! Types `200..=255` are the vendor-specific extension range and are handled generically by
//! [`super::lookup_top`] rather than listed here.

use super::SpecEntry;
use crate::types::Version;
use crate::value::ValueKind;

macro_rules! entry {
    ($name:expr, $description:expr, $kind:expr, $version:expr, $sub:expr) => {
        SpecEntry {
            name: $name,
            description: $description,
            value_kind: $kind,
            introduced: $version,
            supports_subtlvs: $sub,
        }
    };
}

pub(super) static TOP_LEVEL: &[(u8, SpecEntry)] = &[
    (1, entry!("Downstream Frequency", "center frequency of the downstream channel the modem should use", ValueKind::Frequency, Version::V1_0, false)),
    (2, entry!("Upstream Channel ID", "identifier of the upstream channel to use", ValueKind::Uint8, Version::V1_0, false)),
    (3, entry!("Web Access Control", "enables or disables the modem's embedded web management interface", ValueKind::Boolean, Version::V1_0, false)),
    (4, entry!("Class of Service", "legacy pre-DOCSIS 1.1 QoS profile, superseded by Service Flows", ValueKind::Compound, Version::V1_0, true)),
    (5, entry!("Modem Capabilities", "feature flags the modem advertises to the CMTS", ValueKind::Compound, Version::V1_0, true)),
    (6, entry!("CM MIC", "message integrity check computed over the configuration by the cable modem", ValueKind::Binary, Version::V1_0, false)),
    (7, entry!("CMTS MIC", "message integrity check computed over the configuration by the CMTS shared secret", ValueKind::Binary, Version::V1_0, false)),
    (8, entry!("Vendor ID", "IEEE OUI of the device vendor", ValueKind::Binary, Version::V1_0, false)),
    (9, entry!("NTP Server", "address of the time server the modem should synchronize against", ValueKind::Ipv4, Version::V1_0, false)),
    (10, entry!("Software Upgrade Filename", "filename of a firmware image the modem should download and flash", ValueKind::String, Version::V1_0, false)),
    (11, entry!("SNMP Write-Access Control", "per-community SNMP write permission settings", ValueKind::Compound, Version::V1_0, true)),
    (12, entry!("SNMP MIB Object", "an SNMP object identifier and value to set on boot", ValueKind::Compound, Version::V1_0, true)),
    (13, entry!("CPE Ethernet MAC Address", "MAC address of a customer-premises device permitted on the LAN", ValueKind::MacAddress, Version::V1_0, false)),
    (14, entry!("Baseline Privacy Configuration", "BPI/BPI+ key-management parameters", ValueKind::Compound, Version::V1_1, true)),
    (17, entry!("Upstream Packet Classification", "a packet classifier binding traffic to an upstream Service Flow", ValueKind::Compound, Version::V1_1, true)),
    (18, entry!("Upstream Service Flow", "a QoS Service Flow definition for upstream traffic", ValueKind::Compound, Version::V1_1, true)),
    (19, entry!("Downstream Service Flow", "a QoS Service Flow definition for downstream traffic", ValueKind::Compound, Version::V1_1, true)),
    (20, entry!("Max CPE", "maximum number of customer-premises devices permitted on the LAN", ValueKind::Uint8, Version::V1_0, false)),
    (21, entry!("TFTP Timestamp", "time the configuration file was generated, in seconds since the epoch", ValueKind::Uint32, Version::V1_0, false)),
    (22, entry!("TFTP Server Address", "address of the TFTP server the modem fetched this file from", ValueKind::Ipv4, Version::V1_0, false)),
    (24, entry!("Upstream Service Flow Encodings", "DOCSIS 2.0+ replacement encoding for upstream Service Flow parameters", ValueKind::Compound, Version::V2_0, true)),
    (25, entry!("Downstream Service Flow Encodings", "DOCSIS 2.0+ replacement encoding for downstream Service Flow parameters", ValueKind::Compound, Version::V2_0, true)),
    (28, entry!("Security Association", "BPI+ security association mapping", ValueKind::Compound, Version::V1_1, true)),
    (29, entry!("Subscriber Management Control", "enables CPE filtering enforcement by the modem", ValueKind::Binary, Version::V1_1, false)),
    (30, entry!("Subscriber Management CPE IP Table", "static IP addresses permitted for subscriber CPEs", ValueKind::Compound, Version::V1_1, true)),
    (31, entry!("Subscriber Management Filter Groups", "filter group assignment for subscriber traffic", ValueKind::Binary, Version::V1_1, false)),
    (32, entry!("SNMPv3 Kickstart", "initial SNMPv3 user security parameters", ValueKind::Compound, Version::V2_0, true)),
    (33, entry!("Manufacturer CVC", "manufacturer code verification certificate for secure software download", ValueKind::Binary, Version::V2_0, false)),
    (34, entry!("Co-signer CVC", "co-signer code verification certificate for secure software download", ValueKind::Binary, Version::V2_0, false)),
    (35, entry!("SNMPv3 Notification Receiver", "target for SNMPv3 trap notifications", ValueKind::Compound, Version::V2_0, true)),
    (36, entry!("Downstream Channel List", "list of alternate downstream channels the modem may use", ValueKind::Compound, Version::V2_0, true)),
    (37, entry!("CM Transmit Power", "upstream transmit power the modem should target", ValueKind::PowerQuarterDb, Version::V1_1, false)),
    (62, entry!("OFDM Downstream Channel Configuration", "DOCSIS 3.1 OFDM downstream channel parameters", ValueKind::Compound, Version::V3_1, true)),
    (63, entry!("OFDMA Upstream Channel Configuration", "DOCSIS 3.1 OFDMA upstream channel parameters", ValueKind::Compound, Version::V3_1, true)),
];
