//! Sub-TLV spec tables, keyed by the ancestor context path they apply under (spec.md §4.2).
//!
//! Each [`super::SubtlvTable`] is registered for one context; [`super::lookup_sub`] matches the
//! longest registered suffix of the actual path. Several tables reuse the same numeric sub-type
//! for a different field on purpose, to demonstrate that sub-type meaning is context-dependent
//! rather than global (spec.md invariant, GLOSSARY "context path").

use super::{SpecEntry, SubtlvTable};
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

// Class of Service (top-level type 4).
static CLASS_OF_SERVICE: &[(u8, SpecEntry)] = &[
    (1, entry!("Class ID", "identifier of the Class of Service profile this sub-TLV set configures", ValueKind::Uint8, Version::V1_0, false)),
    (2, entry!("Maximum Downstream Rate", "peak downstream rate permitted for this class, in bits per second", ValueKind::Uint32, Version::V1_0, false)),
    (3, entry!("Maximum Upstream Rate", "peak upstream rate permitted for this class, in bits per second", ValueKind::Uint32, Version::V1_0, false)),
    (4, entry!("Upstream Channel Priority", "relative priority among classes contending for the upstream channel", ValueKind::Uint8, Version::V1_0, false)),
    (5, entry!("Guaranteed Minimum Upstream Rate", "minimum upstream rate reserved for this class", ValueKind::Uint32, Version::V1_0, false)),
    (6, entry!("Maximum Upstream Burst", "largest single upstream burst permitted for this class", ValueKind::Uint16, Version::V1_0, false)),
    (7, entry!("Class of Service Privacy Enable", "enables BPI encryption for traffic in this class", ValueKind::Boolean, Version::V1_0, false)),
];

// Modem Capabilities (top-level type 5).
static MODEM_CAPABILITIES: &[(u8, SpecEntry)] = &[
    (1, entry!("Concatenation Support", "modem supports concatenating multiple MAC frames into one transmission", ValueKind::Boolean, Version::V1_0, false)),
    (2, entry!("DOCSIS Version", "highest DOCSIS version the modem implements", ValueKind::Uint8, Version::V1_0, false)),
    (3, entry!("Fragmentation Support", "modem supports upstream fragmentation", ValueKind::Boolean, Version::V1_1, false)),
    (4, entry!("Payload Header Suppression Support", "modem supports payload header suppression", ValueKind::Boolean, Version::V1_1, false)),
    (5, entry!("IGMP Support", "modem supports IGMP snooping for multicast", ValueKind::Boolean, Version::V1_0, false)),
    (6, entry!("Privacy Support", "BPI/BPI+ privacy level the modem supports", ValueKind::Uint8, Version::V1_0, false)),
    (8, entry!("Number of Downstream Channels", "number of downstream channels the modem can bond", ValueKind::Uint8, Version::V2_0, false)),
    (9, entry!("Number of Upstream Transmit Channels", "number of upstream channels the modem can bond", ValueKind::Uint8, Version::V2_0, false)),
];

// SNMP Write-Access Control (top-level type 11).
static SNMP_WRITE_ACCESS: &[(u8, SpecEntry)] = &[
    (1, entry!("Community Name", "SNMP community string this access entry applies to", ValueKind::String, Version::V1_0, false)),
    (2, entry!("Access Level", "read-only vs read-write access granted to the community", ValueKind::Uint8, Version::V1_0, false)),
    (9, entry!("NTP Offset", "address of a secondary time source offset entry for this community", ValueKind::Ipv4, Version::V1_0, false)),
];

// Upstream Service Flow (top-level type 18).
static UPSTREAM_SERVICE_FLOW: &[(u8, SpecEntry)] = &[
    (1, entry!("Service Flow Reference", "identifier used to bind packet classifiers to this Service Flow", ValueKind::Uint16, Version::V1_1, false)),
    (2, entry!("Service Flow ID", "CMTS-assigned identifier for this Service Flow", ValueKind::Uint32, Version::V1_1, false)),
    (6, entry!("QoS Parameter Set Type", "which QoS parameter set (provisioned/admitted/active) this entry configures", ValueKind::Uint8, Version::V1_1, false)),
    (8, entry!("Minimum Reserved Traffic Rate", "floor rate always reserved for this Service Flow, in bits per second", ValueKind::Uint32, Version::V1_1, false)),
    (9, entry!("Maximum Sustained Traffic Rate", "peak sustained rate permitted on this Service Flow, in bits per second", ValueKind::Uint32, Version::V1_1, false)),
    (10, entry!("Maximum Traffic Burst", "largest single burst permitted on this Service Flow", ValueKind::Uint32, Version::V1_1, false)),
];

// Downstream Service Flow (top-level type 19).
static DOWNSTREAM_SERVICE_FLOW: &[(u8, SpecEntry)] = &[
    (1, entry!("Service Flow Reference", "identifier used to bind packet classifiers to this Service Flow", ValueKind::Uint16, Version::V1_1, false)),
    (2, entry!("Service Flow ID", "CMTS-assigned identifier for this Service Flow", ValueKind::Uint32, Version::V1_1, false)),
    (8, entry!("Minimum Reserved Traffic Rate", "floor rate always reserved for this Service Flow, in bits per second", ValueKind::Uint32, Version::V1_1, false)),
    (9, entry!("Maximum Sustained Traffic Rate", "peak sustained rate permitted on this Service Flow, in bits per second", ValueKind::Uint32, Version::V1_1, false)),
];

// Upstream Service Flow Encodings (top-level type 24) — the alternate, DOCSIS 2.0+ container.
static UPSTREAM_SERVICE_FLOW_ENCODINGS: &[(u8, SpecEntry)] = &[
    (1, entry!("Service Flow Reference", "identifier used to bind packet classifiers to this Service Flow", ValueKind::Uint16, Version::V2_0, false)),
    (43, entry!("Vendor Specific Sub-TLV", "container for vendor-defined extensions to this Service Flow encoding", ValueKind::Compound, Version::V2_0, true)),
];

// Nested under type 24's Vendor Specific Sub-TLV (context path [24, 43], GLOSSARY example).
static VENDOR_SPECIFIC_UNDER_SERVICE_FLOW: &[(u8, SpecEntry)] = &[
    (5, entry!("Vendor-Specific Extension", "opaque vendor-defined data attached to a Service Flow encoding", ValueKind::Binary, Version::V2_0, false)),
];

pub(super) static TABLES: &[SubtlvTable] = &[
    SubtlvTable { context: &[4], entries: CLASS_OF_SERVICE },
    SubtlvTable { context: &[5], entries: MODEM_CAPABILITIES },
    SubtlvTable { context: &[11], entries: SNMP_WRITE_ACCESS },
    SubtlvTable { context: &[18], entries: UPSTREAM_SERVICE_FLOW },
    SubtlvTable { context: &[19], entries: DOWNSTREAM_SERVICE_FLOW },
    SubtlvTable { context: &[24], entries: UPSTREAM_SERVICE_FLOW_ENCODINGS },
    SubtlvTable { context: &[24, 43], entries: VENDOR_SPECIFIC_UNDER_SERVICE_FLOW },
];
