//! The specification registry (spec.md §4.2): the static table that tells the enricher what a
//! TLV type means — its human name, its value kind, whether its payload may itself be a sub-TLV
//! sequence, and which DOCSIS version introduced it.
//!
//! The registry is immutable and built entirely of `'static` data; there is no runtime
//! construction cost and no interior mutability to reason about.

mod docsis;
mod mta;
mod subtlv;

use crate::types::{TlvPath, Version};
use crate::value::ValueKind;

pub use mta::MtaOidEntry;

/// A single entry in the spec registry: everything the enricher needs to know about one
/// `(context, type)` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpecEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub value_kind: ValueKind,
    pub introduced: Version,
    pub supports_subtlvs: bool,
}

/// A sub-TLV table registered for a specific ancestor context path.
struct SubtlvTable {
    context: &'static [u8],
    entries: &'static [(u8, SpecEntry)],
}

/// Look up the top-level spec entry for `tlv_type`, if the registry recognizes it.
///
/// Types `200..=255` are the DOCSIS vendor-specific extension range: every type in that range
/// resolves to a generic vendor entry even though it has no explicit table row (spec.md §4.2,
/// §4.4 edge case: "vendor-specific ranges fall back to `binary`, never to an error").
pub fn lookup_top(tlv_type: u8, version: Version) -> Option<SpecEntry> {
    if let Some(entry) = docsis::TOP_LEVEL
        .iter()
        .find(|(t, _)| *t == tlv_type)
        .map(|(_, e)| *e)
    {
        if entry.introduced <= version {
            return Some(entry);
        }
        return None;
    }
    if (200..=255).contains(&tlv_type) {
        return Some(SpecEntry {
            name: "Vendor Specific Information",
            description: "opaque vendor-defined extension data, not interpreted by the core registry",
            value_kind: ValueKind::Binary,
            introduced: Version::V1_0,
            supports_subtlvs: false,
        });
    }
    None
}

/// Look up a sub-TLV's spec entry given the full ancestor context path and its own type.
///
/// Context tables are matched by longest registered suffix of `path`: a table registered for
/// `[24, 43]` is more specific than one registered for `[24]` and wins whenever `path` ends in
/// that exact chain (spec.md §4.2 "matched longest-prefix-wins"). A context with no matching
/// table falls back to `None`, which the enricher treats as generic `binary` (spec.md §4.4).
pub fn lookup_sub(path: &TlvPath, sub_type: u8) -> Option<SpecEntry> {
    let full = path.as_slice();
    let mut best: Option<(usize, SpecEntry)> = None;
    for table in subtlv::TABLES {
        let ctx = table.context;
        if ctx.len() > full.len() {
            continue;
        }
        if &full[full.len() - ctx.len()..] != ctx {
            continue;
        }
        if let Some((_, entry)) = table.entries.iter().find(|(t, _)| *t == sub_type) {
            if best.map(|(len, _)| ctx.len() > len).unwrap_or(true) {
                best = Some((ctx.len(), *entry));
            }
        }
    }
    best.map(|(_, e)| e)
}

/// Look up a recognized PacketCable MIB object identifier, if `include_mta_specs` enrichment is
/// enabled (spec.md §9 supplemental: MTA tag space).
pub fn lookup_mta_oid(oid: &str) -> Option<&'static MtaOidEntry> {
    mta::lookup_oid(oid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_lookup_respects_version_gating() {
        // TLV 62 (OFDM Downstream Channel Configuration) is 3.1-only.
        assert!(lookup_top(62, Version::V3_0).is_none());
        assert!(lookup_top(62, Version::V3_1).is_some());
    }

    #[test]
    fn vendor_range_falls_back_to_generic_binary() {
        let entry = lookup_top(210, Version::V3_1).unwrap();
        assert_eq!(entry.value_kind, ValueKind::Binary);
        assert!(!entry.supports_subtlvs);
    }

    #[test]
    fn unknown_top_level_type_is_none() {
        assert!(lookup_top(199, Version::V3_1).is_none());
    }

    #[test]
    fn same_subtype_differs_by_context_path() {
        // Sub-type 9 under an Upstream Service Flow (context [18]) is a numeric rate...
        let under_service_flow = lookup_sub(&TlvPath::root().child(18), 9).unwrap();
        assert_eq!(under_service_flow.value_kind, ValueKind::Uint32);

        // ...while sub-type 9 under SNMP Write-Access Control (context [11]) is an address,
        // and top-level type 9 is a third, unrelated thing entirely (spec.md invariant: "the
        // same numeric type has different meanings under different parents").
        let under_snmp = lookup_sub(&TlvPath::root().child(11), 9).unwrap();
        assert_eq!(under_snmp.value_kind, ValueKind::Ipv4);

        let top_level_nine = lookup_top(9, Version::V3_1).unwrap();
        assert_eq!(top_level_nine.value_kind, ValueKind::Ipv4);
        assert_ne!(top_level_nine.name, under_snmp.name);
    }

    #[test]
    fn longest_context_suffix_wins() {
        // [24, 43, 5] is registered explicitly and must win over any shorter match on [24].
        let path = TlvPath::root().child(24).child(43);
        let entry = lookup_sub(&path, 5).unwrap();
        assert_eq!(entry.name, "Vendor-Specific Extension");
    }

    #[test]
    fn unregistered_context_is_none() {
        let path = TlvPath::root().child(250);
        assert!(lookup_sub(&path, 1).is_none());
    }
}
