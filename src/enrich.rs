//! The enricher (spec.md §4.4): turns a flat, uninterpreted [RawTlv](crate::types::RawTlv) list
//! into a tree of [EnrichedTlv] nodes, deciding for each payload whether it is itself a sequence
//! of sub-TLVs (compound) or a scalar value, and if scalar, formatting it via [crate::value].
//!
//! The codec never makes this decision (spec.md §4.1) — it is entirely the enricher's call, made
//! in this order for every TLV:
//!
//! 1. If the spec registry has an entry for `(context, type)` and it says `supports_subtlvs`,
//!    try to parse the payload as a nested TLV sequence.
//! 2. If the registry has an entry and it does *not* support sub-TLVs, the payload is scalar;
//!    format it using the entry's declared [ValueKind].
//! 3. If the registry has no entry at all, probe: attempt to parse the payload as a nested TLV
//!    sequence anyway. A probe only counts as a match if it consumes the payload exactly and
//!    yields at least one TLV — a short run of plausible-looking bytes is not enough.
//! 4. Whenever a compound attempt (declared or probed) fails to fully consume the payload, the
//!    TLV is demoted to a scalar rendered as raw `binary` — by default (spec.md §9 Open
//!    Questions: malformed-inner cleanup is the default; `Options::strict` turns this into a hard
//!    error instead).
//! 5. An empty payload is always a `marker` (spec.md §4.3 edge case), regardless of what the
//!    registry says about it.

use crate::codec;
use crate::error::{Error, ErrorKind, ErrorLocation};
use crate::options::Options;
use crate::spec;
use crate::types::{LengthForm, RawTlv, TlvPath};
use crate::value::{self, FormattedValue, ValueKind};

/// One node of the enriched TLV tree.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedTlv {
    pub tlv_type: u8,
    /// The spec registry's name for this TLV, or `None` if the type is unrecognized under this
    /// context path.
    pub name: Option<String>,
    /// Free-form spec prose describing this TLV, or `None` if the type is unrecognized.
    pub description: Option<String>,
    pub length_form: LengthForm,
    pub path: TlvPath,
    pub node: EnrichedNode,
}

/// Whether a TLV's payload was resolved as a nested sequence of sub-TLVs or a scalar value.
#[derive(Clone, Debug, PartialEq)]
pub enum EnrichedNode {
    Compound { children: Vec<EnrichedTlv> },
    Scalar {
        value_kind: ValueKind,
        raw: Vec<u8>,
        formatted: FormattedValue,
    },
}

/// The JSON/YAML wire shape (spec.md §6): a flat `{type, length, name, description, value_type,
/// formatted_value|subtlvs}` schema, independent of how [EnrichedTlv]/[EnrichedNode] are shaped
/// internally. `length`, `name` and `description` are writer-only conveniences a reader tolerates
/// missing; `value_type` missing on read triggers the same context-path resolution chain the
/// binary enricher uses. Kept separate from the internal tree type because the wire schema has no
/// `path` field at all (context is positional, not stored) and no `raw` bytes (those are re-derived
/// by [flatten] from `formatted_value`, never trusted from the document).
#[cfg(feature = "serde")]
pub(crate) mod wire {
    use serde::{Deserialize, Serialize};

    use super::{EnrichedNode, EnrichedTlv};
    use crate::error::{Error, ErrorKind, ErrorLocation};
    use crate::options::Options;
    use crate::spec;
    use crate::types::{LengthForm, TlvPath, Version};
    use crate::value::{self, FormattedValue, ValueKind};

    #[derive(Serialize, Deserialize)]
    pub(crate) struct WireNode {
        #[serde(rename = "type")]
        tlv_type: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        length: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value_type: Option<ValueKind>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        formatted_value: Option<FormattedValue>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtlvs: Option<Vec<WireNode>>,
    }

    pub(crate) fn to_wire(tree: &[EnrichedTlv], opts: &Options) -> Result<Vec<WireNode>, Error> {
        tree.iter().map(|node| node_to_wire(node, opts)).collect()
    }

    fn node_to_wire(node: &EnrichedTlv, opts: &Options) -> Result<WireNode, Error> {
        match &node.node {
            EnrichedNode::Scalar { value_kind, raw, formatted } => Ok(WireNode {
                tlv_type: node.tlv_type,
                length: Some(raw.len()),
                name: node.name.clone(),
                description: node.description.clone(),
                value_type: Some(*value_kind),
                formatted_value: Some(formatted.clone()),
                subtlvs: None,
            }),
            EnrichedNode::Compound { children } => {
                let flat = super::flatten(children, opts)?;
                let encoded = crate::codec::generate_tlvs(&flat, false, opts.preserve_length_form, false)?;
                Ok(WireNode {
                    tlv_type: node.tlv_type,
                    length: Some(encoded.len()),
                    name: node.name.clone(),
                    description: node.description.clone(),
                    value_type: None,
                    formatted_value: None,
                    subtlvs: Some(to_wire(children, opts)?),
                })
            }
        }
    }

    /// Resolve a wire-format tree back to [EnrichedTlv]s, applying spec.md §4.5's fallback chain
    /// whenever a document omits `value_type`: explicit value, then `lookup_sub(parent_path,
    /// type)`, then `lookup_top(type, version)`, then `binary`.
    pub(crate) fn from_wire(wire: Vec<WireNode>, path: &TlvPath, version: Version) -> Result<Vec<EnrichedTlv>, Error> {
        wire.into_iter().map(|w| node_from_wire(w, path, version)).collect()
    }

    fn node_from_wire(wire: WireNode, path: &TlvPath, version: Version) -> Result<EnrichedTlv, Error> {
        let child_path = path.child(wire.tlv_type);

        if let Some(subtlvs) = wire.subtlvs {
            let children = from_wire(subtlvs, &child_path, version)?;
            return Ok(EnrichedTlv {
                tlv_type: wire.tlv_type,
                name: wire.name,
                description: wire.description,
                length_form: LengthForm::default(),
                path: path.clone(),
                node: EnrichedNode::Compound { children },
            });
        }

        let value_kind = wire
            .value_type
            .or_else(|| spec::lookup_sub(path, wire.tlv_type).map(|e| e.value_kind))
            .or_else(|| spec::lookup_top(wire.tlv_type, version).map(|e| e.value_kind))
            .unwrap_or(ValueKind::Binary);

        let formatted = wire.formatted_value.ok_or_else(|| {
            Error::new(
                ErrorKind::UnsupportedFormat("node has neither formatted_value nor subtlvs".to_string()),
                ErrorLocation::from(child_path.clone()),
            )
        })?;

        let raw = value::parse_value(value_kind, &formatted)?;

        Ok(EnrichedTlv {
            tlv_type: wire.tlv_type,
            name: wire.name,
            description: wire.description,
            length_form: LengthForm::default(),
            path: path.clone(),
            node: EnrichedNode::Scalar { value_kind, raw, formatted },
        })
    }
}

/// Enrich a flat TLV list into a tree, starting at the document root.
pub fn enrich(tlvs: &[RawTlv], opts: &Options) -> Result<Vec<EnrichedTlv>, Error> {
    enrich_level(tlvs, &TlvPath::root(), opts, 0)
}

fn enrich_level(
    tlvs: &[RawTlv],
    path: &TlvPath,
    opts: &Options,
    depth: u32,
) -> Result<Vec<EnrichedTlv>, Error> {
    if depth > opts.max_nesting_depth {
        return Err(Error::new(
            ErrorKind::NestingTooDeep {
                max_depth: opts.max_nesting_depth,
            },
            ErrorLocation::from(path.clone()),
        ));
    }
    tlvs.iter()
        .map(|tlv| enrich_one(tlv, path, opts, depth))
        .collect()
}

fn enrich_one(
    tlv: &RawTlv,
    path: &TlvPath,
    opts: &Options,
    depth: u32,
) -> Result<EnrichedTlv, Error> {
    let entry = if path.is_empty() {
        spec::lookup_top(tlv.tlv_type, opts.docsis_version)
    } else {
        spec::lookup_sub(path, tlv.tlv_type)
    };
    let child_path = path.child(tlv.tlv_type);

    if tlv.value.is_empty() {
        return Ok(EnrichedTlv {
            tlv_type: tlv.tlv_type,
            name: entry.map(|e| e.name.to_string()),
            description: entry.map(|e| e.description.to_string()),
            length_form: tlv.length_form,
            path: path.clone(),
            node: EnrichedNode::Scalar {
                value_kind: ValueKind::Marker,
                raw: Vec::new(),
                formatted: value::format_value(ValueKind::Marker, &[])?,
            },
        });
    }

    let should_try_compound = entry.map(|e| e.supports_subtlvs).unwrap_or(true);
    if should_try_compound {
        if let Ok(outcome) = codec::parse_tlvs(&tlv.value, false) {
            if outcome.consumed == tlv.value.len() && !outcome.tlvs.is_empty() {
                tracing::debug!(
                    tlv_type = tlv.tlv_type,
                    path = %child_path,
                    declared = entry.is_some(),
                    "enrich: treating payload as compound"
                );
                let children = enrich_level(&outcome.tlvs, &child_path, opts, depth + 1)?;
                return Ok(EnrichedTlv {
                    tlv_type: tlv.tlv_type,
                    name: entry.map(|e| e.name.to_string()),
                    description: entry.map(|e| e.description.to_string()),
                    length_form: tlv.length_form,
                    path: path.clone(),
                    node: EnrichedNode::Compound { children },
                });
            }
        }
        if let Some(e) = entry {
            if e.supports_subtlvs && opts.strict {
                return Err(Error::new(
                    ErrorKind::SubflowInconsistent {
                        reason: "declared compound payload does not parse as TLVs".to_string(),
                        path: child_path,
                    },
                    ErrorLocation::unknown(),
                ));
            }
            if e.supports_subtlvs {
                tracing::debug!(
                    tlv_type = tlv.tlv_type,
                    path = %child_path,
                    "enrich: declared-compound payload did not parse as TLVs, demoting to binary"
                );
            }
        }
    }

    tracing::debug!(
        tlv_type = tlv.tlv_type,
        path = %child_path,
        declared = entry.is_some(),
        "enrich: treating payload as scalar"
    );

    let value_kind = match entry {
        Some(e) if !e.supports_subtlvs => e.value_kind,
        _ => ValueKind::Binary,
    };
    let formatted = value::format_value(value_kind, &tlv.value)?;

    Ok(EnrichedTlv {
        tlv_type: tlv.tlv_type,
        name: entry.map(|e| e.name.to_string()),
        description: entry.map(|e| e.description.to_string()),
        length_form: tlv.length_form,
        path: path.clone(),
        node: EnrichedNode::Scalar {
            value_kind,
            raw: tlv.value.clone(),
            formatted,
        },
    })
}

/// Flatten an enriched tree back to raw TLVs, the inverse of [enrich].
///
/// For a scalar node this re-derives the payload bytes from `formatted` via [value::parse_value]
/// rather than trusting the `raw` field verbatim — a tree loaded from an edited JSON/YAML
/// document carries whatever `formatted` a human last wrote, and that edit must take effect
/// (spec.md §4.5 "Text → raw", step 3: "call value parser with the resolved kind and
/// formatted_value"). The round-trip law (spec.md §8 property 3) guarantees this reproduces the
/// original `raw` bytes exactly when `formatted` was not edited.
///
/// `opts.preserve_length_form` governs how nested compound payloads are re-encoded: when set,
/// every descendant keeps the length-encoding form recorded at [enrich] time; otherwise each is
/// re-emitted in its shortest adequate form (spec.md §4.1, §9 Open Questions). The returned
/// [RawTlv]s themselves always carry their original `length_form` — it is [generate] (or a
/// caller combining this with [crate::codec::generate_tlvs] directly) that decides, via the same
/// flag, whether that recorded form is honored or recomputed.
pub fn flatten(tree: &[EnrichedTlv], opts: &Options) -> Result<Vec<RawTlv>, Error> {
    tree.iter().map(|node| flatten_one(node, opts)).collect()
}

fn flatten_one(node: &EnrichedTlv, opts: &Options) -> Result<RawTlv, Error> {
    match &node.node {
        EnrichedNode::Scalar { value_kind, formatted, .. } => {
            let raw = value::parse_value(*value_kind, formatted)?;
            Ok(RawTlv::with_length_form(node.tlv_type, node.length_form, raw))
        }
        EnrichedNode::Compound { children } => {
            let bytes = codec::generate_tlvs(&flatten(children, opts)?, false, opts.preserve_length_form, false)?;
            Ok(RawTlv::with_length_form(node.tlv_type, node.length_form, bytes))
        }
    }
}

/// Regenerate DOCSIS configuration-file bytes from an enriched tree in one step, the primary
/// tree-to-bytes entry point: [flatten] followed by [crate::codec::generate_tlvs], both honoring
/// `opts.preserve_length_form` so the length-form policy (spec.md §9 Open Questions) actually
/// reaches every level of the regenerated stream instead of only the top one.
pub fn generate(tree: &[EnrichedTlv], opts: &Options, append_terminator: bool) -> Result<Vec<u8>, Error> {
    codec::generate_tlvs(&flatten(tree, opts)?, true, opts.preserve_length_form, append_terminator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawTlv;

    #[test]
    fn s1_enriches_boolean_web_access_control() {
        let tlvs = vec![RawTlv::new(3, vec![1])];
        let tree = enrich(&tlvs, &Options::default()).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name.as_deref(), Some("Web Access Control"));
        match &tree[0].node {
            EnrichedNode::Scalar { formatted, .. } => {
                assert_eq!(formatted.as_text(), "1");
            }
            _ => panic!("expected scalar"),
        }
    }

    #[test]
    fn s3_compound_upstream_service_flow_with_context_dependent_subtypes() {
        let bytes = vec![0x01, 0x02, 0x00, 0x01, 0x06, 0x01, 0x07];
        let tlvs = vec![RawTlv::new(18, bytes)];
        let tree = enrich(&tlvs, &Options::default()).unwrap();
        match &tree[0].node {
            EnrichedNode::Compound { children } => {
                assert_eq!(children.len(), 2);
                assert_eq!(children[0].name.as_deref(), Some("Service Flow Reference"));
                assert_eq!(children[1].name.as_deref(), Some("QoS Parameter Set Type"));
            }
            _ => panic!("expected compound"),
        }
    }

    #[test]
    fn empty_payload_is_always_a_marker() {
        let tlvs = vec![RawTlv::new(6, vec![])];
        let tree = enrich(&tlvs, &Options::default()).unwrap();
        assert!(matches!(
            &tree[0].node,
            EnrichedNode::Scalar { value_kind: ValueKind::Marker, .. }
        ));
    }

    #[test]
    fn unknown_type_is_probed_and_falls_back_to_binary() {
        let tlvs = vec![RawTlv::new(199, vec![0xAA, 0xBB, 0xCC])];
        let tree = enrich(&tlvs, &Options::default()).unwrap();
        assert!(tree[0].name.is_none());
        assert!(matches!(
            &tree[0].node,
            EnrichedNode::Scalar { value_kind: ValueKind::Binary, .. }
        ));
    }

    #[test]
    fn malformed_compound_demotes_to_binary_by_default() {
        // Class of Service (type 4) declares sub-TLVs, but this payload is not a valid TLV run.
        let tlvs = vec![RawTlv::new(4, vec![0xFF, 0xFF, 0xFF])];
        let tree = enrich(&tlvs, &Options::default()).unwrap();
        assert!(matches!(
            &tree[0].node,
            EnrichedNode::Scalar { value_kind: ValueKind::Binary, .. }
        ));

        let strict = Options::default().with_strict(true);
        let err = enrich(&tlvs, &strict).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::SubflowInconsistent { .. }));
    }

    #[test]
    fn s7_malformed_inner_length_falls_back_to_hex_and_round_trips() {
        // Sub-TLV declares a length (0x09) exceeding the 3 bytes remaining in the parent.
        let tlvs = vec![RawTlv::new(4, vec![0x01, 0x09, 0xAB])];
        let tree = enrich(&tlvs, &Options::default()).unwrap();
        match &tree[0].node {
            EnrichedNode::Scalar { value_kind, formatted, raw } => {
                assert_eq!(*value_kind, ValueKind::Binary);
                assert_eq!(formatted.as_text(), "01 09 AB");
                assert_eq!(raw, &vec![0x01, 0x09, 0xAB]);
            }
            _ => panic!("expected scalar fallback"),
        }
        assert_eq!(flatten(&tree, &Options::default()).unwrap(), tlvs);
    }

    #[test]
    fn enrich_then_flatten_round_trips() {
        let bytes = vec![0x01, 0x02, 0x00, 0x01, 0x06, 0x01, 0x07];
        let tlvs = vec![RawTlv::new(18, bytes)];
        let tree = enrich(&tlvs, &Options::default()).unwrap();
        assert_eq!(flatten(&tree, &Options::default()).unwrap(), tlvs);
    }

    #[test]
    fn flatten_applies_an_edit_to_formatted_value() {
        // Simulates a human editing the JSON/YAML document: the `formatted` text changes but the
        // stale `raw` bytes captured at enrich() time are left untouched. flatten() must honor
        // the edit, not the stale bytes (spec.md §4.5 step 3).
        let tlvs = vec![RawTlv::new(3, vec![1])];
        let mut tree = enrich(&tlvs, &Options::default()).unwrap();
        match &mut tree[0].node {
            EnrichedNode::Scalar { formatted, .. } => {
                *formatted = FormattedValue::Text("0".to_string());
            }
            _ => panic!("expected scalar"),
        }
        let regenerated = flatten(&tree, &Options::default()).unwrap();
        assert_eq!(regenerated[0].value, vec![0]);
    }

    #[test]
    fn preserve_length_form_reaches_nested_sub_tlvs() {
        // QoS Parameter Set Type (sub-type 6) encoded with an unnecessary Long2 length form
        // (0x82 0x00 0x01) nested under an Upstream Service Flow.
        let original = vec![18, 5, 0x06, 0x82, 0x00, 0x01, 0x07];
        let outcome = crate::codec::parse_tlvs(&original, true).unwrap();
        let tree = enrich(&outcome.tlvs, &Options::default()).unwrap();

        let preserved = generate(&tree, &Options::default().with_preserve_length_form(true), false).unwrap();
        assert_eq!(preserved, original);

        let shortened = generate(&tree, &Options::default().with_preserve_length_form(false), false).unwrap();
        assert_eq!(shortened, vec![18, 3, 0x06, 0x07]);
    }

    #[test]
    #[cfg(feature = "serde_json")]
    fn wire_schema_matches_the_documented_flat_shape() {
        let tlvs = vec![RawTlv::new(3, vec![1])];
        let tree = enrich(&tlvs, &Options::default()).unwrap();
        let wire = wire::to_wire(&tree, &Options::default()).unwrap();
        let json = serde_json::to_string(&wire[0]).unwrap();
        assert!(json.contains(r#""type":3"#));
        assert!(json.contains(r#""value_type":"boolean""#));
        assert!(json.contains(r#""formatted_value":1"#));
        assert!(!json.contains("subtlvs"));
    }

    #[test]
    #[cfg(feature = "serde_json")]
    fn deserializing_tolerates_a_missing_name_description_and_value_type() {
        let json = r#"{"type": 3, "formatted_value": "true"}"#;
        let wire: wire::WireNode = serde_json::from_str(json).unwrap();
        let resolved = wire::from_wire(vec![wire], &TlvPath::root(), crate::types::Version::V3_1).unwrap();
        assert_eq!(resolved[0].name, None);
        assert_eq!(resolved[0].description, None);
        match &resolved[0].node {
            // Type 3 is registered at the top level as Boolean, so the context-path fallback
            // resolves it even with value_type absent from the document.
            EnrichedNode::Scalar { value_kind, .. } => assert_eq!(*value_kind, ValueKind::Boolean),
            _ => panic!("expected scalar"),
        }
    }

    #[test]
    #[cfg(feature = "serde_json")]
    fn compound_wire_shape_uses_subtlvs_not_children() {
        let bytes = vec![0x01, 0x02, 0x00, 0x01, 0x06, 0x01, 0x07];
        let tlvs = vec![RawTlv::new(18, bytes)];
        let tree = enrich(&tlvs, &Options::default()).unwrap();
        let wire = wire::to_wire(&tree, &Options::default()).unwrap();
        let json = serde_json::to_string(&wire[0]).unwrap();
        assert!(json.contains("\"subtlvs\":["));
        assert!(!json.contains("formatted_value"));
    }
}
