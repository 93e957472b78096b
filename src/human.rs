//! The human-config bridge (spec.md §4.5): serialize an enriched TLV tree to JSON or YAML, and
//! parse either format back to the same tree, so both formats share one schema instead of two
//! independently-maintained ones.
//!
//! `docsis_version` is the only document-level field; when a document omits it, the permissive
//! default applies (spec.md §4.5 "missing docsis_version -> 3.1",
//! [crate::types::Version::default_permissive]).

use serde::{Deserialize, Serialize};

use crate::enrich::wire::{self, WireNode};
use crate::enrich::EnrichedTlv;
use crate::error::{Error, ErrorKind, ErrorLocation};
use crate::options::Options;
use crate::types::{TlvPath, Version};

/// The document-level wrapper shared by the JSON and YAML renderings.
#[derive(Clone, Debug)]
pub struct Document {
    pub docsis_version: Version,
    pub tlvs: Vec<EnrichedTlv>,
}

/// The on-the-wire shape of [Document] (spec.md §6): `docsis_version` plus a recursive `tlvs`
/// list in the flat `{type, length, name, description, value_type, formatted_value|subtlvs}`
/// schema carried by [WireNode], rather than [EnrichedTlv]'s internal representation.
#[derive(Serialize, Deserialize)]
struct WireDocument {
    #[serde(default = "Version::default_permissive")]
    docsis_version: Version,
    tlvs: Vec<WireNode>,
}

pub fn to_json(tree: &[EnrichedTlv], opts: &Options) -> Result<String, Error> {
    let doc = WireDocument {
        docsis_version: opts.docsis_version,
        tlvs: wire::to_wire(tree, opts)?,
    };
    let result = if opts.pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    };
    result.map_err(|e| unsupported(e.to_string()))
}

pub fn from_json(text: &str) -> Result<Document, Error> {
    let doc: WireDocument = serde_json::from_str(text).map_err(|e| unsupported(e.to_string()))?;
    let tlvs = wire::from_wire(doc.tlvs, &TlvPath::root(), doc.docsis_version)?;
    Ok(Document {
        docsis_version: doc.docsis_version,
        tlvs,
    })
}

pub fn to_yaml(tree: &[EnrichedTlv], opts: &Options) -> Result<String, Error> {
    let doc = WireDocument {
        docsis_version: opts.docsis_version,
        tlvs: wire::to_wire(tree, opts)?,
    };
    serde_yaml::to_string(&doc).map_err(|e| unsupported(e.to_string()))
}

pub fn from_yaml(text: &str) -> Result<Document, Error> {
    let doc: WireDocument = serde_yaml::from_str(text).map_err(|e| unsupported(e.to_string()))?;
    let tlvs = wire::from_wire(doc.tlvs, &TlvPath::root(), doc.docsis_version)?;
    Ok(Document {
        docsis_version: doc.docsis_version,
        tlvs,
    })
}

fn unsupported(reason: String) -> Error {
    Error::new(ErrorKind::UnsupportedFormat(reason), ErrorLocation::unknown())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::types::RawTlv;

    #[test]
    fn json_round_trips_an_enriched_tree() {
        let tlvs = vec![RawTlv::new(3, vec![1])];
        let opts = Options::default();
        let tree = enrich(&tlvs, &opts).unwrap();

        let json = to_json(&tree, &opts).unwrap();
        let doc = from_json(&json).unwrap();
        assert_eq!(doc.docsis_version, opts.docsis_version);
        assert_eq!(doc.tlvs, tree);
    }

    #[test]
    fn yaml_round_trips_an_enriched_tree() {
        let tlvs = vec![RawTlv::new(18, vec![0x01, 0x02, 0x00, 0x01])];
        let opts = Options::default();
        let tree = enrich(&tlvs, &opts).unwrap();

        let yaml = to_yaml(&tree, &opts).unwrap();
        let doc = from_yaml(&yaml).unwrap();
        assert_eq!(doc.tlvs, tree);
    }

    #[test]
    fn missing_docsis_version_defaults_to_permissive() {
        let json = r#"{"tlvs":[]}"#;
        let doc = from_json(json).unwrap();
        assert_eq!(doc.docsis_version, Version::V3_1);
    }

    #[test]
    fn pretty_json_is_multiline() {
        let tlvs = vec![RawTlv::new(3, vec![1])];
        let opts = Options::default().with_pretty(true);
        let tree = enrich(&tlvs, &opts).unwrap();
        let json = to_json(&tree, &opts).unwrap();
        assert!(json.contains('\n'));
    }

    #[test]
    fn json_document_uses_the_documented_flat_field_names() {
        let tlvs = vec![RawTlv::new(3, vec![1])];
        let opts = Options::default();
        let tree = enrich(&tlvs, &opts).unwrap();
        let json = to_json(&tree, &opts).unwrap();

        assert!(json.contains(r#""docsis_version""#));
        assert!(json.contains(r#""type":3"#));
        assert!(json.contains(r#""name":"Web Access Control""#));
        assert!(json.contains(r#""value_type":"boolean""#));
        assert!(json.contains(r#""formatted_value""#));
        assert!(!json.contains("tlv_type"));
        assert!(!json.contains("\"node\""));
    }

    #[test]
    fn from_json_honors_an_edited_formatted_value_with_no_value_type() {
        // A hand-edited document can omit value_type entirely; the top-level spec table resolves
        // type 3 to ValueKind::Boolean via the context-path fallback chain (spec.md §4.5).
        let json = r#"{"tlvs":[{"type":3,"formatted_value":"0"}]}"#;
        let doc = from_json(json).unwrap();
        match &doc.tlvs[0].node {
            crate::enrich::EnrichedNode::Scalar { value_kind, .. } => {
                assert_eq!(*value_kind, crate::value::ValueKind::Boolean);
            }
            _ => panic!("expected scalar"),
        }
        let raw = crate::enrich::flatten(&doc.tlvs, &Options::default()).unwrap();
        assert_eq!(raw[0].value, vec![0]);
    }
}
