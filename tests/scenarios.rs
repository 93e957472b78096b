//! End-to-end tests exercising the public API across the full parse → enrich → validate →
//! human-config pipeline, covering the concrete scenarios and universal properties this crate
//! is built against.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use docsis_ttlv::asn1;
use docsis_ttlv::enrich::{enrich, flatten, EnrichedNode};
use docsis_ttlv::human;
use docsis_ttlv::options::Options;
use docsis_ttlv::types::Version;
use docsis_ttlv::{generate_tlvs, parse_tlvs, validate};

#[test]
fn s1_boolean_web_access_control_round_trips_through_json() {
    let bytes = [0x03, 0x01, 0x01];
    let outcome = parse_tlvs(&bytes, true).unwrap();
    let opts = Options::default();
    let tree = enrich(&outcome.tlvs, &opts).unwrap();

    assert_eq!(tree[0].name.as_deref(), Some("Web Access Control"));

    let json = human::to_json(&tree, &opts).unwrap();
    let doc = human::from_json(&json).unwrap();
    let regenerated = generate_tlvs(&flatten(&doc.tlvs, &opts).unwrap(), true, true, false).unwrap();
    assert_eq!(regenerated, bytes);
}

#[test]
fn s2_downstream_frequency_formats_with_unit() {
    let bytes = [0x01, 0x04, 0x23, 0x39, 0xF1, 0xC0];
    let outcome = parse_tlvs(&bytes, true).unwrap();
    let tree = enrich(&outcome.tlvs, &Options::default()).unwrap();

    let formatted = match &tree[0].node {
        EnrichedNode::Scalar { formatted, .. } => formatted.as_text(),
        _ => panic!("expected a scalar frequency"),
    };
    assert_eq!(formatted, "591 MHz");

    // Re-parsing the same text must reproduce the original payload bytes.
    let raw = docsis_ttlv::value::parse_value(
        docsis_ttlv::value::ValueKind::Frequency,
        &docsis_ttlv::value::FormattedValue::Text("591 MHz".to_string()),
    )
    .unwrap();
    assert_eq!(raw, vec![0x23, 0x39, 0xF1, 0xC0]);
}

#[test]
fn s5_packetcable_mta_file_round_trips_oid_and_integer() {
    // A SEQUENCE wrapping an OBJECT IDENTIFIER and an INTEGER, behind the 0xFE MTA marker.
    let oid_bytes = docsis_ttlv::util::encode_oid(&[1, 3, 6, 1, 4, 1, 4491]).unwrap();
    let oid_node = asn1::BerNode {
        tag: asn1::BerTag {
            class: asn1::TagClass::Universal,
            constructed: false,
            number: asn1::universal::OBJECT_IDENTIFIER,
        },
        value: asn1::BerValue::Primitive(oid_bytes),
    };
    let int_node = asn1::BerNode {
        tag: asn1::BerTag {
            class: asn1::TagClass::Universal,
            constructed: false,
            number: asn1::universal::INTEGER,
        },
        value: asn1::BerValue::Primitive(asn1::encode_integer(1)),
    };
    let sequence = asn1::BerNode {
        tag: asn1::BerTag {
            class: asn1::TagClass::Universal,
            constructed: true,
            number: asn1::universal::SEQUENCE,
        },
        value: asn1::BerValue::Constructed(vec![oid_node, int_node]),
    };

    let mut file = vec![asn1::MTA_FILE_MARKER];
    file.extend(asn1::encode_mta_file(&[sequence.clone()]));

    assert_eq!(file[0], asn1::MTA_FILE_MARKER);
    let decoded = asn1::decode_mta_file(&file[1..], 32).unwrap();
    assert_matches!(decoded.as_slice(), [only] if *only == sequence);

    let regenerated_body = asn1::encode_mta_file(&decoded);
    assert_eq!(&file[1..], regenerated_body.as_slice());
}

#[test]
fn s6_docsis_31_tlv_against_30_target_is_flagged() {
    let bytes = [
        0x03, 0x01, 0x01, // Web Access Control
        0x06, 0x02, 0xAA, 0xBB, // CM MIC
        0x07, 0x02, 0xCC, 0xDD, // CMTS MIC
        0x3E, 0x02, 0x01, 0x00, // TLV 62 (0x3E), 3.1-only
    ];
    let outcome = parse_tlvs(&bytes, true).unwrap();
    let opts = Options::default().with_docsis_version(Version::V3_0);
    let tree = enrich(&outcome.tlvs, &opts).unwrap();
    let report = validate(&tree, &opts);

    assert!(!report.is_clean());
    let finding = report.errors().find(|f| f.path == "62").unwrap();
    assert!(finding.message.contains("3.1"));
}

#[test]
fn enrichment_is_idempotent() {
    let bytes = [0x04, 0x03, 0x01, 0x01, 0x05];
    let outcome = parse_tlvs(&bytes, true).unwrap();
    let opts = Options::default();
    let once = enrich(&outcome.tlvs, &opts).unwrap();
    let twice = enrich(&flatten(&once, &opts).unwrap(), &opts).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn xor_invariant_every_node_is_exactly_one_of_compound_or_scalar() {
    let bytes = [
        0x12, 0x07, 0x01, 0x02, 0x00, 0x01, 0x06, 0x01, 0x07, // Upstream Service Flow (0x12)
    ];
    let outcome = parse_tlvs(&bytes, true).unwrap();
    let tree = enrich(&outcome.tlvs, &Options::default()).unwrap();

    fn check(nodes: &[docsis_ttlv::enrich::EnrichedTlv]) {
        for node in nodes {
            match &node.node {
                EnrichedNode::Compound { children } => check(children),
                EnrichedNode::Scalar { .. } => {}
            }
        }
    }
    check(&tree);
}

#[test]
fn raw_round_trip_preserves_original_bytes() {
    let bytes = vec![
        0x03, 0x01, 0x01, 0x12, 0x07, 0x01, 0x02, 0x00, 0x01, 0x06, 0x01, 0x07, 0xFF,
    ];
    let outcome = parse_tlvs(&bytes, true).unwrap();
    let regenerated = generate_tlvs(&outcome.tlvs, true, true, outcome.terminated).unwrap();
    assert_eq!(regenerated, bytes);
}
