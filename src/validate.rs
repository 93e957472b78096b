//! The validation framework (spec.md §4.6): three cumulative tiers run over an enriched tree and
//! produce a report rather than failing on the first problem found.
//!
//! - **Syntax**: is every TLV recognized (or deliberately tolerated, if unknown) and well-formed?
//! - **Semantic**: is every scalar value within the range its [ValueKind](crate::value::ValueKind)
//!   allows, and are structurally-dependent invariants (e.g. sub-TLV singletons) satisfied?
//! - **Compliance**: are the TLVs required for the target DOCSIS version present at all?
//!
//! Each tier runs regardless of whether an earlier tier found anything — a semantic problem in
//! one TLV should not hide a compliance problem in another.

use std::collections::HashMap;

use crate::enrich::{EnrichedNode, EnrichedTlv};
use crate::options::Options;
use crate::types::Version;

/// Severity of one validation finding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// One validation finding: what tier produced it, how severe it is, where it was found, and a
/// human-readable message.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Finding {
    pub severity: Severity,
    pub tier: String,
    pub path: String,
    pub message: String,
}

/// The accumulated result of validating an enriched tree.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        !self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warning)
    }

    fn push(&mut self, severity: Severity, tier: &str, path: impl Into<String>, message: impl Into<String>) {
        let path = path.into();
        let message = message.into();
        if severity == Severity::Warning {
            tracing::warn!(tier, path = %path, message = %message, "validate: finding");
        }
        self.findings.push(Finding {
            severity,
            tier: tier.to_string(),
            path,
            message,
        });
    }
}

/// Run all three tiers over `tree` and return the accumulated report.
///
/// When `opts.strict` is set, findings that would otherwise be warnings are promoted to errors
/// (spec.md §4.6 "strict mode promotes warnings to errors").
pub fn validate(tree: &[EnrichedTlv], opts: &Options) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_syntax(tree, &mut report, opts);
    validate_semantic(tree, &mut report, opts);
    validate_compliance(tree, &mut report, opts);
    if opts.strict {
        for finding in &mut report.findings {
            if finding.severity == Severity::Warning {
                finding.severity = Severity::Error;
            }
        }
    }
    report
}

fn validate_syntax(tree: &[EnrichedTlv], report: &mut ValidationReport, opts: &Options) {
    for node in tree {
        if node.name.is_none() {
            report.push(
                Severity::Warning,
                "syntax",
                node.path.child(node.tlv_type).to_string(),
                format!("TLV type {} is not recognized by the spec registry", node.tlv_type),
            );
        }
        if let EnrichedNode::Compound { children } = &node.node {
            validate_syntax(children, report, opts);
        }
    }
}

fn validate_semantic(tree: &[EnrichedTlv], report: &mut ValidationReport, opts: &Options) {
    for node in tree {
        match &node.node {
            EnrichedNode::Compound { children } => {
                let child_path = node.path.child(node.tlv_type);
                check_singletons(children, &child_path, report);
                check_service_flow_invariants(node.tlv_type, children, &child_path, report);
                validate_semantic(children, report, opts);
            }
            EnrichedNode::Scalar { value_kind, raw, .. } => {
                if let Err(err) = crate::value::format_value(*value_kind, raw) {
                    report.push(
                        Severity::Error,
                        "semantic",
                        node.path.child(node.tlv_type).to_string(),
                        err.to_string(),
                    );
                }
            }
        }
    }
}

/// DOCSIS requires each Class of Service and Service Flow sub-TLV set to name its reference
/// exactly once; a duplicate reference sub-TLV under the same parent is a structural error
/// (spec.md §4.6 "structurally-dependent invariants").
fn check_singletons(children: &[EnrichedTlv], parent: &crate::types::TlvPath, report: &mut ValidationReport) {
    const SINGLETON_TYPES: &[u8] = &[1, 2];
    let mut seen: HashMap<u8, u32> = HashMap::new();
    for child in children {
        if SINGLETON_TYPES.contains(&child.tlv_type) {
            *seen.entry(child.tlv_type).or_insert(0) += 1;
        }
    }
    for (tlv_type, count) in seen {
        if count > 1 {
            report.push(
                Severity::Error,
                "semantic",
                parent.to_string(),
                format!("duplicate singleton sub-TLV type {tlv_type} under this parent ({count} occurrences)"),
            );
        }
    }
}

/// Upstream/Downstream Service Flow sub-type numbers this check cares about (spec.md §4.6).
const SERVICE_FLOW_REFERENCE: u8 = 1;
const SERVICE_FLOW_MIN_RESERVED_RATE: u8 = 8;
const SERVICE_FLOW_MAX_SUSTAINED_RATE: u8 = 9;

/// Every Service Flow (top-level type 18 Upstream, 19 Downstream) must name the classifier it
/// binds to via a Reference sub-TLV, and if both rate bounds are given the sustained ceiling must
/// not fall below the reserved floor (spec.md §4.6 service-flow invariants).
fn check_service_flow_invariants(
    tlv_type: u8,
    children: &[EnrichedTlv],
    parent: &crate::types::TlvPath,
    report: &mut ValidationReport,
) {
    if tlv_type != 18 && tlv_type != 19 {
        return;
    }
    if !children.iter().any(|c| c.tlv_type == SERVICE_FLOW_REFERENCE) {
        report.push(
            Severity::Error,
            "semantic",
            parent.to_string(),
            "Service Flow is missing its required Service Flow Reference sub-TLV",
        );
    }
    let max_rate = service_flow_rate(children, SERVICE_FLOW_MAX_SUSTAINED_RATE);
    let min_rate = service_flow_rate(children, SERVICE_FLOW_MIN_RESERVED_RATE);
    if let (Some(max_rate), Some(min_rate)) = (max_rate, min_rate) {
        if max_rate < min_rate {
            report.push(
                Severity::Error,
                "semantic",
                parent.to_string(),
                format!(
                    "Maximum Sustained Traffic Rate ({max_rate}) is less than Minimum Reserved Traffic Rate ({min_rate})"
                ),
            );
        }
    }
}

fn service_flow_rate(children: &[EnrichedTlv], sub_type: u8) -> Option<u32> {
    children.iter().find_map(|c| match &c.node {
        EnrichedNode::Scalar { raw, .. } if c.tlv_type == sub_type && raw.len() == 4 => {
            Some(u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]))
        }
        _ => None,
    })
}

/// TLVs required to be present at the top level for a given target DOCSIS version.
fn required_top_level(version: Version) -> &'static [(u8, &'static str)] {
    const BASE: &[(u8, &str)] = &[];
    const V3_0_PLUS: &[(u8, &str)] = &[
        (3, "Web Access Control"),
        (6, "CM MIC"),
        (7, "CMTS MIC"),
    ];
    if version >= Version::V3_0 {
        V3_0_PLUS
    } else {
        BASE
    }
}

fn validate_compliance(tree: &[EnrichedTlv], report: &mut ValidationReport, opts: &Options) {
    let present: std::collections::HashSet<u8> = tree.iter().map(|n| n.tlv_type).collect();
    for (tlv_type, name) in required_top_level(opts.docsis_version) {
        if !present.contains(tlv_type) {
            report.push(
                Severity::Error,
                "compliance",
                "/",
                format!(
                    "required TLV type {tlv_type} ({name}) is missing for target DOCSIS version {}",
                    opts.docsis_version
                ),
            );
        }
    }

    // A TLV the registry doesn't recognize at the target version might still be a perfectly
    // valid TLV introduced by a *later* version — that is a version-compliance problem, not an
    // unknown-type one, and deserves a finding that names the minimum version required.
    for node in tree {
        if node.name.is_none() {
            if let Some(entry) = crate::spec::lookup_top(node.tlv_type, Version::V3_1) {
                report.push(
                    Severity::Error,
                    "compliance",
                    node.path.child(node.tlv_type).to_string(),
                    format!(
                        "TLV type {} ({}) requires DOCSIS {} but target version is {}",
                        node.tlv_type, entry.name, entry.introduced, opts.docsis_version
                    ),
                );
            }
        }
    }
}
