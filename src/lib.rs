//! A crate to parse, validate and generate DOCSIS cable modem configuration files and their
//! binary TLV (Type-Length-Value) encoding, together with a PacketCable MTA provisioning codec
//! built on ASN.1 BER.
//!
//! This is the detailed API documentation. For a higher level introduction see the [README].
//!
//! [README]: https://crates.io/crates/docsis-ttlv/
//!
//! Note that this crate only parses, enriches, validates and generates configuration file bytes;
//! it does **NOT** fetch files over TFTP or speak to a CMTS. Building and transmitting a
//! provisioning session is out of scope.
//!
//! # Usage and features
//!
//! Add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! docsis-ttlv = "0.1.0"
//! ```
//!
//! ## High level API
//!
//! With the default `high-level` feature enabled you get the human-config bridge
//! ([human::to_json], [human::to_yaml], [human::from_json], [human::from_yaml]) on top of the raw
//! codec:
//!
//! ```ignore
//! use docsis_ttlv::{enrich, codec, options::Options, human};
//!
//! let opts = Options::default();
//! let outcome = codec::parse_tlvs(&bytes, true)?;
//! let tree = enrich::enrich(&outcome.tlvs, &opts)?;
//! let json = human::to_json(&tree, &opts)?;
//! ```
//!
//! ## Low level API
//!
//! There is also a low-level API which only depends on the [codec] and [types] modules. You can
//! disable the dependence on `serde`, `serde_json`, `serde_yaml` and `hex` by setting
//! `default-features = false` in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! docsis-ttlv = { version = "0.1.0", default-features = false }
//! ```
//!
//! This still gives you [codec::parse_tlvs] and [codec::generate_tlvs] over [types::RawTlv], but
//! not the enricher, the value codec's text formatting, or the JSON/YAML bridge.
//!
//! # TLV format
//!
//! A DOCSIS configuration file is a flat run of TLV items optionally ended by a top-level `0xFF`
//! terminator byte:
//!
//!   - Each item is a 1 byte type, a length field in one of four forms, and that many value
//!     bytes.
//!   - The length field is a single byte in `0x00..=0xFE` for lengths up to 254, or one of three
//!     long forms: `0x81 nn` (1 length byte), `0x82 nn nn` (2 big-endian length bytes), or
//!     `0x84 nn nn nn nn` (4 big-endian length bytes). A length byte of exactly `0xFE` is **not**
//!     a long-form indicator — it is simply the length value 254.
//!   - At the top level only, a type byte of `0xFF` terminates the file rather than introducing
//!     another TLV. Inside a compound TLV's payload, `0xFF` as a *length* byte is the literal
//!     value 255; only the outermost type-byte position is special.
//!
//! Think of a compound TLV (spec.md GLOSSARY: "compound") as a Rust struct and its sub-TLVs as
//! fields within it but, unlike Rust data types which are named, TLVs are identified by a numeric
//! type that means different things depending on which ancestor chain — the "context path" — it
//! appears under.
//!
//! # Context-dependent sub-TLV typing
//!
//! Because the registry is keyed by `(context path, type)` rather than by `type` alone, the same
//! numeric sub-type can mean two unrelated things:
//!
//! ```ignore
//! use docsis_ttlv::spec;
//! use docsis_ttlv::types::TlvPath;
//!
//! // sub-type 9 under an Upstream Service Flow (context [18]) is a traffic rate...
//! let under_flow = spec::lookup_sub(&TlvPath::root().child(18), 9).unwrap();
//! assert_eq!(under_flow.value_kind.to_string(), "uint32");
//!
//! // ...while top-level type 9 is an address entirely.
//! let top_level = spec::lookup_top(9, Default::default()).unwrap();
//! assert_eq!(top_level.value_kind.to_string(), "ipv4");
//! ```
//!
//! # Enrichment
//!
//! Parsing (see [codec]) never looks inside a TLV's payload bytes: whether a payload is itself a
//! sequence of sub-TLVs or a scalar value is a judgement call the enricher ([enrich]) makes using
//! the spec registry ([spec]), structural plausibility and, for ambiguous leaves, a last-resort
//! "parses as TLVs" probe. See [enrich::enrich] for the exact decision order.
//!
//! # Validation
//!
//! [validate::validate] runs three cumulative tiers over an enriched tree — syntax (is every
//! required sub-TLV present and well-formed), semantic (is every value in its declared range) and
//! compliance (are the TLVs required for the target DOCSIS version present) — and returns a
//! report of errors, warnings and informational notes rather than failing fast.
//!
//! # PacketCable MTA files
//!
//! A file beginning with the byte `0xFE` is not a DOCSIS TLV stream at all: it is a PacketCable
//! MTA configuration file, encoded as ASN.1 BER. See [asn1] for that decoder/encoder.
//!
//! # Error handling
//!
//! If parsing, enrichment, validation or generation fails this crate tries to return sufficient
//! contextual information — a byte offset and/or a [types::TlvPath] — to aid diagnosing where the
//! problem in the data is and why. See [error] for the full error taxonomy.
//!
//! This crate does not try to be clone free or to support `no_std` scenarios. Memory is allocated
//! to parse into and to build the enriched tree and the human-config documents.

pub mod asn1;
pub mod codec;
pub mod enrich;
pub mod error;
#[cfg(feature = "high-level")]
pub mod human;
pub mod options;
pub mod spec;
pub mod types;
pub mod util;
pub mod validate;
pub mod value;

#[doc(inline)]
pub use codec::{generate_tlvs, parse_tlvs};
#[doc(inline)]
pub use enrich::{enrich, EnrichedTlv};
#[doc(inline)]
pub use error::{Error, ErrorKind, Result};
#[doc(inline)]
pub use options::Options;
#[doc(inline)]
pub use validate::{validate, ValidationReport};
