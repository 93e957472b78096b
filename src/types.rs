//! Shared primitive types used across the codec, spec registry, enricher and validator:
//! byte offsets, TLV context paths, and the DOCSIS version lattice.

use std::convert::TryFrom;
use std::fmt::{Debug, Display};

// --- ByteOffset -----------------------------------------------------------------------------

/// An offset into a collection of TLV bytes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteOffset(pub u64);

impl std::ops::Deref for ByteOffset {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for ByteOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ByteOffset {
    fn from(v: u64) -> Self {
        ByteOffset(v)
    }
}

impl TryFrom<usize> for ByteOffset {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value <= u64::MAX as usize {
            Ok(ByteOffset(value as u64))
        } else {
            Err(())
        }
    }
}

impl<T> From<&std::io::Cursor<T>> for ByteOffset {
    fn from(cursor: &std::io::Cursor<T>) -> Self {
        ByteOffset(cursor.position())
    }
}

// --- TlvPath ----------------------------------------------------------------------------------

/// The chain of ancestor TLV types identifying where a sub-TLV sits, e.g. `[24, 43, 5]`
/// (spec.md GLOSSARY: "context path").
///
/// Sub-TLV type semantics depend on the full ancestor chain: the same numeric type can mean
/// different things under different parents, so this is the key threaded through the spec
/// registry, the enricher and the human-config bridge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlvPath(Vec<u8>);

impl TlvPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns a new path with `tlv_type` appended, used when descending into a child TLV.
    pub fn child(&self, tlv_type: u8) -> Self {
        let mut v = self.0.clone();
        v.push(tlv_type);
        Self(v)
    }

    /// The deepest ancestor, i.e. the immediate parent type, if any.
    pub fn parent_type(&self) -> Option<u8> {
        self.0.last().copied()
    }
}

impl From<Vec<u8>> for TlvPath {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<&[u8]> for TlvPath {
    fn from(v: &[u8]) -> Self {
        Self(v.to_vec())
    }
}

impl Display for TlvPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        let mut iter = self.0.iter();
        write!(f, "{}", iter.next().unwrap())?;
        for t in iter {
            write!(f, " > {t}")?;
        }
        Ok(())
    }
}

// --- Version ------------------------------------------------------------------------------------

/// DOCSIS protocol version. Versions form a total order (spec.md §4.2).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Version {
    V1_0,
    V1_1,
    V2_0,
    V3_0,
    V3_1,
}

impl Version {
    pub const ALL: [Version; 5] = [
        Version::V1_0,
        Version::V1_1,
        Version::V2_0,
        Version::V3_0,
        Version::V3_1,
    ];

    /// The permissive default used when a text document omits `docsis_version`
    /// (spec.md §4.5: "missing docsis_version -> 3.1").
    pub fn default_permissive() -> Self {
        Version::V3_1
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::default_permissive()
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Version::V1_0 => "1.0",
            Version::V1_1 => "1.1",
            Version::V2_0 => "2.0",
            Version::V3_0 => "3.0",
            Version::V3_1 => "3.1",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Version {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1.0" => Ok(Version::V1_0),
            "1.1" => Ok(Version::V1_1),
            "2.0" => Ok(Version::V2_0),
            "3.0" => Ok(Version::V3_0),
            "3.1" => Ok(Version::V3_1),
            _ => Err(()),
        }
    }
}

// --- RawTlv -------------------------------------------------------------------------------------

/// The length form chosen when a TLV's length was encoded, preserved so that
/// `generate(parse(bytes)) == bytes` when requested (spec.md §4.1, Non-goals: "it preserves the
/// parser's chosen interpretation").
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LengthForm {
    /// A single length byte in `0..=253` (254, `0xFE`, is also a valid single-byte length, see
    /// spec.md §4.1 — it must never be read as a long-form indicator).
    Short,
    /// `0x81 nn`: one length byte follows.
    Long1,
    /// `0x82 nn nn`: two big-endian length bytes follow.
    Long2,
    /// `0x84 nn nn nn nn`: four big-endian length bytes follow.
    Long4,
}

impl Default for LengthForm {
    /// Used only so `#[serde(skip)]` has a value to reconstruct with when a human-edited
    /// document omits the field entirely; a freshly-deserialized node always regenerates with
    /// the shortest form unless [`crate::options::Options::preserve_length_form`] says otherwise.
    fn default() -> Self {
        LengthForm::Short
    }
}

impl LengthForm {
    /// The shortest form that can represent `len` in a context where a single length byte is
    /// unambiguous (i.e. not the top-level byte stream, where `0xFF` is reserved for the
    /// terminator — see [crate::codec] for the top-level-aware variant of this choice).
    pub fn shortest_for(len: u32) -> Self {
        if len <= 0xFF {
            LengthForm::Short
        } else if len <= 0xFFFF {
            LengthForm::Long2
        } else {
            LengthForm::Long4
        }
    }
}

/// A raw, uninterpreted TLV triple: `(type, length, value)` with `length == value.len()`
/// (spec.md §3 invariant).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTlv {
    pub tlv_type: u8,
    pub length_form: LengthForm,
    pub value: Vec<u8>,
}

impl RawTlv {
    pub fn new(tlv_type: u8, value: Vec<u8>) -> Self {
        let form = LengthForm::shortest_for(value.len() as u32);
        Self {
            tlv_type,
            length_form: form,
            value,
        }
    }

    pub fn with_length_form(tlv_type: u8, length_form: LengthForm, value: Vec<u8>) -> Self {
        Self {
            tlv_type,
            length_form,
            value,
        }
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_total_order() {
        assert!(Version::V1_0 < Version::V1_1);
        assert!(Version::V1_1 < Version::V2_0);
        assert!(Version::V2_0 < Version::V3_0);
        assert!(Version::V3_0 < Version::V3_1);
    }

    #[test]
    fn version_round_trips_through_display_and_from_str() {
        for v in Version::ALL {
            let s = v.to_string();
            assert_eq!(s.parse::<Version>().unwrap(), v);
        }
    }

    #[test]
    fn path_renders_ancestor_chain() {
        let path = TlvPath::root().child(24).child(43).child(5);
        assert_eq!(path.to_string(), "24 > 43 > 5");
    }

    #[test]
    fn shortest_length_form_respects_0xfe_boundary() {
        assert_eq!(LengthForm::shortest_for(253), LengthForm::Short);
        assert_eq!(LengthForm::shortest_for(254), LengthForm::Short);
        assert_eq!(LengthForm::shortest_for(255), LengthForm::Short);
        assert_eq!(LengthForm::shortest_for(256), LengthForm::Long2);
        assert_eq!(LengthForm::shortest_for(70000), LengthForm::Long4);
    }
}
