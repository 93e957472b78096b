//! Small helpers shared by the value codec and the ASN.1 subsystem: hex rendering/parsing and
//! variable-length OID sub-identifier encoding (spec.md §4.3 `oid` kind, §4.7 ASN.1 OID tag).

use crate::error::{Error, ErrorKind};

/// Render bytes as space-separated uppercase hex, e.g. `23 39 F1 C0` (spec.md §4.3 `binary` /
/// `asn1_der` format output).
pub fn to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex bytes separated by whitespace (and tolerating a contiguous run with no separators
/// at all), case-insensitively.
pub fn from_hex_spaced(s: &str) -> Result<Vec<u8>, Error> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&cleaned).map_err(|_| {
        Error::new(
            ErrorKind::InvalidFormat {
                kind: crate::value::ValueKind::Binary,
                input: s.to_string(),
            },
            crate::error::ErrorLocation::unknown(),
        )
    })
}

/// Encode an OID as a sequence of sub-identifiers using the ASN.1/BER rule: the first two
/// components are combined as `40*x + y`, every later component is emitted base-128 with the
/// continuation bit (0x80) set on every byte but the last.
pub fn encode_oid(components: &[u64]) -> Result<Vec<u8>, Error> {
    if components.len() < 2 {
        return Err(Error::new(
            ErrorKind::InvalidFormat {
                kind: crate::value::ValueKind::Oid,
                input: format!("{components:?}"),
            },
            crate::error::ErrorLocation::unknown(),
        ));
    }
    let mut out = Vec::new();
    out.push((components[0] * 40 + components[1]) as u8);
    for &c in &components[2..] {
        out.extend(encode_base128(c));
    }
    Ok(out)
}

fn encode_base128(mut value: u64) -> Vec<u8> {
    let mut digits = vec![(value & 0x7F) as u8];
    value >>= 7;
    while value > 0 {
        digits.push(((value & 0x7F) as u8) | 0x80);
        value >>= 7;
    }
    digits.reverse();
    digits
}

/// Decode an OID from its sub-identifier byte encoding back to dotted components.
pub fn decode_oid(bytes: &[u8]) -> Result<Vec<u64>, Error> {
    if bytes.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidFormat {
                kind: crate::value::ValueKind::Oid,
                input: to_hex_spaced(bytes),
            },
            crate::error::ErrorLocation::unknown(),
        ));
    }
    let first = bytes[0] as u64;
    let mut components = vec![first / 40, first % 40];
    let mut acc: u64 = 0;
    for &b in &bytes[1..] {
        acc = (acc << 7) | (b & 0x7F) as u64;
        if b & 0x80 == 0 {
            components.push(acc);
            acc = 0;
        }
    }
    Ok(components)
}

/// Format OID components as dotted decimal, e.g. `1.2.840.113549`.
pub fn format_oid(components: &[u64]) -> String {
    components
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Parse dotted-decimal OID text back to components.
pub fn parse_oid(s: &str) -> Result<Vec<u64>, Error> {
    s.trim()
        .split('.')
        .map(|part| {
            part.parse::<u64>().map_err(|_| {
                Error::new(
                    ErrorKind::InvalidFormat {
                        kind: crate::value::ValueKind::Oid,
                        input: s.to_string(),
                    },
                    crate::error::ErrorLocation::unknown(),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips() {
        let bytes = vec![0x23, 0x39, 0xF1, 0xC0];
        let s = to_hex_spaced(&bytes);
        assert_eq!(s, "23 39 F1 C0");
        assert_eq!(from_hex_spaced(&s).unwrap(), bytes);
    }

    #[test]
    fn hex_parses_unspaced_and_lowercase() {
        assert_eq!(from_hex_spaced("deadbeef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn oid_round_trips() {
        // RSA encryption OID: 1.2.840.113549.1.1.1
        let components = vec![1, 2, 840, 113549, 1, 1, 1];
        let bytes = encode_oid(&components).unwrap();
        assert_eq!(decode_oid(&bytes).unwrap(), components);
        assert_eq!(parse_oid(&format_oid(&components)).unwrap(), components);
    }
}
