//! The value formatter/parser pair (spec.md §4.3): converts between raw TLV payload bytes and a
//! human-editable [FormattedValue] for each [ValueKind] in the closed set.
//!
//! The round-trip contract (spec.md §8 property 3) is: for every kind `K` and every `v` in `K`'s
//! domain, `parse_value(K, format_value(K, v)) == v`. Frequency/bandwidth/duration/power must
//! carry their unit through the formatted form — this is flagged in spec.md as "the critical
//! rule", since a bare number silently loses scale.

use std::fmt::Display;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{Error, ErrorKind, ErrorLocation};
use crate::util;

// --- ValueKind ----------------------------------------------------------------------------------

/// The closed set of value kinds a TLV payload can be interpreted as (spec.md §4.3).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Boolean,
    Ipv4,
    Ipv6,
    MacAddress,
    Frequency,
    Bandwidth,
    Duration,
    PowerQuarterDb,
    Percentage,
    String,
    Oid,
    Asn1Der,
    Binary,
    Compound,
    Marker,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ValueKind::Uint8 => "uint8",
            ValueKind::Uint16 => "uint16",
            ValueKind::Uint32 => "uint32",
            ValueKind::Uint64 => "uint64",
            ValueKind::Int8 => "int8",
            ValueKind::Int16 => "int16",
            ValueKind::Int32 => "int32",
            ValueKind::Boolean => "boolean",
            ValueKind::Ipv4 => "ipv4",
            ValueKind::Ipv6 => "ipv6",
            ValueKind::MacAddress => "mac_address",
            ValueKind::Frequency => "frequency",
            ValueKind::Bandwidth => "bandwidth",
            ValueKind::Duration => "duration",
            ValueKind::PowerQuarterDb => "power_quarter_db",
            ValueKind::Percentage => "percentage",
            ValueKind::String => "string",
            ValueKind::Oid => "oid",
            ValueKind::Asn1Der => "asn1_der",
            ValueKind::Binary => "binary",
            ValueKind::Compound => "compound",
            ValueKind::Marker => "marker",
        })
    }
}

impl FromStr for ValueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "uint8" => ValueKind::Uint8,
            "uint16" => ValueKind::Uint16,
            "uint32" => ValueKind::Uint32,
            "uint64" => ValueKind::Uint64,
            "int8" => ValueKind::Int8,
            "int16" => ValueKind::Int16,
            "int32" => ValueKind::Int32,
            "boolean" => ValueKind::Boolean,
            "ipv4" => ValueKind::Ipv4,
            "ipv6" => ValueKind::Ipv6,
            "mac_address" => ValueKind::MacAddress,
            "frequency" => ValueKind::Frequency,
            "bandwidth" => ValueKind::Bandwidth,
            "duration" => ValueKind::Duration,
            "power_quarter_db" => ValueKind::PowerQuarterDb,
            "percentage" => ValueKind::Percentage,
            "string" => ValueKind::String,
            "oid" => ValueKind::Oid,
            "asn1_der" => ValueKind::Asn1Der,
            // hex_string is accepted as an alias for binary (spec.md §4.3 table).
            "binary" | "hex_string" => ValueKind::Binary,
            "compound" => ValueKind::Compound,
            "marker" => ValueKind::Marker,
            other => return Err(Error::new(ErrorKind::UnknownValueKind(other.to_string()), ErrorLocation::unknown())),
        })
    }
}

// --- FormattedValue -------------------------------------------------------------------------------

/// A human-editable representation of a scalar TLV value (spec.md §9 design note: "a small
/// variant: Number(i64) | Number(f64) | Text(String) | Absent").
///
/// `Absent` is represented at the call site as `Option<FormattedValue>`, not as a variant here,
/// so that serde can serialize the JSON/YAML field as simply missing rather than an explicit
/// null (spec.md §6 XOR schema).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FormattedValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Display for FormattedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormattedValue::Int(v) => write!(f, "{v}"),
            FormattedValue::Float(v) => write!(f, "{v}"),
            FormattedValue::Text(v) => write!(f, "{v}"),
        }
    }
}

impl FormattedValue {
    /// The textual form, whatever the underlying variant — used when a value kind's parser
    /// expects a string-shaped input regardless of how the value arrived from JSON/YAML (a bare
    /// number is valid JSON for `formatted_value` but our parsers work from text).
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

// --- format_value / parse_value --------------------------------------------------------------

/// Convert raw payload bytes to a human-editable [FormattedValue] for the given kind.
pub fn format_value(kind: ValueKind, bytes: &[u8]) -> Result<FormattedValue, Error> {
    match kind {
        ValueKind::Uint8 => format_uint(bytes, 1).map(FormattedValue::Int),
        ValueKind::Uint16 => format_uint(bytes, 2).map(FormattedValue::Int),
        ValueKind::Uint32 => format_uint(bytes, 4).map(FormattedValue::Int),
        ValueKind::Uint64 => format_uint(bytes, 8).map(FormattedValue::Int),
        ValueKind::Int8 => format_int(bytes, 1).map(FormattedValue::Int),
        ValueKind::Int16 => format_int(bytes, 2).map(FormattedValue::Int),
        ValueKind::Int32 => format_int(bytes, 4).map(FormattedValue::Int),
        ValueKind::Boolean => format_boolean(bytes).map(FormattedValue::Int),
        ValueKind::Ipv4 => format_ipv4(bytes).map(FormattedValue::Text),
        ValueKind::Ipv6 => format_ipv6(bytes).map(FormattedValue::Text),
        ValueKind::MacAddress => format_mac(bytes).map(FormattedValue::Text),
        ValueKind::Frequency => format_unit_value(bytes, kind, &FREQUENCY_UNITS).map(FormattedValue::Text),
        ValueKind::Bandwidth => format_unit_value(bytes, kind, &BANDWIDTH_UNITS).map(FormattedValue::Text),
        ValueKind::Duration => format_unit_value(bytes, kind, &DURATION_UNITS).map(FormattedValue::Text),
        ValueKind::PowerQuarterDb => format_power(bytes).map(FormattedValue::Text),
        ValueKind::Percentage => format_percentage(bytes).map(FormattedValue::Text),
        ValueKind::String => format_string(bytes).map(FormattedValue::Text),
        ValueKind::Oid => {
            let components = util::decode_oid(bytes)
                .map_err(|_| invalid_format(kind, &util::to_hex_spaced(bytes)))?;
            Ok(FormattedValue::Text(util::format_oid(&components)))
        }
        ValueKind::Asn1Der | ValueKind::Binary => Ok(FormattedValue::Text(util::to_hex_spaced(bytes))),
        ValueKind::Marker => Ok(FormattedValue::Text(String::new())),
        ValueKind::Compound => Err(Error::new(
            ErrorKind::UnknownValueKind("compound has no scalar formatted value; use subtlvs".into()),
            ErrorLocation::unknown(),
        )),
    }
}

/// Convert a human-editable [FormattedValue] back to raw payload bytes for the given kind.
pub fn parse_value(kind: ValueKind, value: &FormattedValue) -> Result<Vec<u8>, Error> {
    let text = value.as_text();
    match kind {
        ValueKind::Uint8 => parse_uint(&text, kind, 1, u8::MAX as u64),
        ValueKind::Uint16 => parse_uint(&text, kind, 2, u16::MAX as u64),
        ValueKind::Uint32 => parse_uint(&text, kind, 4, u32::MAX as u64),
        ValueKind::Uint64 => parse_uint(&text, kind, 8, u64::MAX),
        ValueKind::Int8 => parse_int(&text, kind, 1, i8::MIN as i64, i8::MAX as i64),
        ValueKind::Int16 => parse_int(&text, kind, 2, i16::MIN as i64, i16::MAX as i64),
        ValueKind::Int32 => parse_int(&text, kind, 4, i32::MIN as i64, i32::MAX as i64),
        ValueKind::Boolean => parse_boolean(&text, kind),
        ValueKind::Ipv4 => parse_ipv4(&text, kind),
        ValueKind::Ipv6 => parse_ipv6(&text, kind),
        ValueKind::MacAddress => parse_mac(&text, kind),
        ValueKind::Frequency => parse_unit_value(&text, kind, &FREQUENCY_UNITS).map(|v| (v as u32).to_be_bytes().to_vec()),
        ValueKind::Bandwidth => parse_unit_value(&text, kind, &BANDWIDTH_UNITS).map(|v| (v as u32).to_be_bytes().to_vec()),
        ValueKind::Duration => parse_unit_value(&text, kind, &DURATION_UNITS).map(|v| (v as u32).to_be_bytes().to_vec()),
        ValueKind::PowerQuarterDb => parse_power(&text, kind),
        ValueKind::Percentage => parse_percentage(&text, kind),
        ValueKind::String => Ok(text.into_bytes()),
        ValueKind::Oid => {
            let components = util::parse_oid(&text).map_err(|_| invalid_format(kind, &text))?;
            util::encode_oid(&components).map_err(|_| invalid_format(kind, &text))
        }
        ValueKind::Asn1Der | ValueKind::Binary => {
            util::from_hex_spaced(&text).map_err(|_| invalid_format(kind, &text))
        }
        ValueKind::Marker => Ok(Vec::new()),
        ValueKind::Compound => Err(Error::new(
            ErrorKind::UnknownValueKind("compound has no scalar formatted value; use subtlvs".into()),
            ErrorLocation::unknown(),
        )),
    }
}

fn invalid_format(kind: ValueKind, input: &str) -> Error {
    Error::new(
        ErrorKind::InvalidFormat {
            kind,
            input: input.to_string(),
        },
        ErrorLocation::unknown(),
    )
}

fn length_mismatch(kind: ValueKind, expected: usize, actual: usize) -> Error {
    Error::new(
        ErrorKind::LengthMismatch {
            kind,
            expected: expected.to_string(),
            actual,
        },
        ErrorLocation::unknown(),
    )
}

// --- integers ------------------------------------------------------------------------------------

fn format_uint(bytes: &[u8], width: usize) -> Result<i64, Error> {
    if bytes.len() != width {
        return Err(length_mismatch(kind_for_uint_width(width), width, bytes.len()));
    }
    let mut buf = [0u8; 8];
    buf[8 - width..].copy_from_slice(bytes);
    Ok(u64::from_be_bytes(buf) as i64)
}

fn format_int(bytes: &[u8], width: usize) -> Result<i64, Error> {
    if bytes.len() != width {
        return Err(length_mismatch(kind_for_int_width(width), width, bytes.len()));
    }
    let sign_fill = if bytes[0] & 0x80 != 0 { 0xFFu8 } else { 0x00u8 };
    let mut buf = [sign_fill; 8];
    buf[8 - width..].copy_from_slice(bytes);
    Ok(i64::from_be_bytes(buf))
}

fn kind_for_uint_width(width: usize) -> ValueKind {
    match width {
        1 => ValueKind::Uint8,
        2 => ValueKind::Uint16,
        4 => ValueKind::Uint32,
        _ => ValueKind::Uint64,
    }
}

fn kind_for_int_width(width: usize) -> ValueKind {
    match width {
        1 => ValueKind::Int8,
        2 => ValueKind::Int16,
        _ => ValueKind::Int32,
    }
}

fn parse_uint(text: &str, kind: ValueKind, width: usize, max: u64) -> Result<Vec<u8>, Error> {
    let v: u64 = text.trim().parse().map_err(|_| invalid_format(kind, text))?;
    if v > max {
        return Err(Error::new(
            ErrorKind::ValueOutOfRange {
                kind,
                value: text.to_string(),
                bound: format!("0..={max}"),
            },
            ErrorLocation::unknown(),
        ));
    }
    Ok(v.to_be_bytes()[8 - width..].to_vec())
}

fn parse_int(text: &str, kind: ValueKind, width: usize, min: i64, max: i64) -> Result<Vec<u8>, Error> {
    let v: i64 = text.trim().parse().map_err(|_| invalid_format(kind, text))?;
    if v < min || v > max {
        return Err(Error::new(
            ErrorKind::ValueOutOfRange {
                kind,
                value: text.to_string(),
                bound: format!("{min}..={max}"),
            },
            ErrorLocation::unknown(),
        ));
    }
    Ok(v.to_be_bytes()[8 - width..].to_vec())
}

// --- boolean ------------------------------------------------------------------------------------

fn format_boolean(bytes: &[u8]) -> Result<i64, Error> {
    if bytes.len() != 1 {
        return Err(length_mismatch(ValueKind::Boolean, 1, bytes.len()));
    }
    match bytes[0] {
        0 => Ok(0),
        1 => Ok(1),
        other => Err(Error::new(
            ErrorKind::ValueOutOfRange {
                kind: ValueKind::Boolean,
                value: other.to_string(),
                bound: "0 or 1".into(),
            },
            ErrorLocation::unknown(),
        )),
    }
}

fn parse_boolean(text: &str, kind: ValueKind) -> Result<Vec<u8>, Error> {
    match text.trim().to_ascii_lowercase().as_str() {
        "0" | "false" | "disabled" => Ok(vec![0]),
        "1" | "true" | "enabled" => Ok(vec![1]),
        _ => Err(invalid_format(kind, text)),
    }
}

// --- ipv4 / ipv6 / mac ---------------------------------------------------------------------------

fn format_ipv4(bytes: &[u8]) -> Result<String, Error> {
    if bytes.len() != 4 {
        return Err(length_mismatch(ValueKind::Ipv4, 4, bytes.len()));
    }
    Ok(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]).to_string())
}

fn parse_ipv4(text: &str, kind: ValueKind) -> Result<Vec<u8>, Error> {
    text.trim()
        .parse::<Ipv4Addr>()
        .map(|a| a.octets().to_vec())
        .map_err(|_| invalid_format(kind, text))
}

fn format_ipv6(bytes: &[u8]) -> Result<String, Error> {
    if bytes.len() != 16 {
        return Err(length_mismatch(ValueKind::Ipv6, 16, bytes.len()));
    }
    let mut octets = [0u8; 16];
    octets.copy_from_slice(bytes);
    Ok(Ipv6Addr::from(octets).to_string())
}

fn parse_ipv6(text: &str, kind: ValueKind) -> Result<Vec<u8>, Error> {
    text.trim()
        .parse::<Ipv6Addr>()
        .map(|a| a.octets().to_vec())
        .map_err(|_| invalid_format(kind, text))
}

fn format_mac(bytes: &[u8]) -> Result<String, Error> {
    if bytes.len() != 6 {
        return Err(length_mismatch(ValueKind::MacAddress, 6, bytes.len()));
    }
    Ok(bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(":"))
}

fn parse_mac(text: &str, kind: ValueKind) -> Result<Vec<u8>, Error> {
    let parts: Vec<&str> = text
        .trim()
        .split(|c| c == ':' || c == '-' || c == '.')
        .collect();
    if parts.len() != 6 {
        return Err(invalid_format(kind, text));
    }
    let mut out = Vec::with_capacity(6);
    for part in parts {
        let b = u8::from_str_radix(part, 16).map_err(|_| invalid_format(kind, text))?;
        out.push(b);
    }
    Ok(out)
}

// --- unit-bearing kinds: frequency, bandwidth, duration --------------------------------------

/// `(unit name, multiplier relative to the base unit)`, checked longest-name-first so e.g.
/// "mhz" doesn't get shadowed by a hypothetical "m" prefix.
type UnitTable = [(&'static str, f64); 4];

const FREQUENCY_UNITS: UnitTable = [("hz", 1.0), ("khz", 1e3), ("mhz", 1e6), ("ghz", 1e9)];
const BANDWIDTH_UNITS: UnitTable = [("bps", 1.0), ("kbps", 1e3), ("mbps", 1e6), ("gbps", 1e9)];
const DURATION_UNITS: UnitTable = [("s", 1.0), ("sec", 1.0), ("min", 60.0), ("h", 3600.0)];

fn format_unit_value(bytes: &[u8], kind: ValueKind, units: &UnitTable) -> Result<String, Error> {
    if bytes.len() != 4 {
        return Err(length_mismatch(kind, 4, bytes.len()));
    }
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    let base = u32::from_be_bytes(buf) as f64;

    // Pick the largest unit whose multiplier divides the value exactly, so the canonical form
    // is both unit-bearing and carries no rounding error (spec.md §4.3: "the formatted
    // representation must be unit-bearing, otherwise scale is lost").
    let mut best: Option<(&str, f64)> = None;
    for &(name, mult) in units.iter() {
        if mult <= 1.0 {
            continue;
        }
        if base != 0.0 && (base / mult).fract() == 0.0 {
            if best.map_or(true, |(_, best_mult)| mult > best_mult) {
                best = Some((name, mult));
            }
        }
    }

    match best {
        Some((name, mult)) => Ok(format!("{} {}", (base / mult) as i64, display_unit(name))),
        None => Ok(format!("{} {}", base as i64, display_unit(units[0].0))),
    }
}

fn display_unit(name: &str) -> &'static str {
    match name {
        "hz" => "Hz",
        "khz" => "kHz",
        "mhz" => "MHz",
        "ghz" => "GHz",
        "bps" => "bps",
        "kbps" => "Kbps",
        "mbps" => "Mbps",
        "gbps" => "Gbps",
        "s" | "sec" => "s",
        "min" => "min",
        "h" => "h",
        _ => "",
    }
}

fn parse_unit_value(text: &str, kind: ValueKind, units: &UnitTable) -> Result<f64, Error> {
    let text = text.trim();
    let split_at = text.find(|c: char| c.is_alphabetic());
    let (number_part, unit_part) = match split_at {
        Some(idx) => (text[..idx].trim(), text[idx..].trim()),
        None => (text, ""),
    };
    let number: f64 = number_part.parse().map_err(|_| invalid_format(kind, text))?;
    if unit_part.is_empty() {
        return Ok(number);
    }
    let unit_lower = unit_part.to_ascii_lowercase();
    for &(name, mult) in units.iter() {
        if unit_lower == name {
            return Ok(number * mult);
        }
    }
    Err(invalid_format(kind, text))
}

// --- power ---------------------------------------------------------------------------------------

/// Power is carried as a one-byte signed value in units of a quarter dBmV (spec.md §4.3
/// `power_quarter_db`).
fn format_power(bytes: &[u8]) -> Result<String, Error> {
    if bytes.len() != 1 {
        return Err(length_mismatch(ValueKind::PowerQuarterDb, 1, bytes.len()));
    }
    let raw = bytes[0] as i8;
    Ok(format!("{:.2} dBmV", raw as f64 / 4.0))
}

fn parse_power(text: &str, kind: ValueKind) -> Result<Vec<u8>, Error> {
    let text = text.trim();
    let number_part = text.strip_suffix("dBmV").map(str::trim).unwrap_or(text);
    let db: f64 = number_part.parse().map_err(|_| invalid_format(kind, text))?;
    let quarter = (db * 4.0).round();
    if !(i8::MIN as f64..=i8::MAX as f64).contains(&quarter) {
        return Err(Error::new(
            ErrorKind::ValueOutOfRange {
                kind,
                value: text.to_string(),
                bound: format!("{}..={} dBmV", i8::MIN as f64 / 4.0, i8::MAX as f64 / 4.0),
            },
            ErrorLocation::unknown(),
        ));
    }
    Ok(vec![quarter as i8 as u8])
}

// --- percentage ---------------------------------------------------------------------------------

fn format_percentage(bytes: &[u8]) -> Result<String, Error> {
    if bytes.len() != 1 {
        return Err(length_mismatch(ValueKind::Percentage, 1, bytes.len()));
    }
    Ok(format!("{} %", bytes[0]))
}

fn parse_percentage(text: &str, kind: ValueKind) -> Result<Vec<u8>, Error> {
    let number_part = text.trim().strip_suffix('%').map(str::trim).unwrap_or(text.trim());
    let v: u32 = number_part.parse().map_err(|_| invalid_format(kind, text))?;
    if v > 100 {
        return Err(Error::new(
            ErrorKind::ValueOutOfRange {
                kind,
                value: text.to_string(),
                bound: "0..=100".into(),
            },
            ErrorLocation::unknown(),
        ));
    }
    Ok(vec![v as u8])
}

// --- string -------------------------------------------------------------------------------------

fn format_string(bytes: &[u8]) -> Result<String, Error> {
    // Tolerate legacy encoders that NUL-terminate/pad text fields; the formatted value never
    // carries the terminator (spec.md §4.3: "same text (no NUL appended)").
    let trimmed = match bytes.iter().position(|&b| b == 0) {
        Some(idx) => &bytes[..idx],
        None => bytes,
    };
    String::from_utf8(trimmed.to_vec()).map_err(|_| invalid_format(ValueKind::String, &util::to_hex_spaced(bytes)))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn round_trip(kind: ValueKind, bytes: Vec<u8>) {
        let formatted = format_value(kind, &bytes).unwrap();
        let back = parse_value(kind, &formatted).unwrap();
        assert_eq!(back, bytes, "round-trip failed for {kind} with formatted {formatted:?}");
    }

    #[test]
    fn uint_round_trips() {
        round_trip(ValueKind::Uint8, vec![200]);
        round_trip(ValueKind::Uint16, vec![0x12, 0x34]);
        round_trip(ValueKind::Uint32, vec![0x01, 0x02, 0x03, 0x04]);
        round_trip(ValueKind::Uint64, vec![0, 0, 0, 0, 0, 0, 0, 42]);
    }

    #[test]
    fn int_round_trips() {
        round_trip(ValueKind::Int8, vec![0xFF]); // -1
        round_trip(ValueKind::Int16, vec![0xFF, 0xFE]); // -2
        round_trip(ValueKind::Int32, vec![0xFF, 0xFF, 0xFF, 0xFF]); // -1
    }

    #[test]
    fn boolean_round_trips_and_rejects_out_of_range() {
        round_trip(ValueKind::Boolean, vec![0]);
        round_trip(ValueKind::Boolean, vec![1]);
        assert!(format_value(ValueKind::Boolean, &[2]).is_err());
    }

    #[test]
    fn frequency_s2_scenario() {
        // spec.md S2: bytes 23 39 F1 C0 == 591,000,000 Hz == "591 MHz"
        let bytes = vec![0x23, 0x39, 0xF1, 0xC0];
        let formatted = format_value(ValueKind::Frequency, &bytes).unwrap();
        assert_matches!(&formatted, FormattedValue::Text(s) if s == "591 MHz");
        assert_eq!(parse_value(ValueKind::Frequency, &formatted).unwrap(), bytes);
    }

    #[test]
    fn frequency_accepts_fractional_ghz_input() {
        let v = parse_unit_value("1.2 GHz", ValueKind::Frequency, &FREQUENCY_UNITS).unwrap();
        assert_eq!(v as u64, 1_200_000_000);
    }

    #[test]
    fn frequency_accepts_unitless_hz() {
        let bytes = 591_000_000u32.to_be_bytes().to_vec();
        let formatted = FormattedValue::Text("591000000".into());
        assert_eq!(parse_value(ValueKind::Frequency, &formatted).unwrap(), bytes);
    }

    #[test]
    fn ipv4_round_trips() {
        round_trip(ValueKind::Ipv4, vec![192, 168, 0, 1]);
    }

    #[test]
    fn ipv6_round_trips() {
        round_trip(ValueKind::Ipv6, vec![0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn mac_round_trips() {
        round_trip(ValueKind::MacAddress, vec![0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn mac_accepts_dashed_input() {
        let parsed = parse_mac("AA-BB-CC-DD-EE-FF", ValueKind::MacAddress).unwrap();
        assert_eq!(parsed, vec![0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn power_round_trips() {
        // +10.00 dBmV -> 40 quarter-dB units
        round_trip(ValueKind::PowerQuarterDb, vec![40]);
    }

    #[test]
    fn percentage_round_trips_and_rejects_over_100() {
        round_trip(ValueKind::Percentage, vec![42]);
        assert!(format_value(ValueKind::Percentage, &[101]).is_err());
    }

    #[test]
    fn string_has_no_added_nul() {
        let formatted = format_value(ValueKind::String, b"hello").unwrap();
        assert_eq!(formatted, FormattedValue::Text("hello".into()));
        assert_eq!(parse_value(ValueKind::String, &formatted).unwrap(), b"hello".to_vec());
    }

    #[test]
    fn string_strips_legacy_nul_padding_on_format() {
        let formatted = format_value(ValueKind::String, b"hello\0\0\0").unwrap();
        assert_eq!(formatted, FormattedValue::Text("hello".into()));
    }

    #[test]
    fn oid_round_trips() {
        let bytes = util::encode_oid(&[1, 2, 840, 113549]).unwrap();
        round_trip(ValueKind::Oid, bytes);
    }

    #[test]
    fn hex_kinds_round_trip() {
        round_trip(ValueKind::Binary, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        round_trip(ValueKind::Asn1Der, vec![0x30, 0x03, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn value_kind_parses_hex_string_alias() {
        assert_eq!("hex_string".parse::<ValueKind>().unwrap(), ValueKind::Binary);
    }

    #[test]
    fn compound_has_no_scalar_form() {
        assert!(format_value(ValueKind::Compound, &[]).is_err());
        assert!(parse_value(ValueKind::Compound, &FormattedValue::Text(String::new())).is_err());
    }
}
