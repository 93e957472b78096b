//! Information about a codec, value, spec or validation failure and the location at which it
//! occurred.

use std::fmt::{Debug, Display};

use crate::types::{ByteOffset, TlvPath};
use crate::value::ValueKind;

pub type Result<T> = std::result::Result<T, Error>;

// --- Error ------------------------------------------------------------------------------------

/// Details of a failure and the location in the data where the problem occurred.
///
/// An error consists of an [ErrorKind] that identifies the kind of error that occurred, an
/// [ErrorLocation] describing where in the data the problem occurred, and an optional
/// human-readable remediation hint (spec.md §7 requires "at least one remediation hint" in
/// user-visible error messages).
#[derive(Debug)]
#[non_exhaustive]
pub struct Error {
    kind: ErrorKind,
    location: ErrorLocation,
    hint: Option<String>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, location: ErrorLocation) -> Self {
        Self {
            kind,
            location,
            hint: None,
        }
    }

    pub(crate) fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get details about the kind of error that occurred.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Get details about where in the data the error occurred.
    pub fn location(&self) -> &ErrorLocation {
        &self.location
    }

    /// A suggested remediation, if one is available.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub(crate) fn pinpoint<T, L>(error: T, location: L) -> Self
    where
        ErrorKind: From<T>,
        ErrorLocation: From<L>,
    {
        Self {
            kind: error.into(),
            location: location.into(),
            hint: None,
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at {})", self.kind, self.location)?;
        if let Some(hint) = &self.hint {
            write!(f, " — {hint}")?;
        }
        Ok(())
    }
}

// --- ErrorKind --------------------------------------------------------------------------------

/// The closed set of error kinds raised by this crate (spec.md §7).
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    // --- Parse errors ---
    InsufficientData { needed: usize, available: usize },
    LengthExceedsRemaining { declared: u64, remaining: usize },
    InvalidLength,
    UnknownLengthForm(u8),
    NestingTooDeep { max_depth: u32 },
    InvalidTerminator,

    // --- Value errors ---
    ValueOutOfRange {
        kind: ValueKind,
        value: String,
        bound: String,
    },
    InvalidFormat {
        kind: ValueKind,
        input: String,
    },
    LengthMismatch {
        kind: ValueKind,
        expected: String,
        actual: usize,
    },
    UnknownValueKind(String),

    // --- Spec errors ---
    UnknownTlv { r#type: u8, path: TlvPath },
    VersionMismatch {
        r#type: u8,
        introduced: crate::types::Version,
        target: crate::types::Version,
    },

    // --- Structural errors ---
    DuplicateSingleton { r#type: u8, path: TlvPath },
    MissingRequired { r#type: u8, path: TlvPath, name: &'static str },
    SubflowInconsistent { reason: String, path: TlvPath },

    // --- MIC (carried opaquely; raised only if an external validator supplies crypto) ---
    InvalidCmMic,
    InvalidCmtsMic,

    // --- I/O-adjacent (boundary only) ---
    FileNotFound(String),
    UnsupportedFormat(String),

    // --- ASN.1 / BER ---
    InvalidBerTag(u8),
    InvalidBerLength,
    Asn1NestingTooDeep { max_depth: u32 },
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InsufficientData { needed, available } => write!(
                f,
                "insufficient data: needed {needed} bytes, {available} available"
            ),
            ErrorKind::LengthExceedsRemaining { declared, remaining } => write!(
                f,
                "declared length {declared} exceeds {remaining} remaining bytes"
            ),
            ErrorKind::InvalidLength => write!(f, "invalid length encoding"),
            ErrorKind::UnknownLengthForm(b) => {
                write!(f, "unknown long-form length indicator 0x{b:02X}")
            }
            ErrorKind::NestingTooDeep { max_depth } => {
                write!(f, "nesting exceeds configured maximum depth of {max_depth}")
            }
            ErrorKind::InvalidTerminator => write!(f, "invalid top-level terminator"),
            ErrorKind::ValueOutOfRange { kind, value, bound } => write!(
                f,
                "value {value} for kind {kind} is out of range ({bound})"
            ),
            ErrorKind::InvalidFormat { kind, input } => {
                write!(f, "input {input:?} is not valid for value kind {kind}")
            }
            ErrorKind::LengthMismatch { kind, expected, actual } => write!(
                f,
                "value kind {kind} expects {expected} bytes, found {actual}"
            ),
            ErrorKind::UnknownValueKind(s) => write!(f, "unknown value kind {s:?}"),
            ErrorKind::UnknownTlv { r#type, path } => {
                write!(f, "unknown TLV type {type} under path {path}", type = r#type, path = path)
            }
            ErrorKind::VersionMismatch { r#type, introduced, target } => write!(
                f,
                "TLV type {type} requires DOCSIS {introduced} but target version is {target}",
                type = r#type,
                introduced = introduced,
                target = target
            ),
            ErrorKind::DuplicateSingleton { r#type, path } => {
                write!(f, "duplicate singleton TLV type {type} under path {path}", type = r#type, path = path)
            }
            ErrorKind::MissingRequired { r#type, path, name } => write!(
                f,
                "required TLV type {type} ({name}) missing under path {path}",
                type = r#type,
                name = name,
                path = path
            ),
            ErrorKind::SubflowInconsistent { reason, path } => {
                write!(f, "service flow inconsistency under path {path}: {reason}")
            }
            ErrorKind::InvalidCmMic => write!(f, "invalid CM MIC"),
            ErrorKind::InvalidCmtsMic => write!(f, "invalid CMTS MIC"),
            ErrorKind::FileNotFound(p) => write!(f, "file not found: {p}"),
            ErrorKind::UnsupportedFormat(p) => write!(f, "unsupported file format: {p}"),
            ErrorKind::InvalidBerTag(t) => write!(f, "invalid BER tag 0x{t:02X}"),
            ErrorKind::InvalidBerLength => write!(f, "invalid BER length encoding"),
            ErrorKind::Asn1NestingTooDeep { max_depth } => write!(
                f,
                "ASN.1 nesting exceeds configured maximum depth of {max_depth}"
            ),
        }
    }
}

// --- ErrorLocation ------------------------------------------------------------------------------

/// Details about where in the data an error occurred: a byte offset, and/or an ancestor TLV
/// path, mirroring `kmip-ttlv::error::ErrorLocation`'s offset + parent-tags design.
#[derive(Clone, Debug, Default)]
pub struct ErrorLocation {
    offset: Option<ByteOffset>,
    path: TlvPath,
}

impl ErrorLocation {
    pub(crate) fn at(offset: ByteOffset) -> Self {
        Self {
            offset: Some(offset),
            path: TlvPath::default(),
        }
    }

    pub(crate) fn unknown() -> Self {
        Self::default()
    }

    pub(crate) fn with_offset(mut self, offset: ByteOffset) -> Self {
        self.offset.get_or_insert(offset);
        self
    }

    pub(crate) fn with_path(mut self, path: TlvPath) -> Self {
        if self.path.is_empty() {
            self.path = path;
        }
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.offset.is_none() && self.path.is_empty()
    }

    pub fn offset(&self) -> Option<ByteOffset> {
        self.offset
    }

    pub fn path(&self) -> &TlvPath {
        &self.path
    }
}

impl From<ByteOffset> for ErrorLocation {
    fn from(offset: ByteOffset) -> Self {
        ErrorLocation::at(offset)
    }
}

impl From<u64> for ErrorLocation {
    fn from(offset: u64) -> Self {
        ErrorLocation::at(ByteOffset(offset))
    }
}

impl From<usize> for ErrorLocation {
    fn from(offset: usize) -> Self {
        ErrorLocation::at(ByteOffset(offset as u64))
    }
}

impl From<TlvPath> for ErrorLocation {
    fn from(path: TlvPath) -> Self {
        Self { offset: None, path }
    }
}

impl Display for ErrorLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unknown() {
            return f.write_str("unknown");
        }
        let mut sep = "";
        if let Some(offset) = self.offset {
            write!(f, "{sep}byte offset {}", *offset)?;
            sep = ", ";
        }
        if !self.path.is_empty() {
            write!(f, "{sep}path {}", self.path)?;
        }
        Ok(())
    }
}
