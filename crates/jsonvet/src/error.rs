use thiserror::Error;

/// Classifies the first defect observed while scanning a document.
///
/// Each kind maps to a stable numeric debug code (see [`ErrorKind::debug_code`]).
/// The codes are part of the public contract: they never change meaning between
/// releases, so callers may log or assert on them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input exhausted before any value began.
    #[error("empty input")]
    EmptyInput = 1,
    /// Document mode requires the top-level value to be an object.
    #[error("expected top-level object")]
    ExpectedObject = 2,
    /// Input exhausted while at least one container was still open.
    #[error("unterminated container")]
    UnterminatedContainer = 3,
    /// A `}` or `]` with no matching opener.
    #[error("stray container terminator")]
    StrayTerminator = 4,
    /// A value follows another value without an intervening `,`.
    #[error("missing separator")]
    MissingSeparator = 5,
    /// An object member does not start with `"`.
    #[error("expected object key")]
    ExpectedKey = 6,
    /// An object key is not followed by `:`.
    #[error("missing colon after key")]
    MissingColon = 7,
    /// A `,` at the top level, or trailing before a container terminator.
    #[error("stray comma")]
    StrayComma = 8,
    /// The byte at a value position starts no JSON value.
    #[error("unexpected value token")]
    UnexpectedValueToken = 9,
    /// A `t`, `f` or `n` leader whose completion is not `true`/`false`/`null`.
    #[error("malformed literal")]
    BadLiteral = 10,
    /// An unknown escape character, or a truncated/non-hex `\u` sequence.
    #[error("invalid escape sequence")]
    BadEscape = 11,
    /// Input exhausted before the closing `"` of a string.
    #[error("unterminated string")]
    UnterminatedString = 12,
    /// The number grammar was violated.
    #[error("malformed number")]
    BadNumber = 13,
    /// An object key of zero length.
    #[error("empty object key")]
    EmptyKey = 14,
    /// A raw byte below 0x20 inside an object key.
    #[error("control character in object key")]
    ControlCharInKey = 15,
    /// A key repeated within the same object while duplicates are rejected.
    #[error("duplicate object key")]
    DuplicateKey = 16,
}

impl ErrorKind {
    /// The stable numeric code for this kind. Zero is reserved for success
    /// and is never produced.
    #[must_use]
    pub const fn debug_code(self) -> u8 {
        self as u8
    }
}

/// A validation failure: what went wrong and where.
///
/// `offset` is a byte index into the input. Most kinds point at the offending
/// byte itself; string-related kinds point at the opening quote of the string
/// in which the defect was found, and end-of-input kinds report the input
/// length. See the per-variant docs on [`ErrorKind`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ValidateError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl ValidateError {
    pub(crate) const fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_codes_are_stable() {
        assert_eq!(ErrorKind::EmptyInput.debug_code(), 1);
        assert_eq!(ErrorKind::StrayComma.debug_code(), 8);
        assert_eq!(ErrorKind::DuplicateKey.debug_code(), 16);
    }

    #[test]
    fn display_includes_offset() {
        let err = ValidateError::new(ErrorKind::BadNumber, 11);
        assert_eq!(err.to_string(), "malformed number at offset 11");
    }
}
