/// Configuration options for a single validation call.
///
/// These options only tighten or relax structural rules; they never change
/// how the input is scanned.
///
/// # Examples
///
/// ```rust
/// use jsonvet::{Parser, ValidateOptions};
///
/// let parser = Parser::new(0);
/// let options = ValidateOptions {
///     expect_document: true,
///     ..Default::default()
/// };
/// assert!(parser.validate(r#"{"id": 7}"#, options).is_ok());
/// assert!(parser.validate("7", options).is_err());
/// ```
///
/// # Default
///
/// All options default to `false`: any single JSON value is accepted at the
/// top level, and duplicate object keys are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Whether to require the top-level value to be an object.
    ///
    /// When `true`, the first significant byte must be `{` and the whole
    /// input is validated as a single JSON object. When `false`, any JSON
    /// value is accepted at the top level, including a whitespace-separated
    /// sequence of values.
    ///
    /// # Default
    ///
    /// `false`
    pub expect_document: bool,

    /// Whether repeated keys within the same object are accepted.
    ///
    /// When `false`, the second occurrence of a key fails with
    /// [`ErrorKind::DuplicateKey`]. Keys are compared as the raw bytes that
    /// appear in the input, before any escape expansion, so a key spelled
    /// with the sequence `\u0041` is distinct from one spelled with a
    /// literal `A`. When `true`, repeats are accepted and each occurrence
    /// still counts as an object member; every other key rule (non-empty,
    /// no raw control bytes, valid escapes) continues to apply.
    ///
    /// [`ErrorKind::DuplicateKey`]: crate::ErrorKind::DuplicateKey
    ///
    /// # Default
    ///
    /// `false`
    pub allow_duplicate_keys: bool,
}
