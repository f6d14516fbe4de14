//! Single-pass streaming JSON structural validator.
//!
//! `jsonvet` decides whether a byte buffer conforms to the JSON grammar
//! without building any value representation: one left-to-right pass, one
//! reusable container stack, no per-document allocation on the scanning
//! path. On success there is no payload; on failure the error carries a
//! stable diagnostic code and the byte offset of the first defect.
//!
//! Two optional well-formedness rules go beyond the grammar: requiring a
//! single top-level object ([`ValidateOptions::expect_document`]) and
//! rejecting duplicate object keys (on by default, compared as raw key
//! bytes; see [`ValidateOptions::allow_duplicate_keys`]).
//!
//! # Example: validate some bytes
//!
//! ```rust
//! use jsonvet::{Parser, ValidateOptions};
//!
//! let parser = Parser::new(0);
//! parser
//!     .validate(r#"["I", "am", "valid", "JSON", 34.632e+2]"#, ValidateOptions::default())
//!     .unwrap();
//! ```
//!
//! # Example: diagnose a defect
//!
//! ```rust
//! use jsonvet::{ErrorKind, Parser, ValidateOptions};
//!
//! let parser = Parser::new(0);
//! let err = parser
//!     .validate(r#"{"x":123.23.2}"#, ValidateOptions::default())
//!     .unwrap_err();
//! assert_eq!((err.kind, err.offset), (ErrorKind::BadNumber, 11));
//! ```
//!
//! # Example: compact in place
//!
//! Compaction validates and simultaneously strips insignificant whitespace,
//! writing strictly behind the read position in the same buffer:
//!
//! ```rust
//! use jsonvet::Parser;
//!
//! let parser = Parser::new(0);
//! let mut buf = br#" { "foo" : [ 1 , true ] } "#.to_vec();
//! let compacted = parser.validate_compact(&mut buf).unwrap();
//! assert_eq!(compacted, br#"{"foo":[1,true]}"#);
//! ```
//!
//! Validation is CPU-bound over a contiguous buffer; there is no I/O and no
//! suspension point. A [`Parser`] is cheaply shared across threads: each
//! call borrows a private stack from an internally synchronized pool and
//! returns it on every exit path.

mod error;
mod options;
mod pool;
mod scanner;
mod stack;
mod validator;

pub use error::{ErrorKind, ValidateError};
pub use options::ValidateOptions;
pub use pool::{DEFAULT_MAX_RETAINED_FRAMES, PooledStack, StackPool};
pub use stack::{ContainerKind, Stack};
pub use validator::Parser;

#[cfg(test)]
mod tests;
