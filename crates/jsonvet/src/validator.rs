//! The validation engine: a single left-to-right pass that consumes
//! whitespace, dispatches on the next significant byte, and consults the
//! container stack for every context-sensitive rule.
//!
//! Compaction runs the very same loop through the [`Sink`] seam: the
//! verbatim sink discards span notifications, the compacting sink moves
//! every significant span left over the whitespace it replaces.

use std::ops::Range;

use crate::{
    error::{ErrorKind, ValidateError},
    options::ValidateOptions,
    pool::StackPool,
    scanner::{scan_key, scan_number, scan_string, skip_ws},
    stack::{ContainerKind, Stack},
};

/// Receives the significant byte spans the engine accepts, in input order.
///
/// `bytes` is the full input at all times; compaction writes strictly
/// behind the read position, so bytes at and after the current position are
/// always unmodified input.
trait Sink {
    fn bytes(&self) -> &[u8];
    fn keep(&mut self, span: Range<usize>);
}

/// Plain validation: the input is only read.
struct Verbatim<'buf> {
    buf: &'buf [u8],
}

impl Sink for Verbatim<'_> {
    fn bytes(&self) -> &[u8] {
        self.buf
    }

    fn keep(&mut self, _span: Range<usize>) {}
}

/// In-place compaction: accepted spans slide left over stripped whitespace.
/// The write position never passes the start of a kept span, so each move
/// is a plain overlapping copy within the buffer.
struct Compacting<'buf> {
    buf: &'buf mut [u8],
    len: usize,
}

impl Sink for Compacting<'_> {
    fn bytes(&self) -> &[u8] {
        self.buf
    }

    fn keep(&mut self, span: Range<usize>) {
        debug_assert!(self.len <= span.start);
        let width = span.len();
        if span.start != self.len {
            self.buf.copy_within(span, self.len);
        }
        self.len += width;
    }
}

/// A reusable JSON structural validator.
///
/// The parser owns a synchronized [`StackPool`], so one instance may be
/// shared across threads; every call borrows a stack for its own duration
/// and returns it on all exit paths.
///
/// # Examples
///
/// ```rust
/// use jsonvet::{ErrorKind, Parser, ValidateOptions};
///
/// let parser = Parser::new(0);
/// parser
///     .validate(r#"{"a":[1, 2.5, "z", null]}"#, ValidateOptions::default())
///     .unwrap();
///
/// let err = parser
///     .validate(r#"{"a":1,"a":2}"#, ValidateOptions::default())
///     .unwrap_err();
/// assert_eq!(err.kind, ErrorKind::DuplicateKey);
/// ```
#[derive(Debug)]
pub struct Parser {
    pool: StackPool,
}

impl Parser {
    /// Creates a parser whose pool retains at most `max_retained_frames` of
    /// stack storage per released stack; zero selects the default of 65,536
    /// frames.
    #[must_use]
    pub fn new(max_retained_frames: usize) -> Self {
        Self {
            pool: StackPool::new(max_retained_frames),
        }
    }

    /// Checks that `input` is structurally valid JSON.
    ///
    /// On failure the returned error carries a stable diagnostic code and
    /// the byte offset at which the defect was observed.
    ///
    /// # Errors
    ///
    /// Returns the first defect found; scanning stops there.
    pub fn validate(
        &self,
        input: impl AsRef<[u8]>,
        options: ValidateOptions,
    ) -> Result<(), ValidateError> {
        let mut sink = Verbatim {
            buf: input.as_ref(),
        };
        let mut stack = self.pool.acquire(!options.allow_duplicate_keys);
        run(&mut sink, &mut stack, options)
    }

    /// Validates `input` while rewriting it in place with all insignificant
    /// whitespace removed, using default options.
    ///
    /// Returns the prefix of `input` holding the compacted document. On
    /// failure the buffer prefix holds whatever had been compacted before
    /// the defect; the error is authoritative.
    ///
    /// # Errors
    ///
    /// Same failure modes and diagnostics as [`validate`](Parser::validate).
    pub fn validate_compact<'buf>(
        &self,
        input: &'buf mut [u8],
    ) -> Result<&'buf [u8], ValidateError> {
        let options = ValidateOptions::default();
        let mut sink = Compacting { buf: input, len: 0 };
        let mut stack = self.pool.acquire(!options.allow_duplicate_keys);
        run(&mut sink, &mut stack, options)?;
        let Compacting { buf, len } = sink;
        Ok(&buf[..len])
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(0)
    }
}

fn err(kind: ErrorKind, offset: usize) -> ValidateError {
    ValidateError::new(kind, offset)
}

/// Drives one full pass over `sink.bytes()`.
fn run<S: Sink>(
    sink: &mut S,
    stack: &mut Stack,
    options: ValidateOptions,
) -> Result<(), ValidateError> {
    // Top-level values completed so far. Whitespace between top-level
    // values is a token separator, not insignificant, so compaction must
    // retain one byte of it.
    let mut top_values: usize = 0;
    let mut pos = skip_ws(sink.bytes(), 0);
    if pos == sink.bytes().len() {
        return Err(err(ErrorKind::EmptyInput, pos));
    }
    if options.expect_document {
        if sink.bytes()[pos] != b'{' {
            return Err(err(ErrorKind::ExpectedObject, pos));
        }
        stack.push(ContainerKind::Object);
        sink.keep(pos..pos + 1);
        pos += 1;
    }

    loop {
        pos = skip_ws(sink.bytes(), pos);
        if pos == sink.bytes().len() {
            return if stack.depth() == 0 {
                Ok(())
            } else {
                Err(err(ErrorKind::UnterminatedContainer, pos))
            };
        }

        let (kind, element_index, _) = stack.top();
        let byte = sink.bytes()[pos];
        // Whether this iteration consumed an element separator; decides
        // between a stray-comma and other diagnoses further down.
        let mut after_comma = false;

        match kind {
            Some(ContainerKind::Object) => {
                if byte == b'}' {
                    stack.pop();
                    sink.keep(pos..pos + 1);
                    pos += 1;
                    continue;
                }
                if element_index > 0 {
                    if byte != b',' {
                        return Err(err(ErrorKind::MissingSeparator, pos));
                    }
                    sink.keep(pos..pos + 1);
                    pos = skip_ws(sink.bytes(), pos + 1);
                    after_comma = true;
                }
                match sink.bytes().get(pos) {
                    Some(b'"') => {}
                    Some(b'}') if after_comma => {
                        return Err(err(ErrorKind::StrayComma, pos));
                    }
                    Some(_) => return Err(err(ErrorKind::ExpectedKey, pos)),
                    None => return Err(err(ErrorKind::UnterminatedContainer, pos)),
                }

                let quote = pos;
                let close = scan_key(sink.bytes(), quote + 1)
                    .map_err(|kind| err(kind, quote))?;
                let key = &sink.bytes()[quote + 1..close];
                if key.is_empty() {
                    return Err(err(ErrorKind::EmptyKey, quote));
                }
                if key.iter().any(|&b| b < 0x20) {
                    return Err(err(ErrorKind::ControlCharInKey, quote));
                }
                if options.allow_duplicate_keys {
                    stack.push_element();
                } else if !stack.push_field(key) {
                    return Err(err(ErrorKind::DuplicateKey, close));
                }
                sink.keep(quote..close + 1);

                pos = skip_ws(sink.bytes(), close + 1);
                match sink.bytes().get(pos) {
                    Some(b':') => {
                        sink.keep(pos..pos + 1);
                        pos += 1;
                    }
                    _ => return Err(err(ErrorKind::MissingColon, pos)),
                }
            }
            Some(ContainerKind::Array) => {
                if byte == b']' {
                    stack.pop();
                    sink.keep(pos..pos + 1);
                    pos += 1;
                    continue;
                }
                if element_index > 0 {
                    if byte != b',' {
                        return Err(err(ErrorKind::MissingSeparator, pos));
                    }
                    sink.keep(pos..pos + 1);
                    pos += 1;
                    after_comma = true;
                }
                stack.push_element();
            }
            None => {
                if byte == b',' {
                    return Err(err(ErrorKind::StrayComma, pos));
                }
                if top_values > 0
                    && matches!(sink.bytes()[pos - 1], b' ' | b'\t' | b'\n' | b'\r')
                {
                    sink.keep(pos - 1..pos);
                }
                top_values += 1;
            }
        }

        // Value position.
        pos = skip_ws(sink.bytes(), pos);
        let Some(&byte) = sink.bytes().get(pos) else {
            // Only reachable after a separator or colon, so a container is
            // necessarily open.
            return Err(err(ErrorKind::UnterminatedContainer, pos));
        };
        match byte {
            b'"' => {
                let quote = pos;
                let close = scan_string(sink.bytes(), quote + 1)
                    .map_err(|kind| err(kind, quote))?;
                sink.keep(quote..close + 1);
                pos = close + 1;
            }
            b'n' => pos = expect_literal(sink, pos, b"null")?,
            b't' => pos = expect_literal(sink, pos, b"true")?,
            b'f' => pos = expect_literal(sink, pos, b"false")?,
            b'{' => {
                stack.push(ContainerKind::Object);
                sink.keep(pos..pos + 1);
                pos += 1;
            }
            b'[' => {
                stack.push(ContainerKind::Array);
                sink.keep(pos..pos + 1);
                pos += 1;
            }
            b'-' | b'0'..=b'9' => {
                let end =
                    scan_number(sink.bytes(), pos).map_err(|(kind, at)| err(kind, at))?;
                sink.keep(pos..end);
                pos = end;
            }
            b'}' | b']' => {
                let kind = if after_comma {
                    ErrorKind::StrayComma
                } else if stack.depth() == 0 {
                    ErrorKind::StrayTerminator
                } else {
                    ErrorKind::UnexpectedValueToken
                };
                return Err(err(kind, pos));
            }
            b',' => return Err(err(ErrorKind::StrayComma, pos)),
            _ => return Err(err(ErrorKind::UnexpectedValueToken, pos)),
        }
    }
}

/// Matches one of the three JSON literals in full and keeps its span.
fn expect_literal<S: Sink>(
    sink: &mut S,
    pos: usize,
    literal: &'static [u8],
) -> Result<usize, ValidateError> {
    let end = pos + literal.len();
    if sink.bytes().get(pos..end) != Some(literal) {
        return Err(err(ErrorKind::BadLiteral, pos));
    }
    sink.keep(pos..end);
    Ok(end)
}
