//! Scanner primitives: each advances a read position over one lexical
//! category and nothing else. The engine composes them and owns all
//! structural decisions.
//!
//! Positions are byte indices into the full input. String scanners return
//! bare [`ErrorKind`]s; the engine anchors them to the opening quote of the
//! string being scanned. The number scanner reports its own offsets since
//! the offending byte may sit anywhere inside the token.

use crate::error::ErrorKind;

/// Advances past the JSON whitespace bytes: space, tab, line feed, carriage
/// return. No other byte is whitespace.
pub(crate) fn skip_ws(buf: &[u8], mut pos: usize) -> usize {
    while let Some(b' ' | b'\t' | b'\n' | b'\r') = buf.get(pos) {
        pos += 1;
    }
    pos
}

/// Scans an object key starting just past its opening `"`.
///
/// Returns the index of the closing quote; the key is `buf[start..end]`.
/// Fast path: a key without escapes is a plain byte run. On the first
/// backslash the scan falls through to [`scan_string`] from that byte, so
/// escaped keys pay the full escape validation exactly once.
pub(crate) fn scan_key(buf: &[u8], start: usize) -> Result<usize, ErrorKind> {
    let mut pos = start;
    while let Some(&b) = buf.get(pos) {
        match b {
            b'"' => return Ok(pos),
            b'\\' => return scan_string(buf, pos),
            _ => pos += 1,
        }
    }
    Err(ErrorKind::UnterminatedString)
}

/// Scans a string body starting just past its opening `"`, validating every
/// escape sequence on the way.
///
/// Accepted escapes are the JSON set: `" \ / b f n r t` and `u` followed by
/// exactly four hex digits. Returns the index of the closing quote.
pub(crate) fn scan_string(buf: &[u8], start: usize) -> Result<usize, ErrorKind> {
    let mut pos = start;
    loop {
        match buf.get(pos) {
            None => return Err(ErrorKind::UnterminatedString),
            Some(b'"') => return Ok(pos),
            Some(b'\\') => pos = scan_escape(buf, pos + 1)?,
            Some(_) => pos += 1,
        }
    }
}

/// Validates one escape sequence; `pos` is the byte after the backslash.
/// Returns the position just past the sequence.
fn scan_escape(buf: &[u8], pos: usize) -> Result<usize, ErrorKind> {
    match buf.get(pos) {
        Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => Ok(pos + 1),
        Some(b'u') => match buf.get(pos + 1..pos + 5) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => Ok(pos + 5),
            _ => Err(ErrorKind::BadEscape),
        },
        // Unknown escape character, or a backslash with nothing after it.
        Some(_) | None => Err(ErrorKind::BadEscape),
    }
}

/// Locates the closing `"` of a string without validating escapes.
///
/// A quote only closes the string when preceded by an even number of
/// consecutive backslashes; skipping the byte after each backslash encodes
/// exactly that rule. [`scan_string`] must agree with this on where every
/// well-escaped string terminates.
#[allow(dead_code)]
pub(crate) fn scan_raw_string(buf: &[u8], start: usize) -> Result<usize, ErrorKind> {
    let mut pos = start;
    loop {
        match buf.get(pos) {
            None => return Err(ErrorKind::UnterminatedString),
            Some(b'"') => return Ok(pos),
            Some(b'\\') => {
                if pos + 1 >= buf.len() {
                    return Err(ErrorKind::UnterminatedString);
                }
                pos += 2;
            }
            Some(_) => pos += 1,
        }
    }
}

/// Scans a number starting at its first byte (`-` or a digit).
///
/// Grammar: optional `-`; integer part `0` or nonzero digit followed by
/// digits; optional `.` plus at least one digit; optional `e`/`E`, optional
/// sign, at least one digit. The terminator is never consumed. A `.` or
/// exponent marker without a following digit is not consumed either; it is
/// reported as the offending byte, as is a digit continuing a leading-zero
/// integer part or a second fraction/exponent.
pub(crate) fn scan_number(buf: &[u8], start: usize) -> Result<usize, (ErrorKind, usize)> {
    let mut pos = start;
    if let Some(b'-') = buf.get(pos) {
        pos += 1;
    }
    match buf.get(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => pos = skip_digits(buf, pos + 1),
        // Lone minus, or a minus followed by a non-digit.
        Some(_) | None => return Err((ErrorKind::BadNumber, pos)),
    }
    if buf.get(pos) == Some(&b'.') && matches!(buf.get(pos + 1), Some(b'0'..=b'9')) {
        pos = skip_digits(buf, pos + 2);
    }
    if let Some(b'e' | b'E') = buf.get(pos) {
        let mut digits = pos + 1;
        if let Some(b'+' | b'-') = buf.get(digits) {
            digits += 1;
        }
        if matches!(buf.get(digits), Some(b'0'..=b'9')) {
            pos = skip_digits(buf, digits + 1);
        }
    }
    // Anything that would extend the number further is a grammar violation:
    // a digit after a leading zero, a second fraction, a bare marker.
    match buf.get(pos) {
        Some(b'0'..=b'9' | b'.' | b'e' | b'E') => Err((ErrorKind::BadNumber, pos)),
        _ => Ok(pos),
    }
}

fn skip_digits(buf: &[u8], mut pos: usize) -> usize {
    while matches!(buf.get(pos), Some(b'0'..=b'9')) {
        pos += 1;
    }
    pos
}
