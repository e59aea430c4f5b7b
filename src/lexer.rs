//! PDF string lexing.
//!
//! Just enough PDF syntax to lift string values out of a signature
//! dictionary: literal strings `(...)` with balanced parentheses and escape
//! sequences, and hexadecimal strings `<...>`. There is no object parser
//! behind this; callers locate a key such as `/Name` or `/Contents` with a
//! byte search and hand the bytes that follow to [`string_value`].

use crate::error::{Error, Result};
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::char,
    combinator::map,
    sequence::{delimited, preceded},
    IResult,
};

/// Raw string token. Escapes and hex digits are not yet decoded.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PdfString<'a> {
    /// Content of a literal string, between the outer parentheses
    Literal(&'a [u8]),
    /// Content of a hex string, between the angle brackets
    Hex(&'a [u8]),
}

impl PdfString<'_> {
    /// Decode the token into its byte value.
    ///
    /// `offset` is only used to position decode errors.
    pub fn decode(&self, offset: usize) -> Result<Vec<u8>> {
        match self {
            PdfString::Literal(raw) => Ok(decode_literal_string_escapes(raw)),
            PdfString::Hex(raw) => decode_hex(raw, offset),
        }
    }
}

/// PDF whitespace: space, \t, \r, \n, \0, \f.
fn is_pdf_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n' | 0x00 | 0x0C)
}

/// Parse a literal string enclosed in parentheses.
///
/// Nested parentheses must balance unless escaped.
/// Examples: (Hello), (Hello (nested) World), (Open \( only)
pub fn literal_string(input: &[u8]) -> IResult<&[u8], &[u8]> {
    let (remaining, _) = char('(')(input)?;
    let mut depth = 1;
    let mut pos = 0;

    while depth > 0 && pos < remaining.len() {
        match remaining[pos] {
            b'\\' => {
                // Escaped byte; octal escapes are only digits so skipping one is enough
                pos += 2;
            },
            b'(' => {
                depth += 1;
                pos += 1;
            },
            b')' => {
                depth -= 1;
                pos += 1;
            },
            _ => {
                pos += 1;
            },
        }
    }

    if depth != 0 {
        return Err(nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag)));
    }

    Ok((&remaining[pos..], &remaining[..pos - 1]))
}

/// Parse a hexadecimal string enclosed in angle brackets.
///
/// Whitespace inside the brackets is kept for [`decode_hex`] to strip.
pub fn hex_string(input: &[u8]) -> IResult<&[u8], &[u8]> {
    // Must not be a dictionary start (<<)
    if input.starts_with(b"<<") {
        return Err(nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag)));
    }

    delimited(
        char('<'),
        take_while(|c: u8| c.is_ascii_hexdigit() || is_pdf_whitespace(c)),
        char('>'),
    )(input)
}

/// Parse a string value, skipping leading whitespace.
pub fn string_value(input: &[u8]) -> IResult<&[u8], PdfString<'_>> {
    preceded(
        take_while(is_pdf_whitespace),
        alt((map(literal_string, PdfString::Literal), map(hex_string, PdfString::Hex))),
    )(input)
}

/// Decode escape sequences in a PDF literal string.
///
/// Handles `\n \r \t \b \f \( \) \\`, octal `\ddd` and line continuations.
/// Unknown escapes keep their backslash.
pub fn decode_literal_string_escapes(raw: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        if raw[i] != b'\\' || i + 1 >= raw.len() {
            result.push(raw[i]);
            i += 1;
            continue;
        }

        match raw[i + 1] {
            b'n' => result.push(b'\n'),
            b'r' => result.push(b'\r'),
            b't' => result.push(b'\t'),
            b'b' => result.push(8),
            b'f' => result.push(12),
            b'(' | b')' | b'\\' => result.push(raw[i + 1]),
            b'\n' => {},
            b'\r' => {
                if raw.get(i + 2) == Some(&b'\n') {
                    i += 1;
                }
            },
            c if (b'0'..b'8').contains(&c) => {
                let digits = raw[i + 1..]
                    .iter()
                    .take(3)
                    .take_while(|d| (b'0'..b'8').contains(*d))
                    .count();
                let value = raw[i + 1..i + 1 + digits]
                    .iter()
                    .fold(0u32, |acc, d| acc * 8 + (d - b'0') as u32);
                result.push((value & 0xFF) as u8);
                i += 1 + digits;
                continue;
            },
            _ => {
                result.push(b'\\');
                i += 1;
                continue;
            },
        }
        i += 2;
    }

    result
}

/// Decode a hex string body into bytes.
///
/// Whitespace is ignored and a trailing odd nibble is dropped, so
/// `<48656C6C6F0>` decodes to `Hello`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body contains anything other than hex
/// digits and whitespace.
pub fn decode_hex(hex_bytes: &[u8], offset: usize) -> Result<Vec<u8>> {
    let mut digits: Vec<u8> = hex_bytes
        .iter()
        .filter(|&&c| !is_pdf_whitespace(c))
        .copied()
        .collect();

    if digits.len() % 2 == 1 {
        digits.pop();
    }

    hex::decode(&digits).map_err(|e| Error::Decode {
        offset,
        reason: format!("invalid hex string: {}", e),
    })
}
