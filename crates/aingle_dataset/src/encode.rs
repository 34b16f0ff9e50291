//! `ENCODE_FOR_URI`: percent-encoding of string literals.
//!
//! Encoding runs in two phases. The first replaces every ASCII character of
//! the escape set with `%XX` and leaves everything else alone. Only when the
//! result still holds non-ASCII characters does the second phase run: the
//! whole string is re-encoded byte by byte as UTF-8, copying ASCII bytes and
//! turning every high-bit byte into `%XX`. ASCII bytes, including the `%XX`
//! triples from the first phase, pass through the second phase unchanged.

use crate::{Error, Literal, Result, Term};
use percent_encoding::percent_encode_byte;

/// Reserved characters plus space.
const URI_RESERVED: &[char] = &[
    ' ', '!', '*', '"', '\'', '(', ')', ';', ':', '@', '&', '=', '+', '$', ',', '/', '?', '%',
    '#', '[', ']',
];

const URI_OTHER: &[char] = &['<', '>', '~', '.', '{', '}', '|', '\\', '-', '`', '_', '^'];

const URI_WHITESPACE: &[char] = &['\n', '\r', '\t'];

fn needs_escape(ch: char) -> bool {
    URI_RESERVED.contains(&ch) || URI_OTHER.contains(&ch) || URI_WHITESPACE.contains(&ch)
}

/// Percent-encodes a string for use inside a URI.
///
/// # Examples
///
/// ```
/// use aingle_dataset::encode_str;
///
/// assert_eq!(encode_str(" "), "%20");
/// assert_eq!(encode_str("a/b?c"), "a%2Fb%3Fc");
/// assert_eq!(encode_str("café"), "caf%C3%A9");
/// assert_eq!(encode_str("Los Angeles"), "Los%20Angeles");
/// ```
pub fn encode_str(value: &str) -> String {
    let escaped = escape_ascii(value);
    if escaped.is_ascii() {
        return escaped;
    }
    log::trace!("Re-encoding non-ASCII input as UTF-8: {:?}", value);
    encode_non_ascii(escaped.as_bytes())
}

fn escape_ascii(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if needs_escape(ch) {
            // The escape set is ASCII-only.
            out.push_str(percent_encode_byte(ch as u8));
        } else {
            out.push(ch);
        }
    }
    out
}

fn encode_non_ascii(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for &b in bytes {
        if b.is_ascii() {
            out.push(b as char);
        } else {
            out.push_str(percent_encode_byte(b));
        }
    }
    out
}

/// Applies `ENCODE_FOR_URI` to a term.
///
/// Fails with [`Error::Type`] when the term is not a literal, or when it is a
/// literal whose datatype is neither absent nor `xsd:string`.
///
/// # Examples
///
/// ```
/// use aingle_dataset::{encode_for_uri, Error, Term};
///
/// assert_eq!(encode_for_uri(&Term::literal("a b"))?, "a%20b");
/// assert!(matches!(
///     encode_for_uri(&Term::iri("http://example.org/")),
///     Err(Error::Type(_))
/// ));
/// # Ok::<(), Error>(())
/// ```
pub fn encode_for_uri(term: &Term) -> Result<String> {
    let literal = term
        .as_literal()
        .ok_or_else(|| Error::Type("not a literal".into()))?;
    if !literal.is_string() {
        return Err(Error::Type("not a string literal".into()));
    }
    Ok(encode_str(literal.lexical_form()))
}

/// Like [`encode_for_uri`], returning the result as a plain string literal.
pub fn encode_for_uri_term(term: &Term) -> Result<Term> {
    encode_for_uri(term).map(|s| Term::Literal(Literal::plain(s)))
}
