//! Byte decoding helpers for input documents.

use std::borrow::Cow;

/// How far into a document to look for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Decode bytes to a string, handling various encodings.
///
/// 1. UTF-8 first (a BOM is stripped by encoding_rs)
/// 2. If malformed, the hint encoding (from `<meta charset>` or `<?xml?>`)
/// 3. Windows-1252 as a last resort (superset of ISO-8859-1)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find a declared charset near the start of a document.
///
/// Recognizes `<meta charset="...">`, the `charset=` parameter of a
/// `<meta http-equiv="Content-Type">` content value, and the
/// `encoding="..."` pseudo-attribute of an XML declaration.
pub fn sniff_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(SNIFF_LEN)];

    let value = find_value_after(prefix, b"charset=")
        .or_else(|| find_value_after(prefix, b"encoding="))?;

    std::str::from_utf8(value).ok().filter(|s| !s.is_empty())
}

/// Return the (optionally quoted) value following `key`, matched case-insensitively.
fn find_value_after<'a>(haystack: &'a [u8], key: &[u8]) -> Option<&'a [u8]> {
    let pos = haystack
        .windows(key.len())
        .position(|w| w.eq_ignore_ascii_case(key))?;
    let rest = &haystack[pos + key.len()..];

    match rest.first() {
        Some(&quote @ (b'"' | b'\'')) => {
            let end = rest[1..].iter().position(|&b| b == quote)?;
            Some(&rest[1..1 + end])
        }
        Some(_) => {
            let end = rest
                .iter()
                .position(|&b| {
                    matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace()
                })
                .unwrap_or(rest.len());
            Some(&rest[..end])
        }
        None => None,
    }
}
