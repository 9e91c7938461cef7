//! XML escaping for text content and string attribute values.
//!
//! The five XML special characters are replaced by their predefined
//! entities:
//!
//! | Character | Entity   |
//! |-----------|----------|
//! | `&`       | `&amp;`  |
//! | `<`       | `&lt;`   |
//! | `>`       | `&gt;`   |
//! | `"`       | `&quot;` |
//! | `'`       | `&apos;` |
//!
//! Numeric attributes never go through this module.

use std::io::{self, Write};

/// Returns the entity replacing `byte`, if it needs escaping.
fn entity_for(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&apos;"),
        _ => None,
    }
}

/// Writes `raw` to `out` with the XML special characters escaped.
///
/// Runs of characters that need no escaping are written as single slices.
/// All five special characters are ASCII, so scanning bytes never splits a
/// multi-byte UTF-8 sequence.
///
/// # Errors
///
/// Returns the sink's error as soon as a write fails. Output written before
/// the failure stays in the sink.
///
/// # Examples
///
/// ```
/// # use minisvg_core::escape::write_escaped;
/// let mut out: Vec<u8> = Vec::new();
/// write_escaped(&mut out, "a < b & 'c'").unwrap();
/// assert_eq!(out, b"a &lt; b &amp; &apos;c&apos;");
/// ```
pub fn write_escaped<W: Write + ?Sized>(out: &mut W, raw: &str) -> io::Result<()> {
    let bytes = raw.as_bytes();
    let mut run_start = 0;

    for (idx, &byte) in bytes.iter().enumerate() {
        let Some(entity) = entity_for(byte) else {
            continue;
        };
        out.write_all(&bytes[run_start..idx])?;
        out.write_all(entity.as_bytes())?;
        run_start = idx + 1;
    }

    out.write_all(&bytes[run_start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(raw: &str) -> String {
        let mut out: Vec<u8> = Vec::new();
        write_escaped(&mut out, raw).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escaped("Hello world"), "Hello world");
        assert_eq!(escaped(""), "");
    }

    #[test]
    fn test_each_special_character() {
        assert_eq!(escaped("&"), "&amp;");
        assert_eq!(escaped("<"), "&lt;");
        assert_eq!(escaped(">"), "&gt;");
        assert_eq!(escaped("\""), "&quot;");
        assert_eq!(escaped("'"), "&apos;");
    }

    #[test]
    fn test_mixed_content() {
        assert_eq!(
            escaped(r#"Hello, "world" & <svg>"#),
            "Hello, &quot;world&quot; &amp; &lt;svg&gt;"
        );
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        // Input is treated as raw text, never as markup
        assert_eq!(escaped("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        assert_eq!(escaped("Привет <мир>"), "Привет &lt;мир&gt;");
        assert_eq!(escaped("日本語 & 🎨"), "日本語 &amp; 🎨");
    }

    #[test]
    fn test_adjacent_special_characters() {
        assert_eq!(escaped("<<>>"), "&lt;&lt;&gt;&gt;");
    }
}
