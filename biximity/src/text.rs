//! Repair of mis-encoded station names.
//!
//! Some feeds deliver names whose UTF-8 bytes were read as Latin-1 /
//! Windows-1252 and re-encoded, so "é" arrives as "Ã©". Names may also be
//! percent-escaped. This is a narrow fix for those feeds, not general
//! Unicode normalization.

use std::borrow::Cow;

/// Mojibake sequences and their replacements, applied in order.
///
/// "Ã¦" and "Ãœ" appear twice; the second occurrence never matches.
const SUBSTITUTIONS: [(&str, &str); 23] = [
    ("Ã©", "é"),
    ("Ã¨", "è"),
    ("Ã ", "à"),
    ("Ã¹", "ù"),
    ("Ã´", "ô"),
    ("Ã®", "î"),
    ("Ãª", "ê"),
    ("Ã¢", "â"),
    ("Ã«", "ë"),
    ("Ã¯", "ï"),
    ("Ã¼", "ü"),
    ("Ãœ", "Ü"),
    ("Ã¤", "ä"),
    ("Ã¶", "ö"),
    ("ÃŸ", "ß"),
    ("Ã§", "ç"),
    ("Ã¦", "æ"),
    ("Ã¦", "Æ"),
    ("Ãœ", "Ü"),
    ("Ã¸", "ø"),
    ("Ã…", "å"),
    ("Ã‡", "Ç"),
    ("Â", ""),
];

/// Repair a station name from the feed.
///
/// Substitutes the known mojibake sequences, then percent-decodes. When
/// percent-decoding would produce invalid UTF-8 the substituted text is
/// returned as-is.
///
/// ```
/// use biximity::text::decode_text;
///
/// assert_eq!(decode_text("Cartier / Ren\u{c3}\u{a9}-L\u{c3}\u{a9}vesque"), "Cartier / René-Lévesque");
/// assert_eq!(decode_text("de%20la%20Commune"), "de la Commune");
/// ```
pub fn decode_text(raw: &str) -> String {
    let mut text = Cow::Borrowed(raw);
    for (pattern, replacement) in SUBSTITUTIONS {
        if text.contains(pattern) {
            text = Cow::Owned(text.replace(pattern, replacement));
        }
    }

    let decoded = urlencoding::decode(&text).map(Cow::into_owned);
    decoded.unwrap_or_else(|_| text.into_owned())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Names built from plain words and the mojibake sequences the feed emits.
    fn feed_name() -> impl Strategy<Value = String> {
        let token = prop_oneof![
            "[A-Za-z0-9 /-]{1,8}",
            proptest::sample::select(SUBSTITUTIONS.iter().map(|(p, _)| p.to_string()).collect::<Vec<_>>()),
        ];
        proptest::collection::vec(token, 0..8).prop_map(|tokens| tokens.concat())
    }

    proptest! {
        /// A second pass changes nothing
        #[test]
        fn idempotent(name in feed_name()) {
            let once = decode_text(&name);
            prop_assert_eq!(decode_text(&once), once);
        }

        /// No mojibake survives a pass
        #[test]
        fn no_patterns_left(name in feed_name()) {
            let decoded = decode_text(&name);
            prop_assert!(!decoded.contains('Ã'));
            prop_assert!(!decoded.contains('Â'));
        }
    }
}
