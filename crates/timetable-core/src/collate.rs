// ── Human-oriented string ordering ──
//
// Session codes are ordered the way a person reading the grid expects,
// not by raw bytes. Case and accents are ignored first, and punctuation
// sorts before digits, which sort before letters. Ties are broken by
// accents (unaccented first), then by case (lowercase first), and the raw
// byte order settles anything left.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings with locale-style, case-aware collation.
///
/// A total order: `locale_cmp(a, b) == Equal` only when `a == b`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// Decomposed, lowercased form. A base letter sorts before the same letter
/// followed by a combining mark.
fn accent_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// First position whose case differs decides: lowercase sorts first.
fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<&str>) -> Vec<&str> {
        items.sort_by(|a, b| locale_cmp(a, b));
        items
    }

    #[test]
    fn ignores_case_before_anything_else() {
        // Byte order would put every uppercase code first.
        assert_eq!(sorted(vec!["b1", "A2", "a3"]), ["A2", "a3", "b1"]);
    }

    #[test]
    fn lowercase_breaks_case_ties() {
        assert_eq!(locale_cmp("eng_1", "Eng_1"), Ordering::Less);
        assert_eq!(locale_cmp("Eng_1", "eng_1"), Ordering::Greater);
    }

    #[test]
    fn punctuation_then_digits_then_letters() {
        assert_eq!(sorted(vec!["Sci_a", "Sci_1", "Sci__"]), ["Sci__", "Sci_1", "Sci_a"]);
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(locale_cmp("Eng", "Eng_1"), Ordering::Less);
    }

    #[test]
    fn accents_are_ignored_before_letters() {
        // Raw code points would put every accented letter after `z`.
        assert_eq!(sorted(vec!["eb", "zed", "éa"]), ["éa", "eb", "zed"]);
    }

    #[test]
    fn unaccented_breaks_accent_ties() {
        assert_eq!(locale_cmp("Rene", "René"), Ordering::Less);
        assert_eq!(locale_cmp("René", "Rene"), Ordering::Greater);
        // Accent outranks case.
        assert_eq!(locale_cmp("E", "é"), Ordering::Less);
        assert_eq!(locale_cmp("é", "É"), Ordering::Less);
    }

    #[test]
    fn equal_only_for_identical_strings() {
        assert_eq!(locale_cmp("Usha_4", "Usha_4"), Ordering::Equal);
        assert_ne!(locale_cmp("usha_4", "Usha_4"), Ordering::Equal);
        // Precomposed and decomposed forms differ only in bytes.
        assert_ne!(locale_cmp("\u{e9}", "e\u{301}"), Ordering::Equal);
    }
}
