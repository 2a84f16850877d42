//! Word splitting and single-word abbreviation

use unicode_segmentation::UnicodeSegmentation;

use crate::config::Unit;

/// Split text into words on runs of Unicode whitespace.
///
/// Leading and trailing whitespace yield no empty words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Length of `word` measured in `unit`
pub fn measure(word: &str, unit: Unit) -> usize {
    match unit {
        Unit::Chars => word.chars().count(),
        Unit::Graphemes => word.graphemes(true).count(),
    }
}

/// First and last unit of a word as string slices
fn ends(word: &str, unit: Unit) -> Option<(&str, &str)> {
    match unit {
        Unit::Chars => {
            let first = word.chars().next()?;
            let last = word.chars().next_back()?;
            Some((
                &word[..first.len_utf8()],
                &word[word.len() - last.len_utf8()..],
            ))
        }
        Unit::Graphemes => {
            let mut graphemes = word.graphemes(true);
            let first = graphemes.next()?;
            let last = graphemes.next_back().unwrap_or(first);
            Some((first, last))
        }
    }
}

/// Append the numeronym of a single word to `out`.
///
/// Words shorter than `min_len` units are copied unchanged. `min_len` is
/// expected to be at least 3 so that first and last are distinct units.
pub fn abbreviate_into(word: &str, unit: Unit, min_len: usize, out: &mut String) {
    let len = measure(word, unit);
    if len < min_len || len < 2 {
        out.push_str(word);
        return;
    }

    match ends(word, unit) {
        Some((first, last)) => {
            out.push_str(first);
            out.push_str(&(len - 2).to_string());
            out.push_str(last);
        }
        None => out.push_str(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abbreviate(word: &str, unit: Unit) -> String {
        let mut out = String::new();
        abbreviate_into(word, unit, 3, &mut out);
        out
    }

    #[test]
    fn test_words_skip_whitespace_runs() {
        let split: Vec<_> = words("  hello \t\n world  ").collect();
        assert_eq!(split, vec!["hello", "world"]);
        assert_eq!(words("   ").count(), 0);
        assert_eq!(words("").count(), 0);
    }

    #[test]
    fn test_words_split_on_unicode_whitespace() {
        // no-break space and ideographic space
        let split: Vec<_> = words("a\u{a0}b\u{3000}c").collect();
        assert_eq!(split, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_measure_units() {
        assert_eq!(measure("héllo", Unit::Chars), 5);
        // e + combining acute accent
        assert_eq!(measure("he\u{301}llo", Unit::Chars), 6);
        assert_eq!(measure("he\u{301}llo", Unit::Graphemes), 5);
    }

    #[test]
    fn test_abbreviate_chars() {
        assert_eq!(abbreviate("internationalization", Unit::Chars), "i18n");
        assert_eq!(abbreviate("abc", Unit::Chars), "a1c");
        assert_eq!(abbreviate("go", Unit::Chars), "go");
        assert_eq!(abbreviate("Győző", Unit::Chars), "G3ő");
    }

    #[test]
    fn test_abbreviate_graphemes() {
        assert_eq!(abbreviate("a😂c", Unit::Graphemes), "a1c");
        assert_eq!(abbreviate("😂😂😂", Unit::Graphemes), "😂1😂");
        assert_eq!(
            abbreviate("🍏👩🏻‍🔬👌🏾", Unit::Graphemes),
            "🍏1👌🏾"
        );
        assert_eq!(abbreviate("e\u{301}x", Unit::Graphemes), "e\u{301}x");
    }

    #[test]
    fn test_abbreviate_counts_scalars_by_default() {
        // 👌🏾 is two scalar values: base emoji plus skin tone modifier
        assert_eq!(abbreviate("a👌🏾", Unit::Chars), "a1🏾");
    }

    #[test]
    fn test_abbreviate_respects_threshold() {
        let mut out = String::new();
        abbreviate_into("abc", Unit::Chars, 4, &mut out);
        assert_eq!(out, "abc");

        out.clear();
        abbreviate_into("abcd", Unit::Chars, 4, &mut out);
        assert_eq!(out, "a2d");
    }
}
