// Character helpers and free-text tokenizing.

/// Collect a string into a `char` vector for random access by character
/// position.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Simple one-to-one lowercase mapping.
///
/// Characters whose lowercase form expands to several characters keep only
/// the first one, so word lengths never change.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Whitespace as understood by the tokenizer: ASCII control whitespace,
/// space, and the Unicode space separators.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Lowercase free text and split it on whitespace.
///
/// Punctuation is left attached to the words; stripping it is up to the
/// caller.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(is_whitespace)
        .filter(|w| !w.is_empty())
        .map(|w| w.chars().map(simple_lower).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_counts_characters_not_bytes() {
        assert_eq!(chars("k\u{00E4}si").len(), 4);
        assert!(chars("").is_empty());
    }

    #[test]
    fn simple_lower_ascii_and_latin1() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('\u{00C4}'), '\u{00E4}');
        assert_eq!(simple_lower('a'), 'a');
        assert_eq!(simple_lower('1'), '1');
    }

    #[test]
    fn whitespace_classes() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\u{00A0}'));
        assert!(!is_whitespace('a'));
        assert!(!is_whitespace('-'));
    }

    #[test]
    fn split_words_lowercases_and_splits() {
        assert_eq!(
            split_words("  The Quick\tbrown\n\nFOX "),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn split_words_keeps_punctuation() {
        assert_eq!(split_words("Hello, world."), vec!["hello,", "world."]);
    }

    #[test]
    fn split_words_empty_input() {
        assert!(split_words("").is_empty());
        assert!(split_words(" \t ").is_empty());
    }
}
