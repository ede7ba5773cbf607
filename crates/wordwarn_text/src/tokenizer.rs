/// Latin-1 and Latin Extended-A letters counted as word characters, on top of
/// ASCII letters and the hyphen.
const EXTENDED_LETTERS: &str =
    "áàâäãåçéèêëíìîïñóòôöõúùûüýÿæœÁÀÂÄÃÅÇÉÈÊËÍÌÎÏÑÓÒÔÖÕÚÙÛÜÝŸÆŒ";

/// Returns true if `c` belongs to a word.
///
/// The set is fixed: ASCII letters, the common accented Latin letters and
/// `-`, so hyphenated compounds stay one word. Digits are not letters.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-' || (!c.is_ascii() && EXTENDED_LETTERS.contains(c))
}

/// Extracts the candidate word from one space-separated fragment.
///
/// Leading non-word characters are skipped; the word is the run of word
/// characters that follows, and everything after it is dropped. A fragment
/// without any word character yields `""`.
///
/// ```rust
/// use wordwarn_text::extract_word;
///
/// assert_eq!(extract_word("(World)!"), "World");
/// assert_eq!(extract_word("C++"), "C");
/// assert_eq!(extract_word("1234"), "");
/// ```
pub fn extract_word(fragment: &str) -> &str {
    let Some(start) = fragment.find(is_word_char) else {
        return "";
    };
    let rest = &fragment[start..];
    let end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
    &rest[..end]
}

/// Splits `text` on single ASCII spaces and extracts one candidate per fragment.
///
/// Only `' '` separates fragments; tabs and newlines stay inside a fragment
/// and end the word like any other non-word character. Empty candidates are
/// yielded too, so the iterator has one item per fragment.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').map(extract_word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain("Hello", "Hello")]
    #[case::trailing_comma("Hello,", "Hello")]
    #[case::wrapped("(World)!", "World")]
    #[case::quoted("«Straße»", "Stra")]
    #[case::accented("¡Añadió!", "Añadió")]
    #[case::uppercase_accents("ÉCOLE.", "ÉCOLE")]
    #[case::hyphenated("well-known.", "well-known")]
    #[case::stops_at_digit("abc123def", "abc")]
    #[case::stops_at_apostrophe("don't", "don")]
    #[case::stops_at_newline("end\nnext", "end")]
    #[case::symbols_only("+++", "")]
    #[case::digits_only("2024", "")]
    #[case::empty("", "")]
    fn test_extract_word(#[case] fragment: &str, #[case] expected: &str) {
        assert_eq!(extract_word(fragment), expected);
    }

    #[test]
    fn test_eszett_is_not_a_word_char() {
        assert!(!is_word_char('ß'));
        assert!(is_word_char('ü'));
        assert!(is_word_char('Ÿ'));
        assert!(is_word_char('-'));
        assert!(!is_word_char('7'));
    }

    #[test]
    fn test_words_split_on_spaces_only() {
        let words: Vec<&str> = words("Hello, (World)!  tab\there").collect();
        assert_eq!(words, vec!["Hello", "World", "", "tab"]);
    }

    #[test]
    fn test_words_keeps_one_item_per_fragment() {
        assert_eq!(words("").count(), 1);
        assert_eq!(words(" a ").count(), 3);
    }
}
