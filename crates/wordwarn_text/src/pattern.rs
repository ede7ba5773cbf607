use regex::Regex;

use crate::tokenizer::is_word_char;

/// Errors raised while building an offending-word pattern.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TextError {
    #[error("Pattern error: {0}")]
    #[diagnostic(code(wordwarn::text::pattern))]
    Pattern(#[from] regex::Error),
}

/// Characters with a meaning in a regular expression.
const METACHARACTERS: &[char] = &[
    '-', '/', '\\', '^', '$', '*', '+', '?', '.', '(', ')', '|', '[', ']', '{', '}',
];

/// Escapes every regex metacharacter in `word` with a backslash, so the word
/// can be embedded as a literal alternative.
///
/// ```rust
/// use wordwarn_text::escape_for_pattern;
///
/// assert_eq!(escape_for_pattern("C++"), r"C\+\+");
/// assert_eq!(escape_for_pattern("well-known"), r"well\-known");
/// ```
pub fn escape_for_pattern(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for c in word.chars() {
        if METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// A contiguous slice of a text leaf, either left alone or to be wrapped in a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRun<'a> {
    Plain(&'a str),
    Marked(&'a str),
}

impl<'a> TextRun<'a> {
    /// Returns the slice this run covers.
    #[inline]
    pub const fn text(&self) -> &'a str {
        match self {
            TextRun::Plain(text) | TextRun::Marked(text) => *text,
        }
    }

    /// Returns true for runs that become markers.
    #[inline]
    pub const fn is_marked(&self) -> bool {
        matches!(self, TextRun::Marked(_))
    }
}

/// Alternation of the offending words found in one text leaf.
///
/// Words are de-duplicated, keeping their first appearance order. The
/// alternation only finds candidates; a candidate is marked when it spans a
/// whole run of word characters.
#[derive(Debug, Clone)]
pub struct OffendingPattern {
    regex: Regex,
    words: Vec<String>,
}

impl OffendingPattern {
    /// Builds the pattern, or returns `Ok(None)` when there is nothing to match.
    ///
    /// Empty words are ignored.
    pub fn new<'w>(words: impl IntoIterator<Item = &'w str>) -> Result<Option<Self>, TextError> {
        let mut unique: Vec<String> = Vec::new();
        for word in words {
            if !word.is_empty() && !unique.iter().any(|seen| seen == word) {
                unique.push(word.to_string());
            }
        }

        if unique.is_empty() {
            return Ok(None);
        }

        let alternation = unique
            .iter()
            .map(|word| escape_for_pattern(word))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&alternation)?;

        Ok(Some(Self {
            regex,
            words: unique,
        }))
    }

    /// Returns the compiled alternation source.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the distinct words, in first-appearance order.
    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns true if `text` contains any of the words.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Splits `text` into plain runs and marked whole-word runs.
    ///
    /// A match counts only when both of its neighbours are non-word characters
    /// or the ends of `text`: `Sonne` is marked in `die Sonne.` but not inside
    /// `Sonnenschein`. Empty plain runs are dropped, so concatenating the runs
    /// always yields `text` again.
    pub fn runs<'t>(&self, text: &'t str) -> Vec<TextRun<'t>> {
        let mut runs = Vec::new();
        let mut last = 0;
        let mut at = 0;

        while let Some(found) = self.regex.find_at(text, at) {
            // Widen the match to the word it sits in. That word is marked only
            // if it is one of ours, whichever alternative matched first.
            let (start, end) = word_bounds(text, found.start(), found.end());
            let start = start.max(last);
            at = end;

            if !self.words.iter().any(|word| word == &text[start..end]) {
                continue;
            }
            if start > last {
                runs.push(TextRun::Plain(&text[last..start]));
            }
            runs.push(TextRun::Marked(&text[start..end]));
            last = end;
        }

        if last < text.len() {
            runs.push(TextRun::Plain(&text[last..]));
        }

        runs
    }
}

/// Extends `start..end` over the word characters touching it on either side.
fn word_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let start = text[..start]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word_char(c))
        .last()
        .map_or(start, |(index, _)| index);
    let end = text[end..]
        .find(|c: char| !is_word_char(c))
        .map_or(text.len(), |offset| end + offset);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn concat(runs: &[TextRun<'_>]) -> String {
        runs.iter().map(TextRun::text).collect()
    }

    #[rstest]
    #[case::plain("Wort", "Wort")]
    #[case::hyphen("a-b", r"a\-b")]
    #[case::all_metacharacters(r"-/\^$*+?.()|[]{}", r"\-\/\\\^\$\*\+\?\.\(\)\|\[\]\{\}")]
    #[case::unicode("Kapitänsmütze", "Kapitänsmütze")]
    fn test_escape_for_pattern(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(escape_for_pattern(word), expected);
    }

    #[test]
    fn test_escaped_metacharacters_compile_as_literals() {
        let words = ["C++", "a.b", "x*", "(y)", "[z]", "{1}", "p|q", "^$", r"\/"];
        let pattern = OffendingPattern::new(words).unwrap().unwrap();
        for word in words {
            let runs = pattern.runs(word);
            assert_eq!(runs, vec![TextRun::Marked(word)], "word {word:?}");
        }
        assert!(!pattern.is_match("ab"));
    }

    #[test]
    fn test_empty_words_give_no_pattern() {
        assert!(OffendingPattern::new(Vec::<&str>::new()).unwrap().is_none());
        assert!(OffendingPattern::new(["", ""]).unwrap().is_none());
    }

    #[test]
    fn test_duplicates_are_removed_in_order() {
        let pattern = OffendingPattern::new(["World", "Hello", "World"])
            .unwrap()
            .unwrap();
        assert_eq!(pattern.words(), &["World".to_string(), "Hello".to_string()]);
        assert_eq!(pattern.as_str(), "World|Hello");
    }

    #[test]
    fn test_runs_keep_punctuation_plain() {
        let text = "Hello, (World)!";
        let pattern = OffendingPattern::new(["Hello", "World"]).unwrap().unwrap();
        let runs = pattern.runs(text);

        assert_eq!(
            runs,
            vec![
                TextRun::Marked("Hello"),
                TextRun::Plain(", ("),
                TextRun::Marked("World"),
                TextRun::Plain(")!"),
            ]
        );
        assert_eq!(concat(&runs), text);
    }

    #[test]
    fn test_runs_adjacent_matches() {
        let pattern = OffendingPattern::new(["ab"]).unwrap().unwrap();
        assert_eq!(
            pattern.runs("ab,ab"),
            vec![
                TextRun::Marked("ab"),
                TextRun::Plain(","),
                TextRun::Marked("ab"),
            ]
        );
        assert_eq!(pattern.runs("abab"), vec![TextRun::Plain("abab")]);
    }

    #[test]
    fn test_runs_mark_whole_words_only() {
        // "cat" matches first at the start of "category"
        let pattern = OffendingPattern::new(["cat", "category"]).unwrap().unwrap();
        let runs = pattern.runs("concatenate category cat.");
        assert_eq!(
            runs,
            vec![
                TextRun::Plain("concatenate "),
                TextRun::Marked("category"),
                TextRun::Plain(" "),
                TextRun::Marked("cat"),
                TextRun::Plain("."),
            ]
        );
        assert_eq!(concat(&runs), "concatenate category cat.");
    }

    #[rstest]
    #[case::compound_prefix("Sonnenschein ", "Sonne")]
    #[case::compound_suffix("Kapitänsmütze ", "Mütze")]
    #[case::hyphenated("Sonne-Mond ", "Sonne")]
    fn test_runs_skip_words_inside_longer_words(#[case] plain: &str, #[case] word: &str) {
        let text = format!("{plain}{word}");
        let pattern = OffendingPattern::new([word]).unwrap().unwrap();
        assert_eq!(
            pattern.runs(&text),
            vec![TextRun::Plain(plain), TextRun::Marked(word)]
        );
    }

    #[test]
    fn test_runs_accept_non_word_neighbours() {
        let pattern = OffendingPattern::new(["x"]).unwrap().unwrap();
        assert_eq!(
            pattern.runs("x.Sonnen"),
            vec![TextRun::Marked("x"), TextRun::Plain(".Sonnen")]
        );
    }

    #[test]
    fn test_runs_without_match() {
        let pattern = OffendingPattern::new(["zzz"]).unwrap().unwrap();
        assert_eq!(pattern.runs("abc"), vec![TextRun::Plain("abc")]);
        assert!(pattern.runs("").is_empty());
    }

    #[test]
    fn test_text_run_accessors() {
        assert!(TextRun::Marked("a").is_marked());
        assert!(!TextRun::Plain("a").is_marked());
        assert_eq!(TextRun::Plain("abc").text(), "abc");
    }
}
