//! The tree mutator.
//!
//! [`Highlighter::apply`] wraps every offending word of every eligible text
//! leaf in a marker element, [`Highlighter::remove`] turns markers back into
//! plain text. Both work on any [`DomTree`].

use tracing::{debug, error, info, warn};
use wordwarn_dom::{DomTree, MarkerSpec, NodeKind};
use wordwarn_text::{LengthRange, OffendingPattern, TextRun, offending_words};

use crate::marker::{MARKER_CLASS, MARKER_TAG};
use crate::{HighlightError, HighlightOptions, HighlightReport, RemovalReport, ValidationError};

/// Elements whose text is never highlighted.
///
/// `script` and `style` hold code. `title`, `textarea` and `noscript` hold
/// raw text where a marker would show up as literal markup.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "textarea", "title"];

/// Applies and removes word-length markers.
///
/// # Example
///
/// ```rust
/// use wordwarn_core::{HighlightOptions, Highlighter};
/// use wordwarn_html::{HtmlParser, Parser, serialize};
///
/// let mut doc = HtmlParser::fragment().parse("<p>Das Haus</p>").unwrap();
/// let highlighter = Highlighter::new();
///
/// let report = highlighter.apply(&mut doc, &HighlightOptions::new(4)).unwrap();
/// assert_eq!(report.markers_created, 1);
///
/// highlighter.remove(&mut doc);
/// assert_eq!(serialize(&doc), "<p>Das Haus</p>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    marker_class: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter writing `translator-warn` markers.
    pub fn new() -> Self {
        Self {
            marker_class: MARKER_CLASS.to_string(),
        }
    }

    /// Creates a highlighter that writes and recognizes markers of another class.
    pub fn with_marker_class(marker_class: impl Into<String>) -> Self {
        Self {
            marker_class: marker_class.into(),
        }
    }

    pub fn marker_class(&self) -> &str {
        &self.marker_class
    }

    /// Wraps every offending word in a marker element.
    ///
    /// Options are validated before anything else: an invalid set returns
    /// the error and leaves the tree untouched. A text leaf that cannot be
    /// rewritten is logged and skipped; leaves already rewritten stay so.
    pub fn apply<T: DomTree>(
        &self,
        tree: &mut T,
        options: &HighlightOptions,
    ) -> Result<HighlightReport, ValidationError> {
        if let Err(e) = options.validate() {
            error!("Invalid highlight options: {}", e);
            return Err(e);
        }

        let mut report = HighlightReport::default();
        if options.reset {
            report.removed = Some(self.remove(tree));
        }

        let range = options.range();
        let style = options.marker_style();

        for element in self.eligible_elements(tree) {
            // Replacing a leaf never shifts the siblings before it.
            let children = tree.children(&element);
            for (index, child) in children.iter().enumerate().rev() {
                if tree.kind_of(child) != Some(NodeKind::Text) {
                    continue;
                }
                let follows_marker = self.follows_marker(tree, &children, index);

                match self.rewrite_leaf(tree, child, follows_marker, &range, &style) {
                    Ok(0) => {}
                    Ok(markers) => {
                        report.rewritten_nodes += 1;
                        report.markers_created += markers;
                    }
                    Err(e) => {
                        warn!("Skipping text node {:?}: {}", child, e);
                        report.skipped_nodes += 1;
                    }
                }
            }
        }

        info!(
            "Highlighted {} words in {} text nodes ({} skipped)",
            report.markers_created, report.rewritten_nodes, report.skipped_nodes
        );

        Ok(report)
    }

    /// Replaces every marker element with a text leaf holding its text.
    pub fn remove<T: DomTree>(&self, tree: &mut T) -> RemovalReport {
        let mut report = RemovalReport::default();

        let markers: Vec<_> = tree
            .elements()
            .into_iter()
            .filter(|element| tree.has_class(element, &self.marker_class))
            .collect();

        for marker in markers {
            let text = tree.text_of(&marker);
            let leaf = tree.create_text(&text);
            match tree.replace_node(&marker, vec![leaf]) {
                Ok(()) => report.restored += 1,
                Err(e) => {
                    warn!("Skipping marker {:?}: {}", marker, e);
                    report.skipped += 1;
                }
            }
        }

        info!(
            "Removed {} markers ({} skipped)",
            report.restored, report.skipped
        );

        report
    }

    /// Lists the words [`apply`](Self::apply) would wrap, without touching the tree.
    ///
    /// Words are distinct and listed element by element in document order.
    pub fn scan<T: DomTree>(
        &self,
        tree: &T,
        options: &HighlightOptions,
    ) -> Result<Vec<String>, ValidationError> {
        if let Err(e) = options.validate() {
            error!("Invalid highlight options: {}", e);
            return Err(e);
        }

        let range = options.range();
        let mut found: Vec<String> = Vec::new();

        for element in self.eligible_elements(tree) {
            let children = tree.children(&element);
            for (index, child) in children.iter().enumerate() {
                if tree.kind_of(child) != Some(NodeKind::Text) {
                    continue;
                }
                let text = tree.text_of(child);
                let follows_marker = self.follows_marker(tree, &children, index);
                for word in offending_words(candidate_text(&text, follows_marker), &range) {
                    if !found.iter().any(|seen| seen == word) {
                        found.push(word.to_string());
                    }
                }
            }
        }

        debug!("Scan found {} distinct words", found.len());
        Ok(found)
    }

    /// Elements whose text leaves may be rewritten, in document order.
    fn eligible_elements<T: DomTree>(&self, tree: &T) -> Vec<T::Handle> {
        tree.elements()
            .into_iter()
            .filter(|element| {
                !tree.has_class(element, &self.marker_class)
                    && !tree
                        .tag_name(element)
                        .is_some_and(|tag| SKIPPED_TAGS.contains(&tag.as_str()))
            })
            .collect()
    }

    /// Returns true if the sibling right before `children[index]` is a marker.
    fn follows_marker<T: DomTree>(&self, tree: &T, children: &[T::Handle], index: usize) -> bool {
        index
            .checked_sub(1)
            .and_then(|previous| children.get(previous))
            .is_some_and(|previous| tree.has_class(previous, &self.marker_class))
    }

    /// Rewrites one text leaf, returning the number of markers inserted.
    fn rewrite_leaf<T: DomTree>(
        &self,
        tree: &mut T,
        leaf: &T::Handle,
        follows_marker: bool,
        range: &LengthRange,
        style: &str,
    ) -> Result<usize, HighlightError> {
        let text = tree.text_of(leaf);
        let words = offending_words(candidate_text(&text, follows_marker), range);
        let Some(pattern) = OffendingPattern::new(words)? else {
            return Ok(0);
        };

        let runs = pattern.runs(&text);
        if !runs.iter().any(TextRun::is_marked) {
            return Ok(0);
        }

        let mut replacements = Vec::with_capacity(runs.len());
        let mut markers = 0;
        for run in runs {
            let handle = match run {
                TextRun::Plain(plain) => tree.create_text(plain),
                TextRun::Marked(word) => {
                    markers += 1;
                    tree.create_marker(&MarkerSpec {
                        tag: MARKER_TAG,
                        class: &self.marker_class,
                        style,
                        text: word,
                    })?
                }
            };
            replacements.push(handle);
        }

        tree.replace_node(leaf, replacements)?;
        debug!(
            "Rewrote text node {:?} with {} markers ({})",
            leaf,
            markers,
            pattern.as_str()
        );

        Ok(markers)
    }
}

/// The part of a leaf's text that words are extracted from.
///
/// A leaf right after a marker starts with the rest of the fragment whose
/// word the marker holds (`.Sonnen` after a marked `x`). That fragment already
/// had its word, so extraction starts at the first space.
fn candidate_text(text: &str, follows_marker: bool) -> &str {
    if !follows_marker {
        return text;
    }
    text.find(' ').map_or("", |space| &text[space..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use wordwarn_dom::{Document, DomError, NodeId};
    use wordwarn_html::{HtmlParser, Parser, serialize};

    fn parse(source: &str) -> Document {
        HtmlParser::fragment().parse(source).unwrap()
    }

    fn marked_words(doc: &Document) -> Vec<String> {
        doc.elements()
            .into_iter()
            .filter(|&id| DomTree::has_class(doc, &id, MARKER_CLASS))
            .map(|id| doc.text_content(id))
            .collect()
    }

    fn has_nested_marker(doc: &Document) -> bool {
        let markers: Vec<NodeId> = doc
            .elements()
            .into_iter()
            .filter(|&id| DomTree::has_class(doc, &id, MARKER_CLASS))
            .collect();
        markers.iter().any(|&outer| {
            markers
                .iter()
                .any(|&inner| inner != outer && doc.is_inclusive_ancestor(outer, inner))
        })
    }

    #[test]
    fn test_punctuation_stays_plain() {
        let mut doc = parse("<p>Hello, (World)!</p>");
        let report = Highlighter::new()
            .apply(&mut doc, &HighlightOptions::new(5).with_max_length(5))
            .unwrap();

        assert_eq!(report.rewritten_nodes, 1);
        assert_eq!(report.markers_created, 2);
        assert_eq!(marked_words(&doc), vec!["Hello", "World"]);
        assert_eq!(doc.text_content(doc.root()), "Hello, (World)!");
        insta::assert_snapshot!(
            serialize(&doc),
            @r#"<p><span class="translator-warn" style="background-color: hotpink; color: white;">Hello</span>, (<span class="translator-warn" style="background-color: hotpink; color: white;">World</span>)!</p>"#
        );
    }

    #[rstest]
    #[case::inclusive(true, &["Apfel", "Garten", "Fenster", "Freundin"])]
    #[case::exclusive(false, &["Garten", "Fenster"])]
    fn test_length_boundaries(#[case] inclusive: bool, #[case] expected: &[&str]) {
        let mut doc = parse("<p>Haus Apfel Garten Fenster Freundin Kartoffel</p>");
        let options = HighlightOptions::new(5)
            .with_max_length(8)
            .with_inclusive(inclusive);

        Highlighter::new().apply(&mut doc, &options).unwrap();

        assert_eq!(marked_words(&doc), expected);
        assert_eq!(
            doc.text_content(doc.root()),
            "Haus Apfel Garten Fenster Freundin Kartoffel"
        );
    }

    #[test]
    fn test_apply_is_idempotent_without_reset() {
        let mut doc = parse("<div><p>Die Autobahn ist <em>langsam</em> heute.</p></div>");
        let options = HighlightOptions::new(6);
        let highlighter = Highlighter::new();

        let first = highlighter.apply(&mut doc, &options).unwrap();
        let after_first = serialize(&doc);
        let second = highlighter.apply(&mut doc, &options).unwrap();

        assert!(first.markers_created > 0);
        assert_eq!(second.markers_created, 0);
        assert!(second.is_unchanged());
        assert_eq!(serialize(&doc), after_first);
        assert!(!has_nested_marker(&doc));
    }

    #[rstest]
    #[case::compound_before_word("<p>Sonnenschein Sonne</p>", 5, 7, &["Sonne"])]
    #[case::compound_after_word("<p>Kapitänsmütze Mütze</p>", 5, 7, &["Mütze"])]
    #[case::glued_to_punctuation("<p>x.Sonnen</p>", 1, 6, &["x"])]
    #[case::word_and_longer_word("<p>concatenate cat category</p>", 3, 8, &["cat", "category"])]
    #[case::tail_then_more_words("<p>x.Sonnen und Mond</p>", 1, 6, &["x", "und", "Mond"])]
    fn test_second_apply_changes_nothing(
        #[case] source: &str,
        #[case] min: usize,
        #[case] max: usize,
        #[case] expected: &[&str],
    ) {
        let mut doc = parse(source);
        let options = HighlightOptions::new(min).with_max_length(max);
        let highlighter = Highlighter::new();

        highlighter.apply(&mut doc, &options).unwrap();
        let after_first = serialize(&doc);
        assert_eq!(marked_words(&doc), expected);

        let second = highlighter.apply(&mut doc, &options).unwrap();
        assert_eq!(second.markers_created, 0);
        assert_eq!(serialize(&doc), after_first);
        assert!(
            highlighter.scan(&doc, &options).unwrap().is_empty(),
            "scan should agree with apply"
        );
    }

    #[test]
    fn test_reapply_with_reset_never_nests() {
        let mut doc = parse("<p>Ein ausgezeichnetes Beispiel</p>");
        let highlighter = Highlighter::new();
        highlighter
            .apply(&mut doc, &HighlightOptions::new(8))
            .unwrap();

        let report = highlighter
            .apply(
                &mut doc,
                &HighlightOptions::new(8)
                    .with_colors("yellow", "black")
                    .with_reset(true),
            )
            .unwrap();

        assert_eq!(
            report.removed,
            Some(RemovalReport {
                restored: 2,
                skipped: 0
            })
        );
        assert_eq!(report.markers_created, 2);
        assert!(!has_nested_marker(&doc));
        assert!(serialize(&doc).contains("background-color: yellow; color: black;"));
        assert!(!serialize(&doc).contains("hotpink"));
    }

    #[test]
    fn test_remove_restores_text() {
        let source = "<article><h1>Überschrift</h1><p>Der Weihnachtsmann kommt &amp; bringt Geschenke.</p></article>";
        let mut doc = parse(source);
        let before = doc.text_content(doc.root());
        let highlighter = Highlighter::new();

        let applied = highlighter
            .apply(&mut doc, &HighlightOptions::new(6))
            .unwrap();
        assert_eq!(applied.markers_created, 4);

        let removed = highlighter.remove(&mut doc);
        assert_eq!(removed.restored, 4);
        assert_eq!(doc.text_content(doc.root()), before);
        assert_eq!(serialize(&doc), source);
        assert!(marked_words(&doc).is_empty());
    }

    #[test]
    fn test_metacharacters_do_not_break_the_pattern() {
        let mut doc = parse("<p>C++ a.b x*y (ok) [ja] {no} ^$ back\\slash</p>");
        let report = Highlighter::new()
            .apply(&mut doc, &HighlightOptions::new(1).with_max_length(5))
            .unwrap();

        assert_eq!(report.skipped_nodes, 0);
        assert!(report.markers_created > 0);
        assert_eq!(
            doc.text_content(doc.root()),
            "C++ a.b x*y (ok) [ja] {no} ^$ back\\slash"
        );
    }

    #[test]
    fn test_code_and_raw_text_are_skipped() {
        let mut doc = HtmlParser::document()
            .parse(
                "<html><head><title>Kaffeemaschine</title><style>.Kaffeemaschine {}</style></head>\
                 <body><script>var Kaffeemaschine = 1;</script>\
                 <textarea>Kaffeemaschine</textarea><p>Kaffeemaschine</p></body></html>",
            )
            .unwrap();

        let report = Highlighter::new()
            .apply(&mut doc, &HighlightOptions::new(10))
            .unwrap();

        assert_eq!(report.markers_created, 1);
        assert_eq!(marked_words(&doc), vec!["Kaffeemaschine"]);
        let marker = doc
            .elements()
            .into_iter()
            .find(|&id| DomTree::has_class(&doc, &id, MARKER_CLASS))
            .unwrap();
        let parent = doc.parent(marker).unwrap();
        assert_eq!(doc.element(parent).unwrap().tag, "p");
    }

    #[test]
    fn test_invalid_options_leave_tree_untouched() {
        let mut doc = parse("<p>Schmetterling</p>");
        let before = serialize(&doc);

        let err = Highlighter::new()
            .apply(&mut doc, &HighlightOptions::new(9).with_max_length(2))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvertedRange { min: 9, max: 2 });

        assert_eq!(serialize(&doc), before);

        // Untyped input goes through the same path the hosts use.
        let outcome = HighlightOptions::from_value(&serde_json::json!({ "minLength": "8" }))
            .and_then(|options| Highlighter::new().apply(&mut doc, &options));
        assert!(
            matches!(outcome, Err(ValidationError::Schema { .. })),
            "unexpected outcome {outcome:?}"
        );
        assert_eq!(serialize(&doc), before);
    }

    #[test]
    fn test_zero_min_length_skips_punctuation_only_fragments() {
        let mut doc = parse("<p>-- ... !!</p>");
        let report = Highlighter::new()
            .apply(&mut doc, &HighlightOptions::new(0).with_max_length(3))
            .unwrap();

        // "--" is made of word characters, the rest is not.
        assert_eq!(marked_words(&doc), vec!["--"]);
        assert_eq!(report.rewritten_nodes, 1);
    }

    #[test]
    fn test_custom_marker_class() {
        let mut doc = parse("<p>Donaudampfschiff</p>");
        let highlighter = Highlighter::with_marker_class("long-word");
        highlighter
            .apply(&mut doc, &HighlightOptions::new(10))
            .unwrap();

        assert_eq!(highlighter.marker_class(), "long-word");
        assert!(serialize(&doc).contains(r#"class="long-word""#));
        assert!(marked_words(&doc).is_empty());

        assert_eq!(highlighter.remove(&mut doc).restored, 1);
        assert_eq!(serialize(&doc), "<p>Donaudampfschiff</p>");
    }

    #[test]
    fn test_remove_recognizes_existing_markers() {
        let mut doc = parse(
            r#"<p>Ein <span class="note translator-warn" style="background-color: red; color: blue;">altes</span> Wort</p>"#,
        );
        let report = Highlighter::new().remove(&mut doc);
        assert_eq!(report.restored, 1);
        assert_eq!(serialize(&doc), "<p>Ein altes Wort</p>");
    }

    #[test]
    fn test_scan_lists_distinct_words() {
        let doc = parse("<p>Regenschirm und Regenschirm</p><p>Sonnenbrille</p>");
        let words = Highlighter::new()
            .scan(&doc, &HighlightOptions::new(10))
            .unwrap();
        assert_eq!(words, vec!["Regenschirm", "Sonnenbrille"]);
    }

    /// A tree that refuses to replace one particular node.
    struct Refusing {
        doc: Document,
        refuse: NodeId,
    }

    impl DomTree for Refusing {
        type Handle = NodeId;

        fn elements(&self) -> Vec<NodeId> {
            self.doc.elements()
        }

        fn children(&self, node: &NodeId) -> Vec<NodeId> {
            DomTree::children(&self.doc, node)
        }

        fn kind_of(&self, node: &NodeId) -> Option<NodeKind> {
            self.doc.kind_of(node)
        }

        fn tag_name(&self, node: &NodeId) -> Option<String> {
            self.doc.tag_name(node)
        }

        fn has_class(&self, node: &NodeId, class: &str) -> bool {
            DomTree::has_class(&self.doc, node, class)
        }

        fn text_of(&self, node: &NodeId) -> String {
            self.doc.text_of(node)
        }

        fn replace_node(&mut self, old: &NodeId, replacements: Vec<NodeId>) -> Result<(), DomError> {
            if *old == self.refuse {
                return Err(DomError::detached(old));
            }
            self.doc.replace_node(old, replacements)
        }

        fn create_marker(&mut self, marker: &MarkerSpec<'_>) -> Result<NodeId, DomError> {
            self.doc.create_marker(marker)
        }

        fn create_text(&mut self, text: &str) -> NodeId {
            DomTree::create_text(&mut self.doc, text)
        }
    }

    #[test]
    fn test_failed_leaf_is_skipped_and_pass_continues() {
        let doc = parse("<p>Bleistift</p><p>Radiergummi</p>");
        let first_p = doc.children(doc.root())[0];
        let refuse = doc.children(first_p)[0];
        let mut tree = Refusing { doc, refuse };

        let report = Highlighter::new()
            .apply(&mut tree, &HighlightOptions::new(9))
            .unwrap();

        assert_eq!(report.skipped_nodes, 1);
        assert_eq!(report.rewritten_nodes, 1);
        assert_eq!(marked_words(&tree.doc), vec!["Radiergummi"]);
    }

    #[test]
    fn test_failed_marker_is_skipped_on_remove() {
        let mut doc = parse("<p>Bleistift</p><p>Radiergummi</p>");
        Highlighter::new()
            .apply(&mut doc, &HighlightOptions::new(9))
            .unwrap();
        let refuse = doc
            .elements()
            .into_iter()
            .find(|&id| DomTree::has_class(&doc, &id, MARKER_CLASS))
            .unwrap();
        let mut tree = Refusing { doc, refuse };

        let report = Highlighter::new().remove(&mut tree);

        assert_eq!(
            report,
            RemovalReport {
                restored: 1,
                skipped: 1
            }
        );
        assert_eq!(marked_words(&tree.doc), vec!["Bleistift"]);
    }
}
