//! Styled document model for the note editor.
//!
//! The document stores one [`StyledUnit`] per character, each with its own
//! [`StyleMap`], plus one paragraph style per paragraph. Paragraphs are
//! delimited by `'\n'`; the newline belongs to the paragraph it ends.
//!
//! Invariant: `paragraph_count() == number of '\n' units + 1`.

use std::ops::Range;

use crate::style_map::StyleMap;

/// One character and the style applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledUnit {
    /// The character.
    pub ch: char,
    /// Character-level formatting.
    pub style: StyleMap,
}

impl StyledUnit {
    /// Create a new unit.
    pub fn new(ch: char, style: StyleMap) -> Self {
        Self { ch, style }
    }

    /// Check if this unit ends a paragraph.
    pub fn is_line_break(&self) -> bool {
        self.ch == '\n'
    }
}

/// A styled text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledDocument {
    units: Vec<StyledUnit>,
    paragraphs: Vec<StyleMap>,
}

impl Default for StyledDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl StyledDocument {
    /// Create a new empty document (one empty paragraph).
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            paragraphs: vec![StyleMap::new()],
        }
    }

    /// Create an unstyled document from plain text.
    pub fn from_text(text: &str) -> Self {
        let mut doc = Self::new();
        doc.insert(0, text, &StyleMap::new());
        doc
    }

    /// The plain text content.
    pub fn text(&self) -> String {
        self.units.iter().map(|u| u.ch).collect()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if the document has no characters.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units in reading order.
    pub fn units(&self) -> &[StyledUnit] {
        &self.units
    }

    /// The unit at `index`.
    pub fn unit(&self, index: usize) -> Option<&StyledUnit> {
        self.units.get(index)
    }

    /// Character style at `index`.
    pub fn style_at(&self, index: usize) -> Option<&StyleMap> {
        self.units.get(index).map(|u| &u.style)
    }

    /// Mutable character styles for a range of units, clamped to the document.
    pub(crate) fn styles_mut(&mut self, range: Range<usize>) -> impl Iterator<Item = &mut StyleMap> {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        self.units[start..end].iter_mut().map(|u| &mut u.style)
    }

    /// Character styles for a range of units, clamped to the document.
    pub fn styles(&self, range: Range<usize>) -> impl Iterator<Item = &StyleMap> {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        self.units[start..end].iter().map(|u| &u.style)
    }

    /// Insert text at `pos` (clamped to the end), every character with `style`.
    ///
    /// Each inserted newline splits the paragraph at `pos`; the new paragraphs
    /// copy that paragraph's style.
    pub fn insert(&mut self, pos: usize, text: &str, style: &StyleMap) {
        if text.is_empty() {
            return;
        }
        let pos = pos.min(self.units.len());
        let para = self.paragraph_at(pos);

        let new_units: Vec<StyledUnit> = text
            .chars()
            .map(|ch| StyledUnit::new(ch, style.clone()))
            .collect();
        let breaks = new_units.iter().filter(|u| u.is_line_break()).count();
        self.units.splice(pos..pos, new_units);

        if breaks > 0 {
            let inherited = self.paragraphs[para].clone();
            self.paragraphs
                .splice(para + 1..para + 1, std::iter::repeat_n(inherited, breaks));
        }
    }

    /// Delete a range of characters (clamped), returning the removed text.
    ///
    /// Paragraphs joined by the deletion keep the style of the first one.
    pub fn delete(&mut self, range: Range<usize>) -> String {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        if start == end {
            return String::new();
        }

        let para = self.paragraph_at(start);
        let removed: Vec<StyledUnit> = self.units.drain(start..end).collect();
        let breaks = removed.iter().filter(|u| u.is_line_break()).count();
        if breaks > 0 {
            self.paragraphs.drain(para + 1..para + 1 + breaks);
        }

        removed.into_iter().map(|u| u.ch).collect()
    }

    /// Replace the whole content with `text` in `style`, resetting paragraph styles.
    pub fn set_text(&mut self, text: &str, style: &StyleMap) {
        self.clear();
        self.insert(0, text, style);
    }

    /// Clear the document.
    pub fn clear(&mut self) {
        self.units.clear();
        self.paragraphs.clear();
        self.paragraphs.push(StyleMap::new());
    }

    // =========================================================================
    // Paragraphs
    // =========================================================================

    /// Count the number of paragraphs. An empty document has 1 paragraph.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get the paragraph index for a position (clamped to the end).
    pub fn paragraph_at(&self, pos: usize) -> usize {
        let pos = pos.min(self.units.len());
        self.units[..pos].iter().filter(|u| u.is_line_break()).count()
    }

    /// Style of a paragraph.
    pub fn paragraph_style(&self, para_idx: usize) -> Option<&StyleMap> {
        self.paragraphs.get(para_idx)
    }

    /// Mutable style of a paragraph.
    pub fn paragraph_style_mut(&mut self, para_idx: usize) -> Option<&mut StyleMap> {
        self.paragraphs.get_mut(para_idx)
    }

    /// All paragraph styles in order.
    pub fn paragraph_styles(&self) -> &[StyleMap] {
        &self.paragraphs
    }

    pub(crate) fn paragraph_styles_mut(&mut self) -> impl Iterator<Item = &mut StyleMap> {
        self.paragraphs.iter_mut()
    }

    /// Group the document into maximal runs of identically styled characters.
    ///
    /// Useful for rendering and for exporting with formatting.
    pub fn to_styled_runs(&self) -> Vec<(String, StyleMap)> {
        let mut runs: Vec<(String, StyleMap)> = Vec::new();
        for unit in &self.units {
            match runs.last_mut() {
                Some((text, style)) if *style == unit.style => text.push(unit.ch),
                _ => runs.push((unit.ch.to_string(), unit.style.clone())),
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{FONT_WEIGHT, TEXT_ALIGNMENT};

    fn bold() -> StyleMap {
        StyleMap::new().with(FONT_WEIGHT, "bold")
    }

    #[test]
    fn test_empty_document() {
        let doc = StyledDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.text(), "");
        assert_eq!(doc.paragraph_count(), 1);
    }

    #[test]
    fn test_from_text() {
        let doc = StyledDocument::from_text("Hello, world!");
        assert_eq!(doc.text(), "Hello, world!");
        assert_eq!(doc.len(), 13);
        assert!(doc.units().iter().all(|u| u.style.is_empty()));
    }

    #[test]
    fn test_len_counts_characters_not_bytes() {
        let doc = StyledDocument::from_text("Página");
        assert_eq!(doc.len(), 6);
        assert_eq!(doc.unit(1).map(|u| u.ch), Some('á'));
    }

    #[test]
    fn test_insert_styled() {
        let mut doc = StyledDocument::from_text("Hello world");
        doc.insert(5, ",", &bold());
        assert_eq!(doc.text(), "Hello, world");
        assert_eq!(doc.style_at(5), Some(&bold()));
        assert!(doc.style_at(4).is_some_and(StyleMap::is_empty));
        assert!(doc.style_at(6).is_some_and(StyleMap::is_empty));
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut doc = StyledDocument::from_text("abc");
        doc.insert(99, "d", &StyleMap::new());
        assert_eq!(doc.text(), "abcd");
    }

    #[test]
    fn test_delete() {
        let mut doc = StyledDocument::from_text("Hello, world!");
        let deleted = doc.delete(5..7);
        assert_eq!(deleted, ", ");
        assert_eq!(doc.text(), "Helloworld!");
        assert_eq!(doc.delete(20..30), "");
    }

    #[test]
    fn test_paragraph_count() {
        assert_eq!(StyledDocument::from_text("Hello").paragraph_count(), 1);
        assert_eq!(StyledDocument::from_text("Hello\nWorld").paragraph_count(), 2);
        assert_eq!(StyledDocument::from_text("Line 1\nLine 2\nLine 3").paragraph_count(), 3);
        assert_eq!(StyledDocument::from_text("trailing\n").paragraph_count(), 2);
    }

    #[test]
    fn test_paragraph_at() {
        let doc = StyledDocument::from_text("Hello\nWorld\nTest");

        assert_eq!(doc.paragraph_at(0), 0);
        assert_eq!(doc.paragraph_at(5), 0);
        assert_eq!(doc.paragraph_at(6), 1);
        assert_eq!(doc.paragraph_at(11), 1);
        assert_eq!(doc.paragraph_at(12), 2);
        assert_eq!(doc.paragraph_at(16), 2);
        assert_eq!(doc.paragraph_at(100), 2);
    }

    #[test]
    fn test_newline_insert_splits_paragraph_and_copies_style() {
        let mut doc = StyledDocument::from_text("HelloWorld");
        doc.paragraph_style_mut(0).unwrap().set(TEXT_ALIGNMENT, "center");

        doc.insert(5, "\n", &StyleMap::new());

        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.paragraph_style(1).unwrap().get(TEXT_ALIGNMENT), Some("center"));
    }

    #[test]
    fn test_newline_delete_merges_paragraphs_keeping_first_style() {
        let mut doc = StyledDocument::from_text("one\ntwo\nthree");
        doc.paragraph_style_mut(1).unwrap().set(TEXT_ALIGNMENT, "right");
        doc.paragraph_style_mut(2).unwrap().set(TEXT_ALIGNMENT, "center");

        // Remove "two\n": paragraph 1 ("two") and 2 ("three") merge.
        doc.delete(4..8);

        assert_eq!(doc.text(), "one\nthree");
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.paragraph_style(1).unwrap().get(TEXT_ALIGNMENT), Some("right"));
    }

    #[test]
    fn test_set_text_resets_paragraphs() {
        let mut doc = StyledDocument::from_text("a\nb\nc");
        doc.paragraph_style_mut(2).unwrap().set(TEXT_ALIGNMENT, "right");

        doc.set_text("x\ny", &bold());

        assert_eq!(doc.paragraph_count(), 2);
        assert!(doc.paragraph_styles().iter().all(StyleMap::is_empty));
        assert_eq!(doc.style_at(0), Some(&bold()));
    }

    #[test]
    fn test_to_styled_runs() {
        let mut doc = StyledDocument::from_text("Hello, world!");
        for style in doc.styles_mut(0..5) {
            style.set(FONT_WEIGHT, "bold");
        }

        let runs = doc.to_styled_runs();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].0, "Hello");
        assert_eq!(runs[0].1, bold());
        assert_eq!(runs[1].0, ", world!");
        assert!(runs[1].1.is_empty());
    }
}
