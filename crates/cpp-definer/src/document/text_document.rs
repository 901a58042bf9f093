use crate::definer::EditorContext;

/// A 0-based line / UTF-16 column pair, as editors report cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(
        line: u32,
        character: u32,
    ) -> Self {
        Self {
            line,
            character,
        }
    }
}

/// A selection between two positions. `active` is where the cursor sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(
        anchor: Position,
        active: Position,
    ) -> Self {
        Self {
            anchor,
            active,
        }
    }

    pub fn cursor(position: Position) -> Self {
        Self::new(position, position)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// True for a non-empty selection made from right to left, i.e. the
    /// cursor sits at its start.
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }
}

/// Snapshot of a document's text, as the host sees it.
#[derive(Debug, Clone)]
pub struct TextDocument {
    text: String,
    /// Pre-computed line start byte offsets.
    line_offsets: Vec<usize>,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_offsets = Self::compute_line_offsets(&text);
        Self {
            text,
            line_offsets,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Return the full text of a given 0-based line (without the trailing newline).
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let start = *self.line_offsets.get(line)?;
        let end = self.line_offsets.get(line + 1).copied().unwrap_or(self.text.len());
        let slice = &self.text[start..end];
        Some(slice.trim_end_matches('\n').trim_end_matches('\r'))
    }

    /// Convert a `Position` to a byte offset. Columns past the end of the
    /// line clamp to the line end.
    pub fn offset_of(
        &self,
        pos: Position,
    ) -> Option<usize> {
        let line = pos.line as usize;
        let line_start = *self.line_offsets.get(line)?;
        let line_text = self.line_text(line)?;

        // Character offsets are UTF-16 code-unit counts.
        let mut utf16_offset: u32 = 0;
        let mut byte_offset = line_start;
        for ch in line_text.chars() {
            if utf16_offset >= pos.character {
                break;
            }
            utf16_offset += ch.len_utf16() as u32;
            byte_offset += ch.len_utf8();
        }
        Some(byte_offset)
    }

    /// Everything from the start of the document up to `pos`.
    pub fn text_before(
        &self,
        pos: Position,
    ) -> Option<&str> {
        let offset = self.offset_of(pos)?;
        Some(&self.text[..offset])
    }

    /// The selected text, or the whole line under the cursor when the
    /// selection is empty.
    pub fn selection_or_line(
        &self,
        selection: Selection,
    ) -> Option<&str> {
        if selection.is_empty() {
            return self.line_text(selection.active.line as usize);
        }
        let start = self.offset_of(selection.start())?;
        let end = self.offset_of(selection.end())?;
        Some(&self.text[start..end])
    }

    /// Builds the request context for a selection: the declaration text and
    /// the document text before the cursor.
    pub fn editor_context(
        &self,
        selection: Selection,
    ) -> Option<EditorContext> {
        let selection_text = self.selection_or_line(selection)?;
        let text_before_cursor = self.text_before(selection.active)?;
        Some(EditorContext::new(selection_text, text_before_cursor))
    }

    fn compute_line_offsets(text: &str) -> Vec<usize> {
        let mut offsets = vec![0usize];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(i + 1);
            }
        }
        offsets
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/text_document_tests.rs"]
mod tests;
