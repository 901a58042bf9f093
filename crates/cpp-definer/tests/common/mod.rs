#![allow(dead_code)]

use std::path::PathBuf;

use cpp_definer::{EditorContext, Position, Selection, TextDocument};

pub const WIDGET_HEADER: &str = "widget/include/widget.h";

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

pub fn read_fixture(relative_path: &str) -> String {
    std::fs::read_to_string(fixture_path(relative_path)).expect("fixture must exist")
}

/// Context for a cursor placed after the indentation of a 1-based `line`,
/// with nothing selected.
pub fn context_at_line(
    doc: &TextDocument,
    line: u32,
) -> EditorContext {
    let text = doc.line_text(line as usize - 1).expect("line exists");
    let indent = (text.len() - text.trim_start().len()) as u32;
    doc.editor_context(Selection::cursor(Position::new(line - 1, indent))).expect("cursor inside document")
}

/// Context for whole 1-based lines `first..=last`, cursor at the start.
pub fn context_for_lines(
    doc: &TextDocument,
    first: u32,
    last: u32,
) -> EditorContext {
    let last_len = doc.line_text(last as usize - 1).expect("line exists").len() as u32;
    let selection = Selection::new(Position::new(last - 1, last_len), Position::new(first - 1, 0));
    doc.editor_context(selection).expect("selection inside document")
}
