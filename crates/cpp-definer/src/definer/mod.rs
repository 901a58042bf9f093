//! Synthesizes out-of-line definitions from in-class declarations.
//!
//! This is the boundary the host talks to: it hands over the text before the
//! cursor and the selected declaration(s), and gets back either definition
//! text or `None`, in which case it should fall back to a plain copy.

use std::collections::HashSet;

use tracing::debug;

use crate::syntax::{ClassDecl, MethodDecl, Parser, Segment, SegmentKind};

/// Keywords that are legal in a declaration but not on an out-of-line definition.
pub const DEFAULT_DISCARDED_SEGMENTS: [&str; 5] = ["override", "virtual", "explicit", "static", "final"];

/// Text the host extracted from the editor for one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorContext {
    /// Selected text, or the current line when nothing is selected.
    pub selection_text: String,
    pub text_before_cursor: String,
}

impl EditorContext {
    pub fn new(
        selection_text: impl Into<String>,
        text_before_cursor: impl Into<String>,
    ) -> Self {
        Self {
            selection_text: selection_text.into(),
            text_before_cursor: text_before_cursor.into(),
        }
    }
}

/// Textual glue and filtering applied to generated definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinerConfig {
    /// Appended to every definition.
    pub text_after_def: String,
    /// Inserted between definitions when there is more than one.
    pub text_between_multiple_defs: String,
    /// Appended once after the last of several definitions.
    pub text_after_multiple_defs: String,
    /// Segments dropped from definitions when their text matches exactly.
    pub discarded_segments: HashSet<String>,
}

impl Default for DefinerConfig {
    fn default() -> Self {
        Self {
            text_after_def: "\n{\n}\n".to_string(),
            text_between_multiple_defs: "\n".to_string(),
            text_after_multiple_defs: String::new(),
            discarded_segments: DEFAULT_DISCARDED_SEGMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub struct Definer {
    config: DefinerConfig,
}

impl Definer {
    pub fn new(config: DefinerConfig) -> Self {
        Self {
            config,
        }
    }

    /// Resolves the enclosing class, parses the selected declarations and
    /// renders their definitions joined with the configured glue.
    pub fn define_methods(
        &self,
        context: &EditorContext,
    ) -> Option<String> {
        let Some(class_decl) = resolve_enclosing_class(&context.text_before_cursor) else {
            debug!("no enclosing class before the cursor");
            return None;
        };

        let mut parser = Parser::new(&context.selection_text);
        let Some(methods) = parser.parse_method_decls() else {
            debug!(class = %class_decl.class_name, "selection holds no method declaration");
            return None;
        };

        let definitions: Vec<String> =
            methods.iter().filter_map(|method| self.define_method(&class_decl, method)).collect();
        if definitions.is_empty() {
            debug!(methods = methods.len(), "no definition could be rendered");
            return None;
        }
        debug!(class = %class_decl.class_name, count = definitions.len(), "definitions rendered");
        Some(self.join_definitions(definitions))
    }

    /// Renders one declaration as a definition qualified with the class name.
    ///
    /// Discarded keywords are dropped, and so is a trailing `= ...` after the
    /// declarator (`= 0`, `= default`, in-class initializers).
    pub fn define_method(
        &self,
        class_decl: &ClassDecl,
        method: &MethodDecl,
    ) -> Option<String> {
        let (declarator_index, declarator) = match method.declarator() {
            Some(segment) => (method.name_segment?, render_declarator(segment, method)),
            None => self.guess_declarator(method)?,
        };

        let mut parts: Vec<String> = Vec::with_capacity(method.segments.len());
        for (index, segment) in method.segments.iter().enumerate() {
            if index == declarator_index {
                parts.push(format!("{}::{}", class_decl.class_name, declarator));
                continue;
            }
            if index > declarator_index && segment.is_symbol("=") {
                break;
            }
            if self.config.discarded_segments.contains(&segment.text) {
                continue;
            }
            parts.push(segment.text.clone());
        }
        Some(parts.join(" "))
    }

    /// Without a `name(...)` segment, the name is taken to be the last
    /// plain or bracketed word before any `=`, e.g. `count` in
    /// `static int count = 0;`.
    fn guess_declarator(
        &self,
        method: &MethodDecl,
    ) -> Option<(usize, String)> {
        let end = method.segments.iter().position(|segment| segment.is_symbol("=")).unwrap_or(method.segments.len());
        let (index, segment) = method.segments[..end].iter().enumerate().rev().find(|(_, segment)| {
            matches!(segment.kind, SegmentKind::MacroLike | SegmentKind::FunctionLikeWithBrackets)
                && !self.config.discarded_segments.contains(&segment.text)
        })?;
        debug!(name = %segment.text, "declarator guessed without a parameter list");
        Some((index, segment.text.clone()))
    }

    fn join_definitions(
        &self,
        definitions: Vec<String>,
    ) -> String {
        let config = &self.config;
        if let [single] = definitions.as_slice() {
            return format!("{single}{}", config.text_after_def);
        }
        let mut out = String::new();
        for (index, definition) in definitions.iter().enumerate() {
            if index > 0 {
                out.push_str(&config.text_between_multiple_defs);
            }
            out.push_str(definition);
            out.push_str(&config.text_after_def);
        }
        out.push_str(&config.text_after_multiple_defs);
        out
    }
}

/// Rebuilds the declarator from its parameters when they were recovered,
/// which drops default values; otherwise keeps the captured text.
fn render_declarator(
    segment: &Segment,
    method: &MethodDecl,
) -> String {
    let (Some(params), Some(paren)) = (&method.params, segment.text.find('(')) else {
        return segment.text.clone();
    };
    let name = segment.text[..paren].trim_end();
    let params: Vec<&str> = params.iter().map(|param| param.text.as_str()).collect();
    format!("{name}({})", params.join(", "))
}

/// Finds the class whose body encloses the end of `text_before_cursor`.
pub fn resolve_enclosing_class(text_before_cursor: &str) -> Option<ClassDecl> {
    let mut parser = Parser::new(text_before_cursor);
    parser.parse_enclosing_class()
}

/// Turns the declaration(s) in `selection_text` into definitions for the
/// class enclosing the end of `text_before_cursor`.
pub fn define_methods(
    selection_text: &str,
    text_before_cursor: &str,
    config: DefinerConfig,
) -> Option<String> {
    let context = EditorContext::new(selection_text, text_before_cursor);
    Definer::new(config).define_methods(&context)
}

#[cfg(test)]
#[path = "../../tests/src/definer/definer_tests.rs"]
mod tests;
