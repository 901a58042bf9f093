use tracing::{debug, trace};

use crate::syntax::{ast::ClassDecl, kind::TokenKind, parser::Parser};

/// Upper bound on tokens scanned while looking for the enclosing class.
pub(crate) const MAX_SCAN_TOKENS: usize = 200_000;

/// One open brace level. Carries the class only when the brace opened a
/// class body.
#[derive(Debug)]
struct ScopeFrame {
    class_decl: Option<ClassDecl>,
}

impl Parser {
    /// Scans the whole buffer (the text before the cursor) and returns the
    /// innermost class whose body is still open at the end of it.
    ///
    /// Braces of namespaces, functions and other blocks open anonymous
    /// frames, so they neither hide an outer class nor get mistaken for one.
    /// A `}` without a matching frame is ignored.
    pub fn parse_enclosing_class(&mut self) -> Option<ClassDecl> {
        let mut frames: Vec<ScopeFrame> = Vec::new();
        let mut scanned = 0usize;

        while let Some(token) = self.tokenizer.next() {
            scanned += 1;
            if scanned > MAX_SCAN_TOKENS {
                debug!(limit = MAX_SCAN_TOKENS, "scope scan aborted, input too long");
                return None;
            }
            match token.kind {
                TokenKind::ClassKeyword => {
                    let class_decl = self.try_parse(|parser| {
                        parser.tokenizer.prepend(&token.text);
                        parser.parse_class_decl()
                    });
                    if let Some(class_decl) = class_decl {
                        trace!(class = %class_decl.class_name, depth = frames.len(), "class scope opened");
                        frames.push(ScopeFrame {
                            class_decl: Some(class_decl),
                        });
                    }
                },
                TokenKind::LBrace => frames.push(ScopeFrame {
                    class_decl: None,
                }),
                TokenKind::RBrace => {
                    frames.pop();
                },
                _ => {},
            }
        }

        frames.into_iter().rev().find_map(|frame| frame.class_decl)
    }
}

#[cfg(test)]
#[path = "../../tests/src/syntax/scope_tests.rs"]
mod tests;
