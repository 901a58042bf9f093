use tracing::trace;

use crate::syntax::{
    kind::{Token, TokenKind},
    lexer::Tokenizer,
};

/// Upper bound on items in one comma separated list.
pub(crate) const MAX_LIST_ITEMS: usize = 99;

/// Backtracking recursive-descent parser for the subset of C++ needed to
/// recover class heads and method declarations.
///
/// Every production returns `Option`: `None` means "not recognized here" and
/// is never fatal. Productions that may fail after consuming input are run
/// through [`Parser::try_parse`] so the buffer is rewound on failure.
pub struct Parser {
    pub(crate) tokenizer: Tokenizer,
}

impl Parser {
    pub fn new(text: &str) -> Self {
        Self::from_tokenizer(Tokenizer::new(text))
    }

    pub fn from_tokenizer(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Next token that is not whitespace or a comment.
    pub(crate) fn next_significant(&mut self) -> Option<Token> {
        self.tokenizer.by_ref().find(|token| !token.kind.is_trivia())
    }

    /// Looks at the next significant token without consuming it.
    pub(crate) fn peek_significant(&mut self) -> Option<TokenKind> {
        let token = self.next_significant()?;
        self.tokenizer.prepend(&token.text);
        Some(token.kind)
    }

    /// Consumes the next significant token if it has the given kind.
    pub(crate) fn eat(
        &mut self,
        kind: TokenKind,
    ) -> Option<Token> {
        let token = self.next_significant()?;
        if token.is(kind) {
            Some(token)
        } else {
            self.tokenizer.prepend(&token.text);
            None
        }
    }

    /// Runs `parse` speculatively: on `None` the buffer is restored to where
    /// it was before the attempt, on `Some` the consumed input stays consumed.
    pub(crate) fn try_parse<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        self.tokenizer.save();
        let result = parse(self);
        if result.is_some() {
            self.tokenizer.discard();
        } else {
            self.tokenizer.restore();
        }
        result
    }

    /// Parses `text` with a fresh parser, leaving this parser untouched.
    /// The whole of `text` must be used up by `parse`.
    pub(crate) fn parse_isolated<T>(
        text: &str,
        parse: impl FnOnce(&mut Parser) -> Option<T>,
    ) -> Option<T> {
        let mut parser = Parser::new(text);
        let result = parse(&mut parser)?;
        if parser.next_significant().is_some() {
            trace!(text, "isolated parse left trailing input");
            return None;
        }
        Some(result)
    }

    /// Parses `item (, item)*`. An empty list is not accepted.
    pub(crate) fn parse_comma_list<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<Vec<T>> {
        let mut items = Vec::new();
        while items.len() < MAX_LIST_ITEMS {
            items.push(parse_item(self)?);
            let Some(token) = self.next_significant() else {
                return Some(items);
            };
            if !token.is(TokenKind::Comma) {
                self.tokenizer.prepend(&token.text);
                return Some(items);
            }
        }
        trace!(limit = MAX_LIST_ITEMS, "comma list too long");
        None
    }

    /// Captures a balanced `open ... close` run verbatim, delimiters
    /// included. Unterminated content yields `None`.
    pub(crate) fn parse_bracket_content(
        &mut self,
        open: TokenKind,
        close: TokenKind,
    ) -> Option<String> {
        let begin = self.next_significant()?;
        if !begin.is(open) {
            return None;
        }
        let mut content = begin.text;
        let mut depth: i64 = 1;
        for token in self.tokenizer.by_ref() {
            if token.is(open) {
                depth += 1;
            } else if token.is(close) {
                depth -= 1;
            }
            content.push_str(&token.text);
            if depth == 0 {
                return Some(content);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src/syntax/parser_tests.rs"]
mod tests;
