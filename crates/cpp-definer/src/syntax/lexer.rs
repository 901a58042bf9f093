use std::sync::Arc;

use logos::Logos;
use tracing::error;

use crate::syntax::kind::{LexToken, Token, TokenKind};

/// A tokenizer over a shrinking text buffer.
///
/// Every call to [`Iterator::next`] cuts one token from the front of the
/// buffer. Text can be pushed back with [`Tokenizer::prepend`], and the
/// whole buffer can be snapshotted with [`Tokenizer::save`] and later
/// restored or discarded. Snapshots form a stack; each one is an immutable
/// value, so nested speculative parses never observe each other's edits.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    text: Arc<str>,
    /// Byte offset of the unconsumed part of `text`.
    pos: usize,
    checkpoints: Vec<Checkpoint>,
}

#[derive(Debug, Clone)]
struct Checkpoint {
    text: Arc<str>,
    pos: usize,
}

impl Tokenizer {
    pub fn new(text: &str) -> Self {
        Self {
            text: Arc::from(text),
            pos: 0,
            checkpoints: Vec::new(),
        }
    }

    /// The text that has not been tokenized yet.
    pub fn remaining(&self) -> &str {
        &self.text[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Pushes `value` back onto the front of the buffer.
    pub fn prepend(
        &mut self,
        value: &str,
    ) {
        // Pushing back what was just consumed only moves the cursor.
        if self.text[..self.pos].ends_with(value) {
            self.pos -= value.len();
            return;
        }
        let mut text = String::with_capacity(value.len() + self.text.len() - self.pos);
        text.push_str(value);
        text.push_str(self.remaining());
        self.text = Arc::from(text);
        self.pos = 0;
    }

    /// Saves a snapshot of the remaining text.
    pub fn save(&mut self) {
        self.checkpoints.push(Checkpoint {
            text: Arc::clone(&self.text),
            pos: self.pos,
        });
    }

    /// Replaces the buffer with the most recent snapshot and pops it.
    pub fn restore(&mut self) {
        let Some(snapshot) = self.checkpoints.pop() else {
            error!("tokenizer restore without a saved checkpoint");
            debug_assert!(false, "tokenizer restore without a saved checkpoint");
            return;
        };
        self.text = snapshot.text;
        self.pos = snapshot.pos;
    }

    /// Pops the most recent snapshot, keeping the buffer as it is.
    pub fn discard(&mut self) {
        if self.checkpoints.pop().is_none() {
            error!("tokenizer discard without a saved checkpoint");
            debug_assert!(false, "tokenizer discard without a saved checkpoint");
        }
    }

    /// Number of snapshots currently saved.
    pub fn checkpoint_depth(&self) -> usize {
        self.checkpoints.len()
    }

    fn chop(
        &mut self,
        len: usize,
        kind: TokenKind,
    ) -> Token {
        let end = self.pos + len;
        let token = Token::new(&self.text[self.pos..end], kind);
        self.pos = end;
        token
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    /// Consumes the longest matching prefix. Input no rule recognizes
    /// becomes a single-character [`TokenKind::Unknown`] token, so every call
    /// on a non-empty buffer makes progress.
    fn next(&mut self) -> Option<Token> {
        let rest = self.remaining();
        let first = rest.chars().next()?;

        let mut lexer = LexToken::lexer(rest);
        let (len, kind) = match lexer.next() {
            Some(Ok(token)) if !lexer.slice().is_empty() => (lexer.span().end, TokenKind::from(token)),
            _ => (first.len_utf8(), TokenKind::Unknown),
        };
        Some(self.chop(len, kind))
    }
}

#[cfg(test)]
#[path = "../../tests/src/syntax/lexer_tests.rs"]
mod tests;
