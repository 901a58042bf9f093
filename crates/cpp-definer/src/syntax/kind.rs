use logos::Logos;

/// Classification of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// Any character no other rule recognizes.
    Unknown,
    Whitespace,
    /// Line comment, block comment or a whole preprocessor line.
    Comment,
    /// `class`, `struct` or `interface`
    ClassKeyword,
    /// `public`, `private` or `protected`
    AccessKeyword,
    Ident,
    StringLiteral,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    DoubleColon,
    Colon,
    Less,
    Greater,
    Comma,
    Tilde,
    Star,
    Amp,
    Equal,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// The closing counterpart of an opening bracket kind.
    pub fn closing(self) -> Option<TokenKind> {
        match self {
            TokenKind::LParen => Some(TokenKind::RParen),
            TokenKind::LBracket => Some(TokenKind::RBracket),
            TokenKind::Less => Some(TokenKind::Greater),
            _ => None,
        }
    }
}

/// One token cut from the front of a [`Tokenizer`](super::lexer::Tokenizer) buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        kind: TokenKind,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn is(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.kind == kind
    }
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = ())]
pub(crate) enum LexToken {
    #[regex(r"[ \t\r\n\f\x0B]+")]
    Whitespace,

    // Block comments nest, so the closing marker is found by hand.
    #[token("/*", block_comment)]
    // Directives are opaque: `#define X class Y {` must never look like a class.
    #[regex(r"(#|//)[^\n]*\n?", allow_greedy = true)]
    Comment,

    #[regex(r#"'([^'\\]|\\[\s\S])*'?"#, allow_greedy = true)]
    #[regex(r#""([^"\\]|\\[\s\S])*"?"#, allow_greedy = true)]
    StringLiteral,

    #[token("class")]
    #[token("struct")]
    #[token("interface")]
    ClassKeyword,

    #[token("public")]
    #[token("private")]
    #[token("protected")]
    AccessKeyword,

    #[regex(r"[A-Za-z0-9_]+")]
    Ident,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token("::")]
    DoubleColon,
    #[token(":")]
    Colon,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token(",")]
    Comma,
    #[token("~")]
    Tilde,
    #[token("*")]
    Star,
    #[token("&")]
    Amp,
    #[token("=")]
    Equal,
}

/// Extends a `/*` token up to its matching `*/`, counting nested openers.
/// An unterminated comment runs to the end of input.
fn block_comment(lex: &mut logos::Lexer<LexToken>) -> bool {
    let rest = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut len = 0usize;
    while len < rest.len() {
        if rest[len..].starts_with(b"/*") {
            depth += 1;
            len += 2;
        } else if rest[len..].starts_with(b"*/") {
            depth -= 1;
            len += 2;
            if depth == 0 {
                break;
            }
        } else {
            len += 1;
        }
    }
    lex.bump(len);
    true
}

impl From<LexToken> for TokenKind {
    fn from(token: LexToken) -> Self {
        match token {
            LexToken::Whitespace => TokenKind::Whitespace,
            LexToken::Comment => TokenKind::Comment,
            LexToken::StringLiteral => TokenKind::StringLiteral,
            LexToken::ClassKeyword => TokenKind::ClassKeyword,
            LexToken::AccessKeyword => TokenKind::AccessKeyword,
            LexToken::Ident => TokenKind::Ident,
            LexToken::LParen => TokenKind::LParen,
            LexToken::RParen => TokenKind::RParen,
            LexToken::LBrace => TokenKind::LBrace,
            LexToken::RBrace => TokenKind::RBrace,
            LexToken::LBracket => TokenKind::LBracket,
            LexToken::RBracket => TokenKind::RBracket,
            LexToken::Semicolon => TokenKind::Semicolon,
            LexToken::DoubleColon => TokenKind::DoubleColon,
            LexToken::Colon => TokenKind::Colon,
            LexToken::Less => TokenKind::Less,
            LexToken::Greater => TokenKind::Greater,
            LexToken::Comma => TokenKind::Comma,
            LexToken::Tilde => TokenKind::Tilde,
            LexToken::Star => TokenKind::Star,
            LexToken::Amp => TokenKind::Amp,
            LexToken::Equal => TokenKind::Equal,
        }
    }
}
