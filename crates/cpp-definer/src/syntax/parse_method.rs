use tracing::{debug, trace};

use crate::syntax::{
    ast::{FuncParam, MethodDecl, Segment, SegmentKind},
    kind::TokenKind,
    parser::Parser,
};

impl Parser {
    /// Parses one segment: a named segment, then an attribute-like segment,
    /// then a symbol. Each alternative starts from the same position.
    pub fn parse_segment(&mut self) -> Option<Segment> {
        if let Some(segment) = self.try_parse(Self::parse_named_segment) {
            return Some(segment);
        }
        if let Some(segment) = self.try_parse(Self::parse_attribute_like_segment) {
            return Some(segment);
        }
        self.try_parse(Self::parse_symbol_segment)
    }

    /// `FOO`, `foo(int a)`, `std::vector<int>`, `values[8]`.
    fn parse_named_segment(&mut self) -> Option<Segment> {
        let name = self.parse_qualified_name()?;
        let Some(next) = self.peek_significant() else {
            return Some(Segment::new(name, SegmentKind::MacroLike));
        };
        let kind = match next {
            TokenKind::LParen => SegmentKind::FunctionLikeWithParen,
            TokenKind::Less => SegmentKind::FunctionLikeWithAngleBrackets,
            TokenKind::LBracket => SegmentKind::FunctionLikeWithBrackets,
            _ => return Some(Segment::new(name, SegmentKind::MacroLike)),
        };
        let content = self.parse_bracket_content(next, next.closing()?)?;
        Some(Segment::new(name + &content, kind))
    }

    /// `[[nodiscard]]`, kept exactly as written.
    fn parse_attribute_like_segment(&mut self) -> Option<Segment> {
        if self.peek_significant()? != TokenKind::LBracket {
            return None;
        }
        let content = self.parse_bracket_content(TokenKind::LBracket, TokenKind::RBracket)?;
        Some(Segment::new(content, SegmentKind::AttributeLike))
    }

    fn parse_symbol_segment(&mut self) -> Option<Segment> {
        let token = self.next_significant()?;
        match token.kind {
            TokenKind::Amp | TokenKind::Star | TokenKind::Comma | TokenKind::Equal => {
                Some(Segment::new(token.text, SegmentKind::Symbol))
            },
            _ => None,
        }
    }

    /// Parses segments up to and including a terminating `;`.
    ///
    /// The declarator is the last `name(...)` segment, preferring one whose
    /// text re-parses as a parameter list. A declaration without any such
    /// segment is still returned, with `name_segment` left empty.
    pub fn parse_method_decl(&mut self) -> Option<MethodDecl> {
        self.try_parse(|parser| {
            let mut segments = Vec::new();
            loop {
                segments.push(parser.parse_segment()?);
                if parser.eat(TokenKind::Semicolon).is_some() {
                    break;
                }
            }
            let (name_segment, params) = select_declarator(&segments);
            if name_segment.is_none() {
                debug!(segments = segments.len(), "no declarator segment found");
            }
            Some(MethodDecl {
                name_segment,
                segments,
                params,
            })
        })
    }

    /// Parses consecutive method declarations. At least one is required.
    pub fn parse_method_decls(&mut self) -> Option<Vec<MethodDecl>> {
        let mut methods = Vec::new();
        while let Some(method) = self.parse_method_decl() {
            methods.push(method);
        }
        if methods.is_empty() {
            None
        } else {
            Some(methods)
        }
    }

    /// `name(type a, type b = 1)` as a whole input. `name()` gives an empty list.
    fn parse_declarator_params(&mut self) -> Option<Vec<FuncParam>> {
        self.parse_qualified_name()?;
        self.eat(TokenKind::LParen)?;
        if self.eat(TokenKind::RParen).is_some() {
            return Some(Vec::new());
        }
        let params = self.parse_comma_list(Self::parse_param)?;
        self.eat(TokenKind::RParen)?;
        Some(params)
    }

    /// Collects segments until `,` or `)`. Once `=` follows at least one
    /// segment, the rest of the parameter is its default value and is dropped.
    fn parse_param(&mut self) -> Option<FuncParam> {
        let mut parts: Vec<String> = Vec::new();
        loop {
            if matches!(self.peek_significant()?, TokenKind::RParen | TokenKind::Comma) {
                break;
            }
            let segment = self.parse_segment()?;
            if segment.is_symbol("=") && !parts.is_empty() {
                self.skip_default_value()?;
                break;
            }
            parts.push(segment.text);
        }
        if parts.is_empty() {
            return None;
        }
        Some(FuncParam {
            text: parts.join(" "),
        })
    }

    /// Skips tokens up to the `,` or `)` ending the current parameter,
    /// stepping over anything nested in brackets.
    fn skip_default_value(&mut self) -> Option<()> {
        let mut depth = 0usize;
        loop {
            let token = self.next_significant()?;
            match token.kind {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::Less => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::Greater if depth > 0 => {
                    depth -= 1;
                },
                TokenKind::RParen | TokenKind::Comma if depth == 0 => {
                    self.tokenizer.prepend(&token.text);
                    return Some(());
                },
                _ => {},
            }
        }
    }
}

/// Picks the declarator among `segments`, scanning from the end.
fn select_declarator(segments: &[Segment]) -> (Option<usize>, Option<Vec<FuncParam>>) {
    let candidates = || {
        segments
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, segment)| segment.kind == SegmentKind::FunctionLikeWithParen)
    };

    for (index, segment) in candidates() {
        if let Some(params) = Parser::parse_isolated(&segment.text, Parser::parse_declarator_params) {
            trace!(declarator = %segment.text, params = params.len(), "declarator with parameter list");
            return (Some(index), Some(params));
        }
    }

    match candidates().next() {
        Some((index, segment)) => {
            trace!(declarator = %segment.text, "declarator without parameter list");
            (Some(index), None)
        },
        None => (None, None),
    }
}

#[cfg(test)]
#[path = "../../tests/src/syntax/parse_method_tests.rs"]
mod tests;
