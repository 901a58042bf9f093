use tracing::trace;

use crate::syntax::{
    ast::{BaseDecl, ClassDecl, ClassName, Segment, SegmentKind},
    kind::TokenKind,
    parser::Parser,
};

/// Upper bound on segments between a class keyword and its `:` or `{`.
pub(crate) const MAX_CLASS_HEAD_SEGMENTS: usize = 50;

/// `class EXPORT Name final` split around the segment picked as the name.
struct ClassHead {
    name: String,
    attribute: Option<String>,
    trailing_attribute: Option<String>,
}

impl Parser {
    /// Parses a possibly qualified name: `A`, `ns::B`, `ns::~C`, `::D`.
    ///
    /// An identifier may open the name or follow `::`/`~`, `::` may open the
    /// name or follow an identifier, and `~` may open the name or follow
    /// `::`. The first token that does not fit is pushed back.
    pub fn parse_qualified_name(&mut self) -> Option<String> {
        let mut name = String::new();
        let mut last: Option<TokenKind> = None;
        while let Some(token) = self.next_significant() {
            let fits = match token.kind {
                TokenKind::Ident => matches!(last, None | Some(TokenKind::DoubleColon | TokenKind::Tilde)),
                TokenKind::DoubleColon => matches!(last, None | Some(TokenKind::Ident)),
                TokenKind::Tilde => matches!(last, None | Some(TokenKind::DoubleColon)),
                _ => false,
            };
            if !fits {
                self.tokenizer.prepend(&token.text);
                break;
            }
            name.push_str(&token.text);
            last = Some(token.kind);
        }
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Parses a qualified name with optional template arguments:
    /// `Base`, `std::vector<int>`, `Nest1<Nest2<double>, a<b>>`, `Empty<>`.
    pub fn parse_class_name(&mut self) -> Option<ClassName> {
        let name = self.parse_qualified_name()?;
        if self.eat(TokenKind::Less).is_none() {
            return Some(ClassName::plain(name));
        }
        if self.eat(TokenKind::Greater).is_some() {
            return Some(ClassName::templated(name, Vec::new()));
        }
        let args = self.parse_comma_list(Self::parse_class_name)?;
        self.eat(TokenKind::Greater)?;
        Some(ClassName::templated(name, args))
    }

    /// Parses a class head and body opener:
    /// `class EXPORT_STUFF MyClass final {`,
    /// `struct MyClass : public Base1, private Base2<int> {`.
    ///
    /// Only the text up to the first `{` after the head is consumed.
    pub fn parse_class_decl(&mut self) -> Option<ClassDecl> {
        let head = self.parse_class_head()?;
        let token = self.next_significant()?;
        let bases = match token.kind {
            TokenKind::LBrace => None,
            TokenKind::Colon => {
                let bases = self.parse_comma_list(Self::parse_base)?;
                self.eat(TokenKind::LBrace)?;
                Some(bases)
            },
            _ => return None,
        };
        Some(ClassDecl {
            class_name: head.name,
            attribute: head.attribute,
            trailing_attribute: head.trailing_attribute,
            bases,
        })
    }

    /// `class __declspec(dllexport) MyClass final` up to, not including,
    /// the `:` or `{` that follows. The last macro-like segment other than
    /// `final` is taken as the name.
    fn parse_class_head(&mut self) -> Option<ClassHead> {
        self.eat(TokenKind::ClassKeyword)?;

        let mut segments: Vec<Segment> = Vec::new();
        loop {
            if matches!(self.peek_significant()?, TokenKind::Colon | TokenKind::LBrace) {
                break;
            }
            if segments.len() >= MAX_CLASS_HEAD_SEGMENTS {
                trace!(limit = MAX_CLASS_HEAD_SEGMENTS, "class head too long");
                return None;
            }
            segments.push(self.parse_segment()?);
        }

        let key = segments.iter().rposition(|segment| segment.kind == SegmentKind::MacroLike && segment.text != "final")?;
        Some(ClassHead {
            name: segments[key].text.clone(),
            attribute: join_segments(&segments[..key]),
            trailing_attribute: join_segments(&segments[key + 1..]),
        })
    }

    /// `Base`, `public Base<int>`, `virtual protected ns::Base`.
    fn parse_base(&mut self) -> Option<BaseDecl> {
        let mut is_virtual = self.eat_virtual();
        let access = self.eat(TokenKind::AccessKeyword).map(|token| token.text);
        if !is_virtual {
            is_virtual = self.eat_virtual();
        }
        let class_name = self.parse_class_name()?;
        Some(BaseDecl {
            access,
            is_virtual,
            class_name,
        })
    }

    fn eat_virtual(&mut self) -> bool {
        match self.next_significant() {
            Some(token) if token.is(TokenKind::Ident) && token.text == "virtual" => true,
            Some(token) => {
                self.tokenizer.prepend(&token.text);
                false
            },
            None => false,
        }
    }
}

fn join_segments(segments: &[Segment]) -> Option<String> {
    if segments.is_empty() {
        return None;
    }
    Some(segments.iter().map(|segment| segment.text.as_str()).collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
#[path = "../../tests/src/syntax/parse_class_tests.rs"]
mod tests;
