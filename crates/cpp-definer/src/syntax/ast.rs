//! Declarations recovered by the [`Parser`](super::parser::Parser).
//!
//! Everything here is built once per request and never mutated afterwards.

use std::fmt;

/// The name of a class, possibly with template arguments.
///
/// `args == None` means no `<...>` followed the name at all, while
/// `Some(vec![])` records an explicit empty argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName {
    pub name: String,
    pub args: Option<Vec<ClassName>>,
}

impl ClassName {
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: None,
        }
    }

    pub fn templated(
        name: impl Into<String>,
        args: Vec<ClassName>,
    ) -> Self {
        Self {
            name: name.into(),
            args: Some(args),
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(args) = &self.args {
            f.write_str("<")?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// One entry of a base-clause, e.g. `public Base<int>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseDecl {
    pub access: Option<String>,
    pub is_virtual: bool,
    pub class_name: ClassName,
}

/// A class head, up to and including the opening brace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassDecl {
    pub class_name: String,
    /// Everything between the class keyword and the name, e.g. an export macro.
    pub attribute: Option<String>,
    /// Everything between the name and the base-clause, e.g. `final`.
    pub trailing_attribute: Option<String>,
    /// `None` when there is no base-clause.
    pub bases: Option<Vec<BaseDecl>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// `[[nodiscard]]`
    AttributeLike,
    /// `*`, `&`, `,` or `=`
    Symbol,
    /// `Q_DECL_EXPORT`, `std::uint8_t`, `const`
    MacroLike,
    /// `__attribute__((visibility("default")))`, `foo(int a)`
    FunctionLikeWithParen,
    /// `std::vector<int>`
    FunctionLikeWithAngleBrackets,
    /// `values[8]`
    FunctionLikeWithBrackets,
}

/// One "word" of a declaration. Bracketed content is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn new(
        text: impl Into<String>,
        kind: SegmentKind,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn is_symbol(
        &self,
        symbol: &str,
    ) -> bool {
        self.kind == SegmentKind::Symbol && self.text == symbol
    }
}

/// A reconstructed function parameter without its default value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuncParam {
    pub text: String,
}

/// A method declaration seen as an ordered list of segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDecl {
    /// Index of the declarator segment. `None` when no segment looked like one.
    pub name_segment: Option<usize>,
    pub segments: Vec<Segment>,
    /// Parameters of the declarator, when its text re-parsed as `name(params)`.
    pub params: Option<Vec<FuncParam>>,
}

impl MethodDecl {
    pub fn declarator(&self) -> Option<&Segment> {
        self.segments.get(self.name_segment?)
    }
}
