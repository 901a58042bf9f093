//! Tokenizer and backtracking parser for C++ class heads and method
//! declarations.

pub mod ast;
pub mod kind;
pub mod lexer;
pub mod parse_class;
pub mod parse_method;
pub mod parser;
pub mod scope;

pub use ast::{BaseDecl, ClassDecl, ClassName, FuncParam, MethodDecl, Segment, SegmentKind};
pub use kind::{Token, TokenKind};
pub use lexer::Tokenizer;
pub use parser::Parser;
