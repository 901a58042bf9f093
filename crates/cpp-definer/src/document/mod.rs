pub(crate) mod text_document;

pub use text_document::{Position, Selection, TextDocument};
