pub mod config;
pub mod definer;
pub mod document;
pub mod syntax;

pub use config::{LogLevel, LoggingSettings, SETTINGS_SECTION_KEY, Settings};
pub use definer::{Definer, DefinerConfig, EditorContext, define_methods, resolve_enclosing_class};
pub use document::{Position, Selection, TextDocument};
