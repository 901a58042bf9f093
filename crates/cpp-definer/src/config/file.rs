use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = "cppdef.toml";

/// Walks from `start` (or its parent directory when `start` is a file)
/// upward until a `cppdef.toml` is found.
pub fn find_config_toml(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Reads a `cppdef.toml` into a settings payload.
///
/// Returns `None` if the file cannot be read or parsed.
pub fn load_config_toml(path: &Path) -> Option<Value> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot read config file");
            return None;
        },
    };
    parse_config_toml(&content).or_else(|| {
        warn!(path = %path.display(), "ignoring malformed config file");
        None
    })
}

pub(crate) fn parse_config_toml(content: &str) -> Option<Value> {
    match toml::from_str::<Value>(content) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(error = %err, "config toml parse failed");
            None
        },
    }
}

/// Attempts to resolve a `cppdef.toml` for the given source file and return
/// its payload.
pub fn resolve_config_toml(source_path: &Path) -> Option<Value> {
    let toml_path = find_config_toml(source_path)?;
    debug!(path = %toml_path.display(), "using config file");
    load_config_toml(&toml_path)
}
