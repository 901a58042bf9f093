//! Layered settings: defaults, then `cppdef.toml`, then a JSON payload from
//! the host.
//!
//! Each category lives in its own file. [`Settings`] aggregates them and
//! merges partial payloads, given either flat or under the
//! [`SETTINGS_SECTION_KEY`] section.

pub(crate) mod definer;
pub(crate) mod file;
pub(crate) mod logging;
pub(crate) mod schema;

use std::{collections::HashMap, path::Path};

use definer::DefinerSettingsPatch;
pub use file::{CONFIG_FILENAME, find_config_toml, load_config_toml, resolve_config_toml};
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
pub use schema::{
    SchemaField, SchemaType, generate_configuration_markdown, generate_package_json_properties, schema_fields,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::definer::DefinerConfig;

pub const SETTINGS_SECTION_KEY: &str = "cpp-def-paster";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub definer: DefinerConfig,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn from_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    /// Defaults overlaid with the `cppdef.toml` at `path`, if it loads.
    pub fn from_toml_file(path: &Path) -> Self {
        Self::from_payload(load_config_toml(path).as_ref())
    }

    /// Defaults overlaid with the nearest `cppdef.toml` above `source_path`.
    pub fn discover(source_path: &Path) -> Self {
        Self::from_payload(resolve_config_toml(source_path).as_ref())
    }

    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            match serde_json::from_value::<SettingsPatch>(candidate.clone()) {
                Ok(patch) => merged.apply_patch(patch),
                Err(err) => warn!(error = %err, "ignoring malformed settings payload"),
            }
        }

        merged.normalize();
        merged
    }

    fn apply_patch(
        &mut self,
        patch: SettingsPatch,
    ) {
        self.definer.apply_patch(patch.definer);
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.definer.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SettingsPatch {
    #[serde(flatten)]
    definer: DefinerSettingsPatch,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
