use serde_json::Value;

use crate::{config::SETTINGS_SECTION_KEY, definer::DEFAULT_DISCARDED_SEGMENTS};

/// One entry in the generated configuration schema.
#[derive(Debug, Clone)]
pub struct SchemaField {
    pub key: String,
    pub description: String,
    pub schema_type: SchemaType,
    pub default: Value,
}

/// Subset of JSON Schema types we support.
#[derive(Debug, Clone)]
pub enum SchemaType {
    String,
    StringEnum {
        values: Vec<&'static str>,
    },
    StringArray,
}

impl SchemaField {
    pub fn to_schema_value(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("markdownDescription".into(), Value::String(self.description.clone()));
        obj.insert("default".into(), self.default.clone());

        match &self.schema_type {
            SchemaType::String => {
                obj.insert("type".into(), Value::String("string".into()));
            },
            SchemaType::StringEnum {
                values,
            } => {
                obj.insert("type".into(), Value::String("string".into()));
                obj.insert("enum".into(), Value::Array(values.iter().map(|v| Value::String(v.to_string())).collect()));
            },
            SchemaType::StringArray => {
                obj.insert("type".into(), Value::String("array".into()));
                let mut items = serde_json::Map::new();
                items.insert("type".into(), Value::String("string".into()));
                obj.insert("items".into(), Value::Object(items));
            },
        }

        Value::Object(obj)
    }

    pub fn to_markdown(&self) -> String {
        format!("- `{SETTINGS_SECTION_KEY}.{}` - {}", self.key, self.description)
    }
}

/// Return the full list of schema fields for every setting.
pub fn schema_fields() -> Vec<SchemaField> {
    vec![
        SchemaField {
            key: "textAfterDef".into(),
            description: "Text appended after every generated definition, typically an empty body.".into(),
            schema_type: SchemaType::String,
            default: Value::String("\n{\n}\n".into()),
        },
        SchemaField {
            key: "textBetweenMultipleDefs".into(),
            description: "Text inserted between definitions when several declarations are selected.".into(),
            schema_type: SchemaType::String,
            default: Value::String("\n".into()),
        },
        SchemaField {
            key: "textAfterMultipleDefs".into(),
            description: "Text appended once after the last of several definitions.".into(),
            schema_type: SchemaType::String,
            default: Value::String(String::new()),
        },
        SchemaField {
            key: "discardedSegments".into(),
            description: "Declaration words that are dropped from definitions, such as `virtual` or `override`. \
                           Entries match whole words exactly."
                .into(),
            schema_type: SchemaType::StringArray,
            default: Value::Array(DEFAULT_DISCARDED_SEGMENTS.iter().map(|s| Value::String(s.to_string())).collect()),
        },
        SchemaField {
            key: "logging.level".into(),
            description: "Logging verbosity for cpp-definer.".into(),
            schema_type: SchemaType::StringEnum {
                values: vec!["error", "warn", "info", "debug", "trace"],
            },
            default: Value::String("info".into()),
        },
    ]
}

/// Generate the `"properties"` object for the VS Code `contributes.configuration` section.
pub fn generate_package_json_properties() -> Value {
    let mut properties = serde_json::Map::new();

    for field in schema_fields() {
        let full_key = format!("{SETTINGS_SECTION_KEY}.{}", field.key);
        properties.insert(full_key, field.to_schema_value());
    }

    Value::Object(properties)
}

/// Generate markdown documentation for all settings.
pub fn generate_configuration_markdown() -> String {
    let mut out = String::new();
    let fields = schema_fields();

    let mut current_section = String::new();
    for field in &fields {
        let section = match field.key.split_once('.') {
            Some((section, _)) => section,
            None => "definitions",
        };
        if section != current_section {
            current_section = section.to_string();
            let title = match section {
                "definitions" => "Definitions",
                "logging" => "Logging",
                other => other,
            };
            out.push_str(&format!("\n## {title}\n\n"));
        }
        out.push_str(&field.to_markdown());
        out.push('\n');
    }

    out
}
