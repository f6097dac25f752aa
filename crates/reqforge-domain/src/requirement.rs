//! Requirement units: the terminal records of the pipeline

use crate::chunk::ChunkMetadata;
use crate::compatibility::CompatibilityAttachment;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A command referenced by a requirement
///
/// Only `name` is fixed; anything else found on the record (description,
/// timeout, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRef {
    /// Command token, e.g. `CMD_INIT`
    pub name: String,

    /// Additional attributes
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl CommandRef {
    /// A bare command reference
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }

    /// Normalize an arbitrary catalog entry at position `index`
    ///
    /// Objects take their name from `name`, then `command`, then a positional
    /// placeholder. Strings are the name. Anything else gets a placeholder
    /// name and is kept under `raw`.
    pub fn from_value(entry: Value, index: usize) -> Self {
        let placeholder = || format!("command_{}", index + 1);
        match entry {
            Value::Object(mut obj) => {
                let name = [obj.get("name"), obj.get("command")]
                    .into_iter()
                    .flatten()
                    .filter_map(Value::as_str)
                    .find(|s| !s.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(placeholder);
                obj.remove("name");
                Self {
                    name,
                    attributes: obj,
                }
            }
            Value::String(name) => Self::named(name),
            other => {
                let mut attributes = Map::new();
                attributes.insert("raw".to_string(), other);
                Self {
                    name: placeholder(),
                    attributes,
                }
            }
        }
    }
}

/// One verification requirement with full evidence traceability
///
/// All twelve fields are always present after assembly; unset ones hold the
/// zero value of their type, never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementUnit {
    /// `REQ-0001`, `REQ-0002`, ... by position
    #[serde(default)]
    pub id: String,

    /// Short title
    #[serde(default)]
    pub title: String,

    /// Requirement description
    #[serde(default)]
    pub description: String,

    /// Pages the summarizer attributed to this requirement
    #[serde(default)]
    pub source_pages: Vec<u32>,

    /// Chunk provenance (start page, contributing kinds)
    #[serde(default)]
    pub evidence: ChunkMetadata,

    /// Commands found in the source chunk
    #[serde(default, deserialize_with = "lenient_commands")]
    pub commands: Vec<CommandRef>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// IDs of requirements this one depends on
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Summarizer confidence
    #[serde(default)]
    pub confidence: f64,

    /// Reviewer verdict
    #[serde(default)]
    pub validation_status: String,

    /// Reviewer notes
    #[serde(default)]
    pub notes: String,

    /// Command sequencing matrix (populated on one target requirement)
    #[serde(default)]
    pub compatibility_matrix: CompatibilityAttachment,
}

impl RequirementUnit {
    /// Names of the attached commands, in order
    pub fn command_names(&self) -> Vec<String> {
        self.commands.iter().map(|c| c.name.clone()).collect()
    }
}

/// Read `commands` given as a list, a map of entries, or a single entry
fn lenient_commands<'de, D>(deserializer: D) -> Result<Vec<CommandRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<Value> = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(Value::Object(map)) => map.into_iter().map(|(_, v)| v).collect(),
        Some(single) => vec![single],
    };
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| CommandRef::from_value(entry, idx))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_fields_serialized() {
        let unit = RequirementUnit::default();
        let value = serde_json::to_value(&unit).unwrap();
        let obj = value.as_object().unwrap();
        for field in [
            "id",
            "title",
            "description",
            "source_pages",
            "evidence",
            "commands",
            "tags",
            "dependencies",
            "confidence",
            "validation_status",
            "notes",
            "compatibility_matrix",
        ] {
            assert!(obj.contains_key(field), "missing field {field}");
            assert!(!obj[field].is_null(), "null field {field}");
        }
        assert_eq!(obj.len(), 12);
    }

    #[test]
    fn test_command_entries_normalized() {
        let unit: RequirementUnit = serde_json::from_value(json!({
            "id": "REQ-0001",
            "commands": [
                {"name": "CMD_INIT", "description": "Initialize module"},
                {"command": "CMD_START", "timeout": 5},
                "CMD_STOP",
                42
            ]
        }))
        .unwrap();

        assert_eq!(unit.commands.len(), 4);
        assert_eq!(unit.commands[0].name, "CMD_INIT");
        assert_eq!(unit.commands[0].attributes["description"], "Initialize module");
        assert_eq!(unit.commands[1].name, "CMD_START");
        assert_eq!(unit.commands[1].attributes["timeout"], 5);
        assert_eq!(unit.commands[2].name, "CMD_STOP");
        assert_eq!(unit.commands[3].name, "command_4");
        assert_eq!(unit.commands[3].attributes["raw"], 42);
    }

    #[test]
    fn test_commands_as_map_or_scalar() {
        let unit: RequirementUnit =
            serde_json::from_value(json!({"commands": {"a": "CMD_A", "b": {"name": "CMD_B"}}}))
                .unwrap();
        assert_eq!(unit.command_names(), vec!["CMD_A", "CMD_B"]);

        let unit: RequirementUnit = serde_json::from_value(json!({"commands": "CMD_X"})).unwrap();
        assert_eq!(unit.command_names(), vec!["CMD_X"]);

        let unit: RequirementUnit = serde_json::from_value(json!({"commands": null})).unwrap();
        assert!(unit.commands.is_empty());
    }
}
