use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_timestamp_ms"
    )]
    pub timestamp_ms: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_content"
    )]
    pub content: Option<String>,
    /// Sender, reactions, media references and anything else the export carries
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Every message from one export directory, merged into a single list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    /// Non-`messages` fields of the first document (participants, title, ...)
    pub envelope: Map<String, Value>,
    pub messages: Vec<Message>,
    /// Files merged, in merge order
    pub sources: Vec<PathBuf>,
}

impl Dataset {
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn title(&self) -> Option<&str> {
        self.envelope.get("title").and_then(Value::as_str)
    }
}
