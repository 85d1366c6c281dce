//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

/// 2021-01-01T00:00:00Z
pub const JAN_1_2021_MS: i64 = 1_609_459_200_000;

pub const MS_PER_DAY: i64 = 86_400_000;

/// Mangle text the way the Messenger export does: one char per UTF-8 byte.
pub fn smuggle(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

/// Builder for test export directories
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw file content
    pub fn with_raw_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Write an export document holding `messages`, smuggling every string
    pub fn with_export(self, name: &str, messages: &[MessageBuilder]) -> Self {
        let document = json!({
            "participants": [{"name": smuggle("Zoë")}, {"name": "Bob"}],
            "title": smuggle("Zoë and Bob"),
            "thread_path": "inbox/zoeandbob_abc123",
            "messages": messages.iter().map(MessageBuilder::to_json).collect::<Vec<_>>(),
        });
        let content = serde_json::to_string_pretty(&document).expect("Failed to serialize");
        self.with_raw_file(name, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single exported message
#[derive(Clone)]
pub struct MessageBuilder {
    sender: String,
    timestamp_ms: Option<i64>,
    content: Option<String>,
}

impl MessageBuilder {
    /// A text message sent at the start of 2021-01-01
    pub fn new() -> Self {
        Self {
            sender: "Bob".to_string(),
            timestamp_ms: Some(JAN_1_2021_MS),
            content: Some("Test message".to_string()),
        }
    }

    pub fn sender(mut self, sender: &str) -> Self {
        self.sender = sender.to_string();
        self
    }

    /// Set the content (written smuggled)
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Drop the content, like a photo or sticker message
    pub fn media(mut self) -> Self {
        self.content = None;
        self
    }

    pub fn timestamp_ms(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Place the message `days` after 2021-01-01, plus `offset_ms` into the day
    pub fn day(self, days: i64, offset_ms: i64) -> Self {
        self.timestamp_ms(JAN_1_2021_MS + days * MS_PER_DAY + offset_ms)
    }

    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_ms = None;
        self
    }

    pub fn to_json(&self) -> Value {
        let mut message = json!({
            "sender_name": smuggle(&self.sender),
            "is_geoblocked_for_viewer": false,
        });
        if let Some(ts) = self.timestamp_ms {
            message["timestamp_ms"] = json!(ts);
        }
        match &self.content {
            Some(content) => message["content"] = json!(smuggle(content)),
            None => message["photos"] = json!([{"uri": "photos/1.jpg"}]),
        }
        message
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A realistic two-file conversation spanning a few months
pub fn realistic_export_dir() -> TempDir {
    let mut first = Vec::new();
    let mut second = Vec::new();

    for day in 0..120 {
        let per_day = (day % 4) as usize;
        for n in 0..per_day {
            let message = MessageBuilder::new()
                .sender(if n % 2 == 0 { "Zoë" } else { "Bob" })
                .content("Cześć! Jak się masz? Wszystko dobrze, dziękuję.")
                .day(day, (n as i64) * 60_000);
            if day < 60 { first.push(message) } else { second.push(message) }
        }
    }
    second.push(MessageBuilder::new().media().day(119, 0));

    ExportDirBuilder::new()
        .with_export("message_1.json", &first)
        .with_export("message_2.json", &second)
        .build()
}
