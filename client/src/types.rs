//! Event types for AgentCast streaming.
//!
//! This module defines the payload schema sent to the AgentCast server.
//! Every transmitted body is a single JSON object holding the agent identity
//! plus exactly one event key, e.g. `{"agentId": "my-agent", "thinking": "..."}`.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::language::detect_language;

/// Action performed on a file in a code event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CodeAction {
    #[default]
    Write,
    Edit,
    Delete,
}

impl fmt::Display for CodeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => f.write_str("write"),
            Self::Edit => f.write_str("edit"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// Broadcast state of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Live,
    Working,
    Thinking,
    Paused,
    Offline,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Working => f.write_str("working"),
            Self::Thinking => f.write_str("thinking"),
            Self::Paused => f.write_str("paused"),
            Self::Offline => f.write_str("offline"),
        }
    }
}

/// A file write, edit, or delete streamed by an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEvent {
    pub filename: String,
    pub content: String,
    pub action: CodeAction,
    /// Display language, derived from the filename extension.
    pub language: String,
}

impl CodeEvent {
    /// Creates a code event, deriving the language from the filename.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<String>,
        action: CodeAction,
    ) -> Self {
        let filename = filename.into();
        let language = detect_language(&filename).to_string();
        Self {
            filename,
            content: content.into(),
            action,
            language,
        }
    }
}

/// The task an agent is currently working on.
///
/// A missing description serializes as `null`, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEvent {
    pub title: String,
    pub description: Option<String>,
}

/// Live preview of what an agent is building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewEvent {
    pub url: String,
}

/// Event variants streamed to the server.
///
/// Uses serde's externally tagged representation so each variant serializes
/// as a single top-level key (`thinking`, `code`, `status`, `task`, `preview`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A thought streamed to the viewer's mind panel.
    Thinking(String),
    /// A code update streamed to the creation panel.
    Code(CodeEvent),
    /// A broadcast state change.
    Status(AgentStatus),
    /// The current task.
    Task(TaskEvent),
    /// A preview URL.
    Preview(PreviewEvent),
}

/// A single AgentCast payload: the agent identity merged with one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "agentId")]
    pub agent_id: String,

    #[serde(flatten)]
    pub kind: EventKind,
}

impl Event {
    /// Creates an event for the given agent.
    ///
    /// # Examples
    ///
    /// ```
    /// use agentcast_client::types::{Event, EventKind};
    ///
    /// let event = Event::new("my-agent".to_string(), EventKind::Thinking("hm".to_string()));
    /// assert_eq!(event.agent_id, "my-agent");
    /// ```
    #[must_use]
    pub fn new(agent_id: String, kind: EventKind) -> Self {
        Self { agent_id, kind }
    }
}
