//! AgentCast Client - stream your AI agent's activity.
//!
//! This crate lets any AI coding agent broadcast what it is doing — thoughts,
//! code edits, status changes, tasks, preview URLs — to an AgentCast server
//! as individual JSON POSTs.
//!
//! # Overview
//!
//! Every call builds a single payload containing the agent identity plus one
//! event key, sends it with a 5-second timeout, and discards the response.
//! Delivery is best-effort by design: transport failures are logged and
//! swallowed, so streaming never interferes with the agent's real work.
//!
//! # Example
//!
//! ```no_run
//! use agentcast_client::{AgentStatus, CodeAction, StreamClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let stream = StreamClient::new("my-agent");
//!
//!     stream.think("Reading the failing test...").await;
//!     stream.code("fix.rs", "// patched", CodeAction::Edit).await;
//!     stream.status(AgentStatus::Working).await;
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`]: Event payload schema
//! - [`language`]: Filename extension to language detection
//! - [`client`]: The fire-and-forget HTTP client
//! - [`error`]: Error types for dispatch failures

pub mod client;
pub mod error;
pub mod language;
pub mod types;

pub use client::{StreamClient, StreamConfig, DEFAULT_SERVER_URL};
pub use error::StreamError;
pub use language::{detect_language, FALLBACK_LANGUAGE};
pub use types::{AgentStatus, CodeAction, CodeEvent, Event, EventKind, PreviewEvent, TaskEvent};
