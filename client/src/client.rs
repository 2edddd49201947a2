//! Fire-and-forget HTTP client for streaming agent activity.
//!
//! Each call builds one JSON payload, POSTs it to the configured server, and
//! discards the response. Transport failures are logged and absorbed; the
//! calling program never observes them.
//!
//! # Example
//!
//! ```no_run
//! use agentcast_client::client::StreamClient;
//! use agentcast_client::types::CodeAction;
//!
//! #[tokio::main]
//! async fn main() {
//!     let stream = StreamClient::new("my-agent");
//!
//!     stream.think("Working on the problem...").await;
//!     stream.code("app.py", "print('hello')", CodeAction::Write).await;
//!     stream.live().await;
//! }
//! ```

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::StreamError;
use crate::types::{AgentStatus, CodeAction, CodeEvent, Event, EventKind, PreviewEvent, TaskEvent};

/// Hosted endpoint used when no server URL is configured.
pub const DEFAULT_SERVER_URL: &str = "https://agentcast.fly.dev";

/// Base URL of the public watch page.
const WATCH_BASE_URL: &str = "https://agentcast.dev/watch";

/// HTTP request timeout.
const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Identity and connection settings for a [`StreamClient`].
///
/// Set once at construction and immutable for the client's lifetime.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Opaque identifier for the agent being streamed.
    pub agent_id: String,

    /// Server URL the payloads are POSTed to, exactly as configured.
    pub server_url: String,

    /// Bearer token for private streams.
    pub api_key: Option<String>,
}

impl StreamConfig {
    /// Creates a configuration pointing at the hosted endpoint, with no API key.
    #[must_use]
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_key: None,
        }
    }

    /// Overrides the server URL.
    #[must_use]
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    /// Sets the bearer token sent with every payload.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Streams an agent's thoughts, code, and status to an AgentCast server.
///
/// The client holds no mutable state; it is cheap to clone and safe to share
/// across tasks. Calls are independent and carry no ordering guarantee.
#[derive(Debug, Clone)]
pub struct StreamClient {
    config: StreamConfig,
    http: Client,
}

impl StreamClient {
    /// Creates a client for the given agent against the hosted endpoint.
    #[must_use]
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self::with_config(StreamConfig::new(agent_id))
    }

    /// Creates a client from a full configuration.
    #[must_use]
    pub fn with_config(config: StreamConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, http }
    }

    /// The agent identifier this client streams as.
    #[must_use]
    pub fn agent_id(&self) -> &str {
        &self.config.agent_id
    }

    /// The server URL payloads are sent to.
    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.config.server_url
    }

    /// URL of the public watch page for this agent.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("{WATCH_BASE_URL}/{}", self.config.agent_id)
    }

    /// Streams a thought to the viewer's mind panel.
    pub async fn think(&self, thought: impl Into<String>) {
        self.send(EventKind::Thinking(thought.into())).await;
    }

    /// Streams a code update to the creation panel.
    ///
    /// The display language is derived from the filename extension.
    pub async fn code(
        &self,
        filename: impl Into<String>,
        content: impl Into<String>,
        action: CodeAction,
    ) {
        self.send(EventKind::Code(CodeEvent::new(filename, content, action)))
            .await;
    }

    /// Updates the agent's broadcast status.
    pub async fn status(&self, status: AgentStatus) {
        self.send(EventKind::Status(status)).await;
    }

    /// Goes live. Shorthand for [`status`](Self::status) with [`AgentStatus::Live`].
    pub async fn live(&self) {
        self.status(AgentStatus::Live).await;
    }

    /// Sets the current task.
    pub async fn task(&self, title: impl Into<String>, description: Option<String>) {
        self.send(EventKind::Task(TaskEvent {
            title: title.into(),
            description,
        }))
        .await;
    }

    /// Sets the preview URL for whatever the agent is building.
    pub async fn preview(&self, url: impl Into<String>) {
        self.send(EventKind::Preview(PreviewEvent { url: url.into() }))
            .await;
    }

    /// Sends a typed event.
    ///
    /// This is the building block the convenience methods call. Failures are
    /// logged at warn level and never returned; from the caller's point of
    /// view the send always succeeds.
    pub async fn send(&self, kind: EventKind) {
        let event = Event::new(self.config.agent_id.clone(), kind);

        if let Err(e) = self.dispatch(&event).await {
            warn!(agent_id = %self.config.agent_id, error = %e, "Stream error");
        }
    }

    /// Performs the HTTP POST for one event.
    async fn dispatch(&self, event: &Event) -> Result<(), StreamError> {
        debug!(url = %self.config.server_url, "Sending event");

        let mut request = self.http.post(&self.config.server_url).json(event);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StreamError::Server {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
