//! AgentCast CLI - stream your AI agent from the shell.
//!
//! # Commands
//!
//! - `agentcast <agent> think <thought>`: Stream a thought
//! - `agentcast <agent> code <filename> <content> [action]`: Stream a code update
//! - `agentcast <agent> status <status>`: Set the agent status
//! - `agentcast <agent> live`: Go live
//! - `agentcast <agent> task <title>`: Set the current task
//! - `agentcast <agent> preview <url>`: Set the preview URL

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use agentcast_client::client::{StreamClient, StreamConfig};
use agentcast_client::types::{AgentStatus, CodeAction};

/// AgentCast - stream your AI agent to the world.
#[derive(Parser, Debug)]
#[command(name = "agentcast")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Stream a thought
    agentcast my-agent think \"Working on the bug...\"

    # Stream a code edit
    agentcast my-agent code app.py \"print('hello')\" edit

    # Go live
    agentcast my-agent live

Watch your agent at https://agentcast.dev/watch/<agent>
")]
struct Cli {
    /// Agent identifier to stream as.
    agent_id: String,

    /// Server URL (defaults to the hosted endpoint).
    #[arg(long, global = true)]
    server: Option<String>,

    /// API key for private streams.
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Stream a thought.
    Think {
        /// The thought to stream.
        thought: String,
    },

    /// Stream a code update.
    Code {
        /// Filename the update applies to.
        filename: String,

        /// File content to stream.
        content: String,

        /// What happened to the file.
        #[arg(value_enum, default_value_t = CodeAction::default())]
        action: CodeAction,
    },

    /// Set the agent status.
    Status {
        #[arg(value_enum)]
        status: AgentStatus,
    },

    /// Go live.
    Live,

    /// Set the current task.
    Task {
        /// Task title.
        title: String,

        /// Longer task description.
        #[arg(long)]
        description: Option<String>,
    },

    /// Set the preview URL.
    Preview {
        /// URL of the live preview.
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let mut config = StreamConfig::new(cli.agent_id);
    if let Some(server) = cli.server {
        config = config.with_server_url(server);
    }
    if let Some(api_key) = cli.api_key {
        config = config.with_api_key(api_key);
    }
    let stream = StreamClient::with_config(config);

    match cli.command {
        Command::Think { thought } => {
            stream.think(thought).await;
            println!("💭 Streamed");
        }
        Command::Code {
            filename,
            content,
            action,
        } => {
            stream.code(filename.as_str(), content, action).await;
            println!("📝 Streamed {filename} ({action})");
        }
        Command::Status { status } => {
            stream.status(status).await;
            println!("📊 Status: {status}");
        }
        Command::Live => {
            stream.live().await;
            println!("🔴 LIVE");
        }
        Command::Task { title, description } => {
            stream.task(title, description).await;
            println!("🎯 Task set");
        }
        Command::Preview { url } => {
            stream.preview(url).await;
            println!("🔗 Preview set");
        }
    }

    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}
