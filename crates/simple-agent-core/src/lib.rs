//! Core domain types and traits for simple-agent.
//!
//! This crate provides the types shared across the workspace:
//!
//! - [`AgentIdentity`] — Static name and version of an agent
//! - [`Context`] — Optional key-value payload accompanying a message
//! - [`AgentError`] — Error type for agent processing
//! - [`Agent`] — Trait implemented by message-processing agents
//! - [`Tool`] and [`MemoryBackend`] — Handles accepted by an agent's extension hooks
//!
//! # Example
//!
//! ```rust
//! use simple_agent_core::AgentIdentity;
//!
//! let identity = AgentIdentity::default();
//! assert_eq!(identity.name, "SimpleAgent");
//! assert_eq!(identity.version, "1.0.0");
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default agent name.
pub const DEFAULT_AGENT_NAME: &str = "SimpleAgent";

/// Default agent version.
pub const DEFAULT_AGENT_VERSION: &str = "1.0.0";

/// Key-value payload sent alongside a message.
///
/// Values are arbitrary JSON. Agents may accept it without reading it.
pub type Context = serde_json::Map<String, serde_json::Value>;

/// Errors that can occur while an agent processes a message.
#[derive(Error, Debug)]
pub enum AgentError {
    /// A registered tool failed.
    #[error("Tool execution failed: {0}")]
    ToolFailed(String),

    /// The memory backend failed.
    #[error("Memory backend error: {0}")]
    Memory(String),

    /// Any other processing failure.
    #[error("{0}")]
    Internal(String),
}

/// Identity of an agent, fixed when the agent is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentIdentity {
    /// Display name used in greetings.
    pub name: String,
    /// Version string used in greetings.
    pub version: String,
}

impl AgentIdentity {
    /// Creates an identity from a name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into() }
    }
}

impl Default for AgentIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_AGENT_NAME, DEFAULT_AGENT_VERSION)
    }
}

// ============================================================================
// Extension handles
// ============================================================================

/// A named callable an agent can be given.
///
/// Agents currently accept tools through [`Agent::add_tool`] without
/// invoking them.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a description of what this tool does.
    fn description(&self) -> &str;

    /// Executes the tool with JSON arguments.
    async fn execute(&self, args: serde_json::Value) -> Result<String, AgentError>;
}

/// A memory backend an agent can be attached to.
pub trait MemoryBackend: Send + Sync {
    /// Returns a short name for logging.
    fn name(&self) -> &str;
}

/// A message-processing agent.
///
/// `process` returns a `Result` so the HTTP layer has a single failure path
/// for agents whose processing can fail.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Returns the agent's identity.
    fn identity(&self) -> &AgentIdentity;

    /// Produces a reply for `message`. `context` is optional.
    async fn process(&self, message: &str, context: Option<&Context>) -> Result<String, AgentError>;

    /// Registers a tool under `name`.
    fn add_tool(&mut self, name: &str, tool: Arc<dyn Tool>);

    /// Attaches a memory backend.
    fn set_memory(&mut self, backend: Arc<dyn MemoryBackend>);
}
