//! Message routing engine for simple-agent.
//!
//! - [`SimpleAgent`] — Routes a message to a canned reply by ordered keyword matching
//!
//! # Quick Start
//!
//! ```rust
//! use simple_agent_core::AgentIdentity;
//! use simple_agent_engine::SimpleAgent;
//!
//! let agent = SimpleAgent::new(AgentIdentity::default());
//! assert_eq!(
//!     agent.route("hello", None),
//!     "Hello! I'm SimpleAgent v1.0.0. How can I help you today?"
//! );
//! ```
//!
//! # Routing Order
//!
//! The lowercased message is checked against each rule in turn and the first
//! match wins:
//!
//! 1. `hello` or `hi` — greeting with the agent's name and version
//! 2. `weather` — placeholder for a future weather tool
//! 3. `help` — usage text
//! 4. anything else — echoes the original message

mod agent;

pub use agent::{SimpleAgent, HELP_REPLY, WEATHER_REPLY};
