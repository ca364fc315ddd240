//! Keyword router behind the agent endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use simple_agent_core::{Agent, AgentError, AgentIdentity, Context, MemoryBackend, Tool};
use tracing::debug;

/// Reply for messages that ask about the weather.
pub const WEATHER_REPLY: &str =
    "Weather tool integration coming soon! This is your agent placeholder.";

/// Reply for messages that ask for help.
pub const HELP_REPLY: &str = "I'm a simple agent MVP. You can:\n\
                              - Greet me\n\
                              - Ask about weather (placeholder)\n\
                              - Extend my capabilities by modifying agent.rs";

/// Category a message is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Greeting,
    Weather,
    Help,
    Echo,
}

impl Route {
    /// Classifies an already-lowercased message. Order is significant.
    fn classify(lowered: &str) -> Self {
        if lowered.contains("hello") || lowered.contains("hi") {
            Route::Greeting
        } else if lowered.contains("weather") {
            Route::Weather
        } else if lowered.contains("help") {
            Route::Help
        } else {
            Route::Echo
        }
    }
}

/// Agent that answers with canned replies chosen by keyword.
#[derive(Debug, Clone)]
pub struct SimpleAgent {
    identity: AgentIdentity,
}

impl Default for SimpleAgent {
    fn default() -> Self {
        Self::new(AgentIdentity::default())
    }
}

impl SimpleAgent {
    /// Creates an agent with the given identity.
    pub fn new(identity: AgentIdentity) -> Self {
        Self { identity }
    }

    /// Returns the reply for `message`.
    ///
    /// Matching is case-insensitive; the echo reply keeps the original casing.
    /// `context` is accepted and not read.
    pub fn route(&self, message: &str, _context: Option<&Context>) -> String {
        let route = Route::classify(&message.to_lowercase());
        debug!(?route, "Routed message");

        match route {
            Route::Greeting => format!(
                "Hello! I'm {} v{}. How can I help you today?",
                self.identity.name, self.identity.version
            ),
            Route::Weather => WEATHER_REPLY.to_string(),
            Route::Help => HELP_REPLY.to_string(),
            Route::Echo => format!(
                "You said: '{}'. I'm a basic agent - extend my capabilities in agent.rs!",
                message
            ),
        }
    }
}

#[async_trait]
impl Agent for SimpleAgent {
    fn identity(&self) -> &AgentIdentity {
        &self.identity
    }

    async fn process(&self, message: &str, context: Option<&Context>) -> Result<String, AgentError> {
        Ok(self.route(message, context))
    }

    fn add_tool(&mut self, name: &str, _tool: Arc<dyn Tool>) {
        debug!(tool = %name, "Tool registration is not wired yet; ignoring");
    }

    fn set_memory(&mut self, backend: Arc<dyn MemoryBackend>) {
        debug!(backend = %backend.name(), "Memory backends are not wired yet; ignoring");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: &str = "Hello! I'm SimpleAgent v1.0.0. How can I help you today?";

    fn agent() -> SimpleAgent {
        SimpleAgent::default()
    }

    #[test]
    fn greets_on_hello_or_hi() {
        let agent = agent();
        for message in ["hello", "Hi there", "HELLO WORLD", "oh hi", "say hI"] {
            assert_eq!(agent.route(message, None), GREETING, "message: {message}");
        }
    }

    #[test]
    fn greeting_uses_configured_identity() {
        let agent = SimpleAgent::new(AgentIdentity::new("Scout", "0.2.0"));
        assert_eq!(
            agent.route("hello", None),
            "Hello! I'm Scout v0.2.0. How can I help you today?"
        );
    }

    #[test]
    fn hi_matches_as_a_substring() {
        // "this" contains "hi"
        assert_eq!(agent().route("What is this?", None), GREETING);
    }

    #[test]
    fn weather_placeholder() {
        let agent = agent();
        assert_eq!(agent.route("weather", None), WEATHER_REPLY);
        assert_eq!(agent.route("How's the WEATHER today?", None), WEATHER_REPLY);
    }

    #[test]
    fn help_lists_three_items() {
        let reply = agent().route("Can you help me?", None);
        assert_eq!(reply, HELP_REPLY);
        assert_eq!(reply.lines().filter(|l| l.starts_with("- ")).count(), 3);
    }

    #[test]
    fn echo_preserves_original_casing() {
        assert_eq!(
            agent().route("xyz123", None),
            "You said: 'xyz123'. I'm a basic agent - extend my capabilities in agent.rs!"
        );
        assert_eq!(
            agent().route("Tell me A Story", None),
            "You said: 'Tell me A Story'. I'm a basic agent - extend my capabilities in agent.rs!"
        );
    }

    #[test]
    fn empty_message_falls_through_to_echo() {
        assert_eq!(
            agent().route("", None),
            "You said: ''. I'm a basic agent - extend my capabilities in agent.rs!"
        );
    }

    #[test]
    fn earlier_rules_win() {
        let agent = agent();
        assert_eq!(agent.route("hello, I need help", None), GREETING);
        assert_eq!(agent.route("hello, what's the weather", None), GREETING);
        assert_eq!(agent.route("weather help", None), WEATHER_REPLY);
    }

    #[test]
    fn context_does_not_change_reply() {
        let agent = agent();
        let mut context = Context::new();
        context.insert("user".into(), serde_json::json!("alice"));
        context.insert("topic".into(), serde_json::json!({ "weather": true }));

        assert_eq!(agent.route("xyz", Some(&context)), agent.route("xyz", None));
        assert_eq!(agent.route("help", Some(&context)), HELP_REPLY);
    }

    #[test]
    fn routing_is_repeatable() {
        let agent = agent();
        let first = agent.route("Tell me something", None);
        let second = agent.route("Tell me something", None);
        assert_eq!(first, second);
    }

    #[test]
    fn classify_order() {
        assert_eq!(Route::classify("hi"), Route::Greeting);
        assert_eq!(Route::classify("weather"), Route::Weather);
        assert_eq!(Route::classify("help"), Route::Help);
        assert_eq!(Route::classify("ok"), Route::Echo);
    }

    struct NoopTool;

    #[async_trait]
    impl Tool for NoopTool {
        fn name(&self) -> &str {
            "noop"
        }

        fn description(&self) -> &str {
            "Does nothing"
        }

        async fn execute(&self, _args: serde_json::Value) -> Result<String, AgentError> {
            Ok(String::new())
        }
    }

    struct NoopMemory;

    impl MemoryBackend for NoopMemory {
        fn name(&self) -> &str {
            "noop"
        }
    }

    #[tokio::test]
    async fn extension_hooks_do_not_change_behavior() {
        let mut agent = agent();
        let before = agent.process("weather?", None).await.unwrap();

        agent.add_tool("weather", Arc::new(NoopTool));
        agent.set_memory(Arc::new(NoopMemory));

        let after = agent.process("weather?", None).await.unwrap();
        assert_eq!(before, after);
        assert_eq!(agent.identity(), &AgentIdentity::default());
    }

    #[tokio::test]
    async fn process_matches_route() {
        let agent = agent();
        let reply = agent.process("Hi there", None).await.unwrap();
        assert_eq!(reply, GREETING);
    }
}
