//! Context builder for agent prompts.

use std::sync::Arc;

use crate::amadeus::AmadeusClient;
use crate::lookup;
use crate::tools::ToolRunner;

use super::message::Message;

/// Context holds the tools and prompt material for an agent run.
pub struct Context {
    pub tool_runner: ToolRunner,
}

impl Context {
    /// Create a context with the travel search tools.
    pub fn new(client: Arc<AmadeusClient>) -> Self {
        Self {
            tool_runner: ToolRunner::new_with_defaults(client),
        }
    }

    /// Create a context around an arbitrary tool set.
    pub fn with_tools(tool_runner: ToolRunner) -> Self {
        Self { tool_runner }
    }

    /// Create a test context without tools.
    #[cfg(test)]
    pub fn test() -> Self {
        Self::with_tools(ToolRunner::new())
    }

    /// Build the system prompt: assistant instructions, today's date, and
    /// the cities and board types the tools understand.
    pub fn build_system_prompt(&self) -> String {
        let today = chrono::Local::now().format("%Y-%m-%d (%A)");

        format!(
            r#"You are a professional hotel and travel search assistant. Help users find hotels and flights by:
1. Understanding their location preferences and dates
2. Using the available tools to search
3. Providing clear, helpful information about available options

## Current Date
{}

Resolve relative dates ("next week", "tomorrow") against the current date and pass
dates to tools in YYYY-MM-DD format.

## Cities
Cities with known hotels (use `search_hotels` for dated offers):
{}

All supported cities (use `search_hotels_by_city` to list hotels):
{}

## Board Types
{}

Always ask for clarification if needed and provide detailed, formatted responses."#,
            today,
            lookup::cities_with_hotels().join(", "),
            lookup::supported_cities().join(", "),
            lookup::supported_board_types().join(", ")
        )
    }

    /// Build messages list for an LLM call.
    pub fn build_messages(&self, current: &str) -> Vec<Message> {
        vec![
            Message::system(self.build_system_prompt()),
            Message::user(current),
        ]
    }
}
