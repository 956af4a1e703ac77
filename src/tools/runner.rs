//! Tool runner - manages and executes tools

use std::collections::HashMap;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::Result;
use crate::amadeus::AmadeusClient;
use crate::error::Error;
use super::Tool;
use super::flights::SearchFlightsTool;
use super::hotels::{SearchHotelsByCityTool, SearchHotelsTool};

/// Tool definition for LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Tool runner manages registered tools and executes them
pub struct ToolRunner {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRunner {
    /// Create an empty tool runner
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }
    
    /// Create a tool runner with the travel search tools
    pub fn new_with_defaults(client: Arc<AmadeusClient>) -> Self {
        let mut runner = Self::new();
        
        runner.register(SearchHotelsByCityTool::new(client.clone()));
        runner.register(SearchHotelsTool::new(client.clone()));
        runner.register(SearchFlightsTool::new(client));
        
        runner
    }
    
    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }
    
    /// Get tool definitions for LLM, ordered by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values()
            .map(|t| t.to_definition())
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }
    
    /// Execute a tool by name
    pub async fn execute(&self, name: &str, params: Value) -> Result<String> {
        let tool = self.tools.get(name)
            .ok_or_else(|| Error::Tool(format!("Unknown tool: {}", name)))?;
        
        tracing::debug!("Executing tool {} with {}", name, params);
        tool.execute(params).await
    }
    
    /// Check if a tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
    
    /// List registered tool names
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AmadeusConfig;
    use crate::tools::DummyTool;
    
    #[tokio::test]
    async fn test_tool_runner_register_and_execute() {
        let mut runner = ToolRunner::new();
        runner.register(DummyTool {
            name: "test_tool".to_string(),
            result: "success".to_string(),
        });
        
        assert!(runner.has("test_tool"));
        
        let result = runner.execute("test_tool", serde_json::json!({})).await.unwrap();
        assert_eq!(result, "success");
    }
    
    #[tokio::test]
    async fn test_tool_runner_unknown_tool() {
        let runner = ToolRunner::new();
        let result = runner.execute("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(Error::Tool(_))));
    }

    #[test]
    fn test_default_tools() {
        let client = Arc::new(AmadeusClient::new(&AmadeusConfig::default()).unwrap());
        let runner = ToolRunner::new_with_defaults(client);

        assert_eq!(
            runner.tool_names(),
            vec!["search_flights", "search_hotels", "search_hotels_by_city"]
        );
        let defs = runner.definitions();
        assert_eq!(defs[1].name, "search_hotels");
        assert_eq!(defs[1].parameters["required"][0], "city");
    }
}
