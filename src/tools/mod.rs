//! Tools module - travel searches exposed to the LLM
//!
//! Each tool wraps one provider operation, resolves free-text city names
//! through the lookup tables, and returns formatted text.

mod runner;
mod flights;
mod hotels;

pub use runner::{ToolRunner, ToolDefinition};
pub use flights::SearchFlightsTool;
pub use hotels::{SearchHotelsByCityTool, SearchHotelsTool};

use async_trait::async_trait;
use serde_json::Value;
use crate::Result;
use crate::error::Error;

/// Tool trait - interface for all agent tools
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name used in function calls
    fn name(&self) -> &str;
    
    /// Description of what the tool does
    fn description(&self) -> &str;
    
    /// JSON Schema for parameters
    fn parameters(&self) -> Value;
    
    /// Execute the tool with given parameters
    async fn execute(&self, params: Value) -> Result<String>;
    
    /// Convert to tool definition for LLM
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Required string argument
pub(crate) fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str> {
    params.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| Error::Tool(format!("Missing '{}' parameter", key)))
}

/// Optional string argument; empty strings count as absent
pub(crate) fn optional_str(params: &Value, key: &str) -> Option<String> {
    params.get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Optional integer argument, accepting numbers or numeric strings
pub(crate) fn optional_u32(params: &Value, key: &str) -> Option<u32> {
    match params.get(key)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Optional list argument, given as an array or a comma-separated string
pub(crate) fn optional_list(params: &Value, key: &str) -> Vec<String> {
    match params.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Dummy tool for testing
#[cfg(test)]
pub struct DummyTool {
    pub name: String,
    pub result: String,
}

#[cfg(test)]
#[async_trait]
impl Tool for DummyTool {
    fn name(&self) -> &str { &self.name }
    fn description(&self) -> &str { "Dummy tool for testing" }
    fn parameters(&self) -> Value { serde_json::json!({"type": "object"}) }
    
    async fn execute(&self, _params: Value) -> Result<String> {
        Ok(self.result.clone())
    }
}
