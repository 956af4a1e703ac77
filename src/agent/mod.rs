//! Agent module — natural-language travel queries.
//!
//! This module contains:
//! - Message types (Message, Response)
//! - LLM client trait and the OpenAI implementation
//! - Agent loop that runs tool calls until the model answers
//! - Context builder for prompts

mod context;
mod loop_impl;
mod message;

// LLM providers in submodule
pub mod llm;

// Re-exports for convenience
pub use context::Context;
pub use llm::{LlmClient, LlmResponse, OpenAiClient, ProviderRegistry, Usage};
pub use loop_impl::AgentLoop;
pub use message::{Message, Response, Role, ToolCallRequest};
