//! Wire types for the OpenAI chat-completions API.

use serde::Deserialize;

/// Top-level chat-completions response.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<CompletionUsage>,
}

/// A single response choice.
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    pub finish_reason: Option<String>,
}

/// Assistant message inside a choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
    pub tool_calls: Option<Vec<WireToolCall>>,
}

/// Function tool call requested by the model.
#[derive(Debug, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    pub function: WireFunction,
}

/// Function name plus JSON-encoded arguments.
#[derive(Debug, Deserialize)]
pub struct WireFunction {
    pub name: String,
    pub arguments: String,
}

/// Token usage counters.
#[derive(Debug, Deserialize)]
pub struct CompletionUsage {
    pub prompt_tokens: Option<usize>,
    pub completion_tokens: Option<usize>,
    pub total_tokens: Option<usize>,
}
