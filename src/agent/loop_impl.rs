//! Agent loop - query processing through LLM and tool execution

use tracing::{debug, error, info, Instrument};
use uuid::Uuid;
use crate::Result;
use crate::error::Error;
use super::llm::LlmClient;
use super::message::{Message, Response, ToolCallRequest};
use super::context::Context;

/// The agent loop processes queries through LLM and tool execution
pub struct AgentLoop<C: LlmClient> {
    client: C,
    max_iterations: usize,
}

impl<C: LlmClient> AgentLoop<C> {
    /// Create a new agent loop
    pub fn new(client: C, max_iterations: usize) -> Self {
        Self {
            client,
            max_iterations,
        }
    }

    /// Run the agent loop for a single query
    pub async fn run(&self, query: &str, ctx: &Context) -> Result<Response> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("agent_run", %run_id);
        self.run_inner(query, ctx).instrument(span).await
    }

    /// Run a query and always produce display text; failures become an
    /// error message instead of an `Err`.
    pub async fn process_query(&self, query: &str, ctx: &Context) -> String {
        info!("Processing hotel query: {}", query);
        match self.run(query, ctx).await {
            Ok(response) => response.content,
            Err(e) => {
                error!("Error processing hotel query: {}", e);
                format!("Error processing hotel query: {}", e)
            }
        }
    }

    async fn run_inner(&self, query: &str, ctx: &Context) -> Result<Response> {
        let mut messages = ctx.build_messages(query);
        let tools = ctx.tool_runner.definitions();
        let mut tools_used = Vec::new();

        info!("Starting agent loop with query: {}", query);

        for iteration in 0..self.max_iterations {
            debug!("Iteration {}/{}", iteration + 1, self.max_iterations);

            let response = self.client.chat(&messages, &tools).await?;

            // Check if done
            if !response.has_tool_calls() {
                let content = response.content.unwrap_or_default();
                info!("Agent completed with response: {} chars", content.len());
                return Ok(Response { content, tools_used });
            }

            messages.push(Message::assistant_with_tools(
                response.content.clone().unwrap_or_default(),
                response.tool_calls.clone(),
            ));

            for tool_call in &response.tool_calls {
                tools_used.push(tool_call.name.clone());
                let result = self.execute_tool(ctx, tool_call).await;
                messages.push(Message::tool_result(&tool_call.id, result));
            }
        }

        Err(Error::MaxIterations)
    }

    async fn execute_tool(&self, ctx: &Context, tool_call: &ToolCallRequest) -> String {
        debug!("Executing tool: {} with args: {}", tool_call.name, tool_call.arguments);

        match ctx.tool_runner.execute(&tool_call.name, tool_call.arguments.clone()).await {
            Ok(result) => {
                debug!("Tool {} succeeded: {} chars", tool_call.name, result.len());
                result
            }
            Err(e) => {
                let error_msg = format!("Error: {}", e);
                debug!("Tool {} failed: {}", tool_call.name, error_msg);
                error_msg
            }
        }
    }
}
