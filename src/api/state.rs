//! Shared handler state

use std::sync::Arc;

use crate::agent::{LlmClient, ProviderRegistry};
use crate::amadeus::AmadeusClient;
use crate::config::Config;
use crate::Result;

#[derive(Clone)]
pub struct AppState {
    pub amadeus: Arc<AmadeusClient>,
    /// Absent when no LLM key is configured; the LLM routes answer 503.
    pub llm: Option<Arc<dyn LlmClient>>,
    pub max_iterations: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            amadeus: Arc::new(AmadeusClient::new(&config.amadeus)?),
            llm: ProviderRegistry::create_optional(&config.llm),
            max_iterations: config.llm.max_iterations,
        })
    }
}
