use tracing::info;

/// Handle to the Gemini API. Configured at startup, not yet called by any route.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[derive(Clone)]
pub enum AiState {
    Configured(GeminiClient),
    Disabled,
}

impl AiState {
    pub fn from_key(api_key: Option<&str>) -> Self {
        match api_key {
            Some(key) => AiState::Configured(GeminiClient::new(key)),
            None => {
                info!("GEMINI_API_KEY not set; AI client not configured");
                AiState::Disabled
            }
        }
    }

    pub fn client(&self) -> Option<&GeminiClient> {
        match self {
            AiState::Configured(client) => Some(client),
            AiState::Disabled => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client().is_some()
    }
}
