use serde::Serialize;

pub const HEALTH_MESSAGE: &str = "Python Backend is running on Vercel!";
pub const ANALYSIS_PLACEHOLDER: &str = "This is where Python analysis results would go";

/// Body of `GET /api`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthMessage {
    pub message: String,
}

impl Default for HealthMessage {
    fn default() -> Self {
        Self {
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnalysisResponse {
    pub analysis: String,
}

impl AnalysisResponse {
    pub fn placeholder() -> Self {
        Self {
            analysis: ANALYSIS_PLACEHOLDER.to_string(),
        }
    }
}
