pub mod gemini;

pub use gemini::{AiState, GeminiClient};
