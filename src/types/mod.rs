pub mod responses;

pub use responses::{AnalysisResponse, HealthMessage};
