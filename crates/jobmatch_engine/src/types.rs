use serde::Deserialize;
use thiserror::Error;

/// Wire shape of a successful `/analyze` response.
///
/// Every field except the percentage is optional on the wire; absent
/// lists and text default to empty rather than failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisReport {
    pub match_percentage: u8,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub analysis_type: Option<String>,
}

/// Failure taxonomy for backend calls.
///
/// Validation failures never reach the engine; they are handled inside
/// the core update before a call is issued. Every kind here is terminal
/// for the attempt: the caller surfaces the message and returns to Idle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// The service could not be reached at all.
    #[error("cannot reach the analysis service: {0}")]
    Connectivity(String),
    /// The service answered with an error, structured or status-derived.
    #[error("{0}")]
    Service(String),
    /// A success status whose body did not match the contract.
    #[error("the analysis service returned an unreadable response")]
    MalformedResponse,
}
