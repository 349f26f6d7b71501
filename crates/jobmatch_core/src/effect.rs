#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Probe `GET /health` once at startup.
    CheckHealth,
    /// Post the first resume plus the pasted job description to `/analyze`.
    SubmitAnalysis {
        resume_name: String,
        resume_bytes: Vec<u8>,
        job_description: String,
    },
    /// Look up matches for the selected resume via the match provider.
    FindMatches { resume_name: String },
    /// Surface a blocking notification to the user.
    Alert { message: String },
}
