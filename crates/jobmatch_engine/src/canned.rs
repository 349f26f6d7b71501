use async_trait::async_trait;

use crate::types::{AnalysisReport, AnalyzeError};

/// Strategy seam for the find-matches action.
///
/// The demo ships a canned implementation; a backend-driven matcher slots
/// in behind the same trait without touching the controller.
#[async_trait(?Send)]
pub trait MatchProvider {
    async fn find_matches(&self, resume_name: &str) -> Result<AnalysisReport, AnalyzeError>;
}

/// Deterministic local matcher: always answers with the demo's strongest
/// canned posting, personalized with the selected resume's name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedMatchProvider;

#[async_trait(?Send)]
impl MatchProvider for CannedMatchProvider {
    async fn find_matches(&self, resume_name: &str) -> Result<AnalysisReport, AnalyzeError> {
        Ok(canned_report(resume_name))
    }
}

fn canned_report(resume_name: &str) -> AnalysisReport {
    AnalysisReport {
        match_percentage: 87,
        matching_skills: skills(&[
            "Python",
            "Machine Learning",
            "Pandas",
            "SQL",
            "Data Analysis",
            "Jupyter",
        ]),
        missing_skills: skills(&["Docker", "AWS"]),
        explanation: format!(
            "Excellent match! {resume_name} aligns strongly with the Data Scientist \
             role at Tech Corp: the machine-learning and data-analysis background \
             covers the core requirements, and experience with SQL and visualization \
             rounds out the profile."
        ),
        analysis_type: Some("Simulated Matching".to_string()),
    }
}

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
