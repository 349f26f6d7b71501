//! Executes core effects against the engine and feeds completions back
//! into the state machine.

use leptos::prelude::RwSignal;
use wasm_bindgen_futures::spawn_local;

use jobmatch_core::{AppState, Effect, MatchReport, Msg};
use jobmatch_engine::{
    AnalysisReport, AnalyzeBackend, AnalyzeError, AnalyzeRequest, BackendSettings,
    CannedMatchProvider, HttpAnalyzeBackend, MatchProvider,
};

use crate::app::dispatch;

/// Runs each effect to completion. Async effects are spawned onto the
/// browser's event loop; their completion messages re-enter `dispatch`.
pub fn run(state: RwSignal<AppState>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::CheckHealth => spawn_local(async move {
                let backend = HttpAnalyzeBackend::new(BackendSettings::default());
                let healthy = match backend.health().await {
                    Ok(()) => true,
                    Err(err) => {
                        log::warn!("health probe failed: {err}");
                        false
                    }
                };
                dispatch(state, Msg::HealthChecked { healthy });
            }),
            Effect::SubmitAnalysis {
                resume_name,
                resume_bytes,
                job_description,
            } => spawn_local(async move {
                let backend = HttpAnalyzeBackend::new(BackendSettings::default());
                let result = backend
                    .analyze(AnalyzeRequest {
                        resume_name,
                        resume_bytes,
                        job_description,
                    })
                    .await;
                dispatch(state, Msg::ProcessFinished(into_outcome(result)));
            }),
            Effect::FindMatches { resume_name } => spawn_local(async move {
                let result = CannedMatchProvider.find_matches(&resume_name).await;
                dispatch(state, Msg::MatchesFinished(into_outcome(result)));
            }),
            Effect::Alert { message } => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&message);
                }
            }
        }
    }
}

fn into_outcome(result: Result<AnalysisReport, AnalyzeError>) -> Result<MatchReport, String> {
    match result {
        Ok(report) => Ok(into_report(report)),
        Err(err) => {
            log::error!("submission failed: {err}");
            Err(err.to_string())
        }
    }
}

/// Engine wire report → core display report.
fn into_report(report: AnalysisReport) -> MatchReport {
    MatchReport {
        match_percentage: report.match_percentage,
        matching_skills: report.matching_skills,
        missing_skills: report.missing_skills,
        explanation: report.explanation,
        analysis_type: report.analysis_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_report_maps_field_for_field() {
        let report = into_report(AnalysisReport {
            match_percentage: 75,
            matching_skills: vec!["Python".to_string()],
            missing_skills: vec!["AWS".to_string()],
            explanation: "Good match.".to_string(),
            analysis_type: None,
        });

        assert_eq!(report.match_percentage, 75);
        assert_eq!(report.matching_skills, vec!["Python"]);
        assert_eq!(report.missing_skills, vec!["AWS"]);
        assert_eq!(report.explanation, "Good match.");
        assert_eq!(report.analysis_type, None);
    }

    #[test]
    fn engine_errors_surface_their_display_message() {
        let outcome = into_outcome(Err(AnalyzeError::Service("model unavailable".to_string())));
        assert_eq!(outcome, Err("model unavailable".to_string()));
    }
}
