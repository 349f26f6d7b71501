use crate::state::{AppState, ArtifactKind, BackendHealth, SubmissionPhase};
use crate::{Effect, Msg};

/// Surfaced when the process action is clicked without its inputs.
pub const PROCESS_VALIDATION_MESSAGE: &str =
    "Please upload at least one resume and paste a job description";

/// Surfaced when find-matches is clicked without a dropdown selection.
pub const MATCHES_VALIDATION_MESSAGE: &str = "Please select a resume first";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppStarted => vec![Effect::CheckHealth],
        Msg::HealthChecked { healthy } => {
            state.set_backend_health(if healthy {
                BackendHealth::Healthy
            } else {
                BackendHealth::Unreachable
            });
            Vec::new()
        }
        Msg::ResumesAdded(files) => {
            for file in files {
                state.add_file(ArtifactKind::Resume, file);
            }
            Vec::new()
        }
        Msg::JobFilesAdded(files) => {
            for file in files {
                state.add_file(ArtifactKind::JobFile, file);
            }
            Vec::new()
        }
        Msg::JobTextChanged(raw) => {
            state.set_pasted_text(&raw);
            Vec::new()
        }
        Msg::ArtifactRemoved { id, kind } => {
            state.remove_artifact(kind, id);
            Vec::new()
        }
        Msg::ResumeSelected(selection) => {
            state.select_resume(selection);
            Vec::new()
        }
        Msg::ProcessClicked => {
            // The button is disabled while Submitting, but a guard here keeps
            // re-entrancy impossible even without the DOM's help.
            if state.process_phase() == SubmissionPhase::Submitting {
                return (state, Vec::new());
            }
            let Some(resume) = state.resumes().first().cloned() else {
                return (state, vec![alert(PROCESS_VALIDATION_MESSAGE)]);
            };
            let Some(job_description) = state.pasted_text().map(ToOwned::to_owned) else {
                return (state, vec![alert(PROCESS_VALIDATION_MESSAGE)]);
            };
            state.begin_process();
            vec![Effect::SubmitAnalysis {
                resume_bytes: resume.payload_bytes(),
                resume_name: resume.name,
                job_description,
            }]
        }
        Msg::ProcessFinished(result) => {
            // The reset happens on every exit path so the button can never
            // stick in Submitting.
            state.finish_process();
            match result {
                Ok(report) => {
                    state.record_report(report);
                    state.refresh_selectable_resumes();
                    Vec::new()
                }
                Err(message) => vec![alert(&message)],
            }
        }
        Msg::MatchesClicked => {
            if state.matches_phase() == SubmissionPhase::Submitting {
                return (state, Vec::new());
            }
            let Some(resume_name) = state.selected_resume_name() else {
                return (state, vec![alert(MATCHES_VALIDATION_MESSAGE)]);
            };
            state.begin_matches();
            vec![Effect::FindMatches { resume_name }]
        }
        Msg::MatchesFinished(result) => {
            state.finish_matches();
            match result {
                Ok(report) => {
                    state.record_report(report);
                    Vec::new()
                }
                Err(message) => vec![alert(&message)],
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn alert(message: &str) -> Effect {
    Effect::Alert {
        message: message.to_string(),
    }
}
