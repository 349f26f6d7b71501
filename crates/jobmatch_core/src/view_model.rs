use crate::state::{
    AppState, ArtifactId, ArtifactKind, BackendHealth, MatchReport, SubmissionPhase,
};

pub const NO_RESUMES_PLACEHOLDER: &str = "No resumes uploaded yet";
pub const NO_JOBS_PLACEHOLDER: &str = "No job descriptions added yet";
pub const DROPDOWN_PLACEHOLDER: &str = "Select a resume...";
pub const NO_MATCHING_SKILLS_PLACEHOLDER: &str = "No matching skills identified";
pub const NO_MISSING_SKILLS_PLACEHOLDER: &str = "No skill gaps identified";
pub const BACKEND_UNREACHABLE_BANNER: &str =
    "Cannot reach the analysis service. Start the backend and reload the page.";

/// One row of an artifact list, with enough identity to wire its remove
/// control back into a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRowView {
    pub id: ArtifactId,
    pub kind: ArtifactKind,
    pub label: String,
}

/// Projection of one artifact collection. `placeholder` is set exactly
/// when there are no rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtifactListView {
    pub rows: Vec<ArtifactRowView>,
    pub placeholder: Option<&'static str>,
}

/// One `<option>` of the resume dropdown; `id == None` is the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeOptionView {
    pub id: Option<ArtifactId>,
    pub label: String,
}

/// Label and enabled flag of one action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

/// Skill tags of one result column. `placeholder` is set exactly when the
/// tag list is empty, so the renderer never shows an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillListView {
    pub tags: Vec<String>,
    pub placeholder: Option<&'static str>,
}

/// Display projection of the last match report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub score_label: String,
    pub matching: SkillListView,
    pub missing: SkillListView,
    pub explanation: String,
    pub analysis_type: Option<String>,
}

/// Everything the app shell renders, recomputed from scratch after every
/// state change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub banner: Option<&'static str>,
    pub resumes: ArtifactListView,
    pub jobs: ArtifactListView,
    pub job_text_input: String,
    pub resume_dropdown: Vec<ResumeOptionView>,
    pub selected_resume: Option<ArtifactId>,
    pub process_button: ButtonView,
    pub matches_button: ButtonView,
    pub result: Option<ResultView>,
}

impl Default for ButtonView {
    fn default() -> Self {
        Self {
            label: "",
            enabled: false,
        }
    }
}

impl AppState {
    /// Pure projection of the current state into everything the shell
    /// needs to render.
    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            banner: match self.backend_health() {
                BackendHealth::Unreachable => Some(BACKEND_UNREACHABLE_BANNER),
                BackendHealth::Unknown | BackendHealth::Healthy => None,
            },
            resumes: resume_list(self),
            jobs: job_list(self),
            job_text_input: self.job_text_input().to_string(),
            resume_dropdown: resume_dropdown(self),
            selected_resume: self.selected_resume(),
            process_button: process_button(self.process_phase()),
            matches_button: matches_button(self.matches_phase()),
            result: self.last_report().map(result_view),
        }
    }
}

fn resume_list(state: &AppState) -> ArtifactListView {
    let rows: Vec<ArtifactRowView> = state
        .resumes()
        .iter()
        .map(|artifact| ArtifactRowView {
            id: artifact.id,
            kind: ArtifactKind::Resume,
            label: artifact.name.clone(),
        })
        .collect();
    with_placeholder(rows, NO_RESUMES_PLACEHOLDER)
}

/// Uploaded job files and the pasted description share one list, the way
/// the page shows them.
fn job_list(state: &AppState) -> ArtifactListView {
    let mut rows: Vec<ArtifactRowView> = state
        .job_files()
        .iter()
        .map(|artifact| ArtifactRowView {
            id: artifact.id,
            kind: ArtifactKind::JobFile,
            label: artifact.name.clone(),
        })
        .collect();
    rows.extend(state.job_text().iter().map(|artifact| ArtifactRowView {
        id: artifact.id,
        kind: ArtifactKind::JobText,
        label: artifact.name.clone(),
    }));
    with_placeholder(rows, NO_JOBS_PLACEHOLDER)
}

fn with_placeholder(rows: Vec<ArtifactRowView>, placeholder: &'static str) -> ArtifactListView {
    let placeholder = rows.is_empty().then_some(placeholder);
    ArtifactListView { rows, placeholder }
}

/// Placeholder option first, then the snapshot taken at the last
/// successful process submission, in insertion order.
fn resume_dropdown(state: &AppState) -> Vec<ResumeOptionView> {
    let mut options = vec![ResumeOptionView {
        id: None,
        label: DROPDOWN_PLACEHOLDER.to_string(),
    }];
    options.extend(state.selectable_resumes().iter().map(|resume| {
        ResumeOptionView {
            id: Some(resume.id),
            label: resume.name.clone(),
        }
    }));
    options
}

fn process_button(phase: SubmissionPhase) -> ButtonView {
    match phase {
        SubmissionPhase::Idle => ButtonView {
            label: "Process & Analyze",
            enabled: true,
        },
        SubmissionPhase::Submitting => ButtonView {
            label: "Processing...",
            enabled: false,
        },
    }
}

fn matches_button(phase: SubmissionPhase) -> ButtonView {
    match phase {
        SubmissionPhase::Idle => ButtonView {
            label: "Find Job Matches",
            enabled: true,
        },
        SubmissionPhase::Submitting => ButtonView {
            label: "Analyzing Matches...",
            enabled: false,
        },
    }
}

fn result_view(report: &MatchReport) -> ResultView {
    ResultView {
        score_label: format!("{}% Match", report.match_percentage),
        matching: skill_list(&report.matching_skills, NO_MATCHING_SKILLS_PLACEHOLDER),
        missing: skill_list(&report.missing_skills, NO_MISSING_SKILLS_PLACEHOLDER),
        explanation: report.explanation.clone(),
        analysis_type: report.analysis_type.clone(),
    }
}

fn skill_list(tags: &[String], placeholder: &'static str) -> SkillListView {
    SkillListView {
        tags: tags.to_vec(),
        placeholder: tags.is_empty().then_some(placeholder),
    }
}
