//! Jobmatch core: pure state machine and view-model projection.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, Artifact, ArtifactCollection, ArtifactId, ArtifactKind, ArtifactPayload,
    BackendHealth, IncomingFile, MatchReport, SelectableResume, SubmissionPhase, PASTED_JOB_NAME,
};
pub use update::{update, MATCHES_VALIDATION_MESSAGE, PROCESS_VALIDATION_MESSAGE};
pub use view_model::{
    AppViewModel, ArtifactListView, ArtifactRowView, ButtonView, ResultView, ResumeOptionView,
    SkillListView, BACKEND_UNREACHABLE_BANNER, DROPDOWN_PLACEHOLDER, NO_JOBS_PLACEHOLDER,
    NO_MATCHING_SKILLS_PLACEHOLDER, NO_MISSING_SKILLS_PLACEHOLDER, NO_RESUMES_PLACEHOLDER,
};
