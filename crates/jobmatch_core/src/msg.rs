use crate::state::{ArtifactId, ArtifactKind, IncomingFile, MatchReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page session started; triggers the backend liveness probe.
    AppStarted,
    /// Outcome of the startup liveness probe.
    HealthChecked { healthy: bool },
    /// User picked files in the resume upload input.
    ResumesAdded(Vec<IncomingFile>),
    /// User picked files in the job-description upload input.
    JobFilesAdded(Vec<IncomingFile>),
    /// User edited the job-description textarea (raw, untrimmed).
    JobTextChanged(String),
    /// User clicked the remove control on a list row.
    ArtifactRemoved { id: ArtifactId, kind: ArtifactKind },
    /// User changed the resume dropdown; `None` is the placeholder option.
    ResumeSelected(Option<ArtifactId>),
    /// User clicked Process & Analyze.
    ProcessClicked,
    /// The analyze submission completed, one way or the other.
    ProcessFinished(Result<MatchReport, String>),
    /// User clicked Find Job Matches.
    MatchesClicked,
    /// The find-matches lookup completed.
    MatchesFinished(Result<MatchReport, String>),
    /// Fallback for placeholder wiring.
    NoOp,
}
