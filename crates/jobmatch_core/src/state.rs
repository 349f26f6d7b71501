/// Stable identity of an uploaded or pasted artifact, unique per session.
pub type ArtifactId = u64;

/// Display name of the single pasted job-description artifact.
pub const PASTED_JOB_NAME: &str = "Pasted Job Description";

/// Which collection an artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Resume,
    JobFile,
    JobText,
}

/// What the user actually handed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactPayload {
    /// Raw bytes of an uploaded file.
    FileBytes(Vec<u8>),
    /// Trimmed text pasted into the job-description box.
    Text(String),
}

/// A user-supplied resume file or job-description text tracked by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: ArtifactId,
    pub name: String,
    pub payload: ArtifactPayload,
}

impl Artifact {
    /// Payload as raw bytes. File artifacts store bytes directly; text
    /// artifacts fall back to their UTF-8 encoding.
    pub fn payload_bytes(&self) -> Vec<u8> {
        match &self.payload {
            ArtifactPayload::FileBytes(bytes) => bytes.clone(),
            ArtifactPayload::Text(text) => text.clone().into_bytes(),
        }
    }
}

/// A file handed over by the platform before it becomes an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Ordered, name-deduplicated sequence of artifacts of one kind.
///
/// Insertion order is preserved; a later entry with a colliding name is
/// silently dropped, never merged or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtifactCollection {
    items: Vec<Artifact>,
}

impl ArtifactCollection {
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&Artifact> {
        self.items.first()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|artifact| artifact.name == name)
    }

    fn push(&mut self, artifact: Artifact) {
        self.items.push(artifact);
    }

    /// Removes the artifact with `id` if present; no-op otherwise.
    fn remove(&mut self, id: ArtifactId) {
        self.items.retain(|artifact| artifact.id != id);
    }
}

/// Lifecycle of one action button.
///
/// Success and failure both land back in `Idle`; the terminal outcome is
/// recorded on `AppState` (last report) or surfaced as an alert effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

/// Result of the startup liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Healthy,
    Unreachable,
}

/// Structured output of a completed submission, as rendered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchReport {
    pub match_percentage: u8,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: String,
    pub analysis_type: Option<String>,
}

/// One entry of the resume dropdown snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableResume {
    pub id: ArtifactId,
    pub name: String,
}

/// The whole page-session state: artifact collections, submission phases,
/// the last report, and the backend health probe result.
///
/// Mutation happens exclusively through [`crate::update`]; the app shell
/// only ever reads the [`crate::AppViewModel`] projection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    next_artifact_id: ArtifactId,
    resumes: ArtifactCollection,
    job_files: ArtifactCollection,
    job_text: ArtifactCollection,
    job_text_input: String,
    selectable_resumes: Vec<SelectableResume>,
    selected_resume: Option<ArtifactId>,
    process: SubmissionPhase,
    matches: SubmissionPhase,
    last_report: Option<MatchReport>,
    backend: BackendHealth,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resumes(&self) -> &ArtifactCollection {
        &self.resumes
    }

    pub fn job_files(&self) -> &ArtifactCollection {
        &self.job_files
    }

    pub fn job_text(&self) -> &ArtifactCollection {
        &self.job_text
    }

    /// Raw, untrimmed textarea contents, for the controlled input binding.
    pub fn job_text_input(&self) -> &str {
        &self.job_text_input
    }

    /// Trimmed pasted job description, if one is present.
    pub fn pasted_text(&self) -> Option<&str> {
        self.job_text.first().and_then(|artifact| match &artifact.payload {
            ArtifactPayload::Text(text) => Some(text.as_str()),
            ArtifactPayload::FileBytes(_) => None,
        })
    }

    pub fn selectable_resumes(&self) -> &[SelectableResume] {
        &self.selectable_resumes
    }

    pub fn selected_resume(&self) -> Option<ArtifactId> {
        self.selected_resume
    }

    /// Dropdown label of the current selection, taken from the snapshot so
    /// it stays valid even if the artifact was removed afterwards.
    pub fn selected_resume_name(&self) -> Option<String> {
        let selected = self.selected_resume?;
        self.selectable_resumes
            .iter()
            .find(|resume| resume.id == selected)
            .map(|resume| resume.name.clone())
    }

    pub fn process_phase(&self) -> SubmissionPhase {
        self.process
    }

    pub fn matches_phase(&self) -> SubmissionPhase {
        self.matches
    }

    pub fn last_report(&self) -> Option<&MatchReport> {
        self.last_report.as_ref()
    }

    pub fn backend_health(&self) -> BackendHealth {
        self.backend
    }

    fn alloc_id(&mut self) -> ArtifactId {
        self.next_artifact_id += 1;
        self.next_artifact_id
    }

    fn collection_mut(&mut self, kind: ArtifactKind) -> &mut ArtifactCollection {
        match kind {
            ArtifactKind::Resume => &mut self.resumes,
            ArtifactKind::JobFile => &mut self.job_files,
            ArtifactKind::JobText => &mut self.job_text,
        }
    }

    /// Appends `file` to the collection for `kind` unless the name is
    /// already taken. Colliding names are dropped without an error.
    pub(crate) fn add_file(&mut self, kind: ArtifactKind, file: IncomingFile) {
        if self.collection_mut(kind).contains_name(&file.name) {
            return;
        }
        let id = self.alloc_id();
        self.collection_mut(kind).push(Artifact {
            id,
            name: file.name,
            payload: ArtifactPayload::FileBytes(file.bytes),
        });
    }

    /// Replaces the job-text collection with a single artifact holding the
    /// trimmed text, or clears it when the trimmed text is empty.
    /// Idempotent for repeated identical input.
    pub(crate) fn set_pasted_text(&mut self, raw: &str) {
        self.job_text_input = raw.to_string();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.job_text = ArtifactCollection::default();
            return;
        }
        if self.pasted_text() == Some(trimmed) {
            return;
        }
        let id = self.alloc_id();
        let mut replacement = ArtifactCollection::default();
        replacement.push(Artifact {
            id,
            name: PASTED_JOB_NAME.to_string(),
            payload: ArtifactPayload::Text(trimmed.to_string()),
        });
        self.job_text = replacement;
    }

    pub(crate) fn remove_artifact(&mut self, kind: ArtifactKind, id: ArtifactId) {
        self.collection_mut(kind).remove(id);
        if kind == ArtifactKind::JobText {
            self.job_text_input.clear();
        }
        if self.selected_resume == Some(id) {
            self.selected_resume = None;
        }
    }

    /// Accepts a selection only if it exists in the dropdown snapshot.
    pub(crate) fn select_resume(&mut self, selection: Option<ArtifactId>) {
        self.selected_resume = selection.filter(|id| {
            self.selectable_resumes.iter().any(|resume| resume.id == *id)
        });
    }

    /// Re-snapshots the dropdown from the current resume collection.
    /// Called on process success only: a newly processed resume is what
    /// makes it selectable.
    pub(crate) fn refresh_selectable_resumes(&mut self) {
        self.selectable_resumes = self
            .resumes
            .iter()
            .map(|artifact| SelectableResume {
                id: artifact.id,
                name: artifact.name.clone(),
            })
            .collect();
        if let Some(selected) = self.selected_resume {
            if !self.selectable_resumes.iter().any(|resume| resume.id == selected) {
                self.selected_resume = None;
            }
        }
    }

    pub(crate) fn begin_process(&mut self) {
        self.process = SubmissionPhase::Submitting;
    }

    pub(crate) fn finish_process(&mut self) {
        self.process = SubmissionPhase::Idle;
    }

    pub(crate) fn begin_matches(&mut self) {
        self.matches = SubmissionPhase::Submitting;
    }

    pub(crate) fn finish_matches(&mut self) {
        self.matches = SubmissionPhase::Idle;
    }

    pub(crate) fn record_report(&mut self, report: MatchReport) {
        self.last_report = Some(report);
    }

    pub(crate) fn set_backend_health(&mut self, health: BackendHealth) {
        self.backend = health;
    }
}
