use std::fmt;

/// Sequence token minted by the state layer; passed through untouched so
/// completions can be matched against the most recent submit.
pub type RequestSeq = u64;

/// A skill as the backend reports it. `distance` only appears on search
/// results.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub distance: Option<f64>,
}

/// Structured job content produced by either collaborator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobContent {
    pub description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub skills: Vec<Skill>,
}

/// Literal the generation service replies with when it has nothing for
/// the given title. A payload carrying it is a valid outcome, not an error.
pub const NO_RESULT_DESCRIPTION: &str = "No description found for this job title";

impl JobContent {
    /// The defaulted "no result" payload used when the generation reply
    /// cannot be decoded or the service declined the title.
    pub fn no_result() -> Self {
        Self {
            description: NO_RESULT_DESCRIPTION.to_string(),
            ..Self::default()
        }
    }
}

/// Completions emitted by the engine, one per executed command.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    JobContentDone {
        seq: RequestSeq,
        result: Result<JobContent, ApiError>,
    },
    SearchDone {
        seq: RequestSeq,
        result: Result<Vec<Skill>, ApiError>,
    },
    AddSkillDone {
        result: Result<(), ApiError>,
    },
    DeleteSkillDone {
        skill_id: String,
        result: Result<(), ApiError>,
    },
}

/// A failed collaborator call: what went wrong plus the user-facing text.
/// The message carries the collaborator-provided error body when one was
/// present, otherwise a generic transport description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "decode error"),
        }
    }
}
