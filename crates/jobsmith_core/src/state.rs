use std::collections::{BTreeMap, BTreeSet};

use crate::view_model::{project_job, project_skills, AppViewModel};

/// Monotone sequence token attached to each outbound request so that
/// stale completions can be discarded (responses arrive in completion
/// order, not submission order).
pub type RequestSeq = u64;

/// Reason shown when a submit is attempted with an empty input.
pub const MISSING_INPUT: &str = "missing input";

/// Lifecycle of a single outstanding request per screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }
}

/// A named skill. `distance` is only present on search results, where it
/// carries the backend's relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub distance: Option<f64>,
}

/// Generated content for one job title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobContent {
    pub description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub skills: Vec<Skill>,
}

/// Skills the user has picked from the recommendations, keyed by id.
/// Membership toggles; insertion order is irrelevant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionSet {
    chosen: BTreeMap<String, Skill>,
}

impl SelectionSet {
    /// Toggles membership for `skill`. Returns true when the skill is
    /// selected after the call.
    pub fn toggle(&mut self, skill: Skill) -> bool {
        if self.chosen.remove(&skill.id).is_some() {
            false
        } else {
            self.chosen.insert(skill.id.clone(), skill);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.chosen.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.chosen.values()
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }
}

/// Which screen currently owns the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Job,
    Skills,
}

/// Severity of a transient user-facing notice on the skill screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Confirmation,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn confirmation(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Confirmation,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
        }
    }
}

/// State owned by the job-description screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobScreenState {
    pub(crate) input: String,
    pub(crate) request: RequestState<JobContent>,
    pub(crate) selection: SelectionSet,
    pub(crate) last_seq: RequestSeq,
}

impl JobScreenState {
    pub(crate) fn next_seq(&mut self) -> RequestSeq {
        self.last_seq += 1;
        self.last_seq
    }

    pub fn request(&self) -> &RequestState<JobContent> {
        &self.request
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }
}

/// State owned by the skill-search screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillScreenState {
    pub(crate) search_input: String,
    pub(crate) new_skill_name: String,
    pub(crate) new_skill_id: String,
    /// Term of the most recent submitted search; mutations refetch it.
    pub(crate) search_term: Option<String>,
    pub(crate) search: RequestState<Vec<Skill>>,
    pub(crate) notice: Option<Notice>,
    pub(crate) add_in_flight: bool,
    pub(crate) deletes_in_flight: BTreeSet<String>,
    pub(crate) last_seq: RequestSeq,
}

impl SkillScreenState {
    pub(crate) fn next_seq(&mut self) -> RequestSeq {
        self.last_seq += 1;
        self.last_seq
    }

    pub fn search(&self) -> &RequestState<Vec<Skill>> {
        &self.search
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

/// Whole-application state. Each screen owns its request state and
/// selection exclusively; nothing is shared across screens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) screen: Screen,
    pub(crate) job: JobScreenState,
    pub(crate) skills: SkillScreenState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn job(&self) -> &JobScreenState {
        &self.job
    }

    pub fn skills(&self) -> &SkillScreenState {
        &self.skills
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            screen: self.screen,
            job: project_job(&self.job),
            skills: project_skills(&self.skills),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
