//! Jobsmith core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, JobContent, JobScreenState, Notice, NoticeKind, RequestSeq, RequestState, Screen,
    SelectionSet, Skill, SkillScreenState, MISSING_INPUT,
};
pub use update::update;
pub use view_model::{
    AppViewModel, JobViewModel, SkillRowView, SkillSearchViewModel, SkillToggleView,
};
