use crate::RequestSeq;

/// IO the update function asks the platform layer to perform. Each effect
/// corresponds to exactly one outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJobContent { seq: RequestSeq, job_title: String },
    SearchSkills { seq: RequestSeq, term: String },
    AddSkill { name: String, id: String },
    DeleteSkill { id: String },
}
