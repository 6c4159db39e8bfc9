use crate::{JobContent, RequestSeq, Screen, Skill};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the job-title input box.
    JobInputChanged(String),
    /// User submitted the current job title for generation.
    GenerateClicked,
    /// Completion of the job-content fetch issued with `seq`.
    JobContentArrived {
        seq: RequestSeq,
        result: Result<JobContent, String>,
    },
    /// User toggled a recommended skill on the job screen.
    SkillToggled(Skill),
    /// User edited the skill-search input box.
    SearchInputChanged(String),
    /// User submitted the current search term.
    SearchClicked,
    /// Completion of the skill search issued with `seq`.
    SearchArrived {
        seq: RequestSeq,
        result: Result<Vec<Skill>, String>,
    },
    /// User edited the new-skill name input.
    NewSkillNameChanged(String),
    /// User edited the new-skill id input.
    NewSkillIdChanged(String),
    /// User asked to add the new skill.
    AddSkillClicked,
    /// Completion of an add-skill mutation.
    AddSkillFinished(Result<(), String>),
    /// User asked to delete a skill from the result table.
    DeleteSkillClicked { skill_id: String },
    /// Completion of a delete-skill mutation.
    DeleteSkillFinished {
        skill_id: String,
        result: Result<(), String>,
    },
    /// User navigated to another screen; the departed screen's state is
    /// discarded, as on unmount.
    ScreenSelected(Screen),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
