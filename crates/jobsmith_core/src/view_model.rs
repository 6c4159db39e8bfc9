use crate::{JobScreenState, Notice, RequestState, Screen, SkillScreenState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub job: JobViewModel,
    pub skills: SkillSearchViewModel,
    pub dirty: bool,
}

/// Display projection of the job screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobViewModel {
    pub loading: bool,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub skills: Vec<SkillToggleView>,
    pub error: Option<String>,
}

/// One recommended skill with its selection affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillToggleView {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// Display projection of the skill-search screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillSearchViewModel {
    pub loading: bool,
    pub rows: Vec<SkillRowView>,
    pub error: Option<String>,
    pub notice: Option<Notice>,
    /// Message shown when a submitted search succeeded with no hits.
    pub no_results: Option<String>,
}

/// One row of the search result table. `distance` is pre-formatted to
/// two decimal places, empty when the backend sent none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRowView {
    pub id: String,
    pub name: String,
    pub distance: String,
}

pub(crate) fn project_job(job: &JobScreenState) -> JobViewModel {
    match &job.request {
        RequestState::Idle => JobViewModel::default(),
        RequestState::Pending => JobViewModel {
            loading: true,
            ..JobViewModel::default()
        },
        RequestState::Succeeded(content) => JobViewModel {
            loading: false,
            description: content.description.clone(),
            responsibilities: content.responsibilities.clone(),
            requirements: content.requirements.clone(),
            benefits: content.benefits.clone(),
            skills: content
                .skills
                .iter()
                .map(|skill| SkillToggleView {
                    id: skill.id.clone(),
                    name: skill.name.clone(),
                    selected: job.selection.contains(&skill.id),
                })
                .collect(),
            error: None,
        },
        RequestState::Failed(reason) => JobViewModel {
            error: Some(reason.clone()),
            ..JobViewModel::default()
        },
    }
}

pub(crate) fn project_skills(skills: &SkillScreenState) -> SkillSearchViewModel {
    let notice = skills.notice.clone();
    match &skills.search {
        RequestState::Idle => SkillSearchViewModel {
            notice,
            ..SkillSearchViewModel::default()
        },
        RequestState::Pending => SkillSearchViewModel {
            loading: true,
            notice,
            ..SkillSearchViewModel::default()
        },
        RequestState::Succeeded(found) => {
            let rows: Vec<SkillRowView> = found
                .iter()
                .map(|skill| SkillRowView {
                    id: skill.id.clone(),
                    name: skill.name.clone(),
                    distance: skill
                        .distance
                        .map(|d| format!("{d:.2}"))
                        .unwrap_or_default(),
                })
                .collect();
            let no_results = match (rows.is_empty(), &skills.search_term) {
                (true, Some(term)) => Some(format!("No skills found for \"{term}\".")),
                _ => None,
            };
            SkillSearchViewModel {
                loading: false,
                rows,
                error: None,
                notice,
                no_results,
            }
        }
        RequestState::Failed(reason) => SkillSearchViewModel {
            error: Some(reason.clone()),
            notice,
            ..SkillSearchViewModel::default()
        },
    }
}
