use crate::{
    AppState, Effect, JobScreenState, Msg, Notice, RequestState, Screen, SkillScreenState,
    MISSING_INPUT,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::JobInputChanged(text) => {
            state.job.input = text;
            Vec::new()
        }
        Msg::GenerateClicked => {
            let title = state.job.input.trim().to_string();
            if title.is_empty() {
                state.job.request = RequestState::Failed(MISSING_INPUT.to_string());
                state.mark_dirty();
                Vec::new()
            } else {
                let seq = state.job.next_seq();
                state.job.request = RequestState::Pending;
                state.mark_dirty();
                vec![Effect::FetchJobContent {
                    seq,
                    job_title: title,
                }]
            }
        }
        Msg::JobContentArrived { seq, result } => {
            if seq != state.job.last_seq || !state.job.request.is_pending() {
                // A newer submit superseded this call, or the screen was
                // torn down while it was outstanding; drop its result.
                return (state, Vec::new());
            }
            state.job.request = match result {
                Ok(content) => {
                    state.job.selection.clear();
                    RequestState::Succeeded(content)
                }
                Err(reason) => RequestState::Failed(reason),
            };
            state.mark_dirty();
            Vec::new()
        }
        Msg::SkillToggled(skill) => {
            state.job.selection.toggle(skill);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchInputChanged(text) => {
            state.skills.search_input = text;
            Vec::new()
        }
        Msg::SearchClicked => {
            let term = state.skills.search_input.trim().to_string();
            if term.is_empty() {
                state.skills.search = RequestState::Failed(MISSING_INPUT.to_string());
                state.mark_dirty();
                Vec::new()
            } else {
                let seq = state.skills.next_seq();
                state.skills.search = RequestState::Pending;
                state.skills.search_term = Some(term.clone());
                state.skills.notice = None;
                state.mark_dirty();
                vec![Effect::SearchSkills { seq, term }]
            }
        }
        Msg::SearchArrived { seq, result } => {
            if seq != state.skills.last_seq || !state.skills.search.is_pending() {
                return (state, Vec::new());
            }
            state.skills.search = match result {
                Ok(skills) => RequestState::Succeeded(skills),
                Err(reason) => RequestState::Failed(reason),
            };
            state.mark_dirty();
            Vec::new()
        }
        Msg::NewSkillNameChanged(text) => {
            state.skills.new_skill_name = text;
            Vec::new()
        }
        Msg::NewSkillIdChanged(text) => {
            state.skills.new_skill_id = text;
            Vec::new()
        }
        Msg::AddSkillClicked => {
            let name = state.skills.new_skill_name.trim().to_string();
            if name.is_empty() || state.skills.add_in_flight {
                Vec::new()
            } else {
                let id = state.skills.new_skill_id.trim().to_string();
                state.skills.add_in_flight = true;
                vec![Effect::AddSkill { name, id }]
            }
        }
        Msg::AddSkillFinished(result) => {
            state.skills.add_in_flight = false;
            state.mark_dirty();
            match result {
                Ok(()) => {
                    state.skills.notice = Some(Notice::confirmation("Skill added successfully"));
                    state.skills.new_skill_name.clear();
                    state.skills.new_skill_id.clear();
                    refetch_current_term(&mut state)
                }
                Err(reason) => {
                    state.skills.notice =
                        Some(Notice::failure(format!("Skill addition failed: {reason}")));
                    Vec::new()
                }
            }
        }
        Msg::DeleteSkillClicked { skill_id } => {
            if state.skills.deletes_in_flight.contains(&skill_id) {
                // A delete for this id is already outstanding; refuse the
                // duplicate so the backend sees the mutation once.
                Vec::new()
            } else {
                state.skills.deletes_in_flight.insert(skill_id.clone());
                vec![Effect::DeleteSkill { id: skill_id }]
            }
        }
        Msg::DeleteSkillFinished { skill_id, result } => {
            state.skills.deletes_in_flight.remove(&skill_id);
            state.mark_dirty();
            match result {
                Ok(()) => {
                    state.skills.notice = Some(Notice::confirmation("Skill deleted successfully"));
                    refetch_current_term(&mut state)
                }
                Err(reason) => {
                    state.skills.notice =
                        Some(Notice::failure(format!("Skill deletion failed: {reason}")));
                    Vec::new()
                }
            }
        }
        Msg::ScreenSelected(screen) => {
            if screen != state.screen {
                // Leaving a screen discards its state, as on unmount. The
                // seq counter survives so a reply from the old mount can
                // never match a request issued after remount.
                match state.screen {
                    Screen::Job => {
                        state.job = JobScreenState {
                            last_seq: state.job.last_seq,
                            ..JobScreenState::default()
                        };
                    }
                    Screen::Skills => {
                        state.skills = SkillScreenState {
                            last_seq: state.skills.last_seq,
                            ..SkillScreenState::default()
                        };
                    }
                }
                state.screen = screen;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Re-issues the current search after a successful mutation, if a term
/// has been submitted. Emits exactly one effect.
fn refetch_current_term(state: &mut AppState) -> Vec<Effect> {
    match state.skills.search_term.clone() {
        Some(term) if !term.is_empty() => {
            let seq = state.skills.next_seq();
            state.skills.search = RequestState::Pending;
            vec![Effect::SearchSkills { seq, term }]
        }
        _ => Vec::new(),
    }
}
