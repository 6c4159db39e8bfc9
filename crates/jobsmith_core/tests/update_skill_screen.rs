use std::sync::Once;

use jobsmith_core::{
    update, AppState, Effect, Msg, NoticeKind, RequestState, Skill, MISSING_INPUT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ui_logging::initialize_for_tests);
}

fn submit_search(state: AppState, term: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::SearchInputChanged(term.to_string()));
    update(state, Msg::SearchClicked)
}

fn found(names: &[(&str, &str, f64)]) -> Vec<Skill> {
    names
        .iter()
        .map(|(id, name, distance)| Skill {
            id: id.to_string(),
            name: name.to_string(),
            distance: Some(*distance),
        })
        .collect()
}

#[test]
fn search_goes_pending_and_emits_one_call() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = submit_search(state, "java");

    assert!(state.skills().search().is_pending());
    assert_eq!(
        effects,
        vec![Effect::SearchSkills {
            seq: 1,
            term: "java".to_string(),
        }]
    );
}

#[test]
fn empty_search_fails_without_network() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = submit_search(state, "  ");

    assert!(effects.is_empty());
    assert_eq!(
        *state.skills().search(),
        RequestState::Failed(MISSING_INPUT.to_string())
    );
}

#[test]
fn stale_search_reply_is_discarded() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_search(state, "java");
    let (state, _) = submit_search(state, "python");

    let (state, _) = update(
        state,
        Msg::SearchArrived {
            seq: 1,
            result: Ok(found(&[("1", "Java", 0.1)])),
        },
    );

    // Still waiting for the python reply.
    assert!(state.skills().search().is_pending());
}

#[test]
fn successful_empty_search_reports_no_results() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_search(state, "cobol");

    let (state, _) = update(
        state,
        Msg::SearchArrived {
            seq: 1,
            result: Ok(Vec::new()),
        },
    );

    let view = state.view();
    assert!(view.skills.error.is_none());
    assert!(view.skills.rows.is_empty());
    assert_eq!(
        view.skills.no_results.as_deref(),
        Some("No skills found for \"cobol\".")
    );
}

#[test]
fn add_skill_requires_a_name() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::NewSkillNameChanged("   ".to_string()));
    let (state, _) = update(state, Msg::NewSkillIdChanged("7".to_string()));

    let (_state, effects) = update(state, Msg::AddSkillClicked);

    assert!(effects.is_empty());
}

#[test]
fn add_skill_emits_create_call_once_while_outstanding() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::NewSkillNameChanged("Kotlin".to_string()));
    let (state, _) = update(state, Msg::NewSkillIdChanged("7".to_string()));

    let (state, effects) = update(state, Msg::AddSkillClicked);
    assert_eq!(
        effects,
        vec![Effect::AddSkill {
            name: "Kotlin".to_string(),
            id: "7".to_string(),
        }]
    );

    // Second click before the first finished must not fire again.
    let (_state, effects) = update(state, Msg::AddSkillClicked);
    assert!(effects.is_empty());
}

#[test]
fn add_success_confirms_and_refetches_current_term() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_search(state, "java");
    let (state, _) = update(
        state,
        Msg::SearchArrived {
            seq: 1,
            result: Ok(found(&[("1", "Java", 0.1)])),
        },
    );
    let (state, _) = update(state, Msg::NewSkillNameChanged("Kotlin".to_string()));
    let (state, _) = update(state, Msg::NewSkillIdChanged("7".to_string()));
    let (state, _) = update(state, Msg::AddSkillClicked);

    let (state, effects) = update(state, Msg::AddSkillFinished(Ok(())));

    let view = state.view();
    let notice = view.skills.notice.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Confirmation);
    assert_eq!(notice.text, "Skill added successfully");
    assert_eq!(
        effects,
        vec![Effect::SearchSkills {
            seq: 2,
            term: "java".to_string(),
        }]
    );
}

#[test]
fn add_failure_keeps_previous_results() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_search(state, "java");
    let (state, _) = update(
        state,
        Msg::SearchArrived {
            seq: 1,
            result: Ok(found(&[("1", "Java", 0.1)])),
        },
    );
    let (state, _) = update(state, Msg::NewSkillNameChanged("Kotlin".to_string()));
    let (state, _) = update(state, Msg::AddSkillClicked);

    let (state, effects) = update(
        state,
        Msg::AddSkillFinished(Err("http status 500".to_string())),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.skills.rows.len(), 1);
    let notice = view.skills.notice.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert!(notice.text.contains("http status 500"));
}

#[test]
fn delete_success_confirms_and_refetches_exactly_once() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_search(state, "java");
    let (state, _) = update(
        state,
        Msg::SearchArrived {
            seq: 1,
            result: Ok(found(&[("42", "Java", 0.1)])),
        },
    );

    let (state, effects) = update(
        state,
        Msg::DeleteSkillClicked {
            skill_id: "42".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::DeleteSkill {
            id: "42".to_string(),
        }]
    );

    let (state, effects) = update(
        state,
        Msg::DeleteSkillFinished {
            skill_id: "42".to_string(),
            result: Ok(()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::SearchSkills {
            seq: 2,
            term: "java".to_string(),
        }]
    );
    let notice = state.view().skills.notice.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Confirmation);
    assert_eq!(notice.text, "Skill deleted successfully");
}

#[test]
fn duplicate_delete_for_same_id_is_refused() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_search(state, "java");

    let (state, effects) = update(
        state,
        Msg::DeleteSkillClicked {
            skill_id: "42".to_string(),
        },
    );
    assert_eq!(effects.len(), 1);

    let (state, effects) = update(
        state,
        Msg::DeleteSkillClicked {
            skill_id: "42".to_string(),
        },
    );
    assert!(effects.is_empty());

    // A different id is still allowed through.
    let (_state, effects) = update(
        state,
        Msg::DeleteSkillClicked {
            skill_id: "43".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::DeleteSkill {
            id: "43".to_string(),
        }]
    );
}

#[test]
fn delete_failure_keeps_previous_results() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_search(state, "java");
    let (state, _) = update(
        state,
        Msg::SearchArrived {
            seq: 1,
            result: Ok(found(&[("42", "Java", 0.1)])),
        },
    );
    let (state, _) = update(
        state,
        Msg::DeleteSkillClicked {
            skill_id: "42".to_string(),
        },
    );

    let (state, effects) = update(
        state,
        Msg::DeleteSkillFinished {
            skill_id: "42".to_string(),
            result: Err("network error".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.skills.rows.len(), 1);
    assert_eq!(
        view.skills.notice.expect("notice").kind,
        NoticeKind::Failure
    );
}

#[test]
fn mutation_without_submitted_term_does_not_refetch() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::NewSkillNameChanged("Kotlin".to_string()));
    let (state, _) = update(state, Msg::AddSkillClicked);

    let (_state, effects) = update(state, Msg::AddSkillFinished(Ok(())));

    assert!(effects.is_empty());
}
