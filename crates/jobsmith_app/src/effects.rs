use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use jobsmith_core::{Effect, Msg};
use jobsmith_engine::{EngineConfig, EngineEvent, EngineHandle};
use ui_logging::ui_info;

/// Executes the effects the update function emits and feeds engine
/// completions back into the message stream.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, config: EngineConfig) -> anyhow::Result<Self> {
        let engine = EngineHandle::new(config).map_err(|err| anyhow::anyhow!("{err}"))?;
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobContent { seq, job_title } => {
                    ui_info!("FetchJobContent seq={} title={:?}", seq, job_title);
                    self.engine.fetch_job_content(seq, job_title);
                }
                Effect::SearchSkills { seq, term } => {
                    ui_info!("SearchSkills seq={} term={:?}", seq, term);
                    self.engine.search_skills(seq, term);
                }
                Effect::AddSkill { name, id } => {
                    ui_info!("AddSkill name={:?} id={:?}", name, id);
                    self.engine.add_skill(name, id);
                }
                Effect::DeleteSkill { id } => {
                    ui_info!("DeleteSkill id={:?}", id);
                    self.engine.delete_skill(id);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                if msg_tx.send(map_event(event)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::JobContentDone { seq, result } => Msg::JobContentArrived {
            seq,
            result: result.map(map_content).map_err(|err| err.message),
        },
        EngineEvent::SearchDone { seq, result } => Msg::SearchArrived {
            seq,
            result: result
                .map(|skills| skills.into_iter().map(map_skill).collect())
                .map_err(|err| err.message),
        },
        EngineEvent::AddSkillDone { result } => {
            Msg::AddSkillFinished(result.map_err(|err| err.message))
        }
        EngineEvent::DeleteSkillDone { skill_id, result } => Msg::DeleteSkillFinished {
            skill_id,
            result: result.map_err(|err| err.message),
        },
    }
}

fn map_skill(skill: jobsmith_engine::Skill) -> jobsmith_core::Skill {
    jobsmith_core::Skill {
        id: skill.id,
        name: skill.name,
        distance: skill.distance,
    }
}

fn map_content(content: jobsmith_engine::JobContent) -> jobsmith_core::JobContent {
    jobsmith_core::JobContent {
        description: content.description,
        responsibilities: content.responsibilities,
        requirements: content.requirements,
        benefits: content.benefits,
        skills: content.skills.into_iter().map(map_skill).collect(),
    }
}
