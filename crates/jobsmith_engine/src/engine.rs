use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::backend::{HttpSkillStore, SkillStore};
use crate::generation::{GenerationClient, HttpGenerationClient};
use crate::{ApiError, EngineConfig, EngineEvent, JobSource, RequestSeq};

enum EngineCommand {
    FetchJobContent { seq: RequestSeq, job_title: String },
    SearchSkills { seq: RequestSeq, term: String },
    AddSkill { name: String, id: String },
    DeleteSkill { id: String },
}

/// Handle to the IO thread. Commands go in over a channel; completions
/// come back as `EngineEvent`s polled with `try_recv`. There is no
/// cancellation: a superseded call still runs to completion and its event
/// is discarded by the state layer's sequence guard.
#[derive(Clone)]
pub struct EngineHandle {
    inner: Arc<Inner>,
}

struct Inner {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, ApiError> {
        let generation: Arc<dyn GenerationClient> = Arc::new(HttpGenerationClient::new(&config)?);
        let store: Arc<dyn SkillStore> = Arc::new(HttpSkillStore::new(&config)?);
        Ok(Self::with_clients(generation, store, config.job_source))
    }

    /// Wires the engine onto explicit collaborators; tests substitute
    /// fakes here.
    pub fn with_clients(
        generation: Arc<dyn GenerationClient>,
        store: Arc<dyn SkillStore>,
        job_source: JobSource,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let generation = generation.clone();
                let store = store.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event =
                        handle_command(generation.as_ref(), store.as_ref(), job_source, command)
                            .await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self {
            inner: Arc::new(Inner {
                cmd_tx,
                event_rx: Mutex::new(event_rx),
            }),
        }
    }

    pub fn fetch_job_content(&self, seq: RequestSeq, job_title: impl Into<String>) {
        self.send(EngineCommand::FetchJobContent {
            seq,
            job_title: job_title.into(),
        });
    }

    pub fn search_skills(&self, seq: RequestSeq, term: impl Into<String>) {
        self.send(EngineCommand::SearchSkills {
            seq,
            term: term.into(),
        });
    }

    pub fn add_skill(&self, name: impl Into<String>, id: impl Into<String>) {
        self.send(EngineCommand::AddSkill {
            name: name.into(),
            id: id.into(),
        });
    }

    pub fn delete_skill(&self, id: impl Into<String>) {
        self.send(EngineCommand::DeleteSkill { id: id.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.inner
            .event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }

    fn send(&self, command: EngineCommand) {
        let _ = self.inner.cmd_tx.send(command);
    }
}

async fn handle_command(
    generation: &dyn GenerationClient,
    store: &dyn SkillStore,
    job_source: JobSource,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::FetchJobContent { seq, job_title } => {
            let result = match job_source {
                JobSource::Generation => generation.generate(&job_title).await,
                JobSource::Backend => store.job_content(&job_title).await,
            };
            EngineEvent::JobContentDone { seq, result }
        }
        EngineCommand::SearchSkills { seq, term } => EngineEvent::SearchDone {
            seq,
            result: store.search(&term).await,
        },
        EngineCommand::AddSkill { name, id } => EngineEvent::AddSkillDone {
            result: store.add(&name, &id).await,
        },
        EngineCommand::DeleteSkill { id } => {
            let result = store.delete(&id).await;
            EngineEvent::DeleteSkillDone {
                skill_id: id,
                result,
            }
        }
    }
}
