//! Jobsmith engine: collaborator clients and effect execution.
mod backend;
mod config;
mod decode;
mod engine;
mod generation;
mod http;
mod types;

pub use backend::{HttpSkillStore, SkillStore};
pub use config::{EngineConfig, JobSource};
pub use decode::{decode_generated_text, DecodeError};
pub use engine::EngineHandle;
pub use generation::{GenerationClient, HttpGenerationClient};
pub use types::{
    ApiError, EngineEvent, FailureKind, JobContent, RequestSeq, Skill, NO_RESULT_DESCRIPTION,
};
