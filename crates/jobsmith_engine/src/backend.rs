use serde::{Deserialize, Serialize};

use crate::http::{build_client, check_status, endpoint, map_reqwest_error};
use crate::{ApiError, EngineConfig, FailureKind, JobContent, Skill};

/// Collaborator holding the named-skill store and the structured
/// job-content endpoint.
#[async_trait::async_trait]
pub trait SkillStore: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<Skill>, ApiError>;
    async fn add(&self, name: &str, id: &str) -> Result<(), ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
    async fn job_content(&self, job_title: &str) -> Result<JobContent, ApiError>;
}

pub struct HttpSkillStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSkillStore {
    pub fn new(config: &EngineConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client(config.connect_timeout, config.request_timeout)?,
            base_url: config.backend_url.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct SkillRow {
    skill_id: String,
    skill_name: String,
    #[serde(default)]
    distance: Option<f64>,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Skill {
            id: row.skill_id,
            name: row.skill_name,
            distance: row.distance,
        }
    }
}

#[derive(Debug, Serialize)]
struct AddSkillBody<'a> {
    skill_name: &'a str,
    skill_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct JobContentReply {
    description: String,
    #[serde(default)]
    responsibilities: Vec<String>,
    #[serde(default)]
    requirements: Vec<String>,
    #[serde(default)]
    benefits: Vec<String>,
    #[serde(default)]
    skills: Vec<SkillRow>,
}

#[async_trait::async_trait]
impl SkillStore for HttpSkillStore {
    async fn search(&self, term: &str) -> Result<Vec<Skill>, ApiError> {
        let url = endpoint(&self.base_url, "/search/")?;
        let response = self
            .client
            .get(url)
            .query(&[("skill_name", term)])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = check_status(response).await?;
        let rows: Vec<SkillRow> = response
            .json()
            .await
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        Ok(rows.into_iter().map(Skill::from).collect())
    }

    async fn add(&self, name: &str, id: &str) -> Result<(), ApiError> {
        let url = endpoint(&self.base_url, "/addskill/")?;
        let response = self
            .client
            .post(url)
            .json(&AddSkillBody {
                skill_name: name,
                skill_id: id,
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = endpoint(&self.base_url, &format!("/delete_skill/{id}/"))?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response).await?;
        Ok(())
    }

    async fn job_content(&self, job_title: &str) -> Result<JobContent, ApiError> {
        let url = endpoint(&self.base_url, "/job_content/")?;
        let response = self
            .client
            .get(url)
            .query(&[("job_title", job_title)])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = check_status(response).await?;
        let reply: JobContentReply = response
            .json()
            .await
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        Ok(JobContent {
            description: reply.description,
            responsibilities: reply.responsibilities,
            requirements: reply.requirements,
            benefits: reply.benefits,
            skills: reply.skills.into_iter().map(Skill::from).collect(),
        })
    }
}
