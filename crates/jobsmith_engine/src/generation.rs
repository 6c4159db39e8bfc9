use serde::Deserialize;
use ui_logging::ui_warn;

use crate::decode::decode_generated_text;
use crate::http::{build_client, check_status, map_reqwest_error};
use crate::{ApiError, EngineConfig, FailureKind, JobContent};

/// Collaborator that turns a job title into job content via free-text
/// generation.
#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, job_title: &str) -> Result<JobContent, ApiError>;
}

pub struct HttpGenerationClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl HttpGenerationClient {
    pub fn new(config: &EngineConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client(config.connect_timeout, config.request_timeout)?,
            url: config.generation_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

// Reply shape of the generation service: the text blob we care about is
// buried in candidates[0].content.parts[0].
#[derive(Debug, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

fn build_prompt(job_title: &str) -> String {
    format!(
        "You are a helpful assistant that generates a comprehensive job description \
         based on a job title provided by the user. Your response should include the \
         following sections:\n\
         1. A \"We are\" statement introducing the job description, not naming any \
         company, summarizing the role in 3-4 lines.\n\
         2. Key responsibilities (5-6 bullet points).\n\
         3. Requirements (5-6 bullet points).\n\
         4. 6-7 benefits related to the job, such as monthly team dinners or outings.\n\
         \n\
         The job title is: {job_title}. Reply with a JSON object with keys \
         description, responsibilities, requirements, benefits, where description is a \
         string and the other values are arrays of strings. If no job title was \
         entered, or you cannot provide a description for the given title, or it \
         exceeds ethical guidelines, reply with exactly this JSON object: \
         {{ \"description\": \"No description found for this job title\", \
         \"responsibilities\": [], \"requirements\": [], \"benefits\": [] }}."
    )
}

#[async_trait::async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, job_title: &str) -> Result<JobContent, ApiError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": build_prompt(job_title) }] }]
        });

        let mut request = self.client.post(&self.url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }
        let response = request.json(&body).send().await.map_err(map_reqwest_error)?;
        let response = check_status(response).await?;

        let reply: GenerateReply = response
            .json()
            .await
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                ApiError::new(FailureKind::Decode, "generation reply carried no candidates")
            })?;

        // A reply that arrived but does not decode is treated as a normal
        // "no result" outcome, not an error.
        match decode_generated_text(&text) {
            Ok(content) => Ok(content),
            Err(err) => {
                ui_warn!("Generation reply for {:?} did not decode: {}", job_title, err);
                Ok(JobContent::no_result())
            }
        }
    }
}
