use serde::Deserialize;

use crate::JobContent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("generation reply is not valid JSON: {0}")]
    Malformed(String),
    #[error("generation reply is empty")]
    Empty,
}

/// A field the generation service sometimes writes as one string and
/// sometimes as a list of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(text) => vec![text],
            OneOrMany::Many(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeneratedContent {
    description: String,
    #[serde(default)]
    responsibilities: OneOrMany,
    #[serde(default)]
    requirements: OneOrMany,
    #[serde(default)]
    benefits: OneOrMany,
}

/// Decodes the free-text generation reply into structured job content.
///
/// The service is asked to answer with a JSON object but tends to wrap it
/// in Markdown code fences; those are stripped first. A missing
/// `description` key is malformed; missing list keys default to empty.
pub fn decode_generated_text(text: &str) -> Result<JobContent, DecodeError> {
    let stripped = strip_code_fences(text);
    if stripped.is_empty() {
        return Err(DecodeError::Empty);
    }

    let parsed: GeneratedContent =
        serde_json::from_str(stripped).map_err(|err| DecodeError::Malformed(err.to_string()))?;

    Ok(JobContent {
        description: parsed.description,
        responsibilities: parsed.responsibilities.into(),
        requirements: parsed.requirements.into(),
        benefits: parsed.benefits.into(),
        skills: Vec::new(),
    })
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}
