use std::time::Duration;

/// Which collaborator answers job-content fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSource {
    /// Free-text generation service; replies are decoded structurally.
    #[default]
    Generation,
    /// Backend REST endpoint returning structured JSON directly.
    Backend,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// POST endpoint of the text-generation service.
    pub generation_url: String,
    /// API key appended as `?key=` to the generation URL when present.
    pub api_key: Option<String>,
    /// Base URL of the skill/job backend, without a trailing slash.
    pub backend_url: String,
    pub job_source: JobSource,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            generation_url:
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent"
                    .to_string(),
            api_key: None,
            backend_url: "http://127.0.0.1:8000".to_string(),
            job_source: JobSource::default(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `JOBSMITH_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("JOBSMITH_GENERATION_URL") {
            config.generation_url = url;
        }
        if let Ok(key) = std::env::var("JOBSMITH_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(url) = std::env::var("JOBSMITH_BACKEND_URL") {
            config.backend_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(source) = std::env::var("JOBSMITH_JOB_SOURCE") {
            match source.as_str() {
                "backend" => config.job_source = JobSource::Backend,
                "generation" => config.job_source = JobSource::Generation,
                other => {
                    ui_logging::ui_warn!("Unknown JOBSMITH_JOB_SOURCE {:?}, keeping default", other)
                }
            }
        }
        config
    }
}
