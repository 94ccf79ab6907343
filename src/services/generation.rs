// src/services/generation.rs
//
// HTTP client for the text-generation backend. The backend exposes the
// text-generation-inference wire shape: POST /generate with a prompt and
// sampling parameters, answering with an array of candidate continuations.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sampling parameters sent with every generation call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 30,
            do_sample: true,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// One generated continuation returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedCandidate {
    pub generated_text: String,
}

#[derive(Serialize)]
struct GenerateBody<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
    params: GenerationParams,
}

impl GenerationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_params(base_url, GenerationParams::default())
    }

    pub fn with_params(base_url: impl Into<String>, params: GenerationParams) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            params,
        }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Ask the backend for continuations of `prompt`.
    ///
    /// The returned sequence may be empty; callers decide how to handle that.
    pub async fn generate(&self, prompt: &str) -> Result<Vec<GeneratedCandidate>, AppError> {
        let url = format!("{}/generate", self.base_url);
        let body = GenerateBody {
            inputs: prompt,
            parameters: &self.params,
        };

        let candidates = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GeneratedCandidate>>()
            .await?;

        tracing::debug!(count = candidates.len(), "generation backend answered");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_fixed_configuration() {
        let params = GenerationParams::default();
        assert_eq!(params.max_new_tokens, 30);
        assert!(params.do_sample);
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_p, 0.9);
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = GenerationClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
