use async_trait::async_trait;
use lingo_core::model::{Exercise, ExerciseType, Level, PracticeKey, PracticeSet, VocabularyItem};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::PracticeConfig;
use crate::error::SourceError;
use crate::source::ExerciseSource;

/// Exercise source backed by the practice HTTP API.
///
/// English requests go to the dedicated generator endpoint, which also takes
/// the model name; every other language uses the general practice endpoint.
#[derive(Clone)]
pub struct HttpExerciseSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl HttpExerciseSource {
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the HTTP client cannot be built.
    pub fn new(config: &PracticeConfig) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Vec<u8>, SourceError> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ExerciseSource for HttpExerciseSource {
    async fn fetch(&self, key: &PracticeKey) -> Result<PracticeSet, SourceError> {
        let set = if key.language.is_english() {
            let payload = GenerateExercisesRequest {
                kind: &key.kind,
                level: key.level,
                language: key.language.name(),
                model: &self.model,
            };
            let body = self.post("/api/generate-exercises", &payload).await?;
            decode_practice_set(&body)?
        } else {
            let payload = PracticeGenerateRequest {
                language: key.language.name(),
                kind: &key.kind,
                level: key.level,
            };
            let body = self.post("/api/practice/generate", &payload).await?;
            decode_practice_set(&body)?
        };

        if set.is_empty() {
            tracing::debug!(%key, "exercise source returned an empty set");
            return Err(SourceError::EmptyResult);
        }
        Ok(set)
    }
}

/// Decode a `{exercises, vocabulary?}` payload.
///
/// # Errors
///
/// Returns `SourceError::InvalidResponseShape` if the JSON does not match.
pub(crate) fn decode_practice_set(body: &[u8]) -> Result<PracticeSet, SourceError> {
    let response: PracticeResponse = serde_json::from_slice(body)
        .map_err(|err| SourceError::InvalidResponseShape(err.to_string()))?;
    Ok(PracticeSet::new(response.exercises, response.vocabulary))
}

#[derive(Debug, Serialize)]
struct PracticeGenerateRequest<'a> {
    language: &'a str,
    #[serde(rename = "type")]
    kind: &'a ExerciseType,
    level: Level,
}

#[derive(Debug, Serialize)]
struct GenerateExercisesRequest<'a> {
    #[serde(rename = "type")]
    kind: &'a ExerciseType,
    level: Level,
    language: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct PracticeResponse {
    exercises: Vec<Exercise>,
    #[serde(default)]
    vocabulary: Vec<VocabularyItem>,
}
