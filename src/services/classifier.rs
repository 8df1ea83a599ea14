use crate::core::dominant_emotion;
use crate::models::{ClassificationResult, ClassifierRequest, EmotionPredictResponse, EmotionScores};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Default EmotionPredict endpoint
pub const DEFAULT_CLASSIFIER_URL: &str =
    "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Header selecting the model variant on the remote service
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Default model variant
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

/// Default upper bound on one classifier call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when calling the remote classifier
///
/// Rejected input is not an error: it comes back as
/// [`ClassificationResult::invalid_input`].
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Connection to emotion classifier failed: {0}")]
    ConnectionFailure(#[source] reqwest::Error),

    #[error("Emotion classifier did not respond within {0:?}")]
    TimeoutFailure(Duration),

    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Malformed classifier response: {0}")]
    MalformedResponse(String),
}

impl ClassifierError {
    /// Short name of the failure kind, used in logs and error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifierError::ClientBuild(_) => "client_build",
            ClassifierError::ConnectionFailure(_) => "connection_failure",
            ClassifierError::TimeoutFailure(_) => "timeout_failure",
            ClassifierError::Request(_) => "request_failure",
            ClassifierError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Endpoint, model header and timeout for [`EmotionClient`]
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub url: String,
    pub model_id: String,
    pub timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CLASSIFIER_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the remote emotion classifier
///
/// Every call to [`EmotionClient::classify`] is one independent POST with no
/// retries. The client keeps no per-call state and can be shared freely.
pub struct EmotionClient {
    config: ClassifierConfig,
    client: Client,
}

impl EmotionClient {
    /// Create a new classifier client
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClassifierError::ClientBuild)?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `text` into the five emotion scores and a dominant label
    ///
    /// HTTP 400 from the remote service yields an all-absent result.
    /// Connection failures, timeouts and unexpected response shapes are
    /// logged and returned as errors.
    pub async fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifierError> {
        tracing::info!(
            url = %self.config.url,
            text_len = text.len(),
            "Sending request to emotion classifier"
        );

        let response = self
            .client
            .post(&self.config.url)
            .header(MODEL_ID_HEADER, &self.config.model_id)
            .json(&ClassifierRequest::new(text))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "Response received from emotion classifier");

        if status == StatusCode::BAD_REQUEST {
            tracing::debug!("Classifier rejected input text");
            return Ok(ClassificationResult::invalid_input());
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let scores = parse_emotion_scores(&body).map_err(|e| {
            tracing::error!(kind = e.kind(), status = status.as_u16(), "{}", e);
            e
        })?;

        Ok(ClassificationResult::analyzed(scores, dominant_emotion(&scores)))
    }

    /// Map a reqwest failure onto the client's error taxonomy and log it
    ///
    /// A timeout while still connecting counts as a connection failure.
    fn transport_error(&self, err: reqwest::Error) -> ClassifierError {
        let error = if err.is_connect() {
            ClassifierError::ConnectionFailure(err)
        } else if err.is_timeout() {
            ClassifierError::TimeoutFailure(self.config.timeout)
        } else {
            ClassifierError::Request(err)
        };

        tracing::error!(kind = error.kind(), url = %self.config.url, "{}", error);
        error
    }
}

/// Extract the score vector from an EmotionPredict response body
///
/// Reads `emotionPredictions[0].emotion`, requiring all five emotion keys.
pub fn parse_emotion_scores(body: &str) -> Result<EmotionScores, ClassifierError> {
    let response: EmotionPredictResponse = serde_json::from_str(body)
        .map_err(|e| ClassifierError::MalformedResponse(format!("Failed to parse body: {}", e)))?;

    response
        .emotion_predictions
        .into_iter()
        .next()
        .map(|prediction| prediction.emotion)
        .ok_or_else(|| ClassifierError::MalformedResponse("Empty emotionPredictions array".into()))
}
