use serde::{Deserialize, Serialize};
use crate::models::domain::EmotionScores;

/// Body returned by the remote classifier's EmotionPredict call
#[derive(Debug, Clone, Deserialize)]
pub struct EmotionPredictResponse {
    #[serde(rename = "emotionPredictions")]
    pub emotion_predictions: Vec<EmotionPrediction>,
}

/// A single document-level prediction
#[derive(Debug, Clone, Deserialize)]
pub struct EmotionPrediction {
    pub emotion: EmotionScores,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
