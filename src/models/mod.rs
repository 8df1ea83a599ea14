// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Emotion, EmotionScores, ClassificationResult};
pub use requests::{ClassifierRequest, RawDocument, EmotionQuery};
pub use responses::{EmotionPredictResponse, EmotionPrediction, ErrorResponse};
