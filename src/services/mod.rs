// Service exports
pub mod classifier;

pub use classifier::{ClassifierConfig, ClassifierError, EmotionClient, parse_emotion_scores};
