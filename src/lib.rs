//! Emotion Detector - web front end for a remote emotion classifier
//!
//! Forwards free text to a remote EmotionPredict service, reads back the
//! anger/disgust/fear/joy/sadness scores and picks the dominant emotion.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{dominant_emotion, format_report, INVALID_TEXT_MESSAGE};
pub use models::{ClassificationResult, Emotion, EmotionScores};
pub use services::{ClassifierConfig, ClassifierError, EmotionClient};
