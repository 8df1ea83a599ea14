use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five emotion categories reported by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// Canonical scan order. Dominant-label ties resolve to the earliest entry.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-emotion confidence scores in [0, 1]
///
/// All five keys are required when deserializing the classifier's `emotion`
/// map; a missing key is a parse failure rather than a zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    /// Score for a single emotion
    #[inline]
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }
}

/// Outcome of one classification
///
/// Either every field is `Some` (the text was analyzed) or every field is
/// `None` (the classifier rejected the text as unanalyzable). `None`
/// serializes as `null` and is never conflated with a zero score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
    pub dominant_emotion: Option<Emotion>,
}

impl ClassificationResult {
    /// Result for text the classifier could not analyze
    pub fn invalid_input() -> Self {
        Self {
            anger: None,
            disgust: None,
            fear: None,
            joy: None,
            sadness: None,
            dominant_emotion: None,
        }
    }

    /// Result for an analyzed text with its dominant label
    pub fn analyzed(scores: EmotionScores, dominant: Emotion) -> Self {
        Self {
            anger: Some(scores.anger),
            disgust: Some(scores.disgust),
            fear: Some(scores.fear),
            joy: Some(scores.joy),
            sadness: Some(scores.sadness),
            dominant_emotion: Some(dominant),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.dominant_emotion.is_none()
    }

    /// The score vector, if the text was analyzed
    pub fn scores(&self) -> Option<EmotionScores> {
        Some(EmotionScores {
            anger: self.anger?,
            disgust: self.disgust?,
            fear: self.fear?,
            joy: self.joy?,
            sadness: self.sadness?,
        })
    }
}
