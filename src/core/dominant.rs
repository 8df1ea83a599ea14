use crate::models::{Emotion, EmotionScores};

/// Pick the emotion with the highest score
///
/// Emotions are scanned in `Emotion::ALL` order and a later emotion only
/// replaces the current best when its score is strictly greater, so exact
/// ties go to whichever tied emotion comes first in
/// anger, disgust, fear, joy, sadness.
pub fn dominant_emotion(scores: &EmotionScores) -> Emotion {
    let mut best = Emotion::ALL[0];
    let mut best_score = scores.get(best);

    for &emotion in &Emotion::ALL[1..] {
        let score = scores.get(emotion);
        if score > best_score {
            best = emotion;
            best_score = score;
        }
    }

    best
}
