// Unit tests for Emotion Detector

use emotion_detector::core::{dominant_emotion, format_report, INVALID_TEXT_MESSAGE};
use emotion_detector::models::{ClassificationResult, ClassifierRequest, Emotion, EmotionScores};
use emotion_detector::services::{parse_emotion_scores, ClassifierError};

fn scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> EmotionScores {
    EmotionScores { anger, disgust, fear, joy, sadness }
}

#[test]
fn test_dominant_each_emotion() {
    assert_eq!(dominant_emotion(&scores(0.01, 0.01, 0.01, 0.95, 0.02)), Emotion::Joy);
    assert_eq!(dominant_emotion(&scores(0.92, 0.03, 0.01, 0.01, 0.03)), Emotion::Anger);
    assert_eq!(dominant_emotion(&scores(0.05, 0.88, 0.02, 0.01, 0.04)), Emotion::Disgust);
    assert_eq!(dominant_emotion(&scores(0.02, 0.01, 0.03, 0.01, 0.93)), Emotion::Sadness);
    assert_eq!(dominant_emotion(&scores(0.03, 0.01, 0.90, 0.02, 0.04)), Emotion::Fear);
}

#[test]
fn test_dominant_narrow_margin() {
    assert_eq!(dominant_emotion(&scores(0.30, 0.31, 0.29, 0.05, 0.05)), Emotion::Disgust);
}

#[test]
fn test_dominant_every_tied_pair() {
    // For each pair (i, j) with i before j, tie them at the max and expect i
    for (i, first) in Emotion::ALL.iter().enumerate() {
        for second in &Emotion::ALL[i + 1..] {
            let mut values = [0.1; 5];
            for (k, emotion) in Emotion::ALL.iter().enumerate() {
                if emotion == first || emotion == second {
                    values[k] = 0.4;
                }
            }
            let tied = scores(values[0], values[1], values[2], values[3], values[4]);
            assert_eq!(dominant_emotion(&tied), *first, "{} vs {}", first, second);
        }
    }
}

#[test]
fn test_dominant_all_equal() {
    assert_eq!(dominant_emotion(&scores(0.2, 0.2, 0.2, 0.2, 0.2)), Emotion::Anger);
}

#[test]
fn test_report_sentence() {
    let result = ClassificationResult::analyzed(scores(0.01, 0.01, 0.01, 0.95, 0.02), Emotion::Joy);
    assert_eq!(
        format_report(&result),
        "For the given statement, the system response is 'anger': 0.01, \
         'disgust': 0.01, 'fear': 0.01, 'joy': 0.95 and 'sadness': 0.02. \
         The dominant emotion is joy."
    );
}

#[test]
fn test_report_invalid_input() {
    assert_eq!(format_report(&ClassificationResult::invalid_input()), INVALID_TEXT_MESSAGE);
    assert_eq!(INVALID_TEXT_MESSAGE, "Invalid text! Please try again!");
}

#[test]
fn test_invalid_input_is_not_zero() {
    let result = ClassificationResult::invalid_input();
    assert!(result.is_invalid_input());
    assert_ne!(result.anger, Some(0.0));
    assert!(result.scores().is_none());
}

#[test]
fn test_request_body_keeps_text() {
    for text in ["", "plain", "<p>markup & \"quotes\"</p>", "日本語 ✓"] {
        let body = serde_json::to_value(ClassifierRequest::new(text)).unwrap();
        assert_eq!(body["raw_document"]["text"], text);
    }
}

#[test]
fn test_parse_watson_response() {
    let body = r#"{"emotionPredictions":[{"emotion":{"anger":0.0132,"disgust":0.0021,"fear":0.0094,"joy":0.9613,"sadness":0.0143},"target":"","emotionMentions":[]}],"producerId":{"name":"Ensemble Aggregated Emotion Workflow","version":"0.0.1"}}"#;

    let parsed = parse_emotion_scores(body).unwrap();
    assert_eq!(parsed, scores(0.0132, 0.0021, 0.0094, 0.9613, 0.0143));
    assert_eq!(dominant_emotion(&parsed), Emotion::Joy);
}

#[test]
fn test_parse_missing_predictions_field() {
    let err = parse_emotion_scores(r#"{"code": 3}"#).unwrap_err();
    assert!(matches!(err, ClassifierError::MalformedResponse(_)));
}

#[test]
fn test_parse_non_numeric_score() {
    let body = r#"{"emotionPredictions":[{"emotion":{"anger":"high","disgust":0.1,"fear":0.1,"joy":0.1,"sadness":0.1}}]}"#;
    let err = parse_emotion_scores(body).unwrap_err();
    assert!(matches!(err, ClassifierError::MalformedResponse(_)));
}
