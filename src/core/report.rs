use crate::models::ClassificationResult;

/// Reply for text the classifier rejected
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

/// Render a classification as the user-facing sentence
pub fn format_report(result: &ClassificationResult) -> String {
    match (result.scores(), result.dominant_emotion) {
        (Some(scores), Some(dominant)) => format!(
            "For the given statement, the system response is \
             'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {} and \
             'sadness': {}. The dominant emotion is {}.",
            format_score(scores.anger),
            format_score(scores.disgust),
            format_score(scores.fear),
            format_score(scores.joy),
            format_score(scores.sadness),
            dominant,
        ),
        _ => INVALID_TEXT_MESSAGE.to_string(),
    }
}

/// Shortest round-trip rendering of a score
///
/// Whole numbers keep a trailing `.0` and exponents carry a sign and at
/// least two digits: `1.0`, `0.92`, `1e-05`, `4.5e-05`.
pub fn format_score(value: f64) -> String {
    let shortest = format!("{:?}", value);

    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Emotion, EmotionScores};

    #[test]
    fn test_format_analyzed() {
        let scores = EmotionScores { anger: 0.92, disgust: 0.03, fear: 0.01, joy: 0.01, sadness: 0.03 };
        let report = format_report(&ClassificationResult::analyzed(scores, Emotion::Anger));

        assert_eq!(
            report,
            "For the given statement, the system response is 'anger': 0.92, \
             'disgust': 0.03, 'fear': 0.01, 'joy': 0.01 and 'sadness': 0.03. \
             The dominant emotion is anger."
        );
    }

    #[test]
    fn test_format_whole_number_score() {
        let scores = EmotionScores { anger: 0.0, disgust: 0.0, fear: 0.0, joy: 1.0, sadness: 0.0 };
        let report = format_report(&ClassificationResult::analyzed(scores, Emotion::Joy));
        assert!(report.contains("'joy': 1.0 and"));
    }

    #[test]
    fn test_format_small_scores_pad_exponent() {
        let scores = EmotionScores { anger: 0.00001, disgust: 4.5e-05, fear: 0.0001, joy: 0.9, sadness: 0.09 };
        let report = format_report(&ClassificationResult::analyzed(scores, Emotion::Joy));

        assert!(report.contains("'anger': 1e-05, 'disgust': 4.5e-05, 'fear': 0.0001,"), "got: {}", report);
    }

    #[test]
    fn test_format_score_shapes() {
        assert_eq!(format_score(0.92), "0.92");
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(1.5e-7), "1.5e-07");
        assert_eq!(format_score(2.5e-123), "2.5e-123");
        assert_eq!(format_score(1e16), "1e+16");
    }

    #[test]
    fn test_format_invalid() {
        assert_eq!(format_report(&ClassificationResult::invalid_input()), INVALID_TEXT_MESSAGE);
    }
}
