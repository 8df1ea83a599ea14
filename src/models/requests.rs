use serde::{Deserialize, Serialize};

/// Outbound body for the remote classifier: `{"raw_document": {"text": ...}}`
///
/// The text is borrowed and sent as-is; the remote service is the only judge
/// of whether it can be analyzed.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifierRequest<'a> {
    pub raw_document: RawDocument<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RawDocument<'a> {
    pub text: &'a str,
}

impl<'a> ClassifierRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            raw_document: RawDocument { text },
        }
    }
}

/// Query string of `GET /emotionDetector`
#[derive(Debug, Clone, Deserialize)]
pub struct EmotionQuery {
    #[serde(rename = "textToAnalyze")]
    pub text_to_analyze: Option<String>,
}
