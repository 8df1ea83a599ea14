use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::core::format_report;
use crate::models::{EmotionQuery, ErrorResponse};
use crate::services::{ClassifierError, EmotionClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<EmotionClient>,
}

/// Configure the emotion detection routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/emotionDetector", web::get().to(emotion_detector));
}

/// Emotion detection endpoint
///
/// GET /emotionDetector?textToAnalyze={text}
///
/// Responds with a plain-text sentence listing the five scores and the
/// dominant emotion, or with the fixed rejection message when the classifier
/// cannot analyze the text. A missing parameter is sent on as empty text.
async fn emotion_detector(
    state: web::Data<AppState>,
    query: web::Query<EmotionQuery>,
) -> impl Responder {
    let text = query.text_to_analyze.as_deref().unwrap_or_default();

    match state.classifier.classify(text).await {
        Ok(result) => {
            if result.is_invalid_input() {
                tracing::info!("Classifier rejected text, returning invalid text message");
            }
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(format_report(&result))
        }
        Err(e) => error_response(&e),
    }
}

/// Translate a classifier failure into a gateway-style error response
fn error_response(err: &ClassifierError) -> HttpResponse {
    let status = match err {
        ClassifierError::TimeoutFailure(_) => StatusCode::GATEWAY_TIMEOUT,
        ClassifierError::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ClassifierError::ConnectionFailure(_)
        | ClassifierError::Request(_)
        | ClassifierError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: err.kind().to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let response = error_response(&ClassifierError::TimeoutFailure(Duration::from_secs(10)));
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_malformed_maps_to_bad_gateway() {
        let response = error_response(&ClassifierError::MalformedResponse("bad".into()));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
