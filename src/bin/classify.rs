// One-shot classification from the command line
//
// Usage: emotion-classify [TEXT...]

use emotion_detector::config::Settings;
use emotion_detector::services::EmotionClient;
use emotion_detector::telemetry;
use std::process::ExitCode;

const DEFAULT_TEXT: &str = "I love this new technology.";

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    telemetry::init_tracing(&settings.logging);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        DEFAULT_TEXT.to_string()
    } else {
        args.join(" ")
    };

    let client = match EmotionClient::new(settings.classifier.to_client_config()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to initialize classifier client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.classify(&text).await {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to serialize result: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Classification failed ({}): {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}
