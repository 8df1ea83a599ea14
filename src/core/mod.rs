// Core classification rules
pub mod dominant;
pub mod report;

pub use dominant::dominant_emotion;
pub use report::{format_report, format_score, INVALID_TEXT_MESSAGE};
