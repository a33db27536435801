#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network response was not ok")]
    BadStatus(reqwest::StatusCode),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Something went wrong")]
    Unknown,
}
