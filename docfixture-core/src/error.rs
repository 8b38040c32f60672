use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Missing field in record: {0}")]
    MissingField(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Invalid date '{value}': expected {expected}")]
    DateFormat { value: String, expected: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
