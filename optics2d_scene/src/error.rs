use optics2d::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid scene: {0}")]
    Format(String),

    #[error("invalid geometry: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl SceneError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;
