use thiserror::Error;

/// Strict formation parsing failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormationError {
    #[error("Empty formation")]
    Empty,

    #[error("Invalid formation token {token:?} at line {line}")]
    InvalidToken { token: String, line: usize },

    #[error("Line {line} has {players} players, at most {max} allowed")]
    LineTooLarge { players: u32, line: usize, max: u32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Viewport too small: {columns}x{rows}")]
    ViewportTooSmall { columns: usize, rows: usize },
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
