use thiserror::Error;

#[derive(Error, Debug)]
pub enum Encod3rError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown encoding method: {0}")]
    UnknownMethod(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Clipboard command `{program}` exited with {status}")]
    ClipboardExit {
        program: String,
        status: std::process::ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, Encod3rError>;
