use thiserror::Error;

/// Error type shared by the calculator, the bank-data providers and configuration.
#[derive(Debug, Error)]
pub enum PesoGrowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid bank record `{id}`: {reason}")]
    InvalidRecord { id: String, reason: String },
    #[error("Invalid calculator configuration: {0}")]
    InvalidConfig(String),
    #[error("{}", unknown_category_message(.input, .suggestion))]
    UnknownCategory {
        input: String,
        suggestion: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PesoGrowError>;

fn unknown_category_message(input: &str, suggestion: &Option<String>) -> String {
    match suggestion {
        Some(best) => format!("Unknown bank category `{input}` (did you mean `{best}`?)"),
        None => format!("Unknown bank category `{input}`"),
    }
}
