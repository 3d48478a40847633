/// Error types for the EPC evaluator.
/// Model problems -- malformed schema, negative fields, bad weight sums,
/// strict-mode violations -- all land in the single Validation variant so
/// callers have one uniform failure channel. The remaining variants exist
/// only for the CLI wrapper (file handling, env config); the evaluator
/// itself never performs I/O.
#[derive(Debug, thiserror::Error)]
pub enum EpcError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for EpcError {
    fn from(e: std::io::Error) -> Self {
        EpcError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for EpcError {
    fn from(e: serde_json::Error) -> Self {
        EpcError::Parse(e.to_string())
    }
}

pub type EpcResult<T> = Result<T, EpcError>;
