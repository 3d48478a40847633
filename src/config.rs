use crate::errors::{EpcError, EpcResult};
use std::path::PathBuf;

/// Evaluation defaults sourced from the environment (.env supported).
/// CLI flags take precedence over these.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub margin: f64,
    pub strict: bool,
    pub out_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> EpcResult<Self> {
        dotenvy::dotenv().ok();

        let margin = env_var_or("EPC_MARGIN", "0.30")
            .parse::<f64>()
            .map_err(|e| EpcError::Config(format!("EPC_MARGIN: {e}")))?;

        let strict = match env_var_or("EPC_STRICT", "0").as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            other => {
                return Err(EpcError::Config(format!(
                    "EPC_STRICT: unrecognized value '{other}'"
                )))
            }
        };

        Ok(Self {
            margin,
            strict,
            out_path: PathBuf::from(env_var_or("EPC_OUT", "epc_result.json")),
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
