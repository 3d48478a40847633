use crate::engine::EpcReport;
use crate::errors::{EpcError, EpcResult};
use crate::model::EpcModel;
use std::path::Path;

/// Read and parse a model document. File errors keep their path; schema
/// errors come back on the validation channel from the parser.
pub fn load_model(path: &Path) -> EpcResult<EpcModel> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| EpcError::Io(format!("{}: {e}", path.display())))?;
    EpcModel::from_json(&raw)
}

/// Write the result document as pretty-printed JSON.
pub fn write_report(path: &Path, report: &EpcReport) -> EpcResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|e| EpcError::Io(format!("{}: {e}", path.display())))?;
    Ok(())
}
