use clap::Parser;
use std::path::PathBuf;

/// Blended EPC calculator for weighted product modules, fixed-payout
/// bounties, and per-order bonuses.
#[derive(Parser, Debug)]
#[command(name = "epc_calc")]
#[command(about = "Compute blended earnings-per-click and CPC pricing guidance", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the model JSON input
    #[arg(long = "in", value_name = "FILE")]
    pub in_path: PathBuf,

    /// Target margin for the CPC cap (default 0.30, or EPC_MARGIN)
    #[arg(long, value_name = "DECIMAL")]
    pub margin: Option<f64>,

    /// Where to write the result JSON (default epc_result.json, or EPC_OUT)
    #[arg(long = "out", value_name = "FILE")]
    pub out_path: Option<PathBuf>,

    /// Require at least one product module in the model
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
