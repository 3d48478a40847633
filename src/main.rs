mod cli;
mod config;
mod engine;
mod errors;
mod io;
mod model;
mod report;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    let default_filter = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args, &cfg) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &cli::Cli, cfg: &config::AppConfig) -> errors::EpcResult<()> {
    let margin = args.margin.unwrap_or(cfg.margin);
    let strict = args.strict || cfg.strict;
    let out_path = args.out_path.as_ref().unwrap_or(&cfg.out_path);

    let model = io::load_model(&args.in_path)?;
    tracing::debug!(
        modules = model.modules.len(),
        bounties = model.bounties.len(),
        bonuses = model.bonuses.len(),
        margin,
        strict,
        "model loaded"
    );

    let result = engine::compute(&model, margin, strict)?;
    io::write_report(out_path, &result)?;
    tracing::info!("result written to {}", out_path.display());

    print!("{}", report::render_summary(&result));
    Ok(())
}
