//! Component Scaffold CLI
//!
//! Usage: component-scaffold [OPTIONS] <WORDS>...
//! Outputs a JSON report to stdout
//! Exit codes: 0 ok, 1 I/O or config failure, 2 invalid name

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use component_scaffold::{
    ComponentName, PatchMode, ScaffoldConfig, ScaffoldError, ScaffoldPipeline, ScaffoldRequest,
};

#[derive(Parser)]
#[command(name = "component-scaffold")]
#[command(version)]
#[command(about = "Generate a component from a template and register it with the app")]
struct Cli {
    /// Component name, e.g. `label picker`
    #[arg(required = true, num_args = 1..)]
    words: Vec<String>,

    /// Directory relative paths resolve against
    #[arg(short = 'C', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// JSON config file (defaults to scaffold.json in --dir when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip insertions that are already present
    #[arg(long)]
    once: bool,

    /// Report planned changes without writing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let output = serde_json::json!({
                "success": false,
                "error": e.to_string(),
            });
            println!("{}", output);
            match e {
                ScaffoldError::InvalidName(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: &Cli) -> Result<String, ScaffoldError> {
    let config = ScaffoldConfig::load(cli.config.as_deref(), &cli.dir)?;
    let pipeline = ScaffoldPipeline::new(config, cli.dir.clone());

    let request = ScaffoldRequest {
        name: ComponentName::from_args(cli.words.as_slice()),
        mode: if cli.once { PatchMode::Once } else { PatchMode::Always },
        dry_run: cli.dry_run,
    };
    log::debug!("Scaffolding {:?} in {}", request.name.words(), cli.dir.display());

    let report = pipeline.run(&request)?;
    let output = serde_json::json!({
        "success": true,
        "report": report,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
