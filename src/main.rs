use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

use phpgen::catalog::Request;

#[derive(Parser, Debug)]
#[command(name = "phpgen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the generation request JSON, or `-` for stdin
    request: PathBuf,

    /// Directory for generated PHP files
    #[arg(short, long, default_value = "./generated")]
    output: PathBuf,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(e) = run() {
        error!(error = ?e, "Fatal error");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    info!("phpgen v{}", env!("CARGO_PKG_VERSION"));

    let raw = read_request(&cli.request)?;
    let request: Request =
        serde_json::from_str(&raw).context("Failed to parse generation request")?;

    info!(
        schemas = request.catalog.schemas.len(),
        queries = request.queries.len(),
        engine = ?request.settings.engine,
        "Request loaded"
    );

    let output = phpgen::generate(&request).context("Code generation failed")?;

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    for (filename, code) in &output {
        let path = cli.output.join(filename);
        fs::write(&path, code).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = ?path, "Wrote generated file");
    }

    info!(files = output.len(), output = ?cli.output, "Generation complete");

    Ok(())
}

fn read_request(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}
