mod config;
mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pharmgen_generate::{GenerateOptions, GenerationEngine, GenerationError, verify_archive};
use thiserror::Error;

use logging::{LogFormat, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "pharmgen", version, about = "Synthetic pharmaceutical dataset generator")]
struct Cli {
    /// Console log format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the JSON, SQL and zip artifacts.
    Generate(GenerateArgs),
    /// Re-read an archive and cross-check its document against its statements.
    Verify(VerifyArgs),
    /// Print the resolved generation options as TOML.
    Config(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML file with generation options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output directory for the artifacts.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed for the record stream.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of commercial records.
    #[arg(long)]
    commercial: Option<u32>,
    /// Number of compounding records.
    #[arg(long)]
    compounding: Option<u32>,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Archive produced by `generate`.
    #[arg(value_name = "ARCHIVE")]
    archive: PathBuf,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => {
            init_logging(cli.log_format)?;
            run_generate(args)
        }
        Command::Verify(args) => {
            init_logging(cli.log_format)?;
            run_verify(args)
        }
        Command::Config(args) => {
            let options = resolve_options(args)?;
            print!("{}", config::render_options(&options)?);
            Ok(())
        }
    }
}

fn resolve_options(args: GenerateArgs) -> Result<GenerateOptions, CliError> {
    let GenerateArgs {
        config,
        out,
        seed,
        commercial,
        compounding,
    } = args;

    let mut options = match config {
        Some(path) => config::load_options(&path)?,
        None => GenerateOptions::default(),
    };
    if let Some(out) = out {
        options.out_dir = out;
    }
    if let Some(seed) = seed {
        options.seed = seed;
    }
    if let Some(commercial) = commercial {
        options.commercial_count = commercial;
    }
    if let Some(compounding) = compounding {
        options.compounding_count = compounding;
    }
    Ok(options)
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let options = resolve_options(args)?;
    let engine = GenerationEngine::new(options);
    let result = engine.run().inspect_err(|err| {
        tracing::error!(error = %err, "generation failed");
    })?;

    println!("document={}", result.paths.document.display());
    println!("statements={}", result.paths.statements.display());
    println!("archive={}", result.paths.archive.display());
    println!("{}", serde_json::to_string_pretty(&result.report)?);
    Ok(())
}

fn run_verify(args: VerifyArgs) -> Result<(), CliError> {
    let report = verify_archive(&args.archive).inspect_err(|err| {
        tracing::error!(archive = %args.archive.display(), error = %err, "verification failed");
    })?;

    tracing::info!(
        archive = %args.archive.display(),
        records = report.records.total,
        "archive verified"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
