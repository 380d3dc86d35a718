use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use core_logic::{setup_logger, setup_logger_with_file, TransactionSigner, WalletManager};
use dotenv::dotenv;
use evm_fixtures::config::{CliOverrides, EvmFixtureConfig};
use evm_fixtures::output::write_json;
use evm_fixtures::{EthersSigner, FixtureGenerator, SigningVector};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `[plaintextFields, signingMetadata]` pairs
    Batch,
    /// `input` / `privateKey` / `output` signing vectors
    Vector,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML file overriding the reference settings
    #[arg(short, long)]
    config: Option<String>,

    #[arg(short = 'n', long)]
    count: Option<usize>,

    #[arg(long)]
    chain_id: Option<u64>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Batch)]
    format: OutputFormat,

    /// Write the fixtures here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    log_file: Option<String>,
}

fn emit<T: Serialize>(output: Option<&Path>, value: &T) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_json(BufWriter::new(file), value)
        }
        None => write_json(std::io::stdout().lock(), value),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _guard = match &args.log_file {
        Some(path) => Some(setup_logger_with_file(path)?),
        None => {
            setup_logger()?;
            None
        }
    };
    dotenv().ok();

    let settings = EvmFixtureConfig::load_or_default(args.config.as_deref())
        .context("Failed to load config")?
        .apply_overrides(&CliOverrides {
            count: args.count,
            chain_id: args.chain_id,
            seed: args.seed,
        });
    let config = settings.to_fixture_config()?;

    info!(
        "Generating {} fixtures for chain ID {}",
        config.count, config.chain_id
    );

    let key = WalletManager::resolve_private_key(settings.private_key.as_deref())?;
    let signer = EthersSigner::new(key, config.chain_id)?;
    info!("Signing as {:?}", signer.address());

    let mut generator = FixtureGenerator::from_config(&config, signer)?;

    // Nothing is written until every record is signed
    match args.format {
        OutputFormat::Batch => {
            let records = generator.generate(config.count)?;
            emit(args.output.as_deref(), &records)?;
        }
        OutputFormat::Vector => {
            let key = generator.signer().private_key_hex().to_string();
            let vectors: Vec<SigningVector> = generator
                .generate_signed(config.count)?
                .iter()
                .map(|(tx, signed)| SigningVector::new(tx, signed, &key))
                .collect();
            emit(args.output.as_deref(), &vectors)?;
        }
    }

    info!(
        target: "fixture_result",
        "SUCCESS: wrote {} {:?} fixtures",
        config.count,
        args.format
    );

    Ok(())
}
