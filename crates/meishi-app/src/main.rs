use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use meishi_core::config::load_config;
use meishi_core::types::ContactInfo;
use meishi_engine::ContactExtractor;
use meishi_engine::codec;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "meishi",
    version,
    about = "Business-card text to contact records and vCard"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a contact record from recognized card lines (one per line)
    Scan {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Encode a contact JSON record as vCard text
    Encode {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Decode vCard text into contact JSON records
    Decode {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Vcard,
}

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Scan { file, format } => {
            let input = read_input(file.as_deref())?;
            let lines: Vec<String> = input.lines().map(str::to_string).collect();
            let contact = ContactExtractor::new().extract(&lines);

            match format.unwrap_or_else(|| configured_format(&config.output.format)) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&contact)?),
                OutputFormat::Vcard => print!("{}", codec::encode(&contact, None)),
            }
        }
        Command::Encode { file } => {
            let input = read_input(file.as_deref())?;
            let contact: ContactInfo =
                serde_json::from_str(&input).context("input is not a contact JSON record")?;
            contact.ensure_identity()?;
            print!("{}", codec::encode(&contact, None));
        }
        Command::Decode { file } => {
            let input = read_input(file.as_deref())?;
            let contacts = codec::decode(&input);
            println!("{}", serde_json::to_string_pretty(&contacts)?);
        }
    }

    Ok(())
}

fn configured_format(name: &str) -> OutputFormat {
    if name.eq_ignore_ascii_case("vcard") {
        OutputFormat::Vcard
    } else {
        OutputFormat::Json
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}
