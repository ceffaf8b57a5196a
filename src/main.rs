use anyhow::{Context, Result};
use clap::Parser;
use hsdeck_info::{CommandDecoder, DeckInfo};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hsdeck", version)]
#[command(about = "Show the card list, dust cost, mana curve and analysis of a Hearthstone deck")]
struct Cli {
    /// Deck code or deck-list text (read from stdin when omitted)
    deck: Vec<String>,

    /// Read the deck text from a file
    #[arg(short, long, conflicts_with = "deck")]
    file: Option<PathBuf>,

    /// External deck-code decoder; called as `<decoder> [ARGS...] <code>`, prints JSON
    #[arg(long, env = "HSDECK_DECODER")]
    decoder: String,

    /// Extra argument for the decoder (repeatable)
    #[arg(long = "decoder-arg", allow_hyphen_values = true)]
    decoder_args: Vec<String>,

    /// Use a local catalog file (.json or .json.gz) instead of downloading
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Override the catalog cache directory
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Catalog locale
    #[arg(long, default_value = "enUS")]
    locale: String,

    /// Never download; use the cached catalog only
    #[arg(long)]
    offline: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Check for a newer catalog build before building the report
    #[arg(long)]
    refresh: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "hsdeck=debug,hsdeck_info=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    if !cli.deck.is_empty() {
        return Ok(cli.deck.join(" "));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read deck text from stdin")?;
    Ok(text)
}

fn run(cli: Cli) -> Result<()> {
    let input = read_input(&cli)?;

    let mut builder = DeckInfo::builder()
        .offline(cli.offline)
        .timeout(Duration::from_secs(cli.timeout))
        .locale(cli.locale.as_str());
    if let Some(dir) = &cli.cache_dir {
        builder = builder.cache_dir(dir);
    }
    if let Some(path) = &cli.catalog {
        builder = builder.catalog_path(path);
    }
    let info = builder.build()?;
    tracing::debug!("{}", info);

    if cli.refresh {
        info.refresh()?;
    }

    let decoder = CommandDecoder::new(&cli.decoder).args(&cli.decoder_args);
    let report = info.report(&input, &decoder)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Please check your deck code and try again.");
            ExitCode::FAILURE
        }
    }
}
