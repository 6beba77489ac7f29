use analytics::{DashboardEngine, Selection};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use configuration::{Config, LoggingSettings, OutputFormat};
use core_types::{Channel, Clock, FixedClock, RangeSelector, Row, SystemClock};
use row_source::{DemoGenerator, DemoSource, FileSource, RowSource};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod render;

/// The main entry point for the Commerce Pulse dashboard.
fn main() -> Result<()> {
    // Load PULSE_* overrides from a .env file when one exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config_from(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let _log_guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Generate(args) => handle_generate(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Orders, units and revenue across sales channels, with period-over-period comparison.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a config file. Defaults to an optional `config.toml` in the working directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard for a channel set and date range.
    Report(ReportArgs),
    /// Write the seeded demo dataset to a JSON file.
    Generate(GenerateArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Range selector: "today", "7d" or "30d". Anything else means "30d".
    #[arg(long)]
    range: Option<String>,

    /// Comma-separated active channels (e.g. "shopify,myntra"). Defaults to all configured channels.
    #[arg(long, value_delimiter = ',')]
    channels: Option<Vec<String>>,

    /// A `.json` or `.csv` rows file. Overrides `source.path` from the config.
    #[arg(long, conflicts_with = "demo")]
    source: Option<PathBuf>,

    /// Use the generated demo dataset even if a rows file is configured.
    #[arg(long)]
    demo: bool,

    /// Output format. Overrides `output.format` from the config.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Pretend today is this date (format: YYYY-MM-DD).
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Parser)]
struct GenerateArgs {
    /// Where to write the rows (JSON).
    #[arg(long)]
    out: PathBuf,

    /// Number of days to generate, ending today.
    #[arg(long)]
    days: Option<u32>,

    /// Generator seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Pretend today is this date (format: YYYY-MM-DD).
    #[arg(long)]
    today: Option<NaiveDate>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let clock = clock_for(args.today);

    let source_path = if args.demo {
        None
    } else {
        args.source.or_else(|| config.source.path.clone())
    };
    let rows = load_rows(source_path, config, clock.as_ref())?;

    let selection = Selection::new(
        active_channels(args.channels, config),
        args.range
            .as_deref()
            .map(RangeSelector::parse)
            .unwrap_or(config.dashboard.default_range),
    );

    let engine = DashboardEngine::with_sparkline_len(config.dashboard.sparkline_len)?;
    let report = engine.calculate(&rows, &selection, clock.as_ref());
    let cards = report.channel_cards(&config.dashboard.channels);

    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Table => {
            println!(
                "{}",
                render::render_tables(&report, &cards, &config.dashboard.currency_symbol)
            );
        }
        OutputFormat::Json => {
            println!("{}", render::render_json(&report, &cards)?);
        }
    }
    Ok(())
}

fn handle_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let clock = clock_for(args.today);
    let generator = DemoGenerator::new(
        args.days.unwrap_or(config.source.demo_days),
        args.seed.unwrap_or(config.source.demo_seed),
    )
    .with_channels(config.dashboard.channels.clone());

    let rows = generator.generate(clock.as_ref());
    row_source::write_json(&args.out, &rows)
        .with_context(|| format!("Failed to write demo rows to {}", args.out.display()))?;

    println!("Wrote {} rows to {}", rows.len(), args.out.display());
    Ok(())
}

fn load_rows(path: Option<PathBuf>, config: &Config, clock: &dyn Clock) -> Result<Vec<Row>> {
    let rows = match path {
        Some(path) => {
            let source = FileSource::new(path);
            source
                .load()
                .with_context(|| format!("Failed to load rows from {}", source.path().display()))?
        }
        None => {
            let generator = DemoGenerator::new(config.source.demo_days, config.source.demo_seed)
                .with_channels(config.dashboard.channels.clone());
            DemoSource::new(generator, clock).load()?
        }
    };

    if rows.is_empty() {
        tracing::warn!("Row source is empty; every figure will be zero.");
    }
    Ok(rows)
}

/// The channels named on the command line, or every configured channel.
fn active_channels(requested: Option<Vec<String>>, config: &Config) -> Vec<Channel> {
    let Some(requested) = requested else {
        return config.dashboard.channels.clone();
    };

    let mut channels: Vec<Channel> = Vec::new();
    for name in requested {
        let channel = Channel::from(name.trim());
        if channel.as_str().is_empty() || channels.contains(&channel) {
            continue;
        }
        if !config.dashboard.channels.contains(&channel) {
            tracing::warn!(%channel, "Channel is not in the configured channel list.");
        }
        channels.push(channel);
    }
    channels
}

fn clock_for(today: Option<NaiveDate>) -> Box<dyn Clock> {
    match today {
        Some(day) => Box::new(FixedClock(day)),
        None => Box::new(SystemClock),
    }
}

// ==============================================================================
// Logging
// ==============================================================================

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
///
/// The returned guard must be held for the life of the program when logging to a file.
fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "commerce-pulse.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(Some(guard))
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(None)
        }
    }
}
