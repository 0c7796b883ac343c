use clap::{Parser, Subcommand};
use importer::{
    DatasetValidator, DelimitedImporter, DelimitedParser, ImportContext, RecordImporter,
};
use std::path::{Path, PathBuf};
use storage::{Database, services::prize_intervals};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "award-import")]
#[command(about = "Inspect award datasets without starting the API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset to read
    #[arg(long, env = "SEED_FILE", default_value = "data/movielist.csv")]
    file: PathBuf,

    /// Column delimiter
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the dataset and report rows the API or the interval report would reject
    Validate,
    /// Load the dataset and print the producer prize intervals as JSON
    Intervals {
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "award_import={},importer={},storage={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let parser = DelimitedParser::new(cli.delimiter);

    match cli.command {
        Commands::Validate => handle_validate(&cli.file, &parser).await?,
        Commands::Intervals { pretty } => handle_intervals(&cli.file, parser, pretty).await?,
    }

    Ok(())
}

async fn handle_validate(
    file: &Path,
    parser: &DelimitedParser,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Validating dataset: {} (delimiter {:?})",
        file.display(),
        parser.delimiter()
    );

    let content = tokio::fs::read_to_string(file).await?;
    let rows = parser.parse(&content)?;

    let report = DatasetValidator::validate(&rows);
    report.log_warnings();

    tracing::info!(
        "Rows: {}, winners: {}, distinct winning producers: {}",
        report.rows,
        report.winners,
        report.producers.len()
    );

    if !report.is_valid() {
        for error in &report.errors {
            tracing::error!("{}", error);
        }
        return Err(format!("{} error(s) found in {}", report.errors.len(), file.display()).into());
    }

    tracing::info!("✓ Dataset is valid");

    Ok(())
}

async fn handle_intervals(
    file: &Path,
    parser: DelimitedParser,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::new();
    let importer = DelimitedImporter::new(parser);

    let source = file.to_string_lossy();
    importer.import(&source, &ImportContext::new(db.clone())).await?;

    let report = prize_intervals::get_prize_intervals(db.pool()).await?;
    if report.is_empty() {
        tracing::warn!("No producer has won more than once");
    }

    let output = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}
