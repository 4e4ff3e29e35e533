//! Study Sheets CLI - convert study data between CSV, sheets and records

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use study_sheets::prelude::*;
use study_sheets::{export_csv, import_csv, sync_sheet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheets")]
#[command(
    author,
    version,
    about = "Convert study data between CSV files, editor sheets and JSON records"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CSV file and print it as editor sheet JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Sheet name (default: file stem)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Convert a CSV data file to JSON records
    Import {
        /// Input CSV file (Vocabulary.csv, Phrases.csv or Kanji.csv)
        input: PathBuf,

        /// Record kind (default: file stem)
        #[arg(short, long)]
        kind: Option<RecordKind>,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Convert JSON records back to a CSV file
    Export {
        /// Input JSON records file
        input: PathBuf,

        /// Record kind held by the file
        #[arg(short, long)]
        kind: RecordKind,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Store an edited sheet (editor JSON) as CSV plus JSON records
    Sync {
        /// Input sheet JSON file
        input: PathBuf,

        /// Data directory receiving <Name>.csv and <name>.json
        #[arg(long)]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse {
            input,
            delimiter,
            name,
        } => parse(&input, delimiter, name),
        Commands::Import {
            input,
            kind,
            output,
            delimiter,
        } => import(&input, kind, output.as_deref(), delimiter),
        Commands::Export {
            input,
            kind,
            output,
            delimiter,
        } => export(&input, kind, output.as_deref(), delimiter),
        Commands::Sync { input, dir } => sync(&input, &dir),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse(input: &Path, delimiter: char, name: Option<String>) -> Result<()> {
    let options = CsvReadOptions {
        delimiter,
        name,
    };
    let sheet = Sheet::open(input, &options)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    debug!(sheet = sheet.name(), len = sheet.len(), "parsed");

    let json = serde_json::to_string_pretty(&sheet).context("Failed to encode sheet")?;
    println!("{json}");
    Ok(())
}

fn import(
    input: &Path,
    kind: Option<RecordKind>,
    output: Option<&Path>,
    delimiter: char,
) -> Result<()> {
    let mut options = CsvReadOptions::default().with_delimiter(delimiter);
    if let Some(kind) = kind {
        options = options.with_name(kind.as_str());
    }

    let records = import_csv(input, &options)
        .with_context(|| format!("Failed to import '{}'", input.display()))?;
    let json = records.to_json().context("Failed to encode records")?;
    info!(kind = %records.kind(), records = records.len(), hash = records.hash(), "imported");

    if let Some(output_path) = output {
        std::fs::write(output_path, &json)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} {} records to '{}'",
            records.len(),
            records.kind(),
            output_path.display()
        );
    } else {
        println!("{json}");
    }
    eprintln!("hash: {}", records.hash());

    Ok(())
}

fn export(input: &Path, kind: RecordKind, output: Option<&Path>, delimiter: char) -> Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    let options = CsvWriteOptions::default().with_delimiter(delimiter);
    debug!(kind = %kind, input = %input.display(), "exporting");

    if let Some(output_path) = output {
        export_csv(output_path, kind, &json, &options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote {} sheet to '{}'", kind, output_path.display());
    } else {
        let sheet = study_sheets::sheet_from_json(kind, &json)
            .with_context(|| format!("Failed to decode '{}'", input.display()))?;
        let stdout = io::stdout();
        CsvWriter::write(&sheet, stdout.lock(), &options).context("Failed to write to stdout")?;
    }

    Ok(())
}

fn sync(input: &Path, dir: &Path) -> Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    let sheet: Sheet = serde_json::from_str(&json)
        .with_context(|| format!("Failed to decode sheet '{}'", input.display()))?;

    let outcome = sync_sheet(&sheet, dir, &CsvWriteOptions::default())
        .with_context(|| format!("Failed to sync sheet '{}'", sheet.name()))?;
    info!(
        csv = %outcome.csv_path.display(),
        json = %outcome.json_path.display(),
        "synced"
    );

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", serde_json::json!({ "hash": outcome.hash }))
        .context("Failed to write to stdout")?;
    Ok(())
}
