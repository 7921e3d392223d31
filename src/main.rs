use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use building_energy::{logging, Config, Pipeline};

#[derive(Parser)]
#[command(name = "building_energy")]
#[command(about = "Convert LL33 energy disclosure spreadsheets into normalized building JSON")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input spreadsheet (defaults to building_energy.xlsx)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output JSON file (defaults to building_energy_data.json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Worksheet name (defaults to the first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Also write JSON log files to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .context("loading configuration")?
        .with_overrides(cli.input, cli.output, cli.sheet)
        .with_log_dir(cli.log_dir);

    let _log_guard = logging::init_logging(config.logging.dir.as_deref());

    info!(
        input = %config.files.input.display(),
        output = %config.files.output.display(),
        "Resolved configuration"
    );

    let pipeline = Pipeline::new(config);
    let input = pipeline.config().files.input.display().to_string();

    let result = pipeline
        .run()
        .inspect_err(|e| error!("Conversion failed: {}", e))
        .with_context(|| format!("converting {}", input))?;

    println!("\n📊 Conversion results:");
    println!("   Buildings: {}", result.total_rows);
    println!("   Missing benchmarking: {}", result.missing_benchmarking);
    println!("   Duration: {:.2}s", result.duration_secs);
    println!(
        "Data has been successfully parsed and saved to {}",
        result.output_file.display()
    );

    Ok(())
}
