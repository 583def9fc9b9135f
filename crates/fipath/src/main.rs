use clap::Parser;
use std::path::PathBuf;

use fipath_core::run_simulation;

mod logging;
mod output;
mod storage;

use output::Format;

#[derive(Parser, Debug)]
#[command(name = "fipath")]
#[command(about = "A lifetime net worth and financial independence forecaster")]
struct Args {
    /// Path to the plan file
    #[arg(short, long, default_value = "user_data.json")]
    config: PathBuf,

    /// Output format for the projection
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Truncate the displayed projection at this age. The simulation itself
    /// always runs to age 85 so later life events still affect earlier rows.
    #[arg(long)]
    until_age: Option<u8>,

    /// Write the example plan to the config path and exit
    #[arg(long)]
    init: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level);

    if args.init {
        storage::write_example(&args.config)?;
        println!("Wrote example plan to {}", args.config.display());
        return Ok(());
    }

    let plan = storage::load_or_example(&args.config)?;

    // The engine never reads the clock; the calendar year of "now" is
    // injected here so runs stay pure functions of their inputs
    let start_year = jiff::Zoned::now().date().year();

    tracing::info!(
        start_age = plan.settings.start_age,
        holdings = plan.portfolio.len(),
        events = plan.events.len(),
        "Running projection"
    );
    let projection = run_simulation(&plan, start_year)?;

    print!(
        "{}",
        output::render(&plan, &projection, args.format, args.until_age)
    );
    Ok(())
}
