use crate::config::AppConfig;
use crate::demo::{run_batch_allocation, run_demo, AllocateArgs, DemoArgs};
use crate::error::AppError;
use crate::telemetry;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Hostel Allotment Engine",
    about = "Score applications, rank the queue, and allocate dormitory rooms from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a seeded end-to-end demo of the allotment cycle (default command)
    Demo(DemoArgs),
    /// Allocate rooms for a CSV room roster and application batch
    Allocate(AllocateArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "hostel allotment engine starting");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(&config, args),
        Command::Allocate(args) => run_batch_allocation(&config, args),
    }
}
