mod cli;
pub mod config;
mod demo;
pub mod error;
pub mod telemetry;

pub use error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
