use std::process::ExitCode;

use bookie_butcher::adapter::inbound::cli::{self, command::Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    cli::run(Cli::parse()).await
}
