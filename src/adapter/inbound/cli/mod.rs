//! Command-line adapter: argument parsing, dispatch, and terminal views.

pub mod check;
pub mod command;
pub mod dashboard;
pub mod detail;
pub mod diagnostic;
pub mod output;
pub mod render;
pub mod screen;
pub mod session;
pub mod stats;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use command::{CheckCommand, Cli, ColorChoice, Commands};
use output::OutputConfig;

use crate::error::Result;
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_FILE};

/// Run the parsed command line to completion.
pub async fn run(cli: Cli) -> ExitCode {
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        use_color(&cli.color),
    ));

    match dispatch(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            output::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: Cli) -> Result<bool> {
    if let Commands::Check(CheckCommand::Config(arg)) = &cli.command {
        let path = arg
            .path
            .clone()
            .or_else(|| cli.config.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        return check::config::execute_config(&path);
    }

    let mut config = Config::resolve(cli.config.as_deref())?;
    apply_verbosity(&mut config, cli.verbose, cli.quiet);
    config.init_logging();

    match &cli.command {
        Commands::Dashboard(args) => dashboard::execute(&config, args).await?,
        Commands::Screen(args) => screen::execute(&config, args).await?,
        Commands::Show(args) => detail::execute(&config, args).await?,
        Commands::Stats => stats::execute(&config).await?,
        Commands::Check(_) => {}
    }
    Ok(true)
}

/// `-v` raises and `-q` lowers the configured log level.
fn apply_verbosity(config: &mut Config, verbose: u8, quiet: bool) {
    let level = match (verbose, quiet) {
        (0, true) => "error",
        (0, false) => return,
        (1, _) => "debug",
        _ => "trace",
    };
    config.logging.level = level.to_string();
}

fn use_color(choice: &ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}
