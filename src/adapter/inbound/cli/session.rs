//! Controller setup shared by every command that reads the feed.

use std::io::IsTerminal;
use std::sync::Arc;

use crate::adapter::inbound::cli::output;
use crate::application::feed::{FeedController, RefreshOutcome};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Loading message shown until the first snapshot lands.
pub const LOADING: &str = "🥩 Preparing the Slaughter...";

/// Build a controller from configuration.
pub fn open(config: &Config) -> Result<Arc<FeedController>> {
    bootstrap::build_controller(config)
}

/// Run one refresh behind a spinner.
pub async fn refresh_once(controller: &FeedController) -> RefreshOutcome {
    let pb = output::spinner(LOADING);
    let outcome = controller.refresh().await;
    output::spinner_clear(&pb);
    outcome
}

/// Clear the terminal before a redraw when stdout is interactive.
pub fn begin_frame() {
    if std::io::stdout().is_terminal() {
        output::clear_screen();
    }
}
