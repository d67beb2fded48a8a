//! The "Butcher Analysis" view for a single prediction.

use crate::adapter::inbound::cli::command::ShowArgs;
use crate::adapter::inbound::cli::{output, render, session};
use crate::domain::error::DomainError;
use crate::domain::PredictionId;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

const WRAP_WIDTH: usize = 76;

/// Refresh once and print the full rationale for `args.id`.
pub async fn execute(config: &Config, args: &ShowArgs) -> Result<()> {
    let controller = session::open(config)?;
    session::refresh_once(&controller).await;

    let id = PredictionId::new(args.id.trim());
    let prediction = controller
        .find(&id)
        .ok_or_else(|| DomainError::PredictionNotFound { id: id.to_string() })?;

    if output::is_json() {
        output::json_record("prediction", render::prediction_json(&prediction));
        return Ok(());
    }

    output::header("Butcher Analysis", &prediction.id.to_string());
    for (label, value) in render::analysis(&prediction) {
        output::field(label, value);
    }

    output::section("Reasoning");
    output::lines(&render::wrap(&prediction.rationale, WRAP_WIDTH));
    Ok(())
}
