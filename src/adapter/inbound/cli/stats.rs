//! Aggregates over the current feed.

use serde_json::json;

use crate::adapter::inbound::cli::{output, render, session};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Refresh once and print feed aggregates.
pub async fn execute(config: &Config) -> Result<()> {
    let controller = session::open(config)?;
    session::refresh_once(&controller).await;
    let view = controller.view();

    if output::is_json() {
        output::json_record(
            "stats",
            json!({
                "source": controller.source_label(),
                "origin": view.snapshot.origin(),
                "refreshed_at": view.snapshot.refreshed_at(),
                "aggregates": view.aggregates,
            }),
        );
        return Ok(());
    }

    output::section("Feed");
    output::field("Source", controller.source_label());
    output::field("Records", view.snapshot.len());

    output::section("Aggregates");
    for stat in render::stats_overview(&view.aggregates) {
        output::field(stat.label, &stat.value);
    }
    output::field("Demolition", view.aggregates.demolition_count);

    if output::verbosity() > 0 {
        let counters = controller.stats();
        output::section("Refreshes");
        output::field("Total", counters.refreshes);
        output::field("From backup", counters.failures);
    }

    output::blank();
    output::note(&render::last_updated(&view.snapshot));
    Ok(())
}
