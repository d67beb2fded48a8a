//! Full dashboard view: stats overview, active filters, prediction table.

use std::sync::Arc;

use crate::adapter::inbound::cli::command::DashboardArgs;
use crate::adapter::inbound::cli::{output, render, session};
use crate::application::feed::{FeedPoller, FeedView};
use crate::domain::FilterCriteria;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run the dashboard until Ctrl-C, or once with `--once`.
pub async fn execute(config: &Config, args: &DashboardArgs) -> Result<()> {
    let controller = session::open(config)?;
    controller.set_filter(apply_overrides(controller.filter(), args));

    if args.once {
        session::refresh_once(&controller).await;
        draw(&controller.view(), false);
        return Ok(());
    }

    let mut updates = controller.subscribe();
    let pb = output::spinner(session::LOADING);
    let poller = FeedPoller::start(Arc::clone(&controller), config.feed.poll_interval());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                output::spinner_clear(&pb);
                session::begin_frame();
                draw(&controller.view(), true);
            }
        }
    }

    poller.shutdown().await;
    Ok(())
}

/// Command-line filter flags take precedence over the configured filter.
fn apply_overrides(mut criteria: FilterCriteria, args: &DashboardArgs) -> FilterCriteria {
    if let Some(sport) = &args.sport {
        criteria = criteria.with_sport(sport.clone());
    }
    if let Some(tier) = args.tier {
        criteria = criteria.with_tier(tier);
    }
    if let Some(min_edge) = args.min_edge {
        criteria = criteria.with_min_edge(min_edge);
    }
    criteria
}

fn draw(view: &FeedView, live: bool) {
    if output::is_json() {
        output::json_record("snapshot", render::snapshot_json(view));
        return;
    }

    output::header(
        "Today's Slaughter",
        "Premium PrizePicks predictions with mathematical precision",
    );

    output::section("Overview");
    for stat in render::stats_overview(&view.aggregates) {
        output::field(
            stat.label,
            format!("{}  {}", output::accent(&stat.value), output::muted(stat.caption)),
        );
    }

    output::section("Filters");
    for (label, value) in render::filter_summary(&view.criteria) {
        output::field(label, value);
    }

    output::section("Predictions");
    if view.visible.is_empty() {
        output::note(render::EMPTY_TITLE);
        output::hint(render::EMPTY_HINT);
    } else {
        output::lines(&render::prediction_table(&view.visible));
    }

    output::blank();
    output::note(&render::last_updated(&view.snapshot));
    if live {
        output::note("Ctrl-C to exit");
    }
}
