//! Compact card view with keyboard-driven refresh and tier filtering.
//!
//! Reads line input from stdin while the poller runs: an empty line asks for
//! an immediate refresh, a tier name switches the filter, `q` quits. When
//! stdin closes the view keeps polling until Ctrl-C.

use std::io::BufRead;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::adapter::inbound::cli::command::ScreenArgs;
use crate::adapter::inbound::cli::{output, render, session};
use crate::application::feed::{FeedController, FeedPoller, FeedView};
use crate::domain::TierFilter;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// A line typed into the screen view.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScreenInput {
    Refresh,
    Quit,
    Tier(TierFilter),
    Unknown(String),
}

fn parse_input(line: &str) -> ScreenInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ScreenInput::Refresh;
    }
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return ScreenInput::Quit;
    }
    match trimmed.parse::<TierFilter>() {
        Ok(tier) => ScreenInput::Tier(tier),
        Err(_) => ScreenInput::Unknown(trimmed.to_string()),
    }
}

/// Run the screen view until `q` or Ctrl-C, or once with `--once`.
pub async fn execute(config: &Config, args: &ScreenArgs) -> Result<()> {
    let controller = session::open(config)?;
    if let Some(tier) = args.tier {
        controller.set_filter(controller.filter().with_tier(tier));
    }

    if args.once {
        session::refresh_once(&controller).await;
        draw(&controller.view(), false);
        return Ok(());
    }

    let mut updates = controller.subscribe();
    let pb = output::spinner(session::LOADING);
    let poller = FeedPoller::start(Arc::clone(&controller), config.feed.poll_interval());
    let mut input = spawn_input_reader();
    let mut input_open = true;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                output::spinner_clear(&pb);
                redraw(&controller);
            }
            line = input.recv(), if input_open => match line {
                Some(line) => match parse_input(&line) {
                    ScreenInput::Refresh => {
                        if !poller.refresh_now() {
                            debug!("Refresh already pending");
                        }
                    }
                    ScreenInput::Quit => break,
                    ScreenInput::Tier(tier) => {
                        controller.set_filter(controller.filter().with_tier(tier));
                        redraw(&controller);
                    }
                    ScreenInput::Unknown(text) => {
                        output::warning(&format!("unknown command '{text}'"));
                    }
                },
                None => input_open = false,
            }
        }
    }

    poller.shutdown().await;
    Ok(())
}

/// Forward stdin lines from a plain thread, which unlike a runtime task
/// does not hold up process exit while blocked on a read.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn redraw(controller: &FeedController) {
    session::begin_frame();
    draw(&controller.view(), true);
}

fn draw(view: &FeedView, interactive: bool) {
    if output::is_json() {
        output::json_record("snapshot", render::snapshot_json(view));
        return;
    }

    let stats = render::compact_stats(&view.aggregates)
        .into_iter()
        .map(|stat| format!("{} {}", output::accent(&stat.value), output::muted(stat.label)))
        .collect::<Vec<_>>()
        .join("   ");
    output::lines(&stats);
    output::blank();
    output::lines(&render::tier_bar(view.criteria.tier));

    if view.visible.is_empty() {
        output::blank();
        output::note(render::EMPTY_TITLE);
    }
    for prediction in &view.visible {
        output::blank();
        output::lines(&render::card(prediction));
    }

    output::blank();
    output::note(&render::last_updated(&view.snapshot));
    if interactive {
        output::hint("Enter to refresh, a tier name to filter, q to quit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfidenceTier;

    #[test]
    fn empty_line_refreshes() {
        assert_eq!(parse_input(""), ScreenInput::Refresh);
        assert_eq!(parse_input("   \n"), ScreenInput::Refresh);
    }

    #[test]
    fn q_quits() {
        assert_eq!(parse_input("q"), ScreenInput::Quit);
        assert_eq!(parse_input("QUIT"), ScreenInput::Quit);
    }

    #[test]
    fn tier_names_switch_filter() {
        assert_eq!(
            parse_input("execution"),
            ScreenInput::Tier(TierFilter::Only(ConfidenceTier::Execution))
        );
        assert_eq!(parse_input("All"), ScreenInput::Tier(TierFilter::All));
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(
            parse_input("carnage"),
            ScreenInput::Unknown("carnage".to_string())
        );
    }
}
