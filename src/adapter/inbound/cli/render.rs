//! Plain-text building blocks shared by the dashboard and screen views.
//!
//! Everything here returns uncolored strings or JSON values so views can be
//! tested without a terminal.

use chrono::{DateTime, Utc};
use chrono_tz::America::Chicago;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::outbound::PredictionDto;
use crate::application::feed::FeedView;
use crate::domain::{
    as_percent, ConfidenceTier, FeedAggregates, FilterCriteria, Prediction, Snapshot,
    SnapshotOrigin, Sport, TierFilter,
};

/// Icon shown next to a player's name.
#[must_use]
pub fn sport_icon(sport: &Sport) -> &'static str {
    match sport.as_str() {
        "nba" | "cbb" => "🏀",
        "nfl" => "🏈",
        "nhl" => "🏒",
        _ => "🥩",
    }
}

/// Label used for a tier in the filter bar.
#[must_use]
pub fn tier_label(tier: TierFilter) -> &'static str {
    match tier {
        TierFilter::All => "All Levels",
        TierFilter::Only(ConfidenceTier::Execution) => "🔥 EXECUTION",
        TierFilter::Only(ConfidenceTier::Demolition) => "⚡ DEMOLITION",
        TierFilter::Only(ConfidenceTier::Meat) => "🥩 MEAT",
        TierFilter::Only(ConfidenceTier::Scrap) => "SCRAP",
    }
}

/// `0.92` as `"92%"`.
#[must_use]
pub fn percent(fraction: Decimal) -> String {
    format!("{}%", as_percent(fraction))
}

/// Edge with an explicit sign, `0.31` as `"+31%"`.
#[must_use]
pub fn signed_percent(fraction: Decimal) -> String {
    let pct = as_percent(fraction);
    if pct.is_sign_negative() && !pct.is_zero() {
        format!("{pct}%")
    } else {
        format!("+{}%", pct.abs())
    }
}

/// One stat box: value, label, caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBox {
    pub value: String,
    pub label: &'static str,
    pub caption: &'static str,
}

/// The four dashboard stat boxes.
#[must_use]
pub fn stats_overview(aggregates: &FeedAggregates) -> Vec<StatBox> {
    vec![
        StatBox {
            value: aggregates.count.to_string(),
            label: "Daily Kill Count",
            caption: "Available predictions",
        },
        StatBox {
            value: aggregates.execution_count.to_string(),
            label: "Execution Level",
            caption: "Ready to slaughter",
        },
        StatBox {
            value: percent(aggregates.mean_edge),
            label: "Average Carnage",
            caption: "Mathematical edge",
        },
        StatBox {
            value: percent(aggregates.mean_confidence),
            label: "Avg Confidence",
            caption: "Butcher's certainty",
        },
    ]
}

/// The three compact stat boxes of the screen view.
#[must_use]
pub fn compact_stats(aggregates: &FeedAggregates) -> Vec<StatBox> {
    let mut boxes = stats_overview(aggregates);
    boxes.truncate(3);
    if let Some(carnage) = boxes.get_mut(2) {
        carnage.label = "Avg Carnage";
    }
    boxes
}

#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Pick")]
    pick: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Carnage")]
    edge: String,
}

impl From<&Prediction> for PredictionRow {
    fn from(p: &Prediction) -> Self {
        Self {
            id: p.id.to_string(),
            player: format!("{} {}", sport_icon(&p.sport), p.subject),
            team: format!("{} {}", p.team, p.sport.as_str().to_uppercase()),
            pick: p.pick_line(),
            confidence: percent(p.confidence),
            tier: p.confidence_tier.to_string(),
            edge: signed_percent(p.edge_fraction),
        }
    }
}

/// Table of the filtered predictions.
#[must_use]
pub fn prediction_table(predictions: &[Prediction]) -> String {
    Table::new(predictions.iter().map(PredictionRow::from))
        .with(Style::rounded())
        .to_string()
}

/// Compact multi-line card for the screen view.
#[must_use]
pub fn card(p: &Prediction) -> String {
    format!(
        "{icon} {subject}  {team} {sport}  [{confidence} {tier}]\n\
         {stat} {line}  Butcher's Call: {rec}\n\
         Mathematical Carnage {edge}  ({id})",
        icon = sport_icon(&p.sport),
        subject = p.subject,
        team = p.team,
        sport = p.sport.as_str().to_uppercase(),
        confidence = percent(p.confidence),
        tier = p.confidence_tier,
        stat = p.stat_category,
        line = p.line_value,
        rec = p.recommendation,
        edge = signed_percent(p.edge_fraction),
        id = p.id,
    )
}

/// Heading and body shown when nothing passes the filter.
pub const EMPTY_TITLE: &str = "🔪 No slaughter matches your criteria";
pub const EMPTY_HINT: &str = "Adjust your filters to find more butchery opportunities";

/// Footer line with the refresh time in US Central time.
///
/// Fallback data reads the same as live data here.
#[must_use]
pub fn last_updated(snapshot: &Snapshot) -> String {
    let status = match snapshot.origin() {
        SnapshotOrigin::Live | SnapshotOrigin::Fallback => "Live slaughter feed active",
        SnapshotOrigin::Pending => "Preparing the Slaughter...",
    };
    match snapshot.refreshed_at() {
        Some(at) => format!("Last updated: {} CT • {status}", clock(at)),
        None => status.to_string(),
    }
}

fn clock(at: DateTime<Utc>) -> String {
    at.with_timezone(&Chicago).format("%-I:%M:%S %p").to_string()
}

/// Describe the active filter for the filter panel.
#[must_use]
pub fn filter_summary(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
    vec![
        ("Sport", criteria.sport.to_string()),
        ("Tier", tier_label(criteria.tier).to_string()),
        ("Min edge", percent(criteria.min_edge)),
    ]
}

/// Filter bar for the screen view, active tier in brackets.
#[must_use]
pub fn tier_bar(active: TierFilter) -> String {
    let options = [
        TierFilter::All,
        TierFilter::Only(ConfidenceTier::Execution),
        TierFilter::Only(ConfidenceTier::Demolition),
        TierFilter::Only(ConfidenceTier::Meat),
    ];
    options
        .iter()
        .map(|&tier| {
            if tier == active {
                format!("[{}]", tier_label(tier))
            } else {
                format!(" {} ", tier_label(tier))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full analysis text for one prediction.
#[must_use]
pub fn analysis(p: &Prediction) -> Vec<(&'static str, String)> {
    vec![
        ("Player", format!("{} {}", sport_icon(&p.sport), p.subject)),
        ("Team", format!("{} ({})", p.team, p.sport.as_str().to_uppercase())),
        ("Pick", p.pick_line()),
        ("Confidence", format!("{} {}", percent(p.confidence), p.confidence_tier)),
        ("Carnage", signed_percent(p.edge_fraction)),
        (
            "Posted",
            p.posted_at
                .with_timezone(&Chicago)
                .format("%Y-%m-%d %-I:%M %p CT")
                .to_string(),
        ),
        ("Summary", p.summary.clone()),
    ]
}

/// Greedy word wrap at `width` columns. Words longer than `width` get a
/// line of their own.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// A prediction in its wire shape.
#[must_use]
pub fn prediction_json(p: &Prediction) -> Value {
    serde_json::to_value(PredictionDto::from(p)).unwrap_or(Value::Null)
}

/// One JSON object describing a snapshot and the view derived from it.
#[must_use]
pub fn snapshot_json(view: &FeedView) -> Value {
    json!({
        "origin": view.snapshot.origin(),
        "refreshed_at": view.snapshot.refreshed_at(),
        "filter": view.criteria,
        "aggregates": view.aggregates,
        "predictions": view.visible.iter().map(prediction_json).collect::<Vec<_>>(),
    })
}
