//! Wire types for the prediction feed endpoint.
//!
//! The endpoint returns a JSON array of objects in this shape:
//!
//! ```json
//! [{"prediction_id":"bb-001","player_name":"LeBron James","team":"LAL",
//!   "sport":"nba","stat_type":"Points","line_value":24.5,
//!   "recommendation":"OVER","confidence":0.92,"analysis":"...",
//!   "reasoning":"...","edge_percentage":0.31,
//!   "confidence_level":"EXECUTION","posted_at":"2025-10-31T13:20:00Z"}]
//! ```
//!
//! `posted_at` may be any ISO 8601 date-time. Values without an offset, and
//! bare dates, are taken as UTC.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{ConfidenceTier, Prediction, PredictionId, Recommendation, Sport};

/// One prediction as transmitted by the feed endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDto {
    pub prediction_id: String,
    pub player_name: String,
    pub team: String,
    pub sport: Sport,
    pub stat_type: String,
    pub line_value: Decimal,
    pub recommendation: Recommendation,
    pub confidence: Decimal,
    pub analysis: String,
    pub reasoning: String,
    pub edge_percentage: Decimal,
    pub confidence_level: ConfidenceTier,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub posted_at: DateTime<Utc>,
}

mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(raw.trim())
            .ok_or_else(|| de::Error::custom(format!("invalid ISO 8601 timestamp '{raw}'")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| naive.and_utc())
    }
}

impl From<PredictionDto> for Prediction {
    fn from(dto: PredictionDto) -> Self {
        Self {
            id: PredictionId::new(dto.prediction_id),
            subject: dto.player_name,
            team: dto.team,
            sport: dto.sport,
            stat_category: dto.stat_type,
            line_value: dto.line_value,
            recommendation: dto.recommendation,
            confidence: dto.confidence,
            edge_fraction: dto.edge_percentage,
            confidence_tier: dto.confidence_level,
            summary: dto.analysis,
            rationale: dto.reasoning,
            posted_at: dto.posted_at,
        }
    }
}

impl From<&Prediction> for PredictionDto {
    fn from(prediction: &Prediction) -> Self {
        Self {
            prediction_id: prediction.id.to_string(),
            player_name: prediction.subject.clone(),
            team: prediction.team.clone(),
            sport: prediction.sport.clone(),
            stat_type: prediction.stat_category.clone(),
            line_value: prediction.line_value,
            recommendation: prediction.recommendation,
            confidence: prediction.confidence,
            analysis: prediction.summary.clone(),
            reasoning: prediction.rationale.clone(),
            edge_percentage: prediction.edge_fraction,
            confidence_level: prediction.confidence_tier,
            posted_at: prediction.posted_at,
        }
    }
}
