//! The prediction record and its enumerated fields.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::PredictionId;

/// Sport label, normalized to lowercase (`"nba"`, `"nfl"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sport(String);

impl Sport {
    /// Create a sport label, trimming and lowercasing the input.
    pub fn try_new(label: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = label.as_ref().trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::EmptySport);
        }
        Ok(Self(normalized))
    }

    /// Built-in label known to be non-empty.
    pub(crate) fn from_static(label: &'static str) -> Self {
        Self(label.to_ascii_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for Sport {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Sport> for String {
    fn from(sport: Sport) -> Self {
        sport.0
    }
}

/// Which side of the line the pick takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Over,
    Under,
}

impl Recommendation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Over => "OVER",
            Self::Under => "UNDER",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recommendation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OVER" => Ok(Self::Over),
            "UNDER" => Ok(Self::Under),
            _ => Err(DomainError::UnknownRecommendation {
                value: s.to_string(),
            }),
        }
    }
}

/// Advisory confidence category.
///
/// Loosely correlated with the numeric confidence score but never checked
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceTier {
    Execution,
    Demolition,
    Meat,
    Scrap,
}

impl ConfidenceTier {
    /// All tiers, strongest first.
    pub const ALL: [Self; 4] = [Self::Execution, Self::Demolition, Self::Meat, Self::Scrap];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Execution => "EXECUTION",
            Self::Demolition => "DEMOLITION",
            Self::Meat => "MEAT",
            Self::Scrap => "SCRAP",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceTier {
    type Err = DomainError;

    /// Case-insensitive: `"execution"`, `"EXECUTION"` and `"Execution"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EXECUTION" => Ok(Self::Execution),
            "DEMOLITION" => Ok(Self::Demolition),
            "MEAT" => Ok(Self::Meat),
            "SCRAP" => Ok(Self::Scrap),
            _ => Err(DomainError::UnknownTier {
                value: s.to_string(),
            }),
        }
    }
}

/// A single player prop pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: PredictionId,
    /// Player name.
    pub subject: String,
    pub team: String,
    pub sport: Sport,
    /// Stat label, e.g. "Points" or "Rushing Yards".
    pub stat_category: String,
    pub line_value: Decimal,
    pub recommendation: Recommendation,
    /// Fraction in [0, 1].
    pub confidence: Decimal,
    /// Signed modeled advantage.
    pub edge_fraction: Decimal,
    pub confidence_tier: ConfidenceTier,
    pub summary: String,
    pub rationale: String,
    pub posted_at: DateTime<Utc>,
}

impl Prediction {
    /// `"Points OVER 24.5"` style one-line description of the pick.
    #[must_use]
    pub fn pick_line(&self) -> String {
        format!(
            "{} {} {}",
            self.stat_category, self.recommendation, self.line_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_is_normalized_to_lowercase() {
        let sport = Sport::try_new("  NBA ").unwrap();
        assert_eq!(sport.as_str(), "nba");
        assert_eq!(sport, "nba".parse().unwrap());
    }

    #[test]
    fn empty_sport_is_rejected() {
        assert_eq!(Sport::try_new("   "), Err(DomainError::EmptySport));
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("execution".parse(), Ok(ConfidenceTier::Execution));
        assert_eq!("Demolition".parse(), Ok(ConfidenceTier::Demolition));
        assert_eq!("MEAT".parse(), Ok(ConfidenceTier::Meat));
        assert_eq!(" scrap ".parse(), Ok(ConfidenceTier::Scrap));
        assert!("carnage".parse::<ConfidenceTier>().is_err());
    }

    #[test]
    fn tier_serializes_upper_case() {
        let json = serde_json::to_string(&ConfidenceTier::Demolition).unwrap();
        assert_eq!(json, "\"DEMOLITION\"");
        let back: ConfidenceTier = serde_json::from_str("\"SCRAP\"").unwrap();
        assert_eq!(back, ConfidenceTier::Scrap);
    }

    #[test]
    fn recommendation_round_trips_wire_form() {
        let over: Recommendation = serde_json::from_str("\"OVER\"").unwrap();
        assert_eq!(over, Recommendation::Over);
        assert!(serde_json::from_str::<Recommendation>("\"SIDEWAYS\"").is_err());
        assert_eq!("under".parse(), Ok(Recommendation::Under));
    }
}
