//! Filter criteria for the prediction view.
//!
//! A record passes when all three hold:
//!
//! - the sport filter is `All` or equals the record's sport,
//! - the tier filter is `All` or equals the record's confidence tier,
//! - the record's edge fraction is at least `min_edge`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::prediction::{ConfidenceTier, Prediction, Sport};

const ALL: &str = "all";

/// Sport selection: every sport, or exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SportFilter {
    #[default]
    All,
    Only(Sport),
}

impl SportFilter {
    #[must_use]
    pub fn matches(&self, sport: &Sport) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == sport,
        }
    }
}

impl FromStr for SportFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        Ok(Self::Only(Sport::try_new(s)?))
    }
}

impl TryFrom<String> for SportFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SportFilter> for String {
    fn from(filter: SportFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for SportFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(sport) => write!(f, "{sport}"),
        }
    }
}

/// Confidence tier selection: every tier, or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TierFilter {
    #[default]
    All,
    Only(ConfidenceTier),
}

impl TierFilter {
    #[must_use]
    pub fn matches(self, tier: ConfidenceTier) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == tier,
        }
    }
}

impl FromStr for TierFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        Ok(Self::Only(s.parse()?))
    }
}

impl TryFrom<String> for TierFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TierFilter> for String {
    fn from(filter: TierFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for TierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(tier) => write!(f, "{tier}"),
        }
    }
}

/// Active filter for the prediction view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub sport: SportFilter,
    #[serde(default, alias = "confidence_tier")]
    pub tier: TierFilter,
    #[serde(default)]
    pub min_edge: Decimal,
}

impl FilterCriteria {
    #[must_use]
    pub fn new(sport: SportFilter, tier: TierFilter, min_edge: Decimal) -> Self {
        Self {
            sport,
            tier,
            min_edge,
        }
    }

    #[must_use]
    pub fn with_sport(mut self, sport: SportFilter) -> Self {
        self.sport = sport;
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: TierFilter) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn with_min_edge(mut self, min_edge: Decimal) -> Self {
        self.min_edge = min_edge;
        self
    }

    /// Three-part predicate: sport, tier, and minimum edge.
    #[must_use]
    pub fn matches(&self, prediction: &Prediction) -> bool {
        self.sport.matches(&prediction.sport)
            && self.tier.matches(prediction.confidence_tier)
            && prediction.edge_fraction >= self.min_edge
    }

    /// Order-preserving subsequence of `predictions` that passes the filter.
    #[must_use]
    pub fn apply(&self, predictions: &[Prediction]) -> Vec<Prediction> {
        predictions
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sport={} tier={} min_edge={}",
            self.sport, self.tier, self.min_edge
        )
    }
}

/// Parse a user-supplied minimum edge. Accepts `0.2` or a percentage `20%`.
pub fn parse_min_edge(input: &str) -> Result<Decimal, DomainError> {
    let trimmed = input.trim();
    let invalid = || DomainError::InvalidMinEdge {
        value: input.to_string(),
    };
    match trimmed.strip_suffix('%') {
        Some(pct) => pct
            .trim()
            .parse::<Decimal>()
            .map(|v| v / Decimal::ONE_HUNDRED)
            .map_err(|_| invalid()),
        None => trimmed.parse::<Decimal>().map_err(|_| invalid()),
    }
}
