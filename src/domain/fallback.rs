//! Bundled prediction set shown when the feed cannot be fetched.
//!
//! Also served by the sample source for offline demos.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use super::id::PredictionId;
use super::prediction::{ConfidenceTier, Prediction, Recommendation, Sport};

fn posted(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap_or_default()
}

fn sport(label: &'static str) -> Sport {
    Sport::from_static(label)
}

/// The five butcher's selections, in display order.
#[must_use]
pub fn butcher_selections() -> Vec<Prediction> {
    vec![
        Prediction {
            id: PredictionId::new("bb-001"),
            subject: "LeBron James".into(),
            team: "LAL".into(),
            sport: sport("nba"),
            stat_category: "Points".into(),
            line_value: dec!(24.5),
            recommendation: Recommendation::Over,
            confidence: dec!(0.92),
            edge_fraction: dec!(0.31),
            confidence_tier: ConfidenceTier::Execution,
            summary: "Advanced mathematical slaughter based on comprehensive analysis".into(),
            rationale: "LeBron James is operating at EXECUTION LEVEL dominance. Home court advantage provides +3.1 PPG average that becomes lethal in playoff atmosphere. Opponent defense ranks 27th in points allowed to small forwards (28.4 PPG), creating a feast opportunity. Lakers offense channels through LeBron with +4.2% usage rate increase in high-stakes games. Recent form shows 27.8 PPG over last 5 games with 31.2% usage rate. Interior defense surrendering 1.31 points per possession creates optimal scoring conditions. Environmental factors: crowd energy at 95%, referee whistle bias toward veteran players, and LeBron's historical performance in must-win scenarios.".into(),
            posted_at: posted("2025-10-31T13:20:00Z"),
        },
        Prediction {
            id: PredictionId::new("bb-002"),
            subject: "Josh Allen".into(),
            team: "BUF".into(),
            sport: sport("nfl"),
            stat_category: "Passing Yards".into(),
            line_value: dec!(249.5),
            recommendation: Recommendation::Under,
            confidence: dec!(0.82),
            edge_fraction: dec!(0.18),
            confidence_tier: ConfidenceTier::Demolition,
            summary: "DEMOLITION LEVEL prediction based on historical road performance".into(),
            rationale: "Josh Allen's road passer rating undergoes MASSACRE against elite defenses. Road performance drops to 84.7 QBR (vs 105.1 at home), representing a 20.4-point decline. Opponent possesses top-5 defense allowing only 6.2 YPA to opposing quarterbacks. Weather warfare intensifies with 18+ mph winds forecasted, historically limiting aerial production. Bills lean heavily on ground game in windy conditions, averaging 42 carries and 198 rushing yards in games with 15+ mph winds. Allen's career average in similar weather: 238 yards. Defensive scheme: press coverage on receivers, aggressive blitz packages, and clock control strategy.".into(),
            posted_at: posted("2025-10-31T14:45:00Z"),
        },
        Prediction {
            id: PredictionId::new("bb-003"),
            subject: "Victor Wembanyama".into(),
            team: "SAS".into(),
            sport: sport("nba"),
            stat_category: "Blocks".into(),
            line_value: dec!(3.5),
            recommendation: Recommendation::Over,
            confidence: dec!(0.88),
            edge_fraction: dec!(0.24),
            confidence_tier: ConfidenceTier::Demolition,
            summary: "DEMOLITION LEVEL prediction based on matchup and recent form".into(),
            rationale: "Wembanyama's block rate SUFFOCATES opposing offenses at home. 3.8 blocks per game average in San Antonio with 6.2% block rate (highest in NBA). Opponent field goal attempts in paint: 48.2 per game, creating maximum rejection opportunities. Recent 5-game average: 4.2 BPG with 7.8% block rate. Home court crowd energy amplifies defensive intensity (+15% block rate). Matchup factor: opponent ranks 29th in interior scoring efficiency (1.18 PPP), forcing more paint attempts. Environmental advantages: arena acoustics, familiar rim conditions, and referee consistency with block calls.".into(),
            posted_at: posted("2025-10-31T15:10:00Z"),
        },
        Prediction {
            id: PredictionId::new("bb-004"),
            subject: "Christian McCaffrey".into(),
            team: "SF".into(),
            sport: sport("nfl"),
            stat_category: "Rushing Yards".into(),
            line_value: dec!(85.5),
            recommendation: Recommendation::Over,
            confidence: dec!(0.79),
            edge_fraction: dec!(0.15),
            confidence_tier: ConfidenceTier::Meat,
            summary: "MEAT LEVEL prediction with solid underlying factors".into(),
            rationale: "McCaffrey's ground game DOMINATES against soft defensive fronts. 6.2 YPC average at home with 89.3 rushing yards per game this season. Opponent allows 4.8 YPC to running backs and ranks 25th in run defense efficiency. 49ers offensive line creating 2.3 yards before contact on average. Game script favors CMC with 78% chance of positive game flow (leading by 7+ points). Weather conditions optimal for ground and pound (no precipitation, light winds). Backup quarterback situation increases reliance on running game.".into(),
            posted_at: posted("2025-10-31T16:30:00Z"),
        },
        Prediction {
            id: PredictionId::new("bb-005"),
            subject: "Cade Cunningham".into(),
            team: "DET".into(),
            sport: sport("nba"),
            stat_category: "Assists".into(),
            line_value: dec!(7.5),
            recommendation: Recommendation::Under,
            confidence: dec!(0.74),
            edge_fraction: dec!(0.12),
            confidence_tier: ConfidenceTier::Meat,
            summary: "MEAT LEVEL prediction based on assist conversion rates".into(),
            rationale: "Cunningham's assist production STRUGGLES against elite defensive teams. 6.8 assists per game average with declining trend over last 10 games (6.1 APG). Opponent ranks top-10 in assist defense, averaging 4.2 deflections per game and 8.1 steals per game. Pistons shot selection: only 18.3% of shots assisted (bottom-5 NBA), limiting assist opportunities. Recent form shows assist drought: 4.7 APG over last 5 games. Matchup disadvantages: opponent's switching defense disrupts pick-and-roll chemistry.".into(),
            posted_at: posted("2025-10-31T17:45:00Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fallback_set_has_five_unique_records_in_order() {
        let set = butcher_selections();
        let ids: Vec<&str> = set.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["bb-001", "bb-002", "bb-003", "bb-004", "bb-005"]);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn fallback_timestamps_parse() {
        let set = butcher_selections();
        assert_eq!(set[0].posted_at.to_rfc3339(), "2025-10-31T13:20:00+00:00");
        assert!(set.windows(2).all(|w| w[0].posted_at < w[1].posted_at));
    }
}
