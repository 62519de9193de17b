//! Response weighting by user context (age bracket, usage duration).

use batcuc_core::StarKey;
use serde::{Deserialize, Serialize};

use crate::mapper::MappedStar;
use crate::scoring::EnergyBreakdown;

/// Age bracket of the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AgeBracket {
    #[serde(rename = "UNDER_25")]
    Under25,
    #[default]
    #[serde(rename = "AGE_25_40")]
    Age25To40,
    #[serde(rename = "AGE_40_60")]
    Age40To60,
    #[serde(rename = "OVER_60")]
    Over60,
}

/// How long the number has been in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UsageDuration {
    #[default]
    #[serde(rename = "UNDER_1")]
    Under1Year,
    #[serde(rename = "FROM_1_TO_5")]
    From1To5Years,
    #[serde(rename = "OVER_5")]
    Over5Years,
}

/// Optional context supplied with an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserContext {
    pub age_bracket: AgeBracket,
    pub usage_duration: UsageDuration,
}

/// How strongly the number is expected to manifest for this user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseLevel {
    #[serde(rename = "VERY_HIGH")]
    VeryHigh,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "VERY_LOW")]
    VeryLow,
}

/// One star with its position- and response-adjusted energies.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightedStar {
    pub star: StarKey,
    pub original_pair: String,
    pub weighted_energy: f64,
    pub response_factor: f64,
    pub adjusted_energy: f64,
}

/// Age-weighted energy split across the life phases of the sequence.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightedEnergyLevel {
    pub start: f64,
    pub middle: f64,
    pub end: f64,
    pub total: f64,
}

/// Full context-weighted view of the analysis.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightedAnalysis {
    pub stars: Vec<WeightedStar>,
    pub energy: WeightedEnergyLevel,
    pub response_level: ResponseLevel,
}

const POSITION_START: f64 = 1.0;
const POSITION_MIDDLE: f64 = 1.2;
const POSITION_END: f64 = 1.5;

const USAGE_MULTIPLIERS: [(UsageDuration, f64); 3] = [
    (UsageDuration::Under1Year, 0.8),
    (UsageDuration::From1To5Years, 1.0),
    (UsageDuration::Over5Years, 1.2),
];

const AGE_WEIGHTS: [(AgeBracket, [f64; 3]); 4] = [
    (AgeBracket::Under25, [1.2, 1.0, 0.8]),
    (AgeBracket::Age25To40, [1.0, 1.1, 1.0]),
    (AgeBracket::Age40To60, [0.9, 1.0, 1.2]),
    (AgeBracket::Over60, [0.8, 1.0, 1.3]),
];

const STAR_RESPONSE_FACTORS: [(StarKey, f64); 8] = [
    (StarKey::SinhKhi, 1.1),
    (StarKey::ThienY, 1.2),
    (StarKey::DienNien, 1.0),
    (StarKey::PhucVi, 0.9),
    (StarKey::HoaHai, 1.0),
    (StarKey::LucSat, 0.95),
    (StarKey::NguQuy, 1.05),
    (StarKey::TuyetMenh, 1.15),
];

fn usage_multiplier(duration: UsageDuration) -> f64 {
    USAGE_MULTIPLIERS
        .iter()
        .find(|(d, _)| *d == duration)
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

fn age_weights(bracket: AgeBracket) -> [f64; 3] {
    AGE_WEIGHTS
        .iter()
        .find(|(b, _)| *b == bracket)
        .map(|(_, w)| *w)
        .unwrap_or([1.0, 1.0, 1.0])
}

fn response_factor(star: StarKey) -> f64 {
    STAR_RESPONSE_FACTORS
        .iter()
        .find(|(s, _)| *s == star)
        .map(|(_, f)| *f)
        .unwrap_or(1.0)
}

fn position_weight(index: usize) -> f64 {
    if index < 3 {
        POSITION_START
    } else if index >= 6 {
        POSITION_END
    } else {
        POSITION_MIDDLE
    }
}

/// Weights the mapped sequence by position, age bracket and usage duration.
pub fn apply_response_factors(
    sequence: &[MappedStar],
    energy: &EnergyBreakdown,
    context: &UserContext,
) -> WeightedAnalysis {
    let multiplier = usage_multiplier(context.usage_duration);
    let weights = age_weights(context.age_bracket);
    let net = energy.auspicious_sum - energy.inauspicious_sum;

    let stars: Vec<WeightedStar> = sequence
        .iter()
        .enumerate()
        .map(|(i, star)| {
            let weighted = star.energy_level * position_weight(i);
            let factor = response_factor(star.star);
            WeightedStar {
                star: star.star,
                original_pair: star.original_pair.clone(),
                weighted_energy: weighted,
                response_factor: factor,
                adjusted_energy: weighted * factor,
            }
        })
        .collect();

    let weighted_energy = WeightedEnergyLevel {
        start: net * weights[0],
        middle: net * weights[1],
        end: net * weights[2],
        total: energy.total * multiplier,
    };

    let capacity = (sequence.len().max(1) * 4) as f64;
    let ratio = weighted_energy.total.abs() / capacity;
    let response_level = if ratio >= 0.8 {
        ResponseLevel::VeryHigh
    } else if ratio >= 0.6 {
        ResponseLevel::High
    } else if ratio >= 0.4 {
        ResponseLevel::Moderate
    } else if ratio >= 0.2 {
        ResponseLevel::Low
    } else {
        ResponseLevel::VeryLow
    };

    WeightedAnalysis {
        stars,
        energy: weighted_energy,
        response_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::map_token;
    use crate::scoring::calculate_energy;

    fn sequence() -> Vec<MappedStar> {
        vec![
            map_token("14"),
            map_token("13"),
            map_token("19"),
            map_token("12"),
        ]
    }

    #[test]
    fn default_context_deserializes_from_empty_object() {
        let ctx: UserContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx.age_bracket, AgeBracket::Age25To40);
        assert_eq!(ctx.usage_duration, UsageDuration::Under1Year);
    }

    #[test]
    fn position_weights_split_start_middle_end() {
        assert_eq!(position_weight(0), POSITION_START);
        assert_eq!(position_weight(2), POSITION_START);
        assert_eq!(position_weight(3), POSITION_MIDDLE);
        assert_eq!(position_weight(6), POSITION_END);
    }

    #[test]
    fn usage_duration_scales_total() {
        let seq = sequence();
        let energy = calculate_energy(&seq, 0.0);

        let short = apply_response_factors(&seq, &energy, &UserContext::default());
        let long = apply_response_factors(
            &seq,
            &energy,
            &UserContext {
                usage_duration: UsageDuration::Over5Years,
                ..UserContext::default()
            },
        );
        assert!(long.energy.total > short.energy.total);
    }

    #[test]
    fn adjusted_energy_applies_star_factor() {
        let seq = sequence();
        let energy = calculate_energy(&seq, 0.0);
        let weighted = apply_response_factors(&seq, &energy, &UserContext::default());

        // "13" is Thiên Y with the highest response factor.
        assert_eq!(weighted.stars[1].response_factor, 1.2);
        assert_eq!(
            weighted.stars[1].adjusted_energy,
            weighted.stars[1].weighted_energy * 1.2
        );
    }

    #[test]
    fn response_level_tracks_energy_magnitude() {
        let seq = vec![map_token("14"), map_token("41")];
        let energy = calculate_energy(&seq, 0.0);
        // total 8 over capacity 8 with the 0.8 multiplier gives ratio 0.8.
        let weighted = apply_response_factors(&seq, &energy, &UserContext::default());
        assert_eq!(weighted.response_level, ResponseLevel::VeryHigh);
    }
}
