//! Energy aggregation, balance classification and the composite quality score.

use batcuc_core::combinations::TripletKind;
use batcuc_core::{Balance, StarNature};
use serde::Serialize;

use crate::combinations::{DangerousCombination, KeyCombination};
use crate::mapper::MappedStar;

/// Summed energies over the mapped sequence.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBreakdown {
    pub total: f64,
    pub auspicious_sum: f64,
    pub inauspicious_sum: f64,
    pub balance_class: Balance,
}

/// Star counts by nature.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
pub struct StarCounts {
    #[serde(rename = "CAT")]
    pub cat: usize,
    #[serde(rename = "HUNG")]
    pub hung: usize,
    #[serde(rename = "UNKNOWN")]
    pub unknown: usize,
}

/// Sums auspicious and inauspicious energies. Only stars whose nature is
/// exactly Cát or Hung contribute; transformed natures count as neither.
/// The five-digit modifier is added to both the auspicious sum and the total.
pub fn calculate_energy(sequence: &[MappedStar], modifier: f64) -> EnergyBreakdown {
    let mut cat = 0.0;
    let mut hung = 0.0;

    for star in sequence {
        match star.nature {
            StarNature::Cat => cat += star.energy_level,
            StarNature::Hung => hung += star.energy_level,
            _ => {}
        }
    }

    let counts = count_star_types(sequence);
    let balance_class = classify_balance(&counts);

    EnergyBreakdown {
        total: cat - hung + modifier,
        auspicious_sum: cat + modifier,
        inauspicious_sum: hung,
        balance_class,
    }
}

/// Counts stars by nature class.
pub fn count_star_types(sequence: &[MappedStar]) -> StarCounts {
    let mut counts = StarCounts::default();
    for star in sequence {
        if star.nature.is_auspicious() {
            counts.cat += 1;
        } else if star.nature.is_inauspicious() {
            counts.hung += 1;
        } else {
            counts.unknown += 1;
        }
    }
    counts
}

/// Classifies the cat/hung ratio. More than 70% of typed stars on either
/// side tips the balance.
pub fn classify_balance(counts: &StarCounts) -> Balance {
    let typed = counts.cat + counts.hung;
    if typed == 0 {
        return Balance::Unknown;
    }

    let cat_ratio = counts.cat as f64 / typed as f64;
    if cat_ratio > 0.7 {
        Balance::CatHeavy
    } else if cat_ratio < 0.3 {
        Balance::HungHeavy
    } else {
        Balance::Balanced
    }
}

/// Composite 0-100 quality score from energy, balance, named combinations
/// and special digit counts.
pub fn quality_score(
    energy: &EnergyBreakdown,
    key_combinations: &[KeyCombination],
    dangerous: &[DangerousCombination],
    zero_count: usize,
    five_count: usize,
) -> u8 {
    let mut score = 50.0 + energy.total * 5.0;

    score += match energy.balance_class {
        Balance::CatHeavy => 20.0,
        Balance::HungHeavy => -20.0,
        _ => 0.0,
    };

    let favorable = key_combinations
        .iter()
        .filter(|c| matches!(c.kind, TripletKind::Wealth | TripletKind::Career))
        .count();
    score += favorable as f64 * 5.0;
    score -= dangerous.len() as f64 * 8.0;

    score += five_count as f64 * 3.0;
    score -= zero_count as f64 * 2.0;

    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::map_token;

    #[test]
    fn energy_only_counts_pure_natures() {
        // "14" Cát 4, "12" Hung 4, "140" Cát hóa hung contributes nothing.
        let sequence = vec![map_token("14"), map_token("12"), map_token("140")];
        let energy = calculate_energy(&sequence, 0.0);
        assert_eq!(energy.auspicious_sum, 4.0);
        assert_eq!(energy.inauspicious_sum, 4.0);
        assert_eq!(energy.total, 0.0);
    }

    #[test]
    fn modifier_raises_both_total_and_auspicious() {
        let sequence = vec![map_token("14")];
        let energy = calculate_energy(&sequence, 2.0);
        assert_eq!(energy.auspicious_sum, 6.0);
        assert_eq!(energy.total, 6.0);
        assert_eq!(energy.inauspicious_sum, 0.0);
    }

    #[test]
    fn balance_classification_thresholds() {
        assert_eq!(
            classify_balance(&StarCounts { cat: 3, hung: 1, unknown: 0 }),
            Balance::CatHeavy
        );
        assert_eq!(
            classify_balance(&StarCounts { cat: 1, hung: 3, unknown: 0 }),
            Balance::HungHeavy
        );
        assert_eq!(
            classify_balance(&StarCounts { cat: 2, hung: 2, unknown: 0 }),
            Balance::Balanced
        );
        assert_eq!(
            classify_balance(&StarCounts { cat: 0, hung: 0, unknown: 4 }),
            Balance::Unknown
        );
    }

    #[test]
    fn score_clamps_to_bounds() {
        let high = EnergyBreakdown {
            total: 30.0,
            auspicious_sum: 30.0,
            inauspicious_sum: 0.0,
            balance_class: Balance::CatHeavy,
        };
        assert_eq!(quality_score(&high, &[], &[], 0, 0), 100);

        let low = EnergyBreakdown {
            total: -30.0,
            auspicious_sum: 0.0,
            inauspicious_sum: 30.0,
            balance_class: Balance::HungHeavy,
        };
        assert_eq!(quality_score(&low, &[], &[], 5, 0), 0);
    }

    #[test]
    fn score_rewards_fives_and_penalizes_zeros() {
        let neutral = EnergyBreakdown {
            total: 0.0,
            auspicious_sum: 0.0,
            inauspicious_sum: 0.0,
            balance_class: Balance::Balanced,
        };
        assert_eq!(quality_score(&neutral, &[], &[], 0, 0), 50);
        assert_eq!(quality_score(&neutral, &[], &[], 1, 2), 54);
    }
}
