//! Token-to-star mapping.
//!
//! Each segmented token resolves to one of the eight stars, a zero variant of
//! one, or `UNKNOWN`. Literal `5`s always add one energy unit each; zeros
//! either select a variant reading or add energy beyond the first.

use batcuc_core::combinations;
use batcuc_core::stars;
use batcuc_core::{EnergyLevelClass, SpecialAttribute, StarKey, StarNature};
use serde::Serialize;

/// One mapped token of the star sequence.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MappedStar {
    pub original_pair: String,
    pub mapped_pair: String,
    pub star: StarKey,
    pub name: String,
    pub nature: StarNature,
    pub level: EnergyLevelClass,
    pub energy_level: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_energy_level: Option<f64>,
    pub special_attribute: SpecialAttribute,
    pub special_effect: String,
    pub detailed_description: String,
    pub description: String,
    pub is_zero_variant: bool,
    pub zero_count: usize,
    pub five_count: usize,
}

/// Star mapping of a whole digit string, with sequence-level special-digit
/// aggregates.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StarMapping {
    pub pairs: Vec<String>,
    pub mapped: Vec<MappedStar>,
    pub special_attribute: SpecialAttribute,
    pub special_effect_description: String,
    pub zero_count: usize,
    pub five_count: usize,
    pub energy_modifier: f64,
}

/// Base star info for a plain 2-digit pair, reversal aware. Used by the
/// last-three and special-digit scans where variant handling does not apply.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PairStarInfo {
    pub pair: String,
    pub star: StarKey,
    pub name: String,
    pub description: String,
    pub nature: StarNature,
    pub energy_level: f64,
}

/// Maps every token of `digits` (the full cleaned input) to a star.
pub fn map_sequence(digits: &str) -> StarMapping {
    let pairs = crate::segment::segment_phone(digits);

    let zero_count = digits.matches('0').count();
    let five_count = digits.matches('5').count();

    let special_attribute = SpecialAttribute::from_counts(zero_count, five_count);
    let special_effect_description = match special_attribute {
        SpecialAttribute::Zero => "Số 0 làm giảm năng lượng của các sao".to_owned(),
        SpecialAttribute::Five => "Số 5 tăng cường năng lượng của các sao".to_owned(),
        SpecialAttribute::ZeroFive => {
            "Số 0 làm giảm năng lượng của các sao, Số 5 tăng cường năng lượng".to_owned()
        }
        SpecialAttribute::None => String::new(),
    };
    let energy_modifier = five_count as f64;

    let mapped = pairs.iter().map(|token| map_token(token)).collect();

    StarMapping {
        pairs,
        mapped,
        special_attribute,
        special_effect_description,
        zero_count,
        five_count,
        energy_modifier,
    }
}

/// Maps a single token.
pub fn map_token(token: &str) -> MappedStar {
    let zeroes = token.matches('0').count();
    let fives = token.matches('5').count();
    let clean: String = token.chars().filter(|&c| c != '0' && c != '5').collect();

    if zeroes == 1 {
        // An exact variant code carries its own nature and reading.
        if let Some((variant, base_energy)) = stars::lookup_variant_code(token) {
            let energy = base_energy + fives as f64;
            return MappedStar {
                original_pair: token.to_owned(),
                mapped_pair: clean,
                star: variant.base,
                name: variant.name.to_owned(),
                nature: variant.nature,
                level: EnergyLevelClass::from_energy(energy),
                energy_level: energy,
                base_energy_level: None,
                special_attribute: if fives > 0 {
                    SpecialAttribute::ZeroFive
                } else {
                    SpecialAttribute::Zero
                },
                special_effect: variant.description.to_owned(),
                detailed_description: variant.detailed_description.to_owned(),
                description: variant.description.to_owned(),
                is_zero_variant: true,
                zero_count: zeroes,
                five_count: fives,
            };
        }
    } else if zeroes > 1 {
        // With several zeros the token matches a variant through its
        // zero-stripped form; extra zeros beyond the first each add energy.
        let dezeroed: String = token.chars().filter(|&c| c != '0').collect();
        for variant in stars::ZERO_VARIANTS.iter() {
            let gate = variant.codes.iter().any(|&(code, _)| {
                let code_dezeroed: String = code.chars().filter(|&c| c != '0').collect();
                code_dezeroed == dezeroed
            });
            if !gate {
                continue;
            }

            let base_energy = variant
                .codes
                .iter()
                .find(|&&(code, _)| {
                    let code_dezeroed: String =
                        code.chars().filter(|&c| c != '0').collect();
                    code_dezeroed == clean
                })
                .map(|&(_, energy)| energy)
                .unwrap_or(0.0);

            let energy = base_energy + (zeroes - 1) as f64 + fives as f64;
            return MappedStar {
                original_pair: token.to_owned(),
                mapped_pair: clean,
                star: variant.base,
                name: variant.name.to_owned(),
                nature: variant.nature,
                level: EnergyLevelClass::from_energy(energy),
                energy_level: energy,
                base_energy_level: None,
                special_attribute: if fives > 0 {
                    SpecialAttribute::ZeroFive
                } else {
                    SpecialAttribute::Zero
                },
                special_effect: format!(
                    "{}, mỗi số 0 thêm tăng năng lượng 1 đơn vị",
                    variant.description
                ),
                detailed_description: variant.detailed_description.to_owned(),
                description: variant.description.to_owned(),
                is_zero_variant: true,
                zero_count: zeroes,
                five_count: fives,
            };
        }
    }

    if clean.len() == 2 {
        if let Some((star, base_energy)) = stars::lookup_pair(&clean) {
            let mut energy = base_energy;

            if zeroes > 0 {
                if stars::zero_variant(star.key).is_some() {
                    if zeroes > 1 {
                        energy += (zeroes - 1) as f64;
                    }
                } else {
                    energy *= 0.7;
                }
            }
            energy += fives as f64;

            let mut special_effect = String::new();
            if zeroes > 0 {
                special_effect = if zeroes == 1 {
                    "Số 0 làm biến đổi đặc tính".to_owned()
                } else {
                    format!("Có {} số 0, mỗi số 0 thêm tăng năng lượng 1 đơn vị", zeroes)
                };
            }
            if fives > 0 {
                special_effect = if special_effect.is_empty() {
                    "Mỗi số 5 tăng năng lượng 1 đơn vị".to_owned()
                } else {
                    format!("{}, mỗi số 5 tăng năng lượng 1 đơn vị", special_effect)
                };
            }

            return MappedStar {
                original_pair: token.to_owned(),
                mapped_pair: clean,
                star: star.key,
                name: star.name.to_owned(),
                nature: star.nature,
                level: EnergyLevelClass::from_energy(energy),
                energy_level: energy,
                base_energy_level: Some(base_energy),
                special_attribute: SpecialAttribute::from_counts(zeroes, fives),
                special_effect,
                detailed_description: star.detailed_description.to_owned(),
                description: star.description.to_owned(),
                is_zero_variant: zeroes > 0,
                zero_count: zeroes,
                five_count: fives,
            };
        }
    }

    MappedStar {
        original_pair: token.to_owned(),
        mapped_pair: clean,
        star: StarKey::Unknown,
        name: "Không xác định".to_owned(),
        nature: StarNature::Unknown,
        level: EnergyLevelClass::Unknown,
        energy_level: 0.0,
        base_energy_level: None,
        special_attribute: SpecialAttribute::from_counts(zeroes, fives),
        special_effect: String::new(),
        detailed_description: String::new(),
        description: String::new(),
        is_zero_variant: false,
        zero_count: zeroes,
        five_count: fives,
    }
}

/// Reversal-aware base star lookup for a plain pair.
pub fn analyze_pair(pair: &str) -> PairStarInfo {
    let reversed: String = pair.chars().rev().collect();
    let hit = stars::lookup_pair(pair).or_else(|| stars::lookup_pair(&reversed));

    match hit {
        Some((star, energy)) => PairStarInfo {
            pair: pair.to_owned(),
            star: star.key,
            name: star.name.to_owned(),
            description: star.description.to_owned(),
            nature: star.nature,
            energy_level: energy,
        },
        None => PairStarInfo {
            pair: pair.to_owned(),
            star: StarKey::Unknown,
            name: "Không xác định".to_owned(),
            description: String::new(),
            nature: StarNature::Unknown,
            energy_level: 0.0,
        },
    }
}

/// Synthesized pair interpretation for stars without a catalog rule.
pub fn interpret_star_combination(a: StarKey, b: StarKey) -> String {
    if let Some(rule) = combinations::pair_rule(a, b) {
        return rule.description.to_owned();
    }

    let name_a = stars::star(a).map(|s| s.name).unwrap_or("Không xác định");
    let name_b = stars::star(b).map(|s| s.name).unwrap_or("Không xác định");
    let nature_a = stars::star(a).map(|s| s.nature).unwrap_or(StarNature::Unknown);
    let nature_b = stars::star(b).map(|s| s.nature).unwrap_or(StarNature::Unknown);

    if nature_a == StarNature::Cat && nature_b == StarNature::Cat {
        format!(
            "Tổ hợp hai sao tốt: {} và {} tạo ra năng lượng tích cực và bổ trợ cho nhau.",
            name_a, name_b
        )
    } else if nature_a == StarNature::Hung && nature_b == StarNature::Hung {
        format!(
            "Tổ hợp hai sao xấu: {} và {} tạo ra năng lượng tiêu cực mạnh, cần cẩn trọng.",
            name_a, name_b
        )
    } else {
        format!(
            "Tổ hợp cân bằng giữa sao tốt và sao xấu: {} và {} tạo ra sự cân bằng giữa thuận lợi và khó khăn.",
            name_a, name_b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_pair_maps_to_base_star() {
        let star = map_token("14");
        assert_eq!(star.star, StarKey::SinhKhi);
        assert_eq!(star.energy_level, 4.0);
        assert_eq!(star.base_energy_level, Some(4.0));
        assert_eq!(star.nature, StarNature::Cat);
        assert_eq!(star.level, EnergyLevelClass::VeryHigh);
        assert!(!star.is_zero_variant);
    }

    #[test]
    fn single_zero_matching_variant_code_takes_variant_reading() {
        let star = map_token("140");
        assert_eq!(star.star, StarKey::SinhKhi);
        assert_eq!(star.energy_level, 4.5);
        assert_eq!(star.nature, StarNature::CatHoaHung);
        assert!(star.is_zero_variant);
        assert_eq!(star.special_attribute, SpecialAttribute::Zero);
    }

    #[test]
    fn zero_plus_five_token_holds_base_energy_and_five_bonus() {
        // "4250": base Ngu Quy (42) energy 1, zero held by variant, +1 for 5.
        let star = map_token("4250");
        assert_eq!(star.star, StarKey::NguQuy);
        assert_eq!(star.mapped_pair, "42");
        assert_eq!(star.energy_level, 2.0);
        assert!(star.is_zero_variant);
        assert_eq!(star.special_attribute, SpecialAttribute::ZeroFive);
    }

    #[test]
    fn double_zero_variant_adds_energy_beyond_first() {
        // "1400" de-zeroes to "14", variant code "140" energy 4.5, +1 extra 0.
        let star = map_token("1400");
        assert_eq!(star.star, StarKey::SinhKhi);
        assert_eq!(star.energy_level, 5.5);
        assert!(star.is_zero_variant);
    }

    #[test]
    fn fives_in_multi_zero_token_fall_back_to_the_base_pair() {
        // The de-zeroed form "145" keeps its 5, so no variant code matches;
        // the clean pair "14" then maps through the base star with the extra
        // zero and the five each adding one unit.
        let star = map_token("14050");
        assert_eq!(star.star, StarKey::SinhKhi);
        assert_eq!(star.energy_level, 6.0);
        assert_eq!(star.base_energy_level, Some(4.0));
    }

    #[test]
    fn unmapped_token_is_unknown_not_fatal() {
        let star = map_token("15");
        assert_eq!(star.star, StarKey::Unknown);
        assert_eq!(star.nature, StarNature::Unknown);
        assert_eq!(star.energy_level, 0.0);
    }

    #[test]
    fn sequence_aggregates_count_full_input() {
        let mapping = map_sequence("0912345678");
        assert_eq!(mapping.pairs.len(), 7);
        assert_eq!(mapping.zero_count, 1);
        assert_eq!(mapping.five_count, 1);
        assert_eq!(mapping.energy_modifier, 1.0);
        assert_eq!(mapping.special_attribute, SpecialAttribute::ZeroFive);
    }

    #[test]
    fn analyze_pair_is_reversal_aware() {
        let info = analyze_pair("41");
        assert_eq!(info.star, StarKey::SinhKhi);
        assert_eq!(info.energy_level, 4.0);
    }
}
