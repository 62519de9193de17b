//! Combination scans over the star sequence and the raw digit string.

use batcuc_core::combinations::{self, TripletKind};
use batcuc_core::stars;
use batcuc_core::{StarKey, StarNature};
use serde::Serialize;

use crate::mapper::{self, MappedStar, PairStarInfo};

/// One endpoint of an adjacent star combination.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StarRef {
    pub name: String,
    pub nature: StarNature,
    pub original_pair: String,
    pub energy_level: f64,
}

/// Interpretation of two adjacent stars in the mapped sequence.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdjacentCombination {
    pub first_star: StarRef,
    pub second_star: StarRef,
    pub key: String,
    pub description: String,
    pub detailed_description: Vec<String>,
    pub total_energy: f64,
    pub is_positive: bool,
    pub is_negative: bool,
    pub position: String,
    pub is_last_pair: bool,
}

/// A named triplet pattern found in the digit string.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyCombination {
    #[serde(rename = "type")]
    pub kind: TripletKind,
    pub code: String,
    pub value: String,
    pub position: String,
    pub description: String,
    pub detailed_description: String,
}

/// A structurally dangerous pattern found in the digit string.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DangerousCombination {
    pub combination: String,
    pub position: String,
    pub description: String,
    pub detailed_description: String,
}

/// The special reading of the literal trailing triplet, if any.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecialLastThree {
    pub is_special: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub detailed_description: Vec<String>,
}

/// The star combination of the two pairs formed by the trailing triplet.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StarCombinationInfo {
    pub key: String,
    pub name: String,
    pub description: String,
    pub detailed_description: Vec<String>,
    #[serde(skip)]
    pub from_catalog: bool,
}

/// A trailing-triplet pair and its base star reading.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PairAnalysis {
    pub pair: String,
    pub star_info: PairStarInfo,
}

/// Full reading of the trailing three digits.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LastThreeAnalysis {
    pub last_three_digits: String,
    pub first_pair: PairAnalysis,
    pub second_pair: PairAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_combination: Option<SpecialCombinationRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_combination: Option<StarCombinationInfo>,
    pub has_special_meaning: bool,
}

/// Reference to a specific combination matched by the trailing triplet.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecialCombinationRef {
    pub key: String,
    pub description: String,
    pub detailed_description: Vec<String>,
}

/// Effect of a special digit on a 3-digit window.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DigitEffect {
    pub position: String,
    pub digits: String,
    pub star: StarKey,
    pub description: String,
    pub effect: &'static str,
}

/// Zero and five effect scans over the whole digit string.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpecialDigitEffects {
    pub zero_effects: Vec<DigitEffect>,
    pub five_effects: Vec<DigitEffect>,
}

/// Interprets a pair of star keys, preferring the catalog rule and falling
/// back to a synthesized reading from the two natures.
pub fn star_combination(a: StarKey, b: StarKey) -> Option<StarCombinationInfo> {
    if a == StarKey::Unknown || b == StarKey::Unknown {
        return None;
    }

    let (first, second) = StarKey::canonical_pair(a, b);
    let key = format!("{}_{}", first, second);
    let name = format!(
        "{} + {}",
        stars::star(a).map(|s| s.name).unwrap_or_default(),
        stars::star(b).map(|s| s.name).unwrap_or_default()
    );

    if let Some(rule) = combinations::pair_rule(a, b) {
        return Some(StarCombinationInfo {
            key,
            name,
            description: rule.description.to_owned(),
            detailed_description: rule
                .detailed_description
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            from_catalog: true,
        });
    }

    let interpretation = mapper::interpret_star_combination(a, b);
    Some(StarCombinationInfo {
        description: format!(
            "Tổ hợp của {} và {}",
            stars::star(a).map(|s| s.name).unwrap_or_default(),
            stars::star(b).map(|s| s.name).unwrap_or_default()
        ),
        detailed_description: vec![interpretation],
        key,
        name,
        from_catalog: false,
    })
}

/// Walks adjacent pairs of the mapped sequence, skipping `UNKNOWN` entries.
pub fn adjacent_combinations(sequence: &[MappedStar]) -> Vec<AdjacentCombination> {
    let mut result = Vec::new();

    for i in 0..sequence.len().saturating_sub(1) {
        let current = &sequence[i];
        let next = &sequence[i + 1];
        if current.star == StarKey::Unknown || next.star == StarKey::Unknown {
            continue;
        }

        let Some(combo) = star_combination(current.star, next.star) else {
            continue;
        };

        result.push(AdjacentCombination {
            first_star: StarRef {
                name: current.name.clone(),
                nature: current.nature,
                original_pair: current.original_pair.clone(),
                energy_level: current.energy_level,
            },
            second_star: StarRef {
                name: next.name.clone(),
                nature: next.nature,
                original_pair: next.original_pair.clone(),
                energy_level: next.energy_level,
            },
            key: combo.key,
            description: combo.description,
            detailed_description: combo.detailed_description,
            total_energy: current.energy_level + next.energy_level,
            is_positive: current.nature == StarNature::Cat && next.nature == StarNature::Cat,
            is_negative: current.nature == StarNature::Hung && next.nature == StarNature::Hung,
            position: format!("{}-{}", i + 1, i + 2),
            is_last_pair: i == sequence.len() - 2,
        });
    }

    result
}

/// Scans every 3-digit window, forward and reversed, against the named
/// wealth/career/marriage patterns.
pub fn key_combinations(digits: &str) -> Vec<KeyCombination> {
    let chars: Vec<char> = digits.chars().collect();
    let mut found = Vec::new();

    for i in 0..chars.len().saturating_sub(2) {
        let triplet: String = chars[i..i + 3].iter().collect();
        let reversed: String = chars[i..i + 3].iter().rev().collect();

        for rule in combinations::TRIPLET_RULES.iter() {
            if rule.codes.contains(&triplet.as_str()) || rule.codes.contains(&reversed.as_str()) {
                found.push(KeyCombination {
                    kind: rule.kind,
                    code: rule.code.to_owned(),
                    value: triplet.clone(),
                    position: format!("{}-{}", i + 1, i + 3),
                    description: rule.description.to_owned(),
                    detailed_description: rule.detailed_description.to_owned(),
                });
            }
        }
    }

    found
}

/// Scans for the structurally dangerous patterns.
pub fn dangerous_combinations(digits: &str) -> Vec<DangerousCombination> {
    let chars: Vec<char> = digits.chars().collect();
    let mut found = Vec::new();

    for i in 0..chars.len().saturating_sub(2) {
        let triplet: String = chars[i..i + 3].iter().collect();
        let reversed: String = chars[i..i + 3].iter().rev().collect();
        let position = format!("{}-{}", i + 1, i + 3);

        if triplet == "618" || triplet == "816" || reversed == "618" || reversed == "816" {
            found.push(DangerousCombination {
                combination: triplet.clone(),
                position: position.clone(),
                description: "Lục Sát + Ngũ Quỷ: dễ có duyên với người khác phái, nát Đào Hoa"
                    .to_owned(),
                detailed_description:
                    "Đào hoa nát, tình cảm không ổn định, có thể có nhiều mối quan hệ phức tạp."
                        .to_owned(),
            });
        }

        if triplet == "218" || triplet == "812" || reversed == "218" || reversed == "812" {
            found.push(DangerousCombination {
                combination: triplet.clone(),
                position: position.clone(),
                description: "Tuyệt mệnh + Ngũ quỷ: dễ dẫn phát sức khỏe kém, ung thư, bệnh nan y"
                    .to_owned(),
                detailed_description:
                    "Rủi ro sức khỏe cao, cần chú ý đến các vấn đề về tim mạch và các bệnh mạn tính."
                        .to_owned(),
            });
        }

        let ending = combinations::special_ending();
        if ending.numbers.contains(&triplet.as_str()) || ending.numbers.contains(&reversed.as_str())
        {
            found.push(DangerousCombination {
                combination: triplet.clone(),
                position: position.clone(),
                description: "Tình cảm ngầm: xuất hiện tình cảm ngầm, tình ngoài giá thú, tình tay ba"
                    .to_owned(),
                detailed_description:
                    "Có nguy cơ tình cảm phức tạp, quan hệ ngoài luồng, dễ gây đổ vỡ gia đình."
                        .to_owned(),
            });
        }

        for rule in combinations::SPECIFIC_RULES.iter() {
            if rule.dangerous && rule.numbers.contains(&triplet.as_str()) {
                found.push(DangerousCombination {
                    combination: triplet.clone(),
                    position: position.clone(),
                    description: rule.description.to_owned(),
                    detailed_description: rule.detailed_description.join(" "),
                });
            }
        }
    }

    for i in 0..chars.len().saturating_sub(1) {
        let pair: String = chars[i..i + 2].iter().collect();
        if pair == "19" || pair == "91" {
            found.push(DangerousCombination {
                combination: pair,
                position: format!("{}-{}", i + 1, i + 2),
                description: "19/91: Không thích hợp nữ nhân dùng, dễ trở thành nữ cường nhân"
                    .to_owned(),
                detailed_description:
                    "Phụ nữ sẽ có cá tính mạnh, cứng rắn, thiên về công việc, có thể bỏ bê gia đình."
                        .to_owned(),
            });
        }
    }

    // The warning counts one zero fewer than are present and fires from two.
    let zero_count = digits.matches('0').count().saturating_sub(1);
    if zero_count >= 2 {
        found.push(DangerousCombination {
            combination: format!("0 (xuất hiện {} lần)", zero_count),
            position: "Nhiều vị trí".to_owned(),
            description: "Quá nhiều số 0: hao tổn tiết nguyên khí, sức khỏe dễ mệt nhọc".to_owned(),
            detailed_description:
                "Năng lượng suy giảm, thể trạng dễ mệt mỏi, công việc đầu tư nhiều nhưng hiệu quả thấp."
                    .to_owned(),
        });
    }

    if digits.ends_with('0') {
        found.push(DangerousCombination {
            combination: "0".to_owned(),
            position: "Cuối".to_owned(),
            description: "Số đuôi 0: tứ đại giai không, cuối cùng là không".to_owned(),
            detailed_description:
                "Mọi nỗ lực cuối cùng có thể không mang lại kết quả như mong đợi, dễ trống rỗng."
                    .to_owned(),
        });
    }

    found
}

/// Matches the literal trailing triplet against the specific combinations.
pub fn special_last_three(digits: &str) -> SpecialLastThree {
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() < 3 {
        return SpecialLastThree {
            is_special: false,
            key: None,
            description: None,
            detailed_description: Vec::new(),
        };
    }
    let last_three: String = chars[chars.len() - 3..].iter().collect();

    match combinations::specific_rule_for(&last_three) {
        Some(rule) => SpecialLastThree {
            is_special: true,
            key: Some(rule.code.to_owned()),
            description: Some(rule.description.to_owned()),
            detailed_description: rule
                .detailed_description
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        },
        None => SpecialLastThree {
            is_special: false,
            key: None,
            description: None,
            detailed_description: Vec::new(),
        },
    }
}

/// Reads the trailing three digits as two overlapping pairs with their base
/// stars and combination.
pub fn last_three_analysis(digits: &str) -> Option<LastThreeAnalysis> {
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() < 3 {
        return None;
    }
    let last_three: String = chars[chars.len() - 3..].iter().collect();
    let first: String = last_three[0..2].to_owned();
    let second: String = last_three[1..3].to_owned();

    let first_info = mapper::analyze_pair(&first);
    let second_info = mapper::analyze_pair(&second);

    let special_combination =
        combinations::specific_rule_for(&last_three).map(|rule| SpecialCombinationRef {
            key: rule.code.to_owned(),
            description: rule.description.to_owned(),
            detailed_description: rule
                .detailed_description
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        });

    let star_combo = if first_info.star != StarKey::Unknown && second_info.star != StarKey::Unknown
    {
        star_combination(first_info.star, second_info.star)
    } else {
        None
    };

    let has_special_meaning = special_combination.is_some()
        || star_combo.as_ref().map(|c| c.from_catalog).unwrap_or(false);

    Some(LastThreeAnalysis {
        last_three_digits: last_three,
        first_pair: PairAnalysis {
            pair: first,
            star_info: first_info,
        },
        second_pair: PairAnalysis {
            pair: second,
            star_info: second_info,
        },
        special_combination,
        star_combination: star_combo,
        has_special_meaning,
    })
}

/// Scans 3-digit windows for zero and five effects on recognizable pairs.
pub fn special_digit_effects(digits: &str) -> SpecialDigitEffects {
    let chars: Vec<char> = digits.chars().collect();
    let mut effects = SpecialDigitEffects::default();

    for i in 0..chars.len().saturating_sub(2) {
        let triplet: String = chars[i..i + 3].iter().collect();

        if triplet.contains('0') {
            let clean: String = triplet.chars().filter(|&c| c != '0').collect();
            if clean.len() == 2 {
                let info = mapper::analyze_pair(&clean);
                if info.star != StarKey::Unknown {
                    let effect = match stars::zero_variant(info.star) {
                        Some(variant) => DigitEffect {
                            position: format!("{}-{}", i + 1, i + 3),
                            digits: triplet.clone(),
                            star: info.star,
                            description: variant.description.to_owned(),
                            effect: "zero_variant",
                        },
                        None => DigitEffect {
                            position: format!("{}-{}", i + 1, i + 3),
                            digits: triplet.clone(),
                            star: info.star,
                            description: format!(
                                "Số 0 làm giảm năng lượng của sao {}",
                                info.name
                            ),
                            effect: "generic_reduction",
                        },
                    };
                    effects.zero_effects.push(effect);
                }
            }
        }

        if triplet.contains('5') {
            let clean: String = triplet.chars().filter(|&c| c != '5').collect();
            if clean.len() == 2 {
                let info = mapper::analyze_pair(&clean);
                if info.star != StarKey::Unknown {
                    effects.five_effects.push(DigitEffect {
                        position: format!("{}-{}", i + 1, i + 3),
                        digits: triplet,
                        star: info.star,
                        description: format!(
                            "Số 5 tăng cường năng lượng của sao {}",
                            info.name
                        ),
                        effect: "enhancement",
                    });
                }
            }
        }
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::map_token;

    #[test]
    fn adjacent_combinations_skip_unknown_and_mark_last_pair() {
        let sequence = vec![map_token("14"), map_token("15"), map_token("41"), map_token("13")];
        let combos = adjacent_combinations(&sequence);
        // 14-15 and 15-41 are skipped because "15" is unknown.
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].position, "3-4");
        assert!(combos[0].is_last_pair);
        assert!(combos[0].is_positive);
        assert_eq!(combos[0].key, "SINH_KHI_THIEN_Y");
        assert_eq!(combos[0].total_energy, 8.0);
    }

    #[test]
    fn combination_lookup_is_direction_symmetric() {
        let forward = star_combination(StarKey::ThienY, StarKey::SinhKhi).unwrap();
        let backward = star_combination(StarKey::SinhKhi, StarKey::ThienY).unwrap();
        assert_eq!(forward.key, backward.key);
        assert_eq!(forward.description, backward.description);
    }

    #[test]
    fn wealth_triplet_found_forward_and_reversed() {
        let found = key_combinations("0931000000");
        assert!(found
            .iter()
            .any(|c| c.code == "QUY_NHAN_TRO_GIUP" && c.value == "931"));

        // "139" reverses to "931".
        let reversed = key_combinations("1390000000");
        assert!(reversed
            .iter()
            .any(|c| c.code == "QUY_NHAN_TRO_GIUP" && c.value == "139"));
    }

    #[test]
    fn dangerous_scan_flags_218_twice() {
        // "218" matches both the digit rule and the specific combination.
        let found = dangerous_combinations("218");
        let hits: Vec<&DangerousCombination> =
            found.iter().filter(|d| d.combination == "218").collect();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn too_many_zeros_counts_one_less() {
        // Three zeros report as two occurrences.
        let found = dangerous_combinations("1000");
        let warning = found
            .iter()
            .find(|d| d.combination.starts_with("0 ("))
            .unwrap();
        assert!(warning.combination.contains("2 lần"));

        // Two zeros stay below the threshold.
        let quiet = dangerous_combinations("1001");
        assert!(!quiet.iter().any(|d| d.combination.starts_with("0 (")));
    }

    #[test]
    fn trailing_zero_is_flagged() {
        let found = dangerous_combinations("910");
        assert!(found.iter().any(|d| d.position == "Cuối"));
    }

    #[test]
    fn special_ending_marks_last_three() {
        let special = special_last_three("0912345608");
        assert!(special.is_special);
        assert_eq!(special.key.as_deref(), Some("SPECIAL_ENDING"));
    }

    #[test]
    fn last_three_analysis_builds_overlapping_pairs() {
        let analysis = last_three_analysis("0912345678").unwrap();
        assert_eq!(analysis.last_three_digits, "678");
        assert_eq!(analysis.first_pair.pair, "67");
        assert_eq!(analysis.second_pair.pair, "78");
        assert_eq!(analysis.first_pair.star_info.star, StarKey::SinhKhi);
        assert_eq!(analysis.second_pair.star_info.star, StarKey::DienNien);
        assert!(analysis.has_special_meaning);
    }

    #[test]
    fn zero_effect_scan_reports_variant_windows() {
        let effects = special_digit_effects("140");
        assert_eq!(effects.zero_effects.len(), 1);
        assert_eq!(effects.zero_effects[0].star, StarKey::SinhKhi);
        assert_eq!(effects.zero_effects[0].effect, "zero_variant");
        assert!(effects.five_effects.is_empty());
    }

    #[test]
    fn five_effect_scan_reports_enhancement() {
        let effects = special_digit_effects("145");
        assert_eq!(effects.five_effects.len(), 1);
        assert_eq!(effects.five_effects[0].effect, "enhancement");
    }
}
