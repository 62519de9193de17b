//! Top-level analysis entry points for phone numbers and six-digit tails.

use batcuc_core::stars;
use batcuc_core::{BatCucError, Result, SpecialAttribute, StarKey};
use serde::Serialize;

use crate::combinations::{
    self, AdjacentCombination, DangerousCombination, KeyCombination, LastThreeAnalysis,
    SpecialDigitEffects, SpecialLastThree,
};
use crate::context::{self, UserContext, WeightedAnalysis};
use crate::mapper::{self, MappedStar, PairStarInfo};
use crate::normalize::{self, DigitPattern};
use crate::scoring::{self, EnergyBreakdown, StarCounts};
use crate::segment;

/// Complete reading of a phone number.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneAnalysis {
    pub input_digits: String,
    pub normalized_digits: String,
    pub pairs: Vec<String>,
    pub star_sequence: Vec<MappedStar>,
    pub energy: EnergyBreakdown,
    pub balance_text: String,
    pub star_counts: StarCounts,
    pub combinations: Vec<AdjacentCombination>,
    pub key_combinations: Vec<KeyCombination>,
    pub dangerous_combinations: Vec<DangerousCombination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_three: Option<LastThreeAnalysis>,
    pub special_last_three: SpecialLastThree,
    pub special_digit_effects: SpecialDigitEffects,
    pub special_attribute: SpecialAttribute,
    pub special_effect_description: String,
    pub zero_count: usize,
    pub five_count: usize,
    pub energy_modifier: f64,
    pub zero_patterns: Vec<DigitPattern>,
    pub five_patterns: Vec<DigitPattern>,
    pub quality_score: u8,
    pub weighted: WeightedAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// One overlapping pair of the normalized six-digit tail.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SixDigitPair {
    pub pair_number: usize,
    pub digits: String,
    pub star_key: StarKey,
    pub star: String,
    pub meaning: String,
    pub nature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<f64>,
}

/// Interpretation of two consecutive stars in the six-digit reading.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SixDigitCombination {
    pub combination_number: usize,
    pub stars: String,
    pub meaning: String,
    pub details: Vec<String>,
}

/// Complete reading of the last six digits of an identity number.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SixDigitAnalysis {
    pub original_number: String,
    pub last_six_digits: String,
    pub normalized_sequence: String,
    pub pairs: Vec<String>,
    pub individual_pairs: Vec<SixDigitPair>,
    pub star_combinations: Vec<SixDigitCombination>,
    pub overall_summary: String,
}

/// Runs the full phone pipeline. Fails only when the input contains no
/// digits at all; a too-short normalized sequence still produces a result
/// with empty collections and an explanatory summary.
pub fn analyze_phone(input: &str, context: Option<UserContext>) -> Result<PhoneAnalysis> {
    let cleaned = normalize::clean_digits(input);
    if cleaned.is_empty() {
        return Err(BatCucError::InvalidInput(format!(
            "không tìm thấy chữ số nào trong '{}'",
            input
        )));
    }

    let normalization = normalize::normalize_phone(&cleaned);
    let normalized = normalization.normalized_number.clone();
    let ctx = context.unwrap_or_default();

    if normalized.len() < 2 {
        let energy = scoring::calculate_energy(&[], 0.0);
        let weighted = context::apply_response_factors(&[], &energy, &ctx);
        return Ok(PhoneAnalysis {
            input_digits: cleaned.clone(),
            normalized_digits: normalized.clone(),
            pairs: Vec::new(),
            star_sequence: Vec::new(),
            balance_text: energy.balance_class.text().to_owned(),
            star_counts: StarCounts::default(),
            combinations: Vec::new(),
            key_combinations: Vec::new(),
            dangerous_combinations: Vec::new(),
            last_three: None,
            special_last_three: combinations::special_last_three(&cleaned),
            special_digit_effects: SpecialDigitEffects::default(),
            special_attribute: SpecialAttribute::None,
            special_effect_description: String::new(),
            zero_count: cleaned.matches('0').count(),
            five_count: cleaned.matches('5').count(),
            energy_modifier: 0.0,
            zero_patterns: normalization.zero_patterns,
            five_patterns: normalization.five_patterns,
            quality_score: scoring::quality_score(&energy, &[], &[], 0, 0),
            weighted,
            energy,
            summary: Some(format!(
                "Chuỗi số '{}' sau chuẩn hóa còn '{}', quá ngắn để phân tích.",
                cleaned, normalized
            )),
        });
    }

    let mapping = mapper::map_sequence(&cleaned);
    let energy = scoring::calculate_energy(&mapping.mapped, mapping.energy_modifier);
    let star_counts = scoring::count_star_types(&mapping.mapped);
    let adjacent = combinations::adjacent_combinations(&mapping.mapped);
    // Digit-string scans read the cleaned input, not the collapsed form.
    let key_combos = combinations::key_combinations(&cleaned);
    let dangerous = combinations::dangerous_combinations(&cleaned);
    let quality_score = scoring::quality_score(
        &energy,
        &key_combos,
        &dangerous,
        mapping.zero_count,
        mapping.five_count,
    );
    let weighted = context::apply_response_factors(&mapping.mapped, &energy, &ctx);
    let last_three = combinations::last_three_analysis(&cleaned);
    let special_last_three = combinations::special_last_three(&cleaned);
    let special_digit_effects = combinations::special_digit_effects(&cleaned);

    Ok(PhoneAnalysis {
        input_digits: cleaned,
        normalized_digits: normalized,
        pairs: mapping.pairs,
        star_sequence: mapping.mapped,
        balance_text: energy.balance_class.text().to_owned(),
        star_counts,
        combinations: adjacent,
        key_combinations: key_combos,
        dangerous_combinations: dangerous,
        last_three,
        special_last_three,
        special_digit_effects,
        special_attribute: mapping.special_attribute,
        special_effect_description: mapping.special_effect_description,
        zero_count: mapping.zero_count,
        five_count: mapping.five_count,
        energy_modifier: mapping.energy_modifier,
        zero_patterns: normalization.zero_patterns,
        five_patterns: normalization.five_patterns,
        quality_score,
        weighted,
        energy,
        summary: None,
    })
}

/// Reads the last six digits of an identity number. The input must be
/// numeric and at least six digits long.
pub fn analyze_six_digit(input: &str) -> Result<SixDigitAnalysis> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(BatCucError::InvalidInput(format!(
            "'{}' không phải là chuỗi số hợp lệ",
            input
        )));
    }
    if trimmed.len() < 6 {
        return Err(BatCucError::InvalidInput(format!(
            "'{}' phải có ít nhất 6 chữ số",
            input
        )));
    }

    let last_six: String = trimmed
        .chars()
        .skip(trimmed.len() - 6)
        .collect();
    let normalized = normalize::normalize_six_digit(&last_six);

    if normalized.len() < 2 {
        let summary = format!(
            "Không thể tạo cặp số nào từ chuỗi chuẩn hóa '{}' để phân tích. (Chuỗi chuẩn hóa quá ngắn).",
            normalized
        );
        return Ok(SixDigitAnalysis {
            original_number: trimmed.to_owned(),
            last_six_digits: last_six,
            normalized_sequence: normalized,
            pairs: Vec::new(),
            individual_pairs: Vec::new(),
            star_combinations: Vec::new(),
            overall_summary: summary,
        });
    }

    let pairs = segment::overlapping_pairs(&normalized);
    if pairs.is_empty() {
        return Ok(SixDigitAnalysis {
            original_number: trimmed.to_owned(),
            last_six_digits: last_six,
            overall_summary: format!(
                "Không thể tạo cặp số nào từ chuỗi chuẩn hóa '{}' để phân tích. (Kiểm tra lại logic chuẩn hóa).",
                normalized
            ),
            normalized_sequence: normalized,
            pairs: Vec::new(),
            individual_pairs: Vec::new(),
            star_combinations: Vec::new(),
        });
    }

    let infos: Vec<PairStarInfo> = pairs.iter().map(|p| mapper::analyze_pair(p)).collect();

    let individual_pairs: Vec<SixDigitPair> = infos
        .iter()
        .enumerate()
        .map(|(i, info)| {
            let known = info.star != StarKey::Unknown;
            SixDigitPair {
                pair_number: i + 1,
                digits: info.pair.clone(),
                star_key: info.star,
                star: if known {
                    info.name.clone()
                } else {
                    "Không xác định".to_owned()
                },
                meaning: if known {
                    info.description.clone()
                } else {
                    "Không có thông tin".to_owned()
                },
                nature: if known {
                    info.nature.to_string()
                } else {
                    "Không xác định".to_owned()
                },
                energy_level: known.then_some(info.energy_level),
            }
        })
        .collect();

    let mut star_combinations = Vec::new();
    for i in 0..infos.len().saturating_sub(1) {
        let first = &infos[i];
        let second = &infos[i + 1];
        if first.star == StarKey::Unknown || second.star == StarKey::Unknown {
            continue;
        }
        if let Some(combo) = combinations::star_combination(first.star, second.star) {
            star_combinations.push(SixDigitCombination {
                combination_number: i + 1,
                stars: format!(
                    "{} ({}) + {} ({})",
                    first.name, first.pair, second.name, second.pair
                ),
                meaning: combo.description,
                details: combo.detailed_description,
            });
        }
    }

    let sequence: Vec<&str> = infos
        .iter()
        .map(|info| {
            if info.star == StarKey::Unknown {
                "Không xác định"
            } else {
                stars::star(info.star).map(|s| s.name).unwrap_or_default()
            }
        })
        .collect();
    let mut overall_summary = format!(
        "Phân tích dựa trên chuỗi số chuẩn hóa '{}' ({} cặp số, {} kết hợp). Chuỗi sao: {}.",
        normalized,
        pairs.len(),
        star_combinations.len(),
        sequence.join(" -> ")
    );
    if pairs.len() < 5 && last_six.contains('5') {
        overall_summary
            .push_str(" (Lưu ý: Số cặp số ít hơn 5 do có số 5 trong 6 số cuối)");
    }

    Ok(SixDigitAnalysis {
        original_number: trimmed.to_owned(),
        last_six_digits: last_six,
        normalized_sequence: normalized,
        pairs,
        individual_pairs,
        star_combinations,
        overall_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use batcuc_core::Balance;

    #[test]
    fn full_phone_analysis_is_assembled() {
        let analysis = analyze_phone("0912345678", None).unwrap();
        assert_eq!(analysis.input_digits, "0912345678");
        assert_eq!(analysis.normalized_digits, "912345678");
        assert_eq!(
            analysis.pairs,
            vec!["91", "12", "23", "34", "456", "67", "78"]
        );
        assert_eq!(analysis.star_sequence.len(), 7);
        assert!(analysis.summary.is_none());
        assert!(analysis.quality_score <= 100);
    }

    #[test]
    fn energy_breakdown_matches_sequence() {
        // 91 Diên Niên 4, 12 Tuyệt Mệnh 4, 13 Thiên Y 4.
        let analysis = analyze_phone("09121300", None).unwrap();
        assert!(analysis.energy.auspicious_sum > 0.0);
        assert!(analysis.energy.inauspicious_sum > 0.0);
        assert_ne!(analysis.energy.balance_class, Balance::Unknown);
    }

    #[test]
    fn repeated_zeros_still_raise_the_zero_warning() {
        // The cleaned input has three zeros; run collapsing must not hide
        // them from the dangerous scan.
        let analysis = analyze_phone("0912003456", None).unwrap();
        let warning = analysis
            .dangerous_combinations
            .iter()
            .find(|d| d.combination.starts_with("0 ("))
            .unwrap();
        assert!(warning.combination.contains("2 lần"));
    }

    #[test]
    fn last_three_reads_the_literal_cleaned_tail() {
        // "912345500" collapses to "9123450"; the last-three reading still
        // sees the literal "500".
        let analysis = analyze_phone("0912345500", None).unwrap();
        let last_three = analysis.last_three.unwrap();
        assert_eq!(last_three.last_three_digits, "500");
    }

    #[test]
    fn digit_free_input_is_rejected() {
        assert!(matches!(
            analyze_phone("xin chào", None),
            Err(BatCucError::InvalidInput(_))
        ));
    }

    #[test]
    fn short_normalized_input_returns_explanatory_result() {
        let analysis = analyze_phone("05", None).unwrap();
        assert!(analysis.pairs.is_empty());
        assert!(analysis.star_sequence.is_empty());
        assert!(analysis.summary.as_deref().unwrap().contains("quá ngắn"));
    }

    #[test]
    fn six_digit_reading_uses_last_six() {
        let analysis = analyze_six_digit("001204012345").unwrap();
        assert_eq!(analysis.last_six_digits, "012345");
        assert!(!analysis.individual_pairs.is_empty());
        assert!(analysis.overall_summary.contains("Chuỗi sao"));
    }

    #[test]
    fn six_digit_fives_shrink_the_pair_count() {
        let analysis = analyze_six_digit("123455").unwrap();
        assert!(analysis.overall_summary.contains("Lưu ý"));
    }

    #[test]
    fn six_digit_rejects_non_numeric_input() {
        assert!(analyze_six_digit("12a456").is_err());
        assert!(analyze_six_digit("12345").is_err());
    }
}
