//! Purpose-based compatibility scoring for a phone number.

use batcuc_core::combinations::TripletKind;
use batcuc_core::{Balance, Result, StarKey};
use serde::{Deserialize, Serialize};

use batcuc_core::combinations::special_ending;

use crate::analyzer;

/// What the number will primarily be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Business,
    Romance,
    Wealth,
    Health,
    #[default]
    General,
}

impl Purpose {
    pub fn label(self) -> &'static str {
        match self {
            Purpose::Business => "kinh doanh",
            Purpose::Romance => "tình duyên",
            Purpose::Wealth => "tài lộc",
            Purpose::Health => "sức khỏe",
            Purpose::General => "mục đích chung",
        }
    }

    fn desired(self) -> &'static [StarKey] {
        match self {
            Purpose::Business => &[StarKey::DienNien, StarKey::SinhKhi],
            Purpose::Romance => &[StarKey::ThienY],
            Purpose::Wealth => &[StarKey::ThienY, StarKey::SinhKhi],
            Purpose::Health => &[StarKey::SinhKhi],
            Purpose::General => &[StarKey::SinhKhi, StarKey::ThienY],
        }
    }

    fn avoided(self) -> &'static [StarKey] {
        match self {
            Purpose::Business => &[StarKey::HoaHai],
            Purpose::Romance => &[StarKey::NguQuy, StarKey::LucSat],
            Purpose::Wealth => &[StarKey::TuyetMenh],
            Purpose::Health => &[StarKey::TuyetMenh, StarKey::NguQuy],
            Purpose::General => &[StarKey::HoaHai, StarKey::TuyetMenh],
        }
    }
}

/// Result of matching a number against a usage purpose.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    pub score: u8,
    pub level: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub desired_stars: Vec<StarKey>,
    pub avoid_stars: Vec<StarKey>,
}

fn level_for(score: u8) -> &'static str {
    if score >= 80 {
        "Rất Tốt"
    } else if score >= 65 {
        "Tốt"
    } else if score >= 50 {
        "Trung Bình"
    } else if score >= 35 {
        "Thấp"
    } else {
        "Kém"
    }
}

fn description_for(score: u8, purpose: Purpose) -> String {
    let label = purpose.label();
    if score >= 80 {
        format!("Số điện thoại này rất phù hợp cho {}", label)
    } else if score >= 65 {
        format!("Số điện thoại này phù hợp cho {}", label)
    } else if score >= 50 {
        format!("Số điện thoại này tương đối phù hợp cho {}", label)
    } else if score >= 35 {
        format!("Số điện thoại này ít phù hợp cho {}", label)
    } else {
        format!("Số điện thoại này không phù hợp cho {}", label)
    }
}

/// Scores how well the number serves the given purpose.
pub fn analyze_compatibility(input: &str, purpose: Purpose) -> Result<Compatibility> {
    let analysis = analyzer::analyze_phone(input, None)?;

    let desired = purpose.desired();
    let avoided = purpose.avoided();
    let mut score = 50.0;
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for star in &analysis.star_sequence {
        if desired.contains(&star.star) {
            score += star.energy_level * 5.0;
            strengths.push(format!(
                "Có sao {} ({}) hỗ trợ cho {}",
                star.name,
                star.original_pair,
                purpose.label()
            ));
        } else if avoided.contains(&star.star) {
            score -= star.energy_level * 5.0;
            weaknesses.push(format!(
                "Có sao {} ({}) không tốt cho {}",
                star.name,
                star.original_pair,
                purpose.label()
            ));
        }
    }

    for combo in &analysis.key_combinations {
        match (purpose, combo.kind) {
            (Purpose::Business, TripletKind::Career) => {
                score += 10.0;
                strengths.push(format!(
                    "Có tổ hợp nghề nghiệp {}: {}",
                    combo.value, combo.description
                ));
            }
            (Purpose::Wealth, TripletKind::Wealth) => {
                score += 10.0;
                strengths.push(format!(
                    "Có tổ hợp tài lộc {}: {}",
                    combo.value, combo.description
                ));
            }
            (Purpose::Romance, TripletKind::Marriage) => {
                if combo.code == "CHINH_DAO_HOA" {
                    score += 10.0;
                    strengths.push(format!(
                        "Có tổ hợp tình duyên tốt {}: {}",
                        combo.value, combo.description
                    ));
                } else {
                    score -= 10.0;
                    weaknesses.push(format!(
                        "Có tổ hợp tình duyên không thuận {}: {}",
                        combo.value, combo.description
                    ));
                }
            }
            _ => {}
        }
    }

    if purpose == Purpose::Romance {
        // The ending is read from the cleaned digits, not the collapsed form.
        let chars: Vec<char> = analysis.input_digits.chars().collect();
        if chars.len() >= 3 {
            let last_three: String = chars[chars.len() - 3..].iter().collect();
            if special_ending().numbers.contains(&last_three.as_str()) {
                score -= 15.0;
                weaknesses.push(
                    "Ba số cuối có nghĩa tình cảm ngầm, không tốt cho tình duyên chính thức"
                        .to_owned(),
                );
            }
        }
    }

    match analysis.energy.balance_class {
        Balance::Balanced => {
            score += 10.0;
            strengths.push("Cân bằng tốt giữa năng lượng cát hung".to_owned());
        }
        Balance::CatHeavy => {
            score += 5.0;
            strengths.push(
                "Thiên về năng lượng tốt, nhưng có thể thiếu thử thách để phát triển".to_owned(),
            );
        }
        Balance::HungHeavy => {
            score -= 15.0;
            weaknesses
                .push("Quá nhiều năng lượng tiêu cực, có thể gặp nhiều khó khăn".to_owned());
        }
        Balance::Unknown => {}
    }

    if analysis.zero_count > 0 {
        score -= analysis.zero_count as f64 * 3.0;
        weaknesses.push(format!(
            "Có {} số 0 làm giảm năng lượng",
            analysis.zero_count
        ));
    }
    if analysis.five_count > 0 {
        score += analysis.five_count as f64 * 2.0;
        strengths.push(format!(
            "Có {} số 5 tăng cường năng lượng",
            analysis.five_count
        ));
    }

    let score = score.round().clamp(0.0, 100.0) as u8;

    Ok(Compatibility {
        score,
        level: level_for(score).to_owned(),
        description: description_for(score, purpose),
        strengths,
        weaknesses,
        desired_stars: desired.to_vec(),
        avoid_stars: avoided.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purpose_parses_lowercase() {
        let purpose: Purpose = serde_json::from_str("\"romance\"").unwrap();
        assert_eq!(purpose, Purpose::Romance);
    }

    #[test]
    fn supportive_stars_raise_the_score() {
        // All Sinh Khí pairs, strongly favorable for health.
        let good = analyze_compatibility("0914141414", Purpose::Health).unwrap();
        let bad = analyze_compatibility("0912121212", Purpose::Health).unwrap();
        assert!(good.score > bad.score);
        assert!(!good.strengths.is_empty());
        assert!(!bad.weaknesses.is_empty());
    }

    #[test]
    fn romance_penalizes_special_ending() {
        let special = analyze_compatibility("0912344608", Purpose::Romance).unwrap();
        assert!(special
            .weaknesses
            .iter()
            .any(|w| w.contains("tình cảm ngầm")));
    }

    #[test]
    fn romance_ending_reads_the_cleaned_digits() {
        // The cleaned input ends in "008"; collapsing the zero run would
        // leave "608" and trigger the penalty wrongly.
        let compat = analyze_compatibility("09123346008", Purpose::Romance).unwrap();
        assert!(!compat
            .weaknesses
            .iter()
            .any(|w| w.contains("tình cảm ngầm")));
    }

    #[test]
    fn score_maps_to_level() {
        assert_eq!(level_for(82), "Rất Tốt");
        assert_eq!(level_for(70), "Tốt");
        assert_eq!(level_for(50), "Trung Bình");
        assert_eq!(level_for(40), "Thấp");
        assert_eq!(level_for(20), "Kém");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(analyze_compatibility("abc", Purpose::General).is_err());
    }
}
