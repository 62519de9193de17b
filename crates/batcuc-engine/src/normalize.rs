//! Digit normalization for the two analysis paths.
//!
//! Phone sequences collapse consecutive repeated 0/5 digits and record the
//! special-digit windows that were seen. Six-digit sequences fill each `0`
//! from the nearest preceding non-zero digit and then drop every `5`.

use serde::Serialize;

/// A 3-digit window of the original input containing a special digit.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DigitPattern {
    pub pattern: String,
    pub position: String,
    #[serde(rename = "type")]
    pub effect: &'static str,
    pub description: &'static str,
}

/// Outcome of phone normalization, keeping the pre-collapse string and the
/// special-digit windows found in it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNormalization {
    pub normalized_number: String,
    pub original_number: String,
    pub zero_patterns: Vec<DigitPattern>,
    pub five_patterns: Vec<DigitPattern>,
}

/// Strips everything but ASCII digits.
pub fn clean_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalizes a phone digit string: drops one leading `0`, collapses runs of
/// repeated `0`/`5`, and scans for special-digit windows.
pub fn normalize_phone(digits: &str) -> PhoneNormalization {
    let cleaned = clean_digits(digits);
    let cleaned = match cleaned.strip_prefix('0') {
        Some(rest) => rest.to_owned(),
        None => cleaned,
    };

    let mut normalized = String::with_capacity(cleaned.len());
    let mut prev = None;
    for c in cleaned.chars() {
        if (c == '0' || c == '5') && prev == Some(c) {
            continue;
        }
        normalized.push(c);
        prev = Some(c);
    }

    PhoneNormalization {
        zero_patterns: find_special_digit_patterns(&cleaned, '0'),
        five_patterns: find_special_digit_patterns(&cleaned, '5'),
        normalized_number: normalized,
        original_number: cleaned,
    }
}

/// Finds every 3-digit window containing `special` ('0' or '5'), tagged with
/// its dampening or boosting effect.
pub fn find_special_digit_patterns(number: &str, special: char) -> Vec<DigitPattern> {
    let chars: Vec<char> = number.chars().collect();
    let mut patterns = Vec::new();

    for i in 0..chars.len().saturating_sub(2) {
        let triplet: String = chars[i..i + 3].iter().collect();
        if triplet.contains(special) {
            let (effect, description) = if special == '0' {
                ("hoa_hung", "Làm giảm năng lượng")
            } else {
                ("duoc_tang_cuong", "Tăng cường năng lượng")
            };
            patterns.push(DigitPattern {
                pattern: triplet,
                position: format!("{}-{}", i + 1, i + 3),
                effect,
                description,
            });
        }
    }

    patterns
}

/// Normalizes the six-digit sequence: each `0` takes the value of the nearest
/// preceding non-zero processed digit, falling back to the last digit of the
/// original input, then every `5` is removed. The result may be shorter than
/// the input, or empty.
pub fn normalize_six_digit(digits: &str) -> String {
    let original: Vec<char> = digits.chars().collect();
    let Some(&last_original) = original.last() else {
        return String::new();
    };

    let mut processed = original.clone();
    for i in 0..processed.len() {
        if processed[i] == '0' {
            let mut j = i as isize - 1;
            while j >= 0 && processed[j as usize] == '0' {
                j -= 1;
            }
            processed[i] = if j >= 0 {
                processed[j as usize]
            } else {
                last_original
            };
        }
    }

    processed.into_iter().filter(|&c| c != '5').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_normalization_strips_and_collapses() {
        let norm = normalize_phone("0912005578");
        assert_eq!(norm.original_number, "912005578");
        assert_eq!(norm.normalized_number, "9120578");
    }

    #[test]
    fn only_one_leading_zero_is_dropped() {
        let norm = normalize_phone("0012");
        assert_eq!(norm.original_number, "012");
        // The remaining leading zero is kept, not collapsed with anything.
        assert_eq!(norm.normalized_number, "012");
    }

    #[test]
    fn special_patterns_carry_positions_and_effects() {
        let norm = normalize_phone("91405");
        assert_eq!(norm.zero_patterns.len(), 2);
        assert_eq!(norm.zero_patterns[0].pattern, "140");
        assert_eq!(norm.zero_patterns[0].position, "2-4");
        assert_eq!(norm.zero_patterns[0].effect, "hoa_hung");
        assert_eq!(norm.five_patterns.len(), 1);
        assert_eq!(norm.five_patterns[0].pattern, "405");
        assert_eq!(norm.five_patterns[0].effect, "duoc_tang_cuong");
    }

    #[test]
    fn six_digit_backfills_zeros_then_drops_fives() {
        assert_eq!(normalize_six_digit("003005"), "333");
        assert_eq!(normalize_six_digit("120304"), "122334");
        assert_eq!(normalize_six_digit("123456"), "12346");
    }

    #[test]
    fn six_digit_all_fives_collapses_to_empty() {
        assert_eq!(normalize_six_digit("000005"), "");
    }

    #[test]
    fn clean_digits_drops_formatting() {
        assert_eq!(clean_digits("091-234 5678"), "0912345678");
    }
}
