//! End-to-end analysis tests over realistic inputs.

use batcuc_engine::{analyze_compatibility, analyze_phone, analyze_six_digit, Purpose};

#[test]
fn analysis_is_deterministic() {
    let first = analyze_phone("0912345678", None).unwrap();
    let second = analyze_phone("0912345678", None).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn formatting_noise_is_ignored() {
    let plain = analyze_phone("0912345678", None).unwrap();
    let formatted = analyze_phone("091-234-5678", None).unwrap();
    assert_eq!(plain.pairs, formatted.pairs);
    assert_eq!(plain.quality_score, formatted.quality_score);
}

#[test]
fn serialized_shape_uses_contract_names() {
    let analysis = analyze_phone("0912345678", None).unwrap();
    let value = serde_json::to_value(&analysis).unwrap();
    assert!(value.get("inputDigits").is_some());
    assert!(value.get("normalizedDigits").is_some());
    assert!(value.get("starSequence").is_some());
    assert!(value.get("dangerousCombinations").is_some());
    let energy = value.get("energy").unwrap();
    assert!(energy.get("auspiciousSum").is_some());
    assert!(energy.get("inauspiciousSum").is_some());
    assert!(energy.get("balanceClass").is_some());
    assert!(value.get("qualityScore").is_some());
}

#[test]
fn quality_score_stays_in_bounds() {
    for input in ["0914141414", "0912121212", "0900000000", "0555555555"] {
        let analysis = analyze_phone(input, None).unwrap();
        assert!(analysis.quality_score <= 100, "input {}", input);
    }
}

#[test]
fn wealth_triplet_is_detected() {
    let analysis = analyze_phone("0931413141", None).unwrap();
    assert!(analysis
        .key_combinations
        .iter()
        .any(|c| c.value == "931"));
}

#[test]
fn dangerous_ending_zero_is_flagged() {
    let analysis = analyze_phone("0912345670", None).unwrap();
    assert!(analysis
        .dangerous_combinations
        .iter()
        .any(|d| d.position == "Cuối"));
}

#[test]
fn zero_and_five_runs_collapse_in_segmentation() {
    let analysis = analyze_phone("0912005578", None).unwrap();
    assert_eq!(analysis.normalized_digits, "9120578");
}

#[test]
fn compatibility_score_is_bounded_for_every_purpose() {
    for purpose in [
        Purpose::Business,
        Purpose::Romance,
        Purpose::Wealth,
        Purpose::Health,
        Purpose::General,
    ] {
        let compat = analyze_compatibility("0912345678", purpose).unwrap();
        assert!(compat.score <= 100);
        assert!(!compat.level.is_empty());
        assert!(!compat.desired_stars.is_empty());
    }
}

#[test]
fn six_digit_pipeline_normalizes_zeros_and_fives() {
    let analysis = analyze_six_digit("012345003005").unwrap();
    assert_eq!(analysis.last_six_digits, "003005");
    assert_eq!(analysis.normalized_sequence, "333");
    assert_eq!(analysis.pairs, vec!["33", "33"]);
}

#[test]
fn six_digit_all_special_digits_yields_explanatory_summary() {
    let analysis = analyze_six_digit("000005000005").unwrap();
    assert!(analysis.pairs.is_empty());
    assert!(analysis
        .overall_summary
        .contains("Không thể tạo cặp số nào"));
}
