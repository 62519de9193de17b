//! Pair segmentation.
//!
//! The phone segmenter walks the digits left to right producing overlapping
//! 2-digit tokens, except that `0` and `5` never start a token: a run of them
//! after a significant digit is absorbed into that token together with the
//! next significant digit. A trailing group holding only `0`/`5` after its
//! first digit is merged back into the previous token.
//!
//! The six-digit path uses plain overlapping pairs over the already
//! normalized sequence.

/// Splits a normalized sequence into simple overlapping 2-digit pairs.
pub fn overlapping_pairs(sequence: &str) -> Vec<String> {
    let chars: Vec<char> = sequence.chars().collect();
    if chars.len() < 2 {
        return Vec::new();
    }
    (0..chars.len() - 1)
        .map(|i| chars[i..i + 2].iter().collect())
        .collect()
}

/// Segments a phone digit string into analysis tokens.
pub fn segment_phone(digits: &str) -> Vec<String> {
    let stripped = digits.strip_prefix('0').unwrap_or(digits);
    let chars: Vec<char> = stripped.chars().collect();
    let mut pairs: Vec<String> = Vec::new();
    let mut i = 0;

    while i + 1 < chars.len() {
        if chars[i] == '0' || chars[i] == '5' {
            i += 1;
            continue;
        }

        let next = chars[i + 1];
        if next != '0' && next != '5' {
            pairs.push(chars[i..i + 2].iter().collect());
            i += 1;
        } else {
            let mut j = i + 1;
            let mut group = String::new();
            group.push(chars[i]);
            while j < chars.len() && (chars[j] == '0' || chars[j] == '5') {
                group.push(chars[j]);
                j += 1;
            }
            if j < chars.len() {
                group.push(chars[j]);
                j += 1;
            }
            pairs.push(group);
            i = j - 1;
        }
    }

    // A digit may remain unconsumed when the walk ends on it.
    if i < chars.len() {
        if let Some(last_pair) = pairs.last() {
            let last_char = last_pair.chars().next_back();
            let from = i.saturating_sub(last_pair.len());
            let last_digit_position = last_char.and_then(|c| {
                chars[from..].iter().position(|&d| d == c).map(|p| p + from)
            });

            if last_digit_position.map(|p| p + 1) == Some(i) {
                let remaining: String = chars[i..].iter().collect();
                if remaining.ends_with('0') || remaining.ends_with('5') {
                    let first = remaining.chars().next();
                    if i >= 1 && first == Some(chars[i - 1]) {
                        if let Some(last) = pairs.last_mut() {
                            last.push_str(&remaining[1..]);
                        }
                    } else {
                        pairs.push(remaining);
                    }
                }
            }
        }
    }

    process_last_group(&mut pairs);
    pairs
}

/// Merges a final group of one significant digit followed only by `0`/`5`
/// into the previous token. Needs at least two tokens to apply.
fn process_last_group(pairs: &mut Vec<String>) {
    if pairs.len() < 2 {
        return;
    }

    let last = &pairs[pairs.len() - 1];
    let mut chars = last.chars();
    let starts_significant = !matches!(chars.next(), Some('0') | Some('5') | None);
    let tail: String = chars.collect();

    if last.len() > 1
        && starts_significant
        && !tail.is_empty()
        && tail.chars().all(|c| c == '0' || c == '5')
    {
        pairs.pop();
        if let Some(prev) = pairs.last_mut() {
            prev.push_str(&tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_mobile_number_segmentation() {
        assert_eq!(
            segment_phone("0912345678"),
            vec!["91", "12", "23", "34", "456", "67", "78"]
        );
    }

    #[test]
    fn trailing_special_tail_merges_backward() {
        assert_eq!(segment_phone("914250"), vec!["91", "14", "4250"]);
    }

    #[test]
    fn all_special_digits_yield_no_pairs() {
        assert_eq!(segment_phone("0505050"), Vec::<String>::new());
    }

    #[test]
    fn plain_overlap_without_special_digits() {
        assert_eq!(segment_phone("1234"), vec!["12", "23", "34"]);
    }

    #[test]
    fn overlapping_pairs_of_normalized_sequence() {
        assert_eq!(overlapping_pairs("12346"), vec!["12", "23", "34", "46"]);
        assert!(overlapping_pairs("7").is_empty());
        assert!(overlapping_pairs("").is_empty());
    }
}
