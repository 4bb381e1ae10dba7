//! String similarity used to annotate search results.
//!
//! Not a ranking engine; with a real search index this would be replaced by
//! proper scoring. It only says how close a result title is to the query,
//! which is meaningful when the query is already specific.

/// Normalized edit-distance similarity between two strings, in [0, 1],
/// rounded to two decimals.
///
/// Both inputs are lower-cased and trimmed; the longer one is the reference.
/// Two empty strings are maximally similar.
pub fn score(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase().trim().to_string();
    let b = b.to_lowercase().trim().to_string();
    let (longer, shorter) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(&longer, &shorter);
    (((longer_len - distance) as f64 / longer_len as f64) * 100.0).round() / 100.0
}

/// Classic Levenshtein distance: insert/delete/substitute at unit cost,
/// computed over chars. Single-row DP.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = prev_diag + usize::from(ca != cb);
            prev_diag = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(prev_diag + 1);
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_classic_cases() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_identical_strings_score_one() {
        assert_eq!(score("Dark Souls", "Dark Souls"), 1.0);
    }

    #[test]
    fn test_one_deletion_in_ten_chars_scores_point_nine() {
        assert_eq!(score("Dark Souls", "Dark Soul"), 0.9);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(score("  DARK souls ", "dark Souls"), 1.0);
    }

    #[test]
    fn test_empty_strings_are_maximally_similar() {
        assert_eq!(score("", ""), 1.0);
        assert_eq!(score("   ", ""), 1.0);
    }

    #[test]
    fn test_disjoint_strings_score_low() {
        let s = score("abcd", "wxyz");
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_score_is_two_decimal_rounded() {
        // 1 edit over 3 chars: (3 - 1) / 3 = 0.666... -> 0.67
        assert_eq!(score("abc", "abd"), 0.67);
    }
}
