//! Consonant/vowel classification of candidate names

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Longest run of identical C/V symbols a plausible name may contain
const MAX_RUN: usize = 2;

/// Map each letter to 'V' (vowel) or 'C' (anything else).
pub fn classify(word: &str) -> String {
    word.chars()
        .map(|ch| {
            if VOWELS.contains(&ch.to_ascii_lowercase()) {
                'V'
            } else {
                'C'
            }
        })
        .collect()
}

/// Syntactic pronounceability check.
///
/// A name is plausible when its signature has at least one vowel and one
/// consonant, and never three or more of the same symbol in a row.
pub fn is_plausible(word: &str) -> bool {
    let signature = classify(word);
    if !signature.contains('V') || !signature.contains('C') {
        return false;
    }
    longest_run(&signature) <= MAX_RUN
}

/// Whether `word`'s signature matches `pattern`.
///
/// Equal lengths compare exactly. A shorter pattern matches if the signature
/// starts with, ends with, or contains it. A longer pattern matches if it
/// starts with or contains the signature; there is no ends-with test in
/// that direction.
pub fn matches(word: &str, pattern: &str) -> bool {
    let signature = classify(word);
    let (s, p) = (signature.as_str(), pattern);

    if s.len() == p.len() {
        s == p
    } else if p.len() < s.len() {
        s.starts_with(p) || s.ends_with(p) || s.contains(p)
    } else {
        p.starts_with(s) || p.contains(s)
    }
}

fn longest_run(signature: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;

    for symbol in signature.chars() {
        if Some(symbol) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(symbol);
        }
        longest = longest.max(current);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("cat"), "CVC");
        assert_eq!(classify("aeiou"), "VVVVV");
        assert_eq!(classify("CaT"), "CVC");
        assert_eq!(classify("y"), "C");
        assert_eq!(classify(""), "");
    }

    #[test]
    fn test_is_plausible() {
        assert!(is_plausible("cat"));
        assert!(is_plausible("beat"));
        assert!(!is_plausible("xyz"));
        assert!(!is_plausible("aeiou"));
        assert!(!is_plausible("ggg"));
        assert!(!is_plausible("ee"));
    }

    #[test]
    fn test_is_plausible_rejects_triple_runs() {
        assert!(!is_plausible("strap"));
        assert!(!is_plausible("beaut"));
        assert!(is_plausible("bread"));
    }

    #[test]
    fn test_matches_same_length() {
        assert!(matches("cat", "CVC"));
        assert!(!matches("cat", "VCV"));
    }

    #[test]
    fn test_matches_shorter_pattern() {
        // "CVCC" starts with "CVC"
        assert!(matches("cats", "CVC"));
        // "CCVC" ends with "CVC"
        assert!(matches("stop", "CVC"));
        // "VCVCV" contains "CVC"
        assert!(matches("abode", "CVC"));
        assert!(!matches("aeio", "CVC"));
    }

    #[test]
    fn test_matches_longer_pattern_is_asymmetric() {
        // "CV" is a prefix of "CVC"
        assert!(matches("ba", "CVC"));
        // "VC" is contained in "CVC" (and happens to be a suffix)
        assert!(matches("ab", "CVC"));
        // "VV" is neither prefix nor substring of "CVCV"
        assert!(!matches("ea", "CVCV"));
    }
}
