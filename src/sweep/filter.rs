//! Phonetic pattern filter - keeps only combinations worth checking

use std::fmt;
use std::str::FromStr;

use super::classifier::{is_plausible, matches};
use crate::error::{DomainSweepError, Result};

/// Preferred C/V signatures per combination length
const PREFERRED_PATTERNS: &[(usize, &[&str])] = &[
    (2, &["CV", "VC"]),
    (3, &["CVC", "VCV", "CVV"]),
    (4, &["CVCV", "CVVC", "VCVC", "CCVC"]),
    (5, &["CVCVC", "CVCCV", "VCVCV", "CCVCV"]),
    (6, &["CVCVCV", "CVCCVC", "VCVCVC", "CCVCVC"]),
    (7, &["CVCVCVC", "CVCCVCV", "VCVCVCV", "CCVCVCV"]),
];

/// Which combinations survive the filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PatternSpec {
    /// Built-in preferred signatures for the combination length
    #[default]
    Auto,
    /// No filtering at all
    None,
    /// Caller-supplied signatures, OR-combined
    Signatures(Vec<String>),
}

impl FromStr for PatternSpec {
    type Err = DomainSweepError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }

        let signatures: Vec<String> = trimmed
            .split(',')
            .map(|token| token.trim().to_uppercase())
            .filter(|token| !token.is_empty())
            .collect();

        if signatures.is_empty() {
            return Err(crate::validation_error!(
                "Pattern '{}' contains no signatures; use auto, none, or e.g. CVC,CVCV",
                s
            ));
        }

        if let Some(bad) = signatures
            .iter()
            .find(|sig| !sig.chars().all(|ch| ch == 'C' || ch == 'V'))
        {
            return Err(crate::validation_error!(
                "Pattern signature '{}' may only contain C and V",
                bad
            ));
        }

        Ok(Self::Signatures(signatures))
    }
}

impl fmt::Display for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSpec::Auto => write!(f, "auto"),
            PatternSpec::None => write!(f, "none"),
            PatternSpec::Signatures(sigs) => write!(f, "{}", sigs.join(",")),
        }
    }
}

/// Built-in preferred signatures for `length`; empty outside 2..=7.
pub fn resolve_patterns(length: usize) -> Vec<String> {
    PREFERRED_PATTERNS
        .iter()
        .find(|(len, _)| *len == length)
        .map(|(_, patterns)| patterns.iter().map(|p| p.to_string()).collect())
        .unwrap_or_default()
}

/// Signatures `spec` will actually test against, or `None` when only the
/// plausibility rule (or nothing) applies.
pub fn effective_signatures(spec: &PatternSpec, length: usize) -> Option<Vec<String>> {
    match spec {
        PatternSpec::None => None,
        PatternSpec::Auto => {
            let resolved = resolve_patterns(length);
            if resolved.is_empty() {
                None
            } else {
                Some(resolved)
            }
        }
        PatternSpec::Signatures(sigs) => Some(sigs.clone()),
    }
}

/// Whether a single combination passes `spec`.
pub fn accepts(word: &str, spec: &PatternSpec, signatures: Option<&[String]>) -> bool {
    match (spec, signatures) {
        (PatternSpec::None, _) => true,
        (_, Some(sigs)) => sigs.iter().any(|sig| matches(word, sig)) && is_plausible(word),
        (_, None) => is_plausible(word),
    }
}

/// Keep the combinations that pass `spec`, preserving input order.
///
/// `length` selects the built-in table for [`PatternSpec::Auto`]; when the
/// table has no entry, only the plausibility rule is applied.
pub fn filter<I>(combinations: I, spec: &PatternSpec, length: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    if *spec == PatternSpec::None {
        return combinations.into_iter().collect();
    }

    let signatures = effective_signatures(spec, length);
    if signatures.is_none() {
        tracing::debug!(length, "No preferred patterns for length, filtering by plausibility only");
    }

    combinations
        .into_iter()
        .filter(|word| accepts(word, spec, signatures.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::classifier::classify;
    use crate::sweep::generate;

    #[test]
    fn test_parse_pattern_spec() {
        assert_eq!("auto".parse::<PatternSpec>().unwrap(), PatternSpec::Auto);
        assert_eq!("NONE".parse::<PatternSpec>().unwrap(), PatternSpec::None);
        assert_eq!(
            "cvc, cvcv,".parse::<PatternSpec>().unwrap(),
            PatternSpec::Signatures(vec!["CVC".to_string(), "CVCV".to_string()])
        );
        assert!("CXC".parse::<PatternSpec>().is_err());
        assert!(" , ".parse::<PatternSpec>().is_err());
    }

    #[test]
    fn test_resolve_patterns() {
        assert_eq!(resolve_patterns(2), vec!["CV", "VC"]);
        assert_eq!(resolve_patterns(3), vec!["CVC", "VCV", "CVV"]);
        for length in 4..=7 {
            let patterns = resolve_patterns(length);
            assert!((3..=4).contains(&patterns.len()));
            assert!(patterns.iter().all(|p| p.len() == length));
        }
        assert!(resolve_patterns(1).is_empty());
        assert!(resolve_patterns(8).is_empty());
    }

    #[test]
    fn test_filter_none_is_identity() {
        let input: Vec<String> = generate(2).collect();
        let output = filter(input.clone(), &PatternSpec::None, 2);
        assert_eq!(output, input);
    }

    #[test]
    fn test_filter_auto_length_three() {
        let allowed = ["CVC", "VCV", "CVV"];
        let output = filter(generate(3), &PatternSpec::Auto, 3);

        assert!(!output.is_empty());
        for word in &output {
            assert!(allowed.iter().any(|a| *a == classify(word)), "{}", word);
            assert!(is_plausible(word));
        }
        assert!(output.contains(&"cat".to_string()));
        assert!(output.contains(&"bee".to_string()));
        assert!(!output.contains(&"abb".to_string()));
    }

    #[test]
    fn test_filter_auto_length_two() {
        let output = filter(generate(2), &PatternSpec::Auto, 2);
        assert!(output.contains(&"be".to_string()));
        assert!(output.contains(&"ab".to_string()));
        assert!(!output.contains(&"ee".to_string()));
        assert!(!output.contains(&"bb".to_string()));
        // 21 consonants * 5 vowels, both orders
        assert_eq!(output.len(), 2 * 21 * 5);
    }

    #[test]
    fn test_filter_auto_falls_back_to_plausibility() {
        let input = vec!["bab".to_string(), "aeiou".to_string(), "b".to_string()];
        let output = filter(input, &PatternSpec::Auto, 1);
        assert_eq!(output, vec!["bab".to_string()]);
    }

    #[test]
    fn test_filter_explicit_signatures_preserve_order() {
        let spec: PatternSpec = "vc,cv".parse().unwrap();
        let input = vec!["ba".to_string(), "ab".to_string(), "zz".to_string(), "ka".to_string()];
        let output = filter(input, &spec, 2);
        assert_eq!(output, vec!["ba", "ab", "ka"]);
    }
}
