// Grammars: the rep-data encodings the exporter produces, and the dispatch
// that turns one rep-data string into reps.

use crate::error::{ConvertError, Result};
use crate::lexer::{lex, RepToken};
use crate::session::Rep;

/// The closed set of rep-data encodings.
///
/// Each variant recognizes exactly one textual shape over the whole token
/// sequence. The shapes are mutually exclusive, so the dispatch order in
/// [`parse_rep_data`] does not affect which variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepGrammar {
    /// `3 sets: 15 rep 45 kg` (trailing weight optional)
    UniformSets,
    /// `3×45 kg, 2×50 kg`
    PerSetWeights,
    /// `45 kg: 15, 12, 10 rep`
    SharedWeight,
    /// `15, 12, 10 rep`
    Bodyweight,
    /// `3 rep: 45, 50, 55 kg`
    SharedCount,
}

impl RepGrammar {
    pub const ALL: [RepGrammar; 5] = [
        RepGrammar::UniformSets,
        RepGrammar::PerSetWeights,
        RepGrammar::SharedWeight,
        RepGrammar::Bodyweight,
        RepGrammar::SharedCount,
    ];

    /// Structural check: does the token sequence have this variant's shape?
    ///
    /// Purely structural, no value validation: any magnitude passes, zero
    /// and non-integer numbers included.
    pub fn matches(&self, tokens: &[RepToken]) -> bool {
        match self {
            RepGrammar::UniformSets => capture_uniform(tokens).is_some(),
            RepGrammar::PerSetWeights => capture_per_set(tokens).is_some(),
            RepGrammar::SharedWeight => capture_shared_weight(tokens).is_some(),
            RepGrammar::Bodyweight => capture_bodyweight(tokens).is_some(),
            RepGrammar::SharedCount => capture_shared_count(tokens).is_some(),
        }
    }

    /// Parse the token sequence into reps.
    ///
    /// Returns the empty rep list when the tokens do not have this variant's
    /// shape. `text` is only used to name the source in errors.
    pub fn parse(&self, tokens: &[RepToken], text: &str) -> Result<Vec<Rep>> {
        match self {
            RepGrammar::UniformSets => {
                let Some((sets, count, weight_tok)) = capture_uniform(tokens) else {
                    return Ok(Vec::new());
                };
                let sets = parse_count(sets, text)?;
                let rep = Rep::new(
                    parse_count(count, text)?,
                    weight_tok.map(parse_weight).unwrap_or(0.0),
                );
                Ok(vec![rep; sets as usize])
            }
            RepGrammar::PerSetWeights => {
                let Some(entries) = capture_per_set(tokens) else {
                    return Ok(Vec::new());
                };
                entries
                    .into_iter()
                    .map(|(count, weight)| {
                        Ok(Rep::new(parse_count(count, text)?, parse_weight(weight)))
                    })
                    .collect()
            }
            RepGrammar::SharedWeight => {
                let Some((weight, counts)) = capture_shared_weight(tokens) else {
                    return Ok(Vec::new());
                };
                let weight = parse_weight(weight);
                counts
                    .into_iter()
                    .map(|count| Ok(Rep::new(parse_count(count, text)?, weight)))
                    .collect()
            }
            RepGrammar::Bodyweight => {
                let Some(counts) = capture_bodyweight(tokens) else {
                    return Ok(Vec::new());
                };
                counts
                    .into_iter()
                    .map(|count| Ok(Rep::bodyweight(parse_count(count, text)?)))
                    .collect()
            }
            RepGrammar::SharedCount => {
                let Some((count, weights)) = capture_shared_count(tokens) else {
                    return Ok(Vec::new());
                };
                let count = parse_count(count, text)?;
                Ok(weights
                    .into_iter()
                    .map(|weight| Rep::new(count, parse_weight(weight)))
                    .collect())
            }
        }
    }
}

/// Parse one rep-data string into reps.
///
/// Tries every grammar in turn. Text that lexes but matches no grammar, or
/// does not lex at all, degrades to an empty rep list with a warning; a
/// malformed count inside a matched shape is a hard error.
pub fn parse_rep_data(text: &str) -> Result<Vec<Rep>> {
    if let Some(tokens) = lex(text) {
        for grammar in RepGrammar::ALL {
            if grammar.matches(&tokens) {
                return grammar.parse(&tokens, text);
            }
        }
    }

    eprintln!("Warning: unrecognized rep data: {text:?}");
    Ok(Vec::new())
}

/// `N sets: R rep` with an optional `W kg` tail.
fn capture_uniform(tokens: &[RepToken]) -> Option<(&str, &str, Option<&str>)> {
    match tokens {
        [RepToken::Number(sets), RepToken::Sets, RepToken::Colon, RepToken::Number(count), RepToken::Rep] => {
            Some((sets, count, None))
        }
        [RepToken::Number(sets), RepToken::Sets, RepToken::Colon, RepToken::Number(count), RepToken::Rep, RepToken::Number(weight), RepToken::Kg] => {
            Some((sets, count, Some(weight)))
        }
        _ => None,
    }
}

/// `C×W kg` entries separated by commas.
fn capture_per_set(tokens: &[RepToken]) -> Option<Vec<(&str, &str)>> {
    let mut entries = Vec::new();
    let mut rest = tokens;
    loop {
        match rest {
            [RepToken::Number(count), RepToken::Times, RepToken::Number(weight), RepToken::Kg, tail @ ..] => {
                entries.push((count.as_str(), weight.as_str()));
                match tail {
                    [] => return Some(entries),
                    [RepToken::Comma, tail @ ..] => rest = tail,
                    _ => return None,
                }
            }
            _ => return None,
        }
    }
}

/// `W kg: C, C, ... rep`
fn capture_shared_weight(tokens: &[RepToken]) -> Option<(&str, Vec<&str>)> {
    match tokens {
        [RepToken::Number(weight), RepToken::Kg, RepToken::Colon, tail @ ..] => {
            let (counts, rest) = capture_number_list(tail)?;
            matches!(rest, [RepToken::Rep]).then_some((weight.as_str(), counts))
        }
        _ => None,
    }
}

/// `C, C, ... rep`
fn capture_bodyweight(tokens: &[RepToken]) -> Option<Vec<&str>> {
    let (counts, rest) = capture_number_list(tokens)?;
    matches!(rest, [RepToken::Rep]).then_some(counts)
}

/// `R rep: W, W, ... kg`
fn capture_shared_count(tokens: &[RepToken]) -> Option<(&str, Vec<&str>)> {
    match tokens {
        [RepToken::Number(count), RepToken::Rep, RepToken::Colon, tail @ ..] => {
            let (weights, rest) = capture_number_list(tail)?;
            matches!(rest, [RepToken::Kg]).then_some((count.as_str(), weights))
        }
        _ => None,
    }
}

/// Longest `N, N, ...` prefix; returns the numbers and the unconsumed tail.
fn capture_number_list(tokens: &[RepToken]) -> Option<(Vec<&str>, &[RepToken])> {
    let mut numbers = Vec::new();
    let mut rest = tokens;
    loop {
        match rest {
            [RepToken::Number(n), RepToken::Comma, tail @ ..] => {
                numbers.push(n.as_str());
                rest = tail;
            }
            [RepToken::Number(n), tail @ ..] => {
                numbers.push(n.as_str());
                return Some((numbers, tail));
            }
            _ => return None,
        }
    }
}

fn parse_count(token: &str, text: &str) -> Result<u32> {
    token.parse().map_err(|_| ConvertError::InvalidCount {
        token: token.to_owned(),
        text: text.to_owned(),
    })
}

/// Weight junk degrades to 0 instead of failing the run, unlike counts.
fn parse_weight(token: &str) -> f32 {
    token.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sets() {
        assert_eq!(
            parse_rep_data("3 sets: 15 rep 45 kg").unwrap(),
            vec![Rep::new(15, 45.0); 3]
        );
    }

    #[test]
    fn test_uniform_sets_without_weight() {
        assert_eq!(
            parse_rep_data("2 sets: 12 rep").unwrap(),
            vec![Rep::bodyweight(12); 2]
        );
    }

    #[test]
    fn test_uniform_sets_zero_sets() {
        assert_eq!(parse_rep_data("0 sets: 10 rep 20 kg").unwrap(), Vec::new());
    }

    #[test]
    fn test_per_set_weights() {
        assert_eq!(
            parse_rep_data("3×45 kg, 2×50 kg").unwrap(),
            vec![Rep::new(3, 45.0), Rep::new(2, 50.0)]
        );
    }

    #[test]
    fn test_shared_weight() {
        assert_eq!(
            parse_rep_data("45 kg: 15, 12, 10 rep").unwrap(),
            vec![Rep::new(15, 45.0), Rep::new(12, 45.0), Rep::new(10, 45.0)]
        );
    }

    #[test]
    fn test_bodyweight() {
        assert_eq!(
            parse_rep_data("15, 12, 10 rep").unwrap(),
            vec![Rep::bodyweight(15), Rep::bodyweight(12), Rep::bodyweight(10)]
        );
    }

    #[test]
    fn test_shared_count() {
        assert_eq!(
            parse_rep_data("3 rep: 45, 50, 55 kg").unwrap(),
            vec![Rep::new(3, 45.0), Rep::new(3, 50.0), Rep::new(3, 55.0)]
        );
    }

    #[test]
    fn test_fractional_weights() {
        assert_eq!(
            parse_rep_data("7.5 kg: 16 rep").unwrap(),
            vec![Rep::new(16, 7.5)]
        );
    }

    #[test]
    fn test_unrecognized_degrades_to_empty() {
        assert_eq!(parse_rep_data("ran 5 km").unwrap(), Vec::new());
        assert_eq!(parse_rep_data("").unwrap(), Vec::new());
        assert_eq!(parse_rep_data("15, rep").unwrap(), Vec::new());
    }

    #[test]
    fn test_malformed_count_is_fatal() {
        let err = parse_rep_data("1.5, 10 rep").unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidCount {
                token: "1.5".to_owned(),
                text: "1.5, 10 rep".to_owned(),
            }
        );
    }

    #[test]
    fn test_malformed_weight_degrades_to_zero() {
        assert_eq!(
            parse_rep_data("3×4.5.6 kg").unwrap(),
            vec![Rep::new(3, 0.0)]
        );
    }

    #[test]
    fn test_shapes_are_exclusive() {
        let tokens = lex("45 kg: 15, 12 rep").unwrap();
        let matching: Vec<_> = RepGrammar::ALL
            .into_iter()
            .filter(|g| g.matches(&tokens))
            .collect();
        assert_eq!(matching, vec![RepGrammar::SharedWeight]);
    }

    #[test]
    fn test_trailing_garbage_does_not_match() {
        assert_eq!(
            parse_rep_data("3 sets: 15 rep 45 kg and then some").unwrap(),
            Vec::new()
        );
    }
}
