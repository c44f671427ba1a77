//! Single-word expansion phases: padding and leet-speak variants.

use std::collections::BTreeSet;

use seedforge_core::Alphabet;

use crate::tables::ExpansionTables;

pub(crate) fn repeat_char(ch: char, count: usize) -> String {
    std::iter::repeat(ch).take(count).collect()
}

/// Expand one word into every padded candidate of exactly `target_length`
/// characters.
///
/// The word is normalized first; words that normalize to empty or longer
/// than the target contribute nothing. The result is capped at `cap`
/// candidates, truncating in lexicographic order so the same inputs always
/// keep the same subset.
pub fn padded_combinations(
    word: &str,
    alphabet: &Alphabet,
    tables: &ExpansionTables,
    target_length: usize,
    cap: usize,
) -> BTreeSet<String> {
    let mut results = BTreeSet::new();
    let word = alphabet.normalize(word);

    if word.is_empty() || word.len() > target_length {
        return results;
    }
    if word.len() == target_length {
        results.insert(word);
        return results;
    }

    let needed = target_length - word.len();

    for token in tables.popular_numbers {
        if token.len() > needed {
            continue;
        }
        let remaining = needed - token.len();
        if remaining == 0 {
            results.insert(format!("{word}{token}"));
            results.insert(format!("{token}{word}"));
        } else {
            for filler in tables.pad_fillers {
                let fill = repeat_char(*filler, remaining);
                results.insert(format!("{word}{token}{fill}"));
                results.insert(format!("{token}{word}{fill}"));
            }
        }
    }

    // LOVE -> LOVEEEEE and LLLLLOVE
    if let (Some(first), Some(last)) = (word.chars().next(), word.chars().next_back()) {
        results.insert(format!("{word}{}", repeat_char(last, needed)));
        results.insert(format!("{}{word}", repeat_char(first, needed)));
    }

    for pad in tables.simple_pads {
        results.insert(format!("{word}{}", repeat_char(*pad, needed)));
    }

    if results.len() > cap {
        results = results.into_iter().take(cap).collect();
    }

    results
}

/// Leet-speak respellings of a word, one per applicable substitution.
///
/// A substitution applies when the mapped letter occurs in the word and the
/// replacement is itself in the alphabet; every occurrence is replaced.
pub fn leet_variants(word: &str, alphabet: &Alphabet, tables: &ExpansionTables) -> Vec<String> {
    let mut variants = Vec::new();
    for (letter, replacement) in tables.leet_map {
        if word.contains(*letter) && alphabet.contains(*replacement) {
            variants.push(word.replace(*letter, &replacement.to_string()));
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedforge_core::SEED_LENGTH;

    fn expand(word: &str) -> BTreeSet<String> {
        padded_combinations(
            word,
            &Alphabet::seed(),
            &ExpansionTables::default(),
            SEED_LENGTH,
            200,
        )
    }

    #[test]
    fn padding_fills_short_words_to_full_length() {
        let seeds = expand("GAME");
        assert!(seeds.contains("GAME1111"));
        assert!(seeds.contains("GAME9999"));
        assert!(seeds.contains("GAMEEEEE"));
        assert!(seeds.contains("GGGGGAME"));
        assert!(seeds.contains("GAME1337"));
        assert!(seeds.contains("1337GAME"));
        assert!(seeds.contains("GAMEQQQQ"));
        // token 666 leaves one slot for each filler
        assert!(seeds.contains("GAME666X"));
        assert!(seeds.contains("666GAMEZ"));
    }

    #[test]
    fn full_length_words_pass_through_unchanged() {
        let seeds = expand("OMEGALUL");
        assert_eq!(seeds.len(), 1);
        assert!(seeds.contains("OMEGALUL"));
    }

    #[test]
    fn overlong_and_empty_words_contribute_nothing() {
        assert!(expand("DISCHARGE").is_empty());
        assert!(expand("").is_empty());
        assert!(expand("!!!").is_empty());
    }

    #[test]
    fn normalization_happens_before_padding() {
        let seeds = expand("l0l");
        // '0' is stripped, leaving LL with six slots to fill.
        assert!(seeds.contains("LL666611"));
        assert!(seeds.contains("LL111111"));
        assert!(seeds.contains("69LL1111"));
    }

    #[test]
    fn every_padded_candidate_is_a_valid_seed() {
        let alphabet = Alphabet::seed();
        for seed in expand("WIN") {
            assert!(alphabet.is_valid_seed(&seed, SEED_LENGTH), "{seed}");
        }
    }

    #[test]
    fn cap_truncates_deterministically() {
        let word = "GG";
        let capped = padded_combinations(
            word,
            &Alphabet::seed(),
            &ExpansionTables::default(),
            SEED_LENGTH,
            10,
        );
        let full = expand(word);
        assert_eq!(capped.len(), 10);
        let expected: Vec<&String> = full.iter().take(10).collect();
        let got: Vec<&String> = capped.iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn leet_variants_skip_replacements_outside_the_alphabet() {
        let alphabet = Alphabet::seed();
        let tables = ExpansionTables::default();
        let variants = leet_variants("BOOST", &alphabet, &tables);
        // O -> 0 is suppressed; S -> 5, T -> 7 and B -> 8 apply.
        assert!(variants.contains(&"BOO5T".to_string()));
        assert!(variants.contains(&"BOOS7".to_string()));
        assert!(variants.contains(&"8OOST".to_string()));
        assert!(!variants.iter().any(|v| v.contains('0')));
    }

    #[test]
    fn leet_variants_replace_every_occurrence() {
        let alphabet = Alphabet::seed();
        let tables = ExpansionTables::default();
        let variants = leet_variants("TATTOO", &alphabet, &tables);
        assert!(variants.contains(&"7A77OO".to_string()));
        assert!(variants.contains(&"T4TTOO".to_string()));
    }
}
