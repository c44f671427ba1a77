//! Fixed expansion tables consumed by the generation phases.
//!
//! The tables are plain data passed explicitly into the engine, so a caller
//! can substitute smaller ones in tests. None of the tokens contain `0`,
//! which is outside the seed alphabet.

/// Popular padding tokens tried before and after a word.
pub const POPULAR_NUMBERS: &[&str] = &[
    "69", "42", "666", "777", "888", "999", "123", "321", "111", "222", "333", "444", "555",
    "1337", "9999", "8888", "7777", "1234", "4321", "2222", "3333", "4444", "5555", "6666", "1111",
];

/// Fillers used to close remaining slack around a padding token.
pub const PAD_FILLERS: &[char] = &['1', '9', 'X', 'Z'];

/// Single characters repeated to pad a bare word to full length.
pub const SIMPLE_PADS: &[char] = &['1', '2', '3', '4', '5', '6', '7', '8', '9', 'X', 'Z', 'Q'];

/// Leet-speak substitutions. Entries whose replacement falls outside the
/// alphabet (`O` maps to `0`) are kept for completeness and skipped at
/// expansion time.
pub const LEET_MAP: &[(char, char)] = &[
    ('A', '4'),
    ('E', '3'),
    ('I', '1'),
    ('O', '0'),
    ('S', '5'),
    ('T', '7'),
    ('G', '6'),
    ('B', '8'),
    ('L', '1'),
];

/// Full-length numeric patterns added to every category unconditionally.
pub const NUMBER_PATTERNS: &[&str] = &[
    "69696969", "42424242", "66666666", "77777777", "88888888", "99999999",
    "12345678", "87654321", "11111111", "22222222", "33333333", "44444444",
    "55555555", "13371337", "42694269", "69426942", "11223344", "44332211",
    "12121212", "21212121", "13131313", "31313131", "14141414", "41414141",
    "69696942", "42424269", "69694242", "42426969", "13376969", "69691337",
    "42421337", "13374242", "66669999", "99996666", "77778888", "88887777",
    "12344321", "43211234", "11119999", "99991111", "66664242", "42426666",
    "69997777", "77776999", "88884242", "42428888", "99994242", "42429999",
];

/// Short popular numbers combined with every word in the final phase.
pub const WORD_NUMBER_TOKENS: &[&str] =
    &["69", "42", "666", "777", "888", "999", "123", "321", "111"];

/// Immutable table set driving the expansion phases.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionTables {
    pub popular_numbers: &'static [&'static str],
    pub pad_fillers: &'static [char],
    pub simple_pads: &'static [char],
    pub leet_map: &'static [(char, char)],
    pub number_patterns: &'static [&'static str],
    pub word_number_tokens: &'static [&'static str],
}

impl Default for ExpansionTables {
    fn default() -> Self {
        Self {
            popular_numbers: POPULAR_NUMBERS,
            pad_fillers: PAD_FILLERS,
            simple_pads: SIMPLE_PADS,
            leet_map: LEET_MAP,
            number_patterns: NUMBER_PATTERNS,
            word_number_tokens: WORD_NUMBER_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedforge_core::{Alphabet, SEED_LENGTH};

    #[test]
    fn padding_tokens_stay_inside_the_alphabet() {
        let alphabet = Alphabet::seed();
        for token in POPULAR_NUMBERS.iter().chain(WORD_NUMBER_TOKENS) {
            assert!(token.chars().all(|ch| alphabet.contains(ch)), "{token}");
            assert!(token.len() < SEED_LENGTH);
        }
        for ch in PAD_FILLERS.iter().chain(SIMPLE_PADS) {
            assert!(alphabet.contains(*ch));
        }
    }

    #[test]
    fn number_patterns_are_full_length_seeds() {
        let alphabet = Alphabet::seed();
        for pattern in NUMBER_PATTERNS {
            assert!(
                alphabet.is_valid_seed(pattern, SEED_LENGTH),
                "{pattern} is not a valid seed"
            );
        }
    }
}
