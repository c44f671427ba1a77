/// The 35 characters a seed may contain: digits 1-9 and A-Z.
///
/// The digit `0` is not part of the seed space and is excluded on purpose.
pub const SEED_CHARS: &str = "123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered character set every candidate seed is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    chars: &'static str,
}

impl Alphabet {
    /// The canonical seed alphabet.
    pub const fn seed() -> Self {
        Self { chars: SEED_CHARS }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(ch)
    }

    /// Uppercase a word and strip every character outside the alphabet.
    pub fn normalize(&self, word: &str) -> String {
        word.to_uppercase()
            .chars()
            .filter(|ch| self.contains(*ch))
            .collect()
    }

    /// A candidate is a seed when it has exactly `length` characters, all of
    /// them members of the alphabet.
    pub fn is_valid_seed(&self, candidate: &str, length: usize) -> bool {
        candidate.chars().count() == length && candidate.chars().all(|ch| self.contains(ch))
    }

    pub fn as_str(&self) -> &'static str {
        self.chars
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_alphabet_has_35_chars_and_no_zero() {
        let alphabet = Alphabet::seed();
        assert_eq!(alphabet.as_str().chars().count(), 35);
        assert!(!alphabet.contains('0'));
        assert!(alphabet.contains('1'));
        assert!(alphabet.contains('9'));
        assert!(alphabet.contains('A'));
        assert!(alphabet.contains('Z'));
    }

    #[test]
    fn normalize_uppercases_and_strips() {
        let alphabet = Alphabet::seed();
        assert_eq!(alphabet.normalize("g4me!"), "G4ME");
        assert_eq!(alphabet.normalize("l0l"), "LL");
        assert_eq!(alphabet.normalize("***"), "");
    }

    #[test]
    fn valid_seed_requires_exact_length_and_membership() {
        let alphabet = Alphabet::seed();
        assert!(alphabet.is_valid_seed("GAME1111", 8));
        assert!(!alphabet.is_valid_seed("GAME111", 8));
        assert!(!alphabet.is_valid_seed("GAME0111", 8));
        assert!(!alphabet.is_valid_seed("game1111", 8));
    }
}
