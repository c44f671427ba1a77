use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use seedforge_core::{Alphabet, Category};

use crate::errors::GenerationError;
use crate::expand::{leet_variants, padded_combinations, repeat_char};
use crate::model::{CategoryReport, GenerateOptions, GenerationReport};
use crate::output::write_wordlist;
use crate::tables::ExpansionTables;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for expanding categories into wordlist files.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    tables: ExpansionTables,
    alphabet: Alphabet,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self::with_tables(options, ExpansionTables::default())
    }

    pub fn with_tables(options: GenerateOptions, tables: ExpansionTables) -> Self {
        Self {
            options,
            tables,
            alphabet: Alphabet::seed(),
        }
    }

    /// Expand every category and write one wordlist file per category plus
    /// a `generation_report.json` into the output directory.
    pub fn run(&self, categories: &[Category]) -> Result<GenerationResult, GenerationError> {
        self.run_with_progress(categories, |_| {})
    }

    /// Like [`run`](Self::run), invoking `progress` with each category right
    /// before it is expanded.
    pub fn run_with_progress<F>(
        &self,
        categories: &[Category],
        mut progress: F,
    ) -> Result<GenerationResult, GenerationError>
    where
        F: FnMut(&Category),
    {
        if self.options.target_length == 0 {
            return Err(GenerationError::InvalidConfig(
                "target_length must be positive".to_string(),
            ));
        }
        if self.options.per_word_cap == 0 {
            return Err(GenerationError::InvalidConfig(
                "per_word_cap must be positive".to_string(),
            ));
        }

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let out_dir = self.options.out_dir.clone();
        std::fs::create_dir_all(&out_dir)?;

        let mut report = GenerationReport::new(run_id.clone(), started_at);

        info!(
            run_id = %run_id,
            categories = categories.len(),
            out_dir = %out_dir.display(),
            "generation started"
        );

        for category in categories {
            progress(category);
            info!(
                category = %category.name,
                words = category.words.len(),
                "generating seeds"
            );

            let seeds = self.expand_category(category);
            let path = out_dir.join(category.file_name());
            let bytes_written = write_wordlist(&path, &seeds)?;

            info!(
                category = %category.name,
                seeds = seeds.len(),
                path = %path.display(),
                "category written"
            );

            report.record_category(CategoryReport {
                category: category.name.clone(),
                file: category.file_name(),
                words_in: category.words.len() as u64,
                seeds_generated: seeds.len() as u64,
                bytes_written,
            });
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        let report_path = out_dir.join("generation_report.json");
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            run_id = %run_id,
            total_seeds = report.total_seeds,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { out_dir, report })
    }

    /// Union of all expansion phases for one category, deduplicated and
    /// lexicographically ordered by construction.
    pub fn expand_category(&self, category: &Category) -> BTreeSet<String> {
        let target = self.options.target_length;
        let mut seeds = BTreeSet::new();

        // Padding plus leet variants, word by word.
        for word in &category.words {
            if word.len() > target {
                continue;
            }
            seeds.extend(self.padded(word));
            for variant in leet_variants(word, &self.alphabet, &self.tables) {
                seeds.extend(self.padded(&variant));
            }
        }

        // Full-length numeric patterns, validated against the alphabet.
        for pattern in self.tables.number_patterns {
            if self.alphabet.is_valid_seed(pattern, target) {
                seeds.insert((*pattern).to_string());
            }
        }

        // Pairwise combinations over the leading words only, to bound the
        // combinatorial space.
        let limit = self.options.pair_word_limit;
        for first in category.words.iter().take(limit) {
            for second in category.words.iter().take(limit) {
                if first.len() + second.len() > target {
                    continue;
                }
                let combined = format!("{first}{second}");
                if combined.len() == target {
                    seeds.insert(combined);
                } else {
                    seeds.extend(self.padded(&combined));
                }
            }
        }

        // Word plus short popular number, four fixed arrangements each.
        for word in &category.words {
            for token in self.tables.word_number_tokens {
                if word.len() + token.len() > target {
                    continue;
                }
                let slack = target - word.len() - token.len();
                seeds.insert(format!("{word}{token}{}", repeat_char('1', slack)));
                seeds.insert(format!("{token}{word}{}", repeat_char('1', slack)));
                seeds.insert(format!("{word}{token}{}", repeat_char('X', slack)));
                seeds.insert(format!("{token}{word}{}", repeat_char('Z', slack)));
            }
        }

        // Phases feed raw concatenations in; keep only real seeds.
        seeds.retain(|seed| self.alphabet.is_valid_seed(seed, target));
        seeds
    }

    fn padded(&self, word: &str) -> BTreeSet<String> {
        padded_combinations(
            word,
            &self.alphabet,
            &self.tables,
            self.options.target_length,
            self.options.per_word_cap,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedforge_core::SEED_LENGTH;

    fn engine() -> GenerationEngine {
        GenerationEngine::new(GenerateOptions::default())
    }

    fn category(words: &[&str]) -> Category {
        Category::new("test", words)
    }

    #[test]
    fn number_patterns_appear_in_every_category() {
        let seeds = engine().expand_category(&category(&["GAME"]));
        assert!(seeds.contains("69696969"));
        assert!(seeds.contains("13371337"));
        assert!(seeds.contains("42429999"));
    }

    #[test]
    fn pairwise_combinations_fit_or_are_padded() {
        let seeds = engine().expand_category(&category(&["GAME", "OVER"]));
        // GAME + OVER is exactly eight characters.
        assert!(seeds.contains("GAMEOVER"));
        assert!(seeds.contains("OVERGAME"));
        // WIN-sized pairs would be padded instead; GAME+GAME also fits.
        assert!(seeds.contains("GAMEGAME"));
    }

    #[test]
    fn short_pairs_are_padded_to_full_length() {
        let seeds = engine().expand_category(&category(&["GG", "EZ"]));
        assert!(seeds.contains("GGEZ1111"));
        assert!(seeds.contains("GGEZZZZZ"));
    }

    #[test]
    fn word_number_phase_produces_four_arrangements() {
        let seeds = engine().expand_category(&category(&["HYPE"]));
        assert!(seeds.contains("HYPE6911"));
        assert!(seeds.contains("69HYPE11"));
        assert!(seeds.contains("HYPE69XX"));
        assert!(seeds.contains("69HYPEZZ"));
    }

    #[test]
    fn overlong_words_are_skipped_entirely() {
        let seeds = engine().expand_category(&category(&["DISCHARGE"]));
        // Only the unconditional numeric patterns remain.
        for seed in &seeds {
            assert!(seed.chars().all(|ch| ch.is_ascii_digit()), "{seed}");
        }
    }

    #[test]
    fn every_seed_is_valid_sorted_and_unique() {
        let alphabet = Alphabet::seed();
        let seeds = engine().expand_category(&category(&["GAME", "LOL", "EZ"]));
        assert!(!seeds.is_empty());
        for seed in &seeds {
            assert!(alphabet.is_valid_seed(seed, SEED_LENGTH), "{seed}");
        }
    }

    #[test]
    fn progress_fires_once_per_category_in_order() {
        let out_dir = std::env::temp_dir().join(format!(
            "seedforge_progress_{}",
            uuid::Uuid::new_v4()
        ));
        let options = GenerateOptions {
            out_dir: out_dir.clone(),
            ..GenerateOptions::default()
        };
        let engine = GenerationEngine::new(options);
        let categories = [category(&["GG"]), Category::new("second", &["EZ"])];

        let mut seen = Vec::new();
        engine
            .run_with_progress(&categories, |category| seen.push(category.name.clone()))
            .expect("run generation");

        assert_eq!(seen, ["test", "second"]);
        std::fs::remove_dir_all(&out_dir).ok();
    }

    #[test]
    fn zero_target_length_is_rejected() {
        let options = GenerateOptions {
            target_length: 0,
            ..GenerateOptions::default()
        };
        let engine = GenerationEngine::new(options);
        let err = engine.run(&[]).expect_err("must reject");
        assert!(matches!(err, GenerationError::InvalidConfig(_)));
    }
}
