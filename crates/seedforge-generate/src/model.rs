use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use seedforge_core::SEED_LENGTH;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory the wordlist files and run report are written to.
    pub out_dir: PathBuf,
    /// Exact length of every emitted seed.
    pub target_length: usize,
    /// Maximum candidates kept from a single padding expansion.
    pub per_word_cap: usize,
    /// How many leading words of a category feed the pairwise phase.
    pub pair_word_limit: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("wordlists"),
            target_length: SEED_LENGTH,
            per_word_cap: 200,
            pair_word_limit: 50,
        }
    }
}

/// Summary of one generated category file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: String,
    pub file: String,
    pub words_in: u64,
    pub seeds_generated: u64,
    pub bytes_written: u64,
}

/// Report for a generation run, written as `generation_report.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub categories: Vec<CategoryReport>,
    pub total_seeds: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, started_at: String) -> Self {
        Self {
            run_id,
            started_at,
            categories: Vec::new(),
            total_seeds: 0,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_category(&mut self, category: CategoryReport) {
        self.total_seeds += category.seeds_generated;
        self.bytes_written += category.bytes_written;
        self.categories.push(category);
    }
}
