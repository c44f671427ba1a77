use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use seedforge_core::{builtin_categories, Category, Error as CoreError};
use seedforge_generate::{GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

#[derive(Parser, Debug)]
#[command(name = "seedforge", version, about = "Seed wordlist generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand the built-in word lists into seed wordlist files.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output directory for the wordlist files.
    #[arg(long, default_value = "wordlists")]
    out_dir: PathBuf,
    /// Restrict the run to the named built-in categories.
    #[arg(long, value_name = "NAME")]
    category: Vec<String>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let categories = select_categories(&args.category)?;

    let options = GenerateOptions {
        out_dir: args.out_dir,
        ..GenerateOptions::default()
    };
    let engine = GenerationEngine::new(options);

    let result = engine.run_with_progress(&categories, |category| {
        println!("Generating {} seeds...", category.name);
    })?;

    tracing::info!(
        run_id = %result.report.run_id,
        total_seeds = result.report.total_seeds,
        out_dir = %result.out_dir.display(),
        "run finished"
    );

    for category in &result.report.categories {
        println!(
            "Generated {} {} seeds",
            category.seeds_generated, category.category
        );
    }
    println!("\nTotal seeds generated: {}", result.report.total_seeds);
    println!(
        "All seeds are exactly {} characters using only: {}",
        seedforge_core::SEED_LENGTH,
        seedforge_core::SEED_CHARS
    );

    Ok(())
}

fn select_categories(names: &[String]) -> Result<Vec<Category>, CoreError> {
    let all = builtin_categories();
    if names.is_empty() {
        return Ok(all);
    }

    let mut selected = Vec::new();
    for name in names {
        let category = all
            .iter()
            .find(|category| category.name == *name)
            .ok_or_else(|| CoreError::InvalidConfig(format!("unknown category '{name}'")))?;
        selected.push(category.clone());
    }
    Ok(selected)
}
