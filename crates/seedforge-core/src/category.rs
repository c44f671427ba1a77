use serde::{Deserialize, Serialize};

use crate::words;

/// A themed group of source words; each category produces one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, words: &[&str]) -> Self {
        Self {
            name: name.into(),
            words: words.iter().map(|word| (*word).to_string()).collect(),
        }
    }

    /// File name the category's wordlist is written to.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name)
    }
}

/// The built-in categories in their fixed processing order.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new("cool", words::COOL),
        Category::new("lol", words::LOL),
        Category::new("gross", words::GROSS),
        Category::new("nsfw", words::NSFW),
    ]
}
