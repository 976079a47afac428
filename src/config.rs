//! Datasets fed to the demonstration binary.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! reproduces the stock demonstration. A file only needs the fields it overrides:
//!
//! ```toml
//! min_input = [7, 3, 9]
//! https_prefix = "https://"
//!
//! [[fruit_rank]]
//! rank = 1
//! name = "cherry"
//! ```

use itertools::Itertools;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("fruit_rank lists rank {rank} more than once")]
    DuplicateRank { rank: i64 },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FruitRank {
    pub rank: i64,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default = "default_min_input")]
    pub min_input: Vec<i64>,

    #[serde(default = "default_max_input")]
    pub max_input: Vec<f64>,

    #[serde(default = "default_vegetables")]
    pub vegetables: Vec<String>,

    #[serde(default = "default_fruit_rank")]
    pub fruit_rank: Vec<FruitRank>,

    #[serde(default = "default_float_sort")]
    pub float_sort: Vec<f64>,

    #[serde(default = "default_string_sort")]
    pub string_sort: Vec<String>,

    #[serde(default = "default_int_sort")]
    pub int_sort: Vec<i64>,

    #[serde(default = "default_websites")]
    pub websites: Vec<String>,

    #[serde(default = "default_https_prefix")]
    pub https_prefix: String,

    #[serde(default = "default_numbers_to_filter")]
    pub numbers_to_filter: Vec<i64>,

    #[serde(default = "default_numbers_to_map")]
    pub numbers_to_map: Vec<f64>,

    #[serde(default = "default_words")]
    pub words: Vec<String>,

    #[serde(default = "default_contains_strings")]
    pub contains_strings: Vec<String>,

    #[serde(default = "default_contains_needle")]
    pub contains_needle: String,

    #[serde(default = "default_contains_ints")]
    pub contains_ints: Vec<i64>,

    #[serde(default = "default_contains_int_needles")]
    pub contains_int_needles: Vec<i64>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_min_input() -> Vec<i64> {
    vec![10, 2, 4, 1, 6, 8, 2]
}

fn default_max_input() -> Vec<f64> {
    vec![3.2, 5.1, 6.2, 7.6, 8.2, 1.5, 4.8]
}

fn default_vegetables() -> Vec<String> {
    strings(&["potato", "cabbage", "carrot"])
}

fn default_fruit_rank() -> Vec<FruitRank> {
    [(1, "strawberry"), (2, "raspberry"), (3, "blueberry")]
        .into_iter()
        .map(|(rank, name)| FruitRank {
            rank,
            name: name.to_string(),
        })
        .collect()
}

fn default_float_sort() -> Vec<f64> {
    vec![2.3, 1.2, 0.2, 51.2]
}

fn default_string_sort() -> Vec<String> {
    strings(&["z", "a", "b"])
}

fn default_int_sort() -> Vec<i64> {
    vec![0, 3, 2, 1, 6]
}

fn default_websites() -> Vec<String> {
    strings(&["http://foo.com", "https://bar.com", "https://gosamples.dev"])
}

fn default_https_prefix() -> String {
    "https://".to_string()
}

fn default_numbers_to_filter() -> Vec<i64> {
    vec![1, 2, 3, 4, 5, 6]
}

fn default_numbers_to_map() -> Vec<f64> {
    vec![4.0, 9.0, 16.0, 25.0]
}

fn default_words() -> Vec<String> {
    strings(&["a", "b", "c", "d"])
}

fn default_contains_strings() -> Vec<String> {
    strings(&["a", "b", "c"])
}

fn default_contains_needle() -> String {
    "b".to_string()
}

fn default_contains_ints() -> Vec<i64> {
    vec![1, 2, 3]
}

fn default_contains_int_needles() -> Vec<i64> {
    vec![2, 10]
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            min_input: default_min_input(),
            max_input: default_max_input(),
            vegetables: default_vegetables(),
            fruit_rank: default_fruit_rank(),
            float_sort: default_float_sort(),
            string_sort: default_string_sort(),
            int_sort: default_int_sort(),
            websites: default_websites(),
            https_prefix: default_https_prefix(),
            numbers_to_filter: default_numbers_to_filter(),
            numbers_to_map: default_numbers_to_map(),
            words: default_words(),
            contains_strings: default_contains_strings(),
            contains_needle: default_contains_needle(),
            contains_ints: default_contains_ints(),
            contains_int_needles: default_contains_int_needles(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Ranks become map keys in the demo, so each one must be unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.fruit_rank.iter().map(|f| f.rank).duplicates().next() {
            Some(rank) => Err(ConfigError::DuplicateRank { rank }),
            None => Ok(()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
