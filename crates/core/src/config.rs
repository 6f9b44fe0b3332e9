//! Configuration for the diff engine

use crate::tokenizers::{default_abbreviations, Tokenizer};
use std::collections::BTreeSet;

/// Ratio above which an adjacent delete/insert pair is presented as one
/// substitution
pub const DEFAULT_SUBSTITUTION_RATIO: f64 = 0.5;

/// Configuration for redline computation
///
/// Built once, handed to the engine by value, and never mutated afterwards:
/// the engine stays a pure function of its inputs, so one configuration can
/// back any number of concurrent engines.
#[derive(Clone)]
pub struct DiffConfig {
    /// Length-ratio threshold (strict) for merging a delete/insert pair into
    /// a single substitution block
    pub substitution_ratio: f64,

    /// Abbreviations whose trailing period stays attached during tokenization
    pub abbreviations: BTreeSet<String>,

    /// Tokenizer override; the word tokenizer with `abbreviations` is used
    /// when unset
    pub tokenizer: Option<Box<dyn Tokenizer>>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            substitution_ratio: DEFAULT_SUBSTITUTION_RATIO,
            abbreviations: default_abbreviations(),
            tokenizer: None,
        }
    }

    /// Set the substitution-merge ratio threshold
    pub fn with_substitution_ratio(mut self, ratio: f64) -> Self {
        self.substitution_ratio = ratio;
        self
    }

    /// Replace the abbreviation set used by the default tokenizer
    pub fn with_abbreviations(mut self, abbreviations: BTreeSet<String>) -> Self {
        self.abbreviations = abbreviations;
        self
    }

    /// Set a custom tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }
}
