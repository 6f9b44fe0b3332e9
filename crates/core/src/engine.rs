//! Main diff engine that orchestrates the comparison pipeline

use crate::algorithm::myers::MyersAlgorithm;
use crate::algorithm::DiffAlgorithm;
use crate::classifier::SubstitutionClassifier;
use crate::config::DiffConfig;
use crate::diff::ComparisonResult;
use crate::tokenizers::{Token, Tokenizer, WordTokenizer};
use tracing::debug;

/// The diff engine
///
/// Holds only immutable configuration: every call to [`DiffEngine::diff`] is
/// a pure function of its inputs, so one engine may serve any number of
/// threads or tasks without coordination.
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Create a diff engine with the default configuration
    pub fn default_config() -> Self {
        Self::new(DiffConfig::default())
    }

    /// Compute the redline between two document versions
    ///
    /// 1. Tokenize both inputs
    /// 2. Find the shortest edit script (Myers + backtracking)
    /// 3. Merge adjacent delete/insert runs into substitution blocks
    /// 4. Index the records and tally statistics
    pub fn diff(&self, original: &str, revised: &str) -> ComparisonResult {
        let original_tokens = self.tokenize(original);
        let revised_tokens = self.tokenize(revised);
        debug!(
            original_tokens = original_tokens.len(),
            revised_tokens = revised_tokens.len(),
            "tokenized inputs"
        );

        let ops = MyersAlgorithm::new().compute(&original_tokens, &revised_tokens);
        debug!(ops = ops.len(), "computed elementary edit script");

        let classifier = SubstitutionClassifier::new(self.config.substitution_ratio);

        let mut result = ComparisonResult::new();
        for record in classifier.classify(&ops) {
            result.add_change(record);
        }
        debug!(
            changes = result.changes.len(),
            substitutions = result.stats.substitutions,
            "assembled comparison result"
        );

        result
    }

    /// Like [`DiffEngine::diff`], treating a missing document as empty
    pub fn diff_opt(&self, original: Option<&str>, revised: Option<&str>) -> ComparisonResult {
        self.diff(original.unwrap_or(""), revised.unwrap_or(""))
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        match &self.config.tokenizer {
            Some(tokenizer) => tokenizer.tokenize(text),
            None => WordTokenizer::new()
                .with_abbreviations(self.config.abbreviations.clone())
                .tokenize(text),
        }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::default_config()
    }
}
