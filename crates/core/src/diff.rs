//! Diff result types and structures

use crate::tokenizers::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an elementary edit operation produced by backtracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Token present in both documents
    Unchanged,
    /// Token present only in the original document
    Removed,
    /// Token present only in the revised document
    Added,
}

/// A single elementary edit: one token kept, removed, or added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOp {
    /// Kind of operation
    pub kind: EditKind,

    /// The token this operation applies to
    pub token: Token,
}

impl EditOp {
    pub fn unchanged(token: Token) -> Self {
        Self {
            kind: EditKind::Unchanged,
            token,
        }
    }

    pub fn removed(token: Token) -> Self {
        Self {
            kind: EditKind::Removed,
            token,
        }
    }

    pub fn added(token: Token) -> Self {
        Self {
            kind: EditKind::Added,
            token,
        }
    }
}

/// Kind of a public change record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Content was inserted
    Added,
    /// Content was deleted
    Removed,
    /// Content remained the same
    Unchanged,
    /// Content was replaced (a merged delete + insert)
    Changed,
}

/// A single reviewable change in the redline
///
/// `Added`/`Removed`/`Unchanged` records carry `content`; `Changed` records
/// carry `original_content` and `revised_content` instead. Field names on the
/// wire follow the rendering layer's contract (`type`, camelCase contents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    /// Kind of change
    #[serde(rename = "type")]
    pub kind: ChangeKind,

    /// Text for added/removed/unchanged records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Original-side text (for changed records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_content: Option<String>,

    /// Revised-side text (for changed records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_content: Option<String>,

    /// Position of this record in the change list
    pub index: usize,
}

impl Change {
    pub fn unchanged(content: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Unchanged,
            content: Some(content.into()),
            original_content: None,
            revised_content: None,
            index: 0,
        }
    }

    pub fn added(content: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Added,
            content: Some(content.into()),
            original_content: None,
            revised_content: None,
            index: 0,
        }
    }

    pub fn removed(content: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Removed,
            content: Some(content.into()),
            original_content: None,
            revised_content: None,
            index: 0,
        }
    }

    pub fn changed(original: impl Into<String>, revised: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Changed,
            content: None,
            original_content: Some(original.into()),
            revised_content: Some(revised.into()),
            index: 0,
        }
    }

    /// Get a human-readable description of this change
    pub fn description(&self) -> String {
        let empty = String::new();
        match self.kind {
            ChangeKind::Added => {
                format!("Added: \"{}\"", self.content.as_ref().unwrap_or(&empty))
            }
            ChangeKind::Removed => {
                format!("Removed: \"{}\"", self.content.as_ref().unwrap_or(&empty))
            }
            ChangeKind::Unchanged => {
                format!("Unchanged: \"{}\"", self.content.as_ref().unwrap_or(&empty))
            }
            ChangeKind::Changed => {
                format!(
                    "Changed: \"{}\" -> \"{}\"",
                    self.original_content.as_ref().unwrap_or(&empty),
                    self.revised_content.as_ref().unwrap_or(&empty)
                )
            }
        }
    }
}

/// Statistics about the redline
///
/// Counts records, not underlying tokens: a merged substitution block counts
/// once toward `substitutions` regardless of how many tokens it spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of added records
    pub additions: usize,

    /// Number of removed records
    pub deletions: usize,

    /// Number of changed (substitution) records
    pub substitutions: usize,

    /// Number of unchanged records
    pub unchanged: usize,
}

/// Complete result of comparing two document versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// All change records, in document order
    pub changes: Vec<Change>,

    /// Record counts by kind
    pub stats: DiffStats,
}

impl ComparisonResult {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
            stats: DiffStats::default(),
        }
    }

    /// Append a change record, assigning its index and updating the tally
    pub fn add_change(&mut self, mut change: Change) {
        change.index = self.changes.len();

        match change.kind {
            ChangeKind::Added => self.stats.additions += 1,
            ChangeKind::Removed => self.stats.deletions += 1,
            ChangeKind::Changed => self.stats.substitutions += 1,
            ChangeKind::Unchanged => self.stats.unchanged += 1,
        }

        self.changes.push(change);
    }

    /// Check whether the two documents were identical
    pub fn is_unchanged(&self) -> bool {
        self.changes
            .iter()
            .all(|c| c.kind == ChangeKind::Unchanged)
    }

    /// Get only the records that represent an edit (exclude unchanged)
    pub fn changed_blocks(&self) -> Vec<&Change> {
        self.changes
            .iter()
            .filter(|c| c.kind != ChangeKind::Unchanged)
            .collect()
    }

    /// Get a one-line summary of the redline
    pub fn summary(&self) -> String {
        format!(
            "Redline summary: {} additions, {} deletions, {} substitutions, {} unchanged",
            self.stats.additions,
            self.stats.deletions,
            self.stats.substitutions,
            self.stats.unchanged
        )
    }
}

impl Default for ComparisonResult {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Comparison Result ===")?;
        writeln!(f, "{}", self.summary())?;
        writeln!(f, "\nChanges:")?;

        for change in &self.changes {
            writeln!(f, "  {}. {}", change.index + 1, change.description())?;
        }

        Ok(())
    }
}
