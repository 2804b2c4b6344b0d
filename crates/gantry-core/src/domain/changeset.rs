//! Pending file revisions and their display-oriented change sets.

use std::collections::HashSet;
use std::path::PathBuf;

/// A proposed rewrite of one file.
///
/// Exists transiently between insertion resolution and the write commit;
/// discarded after the write or the abort. Holding both versions in memory
/// is fine — entry files in scaffolded projects are small.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRevision {
    pub path: PathBuf,
    pub original: String,
    pub proposed: String,
}

impl FileRevision {
    pub fn new(path: impl Into<PathBuf>, original: impl Into<String>, proposed: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            original: original.into(),
            proposed: proposed.into(),
        }
    }

    /// The added-lines view of this revision, for preview display.
    pub fn changes(&self) -> ChangeSet {
        ChangeSet::between(&self.original, &self.proposed)
    }
}

/// Ordered "added lines" derived from a revision.
///
/// Computed as a set-difference: every line of the proposed content that is
/// absent from the *entire* original line set, in proposed order. This is
/// deliberately not an LCS diff — a reordering of unchanged lines would be
/// misreported as additions. That approximation is part of the documented
/// preview behavior and is preserved as-is; do not silently upgrade it to a
/// real diff algorithm, since that would change user-visible output.
///
/// Used only for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeSet {
    pub added: Vec<String>,
}

impl ChangeSet {
    pub fn between(original: &str, proposed: &str) -> Self {
        let original_lines: HashSet<&str> = original.lines().collect();
        let added = proposed
            .lines()
            .filter(|line| !original_lines.contains(line))
            .map(str::to_string)
            .collect();
        Self { added }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additions_appear_in_proposed_order() {
        let original = "a\nb\nc\n";
        let proposed = "a\nx\nb\ny\nc\n";
        let changes = ChangeSet::between(original, proposed);
        assert_eq!(changes.added, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn unchanged_lines_are_never_reported() {
        let original = "a\nb\n";
        let proposed = "a\nb\nnew\n";
        let changes = ChangeSet::between(original, proposed);
        assert!(!changes.added.iter().any(|l| l == "a" || l == "b"));
        assert_eq!(changes.added, vec!["new".to_string()]);
    }

    #[test]
    fn identical_contents_produce_empty_set() {
        let content = "a\nb\n";
        assert!(ChangeSet::between(content, content).is_empty());
    }

    #[test]
    fn duplicate_of_existing_line_is_not_an_addition() {
        // Containment is checked against the whole original line set, so a
        // second copy of an existing line is invisible to the preview.
        let changes = ChangeSet::between("a\n", "a\na\n");
        assert!(changes.is_empty());
    }

    #[test]
    fn reordering_is_misreported_as_addition() {
        // Documents the set-difference approximation: "b " (note the
        // trailing space) differs textually, so it shows up as an addition
        // even though the operator would read it as a move/edit.
        let changes = ChangeSet::between("a\nb\n", "b \na\n");
        assert_eq!(changes.added, vec!["b ".to_string()]);
    }

    #[test]
    fn revision_changes_round_trip() {
        let revision = FileRevision::new("main.go", "a\n", "a\nb\n");
        assert_eq!(revision.changes().added, vec!["b".to_string()]);
    }
}
