//! Undo/redo history of component tree snapshots.
//!
//! The history is a log of immutable snapshots with a cursor pointing at the
//! current one. Undo and redo only move the cursor. Committing a new snapshot
//! after an undo drops the entries ahead of the cursor, so redo always
//! replays the branch the user is on.

use crate::node::ComponentNode;
use std::sync::Arc;

/// An immutable copy of the whole root sequence.
pub type Snapshot = Arc<[ComponentNode]>;

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: usize,
    limit: Option<usize>,
}

impl History {
    /// Start a history whose first entry is `initial`.
    pub fn new(initial: Vec<ComponentNode>) -> Self {
        Self {
            entries: vec![Snapshot::from(initial)],
            cursor: 0,
            limit: None,
        }
    }

    /// Keep at most `limit` entries, discarding the oldest first.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.max(1));
        self.enforce_limit();
        self
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.cursor]
    }

    /// Record a new snapshot after the cursor and move onto it.
    pub fn commit(&mut self, components: Vec<ComponentNode>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Snapshot::from(components));
        self.cursor = self.entries.len() - 1;
        self.enforce_limit();
        tracing::debug!(
            entries = self.entries.len(),
            cursor = self.cursor,
            "history commit"
        );
    }

    /// Step back one snapshot. Returns `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        tracing::trace!(cursor = self.cursor, "history undo");
        Some(self.current())
    }

    /// Step forward one snapshot. Returns `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        tracing::trace!(cursor = self.cursor, "history redo");
        Some(self.current())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the oldest entries behind the cursor, then the far end of the
    /// redo tail. The entry under the cursor always survives.
    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        let excess = self.entries.len().saturating_sub(limit);
        if excess == 0 {
            return;
        }
        let behind = excess.min(self.cursor);
        self.entries.drain(..behind);
        self.cursor -= behind;
        self.entries.truncate(self.entries.len() - (excess - behind));
    }
}
