// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Linear undo/redo history of plan snapshots.
//!
//! History is a single timeline: an array of snapshots and a pointer to the
//! snapshot matching the current state. Pushing while the pointer is not at
//! the tail discards the redo tail. The manager only hands snapshots back;
//! applying them is the store's job.

use crate::models::plan::{PlanState, Tab};

/// Default number of snapshots kept before the oldest are evicted.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// The edit that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    /// Baseline recorded when a plan is opened.
    Initial,
    /// Ceremony chair grid regenerated.
    Ceremony,
    /// Banquet table grid regenerated.
    Banquet,
    AreaAdd,
    AreaRemove,
    AreaEdit,
    TableAdd,
    TableRemove,
    TableMove,
    TableEdit,
    SeatToggle,
    SeatAssign,
}

impl SnapshotKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SnapshotKind::Initial => "initial",
            SnapshotKind::Ceremony => "ceremony",
            SnapshotKind::Banquet => "banquet",
            SnapshotKind::AreaAdd => "area-add",
            SnapshotKind::AreaRemove => "area-remove",
            SnapshotKind::AreaEdit => "area-edit",
            SnapshotKind::TableAdd => "table-add",
            SnapshotKind::TableRemove => "table-remove",
            SnapshotKind::TableMove => "table-move",
            SnapshotKind::TableEdit => "table-edit",
            SnapshotKind::SeatToggle => "seat-toggle",
            SnapshotKind::SeatAssign => "seat-assign",
        }
    }
}

/// Plan state captured by value after an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub kind: SnapshotKind,
    /// Tab that was active when the edit happened.
    pub tab: Tab,
    pub state: PlanState,
}

impl HistorySnapshot {
    pub fn new(kind: SnapshotKind, tab: Tab, state: PlanState) -> Self {
        Self { kind, tab, state }
    }
}

/// History system for undo/redo functionality.
#[derive(Debug)]
pub struct History {
    entries: Vec<HistorySnapshot>,
    /// Index of the snapshot matching the current state; `None` while empty.
    pointer: Option<usize>,
    /// Maximum history size
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            pointer: None,
            limit: limit.max(1),
        }
    }

    /// Record a snapshot after an edit.
    ///
    /// Returns `false` when the snapshot equals the current one and was ignored.
    pub fn push(&mut self, snapshot: HistorySnapshot) -> bool {
        match self.pointer {
            Some(p) => {
                if self.entries[p] == snapshot {
                    log::debug!("Ignoring duplicate {} snapshot", snapshot.kind.as_str());
                    return false;
                }
                self.entries.truncate(p + 1);
            }
            None => self.entries.clear(),
        }

        log::debug!("History push: {}", snapshot.kind.as_str());
        self.entries.push(snapshot);

        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.pointer = Some(self.entries.len() - 1);
        true
    }

    /// Step back and return the snapshot now current. `None` at the head.
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        match self.pointer {
            Some(p) if p > 0 => {
                self.pointer = Some(p - 1);
                self.entries.get(p - 1)
            }
            _ => None,
        }
    }

    /// Step forward and return the snapshot now current. `None` at the tail.
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        let next = self.pointer.map_or(0, |p| p + 1);
        if next < self.entries.len() {
            self.pointer = Some(next);
            self.entries.get(next)
        } else {
            None
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        matches!(self.pointer, Some(p) if p > 0)
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.pointer.map_or(0, |p| p + 1) < self.entries.len()
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&HistorySnapshot> {
        self.pointer.and_then(|p| self.entries.get(p))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pointer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::Area;

    fn snapshot_with_areas(n: u64) -> HistorySnapshot {
        let mut state = PlanState::default();
        state.ceremony.areas = (0..n)
            .map(|id| Area {
                id,
                points: Vec::new(),
                tab: Tab::Ceremony,
            })
            .collect();
        HistorySnapshot::new(SnapshotKind::AreaAdd, Tab::Ceremony, state)
    }

    #[test]
    fn test_undo_twice_redo_once_restores_second() {
        let mut history = History::default();
        let (s1, s2, s3) = (snapshot_with_areas(1), snapshot_with_areas(2), snapshot_with_areas(3));
        history.push(s1.clone());
        history.push(s2.clone());
        history.push(s3);

        assert_eq!(history.undo(), Some(&s2));
        assert_eq!(history.undo(), Some(&s1));
        assert_eq!(history.redo(), Some(&s2));
        assert_eq!(history.current(), Some(&s2));
    }

    #[test]
    fn test_push_after_undo_discards_redo_tail() {
        let mut history = History::default();
        history.push(snapshot_with_areas(1));
        history.push(snapshot_with_areas(2));
        history.push(snapshot_with_areas(3));

        history.undo();
        history.push(snapshot_with_areas(4));

        assert_eq!(history.len(), 3);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
        assert_eq!(history.current(), Some(&snapshot_with_areas(4)));
    }

    #[test]
    fn test_duplicate_push_is_ignored() {
        let mut history = History::default();
        assert!(history.push(snapshot_with_areas(1)));
        assert!(!history.push(snapshot_with_areas(1)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut history = History::default();
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);

        history.push(snapshot_with_areas(1));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert_eq!(history.current(), Some(&snapshot_with_areas(1)));
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = History::new(2);
        history.push(snapshot_with_areas(1));
        history.push(snapshot_with_areas(2));
        history.push(snapshot_with_areas(3));

        assert_eq!(history.len(), 2);
        assert_eq!(history.undo(), Some(&snapshot_with_areas(2)));
        assert_eq!(history.undo(), None);
    }
}
