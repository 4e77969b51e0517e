use crate::element::Element;

/// Linear undo/redo log of complete element snapshots.
///
/// Always holds at least one snapshot; `index` points at the active one.
/// Pushing truncates everything after `index`, so there is no branching.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Element>>,
    index: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// A log holding a single empty snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Vec::new()],
            index: 0,
        }
    }

    /// Discards the redo tail and makes `snapshot` the active entry.
    pub fn push(&mut self, snapshot: Vec<Element>) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        self.index = self.snapshots.len() - 1;
    }

    /// Steps back one entry and returns it, or `None` at the first entry.
    pub fn undo(&mut self) -> Option<&[Element]> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Steps forward one entry and returns it, or `None` at the tail.
    pub fn redo(&mut self) -> Option<&[Element]> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }

    pub fn current(&self) -> &[Element] {
        &self.snapshots[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        // There is always the initial snapshot.
        false
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
