//! Linear undo/redo history over element collection snapshots.

use crate::elements::Element;

/// Branch-truncating snapshot log.
///
/// `snapshots[cursor]` is always the externally visible collection. Snapshots
/// are owned by the log and never modified after they are appended.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Vec<Element>>,
    cursor: usize,
    limit: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl History {
    /// Create a log whose only snapshot is `initial`.
    pub fn new(initial: Vec<Element>) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Cap the number of retained snapshots; the oldest are evicted first.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|l| l.max(1));
        self.evict();
        self
    }

    /// Append a snapshot, discarding any redo tail first.
    pub fn commit(&mut self, snapshot: Vec<Element>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        self.evict();
    }

    /// Step back one snapshot. At the first snapshot this is a no-op.
    pub fn undo(&mut self) -> &[Element] {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward one snapshot. At the last snapshot this is a no-op.
    pub fn redo(&mut self) -> &[Element] {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Replace the whole log with a single snapshot.
    pub fn reset(&mut self, snapshot: Vec<Element>) {
        self.snapshots = vec![snapshot];
        self.cursor = 0;
    }

    /// The visible snapshot.
    pub fn current(&self) -> &[Element] {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the log holds at least one snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Vec<Element>] {
        &self.snapshots
    }

    fn evict(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.snapshots.len() > limit {
            let excess = self.snapshots.len() - limit;
            self.snapshots.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ElementFactory;
    use crate::tools::{ToolKind, ToolStyle};
    use kurbo::Point;

    fn snapshot(n: usize) -> Vec<Element> {
        let factory = ElementFactory::default();
        (0..n)
            .map(|i| {
                factory
                    .create(i, Point::new(i as f64, 0.0), Point::new(i as f64 + 10.0, 10.0), ToolKind::Line, &ToolStyle::default())
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_new_history() {
        let history = History::default();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(history.current().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_commit_advances_cursor() {
        let mut history = History::default();
        history.commit(snapshot(1));
        history.commit(snapshot(2));
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current(), snapshot(2).as_slice());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::default();
        history.commit(snapshot(1));
        history.commit(snapshot(2));

        let before = history.current().to_vec();
        history.undo();
        assert_eq!(history.current(), snapshot(1).as_slice());
        history.redo();
        assert_eq!(history.current(), before.as_slice());
    }

    #[test]
    fn test_commit_after_undo_truncates() {
        // [A, B, C] at 2, undo to B, commit D => [A, B, D]
        let a = snapshot(0);
        let b = snapshot(1);
        let c = snapshot(2);
        let d = snapshot(3);

        let mut history = History::new(a.clone());
        history.commit(b.clone());
        history.commit(c);
        assert_eq!(history.undo(), b.as_slice());
        assert_eq!(history.cursor(), 1);

        history.commit(d.clone());
        assert_eq!(history.snapshots(), &[a, b, d.clone()]);
        assert_eq!(history.cursor(), 2);

        // C is unreachable.
        assert_eq!(history.redo(), d.as_slice());
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_boundary_no_ops() {
        let mut history = History::default();
        history.commit(snapshot(1));

        let at_end = history.clone();
        history.redo();
        assert_eq!(history, at_end);

        history.undo();
        let at_start = history.clone();
        history.undo();
        assert_eq!(history, at_start);
    }

    #[test]
    fn test_reset() {
        let mut history = History::default();
        history.commit(snapshot(1));
        history.commit(snapshot(2));
        history.reset(snapshot(3));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current().len(), 3);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = History::default().with_limit(Some(3));
        for n in 1..=5 {
            history.commit(snapshot(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.snapshots()[0].len(), 3);

        history.undo();
        history.undo();
        assert!(!history.can_undo());
        assert_eq!(history.current().len(), 3);
    }
}
