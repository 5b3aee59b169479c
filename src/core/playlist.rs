//! The playlist list model plus the view flags that go with it.
//!
//! - Rows are kept in insertion order; position is the only identity.
//! - Selection is stored as row positions, so any operation that shifts rows
//!   (insert, drag-reorder) must remap it.

use std::collections::BTreeSet;

use super::types::PlaylistRow;

/// Capability flags of the playlist view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Any number of rows (ctrl toggles, shift extends). Otherwise one row.
    pub multi_select: bool,
    /// Rows can be dragged to a new position.
    pub reorderable: bool,
    pub headers_visible: bool,
}

/// What a click does to the existing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// Plain click: select just this row.
    Replace,
    /// Ctrl-click: flip this row.
    Toggle,
    /// Shift-click: select from the anchor to this row.
    Extend,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Selection {
    rows: BTreeSet<usize>,
    /// Where the last plain/ctrl click landed; shift-click ranges start here.
    anchor: Option<usize>,
}

impl Selection {
    fn remap(&mut self, f: impl Fn(usize) -> usize) {
        self.rows = self.rows.iter().map(|&i| f(i)).collect();
        self.anchor = self.anchor.map(f);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    rows: Vec<PlaylistRow>,
    selection: Selection,
    options: ViewOptions,
}

impl Playlist {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            rows: Vec::new(),
            selection: Selection::default(),
            options,
        }
    }

    /// Insert `row` at `position`; a position past the end appends.
    /// Returns where the row actually landed.
    pub fn insert(&mut self, position: usize, row: PlaylistRow) -> usize {
        let at = position.min(self.rows.len());
        self.rows.insert(at, row);
        self.selection
            .remap(|i| if i >= at { i + 1 } else { i });
        at
    }

    pub fn rows(&self) -> &[PlaylistRow] {
        &self.rows
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.rows.contains(&index)
    }

    /// Selected positions in ascending order.
    #[cfg(test)]
    pub fn selected(&self) -> Vec<usize> {
        self.selection.rows.iter().copied().collect()
    }

    /// Apply a click on `index`. Returns false if the click was ignored.
    pub fn click(&mut self, index: usize, kind: ClickKind) -> bool {
        if index >= self.rows.len() {
            return false;
        }

        let sel = &mut self.selection;
        let kind = if self.options.multi_select {
            kind
        } else {
            ClickKind::Replace
        };

        match kind {
            ClickKind::Replace => {
                sel.rows = BTreeSet::from([index]);
                sel.anchor = Some(index);
            }
            ClickKind::Toggle => {
                if !sel.rows.remove(&index) {
                    sel.rows.insert(index);
                }
                sel.anchor = Some(index);
            }
            ClickKind::Extend => {
                let anchor = *sel.anchor.get_or_insert(index);
                let (lo, hi) = if anchor <= index {
                    (anchor, index)
                } else {
                    (index, anchor)
                };
                sel.rows = (lo..=hi).collect();
            }
        }

        true
    }

    /// Drag-reorder: move the row at `from` so it ends up at `to`.
    ///
    /// Ignored (returns false) unless the view is reorderable and both
    /// positions exist. Selected rows stay selected at their new positions.
    pub fn move_row(&mut self, from: usize, to: usize) -> bool {
        if !self.options.reorderable || from >= self.rows.len() || to >= self.rows.len() {
            return false;
        }
        if from == to {
            return true;
        }

        let row = self.rows.remove(from);
        self.rows.insert(to, row);

        self.selection.remap(|i| {
            if i == from {
                to
            } else if from < to && (from + 1..=to).contains(&i) {
                i - 1
            } else if to < from && (to..from).contains(&i) {
                i + 1
            } else {
                i
            }
        });

        true
    }
}
