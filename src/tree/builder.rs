//! Rebuilds the tree from rows, one row at a time.
//!
//! The builder keeps a path stack: `path[i]` is the node most recently
//! defined at column `i`. A value at column `c` truncates the stack to `c`
//! entries, becomes a child of the new last entry (if any) and is pushed.
//! Empty cells never touch the stack, so a skipped column leaves whatever the
//! stack already held at that depth.

use std::ops::Range;

use super::arena::{NodeId, Tree};
use crate::table_loader::{Row, RowKind};

/// What a single row did to the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    /// Only empty cells; nothing consumed.
    Blank,
    /// A `#` comment row.
    Comment,
    /// The first substantive row; carries the graph title.
    Title(String),
    /// A data row and the ids of the nodes it added (possibly none).
    Data(Range<NodeId>),
}

#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: Tree,
    path: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree built so far.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Current path stack, root first.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// The id the next node will get.
    pub fn next_id(&self) -> NodeId {
        self.tree.len()
    }

    pub fn push_row(&mut self, row: &Row) -> RowOutcome {
        match row.kind() {
            RowKind::Blank => RowOutcome::Blank,
            RowKind::Comment => RowOutcome::Comment,
            RowKind::Substantive => match self.tree.title() {
                None => {
                    let title = row.first_present().unwrap_or_default().to_string();
                    self.tree.set_title(title.clone());
                    RowOutcome::Title(title)
                }
                Some(_) => RowOutcome::Data(self.scan_columns(row)),
            },
        }
    }

    fn scan_columns(&mut self, row: &Row) -> Range<NodeId> {
        let first = self.next_id();
        for (cur, value) in row.present_cells() {
            // Shorter stacks are left alone; see the module docs.
            self.path.truncate(cur);
            let parent = self.path.last().copied();
            let id = self.tree.add_node(value, cur, parent);
            self.path.push(id);
        }
        first..self.next_id()
    }

    pub fn finish(self) -> Tree {
        self.tree
    }
}

/// Builds the whole tree from a sequence of rows.
pub fn parse<I>(rows: I) -> Tree
where
    I: IntoIterator<Item = Row>,
{
    let mut builder = TreeBuilder::new();
    for row in rows {
        builder.push_row(&row);
    }
    builder.finish()
}
