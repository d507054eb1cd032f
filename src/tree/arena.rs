// ──────────────────────────────────────────────────────────────────────────────
// Tree – the forest described by a column-indented table.
// Nodes live in a single arena and refer to each other by index, so a node's
// id is also its discovery order. A table may hold several root chains, which
// is why there is no single root.
// ──────────────────────────────────────────────────────────────────────────────

/// Represents a unique identifier for a node in the tree.
pub type NodeId = usize;

/// A single value found in a data row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    /// Zero-based column the value was written in.
    pub column: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    title: Option<String>,
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// The graph title, if a title row was seen.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes without a parent, in discovery order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
    }

    /// `(parent, child)` pairs ordered by child id.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, node)| node.parent.map(|parent| (parent, id)))
    }

    /// Appends a node and links it under `parent`. Ids are never reused.
    pub(crate) fn add_node(
        &mut self,
        label: impl Into<String>,
        column: usize,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            label: label.into(),
            column,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_links_children() {
        let mut tree = Tree::new();
        let a = tree.add_node("a", 0, None);
        let b = tree.add_node("b", 1, Some(a));
        let c = tree.add_node("c", 1, Some(a));
        let d = tree.add_node("d", 0, None);

        assert_eq!((a, b, c, d), (0, 1, 2, 3));
        assert_eq!(tree.nodes()[a].children, vec![b, c]);
        assert_eq!(tree.roots().collect::<Vec<_>>(), vec![a, d]);
        assert_eq!(tree.edges().collect::<Vec<_>>(), vec![(a, b), (a, c)]);
    }
}
