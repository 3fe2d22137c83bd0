//! Layout types: NodeKind, NodeData, PlacedNode, Layout.

use serde::Serialize;

use crate::syntax::types::PrimitiveKind;

/// Index of a node in a finished `Layout`.
pub type NodeId = usize;

// ─── NodeKind ────────────────────────────────────────────────────────────────

/// Which expression form a drawable node came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Call,
    Symbol,
    Number,
    Variable,
}

impl From<PrimitiveKind> for NodeKind {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Symbol => NodeKind::Symbol,
            PrimitiveKind::Number => NodeKind::Number,
        }
    }
}

// ─── Graph weights ───────────────────────────────────────────────────────────

/// Node weight stored in the petgraph DiGraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub label: String,
    pub kind: NodeKind,
}

/// Edge weight stored in the petgraph DiGraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeData {
    /// Argument position of the target within its parent.
    pub position: usize,
}

// ─── PlacedNode ──────────────────────────────────────────────────────────────

/// A node with its final depth and horizontal offset.
///
/// `childs` is the full ordered edge set and may name a shared node more than
/// once; `belows` is the spanning subset the positions were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub offset: f64,
    pub childs: Vec<NodeId>,
    pub belows: Vec<NodeId>,
}

// ─── Layout ──────────────────────────────────────────────────────────────────

/// The full output of the layout pipeline.
///
/// Nodes are numbered in pre-order of the spanning tree, so the root is
/// always node 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub root: NodeId,
    pub nodes: Vec<PlacedNode>,
}

impl Layout {
    pub fn node(&self, id: NodeId) -> &PlacedNode {
        &self.nodes[id]
    }

    pub fn root_node(&self) -> &PlacedNode {
        &self.nodes[self.root]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes carrying `label`.
    pub fn find<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a PlacedNode> + 'a {
        self.nodes.iter().filter(move |n| n.label == label)
    }

    /// Number of rows (one per depth).
    pub fn height(&self) -> usize {
        self.nodes.iter().map(|n| n.depth + 1).max().unwrap_or(0)
    }

    pub fn min_offset(&self) -> f64 {
        self.nodes.iter().map(|n| n.offset).fold(f64::INFINITY, f64::min)
    }

    pub fn max_offset(&self) -> f64 {
        self.nodes
            .iter()
            .map(|n| n.offset)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Horizontal extent in offset units.
    pub fn width(&self) -> f64 {
        if self.nodes.is_empty() {
            0.0
        } else {
            self.max_offset() - self.min_offset()
        }
    }

    /// Every `childs` edge as `(parent, child, argument position)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, usize)> + '_ {
        self.nodes.iter().flat_map(|n| {
            n.childs
                .iter()
                .enumerate()
                .map(move |(i, &child)| (n.id, child, i))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
