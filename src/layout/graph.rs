//! Graph builder — converts a parsed `Program` into a petgraph DiGraph of
//! drawable nodes.
//!
//! Calls and primitives get a fresh node per occurrence. A `define`d name
//! becomes one node, labelled with the name, whose single child is its
//! definition body; every reference to the name reuses that node, which is
//! what gives shared sub-expressions more than one incoming edge.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::LayoutError;
use crate::syntax::types::{Expr, ExprId, Program};

use super::types::{EdgeData, NodeData, NodeKind};

/// Drawable node graph rooted at the program expression.
pub struct NodeGraph {
    pub digraph: DiGraph<NodeData, EdgeData>,
    pub root: NodeIndex,
}

enum Step {
    Enter(ExprId),
    Exit(ExprId),
}

impl NodeGraph {
    /// Build the node graph reachable from `program.root`.
    ///
    /// Walks the expression graph with an explicit stack. Finished nodes are
    /// pushed onto `built`; leaving an expression pops one entry per child.
    pub fn from_program(program: &Program) -> Result<Self, LayoutError> {
        let mut digraph: DiGraph<NodeData, EdgeData> = DiGraph::new();
        let mut variables: HashMap<ExprId, NodeIndex> = HashMap::new();
        let mut resolving: HashSet<ExprId> = HashSet::new();
        let mut built: Vec<NodeIndex> = Vec::new();
        let mut stack = vec![Step::Enter(program.root)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id) => {
                    let expr = program.expr(id);
                    if let Expr::Variable { .. } = expr {
                        if let Some(&node) = variables.get(&id) {
                            built.push(node);
                            continue;
                        }
                    }
                    if let Expr::Primitive { label, kind } = expr {
                        built.push(digraph.add_node(NodeData {
                            label: label.clone(),
                            kind: (*kind).into(),
                        }));
                        continue;
                    }
                    if !resolving.insert(id) {
                        return Err(LayoutError::CyclicExpression {
                            label: expr.label().to_string(),
                        });
                    }
                    stack.push(Step::Exit(id));
                    stack.extend(expr.children().iter().rev().map(|&c| Step::Enter(c)));
                }
                Step::Exit(id) => {
                    let expr = program.expr(id);
                    let kind = match expr {
                        Expr::Variable { .. } => NodeKind::Variable,
                        _ => NodeKind::Call,
                    };
                    let node = digraph.add_node(NodeData {
                        label: expr.label().to_string(),
                        kind,
                    });
                    let first = built.len() - expr.children().len();
                    for (position, child) in built.drain(first..).enumerate() {
                        digraph.add_edge(node, child, EdgeData { position });
                    }
                    resolving.remove(&id);
                    if kind == NodeKind::Variable {
                        variables.insert(id, node);
                    }
                    built.push(node);
                }
            }
        }

        let root = built.pop().ok_or(LayoutError::NotADag)?;
        log::debug!(
            "built node graph: {} nodes, {} edges, {} shared variable(s)",
            digraph.node_count(),
            digraph.edge_count(),
            variables.len()
        );
        Ok(Self { digraph, root })
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns true if the graph is a directed acyclic graph (no cycles).
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    pub fn data(&self, node: NodeIndex) -> &NodeData {
        &self.digraph[node]
    }

    /// Children of `node` in argument order (duplicates kept).
    pub fn childs(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<(usize, NodeIndex)> = self
            .digraph
            .edges(node)
            .map(|e| (e.weight().position, e.target()))
            .collect();
        out.sort_by_key(|&(position, _)| position);
        out.into_iter().map(|(_, target)| target).collect()
    }

    /// `childs` for every node, indexed by `NodeIndex::index()`.
    pub fn child_lists(&self) -> Vec<Vec<usize>> {
        self.digraph
            .node_indices()
            .map(|n| self.childs(n).into_iter().map(|c| c.index()).collect())
            .collect()
    }

    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.digraph
            .edges_directed(node, Direction::Incoming)
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
