//! Graphviz `dot` export.
//!
//! Produces a complete `digraph` document: one node statement per tree node (in preorder) labeled with the node's
//! token display text, then one edge statement per parent/child pair. Render with `dot -Tpng`.

use std::fmt::Write;

use super::Tree;
use crate::config::DotConfig;

/// A node paired with its transient preorder id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledNode<'a> {
    /// 1-based preorder id.
    pub id: usize,
    /// Id of the parent node, `None` for the root.
    pub parent: Option<usize>,
    pub node: &'a Tree,
}

impl Tree {
    /// Assign preorder ids: a node gets the next unused id before any of its children, left to right.
    ///
    /// ## Returns
    /// - One entry per node, in preorder. Ids are exactly `1..=N`, and every parent id is smaller than all ids in
    ///   its subtree.
    ///
    /// ## Notes
    /// - Ids are recomputed on every call and never stored in the tree, so a tree mutated between exports can't
    ///   carry stale ids.
    pub fn relabel_preorder(&self) -> Vec<LabeledNode<'_>> {
        let mut out = Vec::with_capacity(self.node_count());
        self.label_from(None, &mut out);
        out
    }

    fn label_from<'a>(&'a self, parent: Option<usize>, out: &mut Vec<LabeledNode<'a>>) {
        let id = out.len() + 1;
        out.push(LabeledNode { id, parent, node: self });
        for child in &self.children {
            child.label_from(Some(id), out);
        }
    }

    /// Render as a Graphviz document named `ast`.
    pub fn to_dot(&self) -> String {
        self.to_dot_with(&DotConfig::default())
    }

    /// Render as a Graphviz document using `config`.
    #[tracing::instrument(skip_all, fields(graph = %config.graph_name))]
    pub fn to_dot_with(&self, config: &DotConfig) -> String {
        let nodes = self.relabel_preorder();
        let mut dot = format!("digraph {} {{", config.graph_name);
        // `write!` into a String cannot fail.
        for entry in &nodes {
            let _ = write!(
                dot,
                "\n{} [label=\"{}\"];",
                entry.id,
                escape(&entry.node.label.display_text())
            );
        }
        for entry in &nodes {
            if let Some(parent) = entry.parent {
                let _ = write!(dot, "\n{} -> {};", parent, entry.id);
            }
        }
        dot.push_str("\n}");
        tracing::debug!(nodes = nodes.len(), "exported tree");
        dot
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
