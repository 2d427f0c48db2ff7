//! Generic n-ary syntax tree.
//!
//! A [`Tree`] node is a label token plus an ordered list of children. Leaves are nodes without children; operators,
//! statements and blocks are nodes whose label names the operation and whose children are its operands in
//! left-to-right order.
//!
//! ## Notes
//! - The label is mandatory, so every leaf carries a token by construction.
//! - Each child is owned by exactly one parent; trees are never shared or cyclic.
//! - Preorder ids used by the Graphviz export are computed into a side list on each export
//!   ([`Tree::relabel_preorder`]); they are not stored in nodes and never affect equality.
//!
//! ## Examples
//! ```rust
//! use tdop_syntax::{Token, Tree};
//!
//! let mut tree = Tree::new(Token::synthetic("+", "+"));
//! tree.add(Token::synthetic("INT", "1")).add(Token::synthetic("INT", "2"));
//! assert_eq!(tree.to_string(), "(+ INT(1) INT(2))");
//! ```

mod dot;

pub use dot::LabeledNode;

use std::fmt;

use crate::lang::punctuation::{self, PunctuationId};
use crate::scanner::Token;

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tree {
    label: Token,
    children: Vec<Tree>,
}

impl Tree {
    /// Create a leaf.
    pub fn new(label: Token) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    /// Create a node with children. Tokens are wrapped in leaves; trees are attached as-is.
    pub fn with_children<I, C>(label: Token, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Tree>,
    {
        Self {
            label,
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Leaf for an empty statement, labeled by its `;` token.
    pub fn empty_statement(semicolon: Token) -> Self {
        Self::new(semicolon)
    }

    /// Append a child (wrap-or-attach) and return `self` for chaining.
    pub fn add(&mut self, child: impl Into<Tree>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// By-value form of [`Tree::add`], for building trees in expression position.
    pub fn with(mut self, child: impl Into<Tree>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn label(&self) -> &Token {
        &self.label
    }

    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Tree> {
        self.children.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tree> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// `true` when there are no children, the `is_empty` that pairs with [`Tree::len`].
    ///
    /// Same as [`Tree::is_leaf`]; unrelated to [`Tree::is_empty_statement`].
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Return `true` for the leaf produced by a bare `;` statement.
    pub fn is_empty_statement(&self) -> bool {
        self.is_leaf() && self.label.kind == punctuation::as_str(PunctuationId::Semicolon)
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.iter().map(Tree::node_count).sum::<usize>()
    }

    /// Single-line bracketed rendering: a leaf renders as its label, any other node as
    /// `(label child1 child2 ...)`.
    pub fn to_display_text(&self) -> String {
        let mut out = String::new();
        self.write_display(&mut out);
        out
    }

    fn write_display(&self, out: &mut String) {
        if self.is_leaf() {
            out.push_str(&self.label.display_text());
            return;
        }
        out.push('(');
        out.push_str(&self.label.display_text());
        for child in self.iter() {
            out.push(' ');
            child.write_display(out);
        }
        out.push(')');
    }
}

impl From<Token> for Tree {
    fn from(token: Token) -> Self {
        Tree::new(token)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_text())
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Tree;
    type IntoIter = std::slice::Iter<'a, Tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: &str, text: &str) -> Token {
        Token::synthetic(kind, text)
    }

    #[test]
    fn test_leaf_display() {
        assert_eq!(Tree::new(tok("INT", "5")).to_display_text(), "INT(5)");
        assert_eq!(Tree::new(tok("BREAK", "break")).to_display_text(), "BREAK");
    }

    #[test]
    fn test_nested_display() {
        let inner = Tree::with_children(tok("*", "*"), [tok("INT", "2"), tok("INT", "3")]);
        let tree = Tree::new(tok("+", "+")).with(tok("INT", "1")).with(inner);
        assert_eq!(tree.to_string(), "(+ INT(1) (* INT(2) INT(3)))");
    }

    #[test]
    fn test_single_child_display() {
        let tree = Tree::with_children(tok("-", "-"), [Tree::new(tok("INT", "3"))]);
        assert_eq!(tree.to_string(), "(- INT(3))");
    }

    #[test]
    fn test_add_chains_and_wraps_tokens() {
        let mut tree = Tree::new(tok("{", "{"));
        tree.add(tok("ID", "a"))
            .add(Tree::new(tok("=", "=")).with(tok("ID", "b")).with(tok("INT", "1")));
        assert_eq!(tree.len(), 2);
        assert!(tree.child(0).unwrap().is_leaf());
        assert_eq!(tree.child(1).unwrap().len(), 2);
        assert_eq!(tree.node_count(), 5);
        let kinds: Vec<&str> = tree.iter().map(|c| c.label().kind.as_str()).collect();
        assert_eq!(kinds, vec!["ID", "="]);
    }

    #[test]
    fn test_is_empty_means_no_children() {
        let semicolon = Tree::empty_statement(tok(";", ";"));
        assert!(semicolon.is_empty() && semicolon.is_leaf());
        let brk = Tree::new(tok("BREAK", "break"));
        assert!(brk.is_empty());
        assert!(!brk.is_empty_statement());
        assert!(!Tree::new(tok("-", "-")).with(tok("INT", "1")).is_empty());
    }

    #[test]
    fn test_empty_statement_is_labeled_leaf() {
        let leaf = Tree::empty_statement(tok(";", ";"));
        assert!(leaf.is_leaf());
        assert!(leaf.is_empty_statement());
        assert_eq!(leaf.to_string(), ";");
        assert!(!Tree::new(tok("BREAK", "break")).is_empty_statement());
    }

    #[test]
    fn test_equality_ignores_export() {
        let tree = Tree::new(tok("+", "+")).with(tok("INT", "1")).with(tok("INT", "2"));
        let copy = tree.clone();
        let _ = tree.to_dot();
        assert_eq!(tree, copy);
    }
}
