//! Parse tree built by the grammar engine.
//!
//! Each node owns its children outright; there are no back references, so
//! the tree is dropped as a unit when a parse fails.

use std::fmt;

/// Labels of the grammar's nonterminals.
pub const EXPR: &str = "E";
pub const EXPR_REST: &str = "E'";
pub const TERM: &str = "T";
pub const TERM_REST: &str = "T'";
pub const FACTOR: &str = "F";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
  label: String,
  children: Vec<Node>,
}

impl Node {
  pub fn new(label: impl Into<String>) -> Self {
    Self {
      label: label.into(),
      children: Vec::new(),
    }
  }

  /// Node with its children already in place. Handy in tests.
  pub fn with_children(label: impl Into<String>, children: Vec<Node>) -> Self {
    Self {
      label: label.into(),
      children,
    }
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  pub fn children(&self) -> &[Node] {
    &self.children
  }

  pub fn is_leaf(&self) -> bool {
    self.children.is_empty()
  }

  /// Append a child and return it for further population.
  pub fn push(&mut self, child: Node) -> &mut Node {
    self.children.push(child);
    let last = self.children.len() - 1;
    &mut self.children[last]
  }

  /// Terminal labels from left to right.
  pub fn leaves(&self) -> Vec<&str> {
    let mut out = Vec::new();
    self.collect_leaves(&mut out);
    out
  }

  fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
    if self.is_leaf() {
      out.push(&self.label);
      return;
    }
    for child in &self.children {
      child.collect_leaves(out);
    }
  }

  /// Number of nodes on the longest root-to-leaf path.
  pub fn depth(&self) -> usize {
    1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
  }

  fn render(&self, f: &mut fmt::Formatter<'_>, prefix: &str, is_last: bool) -> fmt::Result {
    let connector = if is_last { "└── " } else { "├── " };
    writeln!(f, "{prefix}{connector}{}", self.label)?;

    let extension = if is_last { "    " } else { "│   " };
    let child_prefix = format!("{prefix}{extension}");
    let count = self.children.len();
    for (idx, child) in self.children.iter().enumerate() {
      child.render(f, &child_prefix, idx + 1 == count)?;
    }
    Ok(())
  }
}

/// Box-drawing rendering, one line per node. The root is drawn as a
/// non-last sibling.
impl fmt::Display for Node {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.render(f, "", false)
  }
}
