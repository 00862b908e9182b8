//! Symbol table kept alongside the token listing.
//!
//! The grammar never consults it. It records each identifier and number the
//! tokenizer produced, in first-seen order, behaving like a mapping: a
//! repeated lexeme overwrites its category in place.

use std::fmt;

use crate::tokenizer::{Category, Token};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
  entries: Vec<(String, Category)>,
}

impl SymbolTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record every `id` and `num` token.
  pub fn from_tokens(tokens: &[Token]) -> Self {
    let mut table = Self::new();
    for token in tokens.iter().filter(|t| t.category.is_operand()) {
      table.insert(token.lexeme.clone(), token.category);
    }
    table
  }

  pub fn insert(&mut self, lexeme: impl Into<String>, category: Category) {
    let lexeme = lexeme.into();
    match self.entries.iter_mut().find(|(name, _)| *name == lexeme) {
      Some(entry) => entry.1 = category,
      None => self.entries.push((lexeme, category)),
    }
  }

  pub fn get(&self, lexeme: &str) -> Option<Category> {
    self
      .entries
      .iter()
      .find(|(name, _)| name == lexeme)
      .map(|(_, category)| *category)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
    self
      .entries
      .iter()
      .map(|(name, category)| (name.as_str(), *category))
  }
}

impl fmt::Display for SymbolTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (lexeme, category) in self.iter() {
      writeln!(f, "{lexeme}: {category}")?;
    }
    Ok(())
  }
}
