//! Crate root: wires together the tokenize-then-parse pipeline.
//!
//! - `tokenizer` classifies lexemes and produces a flat token vector.
//! - `parser` runs the LL(1) recursive descent and builds a `tree::Node`.
//! - `tree` owns the labelled nodes and their box-drawing rendering.
//! - `symbols` keeps the identifier/number table shown next to the tokens.
//! - `error` holds the diagnostics shared by the other modules.

pub mod error;
pub mod parser;
pub mod symbols;
pub mod tokenizer;
pub mod tree;

use log::info;
use snafu::ResultExt;

pub use error::{Error, LexError, Result, SyntaxError};
pub use symbols::SymbolTable;
pub use tokenizer::{Category, Token, classify, tokenize};
pub use tree::Node;

/// Tokenize and parse an expression string into its parse tree.
pub fn parse_expression(input: &str) -> Result<Node> {
  let tokens = tokenize(input).context(error::LexSnafu)?;
  info!("tokenized {} tokens", tokens.len());
  let tree = parser::parse(&tokens).context(error::SyntaxSnafu)?;
  info!("parsed tree of depth {}", tree.depth());
  Ok(tree)
}
