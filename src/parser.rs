//! Recursive-descent parser for the LL(1) expression grammar.
//!
//! ```text
//! E  -> T E'
//! E' -> '+' T E' | ε
//! T  -> F T'
//! T' -> '*' F T' | ε
//! F  -> '(' E ')' | id | num
//! ```
//!
//! One function per nonterminal. Each takes the node it expands and the
//! shared `TokenStream`, appends children on the path it takes and advances
//! the cursor. The first failure unwinds straight to `parse`; nothing is
//! retried.

use log::debug;

use crate::error::{SyntaxError, SyntaxResult};
use crate::tokenizer::{Token, describe_token};
use crate::tree::{EXPR, EXPR_REST, FACTOR, Node, TERM, TERM_REST};

/// Parse a full token sequence into a tree rooted at `E`.
///
/// Succeeds only when every token has been consumed. Leftover tokens after a
/// structurally valid expression yield `InvalidInputString`.
pub fn parse(tokens: &[Token]) -> SyntaxResult<Node> {
  let mut stream = TokenStream::new(tokens);
  let mut root = Node::new(EXPR);

  expr(&mut stream, &mut root)?;

  if !stream.is_eof() {
    debug!(
      "parse stopped at token {} of {} ({})",
      stream.pos,
      tokens.len(),
      describe_token(stream.peek())
    );
    return Err(SyntaxError::InvalidInputString);
  }

  Ok(root)
}

/// E -> T E'
fn expr(stream: &mut TokenStream, node: &mut Node) -> SyntaxResult<()> {
  debug!("E at {}", stream.pos);
  term(stream, node.push(Node::new(TERM)))?;
  expr_rest(stream, node)
}

/// E' -> '+' T E' | ε
///
/// Continuations are attached to the node that owns the preceding `T`, so a
/// chain `a + b + c` yields sibling `E'` nodes under one `E`.
fn expr_rest(stream: &mut TokenStream, node: &mut Node) -> SyntaxResult<()> {
  continuation(stream, node, '+', EXPR_REST, TERM, term)
}

/// T -> F T'
fn term(stream: &mut TokenStream, node: &mut Node) -> SyntaxResult<()> {
  debug!("T at {}", stream.pos);
  factor(stream, node.push(Node::new(FACTOR)))?;
  term_rest(stream, node)
}

/// T' -> '*' F T' | ε
fn term_rest(stream: &mut TokenStream, node: &mut Node) -> SyntaxResult<()> {
  continuation(stream, node, '*', TERM_REST, FACTOR, factor)
}

type Production = fn(&mut TokenStream, &mut Node) -> SyntaxResult<()>;

/// Shared body of `E'` and `T'`.
///
/// Any failure of the operand after the operator is reported as a doubled
/// operator, pointing at the token that followed the operator.
fn continuation(
  stream: &mut TokenStream,
  node: &mut Node,
  operator: char,
  label: &str,
  operand_label: &str,
  operand: Production,
) -> SyntaxResult<()> {
  loop {
    if !stream.equal(operator) {
      return Ok(());
    }
    debug!("{label} consumed '{operator}'");

    let near = stream.peek().map(|token| token.lexeme.clone());
    let rest = node.push(Node::new(label));
    rest.push(Node::new(operator.to_string()));
    if let Err(err) = operand(stream, rest.push(Node::new(operand_label))) {
      debug!("{label} operand failed: {err}");
      return Err(SyntaxError::DoubledOperator { operator, near });
    }
  }
}

/// F -> '(' E ')' | id | num
fn factor(stream: &mut TokenStream, node: &mut Node) -> SyntaxResult<()> {
  debug!("F at {}", stream.pos);
  let Some(token) = stream.peek() else {
    return Err(SyntaxError::InvalidToken { near: None });
  };

  if token.category.is_operand() {
    node.push(Node::new(token.lexeme.clone()));
    stream.advance();
    return Ok(());
  }

  if !stream.equal('(') {
    return Err(SyntaxError::InvalidToken {
      near: Some(token.lexeme.clone()),
    });
  }

  // Both parenthesis diagnostics point back at the opening `(`.
  let open = Some(token.lexeme.clone());
  node.push(Node::new("("));
  if let Err(err) = expr(stream, node.push(Node::new(EXPR))) {
    debug!("parenthesised E failed: {err}");
    return Err(SyntaxError::InvalidToken { near: open });
  }

  if stream.is_eof() {
    return Err(SyntaxError::UnmatchedParen { near: None });
  }
  if !stream.equal(')') {
    return Err(SyntaxError::UnmatchedParen { near: open });
  }
  node.push(Node::new(")"));
  Ok(())
}

/// Lightweight cursor over the token slice. The cursor only moves forward.
struct TokenStream<'a> {
  tokens: &'a [Token],
  pos: usize,
}

impl<'a> TokenStream<'a> {
  fn new(tokens: &'a [Token]) -> Self {
    Self { tokens, pos: 0 }
  }

  fn peek(&self) -> Option<&'a Token> {
    self.tokens.get(self.pos)
  }

  fn advance(&mut self) {
    if self.pos < self.tokens.len() {
      self.pos += 1;
    }
  }

  /// Consume the current token if it is the given symbol.
  fn equal(&mut self, symbol: char) -> bool {
    if let Some(token) = self.peek()
      && token.is_symbol(symbol)
    {
      self.pos += 1;
      return true;
    }
    false
  }

  fn is_eof(&self) -> bool {
    self.pos >= self.tokens.len()
  }
}
