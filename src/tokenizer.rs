//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! Letters and digits share one pending buffer, so a run such as `a1` comes
//! out as a single lexeme that the classifier later marks `unknown`. The four
//! symbols `+ * ( )` are emitted on their own and tag themselves.

use std::fmt;

use log::trace;

use crate::error::{LexError, LexResult};

/// Category of a lexeme. Symbols act as their own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
  Number,
  Identifier,
  Operator(char),
  Unknown,
}

impl Category {
  /// Label used in listings: `num`, `id`, `unknown` or the symbol itself.
  pub fn label(&self) -> String {
    match self {
      Category::Number => "num".to_string(),
      Category::Identifier => "id".to_string(),
      Category::Operator(symbol) => symbol.to_string(),
      Category::Unknown => "unknown".to_string(),
    }
  }

  /// Whether a token of this category can stand alone as a factor.
  pub fn is_operand(&self) -> bool {
    matches!(self, Category::Number | Category::Identifier)
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.label())
  }
}

/// One lexeme paired with its category and the byte offset it started at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub lexeme: String,
  pub category: Category,
  pub loc: usize,
}

impl Token {
  /// Build a token from a flushed word, classifying it on the way.
  pub fn word(lexeme: impl Into<String>, loc: usize) -> Self {
    let lexeme = lexeme.into();
    let category = classify(&lexeme);
    Self {
      lexeme,
      category,
      loc,
    }
  }

  /// Build a self-tagged symbol token.
  pub fn symbol(symbol: char, loc: usize) -> Self {
    Self {
      lexeme: symbol.to_string(),
      category: Category::Operator(symbol),
      loc,
    }
  }

  /// Whether this token is the given symbol.
  pub fn is_symbol(&self, symbol: char) -> bool {
    self.category == Category::Operator(symbol)
  }
}

const SYMBOLS: [char; 4] = ['+', '*', '(', ')'];

/// Lex the input into a flat vector of tokens.
///
/// Fails on the first character that is not a letter, a digit, whitespace
/// or one of the four symbols; no partial token list is returned.
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
  let mut tokens = Vec::new();
  let mut pending = Pending::default();

  for (i, c) in input.char_indices() {
    if c.is_alphabetic() || c.is_numeric() {
      pending.push(i, c);
      continue;
    }

    if SYMBOLS.contains(&c) {
      pending.flush(&mut tokens);
      push(&mut tokens, Token::symbol(c, i));
      continue;
    }

    if c.is_whitespace() {
      pending.flush(&mut tokens);
      continue;
    }

    return Err(LexError::InvalidCharacter { ch: c, loc: i });
  }

  pending.flush(&mut tokens);
  Ok(tokens)
}

/// Classify a lexeme. Digits may come from any script; identifiers are
/// ASCII letters only. Anything else is `Unknown`.
pub fn classify(lexeme: &str) -> Category {
  if lexeme.is_empty() {
    return Category::Unknown;
  }
  if lexeme.chars().all(char::is_numeric) {
    Category::Number
  } else if lexeme.chars().all(|c| c.is_ascii_alphabetic()) {
    Category::Identifier
  } else {
    Category::Unknown
  }
}

/// Human-friendly description used in diagnostics.
pub fn describe_token(token: Option<&Token>) -> String {
  match token {
    Some(t) => t.lexeme.clone(),
    None => "end of input".to_string(),
  }
}

fn push(tokens: &mut Vec<Token>, token: Token) {
  trace!("token {:?} ({})", token.lexeme, token.category);
  tokens.push(token);
}

/// Word being accumulated between delimiters.
#[derive(Default)]
struct Pending {
  text: String,
  start: usize,
}

impl Pending {
  fn push(&mut self, loc: usize, c: char) {
    if self.text.is_empty() {
      self.start = loc;
    }
    self.text.push(c);
  }

  fn flush(&mut self, tokens: &mut Vec<Token>) {
    if self.text.is_empty() {
      return;
    }
    let text = std::mem::take(&mut self.text);
    push(tokens, Token::word(text, self.start));
  }
}
