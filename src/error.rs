//! Diagnostics shared by the tokenizer and the grammar engine.
//!
//! Every failure is data: the first error found aborts the stage and is
//! handed back to the caller with its message intact.

use snafu::Snafu;

pub type LexResult<T> = std::result::Result<T, LexError>;
pub type SyntaxResult<T> = std::result::Result<T, SyntaxError>;
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while scanning characters.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum LexError {
  #[snafu(display("Error: Invalid character '{ch}'"))]
  InvalidCharacter { ch: char, loc: usize },
}

/// Failures raised by the grammar procedures.
///
/// `near` holds the lexeme the diagnosis points at, or `None` once the
/// cursor has run off the end of the token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum SyntaxError {
  /// The operand after `+` or `*` failed to parse. The `*` form keeps the
  /// parenthesis wording the diagnostics have always used.
  #[snafu(display("Error: {} {}", doubled_subject(*operator), near_clause(near)))]
  DoubledOperator { operator: char, near: Option<String> },

  #[snafu(display("Error: Unmatched parentheses {}", near_clause(near)))]
  UnmatchedParen { near: Option<String> },

  #[snafu(display("Error: {}", invalid_token_message(near)))]
  InvalidToken { near: Option<String> },

  /// A complete expression was parsed but tokens were left over.
  #[snafu(display("Invalid input string."))]
  InvalidInputString,
}

/// Any failure of the tokenize-then-parse pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
  #[snafu(display("{source}"))]
  Lex { source: LexError },

  #[snafu(display("{source}"))]
  Syntax { source: SyntaxError },
}

fn near_clause(near: &Option<String>) -> String {
  match near {
    Some(lexeme) => format!("near token '{lexeme}'"),
    None => "at end of input".to_string(),
  }
}

fn doubled_subject(operator: char) -> String {
  match operator {
    '*' => "Unmatched parentheses".to_string(),
    op => format!("Two consecutive '{op}' signs"),
  }
}

fn invalid_token_message(near: &Option<String>) -> String {
  match near {
    Some(_) => format!("Invalid input {}", near_clause(near)),
    None => "Unexpected end of input".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn doubled_plus_names_the_operator() {
    let err = SyntaxError::DoubledOperator {
      operator: '+',
      near: Some("+".to_string()),
    };
    assert_eq!(
      err.to_string(),
      "Error: Two consecutive '+' signs near token '+'"
    );
  }

  #[test]
  fn doubled_star_reuses_parenthesis_wording() {
    let err = SyntaxError::DoubledOperator {
      operator: '*',
      near: None,
    };
    assert_eq!(err.to_string(), "Error: Unmatched parentheses at end of input");
  }

  #[test]
  fn exhausted_invalid_token() {
    let err = SyntaxError::InvalidToken { near: None };
    assert_eq!(err.to_string(), "Error: Unexpected end of input");
  }

  #[test]
  fn pipeline_error_is_transparent() {
    let err = Error::Lex {
      source: LexError::InvalidCharacter { ch: '#', loc: 2 },
    };
    assert_eq!(err.to_string(), "Error: Invalid character '#'");
  }
}
