//! Property-based tests for the expression grammar.
//!
//! Strategies build sentences of the grammar out of `id`/`num` leaves and
//! check that the tokenizer and parser accept all of them.

use exprparse::parser::parse;
use exprparse::tokenizer::{Category, tokenize};
use proptest::prelude::*;

fn identifier_strategy() -> impl Strategy<Value = String> {
  "[a-zA-Z]{1,6}"
}

fn number_strategy() -> impl Strategy<Value = String> {
  "[0-9]{1,6}"
}

/// Sentences of E with arbitrary nesting, spaced at random.
fn expression_strategy() -> impl Strategy<Value = String> {
  let leaf = prop_oneof![identifier_strategy(), number_strategy()];
  leaf.prop_recursive(6, 48, 4, |inner| {
    prop_oneof![
      (inner.clone(), inner.clone(), " ?").prop_map(|(l, r, sp)| format!("{l}{sp}+{sp}{r}")),
      (inner.clone(), inner.clone(), " ?").prop_map(|(l, r, sp)| format!("{l}{sp}*{sp}{r}")),
      inner.prop_map(|e| format!("({e})")),
    ]
  })
}

proptest! {
  #[test]
  fn test_generated_sentences_parse(input in expression_strategy()) {
    let tokens = tokenize(&input).unwrap();
    let tree = parse(&tokens).unwrap();

    // Every token ends up as a leaf, in order.
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    prop_assert_eq!(tree.leaves(), lexemes);
  }

  #[test]
  fn test_generated_sentences_only_hold_operands_and_symbols(input in expression_strategy()) {
    for token in tokenize(&input).unwrap() {
      prop_assert!(matches!(
        token.category,
        Category::Number | Category::Identifier | Category::Operator('+' | '*' | '(' | ')')
      ));
    }
  }

  #[test]
  fn test_tokenize_is_deterministic(input in "[a-z0-9+*() ]{0,40}") {
    prop_assert_eq!(tokenize(&input), tokenize(&input));
  }

  #[test]
  fn test_parse_never_panics(input in "[a-z0-9+*() ]{0,40}") {
    let tokens = tokenize(&input).unwrap();
    let _ = parse(&tokens);
  }

  #[test]
  fn test_trailing_close_paren_is_rejected(input in expression_strategy()) {
    let tokens = tokenize(&format!("{input} )")).unwrap();
    prop_assert_eq!(
      parse(&tokens),
      Err(exprparse::SyntaxError::InvalidInputString)
    );
  }
}
