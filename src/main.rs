use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use exprparse::{SymbolTable, parser, tokenize};
use log::debug;

/// Print the token listing, the symbol table and then the parse tree or the
/// first diagnostic. Returns whether the input was accepted.
fn report(input: &str, out: &mut impl Write) -> io::Result<bool> {
  let tokens = match tokenize(input) {
    Ok(tokens) => tokens,
    Err(err) => {
      writeln!(out, "{err}")?;
      return Ok(false);
    }
  };

  if tokens.is_empty() {
    debug!("no tokens in input");
    return Ok(true);
  }

  writeln!(out, "\nLexemes and Tokens:")?;
  for token in &tokens {
    writeln!(out, "{}: {}", token.lexeme, token.category)?;
  }

  writeln!(out, "\nSymbol Table:")?;
  write!(out, "{}", SymbolTable::from_tokens(&tokens))?;

  match parser::parse(&tokens) {
    Ok(tree) => {
      writeln!(out, "\nParse Tree:")?;
      write!(out, "{tree}")?;
      Ok(true)
    }
    Err(err) => {
      writeln!(out, "{err}")?;
      Ok(false)
    }
  }
}

fn read_expression() -> io::Result<String> {
  print!("Enter an input string: ");
  io::stdout().flush()?;
  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() {
  env_logger::init();

  let args: Vec<String> = env::args().collect();
  let input = match args.len() {
    1 => read_expression(),
    2 => Ok(args[1].clone()),
    _ => {
      let program = args.first().map(String::as_str).unwrap_or("exprparse");
      eprintln!("usage: {program} [expr]");
      process::exit(1);
    }
  };

  let accepted = input.and_then(|input| report(&input, &mut io::stdout().lock()));
  match accepted {
    Ok(true) => {}
    Ok(false) => process::exit(1),
    Err(err) => {
      eprintln!("{err}");
      process::exit(1);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run(input: &str) -> (bool, String) {
    let mut out = Vec::new();
    let accepted = report(input, &mut out).unwrap();
    (accepted, String::from_utf8(out).unwrap())
  }

  #[test]
  fn test_report_success() {
    let (accepted, text) = run("a+1");
    assert!(accepted);
    let expected = "
Lexemes and Tokens:
a: id
+: +
1: num

Symbol Table:
a: id
1: num

Parse Tree:
├── E
│   ├── T
│   │   └── F
│   │       └── a
│   └── E'
│       ├── +
│       └── T
│           └── F
│               └── 1
";
    assert_eq!(text, expected);
  }

  #[test]
  fn test_report_lexical_error_prints_only_message() {
    let (accepted, text) = run("a # b");
    assert!(!accepted);
    assert_eq!(text, "Error: Invalid character '#'\n");
  }

  #[test]
  fn test_report_syntax_error_follows_listing() {
    let (accepted, text) = run("( x");
    assert!(!accepted);
    assert!(text.starts_with("\nLexemes and Tokens:\n(: (\nx: id\n"));
    assert!(text.ends_with("\nx: id\nError: Unmatched parentheses at end of input\n"));
  }

  #[test]
  fn test_report_empty_input_is_silent() {
    assert_eq!(run("   "), (true, String::new()));
  }
}
