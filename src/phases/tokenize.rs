use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::diagnosed::Diagnosed;
use crate::error::TokenError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
  /// An option identifier, without its leading dashes
  Name(String),
  /// A literal argument
  Value(String),
}

impl Token {
  pub fn name(text: impl Into<String>) -> Self {
    Token::Name(text.into())
  }

  pub fn value(text: impl Into<String>) -> Self {
    Token::Value(text.into())
  }

  pub fn is_name(&self) -> bool {
    matches!(self, Token::Name(_))
  }

  pub fn is_value(&self) -> bool {
    matches!(self, Token::Value(_))
  }

  pub fn text(&self) -> &str {
    match self {
      Token::Name(text) | Token::Value(text) => text,
    }
  }

  pub fn into_text(self) -> String {
    match self {
      Token::Name(text) | Token::Value(text) => text,
    }
  }
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Token::Name(text) => write!(f, "Name({})", text),
      Token::Value(text) => write!(f, "Value({})", text),
    }
  }
}

#[derive(Default)]
pub struct TokenizePhase;

impl TokenizePhase {
  pub fn new() -> Self {
    Self
  }
  /// Classify every argument, then drop the names `name_lookup` rejects.
  ///
  /// Lexing is optimistic: a cluster member only needs to be known to keep the
  /// cluster going, and the final filter decides which names survive. Each
  /// rejected name becomes a [`TokenError::UnknownOption`], appended after
  /// any lexer errors.
  pub fn tokenize<S, F>(&self, arguments: &[S], name_lookup: F) -> Diagnosed<Vec<Token>>
  where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
  {
    let mut errors = Vec::new();
    let mut tokens = Vec::new();
    for arg in arguments {
      let arg = arg.as_ref();
      if !arg.starts_with('-') {
        tokens.push(Token::value(arg));
      } else if arg.starts_with("--") {
        tokens.extend(self.tokenize_long_name(arg, &mut errors));
      } else {
        tokens.extend(self.tokenize_short_name(arg, &name_lookup));
      }
    }
    let (known, unknown): (Vec<Token>, Vec<Token>) = tokens
      .into_iter()
      .partition(|token| !token.is_name() || name_lookup(token.text()));
    for token in unknown {
      debug!(name = token.text(), "dropping unknown option");
      errors.push(TokenError::UnknownOption(token.into_text()));
    }
    Diagnosed::new(known, errors)
  }
  /// Lex a `-x` style argument: a negative number, a single flag, or a
  /// cluster of flags with an optional inline value at the end.
  fn tokenize_short_name<F>(&self, value: &str, name_lookup: &F) -> Vec<Token>
  where
    F: Fn(&str) -> bool,
  {
    let text = &value[1..];
    let mut chars = text.char_indices();
    let first = match chars.next() {
      Some((_, c)) => c,
      // lone "-", the usual stdin marker
      None => return vec![Token::value(value)],
    };
    if first.is_numeric() {
      return vec![Token::value(value)];
    }
    if first.len_utf8() == text.len() {
      return vec![Token::name(text)];
    }
    let mut tokens = vec![Token::name(first.to_string())];
    let mut seen = HashSet::from([first]);
    let mut rest_start = text.len();
    for (i, c) in chars {
      let name = c.to_string();
      if !seen.contains(&c) && name_lookup(&name) {
        seen.insert(c);
        tokens.push(Token::Name(name));
      } else {
        rest_start = i;
        break;
      }
    }
    if rest_start < text.len() {
      trace!(cluster = value, inline = &text[rest_start..], "cluster carries an inline value");
      tokens.push(Token::value(&text[rest_start..]));
    }
    tokens
  }
  /// Lex a `--name` or `--name=value` argument.
  ///
  /// Only the segment between the first and second `=` is kept as the value:
  /// `--opt=a=b` yields `Value(a)`.
  fn tokenize_long_name(&self, value: &str, errors: &mut Vec<TokenError>) -> Vec<Token> {
    let text = &value[2..];
    // bare "--" only gets here when dash-dash handling is off
    if text.is_empty() {
      return Vec::new();
    }
    match text.split_once('=') {
      None => vec![Token::name(text)],
      Some(("", _)) => {
        debug!(token = value, "long option has an empty name");
        errors.push(TokenError::BadFormatToken(value.to_string()));
        Vec::new()
      }
      Some((name, rest)) => {
        let assigned = rest.split('=').next().unwrap_or(rest);
        vec![Token::name(name), Token::value(assigned)]
      }
    }
  }
}
