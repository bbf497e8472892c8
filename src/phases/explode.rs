use tracing::trace;

use super::tokenize::Token;
use crate::diagnosed::Diagnosed;

#[derive(Default)]
pub struct ExplodePhase;

impl ExplodePhase {
  pub fn new() -> Self {
    Self
  }
  /// Split list values into one token per item.
  ///
  /// A value is split only when it directly follows a name that
  /// `separator_lookup` maps to a separator. Errors pass through untouched.
  pub fn explode<F>(&self, tokens: Diagnosed<Vec<Token>>, separator_lookup: F) -> Diagnosed<Vec<Token>>
  where
    F: Fn(&str) -> Option<char>,
  {
    tokens.map_value(|tokens| {
      let mut exploded = Vec::with_capacity(tokens.len());
      let mut pending = None;
      for token in tokens {
        let separator = match &token {
          Token::Name(name) => separator_lookup(name),
          Token::Value(_) => None,
        };
        match (pending, token) {
          (Some(sep), Token::Value(text)) => {
            trace!(value = text.as_str(), separator = %sep, "exploding list value");
            exploded.extend(text.split(sep).map(Token::value));
          }
          (_, token) => exploded.push(token),
        }
        pending = separator;
      }
      exploded
    })
  }
}
