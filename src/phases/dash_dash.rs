use tracing::debug;

use super::tokenize::Token;
use crate::diagnosed::Diagnosed;

#[derive(Default)]
pub struct DashDashPhase;

impl DashDashPhase {
  pub fn new() -> Self {
    Self
  }
  /// Hand the arguments before the first `--` to `tokenizer` and append every
  /// argument after it as a literal value, without lexing.
  pub fn preprocess<S, F>(&self, arguments: &[S], tokenizer: F) -> Diagnosed<Vec<Token>>
  where
    S: AsRef<str>,
    F: FnOnce(&[S]) -> Diagnosed<Vec<Token>>,
  {
    let Some(index) = arguments.iter().position(|arg| arg.as_ref() == "--") else {
      return tokenizer(arguments);
    };
    debug!(index, literals = arguments.len() - index - 1, "found -- separator");
    let literals = arguments[index + 1..].iter().map(|arg| Token::value(arg.as_ref()));
    tokenizer(&arguments[..index]).map_value(|mut tokens| {
      tokens.extend(literals);
      tokens
    })
  }
}
