use tracing::debug;

use crate::diagnosed::Diagnosed;
use crate::phases::{DashDashPhase, ExplodePhase, Token, TokenizePhase};
use crate::schema::Schema;

pub struct Pipeline {
  pub tokenize: TokenizePhase,
  pub dash_dash: DashDashPhase,
  pub explode: ExplodePhase,
  enable_dash_dash: bool,
}

impl Default for Pipeline {
  fn default() -> Self {
    Self::new()
  }
}

impl Pipeline {
  pub fn new() -> Self {
    Self {
      tokenize: TokenizePhase::new(),
      dash_dash: DashDashPhase::new(),
      explode: ExplodePhase::new(),
      enable_dash_dash: true,
    }
  }

  /// Turn `--` handling on or off. When off, a bare `--` is lexed like any
  /// other argument and produces no token.
  pub fn with_dash_dash(mut self, enabled: bool) -> Self {
    self.enable_dash_dash = enabled;
    self
  }

  pub fn run<S: AsRef<str>>(&self, arguments: &[S], schema: &Schema) -> Diagnosed<Vec<Token>> {
    let name_lookup = |name: &str| schema.contains(name);

    // Phase 1: Split off literal arguments and tokenize the rest
    let tokenized = if self.enable_dash_dash {
      self
        .dash_dash
        .preprocess(arguments, |args| self.tokenize.tokenize(args, name_lookup))
    } else {
      self.tokenize.tokenize(arguments, name_lookup)
    };

    // Phase 2: Explode list values
    let result = self.explode.explode(tokenized, |name| schema.separator(name));

    debug!(
      arguments = arguments.len(),
      tokens = result.value.len(),
      errors = result.errors.len(),
      "tokenized arguments"
    );
    result
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::TokenError;

  fn schema() -> Schema {
    Schema::new()
      .option("v")
      .option("verbose")
      .option("o")
      .list_option("list", ',')
  }

  #[test]
  fn test_full_pipeline() {
    let args = ["-vofile", "--list=a,b,c", "--bogus", "--=x", "--", "--list", "-v"];
    let result = Pipeline::new().run(&args, &schema());

    assert_eq!(
      result.value,
      vec![
        Token::name("v"),
        Token::name("o"),
        Token::value("file"),
        Token::name("list"),
        Token::value("a"),
        Token::value("b"),
        Token::value("c"),
        Token::value("--list"),
        Token::value("-v"),
      ]
    );
    assert_eq!(
      result.errors,
      vec![
        TokenError::BadFormatToken("--=x".to_string()),
        TokenError::UnknownOption("bogus".to_string()),
      ]
    );
  }

  #[test]
  fn test_list_value_after_separator_is_exploded() {
    let args = ["--list", "--", "x,y"];
    let result = Pipeline::new().run(&args, &schema());

    assert_eq!(
      result.value,
      vec![Token::name("list"), Token::value("x"), Token::value("y")]
    );
  }

  #[test]
  fn test_dash_dash_disabled() {
    let args = ["a", "--", "-v", "--verbose"];
    let result = Pipeline::new().with_dash_dash(false).run(&args, &schema());

    assert_eq!(
      result.value,
      vec![Token::value("a"), Token::name("v"), Token::name("verbose")]
    );
    assert!(result.errors.is_empty());
  }

  #[test]
  fn test_values_only() {
    let args = vec!["one".to_string(), "two".to_string(), "three".to_string()];
    let result = Pipeline::new().run(&args, &Schema::new());

    assert_eq!(
      result.value,
      vec![Token::value("one"), Token::value("two"), Token::value("three")]
    );
    assert!(!result.has_errors());
  }
}
