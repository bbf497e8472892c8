use thiserror::Error;

/// Problems found while tokenizing. These never stop the pipeline; they travel
/// next to the token stream inside a [`Diagnosed`](crate::Diagnosed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
  /// A well-formed option whose name the schema does not know
  #[error("Option '{0}' is unknown")]
  UnknownOption(String),
  /// A long option with an empty name, e.g. `--=value`
  #[error("Token '{0}' is not recognized")]
  BadFormatToken(String),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_messages() {
    assert_eq!(
      TokenError::UnknownOption("x".to_string()).to_string(),
      "Option 'x' is unknown"
    );
    assert_eq!(
      TokenError::BadFormatToken("--=x".to_string()).to_string(),
      "Token '--=x' is not recognized"
    );
  }
}
