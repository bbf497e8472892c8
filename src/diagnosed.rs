use crate::error::TokenError;

/// A value together with the errors collected while computing it.
///
/// The value is always usable, even when `errors` is not empty; whether an
/// error is fatal is up to whoever consumes the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosed<T> {
  pub value: T,
  pub errors: Vec<TokenError>,
}

impl<T> Diagnosed<T> {
  pub fn new(value: T, errors: Vec<TokenError>) -> Self {
    Self { value, errors }
  }

  pub fn ok(value: T) -> Self {
    Self::new(value, Vec::new())
  }

  /// Transform the value, keeping the errors as they are
  pub fn map_value<U, F>(self, f: F) -> Diagnosed<U>
  where
    F: FnOnce(T) -> U,
  {
    Diagnosed {
      value: f(self.value),
      errors: self.errors,
    }
  }

  pub fn has_errors(&self) -> bool {
    !self.errors.is_empty()
  }

  pub fn into_parts(self) -> (T, Vec<TokenError>) {
    (self.value, self.errors)
  }
}
