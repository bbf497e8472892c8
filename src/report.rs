use ansi_term::Colour;
use std::io::{self, Write};

use crate::diagnosed::Diagnosed;
use crate::phases::Token;

/// Print a tokenization result to stdout
pub fn print(result: &Diagnosed<Vec<Token>>, colors: bool) -> io::Result<()> {
  write_to_buffer(result, colors, &mut io::stdout().lock())
}

/// Render a tokenization result
///
/// One token per line (`Name(x)` / `Value(y)`), followed by one
/// `error: <message>` line per collected error, in detection order.
pub fn render(result: &Diagnosed<Vec<Token>>, colors: bool) -> String {
  let mut output = Vec::new();
  // writing into a Vec cannot fail
  let _ = write_to_buffer(result, colors, &mut output);
  String::from_utf8(output).unwrap_or_default()
}

fn write_to_buffer(result: &Diagnosed<Vec<Token>>, colors: bool, output: &mut dyn Write) -> io::Result<()> {
  for token in &result.value {
    let line = token.to_string();
    let line = if !colors {
      line
    } else if token.is_name() {
      Colour::Cyan.paint(line).to_string()
    } else {
      Colour::Green.paint(line).to_string()
    };
    writeln!(output, "{}", line)?;
  }
  for error in &result.errors {
    let line = format!("error: {}", error);
    if colors {
      writeln!(output, "{}", Colour::Red.paint(line))?;
    } else {
      writeln!(output, "{}", line)?;
    }
  }
  output.flush()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::TokenError;

  #[test]
  fn test_render_without_colors() {
    let result = Diagnosed::new(
      vec![Token::name("v"), Token::value("file")],
      vec![TokenError::UnknownOption("q".to_string())],
    );

    assert_eq!(
      render(&result, false),
      "Name(v)\nValue(file)\nerror: Option 'q' is unknown\n"
    );
  }

  #[test]
  fn test_render_with_colors() {
    let result = Diagnosed::new(
      vec![Token::name("v")],
      vec![TokenError::BadFormatToken("--=x".to_string())],
    );
    let output = render(&result, true);

    assert!(output.contains(&Colour::Cyan.paint("Name(v)").to_string()));
    assert!(output.contains(&Colour::Red.paint("error: Token '--=x' is not recognized").to_string()));
  }

  struct BrokenPipe;

  impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn test_write_failure_is_returned() {
    let result = Diagnosed::ok(vec![Token::value("x")]);
    let err = write_to_buffer(&result, false, &mut BrokenPipe).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
  }

  #[test]
  fn test_error_write_failure_is_returned() {
    let result = Diagnosed::new(Vec::new(), vec![TokenError::UnknownOption("q".to_string())]);

    assert!(write_to_buffer(&result, true, &mut BrokenPipe).is_err());
  }

  #[test]
  fn test_render_empty() {
    assert_eq!(render(&Diagnosed::ok(Vec::new()), false), "");
  }
}
