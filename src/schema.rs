use anyhow::{Context, Result, anyhow};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the schema file looked up by [`find_schema`]
pub const SCHEMA_FILE_NAME: &str = "Optfile";

// -v | --verbose | -v, --verbose | --tags=, | -t, --tags=,
const SPEC_PATTERN: &str =
  r"^(?:-(?P<short>[^-\s,])(?:,\s*|$))?(?:--(?P<long>[A-Za-z0-9][A-Za-z0-9_-]*)(?:=(?P<sep>\S))?)?$";

/// The set of configured options. Answers both lookups the tokenizer needs:
/// whether a name is known, and which separator a list option splits on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
  names: HashSet<String>,
  separators: HashMap<String, char>,
}

impl Schema {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn option(mut self, name: impl Into<String>) -> Self {
    self.names.insert(name.into());
    self
  }

  pub fn list_option(mut self, name: impl Into<String>, separator: char) -> Self {
    let name = name.into();
    self.separators.insert(name.clone(), separator);
    self.names.insert(name);
    self
  }

  pub fn contains(&self, name: &str) -> bool {
    self.names.contains(name)
  }

  pub fn separator(&self, name: &str) -> Option<char> {
    self.separators.get(name).copied()
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  /// Parse schema file content: one option spec per line, `#` comments
  pub fn parse(content: &str) -> Result<Self> {
    let pattern = Regex::new(SPEC_PATTERN)?;
    let mut schema = Self::new();
    for (index, line) in content.lines().enumerate() {
      // Allow trailing comments: "-v, --verbose # be chatty"
      let line = match line.find(" # ") {
        Some(comment_start) => &line[..comment_start],
        None => line,
      };
      let spec = line.trim();
      if spec.is_empty() || spec.starts_with('#') {
        continue;
      }
      if !schema.add_spec(&pattern, spec) {
        return Err(anyhow!("Invalid option spec on line {}: '{}'", index + 1, spec));
      }
    }
    Ok(schema)
  }

  /// Add a single option spec such as `-t, --tags=,`
  pub fn parse_spec(&mut self, spec: &str) -> Result<()> {
    let pattern = Regex::new(SPEC_PATTERN)?;
    if self.add_spec(&pattern, spec.trim()) {
      Ok(())
    } else {
      Err(anyhow!("Invalid option spec: '{}'", spec))
    }
  }

  pub fn load(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("Could not read schema file {}", path.display()))?;
    Self::parse(&content).with_context(|| format!("Could not parse schema file {}", path.display()))
  }

  fn add_spec(&mut self, pattern: &Regex, spec: &str) -> bool {
    let Some(captures) = pattern.captures(spec) else {
      return false;
    };
    let short = captures.name("short").map(|m| m.as_str());
    let long = captures.name("long").map(|m| m.as_str());
    let separator = captures.name("sep").and_then(|m| m.as_str().chars().next());
    if short.is_none() && long.is_none() {
      return false;
    }
    for name in [short, long].into_iter().flatten() {
      self.names.insert(name.to_string());
      if let Some(separator) = separator {
        self.separators.insert(name.to_string(), separator);
      }
    }
    true
  }
}

/// Find the nearest schema file, starting at `start` and walking up
pub fn find_schema_from(start: &Path) -> Option<PathBuf> {
  let mut current_dir = start.to_path_buf();
  loop {
    let schema_path = current_dir.join(SCHEMA_FILE_NAME);
    if schema_path.exists() {
      return Some(schema_path);
    }
    if !current_dir.pop() {
      return None;
    }
  }
}

/// Find a schema file in the current directory or parent directories
pub fn find_schema() -> Result<PathBuf> {
  let current_dir = std::env::current_dir()?;
  find_schema_from(&current_dir)
    .ok_or_else(|| anyhow!("No {} found in current directory or parent directories", SCHEMA_FILE_NAME))
}
