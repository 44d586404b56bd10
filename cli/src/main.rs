use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use maybe_core::app::env::{self, var_opt};
use maybe_core::app::tracing::AppTracingBuilder;
use maybe_core::{combine, Fallback, Maybe, Predicates};

/// Environment variable with an optional path to a log file.
const LOG_FILE_VAR: &str = "MAYBE_LOG_FILE";

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(var_opt(LOG_FILE_VAR)?)
    .build();

  let predicate = env::predicate_from_env()?;
  debug!(%predicate, "selected absence predicate");

  let mut tokens: Vec<String> = std::env::args().skip(1).collect();
  if tokens.is_empty() {
    debug!("no arguments; reading tokens from stdin");
    for line in io::stdin().lock().lines() {
      tokens.extend(line?.split_whitespace().map(str::to_string));
    }
  }

  let report = Report::new(&tokens, predicate);
  info!(tokens = tokens.len(), present = report.present_count(), "processed tokens");

  let mut stdout = io::stdout().lock();
  report.write(&mut stdout)?;
  stdout.flush()?;
  Ok(())
}

/// Every token turned into an option, and the sum of all of them.
#[derive(Debug)]
struct Report<'t> {
  entries: Vec<(&'t str, Maybe<i64>)>,
  sum: Maybe<i64>,
}

impl<'t> Report<'t> {
  fn new(tokens: &'t [String], predicate: Predicates) -> Self {
    let entries: Vec<_> = tokens.iter()
      .map(|token| (token.as_str(), parse(token, predicate)))
      .collect();
    let sum = entries.iter()
      .map(|(_, maybe)| *maybe)
      .reduce(combine(|a: i64, b: i64| a.checked_add(b)))
      .unwrap_or(Maybe::NONE);
    Self { entries, sum }
  }

  fn present_count(&self) -> usize {
    self.entries.iter().filter(|(_, maybe)| maybe.is_some()).count()
  }

  fn write(&self, writer: &mut impl Write) -> io::Result<()> {
    for (token, maybe) in &self.entries {
      writeln!(writer, "{:>12}  {}", token, maybe)?;
    }
    let sum = self.sum.map(|sum| sum.to_string()).get_or_else(Fallback::with(|| "none".to_string()));
    writeln!(writer, "{:>12}  {}", "sum", sum)
  }
}

/// Parses `token` as an integer; unparseable tokens are absent, and parsed ones are kept only if `predicate` holds.
fn parse(token: &str, predicate: Predicates) -> Maybe<i64> {
  Maybe::from_predicate(token.parse::<i64>().ok(), predicate)
}


#[cfg(test)]
mod test {
  use super::*;

  fn tokens(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
  }

  #[test]
  fn sums_present_tokens() {
    let tokens = tokens("1 2 3");
    let report = Report::new(&tokens, Predicates::DEFINED);
    assert_eq!(report.sum, Maybe::some(6));
    assert_eq!(report.present_count(), 3);
  }

  #[test]
  fn unparseable_token_makes_sum_absent() {
    let tokens = tokens("1 a2a 3");
    let report = Report::new(&tokens, Predicates::DEFINED);
    assert_eq!(report.entries[1], ("a2a", Maybe::NONE));
    assert!(report.sum.is_none());
  }

  #[test]
  fn truthy_rejects_zero() {
    let tokens = tokens("0 5");
    assert!(Report::new(&tokens, Predicates::TRUTHY).sum.is_none());
    assert_eq!(Report::new(&tokens, Predicates::DEFINED).sum, Maybe::some(5));
  }

  #[test]
  fn overflow_makes_sum_absent() {
    let tokens = vec![i64::MAX.to_string(), "1".to_string()];
    assert!(Report::new(&tokens, Predicates::ANY).sum.is_none());
  }

  #[test]
  fn empty_input_has_no_sum() {
    assert!(Report::new(&[], Predicates::DEFINED).sum.is_none());
  }

  #[test]
  fn writes_report() {
    let tokens = tokens("4 x");
    let mut output = Vec::new();
    Report::new(&tokens, Predicates::DEFINED).write(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, "           4  Some(4)\n           x  None\n         sum  none\n");
  }
}
