use std::env::VarError;
use std::str::FromStr;

use thiserror::Error;

use crate::predicate::{Predicates, UnknownPredicateError};

/// Environment variable selecting the absence predicate by name.
pub const PREDICATE_VAR: &str = "MAYBE_PREDICATE";

/// Loads a `.env` file from the current directory or its ancestors into the process environment, if one exists.
/// Variables that are already set are not overridden.
pub fn load_dotenv_into_env() {
  match dotenvy::dotenv() {
    Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
    Err(e) if e.not_found() => {} // Ignore: .env file is not required.
    Err(cause) => tracing::warn!(%cause, "failed to load .env file"),
  }
}

#[derive(Debug, Error)]
pub enum EnvError {
  #[error("Environment variable '{var}' is not valid unicode")]
  NotUnicode { var: &'static str },
  #[error("Environment variable '{var}' is invalid: {source}")]
  Predicate { var: &'static str, source: UnknownPredicateError },
}

/// Reads `var` from the environment, returning `None` when it is not set.
pub fn var_opt(var: &'static str) -> Result<Option<String>, EnvError> {
  match std::env::var(var) {
    Ok(value) => Ok(Some(value)),
    Err(VarError::NotPresent) => Ok(None),
    Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode { var }),
  }
}

/// Reads the absence predicate from [`PREDICATE_VAR`], defaulting to [`Predicates::DEFINED`].
pub fn predicate_from_env() -> Result<Predicates, EnvError> {
  parse_predicate(var_opt(PREDICATE_VAR)?.as_deref())
}

fn parse_predicate(value: Option<&str>) -> Result<Predicates, EnvError> {
  match value {
    None => Ok(Predicates::default()),
    Some(value) => Predicates::from_str(value).map_err(|source| EnvError::Predicate { var: PREDICATE_VAR, source }),
  }
}
