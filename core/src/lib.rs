//! Optional values and lazily evaluated values, with composable combinators.

pub mod maybe;
pub mod nullable;
pub mod predicate;
pub mod fallback;
pub mod lazy;

pub mod app;

pub use fallback::{Branch, Fallback, Matcher};
pub use lazy::Lazy;
pub use maybe::{combine, Maybe, NoneError};
pub use nullable::Nullable;
pub use predicate::{Predicate, Predicates, Presence, UnknownPredicateError};
