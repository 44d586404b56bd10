//! Parameters that are either a plain value or a function producing that value.

/// Either a plain value, or a zero-argument function that produces it when needed.
///
/// Used by [`Maybe::get_or_else`](crate::Maybe::get_or_else), [`Maybe::or_else`](crate::Maybe::or_else), and as
/// the `none` branch of a [`Matcher`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Fallback<T, F> {
  Value(T),
  With(F),
}

impl<T> Fallback<T, fn() -> T> {
  /// Creates a fallback from a plain value.
  #[inline]
  pub const fn value(value: T) -> Self { Self::Value(value) }
}

impl<T, F: FnOnce() -> T> Fallback<T, F> {
  /// Creates a fallback from a function that is only called when the fallback is needed.
  #[inline]
  pub const fn with(f: F) -> Self { Self::With(f) }

  /// Returns the plain value, or calls the function.
  #[inline]
  pub fn resolve(self) -> T {
    match self {
      Self::Value(value) => value,
      Self::With(f) => f(),
    }
  }
}

impl<T> From<T> for Fallback<T, fn() -> T> {
  #[inline]
  fn from(value: T) -> Self { Self::Value(value) }
}


/// Either a plain value, or a one-argument function producing it from the payload of a present option.
///
/// Used as the `some` branch of a [`Matcher`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Branch<T, F> {
  Value(T),
  With(F),
}

impl<A, T> Branch<T, fn(A) -> T> {
  /// Creates a branch from a plain value, ignoring the payload.
  #[inline]
  pub const fn value(value: T) -> Self { Self::Value(value) }
}

impl<T, F> Branch<T, F> {
  /// Creates a branch from a function that receives the payload.
  #[inline]
  pub const fn with(f: F) -> Self { Self::With(f) }

  /// Returns the plain value, or calls the function with `payload`.
  #[inline]
  pub fn resolve<A>(self, payload: A) -> T where F: FnOnce(A) -> T {
    match self {
      Self::Value(value) => value,
      Self::With(f) => f(payload),
    }
  }
}


/// The two branches of [`Maybe::match_with`](crate::Maybe::match_with). Exactly one is evaluated.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<T, N, S> {
  pub none: Fallback<T, N>,
  pub some: Branch<T, S>,
}

impl<T, N, S> Matcher<T, N, S> {
  #[inline]
  pub const fn new(none: Fallback<T, N>, some: Branch<T, S>) -> Self {
    Self { none, some }
  }
}


#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn fallback_value_is_returned() {
    assert_eq!(Fallback::value(1).resolve(), 1);
    let fallback: Fallback<&str, fn() -> &'static str> = "a".into();
    assert_eq!(fallback.resolve(), "a");
  }

  #[test]
  fn fallback_function_is_called_on_resolve() {
    let mut calls = 0;
    let fallback = Fallback::with(|| {
      calls += 1;
      2
    });
    assert_eq!(fallback.resolve(), 2);
    assert_eq!(calls, 1);
  }

  #[test]
  fn branch_receives_payload() {
    assert_eq!(Branch::with(|n: i32| n * 2).resolve(21), 42);
    assert_eq!(Branch::value("constant").resolve(21), "constant");
  }
}
