use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::fallback::{Fallback, Matcher};
use crate::nullable::Nullable;
use crate::predicate::{Predicate, Predicates};

/// A value that may or may not exist.
///
/// Construct with the smart constructors [`from_nullable`](Self::from_nullable) and [`from_with`](Self::from_with),
/// or directly with [`some`](Self::some) and [`none`](Self::none). Combinators never call a caller-supplied function
/// on absence.
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Maybe<A> {
  #[default]
  None,
  Some(A),
}

/// Error returned when the payload of an absent [`Maybe`] is requested.
#[derive(Default, Clone, Copy, Eq, PartialEq, Debug, Error)]
#[error("Expected a present value, but the option is None")]
pub struct NoneError;

// Construction

impl<A> Maybe<A> {
  /// The absent value. All absent values are interchangeable; this one is shared.
  pub const NONE: Self = Maybe::None;

  #[inline]
  pub const fn some(value: A) -> Self { Maybe::Some(value) }

  #[inline]
  pub const fn none() -> Self { Self::NONE }

  /// Smart constructor with the default [`DEFINED`](Predicates::DEFINED) policy: returns `None` only if `element`
  /// is in the absent representation (`Option::None`), and `Some` for everything else, including zero, empty text,
  /// and `false`.
  #[inline]
  pub fn from_nullable<N: Nullable<Value=A>>(element: N) -> Self {
    element.into_present().into()
  }

  /// Smart constructor: returns `None` if `element` is in the absent representation, or if `predicate` rejects it;
  /// `Some(element)` otherwise. `predicate` is never called on absent input.
  #[inline]
  pub fn from_with<N, P>(element: N, predicate: P) -> Self where
    N: Nullable<Value=A>,
    P: Predicate<A>,
  {
    match element.into_present() {
      Some(value) if predicate.test(&value) => Maybe::Some(value),
      Some(_) => {
        tracing::trace!("present value rejected by predicate; returning None");
        Maybe::None
      }
      None => Maybe::None,
    }
  }

  /// Smart constructor with a named predicate from the [`Predicates`] table.
  #[inline]
  pub fn from_predicate<N>(element: N, predicate: Predicates) -> Self where
    N: Nullable<Value=A>,
    A: crate::predicate::Presence,
  {
    Self::from_with(element, predicate)
  }
}

// Queries

impl<A> Maybe<A> {
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Maybe::Some(_)) }

  #[inline]
  pub const fn is_none(&self) -> bool { !self.is_some() }

  /// Returns the payload.
  ///
  /// # Panics
  ///
  /// Panics if `self` is `None`. Check with [`is_some`](Self::is_some), match on the variants, or use
  /// [`try_get`](Self::try_get) instead.
  #[inline]
  #[track_caller]
  pub fn get(self) -> A {
    match self {
      Maybe::Some(value) => value,
      Maybe::None => panic!("called `Maybe::get()` on a `None` value"),
    }
  }

  /// Returns the payload, or [`NoneError`] if `self` is `None`.
  #[inline]
  pub fn try_get(self) -> Result<A, NoneError> {
    match self {
      Maybe::Some(value) => Ok(value),
      Maybe::None => Err(NoneError),
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Maybe<&A> {
    match self {
      Maybe::Some(value) => Maybe::Some(value),
      Maybe::None => Maybe::None,
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<A> {
    match self {
      Maybe::Some(value) => Some(value),
      Maybe::None => None,
    }
  }
}

// Combinators

impl<A> Maybe<A> {
  /// Applies `f` to the payload. If `f` returns the absent representation, the result is `None`. `f` is never called
  /// on `None`.
  ///
  /// The result type must implement [`Nullable`]. Primitives, std collections, smart pointers, arrays, and common std
  /// value types already do; declare your own types with [`impl_present!`](crate::impl_present).
  #[inline]
  pub fn map<R: Nullable>(self, f: impl FnOnce(A) -> R) -> Maybe<R::Value> {
    match self {
      Maybe::Some(value) => Maybe::from_nullable(f(value)),
      Maybe::None => Maybe::None,
    }
  }

  /// Applies `f`, which itself returns an option, to the payload, and returns that option without re-wrapping it.
  #[inline]
  pub fn flat_map<B>(self, f: impl FnOnce(A) -> Maybe<B>) -> Maybe<B> {
    match self {
      Maybe::Some(value) => f(value),
      Maybe::None => Maybe::None,
    }
  }

  /// Returns the payload, or resolves `fallback` if `None`. The fallback is never evaluated on `Some`.
  #[inline]
  pub fn get_or_else<F: FnOnce() -> A>(self, fallback: Fallback<A, F>) -> A {
    match self {
      Maybe::Some(value) => value,
      Maybe::None => fallback.resolve(),
    }
  }

  /// Returns `self` if `Some`, or resolves `fallback` if `None`. The fallback is never evaluated on `Some`.
  #[inline]
  pub fn or_else<F: FnOnce() -> Maybe<A>>(self, fallback: Fallback<Maybe<A>, F>) -> Maybe<A> {
    match self {
      some @ Maybe::Some(_) => some,
      Maybe::None => fallback.resolve(),
    }
  }

  /// Returns `self` if `Some` and `predicate` holds for the payload, `None` otherwise.
  #[inline]
  pub fn filter<P: Predicate<A>>(self, predicate: P) -> Maybe<A> {
    match self {
      Maybe::Some(value) if predicate.test(&value) => Maybe::Some(value),
      _ => Maybe::None,
    }
  }

  /// Evaluates exactly one branch of `matcher`, selected by the variant of `self`.
  #[inline]
  pub fn match_with<T, N, S>(self, matcher: Matcher<T, N, S>) -> T where
    N: FnOnce() -> T,
    S: FnOnce(A) -> T,
  {
    match self {
      Maybe::Some(value) => matcher.some.resolve(value),
      Maybe::None => matcher.none.resolve(),
    }
  }

  /// Calls `f` with the payload for its side effect, and returns `self` unchanged.
  #[inline]
  pub fn inspect(self, f: impl FnOnce(&A)) -> Self {
    if let Maybe::Some(value) = &self {
      f(value);
    }
    self
  }

  /// Curried pairwise combination; see [`combine`].
  #[inline]
  pub fn combine<B, C, F>(f: F) -> impl Fn(Maybe<A>, Maybe<B>) -> Maybe<C::Value> where
    F: Fn(A, B) -> C,
    C: Nullable,
  {
    combine(f)
  }

  /// Lifts a unary function into one over options.
  #[inline]
  pub fn lift<R, F>(f: F) -> impl Fn(Maybe<A>) -> Maybe<R::Value> where
    F: Fn(A) -> R,
    R: Nullable,
  {
    move |maybe: Maybe<A>| maybe.map(&f)
  }

  /// Applies a binary function to two options; `Some` only if both are present.
  #[inline]
  pub fn lift2<B, R: Nullable>(self, other: Maybe<B>, f: impl FnOnce(A, B) -> R) -> Maybe<R::Value> {
    self.flat_map(|a| other.map(|b| f(a, b)))
  }
}

/// Turns the binary function `f` into a binary function over options: the result is `Some(f(a, b))` only if both
/// arguments are present, and the first argument is checked before the second. The returned function can be passed
/// directly to [`Iterator::reduce`] or [`Iterator::fold`].
#[inline]
pub fn combine<A, B, C, F>(f: F) -> impl Fn(Maybe<A>, Maybe<B>) -> Maybe<C::Value> where
  F: Fn(A, B) -> C,
  C: Nullable,
{
  move |maybe_a: Maybe<A>, maybe_b: Maybe<B>| maybe_a.flat_map(|a| maybe_b.map(|b| f(a, b)))
}

// Conversions

impl<A> From<Option<A>> for Maybe<A> {
  #[inline]
  fn from(option: Option<A>) -> Self {
    match option {
      Some(value) => Maybe::Some(value),
      None => Maybe::None,
    }
  }
}

impl<A> From<Maybe<A>> for Option<A> {
  #[inline]
  fn from(maybe: Maybe<A>) -> Self { maybe.into_option() }
}

impl<A> IntoIterator for Maybe<A> {
  type Item = A;
  type IntoIter = std::option::IntoIter<A>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.into_option().into_iter() }
}

impl<A> Nullable for Maybe<A> {
  type Value = Self;
  #[inline]
  fn into_present(self) -> Option<Self::Value> { Some(self) }
}

impl<A> crate::predicate::Presence for Maybe<A> {
  #[inline]
  fn is_truthy(&self) -> bool { true }
}

#[cfg(feature = "serde")]
impl<A: Serialize> Serialize for Maybe<A> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Maybe::Some(value) => serializer.serialize_some(value),
      Maybe::None => serializer.serialize_none(),
    }
  }
}
#[cfg(feature = "serde")]
impl<'de, A: Deserialize<'de>> Deserialize<'de> for Maybe<A> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<A>::deserialize(deserializer).map(Into::into)
  }
}

impl<A: Display> Display for Maybe<A> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Maybe::Some(value) => write!(f, "Some({})", value),
      Maybe::None => f.write_str("None"),
    }
  }
}
