//! Predicates that decide whether a present raw value is kept by [`Maybe::from_with`](crate::Maybe::from_with).

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a value behaves in a boolean context.
pub trait Presence {
  /// `false` only for the strict representation of absence.
  #[inline]
  fn is_defined(&self) -> bool { true }

  /// `false` for the representation of absence and for every value a boolean context treats as false: `false`,
  /// numeric zero, NaN, and empty text.
  fn is_truthy(&self) -> bool;
}

impl Presence for bool {
  #[inline]
  fn is_truthy(&self) -> bool { *self }
}

macro_rules! impl_presence_int {
  ($($ty:ty),*) => {
    $(
      impl Presence for $ty {
        #[inline]
        fn is_truthy(&self) -> bool { *self != 0 }
      }
    )*
  };
}
impl_presence_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_presence_float {
  ($($ty:ty),*) => {
    $(
      impl Presence for $ty {
        #[inline]
        fn is_truthy(&self) -> bool { *self != 0.0 && !self.is_nan() }
      }
    )*
  };
}
impl_presence_float!(f32, f64);

impl Presence for char {
  #[inline]
  fn is_truthy(&self) -> bool { true }
}
impl Presence for str {
  #[inline]
  fn is_truthy(&self) -> bool { !self.is_empty() }
}
impl Presence for String {
  #[inline]
  fn is_truthy(&self) -> bool { !self.is_empty() }
}
impl<T> Presence for [T] {
  #[inline]
  fn is_truthy(&self) -> bool { true }
}
impl<T> Presence for Vec<T> {
  #[inline]
  fn is_truthy(&self) -> bool { true }
}

impl<T: Presence> Presence for Option<T> {
  #[inline]
  fn is_defined(&self) -> bool { self.is_some() }
  #[inline]
  fn is_truthy(&self) -> bool { self.as_ref().is_some_and(Presence::is_truthy) }
}

impl<T: Presence + ?Sized> Presence for &T {
  #[inline]
  fn is_defined(&self) -> bool { (**self).is_defined() }
  #[inline]
  fn is_truthy(&self) -> bool { (**self).is_truthy() }
}
impl<T: Presence + ?Sized> Presence for &mut T {
  #[inline]
  fn is_defined(&self) -> bool { (**self).is_defined() }
  #[inline]
  fn is_truthy(&self) -> bool { (**self).is_truthy() }
}

macro_rules! impl_presence_deref {
  ($($ty:ident),*) => {
    $(
      impl<T: Presence + ?Sized> Presence for $ty<T> {
        #[inline]
        fn is_defined(&self) -> bool { (**self).is_defined() }
        #[inline]
        fn is_truthy(&self) -> bool { (**self).is_truthy() }
      }
    )*
  };
}
impl_presence_deref!(Box, Rc, Arc);

impl<B: Presence + ToOwned + ?Sized> Presence for Cow<'_, B> {
  #[inline]
  fn is_defined(&self) -> bool { (**self).is_defined() }
  #[inline]
  fn is_truthy(&self) -> bool { (**self).is_truthy() }
}


/// A unary test over `T`.
///
/// Implemented by every `Fn(&T) -> bool` closure and by the [`Predicates`] table.
pub trait Predicate<T: ?Sized> {
  fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized, F: Fn(&T) -> bool> Predicate<T> for F {
  #[inline]
  fn test(&self, value: &T) -> bool { self(value) }
}


/// Table of named, reusable predicates.
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Predicates {
  /// Rejects absence and every value a boolean context treats as false.
  Truthy,
  /// Rejects only the strict representation of absence; accepts zero, empty text, and `false`.
  #[default]
  Defined,
  /// Accepts everything.
  Any,
}

impl Predicates {
  pub const TRUTHY: Self = Self::Truthy;
  pub const DEFINED: Self = Self::Defined;
  pub const ANY: Self = Self::Any;

  pub const ALL: &'static [Self] = &[Self::TRUTHY, Self::DEFINED, Self::ANY];

  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Truthy => "truthy",
      Self::Defined => "defined",
      Self::Any => "any",
    }
  }

  /// Looks up a predicate by name, ignoring ASCII case.
  #[inline]
  pub fn by_name(name: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|predicate| predicate.name().eq_ignore_ascii_case(name))
  }

  /// Tests a raw value, which may itself be in the absent representation.
  #[inline]
  pub fn test<T: Presence + ?Sized>(self, value: &T) -> bool {
    match self {
      Self::Truthy => value.is_truthy(),
      Self::Defined => value.is_defined(),
      Self::Any => true,
    }
  }
}

/// Tests a payload that is already present. The smart constructor strips the absent representation before a
/// predicate runs, so [`DEFINED`](Predicates::DEFINED) keeps every payload here, including a nested `None`; this is
/// exactly the rule of [`Maybe::from_nullable`](crate::Maybe::from_nullable).
impl<T: Presence + ?Sized> Predicate<T> for Predicates {
  #[inline]
  fn test(&self, value: &T) -> bool {
    match self {
      Self::Defined => true,
      _ => Predicates::test(*self, value),
    }
  }
}

impl Display for Predicates {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("Unknown predicate '{name}'; expected one of: truthy, defined, any")]
pub struct UnknownPredicateError {
  pub name: String,
}

impl FromStr for Predicates {
  type Err = UnknownPredicateError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::by_name(s.trim()).ok_or_else(|| UnknownPredicateError { name: s.to_string() })
  }
}


#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn truthy_rejects_falsy_values() {
    let p = Predicates::TRUTHY;
    assert!(!p.test(&false));
    assert!(!p.test(&0));
    assert!(!p.test(&0.0));
    assert!(!p.test(&f64::NAN));
    assert!(!p.test(""));
    assert!(!p.test(&String::new()));
    assert!(!p.test(&None::<i32>));
    assert!(!p.test(&Some(0)));

    assert!(p.test(&true));
    assert!(p.test(&-1));
    assert!(p.test(&1));
    assert!(p.test("A"));
    assert!(p.test(&Some("A")));
    assert!(p.test(&Vec::<u8>::new()));
  }

  #[test]
  fn defined_rejects_only_absence() {
    let p = Predicates::DEFINED;
    assert!(!p.test(&None::<i32>));
    assert!(p.test(&Some(0)));
    assert!(p.test(&0));
    assert!(p.test(""));
    assert!(p.test(&false));
  }

  #[test]
  fn any_accepts_everything() {
    let p = Predicates::ANY;
    assert!(p.test(&None::<i32>));
    assert!(p.test(&false));
    assert!(p.test(""));
  }

  #[test]
  fn defined_keeps_every_present_payload() {
    assert!(Predicate::test(&Predicates::DEFINED, &None::<i32>));
    assert!(!Predicate::test(&Predicates::TRUTHY, &None::<i32>));
    assert!(Predicate::test(&Predicates::ANY, &None::<i32>));
  }

  #[test]
  fn closures_are_predicates() {
    let positive = |n: &i32| *n > 0;
    assert!(Predicate::test(&positive, &1));
    assert!(!Predicate::test(&positive, &-1));
  }

  #[test]
  fn parse_by_name() {
    assert_eq!("truthy".parse(), Ok(Predicates::TRUTHY));
    assert_eq!("DEFINED".parse(), Ok(Predicates::DEFINED));
    assert_eq!(" any ".parse(), Ok(Predicates::ANY));
    let err = "falsy".parse::<Predicates>().unwrap_err();
    assert_eq!(err.name, "falsy");
    assert_eq!(err.to_string(), "Unknown predicate 'falsy'; expected one of: truthy, defined, any");
  }

  #[test]
  fn names_round_trip_through_display() {
    for predicate in Predicates::ALL {
      assert_eq!(predicate.to_string().parse(), Ok(*predicate));
    }
  }

  #[cfg(feature = "serde")]
  #[test]
  fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Predicates::TRUTHY).unwrap(), "\"truthy\"");
    assert_eq!(serde_json::from_str::<Predicates>("\"any\"").unwrap(), Predicates::ANY);
  }
}
