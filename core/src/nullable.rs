//! Raw values that may be in the absent representation.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::OsString;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

/// A raw value that is either present, or in the representation of absence.
///
/// The only absent representation is [`Option::None`]. Every other type implementing this trait is always present,
/// and its [`Value`](Self::Value) is the type itself. This is the rule that both [`Maybe::from_nullable`] and
/// [`Maybe::map`] use to decide when to collapse into [`Maybe::None`].
///
/// Implement this for your own types with [`impl_present!`](crate::impl_present).
///
/// [`Maybe::from_nullable`]: crate::Maybe::from_nullable
/// [`Maybe::map`]: crate::Maybe::map
/// [`Maybe::None`]: crate::Maybe::None
pub trait Nullable {
  /// Type of the value when present.
  type Value;

  /// Returns `Some(value)` if present, or `None` if `self` is the absent representation.
  fn into_present(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
  type Value = T;
  #[inline]
  fn into_present(self) -> Option<T> { self }
}

/// Implements [`Nullable`] for types that are never absent.
#[macro_export]
macro_rules! impl_present {
  ($($ty:ty),* $(,)?) => {
    $(
      impl $crate::nullable::Nullable for $ty {
        type Value = $ty;
        #[inline]
        fn into_present(self) -> Option<Self::Value> { Some(self) }
      }
    )*
  };
}

impl_present!(
  (), bool, char,
  u8, u16, u32, u64, u128, usize,
  i8, i16, i32, i64, i128, isize,
  f32, f64,
  String, PathBuf, OsString,
  Duration, Instant, SystemTime, Ordering,
);

impl<'a, T: ?Sized> Nullable for &'a T {
  type Value = &'a T;
  #[inline]
  fn into_present(self) -> Option<Self::Value> { Some(self) }
}
impl<'a, T: ?Sized> Nullable for &'a mut T {
  type Value = &'a mut T;
  #[inline]
  fn into_present(self) -> Option<Self::Value> { Some(self) }
}

macro_rules! impl_present_generic {
  ($($ty:ident<$($param:ident),+>),* $(,)?) => {
    $(
      impl<$($param),+> Nullable for $ty<$($param),+> {
        type Value = Self;
        #[inline]
        fn into_present(self) -> Option<Self::Value> { Some(self) }
      }
    )*
  };
}

impl_present_generic!(
  Vec<T>, VecDeque<T>, HashSet<T, S>, BTreeSet<T>,
  HashMap<K, V, S>, BTreeMap<K, V>,
  Rc<T>, Arc<T>,
  Result<T, E>,
);

impl<T, const N: usize> Nullable for [T; N] {
  type Value = Self;
  #[inline]
  fn into_present(self) -> Option<Self::Value> { Some(self) }
}

impl<T: ?Sized> Nullable for Box<T> {
  type Value = Self;
  #[inline]
  fn into_present(self) -> Option<Self::Value> { Some(self) }
}
impl<'a, B: ?Sized + ToOwned> Nullable for Cow<'a, B> {
  type Value = Self;
  #[inline]
  fn into_present(self) -> Option<Self::Value> { Some(self) }
}

macro_rules! impl_present_tuple {
  ($(($($param:ident),+)),* $(,)?) => {
    $(
      impl<$($param),+> Nullable for ($($param,)+) {
        type Value = Self;
        #[inline]
        fn into_present(self) -> Option<Self::Value> { Some(self) }
      }
    )*
  };
}

impl_present_tuple!((A), (A, B), (A, B, C), (A, B, C, D));


#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn option_is_the_absent_representation() {
    assert_eq!(None::<i32>.into_present(), None);
    assert_eq!(Some(1).into_present(), Some(1));
  }

  #[test]
  fn plain_values_are_never_absent() {
    assert_eq!(0i32.into_present(), Some(0));
    assert_eq!(false.into_present(), Some(false));
    assert_eq!("".into_present(), Some(""));
    assert_eq!(String::new().into_present(), Some(String::new()));
    assert_eq!(f64::NAN.into_present().map(f64::is_nan), Some(true));
    assert_eq!(Vec::<u8>::new().into_present(), Some(vec![]));
    assert_eq!((1u8, "a").into_present(), Some((1, "a")));
    assert_eq!([1u8, 2].into_present(), Some([1, 2]));
    assert_eq!(PathBuf::from("a").into_present(), Some(PathBuf::from("a")));
    assert_eq!(Duration::ZERO.into_present(), Some(Duration::ZERO));
    assert_eq!(Ordering::Less.into_present(), Some(Ordering::Less));
  }

  #[test]
  fn nested_option_only_strips_one_layer() {
    assert_eq!(Some(None::<i32>).into_present(), Some(None));
  }

  struct Person;
  impl_present!(Person);

  #[test]
  fn macro_declares_own_types_present() {
    assert!(Person.into_present().is_some());
  }
}
