use std::fmt::{self, Debug, Formatter};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::nullable::Nullable;

/// A value computed by a producer on first [`get`](Self::get), and cached afterwards.
///
/// The producer is called at most once over the lifetime of the `Lazy`, even when `get` is called concurrently.
/// [`map`](Self::map) builds a new `Lazy` without evaluating anything.
pub struct Lazy<A, F = fn() -> A> {
  value: OnceLock<A>,
  producer: Mutex<Option<F>>,
}

impl<A, F: FnOnce() -> A> Lazy<A, F> {
  #[inline]
  pub const fn new(producer: F) -> Self {
    Self { value: OnceLock::new(), producer: Mutex::new(Some(producer)) }
  }

  /// Returns the cached value, evaluating the producer if this is the first call.
  ///
  /// # Panics
  ///
  /// Panics if a previous evaluation panicked.
  pub fn get(&self) -> &A {
    self.value.get_or_init(|| {
      let producer = self.producer.lock().unwrap_or_else(PoisonError::into_inner).take();
      match producer {
        Some(producer) => {
          tracing::trace!("evaluating lazy value");
          producer()
        }
        None => panic!("lazy value is poisoned; its producer panicked during a previous evaluation"),
      }
    })
  }

  /// Creates a new `Lazy` that, when evaluated, gets the value of `self` and applies `f` to it.
  #[inline]
  pub fn map<B>(self, f: impl FnOnce(&A) -> B) -> Lazy<B, impl FnOnce() -> B> {
    Lazy::new(move || f(self.get()))
  }

  /// Returns the value, evaluating the producer if needed.
  #[inline]
  pub fn into_inner(self) -> A {
    self.get();
    match self.value.into_inner() {
      Some(value) => value,
      None => unreachable!("lazy value was evaluated above"),
    }
  }
}

impl<A, F> Lazy<A, F> {
  /// Returns the cached value without evaluating, or `None` if not yet evaluated.
  #[inline]
  pub fn peek(&self) -> Option<&A> { self.value.get() }

  #[inline]
  pub fn is_evaluated(&self) -> bool { self.value.get().is_some() }
}

impl<A, F> Nullable for Lazy<A, F> {
  type Value = Self;
  #[inline]
  fn into_present(self) -> Option<Self::Value> { Some(self) }
}

impl<A: Debug, F> Debug for Lazy<A, F> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.peek() {
      Some(value) => f.debug_tuple("Lazy").field(value).finish(),
      None => f.write_str("Lazy(<unevaluated>)"),
    }
  }
}


#[cfg(test)]
mod test {
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;
  use std::thread;

  use super::*;

  #[test]
  fn can_get() {
    let l1 = Lazy::new(|| 10);
    let l2 = l1.map(|a| a + 10).map(|a| a + 10);
    assert_eq!(*l2.get(), 30);
  }

  #[test]
  fn is_lazy() {
    let base = AtomicUsize::new(0);
    let mapped = AtomicUsize::new(0);
    let side_effect = |a: &i32| {
      mapped.fetch_add(1, Ordering::SeqCst);
      a + 10
    };
    let l2 = Lazy::new(|| {
      base.fetch_add(1, Ordering::SeqCst);
      10
    }).map(side_effect).map(side_effect);
    assert_eq!(base.load(Ordering::SeqCst), 0);
    assert_eq!(mapped.load(Ordering::SeqCst), 0);
    assert!(!l2.is_evaluated());
    assert_eq!(l2.peek(), None);
  }

  #[test]
  fn does_not_recalculate_after_get() {
    let base = AtomicUsize::new(0);
    let mapped = AtomicUsize::new(0);
    let side_effect = |a: &i32| {
      mapped.fetch_add(1, Ordering::SeqCst);
      a + 10
    };
    let l2 = Lazy::new(|| {
      base.fetch_add(1, Ordering::SeqCst);
      10
    }).map(side_effect).map(side_effect);
    assert_eq!(*l2.get(), 30);
    assert_eq!(*l2.get(), 30);
    assert_eq!(*l2.get(), 30);
    assert_eq!(base.load(Ordering::SeqCst), 1);
    assert_eq!(mapped.load(Ordering::SeqCst), 2);
    assert!(l2.is_evaluated());
    assert_eq!(l2.peek(), Some(&30));
  }

  #[test]
  fn producer_is_called_once_under_concurrent_gets() {
    let calls = Arc::new(AtomicUsize::new(0));
    let producer_calls = calls.clone();
    let lazy = Arc::new(Lazy::new(move || {
      producer_calls.fetch_add(1, Ordering::SeqCst);
      String::from("value")
    }));
    let handles: Vec<_> = (0..8).map(|_| {
      let lazy = lazy.clone();
      thread::spawn(move || lazy.get().clone())
    }).collect();
    for handle in handles {
      assert_eq!(handle.join().unwrap(), "value");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn into_inner_evaluates() {
    assert_eq!(Lazy::new(|| vec![1, 2]).map(|v| v.len()).into_inner(), 2);
  }

  #[test]
  fn debug_does_not_evaluate() {
    let lazy = Lazy::new(|| 1);
    assert_eq!(format!("{:?}", lazy), "Lazy(<unevaluated>)");
    lazy.get();
    assert_eq!(format!("{:?}", lazy), "Lazy(1)");
  }
}
