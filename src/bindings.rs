//! Bound tuples, the values a successful match hands to its arm.
//!
//! A bound tuple is an ordinary Rust tuple. Its arity is fixed by the shape
//! of the pattern that produced it: exact patterns bind nothing, bindings bind
//! one value and tuple patterns bind the concatenation of their children.

use crate::arity::{count, for_each_suffix};

/// A tuple that can be produced by a successful match. Implemented for
/// tuples of up to 12 elements.
pub trait Bindings {
  /// Number of values in the tuple
  const ARITY: usize;
}

/// Append one bound tuple to another, preserving element order
pub trait Concat<Rhs> {
  /// The tuple holding the elements of `Self` followed by those of `Rhs`
  type Output: Bindings;
  /// Move the elements of both tuples into a single tuple
  fn concat(self, rhs: Rhs) -> Self::Output;
}

/// Concatenate a tuple of bound tuples from left to right. This is how a
/// tuple pattern assembles the outputs of its children.
pub trait Flatten {
  /// The single tuple holding every element of every member in order
  type Output: Bindings;
  /// Perform the concatenation
  fn flatten(self) -> Self::Output;
}

macro_rules! bindings_impl {
  ($($T:ident)*) => {
    impl<$($T),*> Bindings for ($($T,)*) {
      const ARITY: usize = count!($($T)*);
    }
  };
}

for_each_suffix!(bindings_impl; A B C D E F G H I J K L);

macro_rules! concat_impl {
  (($($L:ident)*) ($($R:ident)*)) => {
    paste::paste! {
      impl<$($L,)* $($R,)*> Concat<($($R,)*)> for ($($L,)*) {
        type Output = ($($L,)* $($R,)*);
        #[allow(clippy::unused_unit)]
        fn concat(self, ($([<$R:lower>],)*): ($($R,)*)) -> Self::Output {
          let ($([<$L:lower>],)*) = self;
          ($([<$L:lower>],)* $([<$R:lower>],)*)
        }
      }
    }
  };
}

/// Every way of splitting one list into a left and a right half
macro_rules! concat_splits {
  (($($L:ident)*) ()) => { concat_impl!(($($L)*) ()); };
  (($($L:ident)*) ($head:ident $($R:ident)*)) => {
    concat_impl!(($($L)*) ($head $($R)*));
    concat_splits!(($($L)* $head) ($($R)*));
  };
}

macro_rules! concat_total {
  ($($T:ident)*) => { concat_splits!(() ($($T)*)); };
}

for_each_suffix!(concat_total; A B C D E F G H I J K L);

macro_rules! flatten_impl {
  () => {
    impl Flatten for () {
      type Output = ();
      fn flatten(self) -> Self::Output {}
    }
  };
  ($head:ident $($T:ident)*) => {
    paste::paste! {
      impl<$head, $($T),*> Flatten for ($head, $($T,)*)
      where
        ($($T,)*): Flatten,
        $head: Concat<<($($T,)*) as Flatten>::Output>,
      {
        type Output = <$head as Concat<<($($T,)*) as Flatten>::Output>>::Output;
        fn flatten(self) -> Self::Output {
          let ([<$head:lower>], $([<$T:lower>],)*) = self;
          [<$head:lower>].concat(($([<$T:lower>],)*).flatten())
        }
      }
    }
  };
}

for_each_suffix!(flatten_impl; A B C D E F G H I J K L);
