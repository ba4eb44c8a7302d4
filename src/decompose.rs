use crate::arity::{count, for_each_suffix, replace};

/// Positional access to the elements of a product value. This is the only
/// thing a tuple pattern needs from its scrutinee, so any struct can be
/// destructured by implementing it.
///
/// ```
/// use orchid_match::Decompose;
///
/// struct Point { x: i32, y: i32 }
/// impl<'a> Decompose<'a> for Point {
///   const ARITY: usize = 2;
///   type Parts = (&'a i32, &'a i32);
///   fn decompose(&'a self) -> Self::Parts { (&self.x, &self.y) }
/// }
/// ```
///
/// Implementations must be cheap and infallible, and every reference in
/// `Parts` must point into `self`.
pub trait Decompose<'a> {
  /// Number of elements, equal to the length of `Parts`
  const ARITY: usize;
  /// A tuple of shared references to the elements, in positional order
  type Parts;
  /// Borrow every element
  fn decompose(&'a self) -> Self::Parts;
}

impl<'a, 'b: 'a, D: Decompose<'a> + ?Sized> Decompose<'a> for &'b D {
  const ARITY: usize = D::ARITY;
  type Parts = D::Parts;
  fn decompose(&'a self) -> Self::Parts { (**self).decompose() }
}

macro_rules! tuple_decompose {
  ($($T:ident)*) => {
    paste::paste! {
      impl<'a, $($T: 'a),*> Decompose<'a> for ($($T,)*) {
        const ARITY: usize = count!($($T)*);
        type Parts = ($(&'a $T,)*);
        #[allow(clippy::unused_unit)]
        fn decompose(&'a self) -> Self::Parts {
          let ($([<$T:lower>],)*) = self;
          ($([<$T:lower>],)*)
        }
      }
    }
  };
}

for_each_suffix!(tuple_decompose; A B C D E F G H I J K L);

macro_rules! array_decompose {
  ($($T:ident)*) => {
    paste::paste! {
      impl<'a, Elem: 'a> Decompose<'a> for [Elem; count!($($T)*)] {
        const ARITY: usize = count!($($T)*);
        type Parts = ($(replace!($T, &'a Elem),)*);
        #[allow(clippy::unused_unit)]
        fn decompose(&'a self) -> Self::Parts {
          let [$([<$T:lower>]),*] = self;
          ($([<$T:lower>],)*)
        }
      }
    }
  };
}

for_each_suffix!(array_decompose; A B C D E F G H I J K L);
