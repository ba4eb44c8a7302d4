//! Helpers for generating the same impl for every tuple arity

/// Count a list of token trees in a const context
macro_rules! count {
  () => { 0usize };
  ($head:tt $($tail:tt)*) => { 1usize + $crate::arity::count!($($tail)*) };
}

/// Invoke `$mac` with every suffix of the token list, longest first, ending
/// with the empty list.
///
/// ```ignore
/// for_each_suffix!(tuple_impl; A B C)
/// // tuple_impl!(A B C); tuple_impl!(B C); tuple_impl!(C); tuple_impl!();
/// ```
macro_rules! for_each_suffix {
  ($mac:ident; ) => { $mac!(); };
  ($mac:ident; $head:tt $($tail:tt)*) => {
    $mac!($head $($tail)*);
    $crate::arity::for_each_suffix!($mac; $($tail)*);
  };
}

/// Substitute a type for a token, used to repeat a type once per identifier
macro_rules! replace {
  ($_t:tt, $sub:ty) => { $sub };
}

pub(crate) use {count, for_each_suffix, replace};
