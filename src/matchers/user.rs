use std::fmt;

use crate::bindings::Bindings;
use crate::pattern::Pattern;

/// A pattern defined by a closure. The closure must behave like any other
/// pattern: no observable side effects, and the same answer for the same
/// value. See [from_fn].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("FromFn") }
}

/// Build a one-off pattern from a closure returning the bound tuple
///
/// ```
/// use orchid_match::{from_fn, match_pattern};
///
/// let halves = from_fn(|n: &u32| (n % 2 == 0).then(|| (n / 2,)));
/// assert_eq!(match_pattern(&halves, &10), Some((5,)));
/// assert_eq!(match_pattern(&halves, &7), None);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> { FromFn(f) }

impl<'a, T, B, F> Pattern<'a, T> for FromFn<F>
where
  T: ?Sized + 'a,
  B: Bindings,
  F: Fn(&'a T) -> Option<B>,
{
  type Bound = B;
  fn match_value(&self, val: &'a T) -> Option<B> { (self.0)(val) }
}
