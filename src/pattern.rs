//! The pattern contract and the single dispatch point through which every
//! match is resolved.

use crate::bindings::Bindings;

/// A type whose values describe a condition on values of type `T`.
///
/// A successful match produces a bound tuple ([Bindings]) whose references
/// borrow from the scrutinee for `'a`. Implementations must not mutate either
/// side (they only get shared references) and must be equality preserving:
/// the same pattern matched against the same unchanged value produces the same
/// result every time.
///
/// There is no fallback lookup; a pattern type matches a value type only if it
/// implements this trait for it, so a pattern/value pair that doesn't fit is a
/// compile error rather than a failed match.
pub trait Pattern<'a, T: ?Sized + 'a> {
  /// The tuple handed to an arm's handler when this pattern matches
  type Bound: Bindings;
  /// Test the value. `None` means no match and is never an error.
  fn match_value(&self, val: &'a T) -> Option<Self::Bound>;
}

/// The bound tuple produced when `P` matches a value of type `T`
pub type Bound<'a, P, T> = <P as Pattern<'a, T>>::Bound;

/// Try to match `val` against `pat`.
///
/// This is the point every arm goes through. Built-in scalars compare by
/// equality and bind nothing, every other pattern defers to its own [Pattern]
/// impl.
///
/// ```
/// use orchid_match::{match_pattern, Bind};
///
/// assert_eq!(match_pattern(&5, &5), Some(()));
/// assert_eq!(match_pattern(&5, &6), None);
/// assert_eq!(match_pattern(&(5, Bind), &(5, "x")), Some((&"x",)));
/// ```
pub fn match_pattern<'a, P, T>(pat: &P, val: &'a T) -> Option<P::Bound>
where
  P: Pattern<'a, T> + ?Sized,
  T: ?Sized + 'a,
{
  pat.match_value(val)
}

/// Number of values `P` binds when it matches a `T`. Known at compile time.
pub const fn arity_of<'a, P, T>() -> usize
where
  P: Pattern<'a, T> + ?Sized,
  T: ?Sized + 'a,
{
  <P::Bound as Bindings>::ARITY
}
