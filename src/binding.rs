//! Patterns that match everything. Terminating an arm list with one of these
//! is the idiomatic way to make a match exhaustive.

use crate::bindings::Concat;
use crate::pattern::Pattern;

/// Capture the whole scrutinee by reference. Always matches and binds exactly
/// one value.
///
/// ```
/// use orchid_match::{match_pattern, Bind};
///
/// assert_eq!(match_pattern(&Bind, &4), Some((&4,)));
/// assert_eq!(match_pattern(&Bind, "any text"), Some(("any text",)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bind;

impl<'a, T: ?Sized + 'a> Pattern<'a, T> for Bind {
  type Bound = (&'a T,);
  fn match_value(&self, val: &'a T) -> Option<Self::Bound> { Some((val,)) }
}

/// Capture a clone of the whole scrutinee. Use this when the handler needs an
/// owned value; [Bind] never copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BindCloned;

impl<'a, T: Clone + 'a> Pattern<'a, T> for BindCloned {
  type Bound = (T,);
  fn match_value(&self, val: &'a T) -> Option<Self::Bound> { Some((val.clone(),)) }
}

/// Match the inner pattern and capture the whole scrutinee in front of
/// whatever the inner pattern binds, like `name @ pat`.
///
/// ```
/// use orchid_match::{match_pattern, Bind, BindAt};
///
/// let pair = (1, 2);
/// assert_eq!(match_pattern(&BindAt((1, Bind)), &pair), Some((&pair, &2)));
/// assert_eq!(match_pattern(&BindAt((3, Bind)), &pair), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BindAt<P>(pub P);

impl<'a, T, P> Pattern<'a, T> for BindAt<P>
where
  T: ?Sized + 'a,
  P: Pattern<'a, T>,
  (&'a T,): Concat<P::Bound>,
{
  type Bound = <(&'a T,) as Concat<P::Bound>>::Output;
  fn match_value(&self, val: &'a T) -> Option<Self::Bound> {
    Some((val,).concat(self.0.match_value(val)?))
  }
}

/// Match anything and bind nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Wild;

impl<'a, T: ?Sized + 'a> Pattern<'a, T> for Wild {
  type Bound = ();
  fn match_value(&self, _: &'a T) -> Option<()> { Some(()) }
}
