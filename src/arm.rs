use crate::apply::Apply;
use crate::pattern::{match_pattern, Pattern};

/// A pattern coupled with the handler that runs on the values it binds. The
/// handler receives the bound tuple spread into positional arguments.
#[derive(Debug, Clone, Copy)]
pub struct Arm<P, F> {
  pattern: P,
  handler: F,
}

impl<P, F> Arm<P, F> {
  /// Pair a pattern with a handler. See also [arm]
  pub fn new(pattern: P, handler: F) -> Self { Self { pattern, handler } }
}

/// Shorthand for [Arm::new]
///
/// ```
/// use orchid_match::{arm, Bind, MatchArm};
///
/// let double = arm(Bind, |n: &i32| n * 2);
/// assert_eq!(double.attempt(&21), Some(42));
/// assert_eq!(arm(1, || "one").attempt(&2), None);
/// ```
pub fn arm<P, F>(pattern: P, handler: F) -> Arm<P, F> { Arm::new(pattern, handler) }

/// One candidate in a match expression
pub trait MatchArm<'a, T: ?Sized + 'a> {
  /// What the handler returns. A handler without a return value produces
  /// `()`, so `Some(())` means the arm ran while `None` means it didn't match.
  type Output;
  /// Run the handler if the pattern matches
  fn attempt(self, val: &'a T) -> Option<Self::Output>;
}

impl<'a, T, P, F> MatchArm<'a, T> for Arm<P, F>
where
  T: ?Sized + 'a,
  P: Pattern<'a, T>,
  F: Apply<P::Bound>,
{
  type Output = F::Output;
  fn attempt(self, val: &'a T) -> Option<Self::Output> {
    let Self { pattern, handler } = self;
    match_pattern(&pattern, val).map(|bound| handler.apply(bound))
  }
}
