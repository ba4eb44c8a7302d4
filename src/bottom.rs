//! The bottom type of match results.
//!
//! [Never] has no values, so a function returning it can only diverge. It's
//! the output of an empty arm list and of the exhausted state of a match, and
//! [Absurd] turns it into whatever type the surrounding match produces.

use std::any::type_name;

pub use never::Never;

/// Conversion out of an uninhabited type into any other type
pub trait Absurd {
  /// Produce a value of any type. Since `self` can't exist, this is never run.
  fn absurd<T>(self) -> T;
}

impl Absurd for Never {
  fn absurd<T>(self) -> T { match self {} }
}

/// The trap reached when no arm of a match accepted the scrutinee. Matches are
/// not checked for exhaustiveness, so this indicates a bug in the caller.
#[cold]
#[track_caller]
pub fn exhausted<T: ?Sized>() -> Never {
  let scrutinee = type_name::<T>();
  tracing::error!(scrutinee, "no match arm accepted the scrutinee");
  panic!("Non-exhaustive match: no arm matched a value of type {scrutinee}")
}
