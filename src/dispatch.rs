//! Ordered evaluation of arm lists
//!
//! An arm list is a tuple of [MatchArm]s. The arms are attempted left to
//! right against the same scrutinee and the first one that matches decides
//! the result; later arms are dropped without being looked at.

use std::any::type_name;

use crate::arm::MatchArm;
use crate::arity::for_each_suffix;
use crate::bottom::{exhausted, Never};

/// A tuple of up to 12 arms that all produce the same output type. The empty
/// list produces [Never] because it can never produce anything.
pub trait Arms<'a, T: ?Sized + 'a> {
  /// The shared output of every arm
  type Output;
  /// Run the first matching arm, or return `None` if none of them match
  fn try_arms(self, val: &'a T) -> Option<Self::Output>;
}

impl<'a, T: ?Sized + 'a> Arms<'a, T> for () {
  type Output = Never;
  fn try_arms(self, _: &'a T) -> Option<Never> { None }
}

macro_rules! arms_impl {
  () => {};
  ($($A:ident)+) => {
    paste::paste! {
      impl<'a, Scr, Ret, $($A),+> Arms<'a, Scr> for ($($A,)+)
      where
        Scr: ?Sized + 'a,
        $($A: MatchArm<'a, Scr, Output = Ret>,)+
      {
        type Output = Ret;
        fn try_arms(self, val: &'a Scr) -> Option<Ret> {
          let ($([<$A:lower>],)+) = self;
          $(
            if let Some(ret) = [<$A:lower>].attempt(val) {
              return Some(ret);
            }
          )+
          None
        }
      }
    }
  };
}

for_each_suffix!(arms_impl; A B C D E F G H I J K L);

/// Evaluate a match, returning `None` if no arm accepted the value. Use this
/// when the arms aren't known to cover every value.
///
/// ```
/// use orchid_match::{arm, try_match};
///
/// assert_eq!(try_match(&3, (arm(1, || "one"), arm(2, || "two"))), None);
/// assert_eq!(try_match(&2, (arm(1, || "one"), arm(2, || "two"))), Some("two"));
/// ```
pub fn try_match<'a, T, A>(val: &'a T, arms: A) -> Option<A::Output>
where
  T: ?Sized + 'a,
  A: Arms<'a, T>,
{
  let out = arms.try_arms(val);
  if out.is_none() {
    tracing::debug!(scrutinee = type_name::<T>(), "no arm matched");
  }
  out
}

/// Evaluate a match expression. The arms are attempted in order and the
/// output of the first matching one is returned.
///
/// The caller is responsible for exhaustiveness, typically by ending the list
/// with a [crate::Bind] or [crate::Wild] arm. If no arm matches, this panics.
///
/// ```
/// use orchid_match::{arm, match_on, Bind};
///
/// let describe = |n: i32| match_on(&n, (
///   arm(0, || String::from("zero")),
///   arm(Bind, |n: &i32| format!("{n}")),
/// ));
/// assert_eq!(describe(0), "zero");
/// assert_eq!(describe(4), "4");
/// ```
#[track_caller]
pub fn match_on<'a, T, A>(val: &'a T, arms: A) -> A::Output
where
  T: ?Sized + 'a,
  A: Arms<'a, T>,
{
  match arms.try_arms(val) {
    Some(out) => out,
    None => match exhausted::<T>() {},
  }
}

/// Sugar for [match_on] that reads like a native `match`. The scrutinee is
/// borrowed, never moved.
///
/// ```
/// use orchid_match::{match_with, Bind};
///
/// let pair = (1, "one");
/// let name = match_with!(pair;
///   (0, Bind) => |_: &&str| String::from("nothing"),
///   (1, Bind) => |s: &&str| s.to_uppercase(),
///   Bind => |_: &(i32, &str)| String::from("many"),
/// );
/// assert_eq!(name, "ONE");
/// ```
#[macro_export]
macro_rules! match_with {
  ($val:expr; $($pat:expr => $handler:expr),+ $(,)?) => {
    $crate::match_on(&$val, ($($crate::arm($pat, $handler),)+))
  };
}

#[cfg(test)]
mod test {
  use std::cell::RefCell;

  use pretty_assertions::assert_eq;

  use super::*;
  use crate::arm::arm;
  use crate::bottom::Absurd;
  use crate::binding::Bind;

  fn output_of<'a, A: Arms<'a, i32, Output = O>, O>(_: &A) {}

  #[test]
  fn bottom_is_the_empty_output() {
    output_of::<(), Never>(&());
    output_of::<_, u8>(&(arm(1, || 1u8),));
    output_of::<_, ()>(&(arm(1, || ()), arm(Bind, |_: &i32| ())));
    assert_eq!(try_match(&1, ()).map(|n| n.absurd::<u8>()), None);
  }

  #[test]
  fn first_match_wins() {
    let log = RefCell::new(Vec::new());
    let () = match_on(&4, (
      arm(5, || log.borrow_mut().push("five")),
      arm(4, || log.borrow_mut().push("four")),
      arm(Bind, |_: &i32| log.borrow_mut().push("any")),
    ));
    assert_eq!(*log.borrow(), vec!["four"], "only the first matching arm runs");
  }

  #[test]
  fn arm_list_of_twelve() {
    let arms = (
      arm(0, || 0), arm(1, || 1), arm(2, || 2), arm(3, || 3), arm(4, || 4), arm(5, || 5),
      arm(6, || 6), arm(7, || 7), arm(8, || 8), arm(9, || 9), arm(10, || 10),
      arm(Bind, |n: &u32| *n * 100),
    );
    assert_eq!(match_on(&11u32, arms), 1100);
  }

  #[test]
  fn macro_borrows() {
    let owned = String::from("abc");
    let len = match_with!(owned; "xyz" => || 0, Bind => |s: &String| s.len());
    assert_eq!((len, owned.as_str()), (3, "abc"));
  }

  #[test]
  #[should_panic(expected = "no arm matched a value of type i32")]
  fn non_exhaustive_traps() { match_on(&3i32, (arm(1, || ()), arm(2, || ()))) }

  #[test]
  #[should_panic(expected = "Non-exhaustive match")]
  fn empty_arm_list_traps() { match match_on(&3, ()) {} }
}
