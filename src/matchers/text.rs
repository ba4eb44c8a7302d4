//! Exact text patterns. A text pattern matches only a scrutinee whose whole
//! sequence is equal to it; there is no prefix, substring or wildcard syntax.

use crate::pattern::Pattern;

impl<'a, 'p, T: AsRef<str> + ?Sized + 'a> Pattern<'a, T> for &'p str {
  type Bound = ();
  fn match_value(&self, val: &'a T) -> Option<()> { (*self == val.as_ref()).then_some(()) }
}

impl<'a, T: AsRef<str> + ?Sized + 'a> Pattern<'a, T> for String {
  type Bound = ();
  fn match_value(&self, val: &'a T) -> Option<()> { (self == val.as_ref()).then_some(()) }
}

impl<'a, 'p, T: AsRef<[u8]> + ?Sized + 'a> Pattern<'a, T> for &'p [u8] {
  type Bound = ();
  fn match_value(&self, val: &'a T) -> Option<()> { (*self == val.as_ref()).then_some(()) }
}

impl<'a, 'p, T: AsRef<[u8]> + ?Sized + 'a, const N: usize> Pattern<'a, T> for &'p [u8; N] {
  type Bound = ();
  fn match_value(&self, val: &'a T) -> Option<()> {
    (self.as_slice() == val.as_ref()).then_some(())
  }
}
