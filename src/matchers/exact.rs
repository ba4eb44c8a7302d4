use crate::pattern::Pattern;

/// Match any value that compares equal to the wrapped one. This extends the
/// built-in scalar patterns to every [PartialEq] type, most usefully
/// fieldless enums. To match a value held by reference, wrap a reference:
/// `Exact(&Dir::Up)` matches a `&Dir`.
///
/// ```
/// use orchid_match::{match_pattern, Exact};
///
/// #[derive(PartialEq)]
/// enum Dir { Up, Down }
/// assert_eq!(match_pattern(&Exact(Dir::Up), &Dir::Up), Some(()));
/// assert_eq!(match_pattern(&Exact(Dir::Up), &Dir::Down), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exact<T>(pub T);

impl<'a, T: PartialEq<U>, U: ?Sized + 'a> Pattern<'a, U> for Exact<T> {
  type Bound = ();
  fn match_value(&self, val: &'a U) -> Option<()> { (self.0 == *val).then_some(()) }
}

#[cfg(test)]
mod test {
  use super::Exact;
  use crate::pattern::match_pattern;

  #[test]
  fn cross_type_equality() {
    assert_eq!(match_pattern(&Exact("abc"), &String::from("abc")), Some(()));
    assert_eq!(match_pattern(&Exact(Some(3u8)), &Some(3u8)), Some(()));
    assert_eq!(match_pattern(&Exact(Some(3u8)), &None::<u8>), None);
    assert_eq!(match_pattern(&Exact(1.5f64), &1.5f64), Some(()));
    let wide: Vec<u16> = "hi".encode_utf16().collect();
    assert_eq!(match_pattern(&Exact(&[104u16, 105][..]), &wide), Some(()));
  }

  #[test]
  fn borrowed_elements() {
    let (name, size) = (String::from("dir"), 7u32);
    let pair = (&name, &size);
    assert_eq!(match_pattern(&(Exact(&"dir"), Exact(&7u32)), &pair), Some(()));
    assert_eq!(match_pattern(&(Exact(&"dir"), Exact(&8u32)), &pair), None);
  }
}
