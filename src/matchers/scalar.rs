use crate::pattern::Pattern;

/// Let a scalar pattern also match a value held by shared reference, which is
/// how borrowed values show up as tuple elements.
macro_rules! by_ref_impl {
  ($pat:ty => $val:ty) => {
    impl<'a, 'b: 'a> Pattern<'a, &'b $val> for $pat {
      type Bound = ();
      fn match_value(&self, val: &'a &'b $val) -> Option<()> {
        <$pat as Pattern<'b, $val>>::match_value(self, *val)
      }
    }
  };
}

/// Integers compare by value across types. A pattern that doesn't fit in the
/// value's type can't be equal to any value of it.
macro_rules! int_impl {
  (@row $pat:ty; ($($val:ty),*)) => {
    $(
      impl<'a> Pattern<'a, $val> for $pat {
        type Bound = ();
        fn match_value(&self, val: &'a $val) -> Option<()> {
          <$val>::try_from(*self).is_ok_and(|pat| pat == *val).then_some(())
        }
      }
      by_ref_impl!($pat => $val);
    )*
  };
  ($($pat:ty),*; $vals:tt) => {
    $( int_impl!(@row $pat; $vals); )*
  };
}

int_impl!(
  i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize;
  (i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize)
);

macro_rules! eq_impl {
  ($($scalar:ty),*) => {
    $(
      impl<'a> Pattern<'a, $scalar> for $scalar {
        type Bound = ();
        fn match_value(&self, val: &'a $scalar) -> Option<()> { (self == val).then_some(()) }
      }
      by_ref_impl!($scalar => $scalar);
    )*
  };
}

eq_impl!(bool, char);
