//! Floats can't be scalar patterns directly because NaN breaks equality.
//! The [ordered_float] wrappers define a total equality and are used instead.

use ordered_float::{NotNan, OrderedFloat};

use crate::pattern::Pattern;

macro_rules! float_impl {
  ($($float:ty),*) => {
    $(
      impl<'a> Pattern<'a, $float> for OrderedFloat<$float> {
        type Bound = ();
        fn match_value(&self, val: &'a $float) -> Option<()> {
          (*self == OrderedFloat(*val)).then_some(())
        }
      }

      impl<'a> Pattern<'a, $float> for NotNan<$float> {
        type Bound = ();
        fn match_value(&self, val: &'a $float) -> Option<()> {
          (self.into_inner() == *val).then_some(())
        }
      }
    )*
  };
}

float_impl!(f32, f64);
