//! Structural tuple patterns. A tuple of patterns matches any [Decompose]
//! value of the same arity when every element pattern matches the element
//! in the same position.

use crate::arity::for_each_suffix;
use crate::bindings::Flatten;
use crate::decompose::Decompose;
use crate::pattern::Pattern;

macro_rules! tuple_pattern {
  ($(($P:ident $T:ident))*) => {
    paste::paste! {
      impl<'a, Scr, $($P, $T),*> Pattern<'a, Scr> for ($($P,)*)
      where
        Scr: Decompose<'a, Parts = ($(&'a $T,)*)> + ?Sized + 'a,
        $($T: ?Sized + 'a, $P: Pattern<'a, $T>,)*
        ($(<$P as Pattern<'a, $T>>::Bound,)*): Flatten,
      {
        type Bound = <($(<$P as Pattern<'a, $T>>::Bound,)*) as Flatten>::Output;
        #[allow(clippy::unused_unit)]
        fn match_value(&self, val: &'a Scr) -> Option<Self::Bound> {
          let ($([<$P:lower>],)*) = self;
          let ($([<$T:lower>],)*) = val.decompose();
          Some(($([<$P:lower>].match_value([<$T:lower>])?,)*).flatten())
        }
      }
    }
  };
}

for_each_suffix!(tuple_pattern;
  (P0 T0) (P1 T1) (P2 T2) (P3 T3) (P4 T4) (P5 T5)
  (P6 T6) (P7 T7) (P8 T8) (P9 T9) (P10 T10) (P11 T11)
);
