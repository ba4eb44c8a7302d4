use crate::arity::for_each_suffix;

/// Call a function with a tuple spread as its positional arguments. This is
/// how a handler receives the values bound by its arm's pattern. It's
/// implemented for every [FnOnce] of up to 12 arguments, so the handler's
/// parameter list must correspond exactly to the bound tuple.
pub trait Apply<Args> {
  /// The function's return type
  type Output;
  /// Consume the function and the arguments
  fn apply(self, args: Args) -> Self::Output;
}

/// The value a handler of type `F` returns when applied to `Args`
pub type Applied<F, Args> = <F as Apply<Args>>::Output;

macro_rules! apply_impl {
  ($($A:ident)*) => {
    paste::paste! {
      impl<Func, Ret, $($A),*> Apply<($($A,)*)> for Func
      where Func: FnOnce($($A),*) -> Ret
      {
        type Output = Ret;
        fn apply(self, ($([<$A:lower>],)*): ($($A,)*)) -> Ret { self($([<$A:lower>]),*) }
      }
    }
  };
}

for_each_suffix!(apply_impl; A B C D E F G H I J K L);
