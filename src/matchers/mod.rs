//! Pattern implementations for the built-in shapes: exact scalars, exact text,
//! structural tuples, and wrappers for user-defined matching logic.
mod exact;
#[cfg(feature = "float")]
mod float;
mod scalar;
mod text;
mod tuple;
mod user;

pub use exact::Exact;
pub use user::{from_fn, FromFn};
