#![warn(missing_docs)]
//! Ordered pattern matching built from ordinary values.
//!
//! Patterns are typed values (literals, text, tuples of patterns, bindings,
//! or your own types implementing [Pattern]). An [Arm] pairs a pattern with a
//! handler, and [match_on] tries a tuple of arms against a scrutinee in order,
//! running the handler of the first arm that matches. Everything is resolved
//! statically; there is no runtime dispatch or allocation.
//!
//! ```
//! use orchid_match::{arm, match_on, Bind};
//!
//! let pair = (5, "x");
//! let seen = match_on(&pair, (
//!   arm((5, Bind), |s: &&str| format!("five and {s}")),
//!   arm(Bind, |_: &(i32, &str)| String::from("something else")),
//! ));
//! assert_eq!(seen, "five and x");
//! ```
//!
//! Matches are not checked for exhaustiveness. [match_on] panics if no arm
//! matches, [try_match] returns `None` instead.
mod apply;
mod arity;
mod arm;
mod binding;
mod bindings;
pub mod bottom;
mod decompose;
mod dispatch;
mod matchers;
mod pattern;

pub use apply::{Applied, Apply};
pub use arm::{arm, Arm, MatchArm};
pub use binding::{Bind, BindAt, BindCloned, Wild};
pub use bindings::{Bindings, Concat, Flatten};
pub use bottom::{Absurd, Never};
pub use decompose::Decompose;
pub use dispatch::{match_on, try_match, Arms};
pub use matchers::{from_fn, Exact, FromFn};
pub use pattern::{arity_of, match_pattern, Bound, Pattern};
