//! Property tests for the matching laws that every pattern has to obey:
//! matching never mutates, gives the same answer every time, binds the
//! documented number of values, and only succeeds when it should.

use std::cell::Cell;

use orchid_match::{arm, match_on, match_pattern, Bind, BindAt, Exact, Pattern};
use proptest::prelude::*;

/// A scrutinee that counts how often it's compared. Equality is the only
/// place a pattern could smuggle in a side effect, so the count going up is
/// fine but the value must not change.
#[derive(Debug, Clone)]
struct Probe {
  value: i64,
  compared: Cell<usize>,
}
impl Probe {
  fn new(value: i64) -> Self { Self { value, compared: Cell::new(0) } }
}
impl PartialEq<Probe> for i64 {
  fn eq(&self, other: &Probe) -> bool {
    other.compared.set(other.compared.get() + 1);
    *self == other.value
  }
}

proptest! {
  #[test]
  fn matching_leaves_the_scrutinee_alone(pat in any::<i64>(), val in any::<i64>()) {
    let probe = Probe::new(val);
    let pattern = Exact(pat);
    let first = match_pattern(&pattern, &probe);
    prop_assert_eq!(probe.value, val);
    prop_assert_eq!(pattern, Exact(pat));
    prop_assert_eq!(first.is_some(), pat == val);
  }

  #[test]
  fn composite_patterns_leave_the_scrutinee_alone(
    pat in any::<i64>(), val in any::<i64>(), text in "[ab]{0,4}", other in "[ab]{0,4}"
  ) {
    let scrutinee = (Probe::new(val), text.clone());
    let pattern = (BindAt(Exact(pat)), other.as_str());
    let bound = match_pattern(&pattern, &scrutinee);
    prop_assert_eq!(scrutinee.0.value, val);
    prop_assert_eq!(&scrutinee.1, &text);
    prop_assert_eq!(bound.map(|(probe,)| probe.value), (pat == val && text == other).then_some(val));
    prop_assert!(scrutinee.0.compared.get() <= 1, "each element is compared at most once");
    let texts = [text.as_str(), other.as_str()];
    let _ = match_pattern(&(other.as_str(), Bind), &texts);
    prop_assert_eq!(texts, [text.as_str(), other.as_str()]);
  }

  #[test]
  fn matching_is_repeatable(a in any::<u16>(), b in any::<u16>(), s in ".{0,8}") {
    let val = (a, s.clone());
    let pattern = (b, BindAt(s.as_str()));
    let runs = (0..3).map(|_| match_pattern(&pattern, &val)).collect::<Vec<_>>();
    prop_assert!(runs.windows(2).all(|w| w[0] == w[1]));
    prop_assert_eq!(runs[0].is_some(), a == b);
  }

  #[test]
  fn bind_matches_everything(n in any::<i32>(), s in ".*", v in prop::collection::vec(any::<u8>(), 0..16)) {
    prop_assert_eq!(match_pattern(&Bind, &n), Some((&n,)));
    prop_assert_eq!(match_pattern(&Bind, s.as_str()), Some((s.as_str(),)));
    prop_assert_eq!(match_pattern(&Bind, &v), Some((&v,)));
    let pair = (n, v.clone());
    prop_assert_eq!(match_pattern(&Bind, &pair), Some((&pair,)));
  }

  #[test]
  fn text_is_whole_sequence_equality(pat in "[ab]{0,4}", val in "[ab]{0,4}") {
    prop_assert_eq!(pat.as_str().match_value(val.as_str()).is_some(), pat == val);
  }

  #[test]
  fn tuples_are_conjunctions(p in 0u8..4, q in 0u8..4, x in 0u8..4, y in 0u8..4) {
    let both = match_pattern(&(p, q), &(x, y)).is_some();
    prop_assert_eq!(both, p == x && q == y);
  }

  #[test]
  fn first_matching_arm_decides(val in 0u8..6) {
    let picked = match_on(&val, (
      arm(1, || "one"),
      arm(3, || "three"),
      arm(1, || "shadowed"),
      arm(Bind, |_: &u8| "other"),
    ));
    let expected = match val { 1 => "one", 3 => "three", _ => "other" };
    prop_assert_eq!(picked, expected);
  }
}
