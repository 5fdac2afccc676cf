//! Property-based tests for refined types and predicates

use proptest::prelude::*;
use proven::constant::{ChA, ChZ, ConstI32, ConstUsize};
use proven::order::{Natural, Reversed};
use proven::refined::{
    AllOf, AlphaNumeric, And, AnyOf, AtLeast, AtMost, CharRange, Digit, EqualTo, GreaterOrEq,
    GreaterThan, InRange, LessOrEq, LessThan, Letter, Lower, MaxCount, Not, Or, Positive,
    Predicate, Refined, SeqInfo, Upper, Whitespace,
};

type Ten = ConstI32<10>;

struct Even;

impl Predicate<i32> for Even {
    fn check(value: &i32) -> bool {
        value % 2 == 0
    }
}

proptest! {
    #[test]
    fn prop_letter_matches_ascii_alphabetic(c in any::<char>()) {
        prop_assert_eq!(Letter::check(&c), c.is_ascii_alphabetic());
    }

    #[test]
    fn prop_upper_and_lower_partition_letters(c in any::<char>()) {
        prop_assert_eq!(Upper::check(&c), c.is_ascii_uppercase());
        prop_assert_eq!(Lower::check(&c), c.is_ascii_lowercase());
        prop_assert_eq!(Letter::check(&c), Upper::check(&c) || Lower::check(&c));
        prop_assert!(!(Upper::check(&c) && Lower::check(&c)));
    }

    #[test]
    fn prop_digit_matches_ascii_digit(c in any::<char>()) {
        prop_assert_eq!(Digit::check(&c), c.is_ascii_digit());
    }

    #[test]
    fn prop_whitespace_is_exactly_four_chars(c in any::<char>()) {
        prop_assert_eq!(Whitespace::check(&c), matches!(c, ' ' | '\t' | '\r' | '\n'));
    }

    #[test]
    fn prop_alphanumeric_is_letter_or_digit(c in any::<char>()) {
        prop_assert_eq!(AlphaNumeric::check(&c), Letter::check(&c) || Digit::check(&c));
        prop_assert_eq!(AlphaNumeric::check(&c), c.is_ascii_alphanumeric());
    }

    #[test]
    fn prop_char_range_is_inclusive(c in any::<char>()) {
        prop_assert_eq!(CharRange::<ChA, ChZ>::check(&c), ('A'..='Z').contains(&c));
    }

    #[test]
    fn prop_comparisons_agree_with_operators(n in any::<i32>()) {
        prop_assert_eq!(GreaterThan::<Natural, Ten>::check(&n), n > 10);
        prop_assert_eq!(LessThan::<Natural, Ten>::check(&n), n < 10);
        prop_assert_eq!(GreaterOrEq::<Natural, Ten>::check(&n), n >= 10);
        prop_assert_eq!(LessOrEq::<Natural, Ten>::check(&n), n <= 10);
        prop_assert_eq!(EqualTo::<Natural, Ten>::check(&n), n == 10);
    }

    #[test]
    fn prop_reversed_order_swaps_directions(n in any::<i32>()) {
        prop_assert_eq!(
            GreaterThan::<Reversed<Natural>, Ten>::check(&n),
            LessThan::<Natural, Ten>::check(&n)
        );
        prop_assert_eq!(
            LessOrEq::<Reversed<Natural>, Ten>::check(&n),
            GreaterOrEq::<Natural, Ten>::check(&n)
        );
    }

    #[test]
    fn prop_in_range_is_conjunction(n in -200i32..200) {
        type Pct = InRange<Natural, ConstI32<0>, ConstI32<100>>;
        prop_assert_eq!(Pct::check(&n), (0..=100).contains(&n));
    }

    #[test]
    fn prop_max_count_bounds_length(values in prop::collection::vec(any::<u8>(), 0..10)) {
        prop_assert_eq!(MaxCount::<ConstUsize<5>>::check(&values), values.len() <= 5);
        prop_assert_eq!(AtLeast::<3>::check(&values), values.len() >= 3);
        prop_assert_eq!(AtMost::<5>::check(&SeqInfo::of(&values)), values.len() <= 5);
    }

    #[test]
    fn prop_combinators_follow_boolean_logic(n in any::<i32>()) {
        let even = Even::check(&n);
        let positive = Positive::check(&n);

        prop_assert_eq!(Not::<Even>::check(&n), !even);
        prop_assert_eq!(And::<Even, Positive>::check(&n), even && positive);
        prop_assert_eq!(Or::<Even, Positive>::check(&n), even || positive);
        prop_assert_eq!(AllOf::<(Even, Positive)>::check(&n), even && positive);
        prop_assert_eq!(AnyOf::<(Even, Positive)>::check(&n), even || positive);
    }

    #[test]
    fn prop_new_succeeds_iff_check(n in any::<i32>()) {
        prop_assert_eq!(Refined::<i32, Even>::new(n).is_ok(), Even::check(&n));
    }

    #[test]
    fn prop_into_inner_returns_input(n in any::<i32>()) {
        if let Ok(refined) = Refined::<i32, Positive>::new(n) {
            prop_assert_eq!(refined.into_inner(), n);
        }
    }

    #[test]
    fn prop_violation_returns_input(n in any::<i32>()) {
        if let Err(violation) = Refined::<i32, Positive>::new(n) {
            prop_assert!(n <= 0);
            prop_assert_eq!(violation.into_value(), n);
        }
    }

    #[test]
    fn prop_equality_ignores_predicate(n in 1i32..1000) {
        let positive = Refined::<i32, Positive>::new(n).unwrap();
        let ranged = Refined::<i32, InRange<Natural, ConstI32<1>, ConstI32<1000>>>::new(n).unwrap();
        prop_assert!(positive == ranged);
    }
}

#[test]
fn empty_lists_are_identities() {
    for n in [-1, 0, 1] {
        assert!(AllOf::<()>::check(&n));
        assert!(!AnyOf::<()>::check(&n));
    }
}
