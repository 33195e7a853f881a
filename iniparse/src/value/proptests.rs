//! Property-based tests for type inference.

use super::{convert, Value};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Digit runs that fit in i64 become integers equal to their numeric value
    #[test]
    fn digits_convert_to_integer(n in 0i64..=i64::MAX) {
        let converted = convert(&n.to_string());
        prop_assert_eq!(converted, Value::Integer(n));
    }

    // Leading zeros do not change the integer
    #[test]
    fn leading_zeros_are_ignored(zeros in 1usize..5, n in 0i64..1_000_000) {
        let token = format!("{}{n}", "0".repeat(zeros));
        prop_assert_eq!(convert(&token), Value::Integer(n));
    }

    // Converting an integer back to text and re-converting is stable
    #[test]
    fn integer_reconversion_is_stable(token in "[0-9]{1,18}") {
        let first = convert(&token);
        let again = convert(&first.to_string());
        prop_assert_eq!(first, again);
    }

    // digits.digits is always a float
    #[test]
    fn dotted_digits_convert_to_float(token in "[0-9]{1,10}\\.[0-9]{1,10}") {
        let converted = convert(&token);
        let expected: f64 = token.parse().unwrap();
        prop_assert_eq!(converted, Value::Float(expected));
    }

    // A dot at either end is never a float
    #[test]
    fn half_floats_stay_strings(digits in "[0-9]{1,10}") {
        let trailing = format!("{digits}.");
        let leading = format!(".{digits}");
        prop_assert_eq!(convert(&trailing), Value::String(trailing.clone()));
        prop_assert_eq!(convert(&leading), Value::String(leading.clone()));
    }

    // Boolean literals match regardless of case
    #[test]
    fn booleans_ignore_case(
        word in prop::sample::select(vec!["true", "false", "yes", "no"]),
        mask in prop::collection::vec(any::<bool>(), 5)
    ) {
        let mixed: String = word
            .chars()
            .zip(mask.iter())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();
        let expected = word == "true" || word == "yes";
        prop_assert_eq!(convert(&mixed), Value::Boolean(expected));
    }

    // Conversion is total and never panics
    #[test]
    fn convert_never_panics(token in ".*") {
        let _ = convert(&token);
    }

    // Alphabetic words that are not boolean literals stay strings
    #[test]
    fn plain_words_stay_strings(word in "[a-z]{1,12}") {
        prop_assume!(!["true", "false", "yes", "no"].contains(&word.as_str()));
        prop_assert_eq!(convert(&word), Value::String(word.clone()));
    }

    // List elements are typed independently and keep their order
    #[test]
    fn list_elements_keep_order(items in prop::collection::vec(0i64..10_000, 1..8)) {
        let token = format!(
            "[{}]",
            items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        );
        let expected = Value::List(items.into_iter().map(Value::Integer).collect());
        prop_assert_eq!(convert(&token), expected);
    }
}
