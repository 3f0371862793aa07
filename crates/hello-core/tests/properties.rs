//! Property-based tests for the core operations

use hello_core::{greet_to, greeting, square, write_constant, Name, OutSlot, ANSWER};
use proptest::prelude::*;

proptest! {
    #[test]
    fn square_matches_self_multiplication(x in any::<f64>()) {
        prop_assert_eq!(square(x).to_bits(), (x * x).to_bits());
    }

    #[test]
    fn square_is_never_negative(x in any::<f64>().prop_filter("not NaN", |x| !x.is_nan())) {
        prop_assert!(square(x) >= 0.0);
    }

    #[test]
    fn square_is_even(x in -1.0e150f64..1.0e150) {
        prop_assert_eq!(square(x), square(-x));
    }

    #[test]
    fn write_constant_ignores_prior_value(prior in any::<i32>()) {
        let mut value = prior;
        write_constant(OutSlot::new(&mut value));
        prop_assert_eq!(value, ANSWER);
    }

    #[test]
    fn greeting_wraps_name(name in "\\PC{0,64}") {
        let mut out = Vec::new();
        greet_to(&mut out, &Name::new(&name)).unwrap();

        let line = String::from_utf8(out).unwrap();
        prop_assert_eq!(&line, &format!("Hello, {}!\n", name));
        prop_assert_eq!(line.trim_end_matches('\n'), greeting(&Name::new(&name)));
    }

    #[test]
    fn bytes_round_trip_through_name(name in "[a-zA-Z0-9 ]{0,32}") {
        let parsed = Name::from_bytes(name.as_bytes()).unwrap();
        prop_assert_eq!(parsed.as_str(), name.as_str());
    }
}
