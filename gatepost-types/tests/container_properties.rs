use gatepost_types::{Container, Value};
use proptest::prelude::*;

fn int_array(values: &[i64]) -> Container {
    Container::array(values.iter().copied().map(Value::from))
}

proptest! {
    #[test]
    fn in_bounds_indexes_resolve_to_their_element(values in prop::collection::vec(any::<i64>(), 1..32)) {
        let container = int_array(&values);
        for (index, expected) in values.iter().enumerate() {
            prop_assert_eq!(
                container.member(&index.to_string()),
                Some(Value::from(*expected))
            );
        }
    }

    #[test]
    fn out_of_bounds_and_negative_keys_are_absent(values in prop::collection::vec(any::<i64>(), 0..32)) {
        let container = int_array(&values);
        prop_assert_eq!(container.member(&values.len().to_string()), None);
        prop_assert_eq!(container.member("-1"), None);
    }

    #[test]
    fn length_always_reports_the_element_count(values in prop::collection::vec(any::<i64>(), 0..32)) {
        let container = int_array(&values);
        prop_assert_eq!(
            container.member("length"),
            Some(Value::from(values.len() as i64))
        );
    }

    #[test]
    fn in_bounds_assignment_replaces_exactly_one_element(
        values in prop::collection::vec(any::<i64>(), 1..32),
        replacement in any::<i64>(),
    ) {
        let mut container = int_array(&values);
        let target = values.len() - 1;
        container.set_member(&target.to_string(), Value::from(replacement)).unwrap();

        prop_assert_eq!(container.len(), values.len());
        prop_assert_eq!(
            container.member(&target.to_string()),
            Some(Value::from(replacement))
        );
        for (index, original) in values.iter().enumerate().take(target) {
            prop_assert_eq!(
                container.member(&index.to_string()),
                Some(Value::from(*original))
            );
        }
    }
}
