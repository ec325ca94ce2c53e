//! Property-based tests for validation invariants.

use proptest::prelude::*;
use serde_json::{Value, json};
use shape_validation::{JsonKind, Schema, Validator, validate};

/// Arbitrary JSON data, a few levels deep
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1000i64..1000).prop_map(Value::from),
        (-1000.0f64..1000.0).prop_map(Value::from),
        "[a-z0-9 ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-c]", inner, 0..3)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Arbitrary schema source: typed nodes with a handful of constraints, plus combinators
fn arb_schema() -> impl Strategy<Value = Value> {
    let leaf = (
        prop::sample::select(vec!["string", "number", "boolean", "array", "object", "date"]),
        any::<bool>(),
        prop::option::of(0u64..4),
    )
        .prop_map(|(type_name, nullable, bound)| {
            let mut schema = json!({"type": type_name, "nullable": nullable});
            if let Some(bound) = bound {
                let key = match type_name {
                    "string" => "maxLength",
                    "number" => "maximum",
                    "array" => "maxItems",
                    "object" => "maxProperties",
                    _ => return schema,
                };
                schema[key] = json!(bound);
            }
            schema
        });
    leaf.prop_recursive(2, 12, 3, |inner| {
        (
            prop::sample::select(vec!["anyOf", "oneOf"]),
            prop::collection::vec(inner, 0..3),
            any::<bool>(),
        )
            .prop_map(|(key, branches, nullable)| json!({key: branches, "nullable": nullable}))
    })
}

proptest! {
    #[test]
    fn null_verdict_follows_nullable(schema in arb_schema()) {
        let nullable = schema["nullable"].as_bool().unwrap_or(false);
        let schema = Schema::from_json(&schema).unwrap();
        let report = validate(&schema, &Value::Null);
        prop_assert_eq!(report.valid, nullable);
        if nullable {
            prop_assert!(report.errors.is_empty());
        } else {
            prop_assert_eq!(report.messages(), vec!["Value is null, but nullable false"]);
        }
    }

    #[test]
    fn strings_within_bounds_pass(
        (min, max, s) in (0usize..6, 0usize..10).prop_flat_map(|(min, extra)| {
            let max = min + extra;
            (Just(min), Just(max), prop::collection::vec(any::<char>(), min..=max)
                .prop_map(|chars| chars.into_iter().collect::<String>()))
        })
    ) {
        let schema = Schema::from_json(&json!({
            "type": "string",
            "minLength": min,
            "maxLength": max
        }))
        .unwrap();
        let report = validate(&schema, &Value::String(s));
        prop_assert!(report.valid);
        prop_assert!(report.errors.is_empty());
    }

    #[test]
    fn any_of_with_a_matching_branch_leaves_no_errors(
        data in arb_value().prop_filter("non-null", |v| !v.is_null()),
        others in prop::collection::vec(arb_schema(), 0..3),
        position in 0usize..4,
    ) {
        let mut branches = others;
        let matching = json!({"type": JsonKind::of(&data).name()});
        branches.insert(position.min(branches.len()), matching);

        let schema = Schema::from_json(&json!({"anyOf": branches})).unwrap();
        let report = validate(&schema, &data);
        prop_assert!(report.valid);
        prop_assert!(report.errors.is_empty());
    }

    #[test]
    fn one_of_with_two_matching_branches_fails(
        data in arb_value().prop_filter("non-null", |v| !v.is_null())
    ) {
        let branch = json!({"type": JsonKind::of(&data).name()});
        let schema = Schema::from_json(&json!({"oneOf": [branch.clone(), branch]})).unwrap();
        let report = validate(&schema, &data);
        prop_assert!(!report.valid);
        prop_assert_eq!(report.messages(), vec!["More than one schema valid for this data"]);
    }

    #[test]
    fn fresh_validators_are_deterministic(schema in arb_schema(), data in arb_value()) {
        let schema = Schema::from_json(&schema).unwrap();
        let mut first = Validator::new();
        let mut second = Validator::new();
        prop_assert_eq!(first.is_valid(&schema, &data), second.is_valid(&schema, &data));
        prop_assert_eq!(first.errors(), second.errors());
    }

    #[test]
    fn verdict_matches_error_log(schema in arb_schema(), data in arb_value()) {
        let schema = Schema::from_json(&schema).unwrap();
        let report = validate(&schema, &data);
        prop_assert_eq!(report.valid, report.errors.is_empty());
    }
}
