//! Merge policy for partial site configurations.
//!
//! A loaded configuration may be partial. It is reconciled against the
//! defaults section by section:
//! - Lists replace wholesale when non-empty; an empty list keeps the default list
//! - Records merge key by key, and records nested one level below merge the same
//!   way, so default fields the override does not provide survive
//! - Scalars override only when truthy (non-empty string, non-zero number, `true`)
//! - `null` and values whose kind differs from the default count as absent
//!
//! An override that sets a field to `""` is therefore indistinguishable from one
//! that omits it.

use serde_json::Value;

/// Record levels merged key by key: a section and the records directly inside it.
const RECORD_DEPTH: u8 = 2;

/// Merge a partial configuration against the defaults.
///
/// Pure and total: malformed fields fall back to the default and never fail.
/// Top-level keys without a default are carried through untouched.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use folio_config::merge::merge_with_defaults;
///
/// let defaults = json!({"personal": {"name": "A", "title": "T"}, "services": [1, 2]});
/// let loaded = json!({"personal": {"name": "B"}, "services": []});
/// let merged = merge_with_defaults(&defaults, &loaded);
/// assert_eq!(merged, json!({"personal": {"name": "B", "title": "T"}, "services": [1, 2]}));
/// ```
pub fn merge_with_defaults(defaults: &Value, overrides: &Value) -> Value {
    let mut merged = defaults.clone();
    let (Value::Object(target), Value::Object(patch)) = (&mut merged, overrides) else {
        return merged;
    };

    for (key, value) in patch {
        if value.is_null() {
            continue;
        }
        let resolved = match target.get(key) {
            Some(default) => merge_node(default, value, RECORD_DEPTH),
            None => value.clone(),
        };
        target.insert(key.clone(), resolved);
    }

    merged
}

fn merge_node(default: &Value, over: &Value, depth: u8) -> Value {
    match (default, over) {
        (_, Value::Null) => default.clone(),
        (Value::Array(_), Value::Array(items)) => {
            if items.is_empty() {
                default.clone()
            } else {
                over.clone()
            }
        }
        (Value::Object(base), Value::Object(patch)) if depth > 0 => {
            let mut out = base.clone();
            for (key, value) in patch {
                match base.get(key) {
                    Some(d) => {
                        out.insert(key.clone(), merge_node(d, value, depth - 1));
                    }
                    None if !value.is_null() => {
                        out.insert(key.clone(), value.clone());
                    }
                    None => {}
                }
            }
            Value::Object(out)
        }
        (Value::Object(_), Value::Object(patch)) => {
            if patch.is_empty() {
                default.clone()
            } else {
                over.clone()
            }
        }
        _ if same_kind(default, over) => {
            if is_truthy(over) {
                over.clone()
            } else {
                default.clone()
            }
        }
        _ => default.clone(),
    }
}

/// Whether a value counts as provided under the scalar rule.
///
/// Arrays and objects are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_value;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_empty_override_is_identity() {
        let defaults = default_value();
        assert_eq!(merge_with_defaults(&defaults, &json!({})), defaults);
    }

    #[test]
    fn test_non_empty_list_replaces_wholesale() {
        let defaults = default_value();
        let services = json!([{"icon": "fas fa-x", "title": "Only", "shortDesc": "s",
                               "fullDesc": "f", "features": []}]);
        let merged = merge_with_defaults(&defaults, &json!({ "services": services.clone() }));
        assert_eq!(merged["services"], services);
    }

    #[test]
    fn test_empty_list_keeps_default_list() {
        let defaults = default_value();
        let merged = merge_with_defaults(&defaults, &json!({"services": []}));
        assert_eq!(merged["services"], defaults["services"]);
    }

    #[test]
    fn test_record_subset_keeps_other_defaults() {
        let defaults = default_value();
        let merged = merge_with_defaults(&defaults, &json!({"personal": {"name": "Jane Doe"}}));
        assert_eq!(merged["personal"]["name"], "Jane Doe");
        assert_eq!(merged["personal"]["title"], defaults["personal"]["title"]);
        assert_eq!(merged["services"], defaults["services"]);
    }

    #[test]
    fn test_empty_string_keeps_default() {
        let defaults = default_value();
        let merged = merge_with_defaults(&defaults, &json!({"personal": {"name": ""}}));
        assert_eq!(merged["personal"]["name"], defaults["personal"]["name"]);
    }

    #[test]
    fn test_nested_record_is_merged_one_level_down() {
        let defaults = default_value();
        let merged = merge_with_defaults(
            &defaults,
            &json!({"branding": {"colors": {"accent": "#ff0000"}}}),
        );
        assert_eq!(merged["branding"]["colors"]["accent"], "#ff0000");
        assert_eq!(
            merged["branding"]["colors"]["primary"],
            defaults["branding"]["colors"]["primary"]
        );
        assert_eq!(
            merged["branding"]["siteName"],
            defaults["branding"]["siteName"]
        );
    }

    #[test]
    fn test_list_inside_record_follows_list_rule() {
        let defaults = default_value();
        let merged = merge_with_defaults(
            &defaults,
            &json!({"focusAreas": {"heading": "Mine", "areas": []}}),
        );
        assert_eq!(merged["focusAreas"]["heading"], "Mine");
        assert_eq!(merged["focusAreas"]["areas"], defaults["focusAreas"]["areas"]);
    }

    #[test]
    fn test_kind_mismatch_keeps_default() {
        let defaults = default_value();
        let merged = merge_with_defaults(
            &defaults,
            &json!({"personal": {"name": 42}, "services": "nope", "seo": [1]}),
        );
        assert_eq!(merged["personal"]["name"], defaults["personal"]["name"]);
        assert_eq!(merged["services"], defaults["services"]);
        assert_eq!(merged["seo"], defaults["seo"]);
    }

    #[test]
    fn test_false_flag_keeps_default_and_true_overrides() {
        let defaults = json!({"branding": {"lightTheme": false}});
        let on = merge_with_defaults(&defaults, &json!({"branding": {"lightTheme": true}}));
        assert_eq!(on["branding"]["lightTheme"], true);
        let off = merge_with_defaults(&defaults, &json!({"branding": {"lightTheme": false}}));
        assert_eq!(off["branding"]["lightTheme"], false);
    }

    #[test]
    fn test_null_section_is_absent() {
        let defaults = default_value();
        let merged = merge_with_defaults(&defaults, &json!({"footer": null}));
        assert_eq!(merged["footer"], defaults["footer"]);
    }

    #[test]
    fn test_extra_image_slot_is_kept() {
        let defaults = default_value();
        let merged = merge_with_defaults(
            &defaults,
            &json!({"images": {"teamPhoto": "https://example.com/team.jpg"}}),
        );
        assert_eq!(merged["images"]["teamPhoto"], "https://example.com/team.jpg");
        assert_eq!(
            merged["images"]["aboutImage"],
            defaults["images"]["aboutImage"]
        );
    }

    #[test]
    fn test_unknown_section_carried_through() {
        let merged = merge_with_defaults(&json!({"a": 1}), &json!({"extra": {"k": "v"}}));
        assert_eq!(merged, json!({"a": 1, "extra": {"k": "v"}}));
    }

    #[test]
    fn test_non_object_override_is_ignored() {
        let defaults = default_value();
        assert_eq!(merge_with_defaults(&defaults, &json!([1, 2])), defaults);
        assert_eq!(merge_with_defaults(&defaults, &json!("x")), defaults);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    proptest! {
        /// Merging twice with the same inputs gives structurally equal output.
        #[test]
        fn prop_merge_is_deterministic(patch in arb_override()) {
            let defaults = default_value();
            let first = merge_with_defaults(&defaults, &patch);
            let second = merge_with_defaults(&defaults, &patch);
            prop_assert_eq!(first, second);
        }

        /// Every default section survives any override.
        #[test]
        fn prop_merge_keeps_every_section(patch in arb_override()) {
            let defaults = default_value();
            let merged = merge_with_defaults(&defaults, &patch);
            let defaults = defaults.as_object().unwrap();
            for key in defaults.keys() {
                prop_assert!(merged.get(key).is_some_and(|v| !v.is_null()));
            }
        }

        /// Applying the merged result as an override again changes nothing.
        #[test]
        fn prop_merge_is_idempotent(patch in arb_override()) {
            let defaults = default_value();
            let once = merge_with_defaults(&defaults, &patch);
            let twice = merge_with_defaults(&once, &patch);
            prop_assert_eq!(once, twice);
        }
    }

    fn arb_override() -> impl Strategy<Value = Value> {
        let sections = prop_oneof![
            Just("personal"),
            Just("branding"),
            Just("services"),
            Just("gallery"),
            Just("focusAreas"),
            Just("seo"),
        ];
        prop::collection::hash_map(sections, arb_value(), 0..4)
            .prop_map(|m| Value::Object(m.into_iter().map(|(k, v)| (k.to_string(), v)).collect()))
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-z]{0,8}".prop_map(Value::String),
            prop::collection::vec("[a-z]{0,8}".prop_map(Value::String), 0..3)
                .prop_map(Value::Array),
            prop::collection::hash_map(
                prop_oneof![Just("name"), Just("title"), Just("colors"), Just("siteTitle")],
                "[a-z]{0,8}".prop_map(Value::String),
                0..3
            )
            .prop_map(|m| Value::Object(m.into_iter().map(|(k, v)| (k.to_string(), v)).collect())),
        ]
    }
}
