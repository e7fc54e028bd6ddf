//! Leaf validators for strings, numbers, booleans, and string literals.

use std::sync::LazyLock;

use shapecheck_value::Value;

use crate::validator::Validator;

static A_STRING: LazyLock<Validator> =
    LazyLock::new(|| primitive("a string", |value| matches!(value, Value::String(_))));
static A_NUMBER: LazyLock<Validator> =
    LazyLock::new(|| primitive("a number", |value| matches!(value, Value::Number(_))));
static A_BOOLEAN: LazyLock<Validator> =
    LazyLock::new(|| primitive("a boolean", |value| matches!(value, Value::Bool(_))));

/// Accepts any string.
pub fn a_string() -> Validator {
    A_STRING.clone()
}

/// Accepts any number, including `NaN` and infinities.
pub fn a_number() -> Validator {
    A_NUMBER.clone()
}

/// Accepts `true` or `false`.
pub fn a_boolean() -> Validator {
    A_BOOLEAN.clone()
}

/// Accepts exactly `literal`.
pub fn a_string_literal(literal: impl Into<String>) -> Validator {
    a_string_union([literal])
}

/// Accepts any one of `literals`, compared by exact string equality.
pub fn a_string_union<I, S>(literals: I) -> Validator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let literals: Vec<String> = literals.into_iter().map(Into::into).collect();
    let expected = literals
        .iter()
        .map(|literal| format!("\"{literal}\""))
        .collect::<Vec<_>>()
        .join(" | ");

    Validator::new(move |value, _options, ctx| match value {
        Value::String(s) if literals.contains(s) => Ok(value.clone()),
        _ => Err(ctx.fail(format!(
            "expected {expected}, not {}",
            ctx.type_name(value)
        ))),
    })
}

fn primitive(expected: &'static str, accepts: fn(&Value) -> bool) -> Validator {
    Validator::new(move |value, _options, ctx| {
        if accepts(value) {
            Ok(value.clone())
        } else {
            Err(ctx.fail(format!(
                "expected {expected}, not {}",
                ctx.type_name(value)
            )))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_accept_matching_values_unchanged() {
        let cases = [
            (a_string(), Value::from("hello")),
            (a_string(), Value::from("")),
            (a_number(), Value::from(0)),
            (a_number(), Value::from(-12.5)),
            (a_boolean(), Value::from(false)),
        ];

        for (validator, value) in cases {
            assert!(validator.is_valid(&value));
            assert!(validator.validate(&value).unwrap().is_identical(&value));
        }
    }

    #[test]
    fn primitive_failure_names_both_types() {
        let err = a_string().validate(&Value::from(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: expected a string, not a number"
        );

        let err = a_boolean().validate(&Value::Null).unwrap_err();
        assert_eq!(err.message(), "expected a boolean, not null");

        let err = a_number().validate(&Value::Undefined).unwrap_err();
        assert_eq!(err.message(), "expected a number, not undefined");
    }

    #[test]
    fn shared_instances_are_reused() {
        assert!(Validator::ptr_eq(&a_string(), &a_string()));
        assert!(Validator::ptr_eq(&a_number().or_null(), &a_number().or_null()));
    }

    #[test]
    fn string_literal_requires_exact_match() {
        let ok = a_string_literal("ok");
        assert!(ok.is_valid(&Value::from("ok")));
        assert!(!ok.is_valid(&Value::from("OK")));
        assert_eq!(
            ok.validate(&Value::from(1)).unwrap_err().message(),
            "expected \"ok\", not a number"
        );
    }

    #[test]
    fn string_union_lists_alternatives() {
        let level = a_string_union(["debug", "info", "warn"]);
        assert!(level.is_valid(&Value::from("info")));
        assert_eq!(
            level.validate(&Value::from("error")).unwrap_err().message(),
            "expected \"debug\" | \"info\" | \"warn\", not a string"
        );
    }
}
