//! `or_null` / `or_undefined` wrappers.

use std::sync::Arc;

use shapecheck_value::Value;

use crate::validator::{CheckFn, Validator};

pub(crate) fn or_null(check: Arc<CheckFn>) -> Validator {
    Validator::new(move |value, options, ctx| match value {
        Value::Null => Ok(Value::Null),
        _ => check(value, options, ctx),
    })
}

pub(crate) fn or_undefined(check: Arc<CheckFn>) -> Validator {
    Validator::new(move |value, options, ctx| match value {
        Value::Undefined => Ok(Value::Undefined),
        _ => check(value, options, ctx),
    })
}
