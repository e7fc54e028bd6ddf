//! Homogeneous array validation.

use std::sync::Arc;

use shapecheck_value::Value;

use crate::validator::{CheckFn, Validator};

pub(crate) fn array_of(check: Arc<CheckFn>) -> Validator {
    Validator::new(move |value, options, ctx| {
        let Value::Array(items) = value else {
            return Err(ctx.fail(format!(
                "expected an array, not {}",
                ctx.type_name(value)
            )));
        };

        let mut validated = Vec::with_capacity(items.len());
        let mut changed = false;
        for (index, item) in items.iter().enumerate() {
            let result = ctx.at(index.to_string(), |ctx| check(item, options, ctx))?;
            changed |= !result.is_identical(item);
            validated.push(result);
        }

        if changed {
            Ok(Value::from(validated))
        } else {
            Ok(value.clone())
        }
    })
}
