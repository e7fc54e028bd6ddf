//! Object validation against a fixed set of declared properties.

use std::sync::Arc;

use shapecheck_value::{Map, Value};
use tracing::trace;

use crate::thunk::Thunk;
use crate::validator::Validator;

static UNDEFINED: Value = Value::Undefined;

/// Objects with exactly the declared properties.
///
/// Each declared key is validated in declaration order against its own
/// validator; a missing key is validated as `undefined`, so only
/// `or_undefined` fields may be absent. A field that validates to
/// `undefined` while missing from the input stays missing in the result.
///
/// Undeclared keys fail with `unexpected property "<key>"` unless
/// [`ValidationOptions::allow_extra_properties`] is set, in which case
/// they are copied through. When no field changed and nothing extra was
/// copied, the input object itself is returned.
///
/// Declaring the same key twice keeps the last validator.
///
/// [`ValidationOptions::allow_extra_properties`]: crate::ValidationOptions::allow_extra_properties
pub fn an_object<I, K, V>(fields: I) -> Validator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Thunk>,
{
    let mut declared: Vec<(String, Thunk)> = Vec::new();
    for (key, thunk) in fields {
        let key = key.into();
        let thunk = thunk.into();
        match declared.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = thunk,
            None => declared.push((key, thunk)),
        }
    }

    Validator::new(move |value, options, ctx| {
        let Value::Object(input) = value else {
            return Err(ctx.fail(format!(
                "expected an object, not {}",
                ctx.type_name(value)
            )));
        };

        let mut result = Map::new();
        let mut changed = false;

        for (key, thunk) in &declared {
            let validator = thunk.resolve();
            let raw = input.get(key);
            let field = raw.unwrap_or(&UNDEFINED);
            let validated = ctx.at(key.as_str(), |ctx| validator.validate_in(field, options, ctx))?;

            if validated.is_undefined() && raw.is_none() {
                continue;
            }
            changed |= !validated.is_identical(field);
            result.insert(key.clone(), validated);
        }

        for (key, extra) in input.iter() {
            if declared.iter().any(|(name, _)| name == key) {
                continue;
            }
            if !options.allow_extra_properties {
                trace!(property = %key, path = %ctx.path().dotted(), "undeclared property");
                return Err(ctx.fail(format!("unexpected property \"{key}\"")));
            }
            result.insert(key.clone(), extra.clone());
            changed = true;
        }

        if changed {
            Ok(Value::Object(Arc::new(result)))
        } else {
            Ok(value.clone())
        }
    })
}
