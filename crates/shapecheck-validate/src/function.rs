//! Validators for function values.
//!
//! Only the declared arity is checked. The function is never called, so
//! the return validator is a contract tag for consumers, not a runtime
//! check.

use std::ops::Deref;
use std::sync::Arc;

use shapecheck_value::Value;

use crate::thunk::Thunk;
use crate::validator::Validator;

/// A function validator plus its declared signature.
///
/// Dereferences to the underlying [`Validator`], so `validate`, `or_null`,
/// and friends are available directly.
#[derive(Debug, Clone)]
pub struct FunctionValidator {
    validator: Validator,
    parameters: Option<Arc<[Validator]>>,
    returns: Option<Validator>,
}

/// Accepts any function value.
pub fn a_function() -> FunctionValidator {
    FunctionValidator {
        validator: with_arity(None),
        parameters: None,
        returns: None,
    }
}

impl FunctionValidator {
    /// Narrow to functions declaring exactly `parameters.len()` parameters.
    pub fn that_accepts(&self, parameters: &[Validator]) -> FunctionValidator {
        FunctionValidator {
            validator: with_arity(Some(parameters.len())),
            parameters: Some(parameters.into()),
            returns: self.returns.clone(),
        }
    }

    /// Record the validator the function's result is expected to satisfy.
    pub fn and_returns(&self, returns: &Validator) -> FunctionValidator {
        FunctionValidator {
            validator: self.validator.clone(),
            parameters: self.parameters.clone(),
            returns: Some(returns.clone()),
        }
    }

    /// Declared parameter validators, if narrowed with `that_accepts`.
    pub fn parameters(&self) -> Option<&[Validator]> {
        self.parameters.as_deref()
    }

    pub fn returns(&self) -> Option<&Validator> {
        self.returns.as_ref()
    }

    /// Required arity, or `None` when any arity is accepted.
    pub fn arity(&self) -> Option<usize> {
        self.parameters.as_ref().map(|parameters| parameters.len())
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

impl Deref for FunctionValidator {
    type Target = Validator;

    fn deref(&self) -> &Validator {
        &self.validator
    }
}

impl From<FunctionValidator> for Validator {
    fn from(function: FunctionValidator) -> Self {
        function.validator
    }
}

impl From<FunctionValidator> for Thunk {
    fn from(function: FunctionValidator) -> Self {
        Thunk::Direct(function.validator)
    }
}

fn with_arity(arity: Option<usize>) -> Validator {
    Validator::new(move |value, _options, ctx| {
        let Value::Function(callable) = value else {
            return Err(ctx.fail(format!(
                "expected a function, not {}",
                ctx.type_name(value)
            )));
        };

        match arity {
            Some(expected) if callable.arity() != expected => Err(ctx.fail(format!(
                "expected a function with {expected} {}, not {}",
                parameter_noun(expected),
                callable.arity()
            ))),
            _ => Ok(value.clone()),
        }
    })
}

fn parameter_noun(count: usize) -> &'static str {
    if count == 1 {
        "parameter"
    } else {
        "parameters"
    }
}
