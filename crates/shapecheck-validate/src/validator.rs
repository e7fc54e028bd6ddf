use std::fmt;
use std::sync::{Arc, OnceLock};

use shapecheck_value::Value;
use tracing::{debug, trace};

use crate::context::ValidationContext;
use crate::error::Result;
use crate::options::ValidationOptions;
use crate::{array, nullable, union};

/// The function every validator wraps.
pub(crate) type CheckFn =
    dyn Fn(&Value, &ValidationOptions, &mut ValidationContext) -> Result<Value> + Send + Sync;

/// A reusable, stateless check that turns an untyped value into a value
/// of the expected shape.
///
/// Cloning is cheap and yields a handle to the same validator. A single
/// validator may run on any number of threads at once; each call owns its
/// own [`ValidationContext`].
#[derive(Clone)]
pub struct Validator {
    inner: Arc<Inner>,
}

struct Inner {
    check: Arc<CheckFn>,
    or_null: OnceLock<Validator>,
    or_undefined: OnceLock<Validator>,
    array: OnceLock<Validator>,
}

impl Validator {
    /// Wrap a check function as a validator.
    ///
    /// The function reports failures with [`ValidationContext::fail`] and
    /// must thread `options` and `ctx` unchanged into any validator it
    /// delegates to.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value, &ValidationOptions, &mut ValidationContext) -> Result<Value>
            + Send
            + Sync
            + 'static,
    {
        Self::from_check(Arc::new(check))
    }

    fn from_check(check: Arc<CheckFn>) -> Self {
        Self {
            inner: Arc::new(Inner {
                check,
                or_null: OnceLock::new(),
                or_undefined: OnceLock::new(),
                array: OnceLock::new(),
            }),
        }
    }

    // Derived validators capture only the check function; a cached
    // wrapper must never hold the Inner that caches it.
    pub(crate) fn check(&self) -> Arc<CheckFn> {
        Arc::clone(&self.inner.check)
    }

    /// Validate with default options.
    pub fn validate(&self, value: &Value) -> Result<Value> {
        self.validate_with(value, &ValidationOptions::default())
    }

    /// Validate with explicit options and a fresh context.
    pub fn validate_with(&self, value: &Value, options: &ValidationOptions) -> Result<Value> {
        let mut ctx = ValidationContext::new();
        self.validate_in(value, options, &mut ctx)
            .inspect_err(|err| debug!(error = %err, "value rejected"))
    }

    /// Validate inside an existing traversal.
    pub fn validate_in(
        &self,
        value: &Value,
        options: &ValidationOptions,
        ctx: &mut ValidationContext,
    ) -> Result<Value> {
        (self.inner.check)(value, options, ctx)
    }

    pub fn is_valid(&self, value: &Value) -> bool {
        self.is_valid_with(value, &ValidationOptions::default())
    }

    /// True when `value` passes; failures never escape.
    pub fn is_valid_with(&self, value: &Value, options: &ValidationOptions) -> bool {
        let mut ctx = ValidationContext::new();
        match self.validate_in(value, options, &mut ctx) {
            Ok(_) => true,
            Err(err) => {
                trace!(error = %err, "is_valid rejected value");
                false
            }
        }
    }

    /// This validator, additionally accepting `null`.
    ///
    /// Built on first use; later calls return the same handle.
    pub fn or_null(&self) -> Validator {
        self.inner
            .or_null
            .get_or_init(|| nullable::or_null(self.check()))
            .clone()
    }

    /// This validator, additionally accepting `undefined`.
    pub fn or_undefined(&self) -> Validator {
        self.inner
            .or_undefined
            .get_or_init(|| nullable::or_undefined(self.check()))
            .clone()
    }

    /// Arrays whose elements all pass this validator.
    pub fn array(&self) -> Validator {
        self.inner
            .array
            .get_or_init(|| array::array_of(self.check()))
            .clone()
    }

    /// Try this validator, then `other`. Only `other`'s failure surfaces.
    pub fn or(&self, other: &Validator) -> Validator {
        union::either(self.check(), other.check())
    }

    /// True when both handles refer to the same validator.
    pub fn ptr_eq(a: &Validator, b: &Validator) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("id", &Arc::as_ptr(&self.inner))
            .finish_non_exhaustive()
    }
}
