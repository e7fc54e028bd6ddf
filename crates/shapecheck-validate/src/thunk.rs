use std::fmt;
use std::sync::Arc;

use crate::validator::Validator;

type Deferral = dyn Fn() -> Validator + Send + Sync;

/// A validator, or a deferred reference to one.
///
/// `Deferred` is resolved on every visit and never cached. That is what
/// lets a shape refer to itself (or to a sibling defined later) before
/// its own definition has finished.
#[derive(Clone)]
pub enum Thunk {
    Direct(Validator),
    Deferred(Arc<Deferral>),
}

impl Thunk {
    /// Defer construction of a validator until it is needed.
    pub fn deferred<F>(resolve: F) -> Self
    where
        F: Fn() -> Validator + Send + Sync + 'static,
    {
        Thunk::Deferred(Arc::new(resolve))
    }

    pub fn resolve(&self) -> Validator {
        match self {
            Thunk::Direct(validator) => validator.clone(),
            Thunk::Deferred(resolve) => resolve(),
        }
    }
}

impl From<Validator> for Thunk {
    fn from(validator: Validator) -> Self {
        Thunk::Direct(validator)
    }
}

impl From<&Validator> for Thunk {
    fn from(validator: &Validator) -> Self {
        Thunk::Direct(validator.clone())
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thunk::Direct(validator) => f.debug_tuple("Direct").field(validator).finish(),
            Thunk::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
