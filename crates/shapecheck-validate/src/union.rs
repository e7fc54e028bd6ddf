//! Two-way union (`or`).

use std::sync::Arc;

use tracing::trace;

use crate::validator::{CheckFn, Validator};

// The first alternative's failure is dropped; callers only ever see the
// last attempted alternative's message.
pub(crate) fn either(first: Arc<CheckFn>, second: Arc<CheckFn>) -> Validator {
    Validator::new(move |value, options, ctx| {
        first(value, options, ctx).or_else(|err| {
            trace!(error = %err, "first union alternative rejected value");
            second(value, options, ctx)
        })
    })
}
