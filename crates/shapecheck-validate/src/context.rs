use shapecheck_value::Value;

use crate::error::ValidationError;

/// The location inside the value currently being validated.
///
/// Segments are object keys or stringified array indices. Every push is
/// paired with a pop; [`ValidationContext::at`] enforces the pairing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathContext {
    segments: Vec<String>,
}

impl PathContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

/// Per-traversal state threaded through every nested validator.
///
/// One context belongs to one top-level `validate`/`is_valid` call. Code
/// composing validators by hand passes the same context down with
/// [`Validator::validate_in`](crate::Validator::validate_in).
#[derive(Debug, Default)]
pub struct ValidationContext {
    path: PathContext,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &PathContext {
        &self.path
    }

    /// Build a failure at the current path.
    pub fn fail(&self, message: impl Into<String>) -> ValidationError {
        ValidationError::new(self.path.segments().to_vec(), message.into())
    }

    /// Describe a value for a failure message, e.g. `an array`.
    pub fn type_name(&self, value: &Value) -> &'static str {
        value.type_name()
    }

    /// Run `visit` with `segment` pushed onto the path.
    ///
    /// The segment is popped before returning, whether `visit` succeeded
    /// or failed.
    pub fn at<T>(&mut self, segment: impl Into<String>, visit: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment);
        let outcome = visit(self);
        self.path.pop();
        outcome
    }
}
