use std::fmt;
use std::sync::Arc;

use crate::value::Value;

type Body = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A function value with a declared parameter count.
///
/// The arity is what function validators inspect; the body is never run
/// during validation.
#[derive(Clone)]
pub struct Callable {
    arity: usize,
    body: Arc<Body>,
}

impl Callable {
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            arity,
            body: Arc::new(body),
        }
    }

    /// Declared number of parameters.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

// Callables have no structural equality; two values are equal only when
// they share the same allocation.
impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_runs_body() {
        let add = Callable::new(2, |args| {
            let sum = args.iter().filter_map(Value::as_f64).sum::<f64>();
            Value::Number(sum)
        });

        assert_eq!(add.arity(), 2);
        assert_eq!(add.call(&[Value::from(1), Value::from(2)]), Value::Number(3.0));
    }

    #[test]
    fn debug_omits_body() {
        let noop = Callable::new(0, |_| Value::Undefined);
        assert_eq!(format!("{noop:?}"), "Callable { arity: 0, .. }");
    }
}
