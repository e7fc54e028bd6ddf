//! Runtime shape validation for loosely-typed data.
//!
//! shapecheck validates already-deserialized values (for example the
//! output of a JSON parser) against composable validators, returning the
//! normalized value or an error that names the dotted path to the
//! offending field.
//!
//! # Crate Structure
//!
//! - [`value`] — Untyped value model with observable identity
//! - [`validate`] — Validators, combinators, and path-aware errors
//!
//! ```
//! use shapecheck::prelude::*;
//!
//! let setting = an_object([
//!     ("name", a_string()),
//!     ("value", a_string().or_null()),
//! ]);
//!
//! let input = Value::object([("name", Value::from("mode")), ("value", Value::Null)]);
//! let output = setting.validate(&input).unwrap();
//! assert!(output.is_identical(&input));
//! ```

/// Re-export value types.
pub mod value {
    pub use shapecheck_value::*;
}

/// Re-export validator types.
pub mod validate {
    pub use shapecheck_validate::*;
}

/// The names most callers need.
pub mod prelude {
    pub use shapecheck_validate::{
        a_boolean, a_function, a_number, a_string, a_string_literal, a_string_union, an_object,
        DecodeError, FunctionValidator, Thunk, ValidationContext, ValidationError,
        ValidationOptions, Validator,
    };
    pub use shapecheck_value::{Map, Value};
}
