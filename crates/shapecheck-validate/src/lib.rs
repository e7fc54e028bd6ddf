//! Composable runtime validators for loosely-typed values.
//!
//! A [`Validator`] checks an untyped [`Value`](shapecheck_value::Value)
//! against an expected shape and returns the normalized value, or a
//! [`ValidationError`] naming the dotted path to the offending field.
//! Primitive validators combine into nullable, optional, array, union,
//! object, and function-arity validators; [`Thunk`] lets a definition
//! refer to a validator that is not built yet, which is how recursive
//! shapes are expressed.
//!
//! Unchanged inputs come back by reference: when no nested validator
//! rebuilt anything, the array and object combinators return the input
//! allocation itself.

pub mod array;
pub mod context;
pub mod decode;
pub mod error;
pub mod function;
pub mod nullable;
pub mod object;
pub mod options;
pub mod primitive;
pub mod thunk;
pub mod union;
pub mod validator;

pub use context::{PathContext, ValidationContext};
pub use error::{DecodeError, Result, ValidationError};
pub use function::{a_function, FunctionValidator};
pub use object::an_object;
pub use options::ValidationOptions;
pub use primitive::{a_boolean, a_number, a_string, a_string_literal, a_string_union};
pub use thunk::Thunk;
pub use validator::Validator;
