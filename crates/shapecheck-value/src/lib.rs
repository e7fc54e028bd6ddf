//! Untyped value model for shapecheck validators.
//!
//! A [`Value`] is what a JSON parser (or any other loosely-typed producer)
//! hands to a validator: objects, arrays, strings, numbers, booleans,
//! `null`, and the `undefined` marker for absent data. Composite values
//! are reference-counted so validators can return an input unchanged and
//! callers can observe that nothing was rebuilt.

pub mod callable;
pub mod json;
pub mod value;

pub use callable::Callable;
pub use value::{Map, Value};
