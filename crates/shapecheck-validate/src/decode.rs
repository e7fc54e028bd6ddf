//! Typed decoding of validated values through serde.

use serde::de::DeserializeOwned;
use shapecheck_value::Value;

use crate::error::DecodeError;
use crate::options::ValidationOptions;
use crate::validator::Validator;

impl Validator {
    /// Validate `value`, then deserialize the result into `T`.
    pub fn decode<T: DeserializeOwned>(&self, value: &Value) -> Result<T, DecodeError> {
        self.decode_with(value, &ValidationOptions::default())
    }

    /// [`decode`](Self::decode) with explicit options.
    pub fn decode_with<T: DeserializeOwned>(
        &self,
        value: &Value,
        options: &ValidationOptions,
    ) -> Result<T, DecodeError> {
        let validated = self.validate_with(value, options)?;
        let json = validated.to_json().ok_or(DecodeError::NotRepresentable)?;
        serde_json::from_value(json).map_err(DecodeError::Decode)
    }
}
