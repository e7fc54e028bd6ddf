/// A value did not match the expected shape.
///
/// Renders as `Validation error: <message>` at the root, or
/// `Validation error for key '<dotted.path>': <message>` below it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation error{}: {}", key_clause(.path), .message)]
pub struct ValidationError {
    path: Vec<String>,
    message: String,
}

impl ValidationError {
    pub(crate) fn new(path: Vec<String>, message: String) -> Self {
        Self { path, message }
    }

    /// Path segments from the root to the failing value.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Path segments joined with `.`; empty at the root.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// The failure reason without the path prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn key_clause(path: &[String]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" for key '{}'", path.join("."))
    }
}

/// Errors from decoding a validated value into a typed model.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The validated value is `undefined` or a function.
    #[error("validated value has no JSON representation")]
    NotRepresentable,

    /// The validated value did not fit the target type.
    #[error("failed to decode validated value: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
