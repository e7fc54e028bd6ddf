use serde::{Deserialize, Serialize};

/// Controls validator behavior for one traversal.
///
/// Passed unchanged to every nested validator. Deserializes from
/// camelCase keys so it can sit inside a host's configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationOptions {
    /// When true, object validators copy undeclared properties into the
    /// result instead of rejecting them.
    pub allow_extra_properties: bool,
}

impl ValidationOptions {
    /// Options that tolerate undeclared object properties.
    pub fn permissive() -> Self {
        Self {
            allow_extra_properties: true,
        }
    }
}
