//! Registry error types.

use thiserror::Error;

/// Errors returned by registry operations.
///
/// Every duplicate-key variant is raised before any mutating effect, so a
/// failed call never leaves a partially applied registration behind.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("item {0} is not registered in the current registry")]
    NotFound(String),

    #[error("cannot register item {item} because the registry already has an item named {existing}")]
    AlreadyRegistered { item: String, existing: String },

    #[error(
        "there are items that share the same name with different case-styles, \
         and since registry case sensitivity is disabled they cannot be registered"
    )]
    CaseFoldCollision,

    #[error("there are duplicate handles in the provided items list")]
    DuplicateHandles,
}

impl RegistryError {
    /// Returns true for the duplicate-key family of errors.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRegistered { .. } | Self::CaseFoldCollision | Self::DuplicateHandles
        )
    }

    /// Returns true when the error reports an absent name.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
