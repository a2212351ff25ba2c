//! Storage capability gate.
//!
//! Browser-hosted builds have no embedded `SQLite` engine. On those targets the
//! store is never opened and the front end shows [`crate::ui::fallback_message`]
//! instead of the form and the list. This is a capability check, not an error.

/// Whether the embedded `SQLite` engine is available on this target.
#[must_use]
pub const fn storage_supported() -> bool {
    !cfg!(target_family = "wasm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_family = "wasm"))]
    fn test_native_targets_support_storage() {
        assert!(storage_supported());
    }
}
