//! Error types for plugin registration and loading.

/// Errors that can occur when registering or loading a plugin.
///
/// Every variant is recoverable from the host's point of view: a failed
/// plugin is reported through the diagnostic engine and the compiler
/// continues without it.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// The shared library could not be opened or linked.
    #[error("failed to load plugin library: {0}")]
    Load(#[from] libloading::Error),

    /// The module does not export the well-known entry point.
    #[error("plugin does not export the 'veld_plugin_entry' entry point")]
    MissingEntryPoint,

    /// The entry point returned a null declaration.
    #[error("plugin entry point returned a null declaration")]
    NullDecl,

    /// The declaration carries an ABI version the host does not support.
    #[error("plugin ABI version {found} does not match host version {expected}")]
    AbiMismatch {
        /// The version the module declared.
        found: u32,
        /// The version this host was built against.
        expected: u32,
    },

    /// The declared name is null, empty, or not valid UTF-8.
    #[error("plugin declares an invalid name")]
    InvalidName,

    /// A plugin with the same name is already registered.
    #[error("a plugin named '{0}' is already registered")]
    DuplicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_abi_mismatch() {
        let err = PluginError::AbiMismatch {
            found: 3,
            expected: 1,
        };
        assert_eq!(
            format!("{err}"),
            "plugin ABI version 3 does not match host version 1"
        );
    }

    #[test]
    fn display_duplicate_name() {
        let err = PluginError::DuplicateName("fmt".to_string());
        assert_eq!(format!("{err}"), "a plugin named 'fmt' is already registered");
    }
}
