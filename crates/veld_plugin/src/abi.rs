//! The C ABI contract between the Veld host and dynamically loaded plugins.
//!
//! A plugin shared library exports a single well-known entry point:
//!
//! ```c
//! const VeldPluginDecl *veld_plugin_entry(void);
//! ```
//!
//! The returned declaration must carry [`PLUGIN_ABI_VERSION`]; the host
//! validates the version and the name before calling any function in the
//! capability table.

use std::os::raw::c_char;

/// The ABI version the host expects in every [`PluginDecl`].
///
/// Bumped whenever the shape of [`PluginDecl`] or [`PluginVTable`] changes;
/// the loader rejects declarations carrying any other value without calling
/// into the module.
pub const PLUGIN_ABI_VERSION: u32 = 1;

/// Name of the entry-point symbol every plugin module must export.
pub const PLUGIN_ENTRY_SYMBOL: &str = "veld_plugin_entry";

/// Signature of the exported entry point.
pub type PluginEntryFn = unsafe extern "C" fn() -> *const PluginDecl;

/// The declaration a plugin's entry point returns, describing its identity
/// and capability table.
///
/// The pointed-to data must remain valid for as long as the module stays
/// loaded; the host copies out everything it needs at load time.
#[repr(C)]
pub struct PluginDecl {
    /// Must equal [`PLUGIN_ABI_VERSION`].
    pub abi_version: u32,
    /// Nul-terminated plugin name, unique within a registry.
    pub name: *const c_char,
    /// The plugin's lifecycle capability table.
    pub vtable: PluginVTable,
}

/// Lifecycle hooks a plugin may provide. Every slot is optional.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct PluginVTable {
    /// Invoked once when the plugin is registered with the host.
    pub on_load: Option<unsafe extern "C" fn()>,
    /// Invoked once when the registry is cleaned up.
    pub on_unload: Option<unsafe extern "C" fn()>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vtable_default_is_empty() {
        let vt = PluginVTable::default();
        assert!(vt.on_load.is_none());
        assert!(vt.on_unload.is_none());
    }

    #[test]
    fn decl_is_ffi_sized() {
        // The decl layout is part of the ABI: a version word, a name pointer,
        // and two function-pointer slots.
        use std::mem;
        assert_eq!(
            mem::size_of::<PluginVTable>(),
            2 * mem::size_of::<Option<unsafe extern "C" fn()>>()
        );
        assert!(mem::size_of::<PluginDecl>() >= mem::size_of::<PluginVTable>());
    }
}
