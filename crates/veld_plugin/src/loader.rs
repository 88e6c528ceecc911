//! Dynamic loading and validation of plugin modules.

use crate::abi::{PluginEntryFn, PLUGIN_ABI_VERSION, PLUGIN_ENTRY_SYMBOL};
use crate::error::PluginError;
use crate::registry::Plugin;
use libloading::Library;
use std::ffi::CStr;
use std::path::Path;

/// Opens the module at `path`, resolves its entry point, validates the
/// returned declaration, and copies its identity and capability table into a
/// host-owned [`Plugin`].
///
/// Validation order matters: the ABI version is checked before anything else
/// in the declaration is trusted, and no function in the capability table is
/// invoked here. On every error path the [`Library`] is dropped, which
/// unloads the module.
pub(crate) fn load_module(path: &Path) -> Result<Plugin, PluginError> {
    // SAFETY: opening a shared library runs its initializers; that is the
    // contract of plugin loading. The library is dropped (unloaded) on every
    // failure path below.
    let library = unsafe { Library::new(path) }?;

    let decl = {
        // SAFETY: the symbol is declared to have the PluginEntryFn signature
        // by the plugin ABI; a module exporting it with another type is
        // malformed and outside what the host can defend against.
        let entry: libloading::Symbol<'_, PluginEntryFn> =
            unsafe { library.get(PLUGIN_ENTRY_SYMBOL.as_bytes()) }
                .map_err(|_| PluginError::MissingEntryPoint)?;
        // SAFETY: calling the validated entry point; it returns a pointer to
        // static data owned by the module.
        unsafe { entry() }
    };
    if decl.is_null() {
        return Err(PluginError::NullDecl);
    }
    // SAFETY: non-null decl returned by the entry point; the module (and thus
    // the pointed-to data) stays mapped while `library` is alive, and every
    // field we keep is copied out below.
    let decl = unsafe { &*decl };

    if decl.abi_version != PLUGIN_ABI_VERSION {
        return Err(PluginError::AbiMismatch {
            found: decl.abi_version,
            expected: PLUGIN_ABI_VERSION,
        });
    }
    if decl.name.is_null() {
        return Err(PluginError::InvalidName);
    }
    // SAFETY: non-null, nul-terminated per the ABI contract.
    let name = unsafe { CStr::from_ptr(decl.name) }
        .to_str()
        .map_err(|_| PluginError::InvalidName)?
        .to_owned();
    if name.is_empty() {
        return Err(PluginError::InvalidName);
    }

    let vtable = decl.vtable;
    Ok(Plugin::dynamic(name, vtable, library))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_path_is_a_load_error() {
        let err = load_module(Path::new("/no/such/dir/libveld_fmt.so")).unwrap_err();
        assert!(matches!(err, PluginError::Load(_)));
    }

    #[test]
    fn regular_file_is_not_a_loadable_module() {
        let dir = std::env::temp_dir().join("veld_plugin_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let bogus = dir.join("not_a_library.so");
        std::fs::write(&bogus, b"definitely not an ELF file").unwrap();

        let err = load_module(&bogus).unwrap_err();
        assert!(matches!(err, PluginError::Load(_)));

        std::fs::remove_dir_all(&dir).ok();
    }
}
