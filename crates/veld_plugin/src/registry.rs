//! The name-indexed table of plugins registered with a compiler instance.

use crate::abi::PluginVTable;
use crate::error::PluginError;
use crate::loader;
use libloading::Library;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

/// A named capability unit registered with the host.
///
/// Built-in plugins are constructed statically; dynamic plugins additionally
/// own the [`Library`] handle that keeps their code mapped. The host copies
/// the name and capability table out of the module at load time, so nothing
/// dereferences into foreign memory after [`load`](PluginRegistry::load)
/// returns.
#[derive(Debug)]
pub struct Plugin {
    name: String,
    vtable: PluginVTable,
    /// Keeps a dynamically loaded module mapped; `None` for built-ins.
    /// Dropped last, after the unload hook has run.
    library: Option<Library>,
}

impl Plugin {
    /// Creates a statically-constructed (compiled-in) plugin.
    pub fn builtin(name: impl Into<String>, vtable: PluginVTable) -> Self {
        Self {
            name: name.into(),
            vtable,
            library: None,
        }
    }

    pub(crate) fn dynamic(name: String, vtable: PluginVTable, library: Library) -> Self {
        Self {
            name,
            vtable,
            library: Some(library),
        }
    }

    /// The plugin's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this plugin was loaded from a shared library.
    pub fn is_dynamic(&self) -> bool {
        self.library.is_some()
    }

    fn invoke_on_load(&self) {
        if let Some(hook) = self.vtable.on_load {
            // SAFETY: the hook comes from a decl whose ABI version was
            // validated, and the owning library (if any) is still mapped.
            unsafe { hook() };
        }
    }

    fn invoke_on_unload(&self) {
        if let Some(hook) = self.vtable.on_unload {
            // SAFETY: as for on_load; called before the library is dropped.
            unsafe { hook() };
        }
    }
}

/// The registry of all plugins known to a running compiler instance.
///
/// Plugin names are unique: registration never silently overwrites an
/// existing entry. Lookups return non-owning references; the registry owns
/// every [`Plugin`] record until [`cleanup`](Self::cleanup).
#[derive(Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, Plugin>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a statically-constructed plugin under its declared name.
    ///
    /// Fails with [`PluginError::DuplicateName`] when the name is taken; the
    /// existing entry is left untouched.
    pub fn register(&mut self, plugin: Plugin) -> Result<(), PluginError> {
        self.insert(plugin).map(|_| ())
    }

    /// Loads a plugin module from a shared-library path and registers it.
    ///
    /// The module's entry point is resolved and its declaration validated
    /// (ABI version, name) before anything in its capability table is called.
    /// On any failure the module is unloaded and existing registrations are
    /// untouched; failure is never fatal to the host process.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&Plugin, PluginError> {
        let plugin = loader::load_module(path.as_ref())?;
        self.insert(plugin)
    }

    /// Looks up a previously registered plugin by exact name.
    pub fn find(&self, name: &str) -> Option<&Plugin> {
        self.plugins.get(name)
    }

    /// The number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns `true` if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Unloads and releases every registered plugin.
    ///
    /// Each plugin's unload hook runs before its library handle is dropped.
    /// Safe to call when nothing was ever loaded, and the registry is
    /// reusable (empty) afterwards.
    pub fn cleanup(&mut self) {
        for (_, plugin) in self.plugins.drain() {
            plugin.invoke_on_unload();
        }
    }

    fn insert(&mut self, plugin: Plugin) -> Result<&Plugin, PluginError> {
        match self.plugins.entry(plugin.name.clone()) {
            Entry::Occupied(existing) => {
                Err(PluginError::DuplicateName(existing.key().clone()))
            }
            Entry::Vacant(slot) => {
                let plugin = slot.insert(plugin);
                plugin.invoke_on_load();
                Ok(plugin)
            }
        }
    }
}

impl Drop for PluginRegistry {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn register_and_find() {
        let mut registry = PluginRegistry::new();
        registry
            .register(Plugin::builtin("fmt", PluginVTable::default()))
            .unwrap();
        let found = registry.find("fmt").unwrap();
        assert_eq!(found.name(), "fmt");
        assert!(!found.is_dynamic());
        assert!(registry.find("missing").is_none());
    }

    #[test]
    fn duplicate_name_rejected_original_survives() {
        let mut registry = PluginRegistry::new();
        registry
            .register(Plugin::builtin("lint", PluginVTable::default()))
            .unwrap();
        let err = registry
            .register(Plugin::builtin("lint", PluginVTable::default()))
            .unwrap_err();
        assert!(matches!(err, PluginError::DuplicateName(name) if name == "lint"));
        assert!(registry.find("lint").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn load_nonexistent_path_fails_without_side_effects() {
        let mut registry = PluginRegistry::new();
        registry
            .register(Plugin::builtin("keep", PluginVTable::default()))
            .unwrap();
        let err = registry.load("/nonexistent/libplugin.so").unwrap_err();
        assert!(matches!(err, PluginError::Load(_)));
        assert_eq!(registry.len(), 1);
        assert!(registry.find("keep").is_some());
    }

    #[test]
    fn cleanup_then_find_returns_none() {
        let mut registry = PluginRegistry::new();
        registry
            .register(Plugin::builtin("fmt", PluginVTable::default()))
            .unwrap();
        registry
            .register(Plugin::builtin("lint", PluginVTable::default()))
            .unwrap();
        registry.cleanup();
        assert!(registry.is_empty());
        assert!(registry.find("fmt").is_none());
        assert!(registry.find("lint").is_none());
    }

    #[test]
    fn cleanup_on_empty_registry_is_safe() {
        let mut registry = PluginRegistry::new();
        registry.cleanup();
        registry.cleanup();
        assert!(registry.is_empty());
    }

    #[test]
    fn lifecycle_hooks_fire_once_each() {
        static LOAD_CALLS: AtomicU32 = AtomicU32::new(0);
        static UNLOAD_CALLS: AtomicU32 = AtomicU32::new(0);
        unsafe extern "C" fn count_load() {
            LOAD_CALLS.fetch_add(1, Ordering::SeqCst);
        }
        unsafe extern "C" fn count_unload() {
            UNLOAD_CALLS.fetch_add(1, Ordering::SeqCst);
        }
        let vtable = PluginVTable {
            on_load: Some(count_load),
            on_unload: Some(count_unload),
        };

        let mut registry = PluginRegistry::new();
        registry.register(Plugin::builtin("hooked", vtable)).unwrap();
        assert_eq!(LOAD_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(UNLOAD_CALLS.load(Ordering::SeqCst), 0);

        registry.cleanup();
        assert_eq!(UNLOAD_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn duplicate_registration_does_not_fire_hooks() {
        static DUP_LOAD_CALLS: AtomicU32 = AtomicU32::new(0);
        unsafe extern "C" fn count_dup_load() {
            DUP_LOAD_CALLS.fetch_add(1, Ordering::SeqCst);
        }
        let vtable = PluginVTable {
            on_load: Some(count_dup_load),
            on_unload: None,
        };
        let mut registry = PluginRegistry::new();
        registry.register(Plugin::builtin("once", vtable)).unwrap();
        assert_eq!(DUP_LOAD_CALLS.load(Ordering::SeqCst), 1);
        let _ = registry.register(Plugin::builtin("once", vtable));
        assert_eq!(DUP_LOAD_CALLS.load(Ordering::SeqCst), 1);
    }
}
