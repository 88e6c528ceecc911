//! Plugin registration and dynamic loading for the Veld compiler.
//!
//! External modules extend the compiler by registering named capability units
//! with a [`PluginRegistry`] — either statically (compiled-in built-ins via
//! [`Plugin::builtin`]) or dynamically, by loading a shared library that
//! exports the entry point described in [`abi`]. The loader validates the
//! module's ABI version before calling into foreign code, and every load
//! failure is returned to the caller rather than crashing the host: a missing
//! or malformed plugin must never take down the compiler.

#![warn(missing_docs)]

pub mod abi;
pub mod error;
mod loader;
pub mod registry;

pub use abi::{PluginDecl, PluginVTable, PLUGIN_ABI_VERSION, PLUGIN_ENTRY_SYMBOL};
pub use error::PluginError;
pub use registry::{Plugin, PluginRegistry};
