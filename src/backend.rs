//! Engine selection.

use std::env;

use crate::engine::Engine;
use crate::html::HtmlEngine;

/// Environment variable naming the engine to use at runtime.
pub const ENGINE_ENV: &str = "TMD_ENGINE";

/// The engines this build can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Built-in `pulldown-cmark` HTML renderer.
    Html,
    /// Linked `tmd.c` routine.
    #[cfg(tmd_native)]
    Native,
}

#[cfg(tmd_native)]
const DEFAULT_BACKEND: Backend = Backend::Native;
#[cfg(not(tmd_native))]
const DEFAULT_BACKEND: Backend = Backend::Html;

impl Default for Backend {
    /// The native routine when it was compiled in, HTML otherwise.
    fn default() -> Self {
        DEFAULT_BACKEND
    }
}

impl Backend {
    /// Parse a backend name. Returns `None` for unknown names and for
    /// `native` when no native routine is linked.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "html" => Some(Backend::Html),
            #[cfg(tmd_native)]
            "native" => Some(Backend::Native),
            _ => None,
        }
    }

    /// Backend named by `TMD_ENGINE`, falling back to the default.
    pub fn from_env() -> Self {
        env::var(ENGINE_ENV)
            .ok()
            .and_then(|name| Self::from_name(&name))
            .unwrap_or_default()
    }

    /// Whether this build links the native routine.
    pub const fn native_available() -> bool {
        cfg!(tmd_native)
    }

    /// Engine wired to the process's stdin and stdout.
    pub fn engine(self) -> Box<dyn Engine> {
        match self {
            Backend::Html => Box::new(HtmlEngine::stdio()),
            #[cfg(tmd_native)]
            Backend::Native => Box::new(crate::native::NativeEngine::new()),
        }
    }
}
