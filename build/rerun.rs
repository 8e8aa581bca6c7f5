//! Rerun directives for the build script.
//!
//! Any `rerun-if-*` line replaces Cargo's default of rerunning on every
//! package change, so the native source is always watched explicitly: the
//! file itself once found, otherwise the directory it is expected in.

use std::path::Path;

pub const TMD_DIR_ENV: &str = "TMD_DIR";

pub fn rerun_directives(tmd_dir: &Path, tmd_c: &Path, found: bool) -> Vec<String> {
    let watched = if found { tmd_c } else { tmd_dir };
    vec![
        format!("cargo:rerun-if-env-changed={TMD_DIR_ENV}"),
        format!("cargo:rerun-if-changed={}", watched.display()),
    ]
}
