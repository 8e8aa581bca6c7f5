use std::env;
use std::path::{Path, PathBuf};

#[path = "build/rerun.rs"]
mod rerun;

use rerun::{TMD_DIR_ENV, rerun_directives};

fn main() {
    println!("cargo:rustc-check-cfg=cfg(tmd_native)");

    let tmd_dir = tmd_dir();
    let tmd_c = tmd_dir.join("tmd.c");
    let found = tmd_c.exists();

    for directive in rerun_directives(&tmd_dir, &tmd_c, found) {
        println!("{directive}");
    }

    if !found {
        if env::var_os(TMD_DIR_ENV).is_some() {
            println!(
                "cargo:warning=tmd.c not found in {}, falling back to the built-in HTML engine",
                tmd_dir.display()
            );
        }
        return;
    }

    // The C entry point is renamed so it links next to the Rust `main`.
    cc::Build::new()
        .file(&tmd_c)
        .define("main", "tmd_main")
        .flag_if_supported("-std=c99")
        .warnings(false)
        .compile("tmd");

    println!("cargo:rustc-cfg=tmd_native");
}

fn tmd_dir() -> PathBuf {
    if let Ok(dir) = env::var(TMD_DIR_ENV) {
        return PathBuf::from(dir);
    }
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../tmd")
}
