//! tmd CLI - render Markdown given as arguments or piped on stdin
//!
//! ```text
//! tmd 'some *markdown*'
//! cat file.md | tmd
//! ```

use std::process;

fn main() {
    let status = run();
    process::exit(status);
}

fn run() -> i32 {
    let mut engine = tmd::Backend::from_env().engine();

    match tmd::dispatch(std::env::args_os().skip(1), &mut engine) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("tmd: {err}");
            1
        }
    }
}
