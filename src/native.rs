//! Binding to the native `tmd.c` routine.
//!
//! Only compiled when `build.rs` found the C source (see `TMD_DIR`). The C
//! program writes straight to the process's stdout through its own stdio
//! buffers, which are flushed when the process exits.

use std::ffi::{c_char, c_int};
use std::ptr;

use crate::engine::{Engine, RenderMode, StdinKind};
use crate::error::{Error, Result};

unsafe extern "C" {
    fn markdown(length: c_int, buffer: *const c_char, nested: c_int);

    /// The C program's `main`, renamed at compile time.
    fn tmd_main(argc: c_int, argv: *const *const c_char) -> c_int;
}

/// Engine backed by the linked C routine.
#[derive(Debug, Default)]
pub struct NativeEngine {
    _private: (),
}

impl NativeEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Length as the C routine takes it.
fn c_length(len: usize) -> Result<c_int> {
    c_int::try_from(len).map_err(|_| Error::InputTooLarge(len))
}

/// Copy of `input` with a NUL past its last byte.
fn nul_terminated(input: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(input.len() + 1);
    buffer.extend_from_slice(input);
    buffer.push(0);
    buffer
}

impl Engine for NativeEngine {
    fn render_buffer(&mut self, input: &[u8], mode: RenderMode) -> Result<()> {
        let length = c_length(input.len())?;
        let buffer = nul_terminated(input);

        // SAFETY: `buffer` holds `length` bytes plus a NUL and outlives the
        // call; the routine only reads from it.
        unsafe { markdown(length, buffer.as_ptr() as *const c_char, mode.as_raw()) };
        Ok(())
    }

    fn process_stream(&mut self, stdin: StdinKind) -> i32 {
        // SAFETY: with argc 0 or 1 the routine never dereferences argv.
        unsafe { tmd_main(stdin.flag(), ptr::null()) }
    }
}
