//! tmd: Tiny Markdown command-line front end
//!
//! Forwards text to a Markdown engine and lets the engine write the result.
//! The crate itself does no parsing: it decides between two calls and makes
//! exactly one of them.
//!
//! - With arguments, they are joined by single spaces and passed to
//!   [`Engine::render_buffer`].
//! - Without arguments, [`Engine::process_stream`] is told whether stdin is a
//!   terminal and reads it itself; its return value is the exit status.
//!
//! # Engines
//! - [`HtmlEngine`]: built in, renders HTML through `pulldown-cmark`
//! - `NativeEngine`: the `tmd.c` routine, linked when `build.rs` finds its
//!   source in `TMD_DIR` (or `../tmd`)
//!
//! # Example
//! ```
//! use tmd::{HtmlEngine, Invocation, StdinKind};
//!
//! let mut engine = HtmlEngine::new(std::io::empty(), Vec::new());
//! let status = Invocation::from_args(["# Hello"], StdinKind::detect)
//!     .run(&mut engine)
//!     .unwrap();
//! assert_eq!(status, 0);
//! assert_eq!(engine.into_output(), b"<h1>Hello</h1>\n");
//! ```

pub mod backend;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod html;
#[cfg(tmd_native)]
pub mod native;

// Re-export primary types
pub use backend::Backend;
pub use dispatch::{Invocation, dispatch, join_args};
pub use engine::{Engine, RenderMode, StdinKind};
pub use error::{Error, Result};
pub use html::{HtmlEngine, Options};
#[cfg(tmd_native)]
pub use native::NativeEngine;
