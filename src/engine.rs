//! The boundary between the dispatcher and whatever renders the text.
//!
//! An engine owns all output: the dispatcher hands it either a buffer or the
//! standard input's kind and never writes anything itself.

use std::io::{self, IsTerminal};

use crate::error::Result;

/// How the engine should treat a buffer passed to [`Engine::render_buffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// A complete document, block constructs included.
    #[default]
    Document,
    /// Content embedded in another construct: inline markup only.
    Nested,
}

impl RenderMode {
    /// Value passed across the C boundary.
    #[inline]
    pub const fn as_raw(self) -> i32 {
        match self {
            RenderMode::Document => 0,
            RenderMode::Nested => 1,
        }
    }
}

/// Whether standard input is attached to a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinKind {
    /// An interactive terminal: nothing to read yet.
    Terminal,
    /// A pipe, file or closed stream.
    Redirected,
}

impl StdinKind {
    /// Inspect the process's standard input.
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            StdinKind::Terminal
        } else {
            StdinKind::Redirected
        }
    }

    /// Flag handed to the stream entry point: 0 for a terminal, 1 otherwise.
    #[inline]
    pub const fn flag(self) -> i32 {
        match self {
            StdinKind::Terminal => 0,
            StdinKind::Redirected => 1,
        }
    }

    /// Whether a person is typing at the other end.
    #[inline]
    pub const fn is_interactive(self) -> bool {
        matches!(self, StdinKind::Terminal)
    }
}

/// A text-to-markup conversion engine.
pub trait Engine {
    /// Render an explicit byte buffer to the engine's output.
    fn render_buffer(&mut self, input: &[u8], mode: RenderMode) -> Result<()>;

    /// Read the engine's own default input and render it.
    ///
    /// Returns the process exit status.
    fn process_stream(&mut self, stdin: StdinKind) -> i32;
}

impl<E: Engine + ?Sized> Engine for &mut E {
    fn render_buffer(&mut self, input: &[u8], mode: RenderMode) -> Result<()> {
        (**self).render_buffer(input, mode)
    }

    fn process_stream(&mut self, stdin: StdinKind) -> i32 {
        (**self).process_stream(stdin)
    }
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn render_buffer(&mut self, input: &[u8], mode: RenderMode) -> Result<()> {
        (**self).render_buffer(input, mode)
    }

    fn process_stream(&mut self, stdin: StdinKind) -> i32 {
        (**self).process_stream(stdin)
    }
}
