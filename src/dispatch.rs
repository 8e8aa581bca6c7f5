//! Invocation dispatcher.
//!
//! One process makes one decision: if there are arguments, they are joined
//! with single spaces and rendered as a buffer; otherwise the engine is told
//! what kind of standard input it has and reads it itself.

use std::ffi::OsString;

use crate::engine::{Engine, RenderMode, StdinKind};
use crate::error::Result;

/// The single engine call a process makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Render the joined arguments.
    Render(Vec<u8>),
    /// Let the engine read its default stream.
    Stream(StdinKind),
}

impl Invocation {
    /// Decide the invocation from the argument list (program name excluded).
    ///
    /// `detect_stdin` is only called when there are no arguments.
    pub fn from_args<I, F>(args: I, detect_stdin: F) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
        F: FnOnce() -> StdinKind,
    {
        match join_args(args) {
            Some(buffer) => Invocation::Render(buffer),
            None => Invocation::Stream(detect_stdin()),
        }
    }

    /// Make the engine call and return the process exit status.
    ///
    /// Direct rendering carries no status of its own and yields 0.
    pub fn run<E: Engine + ?Sized>(self, engine: &mut E) -> Result<i32> {
        match self {
            Invocation::Render(buffer) => {
                #[cfg(feature = "trace")]
                eprintln!("tmd: render {} bytes", buffer.len());
                engine.render_buffer(&buffer, RenderMode::Document)?;
                Ok(0)
            }
            Invocation::Stream(stdin) => {
                #[cfg(feature = "trace")]
                eprintln!("tmd: stream {:?} (flag {})", stdin, stdin.flag());
                Ok(engine.process_stream(stdin))
            }
        }
    }
}

/// Join arguments with single spaces into one byte buffer.
///
/// Returns `None` when there are no arguments at all. Arguments keep their
/// OS encoding, so nothing is lost on non-UTF-8 input.
pub fn join_args<I>(args: I) -> Option<Vec<u8>>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter();
    let mut buffer = args.next()?.into().into_encoded_bytes();
    for arg in args {
        buffer.push(b' ');
        buffer.extend_from_slice(&arg.into().into_encoded_bytes());
    }
    Some(buffer)
}

/// Dispatch a process invocation to `engine`.
///
/// This is [`Invocation::from_args`] with real terminal detection followed by
/// [`Invocation::run`].
pub fn dispatch<I, E>(args: I, engine: &mut E) -> Result<i32>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    E: Engine + ?Sized,
{
    Invocation::from_args(args, StdinKind::detect).run(engine)
}
