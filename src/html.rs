//! Built-in HTML engine.
//!
//! Used when no native routine was linked at build time. All Markdown
//! handling is delegated to `pulldown-cmark`; this module only wires the
//! engine contract to a reader and a writer.

use std::io::{self, Read, Write};

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::engine::{Engine, RenderMode, StdinKind};
use crate::error::Result;

/// Shown when the stream is requested from an interactive terminal.
pub const USAGE: &str = "\
# Tiny Markdown

 *usage*

```
  tmd 'some *markdown*'
  cat file.md | tmd
```
";

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// GFM tables.
    pub tables: bool,
    /// `~~strikethrough~~`.
    pub strikethrough: bool,
    /// `- [x]` task list items.
    pub task_lists: bool,
    /// `[^1]` footnotes.
    pub footnotes: bool,
    /// Curly quotes, dashes and ellipses.
    pub smart_punctuation: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            task_lists: true,
            footnotes: false,
            smart_punctuation: false,
        }
    }
}

impl Options {
    fn parser_options(&self) -> pulldown_cmark::Options {
        let mut options = pulldown_cmark::Options::empty();
        options.set(pulldown_cmark::Options::ENABLE_TABLES, self.tables);
        options.set(pulldown_cmark::Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(pulldown_cmark::Options::ENABLE_TASKLISTS, self.task_lists);
        options.set(pulldown_cmark::Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(
            pulldown_cmark::Options::ENABLE_SMART_PUNCTUATION,
            self.smart_punctuation,
        );
        options
    }
}

/// Engine that renders Markdown to HTML.
///
/// # Example
/// ```
/// use tmd::{Engine, HtmlEngine, RenderMode};
///
/// let mut engine = HtmlEngine::new(std::io::empty(), Vec::new());
/// engine.render_buffer(b"hello *world*", RenderMode::Document).unwrap();
/// assert_eq!(engine.into_output(), b"<p>hello <em>world</em></p>\n");
/// ```
pub struct HtmlEngine<R, W> {
    input: R,
    output: W,
    options: Options,
}

impl HtmlEngine<io::Stdin, io::Stdout> {
    /// Engine reading the process's stdin and writing its stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: Read, W: Write> HtmlEngine<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Consume the engine, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn render_text(&mut self, text: &str, mode: RenderMode) -> io::Result<()> {
        // Typical HTML is ~1.25x input size.
        let mut html = String::with_capacity(text.len() + text.len() / 4);
        let events = Parser::new_ext(text, self.options.parser_options())
            .filter(|event| mode == RenderMode::Document || !is_paragraph_edge(event));
        pulldown_cmark::html::push_html(&mut html, events);
        self.output.write_all(html.as_bytes())?;
        self.output.flush()
    }

    fn render_input(&mut self) -> io::Result<()> {
        let mut buffer = Vec::new();
        self.input.read_to_end(&mut buffer)?;
        self.render_text(&String::from_utf8_lossy(&buffer), RenderMode::Document)
    }
}

impl<R: Read, W: Write> Engine for HtmlEngine<R, W> {
    fn render_buffer(&mut self, input: &[u8], mode: RenderMode) -> Result<()> {
        self.render_text(&String::from_utf8_lossy(input), mode)?;
        Ok(())
    }

    fn process_stream(&mut self, stdin: StdinKind) -> i32 {
        let rendered = if stdin.is_interactive() {
            self.render_text(USAGE, RenderMode::Document)
        } else {
            self.render_input()
        };
        match rendered {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("tmd: {err}");
                1
            }
        }
    }
}

#[inline]
fn is_paragraph_edge(event: &Event<'_>) -> bool {
    matches!(event, Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph))
}
