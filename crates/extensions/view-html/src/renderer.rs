//! HTML renderer.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use switcher_protocols::{RenderError, Renderer, View};

use crate::markup::to_markup;

/// Renderer keeping the latest widget markup.
///
/// Each render can also be mirrored to a file (rewritten every time) and
/// streamed to a writer.
#[derive(Default)]
pub struct HtmlRenderer {
    output: Option<PathBuf>,
    writer: Option<Box<dyn Write>>,
    markup: String,
    renders: usize,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite `path` with the markup on every render.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Also write the markup of every render to `writer`.
    pub fn with_writer(mut self, writer: impl Write + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Markup of the latest render.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of renders so far.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Renderer for HtmlRenderer {
    fn id(&self) -> &str {
        "html"
    }

    fn render(&mut self, view: &View) -> Result<(), RenderError> {
        self.markup = to_markup(view);
        self.renders += 1;

        if let Some(path) = &self.output {
            fs::write(path, &self.markup)?;
            debug!("Wrote widget markup to {:?}", path);
        }

        if let Some(writer) = self.writer.as_mut() {
            writer.write_all(self.markup.as_bytes())?;
            writer.flush()?;
        }

        Ok(())
    }
}
