//! JSON renderer: one serialized view per line.

use std::io::Write;

use switcher_protocols::{RenderError, Renderer, View};

pub(crate) struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn id(&self) -> &str {
        "json"
    }

    fn render(&mut self, view: &View) -> Result<(), RenderError> {
        let line =
            serde_json::to_string(view).map_err(|e| RenderError::Custom(e.to_string()))?;
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}
