use std::io::Write;

use super::PitchRenderer;
use crate::error::RenderResult;
use crate::scene::PitchScene;

/// Writes the scene as a pretty-printed JSON document
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PitchRenderer for JsonRenderer<W> {
    fn render(&mut self, scene: &PitchScene) -> RenderResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, scene)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
