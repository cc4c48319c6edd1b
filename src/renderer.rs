/// Renderer seam between the table state and whatever paints it
///
/// The state engine never touches presentation. After every interaction it
/// builds a `ViewSnapshot` and hands it to each registered renderer.

use crate::messages::RenderMessage;
use crate::snapshot::ViewSnapshot;
use std::io::Write;

/// Consumer of view snapshots.
pub trait Renderer {
    fn render(&mut self, snapshot: &ViewSnapshot);
}

impl<F> Renderer for F
where
    F: FnMut(&ViewSnapshot),
{
    fn render(&mut self, snapshot: &ViewSnapshot) {
        self(snapshot)
    }
}

/// Writes each snapshot as one JSON line.
///
/// Write failures are logged and counted; they never reach the table state.
pub struct JsonLinesRenderer<W: Write> {
    writer: W,
    failures: usize,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(writer: W) -> Self {
        JsonLinesRenderer { writer, failures: 0 }
    }

    /// Number of snapshots that could not be written.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write any message on the same stream as the snapshots.
    pub fn write_message(&mut self, message: &RenderMessage) {
        let result = serde_json::to_writer(&mut self.writer, message)
            .map_err(std::io::Error::from)
            .and_then(|_| self.writer.write_all(b"\n"))
            .and_then(|_| self.writer.flush());

        if let Err(e) = result {
            self.failures += 1;
            log::error!("failed to write render message: {}", e);
        }
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, snapshot: &ViewSnapshot) {
        self.write_message(&RenderMessage::Snapshot(snapshot.clone()));
    }
}
