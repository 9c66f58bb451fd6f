//! `tracing` output as one line per event, handed to a sink.
//!
//! The browser build points the sink at the devtools console; tests point it
//! at a buffer.

use std::io;

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Builds a subscriber that formats each event without timestamps or colour
/// and passes it to `emit` along with its level.
pub fn subscriber<F>(emit: F, max_level: Level) -> impl Subscriber + Send + Sync + 'static
where
    F: Fn(Level, &str) + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(LineSink { emit })
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .finish()
}

struct LineSink<F> {
    emit: F,
}

impl<'a, F> MakeWriter<'a> for LineSink<F>
where
    F: Fn(Level, &str) + 'a,
{
    type Writer = LineWriter<'a, F>;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter::new(&self.emit, Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter::new(&self.emit, *meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
struct LineWriter<'a, F: Fn(Level, &str)> {
    emit: &'a F,
    level: Level,
    buf: Vec<u8>,
}

impl<'a, F: Fn(Level, &str)> LineWriter<'a, F> {
    fn new(emit: &'a F, level: Level) -> Self {
        Self {
            emit,
            level,
            buf: Vec::new(),
        }
    }
}

impl<F: Fn(Level, &str)> io::Write for LineWriter<'_, F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<F: Fn(Level, &str)> Drop for LineWriter<'_, F> {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            (self.emit)(self.level, line);
        }
    }
}
