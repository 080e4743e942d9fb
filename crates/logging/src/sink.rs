//! crates/logging/src/sink.rs
//! Line-at-a-time writer for [`Record`] values.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::record::Record;

/// Streaming sink that renders [`Record`] values into an [`io::Write`] target.
///
/// Each record is rendered into a scratch buffer first and handed to the
/// writer with a single `write_all` followed by a flush, so a writer whose
/// `write_all` is atomic per call (standard error takes its lock for the whole
/// call) never sees half a line.
///
/// # Examples
///
/// ```
/// use logging::{Record, RecordSink};
///
/// let mut sink = RecordSink::new(Vec::new());
/// sink.write(&Record::new("src/main.rs", 3, "ready", &[]))?;
///
/// assert_eq!(sink.into_inner(), b"[src/main.rs:3] ready\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordSink<W> {
    writer: W,
    scratch: String,
}

impl<W> RecordSink<W> {
    /// Creates a sink around `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: String::new(),
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> RecordSink<W>
where
    W: Write,
{
    /// Renders `record`, appends a newline, writes the line and flushes.
    ///
    /// A value whose `Display` implementation fails surfaces as an
    /// [`io::ErrorKind::Other`] error and nothing is written.
    pub fn write(&mut self, record: &Record<'_>) -> io::Result<()> {
        self.scratch.clear();
        writeln!(self.scratch, "{record}")
            .map_err(|_| io::Error::other("a log field failed to format"))?;
        self.writer.write_all(self.scratch.as_bytes())?;
        self.writer.flush()
    }
}

/// Writes `record` as one line on standard error.
///
/// Best-effort: a closed or failing standard error stream is ignored.
/// This is the function the log macros call once a record passes the
/// compile-time level check.
pub fn emit(record: &Record<'_>) {
    let mut sink = RecordSink::new(io::stderr());
    let _ = sink.write(record);
}
