//! Record sink - the consumer half of the pipeline
//!
//! Drains the record channel until it is closed, writing one compact JSON
//! object per line. A record that fails to encode or write is logged and
//! dropped; the sink keeps going.

use crate::record::Record;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tokio::sync::mpsc;

/// Output file whose `flush` also syncs data to disk
///
/// Combined with a flush after every line, a killed process loses at most
/// the record being written.
#[derive(Debug)]
pub struct DurableFile {
    file: File,
}

impl Write for DurableFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.file.sync_data()
    }
}

/// Opens `path` for appending, creating it if needed
///
/// Lines from earlier runs are kept.
pub fn open_output(path: &Path) -> io::Result<DurableFile> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(DurableFile { file })
}

/// Writes records as newline-delimited JSON
#[derive(Debug)]
pub struct SinkWriter<W> {
    writer: W,
}

impl<W: Write> SinkWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes records until the channel is closed
    ///
    /// Blocks the calling thread; run it on a blocking task. Returns the
    /// number of records successfully written.
    pub fn drain(&mut self, mut rx: mpsc::Receiver<Record>) -> u64 {
        let mut written = 0;

        while let Some(record) = rx.blocking_recv() {
            match self.write_record(&record) {
                Ok(()) => written += 1,
                Err(e) => {
                    tracing::error!("write err, {:?}: {}", record, e);
                }
            }
        }

        tracing::info!("write end, written: {}", written);
        written
    }

    /// Writes a single record as one line and flushes it
    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        self.writer.write_all(&line)?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
