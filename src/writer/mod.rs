use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Buffered writer over the output file.
///
/// The file is truncated on creation, so a rerun never leaves lines from a
/// previous run behind.
pub struct OutputWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    bytes_written: u64,
}

impl OutputWriter {
    pub fn create(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::with_capacity(WRITER_BUFFER_SIZE, file);

        Ok(Self {
            path: path.to_path_buf(),
            writer,
            bytes_written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_text(&mut self, text: &str) -> std::io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.bytes_written += text.len() as u64;
        Ok(())
    }

    pub fn write_statement(&mut self, stmt: &str) -> std::io::Result<()> {
        self.write_text(stmt)?;
        self.writer.write_all(b"\n")?;
        self.bytes_written += 1;
        Ok(())
    }

    /// Flush and close. Returns the number of bytes written.
    pub fn finish(mut self) -> std::io::Result<u64> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        Ok(self.bytes_written)
    }
}

/// Write `text` verbatim to `path`, replacing any existing file
pub fn write_output(path: &Path, text: &str) -> anyhow::Result<u64> {
    let mut writer = OutputWriter::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    writer
        .write_text(text)
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    writer
        .finish()
        .with_context(|| format!("failed to write output file {}", path.display()))
}
