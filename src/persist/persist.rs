use std::any;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use super::{Format, Result};

/// A container that can save its contents to a file and load them back, in either [`Format`].
///
/// Implementors only provide the stream-level encoders; the file-level methods open the path,
/// buffer the stream and dispatch on the format. Writers are flushed before returning.
///
/// Loading replaces the container's contents. If a load fails part way through, the container
/// may be left holding the records read so far.
pub trait Persist {
    /// Returns the number of records that a save would write.
    fn record_count(&self) -> usize;

    fn write_text(&self, writer: &mut impl Write) -> Result<()>;

    fn read_text(&mut self, reader: &mut impl BufRead) -> Result<()>;

    fn write_binary(&self, writer: &mut impl Write) -> Result<()>;

    fn read_binary(&mut self, reader: &mut impl Read) -> Result<()>;

    fn save_text(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save(path, Format::Text)
    }

    fn load_text(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.load(path, Format::Text)
    }

    fn save_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save(path, Format::Binary)
    }

    fn load_binary(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.load(path, Format::Binary)
    }

    /// Creates or truncates the file at `path` and writes the container to it.
    fn save(&self, path: impl AsRef<Path>, format: Format) -> Result<()> {
        let path = path.as_ref();
        debug!(
            "saving {} records of {} as {format} to {}",
            self.record_count(),
            any::type_name::<Self>(),
            path.display()
        );

        let mut writer = BufWriter::new(File::create(path)?);
        match format {
            Format::Text => self.write_text(&mut writer)?,
            Format::Binary => self.write_binary(&mut writer)?,
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the container's contents with those of the file at `path`.
    fn load(&mut self, path: impl AsRef<Path>, format: Format) -> Result<()> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        match format {
            Format::Text => self.read_text(&mut reader)?,
            Format::Binary => self.read_binary(&mut reader)?,
        }

        debug!(
            "loaded {} records of {} as {format} from {}",
            self.record_count(),
            any::type_name::<Self>(),
            path.display()
        );
        Ok(())
    }
}
