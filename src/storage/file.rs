//! Inventory File
//!
//! Handles reading, appending to, and rewriting the backing text file.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::config::SyncStrategy;
use crate::error::Result;
use crate::record::Shoe;

use super::codec::{encode_record, HEADER_FIELDS};

/// Handle on the backing inventory file
///
/// Holds only the path; every operation opens the file, does its work,
/// and closes it again before returning.
#[derive(Debug, Clone)]
pub struct InventoryFile {
    path: PathBuf,
    sync_strategy: SyncStrategy,
}

impl InventoryFile {
    pub fn new(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Self {
        Self {
            path: path.into(),
            sync_strategy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file for reading
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn open_reader(&self) -> Result<Option<InventoryReader>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(InventoryReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Create (or truncate) the file so it holds only the header line
    pub fn create(&self) -> Result<()> {
        self.rewrite(&[])
    }

    /// Append one record line
    ///
    /// Writes the header first if the file is missing or empty, and a line
    /// terminator first if the last line was left unterminated.
    pub fn append(&self, shoe: &Shoe) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        let needs_header = file.metadata()?.len() == 0;
        if !needs_header && !Self::ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        {
            let mut writer = Self::record_writer(&mut file);
            if needs_header {
                writer.write_record(HEADER_FIELDS)?;
            }
            writer.write_record(&encode_record(shoe))?;
            writer.flush()?;
        }
        self.finish(&mut file)?;

        tracing::debug!("Appended record {} to {}", shoe.code(), self.path.display());
        Ok(())
    }

    /// Rewrite the whole file: header followed by every record in order
    pub fn rewrite(&self, shoes: &[Shoe]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;

        let mut writer = Self::record_writer(file);
        writer.write_record(HEADER_FIELDS)?;
        for shoe in shoes {
            writer.write_record(&encode_record(shoe))?;
        }
        writer.flush()?;

        let mut file = writer.into_inner().map_err(|e| e.into_error())?;
        self.finish(&mut file)?;

        tracing::debug!(
            "Rewrote {} with {} records",
            self.path.display(),
            shoes.len()
        );
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Unquoted, `\n`-terminated record writer matching the file format
    fn record_writer<W: Write>(inner: W) -> csv::Writer<W> {
        WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(inner)
    }

    /// Apply the configured sync strategy after a write
    fn finish(&self, file: &mut File) -> Result<()> {
        file.flush()?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }
        Ok(())
    }

    /// Check whether a non-empty file's last byte is `\n`
    fn ends_with_newline(file: &mut File) -> Result<bool> {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }
}

/// Reads the backing file record by record
///
/// Call `read_header` once, then iterate (or call `next_record`) to get the
/// remaining non-blank records with their 1-based line numbers. Fields are
/// trimmed and never unquoted.
pub struct InventoryReader {
    reader: csv::Reader<File>,
    record: ByteRecord,
}

impl InventoryReader {
    fn new(file: File) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(file);

        Self {
            reader,
            record: ByteRecord::new(),
        }
    }

    /// Read the header record
    ///
    /// Returns `Ok(None)` if the file is empty.
    pub fn read_header(&mut self) -> Result<Option<StringRecord>> {
        let headers = self.reader.byte_headers()?;
        if headers.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self::to_string_record(headers.clone(), 1)?))
    }

    /// Read the next record that has at least one non-empty field
    ///
    /// Non-UTF-8 content is reported as an `InvalidData` I/O error.
    pub fn next_record(&mut self) -> Result<Option<(u64, StringRecord)>> {
        loop {
            if !self.reader.read_byte_record(&mut self.record)? {
                return Ok(None);
            }
            if self.record.iter().all(|field| field.is_empty()) {
                continue;
            }

            let line = self.record.position().map_or(0, |pos| pos.line());
            let record = Self::to_string_record(self.record.clone(), line)?;
            return Ok(Some((line, record)));
        }
    }

    fn to_string_record(record: ByteRecord, line: u64) -> Result<StringRecord> {
        StringRecord::from_byte_record(record).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", line, e.utf8_error()),
            )
            .into()
        })
    }
}

impl Iterator for InventoryReader {
    type Item = Result<(u64, StringRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
