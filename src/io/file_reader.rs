// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! File-backed section source.
//!
//! `RecordFileReader` performs the byte-level work of the record format:
//! envelope framing, exact-size body reads with protobuf decoding, and
//! seek-based body skipping. Every record file begins with a header
//! section; `new` validates it and leaves the cursor at the first data
//! section.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::core::{RecordError, Result};
use crate::io::record::RecordHeader;
use crate::io::section::{Section, SectionType};
use crate::io::source::SectionSource;

/// Section source over any `Read + Seek` byte stream.
pub struct RecordFileReader<R> {
    /// Underlying byte stream
    reader: R,
    /// File header, read once at construction
    header: RecordHeader,
}

impl RecordFileReader<BufReader<File>> {
    /// Open a record file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|e| {
            RecordError::io(format!(
                "Failed to open {}: {e}",
                path_ref.to_string_lossy()
            ))
        })?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> RecordFileReader<R> {
    /// Create a section source from a byte stream positioned at offset 0.
    ///
    /// Reads the leading header section and leaves the cursor at the first
    /// data section.
    pub fn new(reader: R) -> Result<Self> {
        let mut file_reader = Self {
            reader,
            header: RecordHeader::default(),
        };
        file_reader.reader.seek(SeekFrom::Start(0))?;
        file_reader.header = file_reader.read_header_section()?;
        Ok(file_reader)
    }

    /// Read the header section that opens every record file.
    fn read_header_section(&mut self) -> Result<RecordHeader> {
        let section = self
            .read_section()?
            .ok_or_else(|| RecordError::framing(0, "missing header section"))?;
        if section.section_type != SectionType::Header {
            return Err(RecordError::unexpected_section(
                section.section_type.to_string(),
            ));
        }
        self.read_body::<RecordHeader>(section.size)
    }

    /// Get the current byte position, for error context.
    fn position(&mut self) -> u64 {
        self.reader.stream_position().unwrap_or(0)
    }
}

impl<R: Read + Seek> SectionSource for RecordFileReader<R> {
    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        // Skip over the leading header section to the first data section.
        let section = self
            .read_section()?
            .ok_or_else(|| RecordError::framing(0, "missing header section"))?;
        if section.section_type != SectionType::Header {
            return Err(RecordError::unexpected_section(
                section.section_type.to_string(),
            ));
        }
        self.skip_section(section.size)
    }

    fn read_section(&mut self) -> Result<Option<Section>> {
        let position = self.position();

        // End of stream inside the type field is a clean end of stream.
        let type_id = match self.reader.read_u32::<LittleEndian>() {
            Ok(type_id) => type_id,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let size = self.reader.read_u64::<LittleEndian>().map_err(|e| {
            RecordError::framing(position, format!("truncated section envelope: {e}"))
        })?;

        let section_type = SectionType::from_type_id(type_id)
            .ok_or_else(|| RecordError::unknown_section(type_id, position))?;

        Ok(Some(Section { section_type, size }))
    }

    fn read_body<M: prost::Message + Default>(&mut self, size: u64) -> Result<M> {
        let position = self.position();
        let mut buf = vec![0u8; size as usize];
        self.reader.read_exact(&mut buf).map_err(|e| {
            RecordError::framing(position, format!("truncated section body: {e}"))
        })?;

        M::decode(buf.as_slice())
            .map_err(|e| RecordError::section_decode(wire_record_name::<M>(), e.to_string()))
    }

    fn skip_section(&mut self, size: u64) -> Result<()> {
        self.reader.seek(SeekFrom::Current(size as i64))?;
        Ok(())
    }
}

/// Short name of a wire record type, for error context.
fn wire_record_name<M>() -> &'static str {
    std::any::type_name::<M>().rsplit("::").next().unwrap_or("?")
}
