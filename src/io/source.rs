// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Section source trait for record readers.
//!
//! This is the seam between the chunk-scanning engine and the byte-level
//! container: anything that can hand out section envelopes and decode or
//! skip their bodies can back a [`RecordReader`](crate::io::reader::RecordReader).

use crate::core::Result;
use crate::io::record::RecordHeader;
use crate::io::section::Section;

/// Supplier of typed sections from a record stream.
///
/// The source owns one forward cursor. After [`read_section`] returns an
/// envelope, the caller must consume the body exactly once — with
/// [`read_body`] or [`skip_section`] — before asking for the next envelope.
///
/// [`read_section`]: SectionSource::read_section
/// [`read_body`]: SectionSource::read_body
/// [`skip_section`]: SectionSource::skip_section
pub trait SectionSource {
    /// Get the file header. Available before any section reading begins.
    fn header(&self) -> &RecordHeader;

    /// Rewind to the first section after the file header.
    fn reset(&mut self) -> Result<()>;

    /// Read the next section envelope, or `None` at end of stream.
    fn read_section(&mut self) -> Result<Option<Section>>;

    /// Decode the current section's body as the wire record `M`.
    ///
    /// `size` must be the body length from the envelope just returned by
    /// [`read_section`](SectionSource::read_section).
    fn read_body<M: prost::Message + Default>(&mut self, size: u64) -> Result<M>;

    /// Discard the current section's body without decoding it.
    fn skip_section(&mut self, size: u64) -> Result<()>;
}
