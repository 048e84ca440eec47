// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Robolog
//!
//! Sequential reader for chunked, time-ordered robotics record files.
//!
//! A record file is a flat sequence of typed sections: a file header,
//! channel metadata, and chunks of timestamped messages split into a
//! header/body section pair. The chunk header carries the body's time span,
//! so a reader can skip entire chunk bodies that cannot overlap a requested
//! time window without decoding them, and stop scanning outright once a
//! header proves the window can no longer be satisfied.
//!
//! ## Architecture
//!
//! - [`io::section`] - Section framing types (envelope, type ids)
//! - [`io::record`] - Wire records for section payloads
//! - [`io::source`] - The [`SectionSource`] seam between scanning and byte I/O
//! - [`io::file_reader`] - File-backed section source
//! - [`io::reader`] - The sequential reader: chunk scanning, time-window
//!   pruning, per-message filtering, channel discovery
//!
//! ## Example: reading a time window
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::collections::HashSet;
//! use robolog::{RecordFileReader, RecordReader};
//!
//! let source = RecordFileReader::open("drive.record")?;
//! let mut channels = HashSet::new();
//! channels.insert("/sensor/imu".to_string());
//!
//! let mut reader = RecordReader::new(source, 1_000_000, 2_000_000, channels)?;
//! while let Some(message) = reader.read_message() {
//!     println!("{} @ {}: {} bytes", message.channel_name, message.time, message.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: observing channel discovery
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use robolog::{ChannelFilter, RecordFileReader, RecordListener, RecordReader};
//!
//! #[derive(Default)]
//! struct ChannelLogger;
//!
//! impl RecordListener for ChannelLogger {
//!     fn on_new_channel(&mut self, name: &str, message_type: &str, _proto_desc: &[u8]) {
//!         println!("discovered {name} ({message_type})");
//!     }
//! }
//!
//! let source = RecordFileReader::open("drive.record")?;
//! let reader = RecordReader::with_listener(
//!     source,
//!     0,
//!     u64::MAX,
//!     ChannelFilter::All,
//!     Box::new(ChannelLogger),
//! )?;
//! for message in reader {
//!     // ...
//! }
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{RecordError, Result};

// I/O types (sections, sources, reader)
pub mod io;

// Re-export key I/O types
pub use io::{
    Channel, ChannelFilter, ChannelInfo, ChunkBody, ChunkHeader, NoopListener, RecordFileReader,
    RecordHeader, RecordListener, RecordMessage, RecordReader, Section, SectionSource, SectionType,
    SingleMessage,
};
