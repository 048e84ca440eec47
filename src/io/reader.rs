// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Sequential record reader with time-window and channel filtering.
//!
//! `RecordReader` is a forward-only, single-pass cursor over a record
//! stream. It pulls sections from a [`SectionSource`], prunes chunks that
//! cannot overlap the requested time window using their headers alone, and
//! yields individual messages filtered by time range and channel set, in
//! file order.
//!
//! Exactly one chunk body is held at a time; loading the next chunk
//! replaces the previous one wholesale. This is a streaming cursor, not a
//! cache.

use std::collections::{HashMap, HashSet};
use std::mem;

use tracing::{debug, error};

use crate::core::{RecordError, Result};
use crate::io::filter::ChannelFilter;
use crate::io::listener::{NoopListener, RecordListener};
use crate::io::metadata::{ChannelInfo, RecordMessage};
use crate::io::record::{Channel, ChunkBody, ChunkHeader, RecordHeader};
use crate::io::section::SectionType;
use crate::io::source::SectionSource;

/// Sequential reader over a record section stream.
///
/// Construct with a time window and channel set, then pull messages with
/// [`read_message`](RecordReader::read_message) or through the [`Iterator`]
/// impl. A fatal stream error (corrupt section, protocol violation) ends
/// iteration; the caller sees ordinary exhaustion and can inspect
/// [`last_error`](RecordReader::last_error) to tell the two apart.
pub struct RecordReader<S> {
    /// Underlying section source
    source: S,
    /// Effective window start, clamped to the file header bounds
    begin_time: u64,
    /// Effective window end, clamped to the file header bounds
    end_time: u64,
    /// Channel selection
    filter: ChannelFilter,
    /// Discovery hooks
    listener: Box<dyn RecordListener + Send>,
    /// Channel metadata discovered so far, by name
    channels: HashMap<String, ChannelInfo>,
    /// Channel names in file order of first appearance
    channel_order: Vec<String>,
    /// Messages of the currently loaded chunk
    chunk: ChunkBody,
    /// Cursor into the current chunk's messages
    index: usize,
    /// Set once the stream is exhausted or a fatal error occurred
    exhausted: bool,
    /// Fatal error that ended iteration, if any
    error: Option<RecordError>,
}

impl<S: SectionSource> RecordReader<S> {
    /// Create a reader over `source` for the window `[begin_time, end_time]`.
    ///
    /// An empty `channels` set selects all channels. The requested window is
    /// clamped to the file header's time bounds; a window that is inverted
    /// after clamping is logged and yields no messages rather than failing.
    pub fn new(
        source: S,
        begin_time: u64,
        end_time: u64,
        channels: HashSet<String>,
    ) -> Result<Self> {
        Self::with_listener(
            source,
            begin_time,
            end_time,
            ChannelFilter::from(channels),
            Box::new(NoopListener),
        )
    }

    /// Create a reader with an explicit filter and discovery listener.
    pub fn with_listener(
        mut source: S,
        begin_time: u64,
        end_time: u64,
        filter: ChannelFilter,
        listener: Box<dyn RecordListener + Send>,
    ) -> Result<Self> {
        let header = source.header().clone();
        source.reset()?;

        let begin_time = begin_time.max(header.begin_time);
        let end_time = end_time.min(header.end_time);
        if begin_time > end_time {
            error!(
                context = "RecordReader",
                begin_time, end_time, "begin time must be earlier than end time"
            );
        }

        Ok(Self {
            source,
            begin_time,
            end_time,
            filter,
            listener,
            channels: HashMap::new(),
            channel_order: Vec::new(),
            chunk: ChunkBody::default(),
            index: 0,
            exhausted: false,
            error: None,
        })
    }

    /// Read the next message matching the time window and channel filter.
    ///
    /// Returns `None` at end of stream, once the window is provably
    /// unsatisfiable, or after a fatal stream error.
    pub fn read_message(&mut self) -> Option<RecordMessage> {
        if self.exhausted {
            return None;
        }

        // Explicit retry loop across chunks: a file may contain an
        // arbitrarily long run of chunks with no matching messages.
        loop {
            while self.index < self.chunk.messages.len() {
                let idx = self.index;
                self.index += 1;

                let time = self.chunk.messages[idx].time;
                if time > self.end_time {
                    // Messages are time-ordered in the file; nothing later
                    // can fall back inside the window.
                    self.exhausted = true;
                    return None;
                }
                if time < self.begin_time {
                    continue;
                }
                if !self
                    .filter
                    .should_include(&self.chunk.messages[idx].channel_name)
                {
                    continue;
                }

                // The cursor never revisits this slot, so move the data out.
                let message = &mut self.chunk.messages[idx];
                let channel_name = mem::take(&mut message.channel_name);
                let content = mem::take(&mut message.content);
                self.note_message(&channel_name);
                return Some(RecordMessage {
                    channel_name,
                    content,
                    time,
                });
            }

            match self.read_next_chunk() {
                Ok(true) => self.index = 0,
                Ok(false) => {
                    self.exhausted = true;
                    return None;
                }
                Err(e) => {
                    error!(
                        context = "RecordReader",
                        error = %e,
                        "section stream unusable, stopping iteration"
                    );
                    self.exhausted = true;
                    self.error = Some(e);
                    return None;
                }
            }
        }
    }

    /// Advance the section source until an in-window chunk body is loaded.
    ///
    /// Returns `Ok(false)` on ordinary exhaustion: the source ran out of
    /// sections, or a chunk header proved the window can no longer be
    /// satisfied. Exactly one chunk is loaded per `Ok(true)`.
    fn read_next_chunk(&mut self) -> Result<bool> {
        let mut skip_next_chunk_body = false;
        while let Some(section) = self.source.read_section()? {
            match section.section_type {
                SectionType::Index => {
                    // The index serves random access; sequential scanning
                    // has no use for it.
                    self.source.skip_section(section.size)?;
                }
                SectionType::Channel => {
                    debug!(size = section.size, "read channel section");
                    let channel: Channel = self.source.read_body(section.size)?;
                    self.note_channel(channel);
                }
                SectionType::ChunkHeader => {
                    debug!(size = section.size, "read chunk header section");
                    let chunk_header: ChunkHeader = self.source.read_body(section.size)?;
                    if self.begin_time > chunk_header.end_time {
                        // Chunks are strictly time-ordered in the file: no
                        // remaining chunk can satisfy the window.
                        return Ok(false);
                    }
                    if self.end_time < chunk_header.begin_time {
                        skip_next_chunk_body = true;
                    }
                }
                SectionType::ChunkBody => {
                    if skip_next_chunk_body {
                        self.source.skip_section(section.size)?;
                        skip_next_chunk_body = false;
                        continue;
                    }
                    self.chunk = self.source.read_body(section.size)?;
                    return Ok(true);
                }
                SectionType::Header => {
                    return Err(RecordError::unexpected_section(
                        section.section_type.to_string(),
                    ));
                }
            }
        }
        Ok(false)
    }

    /// Register channel metadata on first appearance.
    fn note_channel(&mut self, channel: Channel) {
        if self.channels.contains_key(&channel.name) {
            return;
        }
        self.listener
            .on_new_channel(&channel.name, &channel.message_type, &channel.proto_desc);
        self.channel_order.push(channel.name.clone());
        self.channels.insert(
            channel.name.clone(),
            ChannelInfo {
                name: channel.name,
                message_type: channel.message_type,
                proto_desc: channel.proto_desc,
                message_count: 0,
            },
        );
    }

    /// Record a yielded message against its channel and fire the hook.
    fn note_message(&mut self, channel_name: &str) {
        if let Some(info) = self.channels.get_mut(channel_name) {
            info.message_count += 1;
        }
        self.listener.on_new_message(channel_name);
    }

    /// Get the file header.
    pub fn header(&self) -> &RecordHeader {
        self.source.header()
    }

    /// Get the effective window start after clamping.
    pub fn begin_time(&self) -> u64 {
        self.begin_time
    }

    /// Get the effective window end after clamping.
    pub fn end_time(&self) -> u64 {
        self.end_time
    }

    /// Get metadata for all channels discovered so far.
    ///
    /// Discovery is lazy: a channel appearing late in the file is unknown
    /// until its section has been scanned past.
    pub fn channels(&self) -> &HashMap<String, ChannelInfo> {
        &self.channels
    }

    /// Get discovered channel names in file order of first appearance.
    pub fn channel_names(&self) -> &[String] {
        &self.channel_order
    }

    /// Get the message type of a discovered channel.
    pub fn message_type(&self, channel_name: &str) -> Option<&str> {
        self.channels
            .get(channel_name)
            .map(|info| info.message_type.as_str())
    }

    /// Get the schema descriptor of a discovered channel.
    pub fn proto_desc(&self, channel_name: &str) -> Option<&[u8]> {
        self.channels
            .get(channel_name)
            .map(|info| info.proto_desc.as_slice())
    }

    /// Get the number of messages yielded so far on a channel.
    ///
    /// Returns 0 for channels not yet discovered.
    pub fn message_number(&self, channel_name: &str) -> u64 {
        self.channels
            .get(channel_name)
            .map(|info| info.message_count)
            .unwrap_or(0)
    }

    /// Check if the reader has reached its terminal state.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Get the fatal error that ended iteration, if any.
    ///
    /// The public iteration contract collapses fatal stream errors to
    /// ordinary exhaustion; this is the distinguishable signal.
    pub fn last_error(&self) -> Option<&RecordError> {
        self.error.as_ref()
    }
}

impl<S: SectionSource> Iterator for RecordReader<S> {
    type Item = RecordMessage;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_message()
    }
}
