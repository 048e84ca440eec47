// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use byteorder::{LittleEndian, WriteBytesExt};
use prost::Message;

use robolog::io::section::{
    SECTION_CHANNEL, SECTION_CHUNK_BODY, SECTION_CHUNK_HEADER, SECTION_HEADER, SECTION_INDEX,
};
use robolog::{
    Channel, ChunkBody, ChunkHeader, RecordFileReader, RecordHeader, RecordListener, Result,
    Section, SectionSource, SingleMessage,
};

// ============================================================================
// Record stream builder
// ============================================================================

/// Builds an in-memory record stream section by section.
///
/// Sections are emitted in the order the builder methods are called,
/// prefixed with a header section carrying the given time bounds.
pub struct RecordFileBuilder {
    header: RecordHeader,
    sections: Vec<u8>,
}

impl RecordFileBuilder {
    /// Start a stream whose header bounds messages to `[begin_time, end_time]`.
    pub fn new(begin_time: u64, end_time: u64) -> Self {
        Self {
            header: RecordHeader {
                major_version: 1,
                minor_version: 0,
                begin_time,
                end_time,
                message_number: 0,
                channel_number: 0,
                chunk_number: 0,
            },
            sections: Vec::new(),
        }
    }

    fn push_section(&mut self, type_id: u32, body: &[u8]) {
        self.sections.write_u32::<LittleEndian>(type_id).unwrap();
        self.sections
            .write_u64::<LittleEndian>(body.len() as u64)
            .unwrap();
        self.sections.extend_from_slice(body);
    }

    /// Append a channel section.
    pub fn channel(mut self, name: &str, message_type: &str, proto_desc: &[u8]) -> Self {
        self.header.channel_number += 1;
        let channel = Channel {
            name: name.to_string(),
            message_type: message_type.to_string(),
            proto_desc: proto_desc.to_vec(),
        };
        self.push_section(SECTION_CHANNEL, &channel.encode_to_vec());
        self
    }

    /// Append a chunk header/body pair holding the given
    /// `(channel_name, time, content)` messages, spanned by their min/max times.
    pub fn chunk(self, messages: &[(&str, u64, &[u8])]) -> Self {
        let begin_time = messages.iter().map(|m| m.1).min().unwrap_or(0);
        let end_time = messages.iter().map(|m| m.1).max().unwrap_or(0);
        self.chunk_with_span(begin_time, end_time, messages)
    }

    /// Append a chunk header/body pair with an explicit header time span.
    pub fn chunk_with_span(
        mut self,
        begin_time: u64,
        end_time: u64,
        messages: &[(&str, u64, &[u8])],
    ) -> Self {
        self.header.chunk_number += 1;
        self.header.message_number += messages.len() as u64;

        let body = ChunkBody {
            messages: messages
                .iter()
                .map(|(channel_name, time, content)| SingleMessage {
                    channel_name: channel_name.to_string(),
                    time: *time,
                    content: content.to_vec(),
                })
                .collect(),
        };
        let chunk_header = ChunkHeader {
            begin_time,
            end_time,
            message_number: messages.len() as u64,
            raw_size: body.encoded_len() as u64,
        };
        self.push_section(SECTION_CHUNK_HEADER, &chunk_header.encode_to_vec());
        self.push_section(SECTION_CHUNK_BODY, &body.encode_to_vec());
        self
    }

    /// Append an index section with an arbitrary payload.
    ///
    /// Sequential readers skip index bodies unread, so the payload bytes
    /// need not decode as anything.
    pub fn index(mut self, payload: &[u8]) -> Self {
        self.push_section(SECTION_INDEX, payload);
        self
    }

    /// Append a section with a raw type id and body, for corruption and
    /// protocol-violation cases.
    pub fn raw_section(mut self, type_id: u32, body: &[u8]) -> Self {
        self.push_section(type_id, body);
        self
    }

    /// Assemble the stream bytes: header section first, then all appended
    /// sections.
    pub fn build(self) -> Cursor<Vec<u8>> {
        let mut buf = Vec::new();
        let header_bytes = self.header.encode_to_vec();
        buf.write_u32::<LittleEndian>(SECTION_HEADER).unwrap();
        buf.write_u64::<LittleEndian>(header_bytes.len() as u64)
            .unwrap();
        buf.extend_from_slice(&header_bytes);
        buf.extend_from_slice(&self.sections);
        Cursor::new(buf)
    }

    /// Assemble the stream and wrap it in a file-backed section source.
    pub fn into_source(self) -> RecordFileReader<Cursor<Vec<u8>>> {
        RecordFileReader::new(self.build()).expect("builder produced an invalid stream")
    }
}

// ============================================================================
// Call-counting section source
// ============================================================================

/// Call counts observed by [`CountingSource`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub reset: usize,
    pub read_section: usize,
    pub read_body: usize,
    pub skip_section: usize,
}

/// Section source decorator that counts every call, for observing how far
/// a reader scans and which bodies it decodes versus skips.
pub struct CountingSource<S> {
    inner: S,
    counts: Arc<Mutex<SourceCounts>>,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> (Self, Arc<Mutex<SourceCounts>>) {
        let counts = Arc::new(Mutex::new(SourceCounts::default()));
        (
            Self {
                inner,
                counts: Arc::clone(&counts),
            },
            counts,
        )
    }
}

impl<S: SectionSource> SectionSource for CountingSource<S> {
    fn header(&self) -> &RecordHeader {
        self.inner.header()
    }

    fn reset(&mut self) -> Result<()> {
        self.counts.lock().unwrap().reset += 1;
        self.inner.reset()
    }

    fn read_section(&mut self) -> Result<Option<Section>> {
        self.counts.lock().unwrap().read_section += 1;
        self.inner.read_section()
    }

    fn read_body<M: prost::Message + Default>(&mut self, size: u64) -> Result<M> {
        self.counts.lock().unwrap().read_body += 1;
        self.inner.read_body(size)
    }

    fn skip_section(&mut self, size: u64) -> Result<()> {
        self.counts.lock().unwrap().skip_section += 1;
        self.inner.skip_section(size)
    }
}

// ============================================================================
// Recording listener
// ============================================================================

/// A discovery event observed by [`RecordingListener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryEvent {
    /// `on_new_channel(name, message_type)`
    Channel(String, String),
    /// `on_new_message(channel_name)`
    Message(String),
}

/// Listener that records every discovery event in order.
#[derive(Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<DiscoveryEvent>>>,
}

impl RecordingListener {
    pub fn new() -> (Self, Arc<Mutex<Vec<DiscoveryEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: Arc::clone(&events),
            },
            events,
        )
    }
}

impl RecordListener for RecordingListener {
    fn on_new_channel(&mut self, name: &str, message_type: &str, _proto_desc: &[u8]) {
        self.events
            .lock()
            .unwrap()
            .push(DiscoveryEvent::Channel(
                name.to_string(),
                message_type.to_string(),
            ));
    }

    fn on_new_message(&mut self, channel_name: &str) {
        self.events
            .lock()
            .unwrap()
            .push(DiscoveryEvent::Message(channel_name.to_string()));
    }
}

/// Collect the channel-discovery events from an event log.
pub fn channel_events(events: &Arc<Mutex<Vec<DiscoveryEvent>>>) -> Vec<String> {
    events
        .lock()
        .unwrap()
        .iter()
        .filter_map(|event| match event {
            DiscoveryEvent::Channel(name, _) => Some(name.clone()),
            DiscoveryEvent::Message(_) => None,
        })
        .collect()
}

/// Collect the message-discovery events from an event log.
pub fn message_events(events: &Arc<Mutex<Vec<DiscoveryEvent>>>) -> Vec<String> {
    events
        .lock()
        .unwrap()
        .iter()
        .filter_map(|event| match event {
            DiscoveryEvent::Message(name) => Some(name.clone()),
            DiscoveryEvent::Channel(..) => None,
        })
        .collect()
}
