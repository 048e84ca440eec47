// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Shared metadata types for record file reading.

/// Information about a channel discovered in a record file.
///
/// A channel is a named, typed stream of messages (e.g. one sensor's data
/// stream). Metadata is discovered lazily as channel sections are scanned
/// and does not change within a file once seen.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInfo {
    /// Channel name (e.g. "/sensor/imu")
    pub name: String,
    /// Message type identifier
    pub message_type: String,
    /// Serialized schema descriptor, opaque to this crate
    pub proto_desc: Vec<u8>,
    /// Number of messages yielded on this channel by the owning reader
    pub message_count: u64,
}

impl ChannelInfo {
    /// Create a new ChannelInfo.
    pub fn new(name: impl Into<String>, message_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message_type: message_type.into(),
            proto_desc: Vec::new(),
            message_count: 0,
        }
    }

    /// Set the schema descriptor.
    pub fn with_proto_desc(mut self, proto_desc: Vec<u8>) -> Self {
        self.proto_desc = proto_desc;
        self
    }

    /// Set the message count.
    pub fn with_message_count(mut self, count: u64) -> Self {
        self.message_count = count;
        self
    }
}

/// A message read from a record file.
///
/// Ownership transfers to the caller on each successful read.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMessage {
    /// Name of the channel this message belongs to
    pub channel_name: String,
    /// Opaque payload bytes
    pub content: Vec<u8>,
    /// Message timestamp (nanoseconds)
    pub time: u64,
}

impl RecordMessage {
    /// Create a new RecordMessage.
    pub fn new(channel_name: impl Into<String>, content: Vec<u8>, time: u64) -> Self {
        Self {
            channel_name: channel_name.into(),
            content,
            time,
        }
    }

    /// Get the payload length.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the message has no payload.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
