// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire records for the record file format.
//!
//! Section bodies are protobuf messages. The structs here are derived with
//! `prost` directly rather than generated from `.proto` files, keeping the
//! crate free of build-time codegen. Field tags are part of the on-disk
//! format and must not change.

/// File-level header record.
///
/// Written once at the start of every record file. `begin_time` and
/// `end_time` bound the timestamps of all messages in the file.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordHeader {
    /// Format major version
    #[prost(uint32, tag = "1")]
    pub major_version: u32,
    /// Format minor version
    #[prost(uint32, tag = "2")]
    pub minor_version: u32,
    /// Earliest message timestamp in the file (nanoseconds)
    #[prost(uint64, tag = "3")]
    pub begin_time: u64,
    /// Latest message timestamp in the file (nanoseconds)
    #[prost(uint64, tag = "4")]
    pub end_time: u64,
    /// Total message count
    #[prost(uint64, tag = "5")]
    pub message_number: u64,
    /// Number of distinct channels
    #[prost(uint64, tag = "6")]
    pub channel_number: u64,
    /// Number of chunks
    #[prost(uint64, tag = "7")]
    pub chunk_number: u64,
}

/// Channel metadata record.
///
/// Channel sections always precede the chunks that reference them, so a
/// sequential reader has seen a channel's metadata before yielding any
/// message on it.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Channel {
    /// Channel name (e.g. "/sensor/imu")
    #[prost(string, tag = "1")]
    pub name: String,
    /// Message type identifier
    #[prost(string, tag = "2")]
    pub message_type: String,
    /// Serialized schema descriptor, passed through opaquely
    #[prost(bytes = "vec", tag = "3")]
    pub proto_desc: Vec<u8>,
}

/// Chunk header record.
///
/// Describes the time span of the chunk body that follows it. Read before
/// the body so a scanner can decide to skip the body bytes entirely.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ChunkHeader {
    /// Earliest message timestamp in the chunk (nanoseconds)
    #[prost(uint64, tag = "1")]
    pub begin_time: u64,
    /// Latest message timestamp in the chunk (nanoseconds)
    #[prost(uint64, tag = "2")]
    pub end_time: u64,
    /// Number of messages in the chunk
    #[prost(uint64, tag = "3")]
    pub message_number: u64,
    /// Uncompressed body size in bytes
    #[prost(uint64, tag = "4")]
    pub raw_size: u64,
}

/// A single timestamped message as stored on disk.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SingleMessage {
    /// Name of the channel this message belongs to
    #[prost(string, tag = "1")]
    pub channel_name: String,
    /// Message timestamp (nanoseconds)
    #[prost(uint64, tag = "2")]
    pub time: u64,
    /// Opaque payload bytes
    #[prost(bytes = "vec", tag = "3")]
    pub content: Vec<u8>,
}

/// Chunk body record: the ordered message payload of one chunk.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ChunkBody {
    /// Messages in file order
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<SingleMessage>,
}
