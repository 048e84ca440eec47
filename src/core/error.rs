// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for robolog.
//!
//! Provides error types for record file operations:
//! - Section framing and envelope parsing
//! - Section body decoding
//! - Protocol-level stream violations
//! - Underlying I/O failures

use std::fmt;

/// Errors that can occur while reading a record file.
///
/// All variants are fatal for the stream that produced them: section
/// framing integrity cannot be assumed once a decode fails, so readers do
/// not resynchronize past a failed section.
#[derive(Debug, Clone)]
pub enum RecordError {
    /// A section body failed to decode
    SectionDecode {
        /// Section payload type that failed (e.g. "Channel", "ChunkBody")
        section: String,
        /// Error message
        message: String,
    },

    /// Section type id not defined by the format
    UnknownSection {
        /// Raw type id read from the envelope
        type_id: u32,
        /// Byte position of the envelope
        position: u64,
    },

    /// A known section type appeared where the format does not allow it
    UnexpectedSection {
        /// Section that was encountered
        section: String,
    },

    /// Truncated or malformed section framing
    Framing {
        /// Byte position where framing broke
        position: u64,
        /// Error message
        message: String,
    },

    /// Underlying I/O failure
    Io {
        /// Error message
        message: String,
    },
}

impl RecordError {
    /// Create a section decode error.
    pub fn section_decode(section: impl Into<String>, message: impl Into<String>) -> Self {
        RecordError::SectionDecode {
            section: section.into(),
            message: message.into(),
        }
    }

    /// Create an unknown section type error.
    pub fn unknown_section(type_id: u32, position: u64) -> Self {
        RecordError::UnknownSection { type_id, position }
    }

    /// Create an unexpected section error.
    pub fn unexpected_section(section: impl Into<String>) -> Self {
        RecordError::UnexpectedSection {
            section: section.into(),
        }
    }

    /// Create a framing error.
    pub fn framing(position: u64, message: impl Into<String>) -> Self {
        RecordError::Framing {
            position,
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        RecordError::Io {
            message: message.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            RecordError::SectionDecode { section, message } => {
                vec![("section", section.clone()), ("message", message.clone())]
            }
            RecordError::UnknownSection { type_id, position } => vec![
                ("type_id", type_id.to_string()),
                ("position", position.to_string()),
            ],
            RecordError::UnexpectedSection { section } => vec![("section", section.clone())],
            RecordError::Framing { position, message } => vec![
                ("position", position.to_string()),
                ("message", message.clone()),
            ],
            RecordError::Io { message } => vec![("message", message.clone())],
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::SectionDecode { section, message } => {
                write!(f, "Failed to decode {section} section: {message}")
            }
            RecordError::UnknownSection { type_id, position } => {
                write!(f, "Unknown section type {type_id} at position {position}")
            }
            RecordError::UnexpectedSection { section } => {
                write!(f, "Unexpected {section} section in stream")
            }
            RecordError::Framing { position, message } => {
                write!(f, "Framing error at position {position}: {message}")
            }
            RecordError::Io { message } => write!(f, "IO error: {message}"),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<std::io::Error> for RecordError {
    fn from(err: std::io::Error) -> Self {
        RecordError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for robolog operations.
pub type Result<T> = std::result::Result<T, RecordError>;
