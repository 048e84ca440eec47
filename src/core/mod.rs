// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout robolog.
//!
//! This module provides the foundational types for the library:
//! - [`RecordError`] - Error handling for record file operations
//! - [`Result`] - Crate-wide result alias

pub mod error;

pub use error::{RecordError, Result};
