// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Channel filtering for record readers.

use std::collections::HashSet;

/// Filter for selecting channels during reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChannelFilter {
    /// Read all channels (no filtering)
    #[default]
    All,
    /// Read only the named channels
    Include(HashSet<String>),
    /// Read everything except the named channels
    Exclude(HashSet<String>),
}

impl ChannelFilter {
    /// Check if a channel should be included.
    pub fn should_include(&self, channel_name: &str) -> bool {
        match self {
            ChannelFilter::All => true,
            ChannelFilter::Include(names) => names.contains(channel_name),
            ChannelFilter::Exclude(names) => !names.contains(channel_name),
        }
    }

    /// Create an include filter from channel names.
    pub fn include<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Include(names.into_iter().map(Into::into).collect())
    }

    /// Create an exclude filter from channel names.
    pub fn exclude<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exclude(names.into_iter().map(Into::into).collect())
    }
}

/// An empty name set means "all channels pass".
impl From<HashSet<String>> for ChannelFilter {
    fn from(names: HashSet<String>) -> Self {
        if names.is_empty() {
            ChannelFilter::All
        } else {
            ChannelFilter::Include(names)
        }
    }
}
