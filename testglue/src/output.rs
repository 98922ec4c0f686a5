// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::write_str::WriteStr;
use parking_lot::Mutex;
use std::{
    io::{self, Write},
    sync::Arc,
};

/// Where a [`TestState`](crate::TestState) writes event lines and the totals report.
#[derive(Clone, Debug, Default)]
pub enum OutputSink {
    /// Write to the process's standard output.
    #[default]
    Stdout,

    /// Write to the process's standard error.
    Stderr,

    /// Write to an in-memory buffer.
    Buffer(SharedBuffer),
}

impl OutputSink {
    /// Creates a sink that writes to a new, empty buffer, returning the sink and a handle to the
    /// buffer.
    pub fn buffer() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Self::Buffer(buffer.clone()), buffer)
    }
}

impl WriteStr for OutputSink {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        // Each call holds the stream lock for the whole string, so lines are never split.
        match self {
            Self::Stdout => io::stdout().lock().write_all(s.as_bytes()),
            Self::Stderr => io::stderr().lock().write_all(s.as_bytes()),
            Self::Buffer(buffer) => {
                buffer.inner.lock().push_str(s);
                Ok(())
            }
        }
    }

    fn write_str_flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().flush(),
            Self::Stderr => io::stderr().flush(),
            Self::Buffer(_) => Ok(()),
        }
    }
}

/// A cloneable, in-memory text buffer.
///
/// All clones share the same contents.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<String>>,
}

impl SharedBuffer {
    /// Returns a copy of the current contents.
    pub fn contents(&self) -> String {
        self.inner.lock().clone()
    }

    /// Returns the current contents and clears the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.inner.lock())
    }
}
