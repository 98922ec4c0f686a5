// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! String-only writers.
//!
//! The totals report and event lines are always text, and some destinations (such as
//! [`SharedBuffer`](crate::SharedBuffer)) only hold text. [`WriteStr`] abstracts over them.
//!
//! This is similar to [`std::fmt::Write`], but returns [`std::io::Error`] so that failures writing
//! to stdout can be reported.

use std::{
    fmt,
    io::{self, BufWriter, Write},
};

/// A writer that accepts strings.
///
/// For more, see the [module-level documentation](self).
pub trait WriteStr {
    /// Writes a string to the writer.
    fn write_str(&mut self, s: &str) -> io::Result<()>;

    /// Flushes the writer, ensuring that all buffered contents reach their destination.
    fn write_str_flush(&mut self) -> io::Result<()>;

    /// Writes a formatted string to the writer.
    ///
    /// This makes `write!` and `writeln!` usable with any `WriteStr`.
    fn write_fmt(&mut self, fmt: fmt::Arguments<'_>) -> io::Result<()> {
        // Adapted from the `write_fmt` implementation for `std::io::Write`, used under the terms
        // of the MIT and Apache-2.0 licenses.
        struct Adapter<'a, T: ?Sized> {
            inner: &'a mut T,
            error: Result<(), io::Error>,
        }

        impl<T: ?Sized + WriteStr> fmt::Write for Adapter<'_, T> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.inner.write_str(s).map_err(|e| {
                    self.error = Err(e);
                    fmt::Error
                })
            }
        }

        let mut output = Adapter {
            inner: self,
            error: Ok(()),
        };
        match fmt::write(&mut output, fmt) {
            Ok(()) => Ok(()),
            // A formatting error that didn't come from the writer means a `Display` impl failed.
            Err(_) if output.error.is_ok() => Err(io::Error::other("formatter error")),
            Err(_) => output.error,
        }
    }
}

impl WriteStr for String {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.push_str(s);
        Ok(())
    }

    fn write_str_flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: Write> WriteStr for BufWriter<W> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_all(s.as_bytes())
    }

    fn write_str_flush(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl<T: WriteStr + ?Sized> WriteStr for &mut T {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        (**self).write_str(s)
    }

    fn write_str_flush(&mut self) -> io::Result<()> {
        (**self).write_str_flush()
    }

    fn write_fmt(&mut self, fmt: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).write_fmt(fmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl WriteStr for BrokenPipe {
        fn write_str(&mut self, _s: &str) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn write_str_flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_fmt_to_string() {
        let mut s = String::new();
        write!(s, "{}\t\t{}", "# of expected passes", 3).unwrap();
        assert_eq!(s, "# of expected passes\t\t3");
    }

    #[test]
    fn write_fmt_propagates_io_error() {
        let mut writer = BrokenPipe;
        let error = write!(writer, "NOTE: {}", "label").expect_err("writer is broken");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn buf_writer() {
        let mut writer = BufWriter::new(Vec::new());
        // io::Write is also in scope here, so call through the trait explicitly.
        WriteStr::write_fmt(&mut writer, format_args!("PASS: {}\n", "test")).unwrap();
        writer.write_str_flush().unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"PASS: test\n");
    }
}
