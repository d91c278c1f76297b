//! Sinks - anything that accepts textual debug messages
//!
//! The debug console is one sink among others: the same capability is
//! implemented by [`ConsoleHandle`](crate::handle::ConsoleHandle) for the
//! on-screen console and by [`WriterSink`] for files and stderr. Producers
//! hold an `Arc<dyn LogSink>` (or a concrete sink) and never learn which
//! one they are writing to.

use debug_console_config::LineSeparator;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Capability of accepting textual debug messages
///
/// Every operation is total: a sink that cannot take a message drops it
/// silently instead of reporting an error to the producer.
pub trait LogSink: Send + Sync {
    /// Append one message
    fn append_message(&self, text: &str);

    /// Append a formatted message
    ///
    /// Formatting is skipped entirely while the sink is not accepting.
    fn append_message_fmt(&self, args: fmt::Arguments<'_>) {
        if !self.is_accepting() {
            return;
        }
        match args.as_str() {
            Some(text) => self.append_message(text),
            None => self.append_message(&args.to_string()),
        }
    }

    /// Whether messages appended now would be kept
    fn is_accepting(&self) -> bool {
        true
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn append_message(&self, text: &str) {
        (**self).append_message(text)
    }

    fn append_message_fmt(&self, args: fmt::Arguments<'_>) {
        (**self).append_message_fmt(args)
    }

    fn is_accepting(&self) -> bool {
        (**self).is_accepting()
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn append_message(&self, text: &str) {
        (**self).append_message(text)
    }

    fn append_message_fmt(&self, args: fmt::Arguments<'_>) {
        (**self).append_message_fmt(args)
    }

    fn is_accepting(&self) -> bool {
        (**self).is_accepting()
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn append_message(&self, text: &str) {
        (**self).append_message(text)
    }

    fn append_message_fmt(&self, args: fmt::Arguments<'_>) {
        (**self).append_message_fmt(args)
    }

    fn is_accepting(&self) -> bool {
        (**self).is_accepting()
    }
}

/// Append a formatted message to a sink
///
/// ```ignore
/// console_log!(console, "captured {} bytes from {}", len, peer);
/// ```
#[macro_export]
macro_rules! console_log {
    ($sink:expr, $($arg:tt)+) => {
        $crate::sink::LogSink::append_message_fmt(&$sink, ::std::format_args!($($arg)+))
    };
}

/// Sink writing one message per line to any `Write`
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    separator: LineSeparator,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, separator: LineSeparator) -> Self {
        Self {
            writer: Mutex::new(writer),
            separator,
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl WriterSink<File> {
    /// Sink appending to a file, created if missing
    pub fn append_to(path: &Path, separator: LineSeparator) -> io::Result<Self> {
        let file = File::options().create(true).append(true).open(path)?;
        Ok(Self::new(file, separator))
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr(), LineSeparator::Lf)
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn append_message(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            // Write failures are dropped like any other undeliverable message
            let _ = writer
                .write_all(text.as_bytes())
                .and_then(|_| writer.write_all(self.separator.as_str().as_bytes()))
                .and_then(|_| writer.flush());
        }
    }
}

impl<W: Write + Send> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}
