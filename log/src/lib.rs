//! In-process logger shared by every crate in the workspace.
//!
//! Lines are kept in a fixed size ring buffer so that an embedder can display
//! the most recent messages without the log growing unbounded.

use std::sync::RwLock;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Notify,
    Warning,
    Trace,
}

#[macro_export]
macro_rules! notify {
    () => {};

    ($($arg:tt)*) => {{
        if let Ok(mut logger) = $crate::LOGGER.write() {
            logger.append(format!($($arg)*), $crate::Level::Notify);
        }
    }};
}

#[macro_export]
macro_rules! warning {
    () => {};

    ($($arg:tt)*) => {{
        if let Ok(mut logger) = $crate::LOGGER.write() {
            logger.append(format!($($arg)*), $crate::Level::Warning);
        }
    }};
}

#[macro_export]
macro_rules! trace {
    () => {};

    ($($arg:tt)*) => {{
        if let Ok(mut logger) = $crate::LOGGER.write() {
            logger.append(format!($($arg)*), $crate::Level::Trace);
        }
    }};
}

pub static LOGGER: Lazy<RwLock<Logger<300>>> = Lazy::new(|| RwLock::new(Logger::new()));

pub struct Logger<const N: usize> {
    lines: [(String, Level); N],
    head: usize,
    len: usize,
}

impl<const N: usize> Logger<N> {
    pub fn new() -> Self {
        Self {
            lines: std::array::from_fn(|_| (String::new(), Level::Trace)),
            head: 0,
            len: 0,
        }
    }

    /// Stores a line, overwriting the oldest one once full.
    ///
    /// A `Logger<0>` retains nothing.
    pub fn append(&mut self, line: String, level: Level) {
        if N == 0 {
            return;
        }

        self.lines[self.head] = (line, level);
        self.head = (self.head + 1) % N;
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Number of lines currently retained.
    pub fn len(&self) -> usize {
        self.len.min(N)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Retained lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = (&str, Level)> {
        let (a, b) = if self.len < N {
            (&self.lines[0..self.len], &[][..])
        } else {
            // wrapped around, so the oldest line sits at the head
            let (a, b) = self.lines.split_at(self.head);
            (b, a)
        };

        a.iter().chain(b).map(|(line, level)| (line.as_str(), *level))
    }
}

impl<const N: usize> Default for Logger<N> {
    fn default() -> Self {
        Self::new()
    }
}
