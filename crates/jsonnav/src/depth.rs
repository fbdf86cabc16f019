//! Nesting depth checks that run ahead of the decoder.
//!
//! The decoder itself has no depth limit, so input is scanned before it is
//! parsed. Scanning stops once the first top-level value is complete; content
//! after it is the trailing policy's business.
use std::io;

/// Tracks `[`/`{` nesting over a byte stream, ignoring brackets inside strings.
#[derive(Debug, Clone)]
pub(crate) struct DepthGuard {
    limit: usize,
    depth: usize,
    in_string: bool,
    escaped: bool,
    finished: bool,
}

impl DepthGuard {
    pub(crate) fn new(limit: usize) -> Self {
        DepthGuard {
            limit,
            depth: 0,
            in_string: false,
            escaped: false,
            finished: false,
        }
    }

    pub(crate) fn exceeded(&self) -> bool {
        self.depth > self.limit
    }

    /// Consume the next chunk of input. Returns `false` once the limit is crossed.
    pub(crate) fn feed(&mut self, bytes: &[u8]) -> bool {
        for &byte in bytes {
            if self.finished || self.exceeded() {
                break;
            }
            if self.in_string {
                if self.escaped {
                    self.escaped = false;
                } else if byte == b'\\' {
                    self.escaped = true;
                } else if byte == b'"' {
                    self.in_string = false;
                }
                continue;
            }
            match byte {
                b'[' | b'{' => self.depth += 1,
                b']' | b'}' => {
                    self.depth = self.depth.saturating_sub(1);
                    self.finished = self.depth == 0;
                }
                b'"' if self.depth > 0 => self.in_string = true,
                b' ' | b'\t' | b'\n' | b'\r' => {}
                // A scalar at the top level cannot nest.
                _ => self.finished = self.depth == 0,
            }
        }
        !self.exceeded()
    }
}

/// A reader that fails with `InvalidData` once its input nests too deeply.
pub(crate) struct Guarded<R> {
    inner: R,
    guard: DepthGuard,
}

impl<R> Guarded<R> {
    pub(crate) fn new(inner: R, limit: usize) -> Self {
        Guarded {
            inner,
            guard: DepthGuard::new(limit),
        }
    }

    pub(crate) fn exceeded(&self) -> bool {
        self.guard.exceeded()
    }
}

impl<R: io::Read> io::Read for Guarded<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        if self.guard.feed(&buf[..read]) {
            Ok(read)
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "nesting depth limit exceeded",
            ))
        }
    }
}
