use std::io::{self, BufRead};

use tracing::debug;

/// Longest accepted line in bytes, including the line terminator.
pub const MAX_LINE_LEN: usize = 1024;

const MAX_CONTENT_LEN: usize = MAX_LINE_LEN - 1;

#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Eof,
}

/// Reads newline-terminated command lines with a bounded buffer.
///
/// Content past `MAX_LINE_LEN - 1` bytes is read and discarded up to the
/// end of the line, so an oversized line is truncated rather than split
/// into several commands.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(MAX_LINE_LEN),
        }
    }

    pub fn read_line(&mut self) -> io::Result<ReadOutcome> {
        self.buf.clear();
        let mut consumed = 0;
        let mut truncated = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }

            let newline = available.iter().position(|&b| b == b'\n');
            let content = &available[..newline.unwrap_or(available.len())];

            let room = MAX_CONTENT_LEN - self.buf.len();
            if content.len() > room {
                truncated = true;
            }
            self.buf.extend_from_slice(&content[..content.len().min(room)]);

            let used = newline.map_or(available.len(), |i| i + 1);
            self.inner.consume(used);
            consumed += used;

            if newline.is_some() {
                break;
            }
        }

        if consumed == 0 {
            return Ok(ReadOutcome::Eof);
        }
        if truncated {
            debug!(limit = MAX_LINE_LEN, "input line truncated");
        }
        Ok(ReadOutcome::Line(decode(&self.buf, truncated)))
    }
}

fn decode(bytes: &[u8], truncated: bool) -> String {
    // A cut in the middle of a multi-byte character drops the partial tail.
    let bytes = match std::str::from_utf8(bytes) {
        Err(e) if truncated && e.error_len().is_none() => &bytes[..e.valid_up_to()],
        _ => bytes,
    };
    String::from_utf8_lossy(bytes).into_owned()
}
