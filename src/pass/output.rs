//! Secure buffered output.

use std::io::{self, Write};

use zeroize::Zeroize;

const BUF_SIZE: usize = 8 * 1024;

/// Buffered writer for secret-bearing output.
///
/// The internal buffer is zeroized whenever it drains and again on drop,
/// and drop also flushes any pending bytes.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_SIZE),
        }
    }

    fn drain(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_SIZE {
            self.drain()?;
        }
        // Oversized writes skip the buffer; the caller owns that memory.
        if data.len() >= BUF_SIZE {
            self.inner.write_all(data)?;
            return Ok(data.len());
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.drain();
        let _ = self.inner.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_writes_through_on_flush() {
        let mut out = Vec::new();
        let mut writer = SecureBufWriter::new(&mut out);
        writer.write_all(b"secret").unwrap();
        writer.write_all(b"\n").unwrap();
        writer.flush().unwrap();
        drop(writer);
        assert_eq!(out, b"secret\n");
    }

    #[test]
    fn drop_flushes_pending_bytes() {
        let mut out = Vec::new();
        {
            let mut writer = SecureBufWriter::new(&mut out);
            writer.write_all(b"pending").unwrap();
        }
        assert_eq!(out, b"pending");
    }

    #[test]
    fn large_writes_are_not_truncated() {
        let mut out = Vec::new();
        let big = vec![b'x'; BUF_SIZE * 2 + 17];
        {
            let mut writer = SecureBufWriter::new(&mut out);
            writer.write_all(b"head").unwrap();
            writer.write_all(&big).unwrap();
            writer.write_all(b"tail").unwrap();
        }
        assert_eq!(out.len(), 4 + big.len() + 4);
        assert!(out.starts_with(b"head"));
        assert!(out.ends_with(b"tail"));
    }
}
