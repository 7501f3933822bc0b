//! [`std::io`] integration, so a [`ByteBuffer`] can stand in for any reader, writer or seekable
//! stream.

use std::io::{self, Read, Seek, SeekFrom, Write};

use super::ByteBuffer;

impl Read for ByteBuffer {
    /// Reads from the cursor, returning `Ok(0)` once the written data is exhausted.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf).unwrap_or(0))
    }
}

impl Write for ByteBuffer {
    /// Accepts the whole of `buf`, growing the storage as needed.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] if the cursor is so far out that the write
    /// would overflow the position.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.try_write_bytes(buf) {
            Ok(_) => Ok(buf.len()),
            Err(error) => Err(io::Error::new(io::ErrorKind::InvalidInput, error)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for ByteBuffer {
    /// Seeks like [`std::io::Cursor`]: positions past the end are allowed, negative positions
    /// are rejected with [`io::ErrorKind::InvalidInput`].
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = self.resolve(pos);
        match usize::try_from(target) {
            Ok(index) => {
                self.index = index;
                Ok(index as u64)
            }
            Err(_) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid seek to position {target}"),
            )),
        }
    }
}
