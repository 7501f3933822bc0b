//! File and stream helpers built on [`crate::ByteBuffer`].
//!
//! These are the collaborators that move bytes between the operating system and a buffer:
//!
//! - [`read_file`] - load a whole file into a buffer for random access
//! - [`write_file`] - store the written data of a buffer
//! - [`read_stream`] - drain any [`std::io::Read`] into a buffer
//! - [`copy`] / [`copy_file`] - stream bytes from a source to a sink in fixed-size chunks
//! - [`Physical`] - read-only memory map of a file
//!
//! # Examples
//!
//! ```rust,no_run
//! use heapbuf::file;
//!
//! // Random access over a file: load it, then seek and decode
//! let mut buffer = file::read_file("records.bin")?;
//! buffer.seek_set(16);
//! let count = buffer.read_int();
//!
//! // Append and store again
//! buffer.seek_end(0).write_int(7);
//! file::write_file("records.bin", &buffer)?;
//! # Ok::<(), heapbuf::Error>(())
//! ```

mod physical;

pub use physical::Physical;

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use log::debug;

use crate::{
    config::{BufferConfig, DEFAULT_BUFFER_SIZE},
    ByteBuffer, Result,
};

/// Loads the file at `path` into a new buffer with the cursor at the start.
///
/// # Errors
/// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped.
pub fn read_file(path: impl AsRef<Path>) -> Result<ByteBuffer> {
    let path = path.as_ref();
    let buffer = Physical::new(path)?.into_buffer();

    debug!("loaded {} bytes from {}", buffer.size(), path.display());
    Ok(buffer)
}

/// Writes the data of `buffer` to `path`, creating or truncating the file.
///
/// Exactly [`ByteBuffer::size`] bytes are stored, wherever the cursor currently is.
///
/// # Errors
/// Returns [`crate::Error::FileError`] if the file cannot be written.
pub fn write_file(path: impl AsRef<Path>, buffer: &ByteBuffer) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, buffer.as_bytes())?;

    debug!("stored {} bytes to {}", buffer.size(), path.display());
    Ok(())
}

/// Reads `reader` until it is exhausted and returns the data in a buffer rewound to the start.
///
/// # Errors
/// Returns [`crate::Error::FileError`] if reading fails.
pub fn read_stream<R: Read>(mut reader: R) -> Result<ByteBuffer> {
    let mut buffer = ByteBuffer::with_config(BufferConfig::streaming());
    copy(&mut reader, &mut buffer)?;
    buffer.rewind();
    Ok(buffer)
}

/// Copies everything from `reader` to `writer` and returns the number of bytes moved.
///
/// Data moves in chunks of [`DEFAULT_BUFFER_SIZE`] bytes. Interrupted reads are retried.
///
/// # Errors
/// Returns [`crate::Error::FileError`] if reading or writing fails.
pub fn copy<R, W>(reader: &mut R, writer: &mut W) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut chunk = [0u8; DEFAULT_BUFFER_SIZE];
    let mut total = 0_u64;

    loop {
        let len = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(len) => len,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error.into()),
        };

        writer.write_all(&chunk[..len])?;
        total += len as u64;
    }

    writer.flush()?;
    debug!("copied {} bytes", total);
    Ok(total)
}

/// Copies the file at `src` to `dst`, creating or truncating `dst`.
///
/// # Errors
/// Returns [`crate::Error::FileError`] if either file cannot be opened or the copy fails.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<u64> {
    let mut reader = fs::File::open(src)?;
    let mut writer = io::BufWriter::new(fs::File::create(dst)?);
    copy(&mut reader, &mut writer)
}
