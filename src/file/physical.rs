//! Memory-mapped file access.
//!
//! [`Physical`] maps a file read-only into the address space of the process. The mapping gives
//! cheap random access to the raw bytes of a file and is the source the file helpers copy from
//! when loading a file into a [`crate::ByteBuffer`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use heapbuf::file::Physical;
//!
//! let physical = Physical::new("data.bin")?;
//! println!("File size: {} bytes", physical.len());
//!
//! let mut buffer = physical.into_buffer();
//! let magic = buffer.read_int();
//! # Ok::<(), heapbuf::Error>(())
//! ```

use std::{fs, path::Path};

use memmap2::Mmap;

use crate::{ByteBuffer, Error::FileError, Result};

/// A read-only, memory-mapped file.
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data
    data: Mmap,
}

impl Physical {
    /// Opens and memory-maps the file at `path`.
    ///
    /// # Arguments
    /// * `path` - Path to the file on disk. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) => return Err(FileError(error)),
        };

        Self::from_std_file(&file)
    }

    /// Memory-maps an already opened file.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if memory mapping fails.
    pub fn from_std_file(file: &fs::File) -> Result<Physical> {
        // The mapping stays valid only as long as no other process truncates the file.
        let mmap = unsafe { Mmap::map(file) }.map_err(FileError)?;

        Ok(Physical { data: mmap })
    }

    /// The mapped file contents.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// File size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for an empty file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copies the mapped contents into a buffer with the cursor rewound to the start.
    #[must_use]
    pub fn into_buffer(self) -> ByteBuffer {
        let mut buffer = ByteBuffer::wrap(self.data());
        buffer.rewind();
        buffer
    }
}
