//! # heapbuf Prelude
//!
//! Convenient re-exports of the types most code working with buffers needs.
//!
//! ```rust
//! use heapbuf::prelude::*;
//!
//! let mut buffer = ByteBuffer::wrap(&[0x40, 0x49, 0x0F, 0xDB]);
//! buffer.rewind();
//! assert_eq!(buffer.read_float(), Some(std::f32::consts::PI));
//! ```

/// The main error type for all heapbuf operations
pub use crate::Error;

/// The result type used throughout heapbuf
pub use crate::Result;

/// The growable byte buffer and its scalar codec
pub use crate::buffer::{ByteBuffer, Scalar};

/// Allocation and growth configuration
pub use crate::config::{BufferConfig, GrowthPolicy, DEFAULT_BUFFER_SIZE};

/// File and stream helpers
pub use crate::file::{copy, copy_file, read_file, read_stream, write_file, Physical};
