// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # heapbuf
//!
//! A growable, randomly seekable byte buffer with big-endian typed access.
//!
//! [`ByteBuffer`] stores raw bytes in a single heap region that grows on demand, and reads and
//! writes 8/16/32/64-bit integers and 32/64-bit IEEE-754 floats in network byte order. A cursor
//! moves with every access and can be repositioned absolutely, relatively or from the end, and
//! a bookmark saves and restores cursor positions.
//!
//! ## Quick Start
//!
//! ```rust
//! use heapbuf::ByteBuffer;
//!
//! let mut buffer = ByteBuffer::allocate();
//! buffer.write_int(1001).write_int(1002).write_int(1003);
//!
//! buffer.seek_set(0);
//! assert_eq!(buffer.read_int(), Some(1001));
//! assert_eq!(buffer.read_int(), Some(1002));
//! assert_eq!(buffer.read_int(), Some(1003));
//! assert_eq!(buffer.read_int(), None);
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use heapbuf::prelude::*;
//!
//! let mut buffer = ByteBuffer::with_config(BufferConfig::compact());
//! buffer.write_be(0xBEEF_u16);
//! assert_eq!(buffer.to_vec(), vec![0xBE, 0xEF]);
//! ```
//!
//! ## Architecture
//!
//! - [`buffer`] - [`ByteBuffer`] and the [`Scalar`] codec
//! - [`config`] - [`BufferConfig`] and [`GrowthPolicy`]
//! - [`file`] - loading files into buffers, storing them, and stream copies
//! - [`Error`] and [`Result`] - error handling
//!
//! ## Error Handling
//!
//! End-of-data is reported through `Option`, never as an error. The only errors raised by the
//! buffer itself are [`Error::OutOfBounds`] for inconsistent caller supplied ranges and
//! [`Error::InvalidOffset`] for a rejected [`ByteBuffer::checked_seek`]. File helpers add
//! [`Error::FileError`].
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: storage growth at `trace` level, file and stream
//! transfers at `debug` level. Install any `log` compatible logger to see them.

#[macro_use]
pub(crate) mod error;

pub mod buffer;
pub mod config;
pub mod file;
pub mod prelude;

/// `heapbuf` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `heapbuf` Error type
///
/// Covers bounds violations, rejected seeks and I/O failures of the file helpers.
pub use error::Error;

/// The growable byte buffer. See [`buffer::ByteBuffer`].
pub use buffer::{ByteBuffer, Scalar};

/// Buffer configuration. See [`config::BufferConfig`].
pub use config::{BufferConfig, GrowthPolicy, DEFAULT_BUFFER_SIZE};
