//! Allocation and growth configuration for [`crate::ByteBuffer`].
//!
//! A buffer is configured by its initial storage size, which doubles as the growth unit, and by
//! the [`GrowthPolicy`] deciding how much storage to add once a write no longer fits.
//!
//! # Examples
//!
//! ```rust
//! use heapbuf::{BufferConfig, ByteBuffer, GrowthPolicy};
//!
//! let config = BufferConfig {
//!     initial_size: 64,
//!     growth: "Doubling".parse().unwrap(),
//! };
//! let mut buffer = ByteBuffer::with_config(config);
//! buffer.write_bytes(&[0u8; 100]);
//!
//! assert_eq!(config.growth, GrowthPolicy::Doubling);
//! assert_eq!(buffer.allocated(), 128);
//! ```

use strum::{Display, EnumIter, EnumString};

/// Default storage size, and therefore default growth unit, used by [`crate::ByteBuffer::allocate`].
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Strategy used to enlarge the storage of a buffer when a write does not fit.
///
/// Only the allocated length of a buffer depends on the policy. Logical size, contents and
/// cursor behaviour are identical for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum GrowthPolicy {
    /// `(length + missing + unit) * growth_count`, where `growth_count` starts at 1 and
    /// increases with every resize. Each successive growth is more generous than the last.
    #[default]
    Stepped,
    /// The larger of the required length, twice the current length and the growth unit.
    Doubling,
    /// Exactly the required length. Tightest memory use, one reallocation per overflowing write.
    Exact,
}

impl GrowthPolicy {
    /// Computes the new storage length.
    ///
    /// # Arguments
    /// * `current` - Current storage length
    /// * `required` - Minimum storage length the pending write needs, always `> current`
    /// * `unit` - Growth unit of the buffer
    /// * `count` - Number of resizes performed so far, plus one
    #[must_use]
    pub fn next_len(self, current: usize, required: usize, unit: usize, count: usize) -> usize {
        let next = match self {
            GrowthPolicy::Stepped => {
                let missing = required - current;
                current
                    .checked_add(missing)
                    .and_then(|len| len.checked_add(unit))
                    .and_then(|len| len.checked_mul(count))
                    .unwrap_or(required)
            }
            GrowthPolicy::Doubling => required.max(current.saturating_mul(2)).max(unit),
            GrowthPolicy::Exact => required,
        };

        next.max(required)
    }
}

/// Configuration for allocating a [`crate::ByteBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    /// Storage allocated up front. Also used as the growth unit.
    pub initial_size: usize,
    /// Policy applied whenever the storage must grow.
    pub growth: GrowthPolicy,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_BUFFER_SIZE,
            growth: GrowthPolicy::Stepped,
        }
    }
}

impl BufferConfig {
    /// Creates a configuration with the given initial size and the default growth policy.
    #[must_use]
    pub fn with_size(initial_size: usize) -> Self {
        Self {
            initial_size,
            ..Self::default()
        }
    }

    /// Small buffers that never hold more storage than they were asked for
    ///
    /// Starts empty and grows by exactly what each write needs.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            initial_size: 0,
            growth: GrowthPolicy::Exact,
        }
    }

    /// Large sequential writes such as draining a stream or loading a file
    #[must_use]
    pub fn streaming() -> Self {
        Self {
            initial_size: 64 * 1024,
            growth: GrowthPolicy::Doubling,
        }
    }
}
