//! Big-endian encoding of fixed-width scalar types.
//!
//! The [`Scalar`] trait converts between a value and its fixed-size big-endian byte
//! representation. It backs the generic [`crate::ByteBuffer::read_be`] and
//! [`crate::ByteBuffer::write_be`] methods, which in turn back all of the named scalar
//! accessors (`read_int`, `write_double`, ...).
//!
//! # Supported Types
//! - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`
//! - **Signed integers**: `i8`, `i16`, `i32`, `i64`
//! - **Floating point**: `f32`, `f64`, encoded through their IEEE-754 bit patterns
//!
//! # Examples
//!
//! ```rust
//! use heapbuf::Scalar;
//!
//! assert_eq!(0x0102_0304_u32.to_be_bytes(), [0x01, 0x02, 0x03, 0x04]);
//! assert_eq!(<i16 as Scalar>::from_be_bytes([0xFF, 0xFE]), -2);
//! assert_eq!(Scalar::to_be_bytes(1.0_f32), [0x3F, 0x80, 0x00, 0x00]);
//! ```

/// A fixed-width value with a big-endian byte representation.
pub trait Scalar: Sized + Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Byte array holding one encoded value.
    type Bytes: Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Decode a value from its big-endian bytes.
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Encode a value into big-endian bytes.
    fn to_be_bytes(self) -> Self::Bytes;
}

macro_rules! impl_scalar_int {
    ($($ty:ty),+) => {
        $(
            impl Scalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn to_be_bytes(self) -> Self::Bytes {
                    <$ty>::to_be_bytes(self)
                }
            }
        )+
    };
}

macro_rules! impl_scalar_float {
    ($($ty:ty => $bits:ty),+) => {
        $(
            impl Scalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$bits>();

                type Bytes = [u8; std::mem::size_of::<$bits>()];

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_bits(<$bits>::from_be_bytes(bytes))
                }

                fn to_be_bytes(self) -> Self::Bytes {
                    self.to_bits().to_be_bytes()
                }
            }
        )+
    };
}

impl_scalar_int!(u8, i8, u16, i16, u32, i32, u64, i64);
impl_scalar_float!(f32 => u32, f64 => u64);
