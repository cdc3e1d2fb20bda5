//! The contract shared by every codec.

use crate::error::Error;
use bytes::{BufMut, BytesMut};

/// Converts values of one shape to bytes and back.
///
/// A codec instance is bound to exactly one value shape for its entire lifetime and
/// holds no mutable state, so a single instance can be shared freely across threads.
///
/// Every implementation upholds:
///
/// ```text
/// encoded_size(encode(v)) == size(v) == encode(v).len()
/// decode(encode(v)) == (size(v), v)
/// ```
pub trait Codec {
    /// The value shape this codec accepts.
    ///
    /// The lifetime lets codecs that decode without copying borrow from the input
    /// buffer. Codecs that copy ignore it.
    type Value<'a>;

    /// Returns the number of bytes [Codec::encode] produces for `value`.
    fn size(&self, value: &Self::Value<'_>) -> usize;

    /// Writes the encoding of `value` to `buf`.
    ///
    /// Implementations must write exactly [Codec::size] bytes and must not write
    /// anything when they return an error.
    fn write(&self, value: &Self::Value<'_>, buf: &mut impl BufMut) -> Result<(), Error>;

    /// Returns how many bytes at the front of `buf` make up one encoded value,
    /// without decoding it.
    fn encoded_size(&self, buf: &[u8]) -> Result<usize, Error>;

    /// Reads one value from the front of `buf`.
    ///
    /// Returns the number of bytes consumed along with the value. Bytes after the
    /// consumed prefix are ignored.
    fn decode<'a>(&self, buf: &'a [u8]) -> Result<(usize, Self::Value<'a>), Error>;

    /// Encodes `value` into a new buffer.
    ///
    /// Returns [Error::LayoutMismatch] if [Codec::write] did not produce exactly
    /// [Codec::size] bytes.
    ///
    /// (Provided method).
    fn encode(&self, value: &Self::Value<'_>) -> Result<BytesMut, Error> {
        let len = self.size(value);
        let mut buffer = BytesMut::with_capacity(len);
        self.write(value, &mut buffer)?;
        if buffer.len() != len {
            return Err(Error::LayoutMismatch(len, buffer.len()));
        }
        Ok(buffer)
    }
}
