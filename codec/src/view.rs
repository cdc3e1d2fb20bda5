//! Fixed-length byte windows.

use crate::{util::prefix, Codec, Error};
use bytes::BufMut;

/// Reads and writes a fixed-length window of raw bytes.
///
/// Decoding does not copy: the returned slice aliases the input buffer. With
/// [ByteView::decode_mut], writes through the view land in the source buffer.
/// Exclusive access to the source while a mutable view is alive is enforced by the
/// borrow checker, not by the codec.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ByteView {
    len: usize,
}

impl ByteView {
    /// Creates a codec for windows of `len` bytes.
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Window length in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `value` itself as its encoding.
    pub fn encode_borrowed<'a>(&self, value: &'a [u8]) -> Result<&'a [u8], Error> {
        self.check(value)?;
        Ok(value)
    }

    /// Returns the first `len` bytes of `buf` as a mutable window into it.
    pub fn decode_mut<'a>(&self, buf: &'a mut [u8]) -> Result<(usize, &'a mut [u8]), Error> {
        let remaining = buf.len();
        let window = buf.get_mut(..self.len).ok_or(Error::EndOfBuffer {
            needed: self.len,
            remaining,
        })?;
        Ok((self.len, window))
    }

    fn check(&self, value: &[u8]) -> Result<(), Error> {
        if value.len() != self.len {
            return Err(Error::InvalidLength(value.len()));
        }
        Ok(())
    }
}

impl Codec for ByteView {
    type Value<'a> = &'a [u8];

    #[inline]
    fn size(&self, _: &&[u8]) -> usize {
        self.len
    }

    fn write(&self, value: &&[u8], buf: &mut impl BufMut) -> Result<(), Error> {
        self.check(value)?;
        buf.put_slice(value);
        Ok(())
    }

    #[inline]
    fn encoded_size(&self, _: &[u8]) -> Result<usize, Error> {
        Ok(self.len)
    }

    #[inline]
    fn decode<'a>(&self, buf: &'a [u8]) -> Result<(usize, &'a [u8]), Error> {
        Ok((self.len, prefix(buf, self.len)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_view() {
        let inputs: [&[u8]; 3] = [b"", b"a", b"abc"];
        for input in inputs {
            let codec = ByteView::new(input.len());
            assert_eq!(codec.size(&input), input.len());

            let encoded = codec.encode(&input).unwrap();
            assert_eq!(encoded, input);
            assert_eq!(codec.encoded_size(&encoded).unwrap(), input.len());

            let (n, view) = codec.decode(&encoded).unwrap();
            assert_eq!(n, input.len());
            assert_eq!(view, input);
        }
    }

    #[test]
    fn test_encode_borrowed_is_identity() {
        let codec = ByteView::new(3);
        let input = b"xyz";
        let encoded = codec.encode_borrowed(input).unwrap();
        assert!(std::ptr::eq(encoded, &input[..]));
    }

    #[test]
    fn test_decode_aliases_input() {
        let codec = ByteView::new(2);
        let buf = [7u8, 8, 9];
        let (_, view) = codec.decode(&buf).unwrap();
        assert_eq!(view.as_ptr(), buf.as_ptr());
        assert_eq!(view, &[7, 8]);
    }

    #[test]
    fn test_mutation_is_shared() {
        let codec = ByteView::new(3);
        let mut buf = *b"abcd";

        // Writes through the view reach the buffer.
        let (n, view) = codec.decode_mut(&mut buf).unwrap();
        assert_eq!(n, 3);
        view[0] = b'x';
        assert_eq!(&buf, b"xbcd");

        // Writes to the buffer are seen by the next view.
        buf[0] = b'y';
        let (_, view) = codec.decode(&buf).unwrap();
        assert_eq!(view[0], b'y');
    }

    #[test]
    fn test_wrong_length_rejected() {
        let codec = ByteView::new(4);
        let short: &[u8] = b"abc";
        assert_eq!(codec.encode(&short), Err(Error::InvalidLength(3)));
        assert_eq!(codec.encode_borrowed(short), Err(Error::InvalidLength(3)));
        assert_eq!(
            codec.decode(short),
            Err(Error::EndOfBuffer {
                needed: 4,
                remaining: 3
            })
        );
        let mut short = *b"ab";
        assert!(matches!(
            codec.decode_mut(&mut short),
            Err(Error::EndOfBuffer { .. })
        ));
    }
}
