//! Length-prefixed text.
//!
//! Text is encoded as a 2-byte big-endian length header (high byte first) followed
//! by the raw UTF-8 bytes. The header is always big-endian, independent of any byte
//! order configured for structural codecs.

use crate::{util::prefix, Codec, Error, LenRange};
use bytes::BufMut;

/// Size of the length header.
pub const HEADER_SIZE: usize = 2;

/// Longest text, in bytes, the header can describe.
pub const MAX_LEN: usize = u16::MAX as usize;

/// Converts `String` to a 2-byte length header plus content and back.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Text16 {
    limit: LenRange,
}

impl Text16 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects text whose length falls outside `limit`.
    ///
    /// Encoding checks before writing anything. Decoding checks the header, before
    /// any content is copied.
    pub fn with_limit(limit: impl Into<LenRange>) -> Self {
        Self {
            limit: limit.into(),
        }
    }

    /// Reads the length header.
    fn header(&self, buf: &[u8]) -> Result<usize, Error> {
        let header = prefix(buf, HEADER_SIZE)?;
        let len = usize::from(u16::from_be_bytes([header[0], header[1]]));
        if !self.limit.contains(len) {
            return Err(Error::InvalidLength(len));
        }
        Ok(len)
    }
}

impl Codec for Text16 {
    type Value<'a> = String;

    #[inline]
    fn size(&self, value: &String) -> usize {
        HEADER_SIZE + value.len()
    }

    fn write(&self, value: &String, buf: &mut impl BufMut) -> Result<(), Error> {
        let len = u16::try_from(value.len())
            .map_err(|_| Error::LengthExceeded(value.len(), MAX_LEN))?;
        if !self.limit.contains(value.len()) {
            return Err(Error::InvalidLength(value.len()));
        }
        buf.put_u16(len);
        buf.put_slice(value.as_bytes());
        Ok(())
    }

    fn encoded_size(&self, buf: &[u8]) -> Result<usize, Error> {
        Ok(HEADER_SIZE + self.header(buf)?)
    }

    fn decode<'a>(&self, buf: &'a [u8]) -> Result<(usize, String), Error> {
        let size = self.encoded_size(buf)?;
        let content = prefix(buf, size)?[HEADER_SIZE..].to_vec();
        let text = String::from_utf8(content)
            .map_err(|err| Error::InvalidData("Text16".into(), err.to_string()))?;
        Ok((size, text))
    }
}
