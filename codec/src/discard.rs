//! A codec that keeps nothing.

use crate::{Codec, Error};
use bytes::BufMut;
use std::{fmt, marker::PhantomData};

/// Maps any value to zero bytes, and zero bytes back to `None`.
///
/// Useful where a field must be structurally present but carries no payload.
pub struct Discard<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Discard<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Discard<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Discard<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Discard<T> {}

impl<T> fmt::Debug for Discard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Discard")
    }
}

impl<T> Codec for Discard<T> {
    type Value<'a> = Option<T>;

    #[inline]
    fn size(&self, _: &Option<T>) -> usize {
        0
    }

    #[inline]
    fn write(&self, _: &Option<T>, _: &mut impl BufMut) -> Result<(), Error> {
        Ok(())
    }

    #[inline]
    fn encoded_size(&self, _: &[u8]) -> Result<usize, Error> {
        Ok(0)
    }

    #[inline]
    fn decode<'a>(&self, _: &'a [u8]) -> Result<(usize, Option<T>), Error> {
        Ok((0, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard() {
        let codec = Discard::<String>::new();
        let value = Some("ignored".to_string());
        assert_eq!(codec.size(&value), 0);
        let encoded = codec.encode(&value).unwrap();
        assert!(encoded.is_empty());
        assert_eq!(codec.encoded_size(&[1, 2, 3]).unwrap(), 0);
        assert_eq!(codec.decode(&[1, 2, 3]).unwrap(), (0, None));
        assert!(codec.encode(&None).unwrap().is_empty());
    }
}
