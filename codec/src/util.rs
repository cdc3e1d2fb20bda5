//! Helpers shared by codec implementations.

use crate::Error;
use bytes::Buf;

/// Checks that at least `len` bytes remain in `buf`.
#[inline]
pub fn at_least<B: Buf>(buf: &mut B, len: usize) -> Result<(), Error> {
    let remaining = buf.remaining();
    if remaining < len {
        return Err(Error::EndOfBuffer {
            needed: len,
            remaining,
        });
    }
    Ok(())
}

/// Returns the first `len` bytes of `buf`, or [Error::EndOfBuffer] if it is shorter.
#[inline]
pub fn prefix(buf: &[u8], len: usize) -> Result<&[u8], Error> {
    buf.get(..len).ok_or(Error::EndOfBuffer {
        needed: len,
        remaining: buf.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least() {
        let mut buf: &[u8] = &[1, 2, 3];
        assert!(at_least(&mut buf, 0).is_ok());
        assert!(at_least(&mut buf, 3).is_ok());
        assert_eq!(
            at_least(&mut buf, 4),
            Err(Error::EndOfBuffer {
                needed: 4,
                remaining: 3
            })
        );
    }

    #[test]
    fn test_prefix() {
        let buf = [1u8, 2, 3];
        assert_eq!(prefix(&buf, 2).unwrap(), &[1, 2]);
        assert_eq!(prefix(&buf, 0).unwrap(), &[] as &[u8]);
        assert!(matches!(
            prefix(&buf, 5),
            Err(Error::EndOfBuffer {
                needed: 5,
                remaining: 3
            })
        ));
    }
}
