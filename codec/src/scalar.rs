//! Codecs for the fixed-width integers.
//!
//! Each codec is a stateless unit struct encoding exactly `width / 8` bytes in
//! little-endian two's complement.

use crate::{util::prefix, ByteOrder, Codec, Error, Layout};
use bytes::BufMut;
use paste::paste;

macro_rules! impl_scalar_codec {
    ($name:ident, $type:ident) => {
        paste! {
            #[doc = "Codec for `" $type "`, little-endian."]
            #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
            pub struct $name;

            impl $name {
                /// Encoded width in bytes.
                pub const SIZE: usize = std::mem::size_of::<$type>();
            }

            impl Codec for $name {
                type Value<'a> = $type;

                #[inline]
                fn size(&self, _: &$type) -> usize {
                    Self::SIZE
                }

                #[inline]
                fn write(&self, value: &$type, buf: &mut impl BufMut) -> Result<(), Error> {
                    value.write_layout(buf, ByteOrder::Little)
                }

                #[inline]
                fn encoded_size(&self, _: &[u8]) -> Result<usize, Error> {
                    Ok(Self::SIZE)
                }

                #[inline]
                fn decode<'a>(&self, buf: &'a [u8]) -> Result<(usize, $type), Error> {
                    let mut bytes = prefix(buf, Self::SIZE)?;
                    Ok((Self::SIZE, <$type>::read_layout(&mut bytes, ByteOrder::Little)?))
                }
            }
        }
    };
}

impl_scalar_codec!(U8, u8);
impl_scalar_codec!(U16, u16);
impl_scalar_codec!(U32, u32);
impl_scalar_codec!(U64, u64);
impl_scalar_codec!(I8, i8);
impl_scalar_codec!(I16, i16);
impl_scalar_codec!(I32, i32);
impl_scalar_codec!(I64, i64);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_scalar_test {
        ($name:ident, $type:ty, $size:expr) => {
            paste! {
                #[test]
                fn [<test_ $type _codec>]() {
                    let v1234 = [0x34u8, 0x12, 0, 0, 0, 0, 0, 0];
                    let cases: [($type, Vec<u8>); 4] = [
                        (0, vec![0; $size]),
                        (1, {
                            let mut b = vec![0; $size];
                            b[0] = 1;
                            b
                        }),
                        (0x1234u16 as $type, v1234[..$size].to_vec()),
                        (!0, vec![0xFF; $size]),
                    ];
                    let codec = $name;
                    for (value, want) in cases {
                        let encoded = codec.encode(&value).unwrap();
                        assert_eq!(encoded, want[..]);
                        assert_eq!(codec.size(&value), $size);
                        assert_eq!(codec.encoded_size(&encoded).unwrap(), $size);

                        let (n, decoded) = codec.decode(&encoded).unwrap();
                        assert_eq!(n, $size);
                        assert_eq!(decoded, value);
                    }
                }
            }
        };
    }
    impl_scalar_test!(U8, u8, 1);
    impl_scalar_test!(U16, u16, 2);
    impl_scalar_test!(U32, u32, 4);
    impl_scalar_test!(U64, u64, 8);
    impl_scalar_test!(I8, i8, 1);
    impl_scalar_test!(I16, i16, 2);
    impl_scalar_test!(I32, i32, 4);
    impl_scalar_test!(I64, i64, 8);

    #[test]
    fn test_u16_little_endian() {
        assert_eq!(U16.encode(&0x1234).unwrap(), &[0x34, 0x12][..]);
    }

    #[test]
    fn test_signed_twos_complement() {
        assert_eq!(I16.encode(&-2).unwrap(), &[0xFE, 0xFF][..]);
        assert_eq!(I8.decode(&[0x80]).unwrap(), (1, i8::MIN));
    }

    #[test]
    fn test_decode_reads_prefix() {
        let (n, v) = U32.decode(&[1, 0, 0, 0, 0xAA, 0xBB]).unwrap();
        assert_eq!((n, v), (4, 1));
    }

    #[test]
    fn test_decode_insufficient_buffer() {
        assert_eq!(
            U64.decode(&[1, 2, 3]),
            Err(Error::EndOfBuffer {
                needed: 8,
                remaining: 3
            })
        );
        assert!(matches!(
            I32.decode(&[]),
            Err(Error::EndOfBuffer {
                needed: 4,
                remaining: 0
            })
        ));
    }
}
