//! Picks a scalar codec from a kind known only at runtime.

use crate::{
    scalar::{I16, I32, I64, I8, U16, U32, U64, U8},
    Codec, Error, Kind, Layout, Shape, Value,
};
use bytes::BufMut;

/// One of the eight fixed-width integer codecs.
///
/// Encodes [Value]s of its own kind and rejects every other kind with
/// [Error::TypeMismatch].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScalarCodec {
    U8(U8),
    U16(U16),
    U32(U32),
    U64(U64),
    I8(I8),
    I16(I16),
    I32(I32),
    I64(I64),
}

impl ScalarCodec {
    /// Codec for values of type `T`.
    pub fn for_type<T: Layout>() -> Result<Self, Error> {
        match T::shape() {
            Shape::Scalar(kind) => codec_of(kind),
            shape => Err(Error::UnknownKind(shape.to_string())),
        }
    }

    /// Codec for the elements of a sequence or array type `T`.
    pub fn for_elements<T: Layout>() -> Result<Self, Error> {
        element_codec(&T::shape())
    }

    /// The kind this codec accepts.
    pub fn kind(&self) -> Kind {
        match self {
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
        }
    }
}

macro_rules! impl_scalar_dispatch {
    ($($variant:ident),*) => {
        impl Codec for ScalarCodec {
            type Value<'a> = Value;

            #[inline]
            fn size(&self, _: &Value) -> usize {
                self.kind().width()
            }

            fn write(&self, value: &Value, buf: &mut impl BufMut) -> Result<(), Error> {
                match (self, value) {
                    $( (Self::$variant(codec), Value::$variant(v)) => codec.write(v, buf), )*
                    _ => Err(Error::TypeMismatch {
                        expected: self.kind().to_string(),
                        found: value.to_string(),
                    }),
                }
            }

            fn encoded_size(&self, buf: &[u8]) -> Result<usize, Error> {
                match self {
                    $( Self::$variant(codec) => codec.encoded_size(buf), )*
                }
            }

            fn decode<'a>(&self, buf: &'a [u8]) -> Result<(usize, Value), Error> {
                match self {
                    $( Self::$variant(codec) => {
                        let (n, v) = codec.decode(buf)?;
                        Ok((n, Value::$variant(v)))
                    } )*
                }
            }
        }
    };
}

impl_scalar_dispatch!(U8, U16, U32, U64, I8, I16, I32, I64);

/// Returns the codec for `kind`.
///
/// Only the eight fixed-width integer kinds have one; anything else is
/// [Error::UnknownKind].
pub fn codec_of(kind: Kind) -> Result<ScalarCodec, Error> {
    Ok(match kind {
        Kind::U8 => ScalarCodec::U8(U8),
        Kind::U16 => ScalarCodec::U16(U16),
        Kind::U32 => ScalarCodec::U32(U32),
        Kind::U64 => ScalarCodec::U64(U64),
        Kind::I8 => ScalarCodec::I8(I8),
        Kind::I16 => ScalarCodec::I16(I16),
        Kind::I32 => ScalarCodec::I32(I32),
        Kind::I64 => ScalarCodec::I64(I64),
        Kind::Bool | Kind::F32 | Kind::F64 => return Err(Error::UnknownKind(kind.to_string())),
    })
}

/// Returns the codec for the kind of `value`.
pub fn codec_for(value: &Value) -> Result<ScalarCodec, Error> {
    match value.kind() {
        Some(kind) => codec_of(kind),
        None => Err(Error::UnknownKind(value.to_string())),
    }
}

/// Returns the codec for the elements of a sequence or array shape.
///
/// Fails with [Error::NotSlice] if `shape` has no elements, and with
/// [Error::UnknownKind] if its elements are not fixed-width integers.
pub fn element_codec(shape: &Shape) -> Result<ScalarCodec, Error> {
    match shape {
        Shape::Sequence(elem) | Shape::Array(elem, _) => match elem.as_ref() {
            Shape::Scalar(kind) => codec_of(*kind),
            elem => Err(Error::UnknownKind(elem.to_string())),
        },
        shape => Err(Error::NotSlice(shape.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Value::U8(0), ScalarCodec::U8(U8))]
    #[test_case(Value::U16(0), ScalarCodec::U16(U16))]
    #[test_case(Value::U32(0), ScalarCodec::U32(U32))]
    #[test_case(Value::U64(0), ScalarCodec::U64(U64))]
    #[test_case(Value::I8(0), ScalarCodec::I8(I8))]
    #[test_case(Value::I16(0), ScalarCodec::I16(I16))]
    #[test_case(Value::I32(0), ScalarCodec::I32(I32))]
    #[test_case(Value::I64(0), ScalarCodec::I64(I64))]
    fn test_codec_for(value: Value, want: ScalarCodec) {
        assert_eq!(codec_for(&value).unwrap(), want);
    }

    #[test]
    fn test_codec_for_unknown() {
        assert_eq!(
            codec_for(&Value::F64(1.0)),
            Err(Error::UnknownKind("f64".into()))
        );
        assert_eq!(
            codec_for(&Value::Bool(true)),
            Err(Error::UnknownKind("bool".into()))
        );
        assert!(matches!(
            codec_for(&Value::Array(vec![])),
            Err(Error::UnknownKind(_))
        ));
    }

    #[test]
    fn test_element_codec() {
        assert_eq!(ScalarCodec::for_elements::<Vec<u16>>(), Ok(ScalarCodec::U16(U16)));
        assert_eq!(ScalarCodec::for_elements::<Vec<u32>>(), Ok(ScalarCodec::U32(U32)));
        assert_eq!(ScalarCodec::for_elements::<[u64; 4]>(), Ok(ScalarCodec::U64(U64)));
        assert_eq!(
            ScalarCodec::for_elements::<Vec<usize>>(),
            Err(Error::UnknownKind("usize".into()))
        );
        assert_eq!(
            ScalarCodec::for_elements::<usize>(),
            Err(Error::NotSlice("usize".into()))
        );
        assert!(matches!(
            element_codec(&Shape::Scalar(Kind::I32)),
            Err(Error::NotSlice(_))
        ));
    }

    #[test]
    fn test_for_type() {
        assert_eq!(ScalarCodec::for_type::<i16>(), Ok(ScalarCodec::I16(I16)));
        assert!(matches!(
            ScalarCodec::for_type::<Vec<i16>>(),
            Err(Error::UnknownKind(_))
        ));
    }

    #[test]
    fn test_dispatched_round_trip() {
        let values = [
            Value::U8(0xAB),
            Value::U16(0x1234),
            Value::I32(-7),
            Value::U64(u64::MAX),
            Value::I64(i64::MIN),
        ];
        for value in values {
            let codec = codec_for(&value).unwrap();
            let encoded = codec.encode(&value).unwrap();
            assert_eq!(encoded.len(), codec.size(&value));
            assert_eq!(codec.encoded_size(&encoded).unwrap(), encoded.len());
            assert_eq!(codec.decode(&encoded).unwrap(), (encoded.len(), value));
        }
        assert_eq!(
            codec_of(Kind::U16).unwrap().encode(&Value::U16(0x1234)).unwrap(),
            &[0x34, 0x12][..]
        );
    }

    #[test]
    fn test_kind_mismatch() {
        let codec = codec_of(Kind::I32).unwrap();
        assert_eq!(
            codec.encode(&Value::U32(1)),
            Err(Error::TypeMismatch {
                expected: "i32".into(),
                found: "u32".into()
            })
        );
        assert!(codec.encode(&Value::I32(1)).is_ok());
    }

    #[test]
    fn test_decode_insufficient_buffer() {
        let codec = codec_of(Kind::U32).unwrap();
        assert_eq!(
            codec.decode(&[1, 2, 3]),
            Err(Error::EndOfBuffer {
                needed: 4,
                remaining: 3
            })
        );
        assert_eq!(codec.decode(&[1, 0, 0, 0]).unwrap(), (4, Value::U32(1)));
    }
}
