//! Layout implementations for Rust primitive types.
//!
//! # Fixed-size vs Variable-size
//!
//! Fixed-width integers, floats, `bool` and arrays of them have a size known from
//! their type alone and can be used as structural fields.
//!
//! `usize` and `isize` are the exception among integers: their width depends on the
//! target, so the same type would encode differently across architectures. `Vec<T>`
//! and `String` carry their length in the value. All four describe themselves so
//! structural codec construction can reject them by name, but they refuse to be
//! written or read.
//!
//! ## Encoding
//! * Integers are two's-complement in the requested [ByteOrder].
//! * Floats are their IEEE-754 bit pattern in the requested [ByteOrder].
//! * `bool` is a single `0` or `1` byte.

use crate::{util::at_least, ByteOrder, Error, Kind, Layout, Shape};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $kind:ident, $get_be:ident, $get_le:ident, $put_be:ident, $put_le:ident) => {
        impl Layout for $type {
            #[inline]
            fn shape() -> Shape {
                Shape::Scalar(Kind::$kind)
            }

            #[inline]
            fn write_layout(&self, buf: &mut impl BufMut, order: ByteOrder) -> Result<(), Error> {
                match order {
                    ByteOrder::Little => buf.$put_le(*self),
                    ByteOrder::Big => buf.$put_be(*self),
                }
                Ok(())
            }

            #[inline]
            fn read_layout(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(match order {
                    ByteOrder::Little => buf.$get_le(),
                    ByteOrder::Big => buf.$get_be(),
                })
            }
        }
    };
}

impl_numeric!(u8, U8, get_u8, get_u8, put_u8, put_u8);
impl_numeric!(u16, U16, get_u16, get_u16_le, put_u16, put_u16_le);
impl_numeric!(u32, U32, get_u32, get_u32_le, put_u32, put_u32_le);
impl_numeric!(u64, U64, get_u64, get_u64_le, put_u64, put_u64_le);
impl_numeric!(i8, I8, get_i8, get_i8, put_i8, put_i8);
impl_numeric!(i16, I16, get_i16, get_i16_le, put_i16, put_i16_le);
impl_numeric!(i32, I32, get_i32, get_i32_le, put_i32, put_i32_le);
impl_numeric!(i64, I64, get_i64, get_i64_le, put_i64, put_i64_le);
impl_numeric!(f32, F32, get_f32, get_f32_le, put_f32, put_f32_le);
impl_numeric!(f64, F64, get_f64, get_f64_le, put_f64, put_f64_le);

// Bool implementation
impl Layout for bool {
    #[inline]
    fn shape() -> Shape {
        Shape::Scalar(Kind::Bool)
    }

    #[inline]
    fn write_layout(&self, buf: &mut impl BufMut, _: ByteOrder) -> Result<(), Error> {
        buf.put_u8(u8::from(*self));
        Ok(())
    }

    #[inline]
    fn read_layout(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        match u8::read_layout(buf, order)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }
}

// Constant-size array implementation
impl<T: Layout, const N: usize> Layout for [T; N] {
    fn shape() -> Shape {
        Shape::array(T::shape(), N)
    }

    #[inline]
    fn write_layout(&self, buf: &mut impl BufMut, order: ByteOrder) -> Result<(), Error> {
        for item in self {
            item.write_layout(buf, order)?;
        }
        Ok(())
    }

    fn read_layout(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::read_layout(buf, order)?);
        }
        items.try_into().map_err(|items: Vec<T>| {
            Error::InvalidData(format!("[_; {N}]"), format!("read {} elements", items.len()))
        })
    }
}

// Unit implementation
impl Layout for () {
    fn shape() -> Shape {
        Shape::structure("()", Vec::new())
    }

    #[inline]
    fn write_layout(&self, _: &mut impl BufMut, _: ByteOrder) -> Result<(), Error> {
        Ok(())
    }

    #[inline]
    fn read_layout(_: &mut impl Buf, _: ByteOrder) -> Result<Self, Error> {
        Ok(())
    }
}

// Shapes that have no fixed layout
macro_rules! impl_unsized {
    ($type:ty, $shape:expr $(, $generic:ident)?) => {
        impl$(<$generic: Layout>)? Layout for $type {
            fn shape() -> Shape {
                $shape
            }

            fn write_layout(&self, _: &mut impl BufMut, _: ByteOrder) -> Result<(), Error> {
                Err(Error::NotFixedSize(Self::shape().to_string()))
            }

            fn read_layout(_: &mut impl Buf, _: ByteOrder) -> Result<Self, Error> {
                Err(Error::NotFixedSize(Self::shape().to_string()))
            }
        }
    };
}

impl_unsized!(usize, Shape::Native("usize"));
impl_unsized!(isize, Shape::Native("isize"));
impl_unsized!(String, Shape::Text);
impl_unsized!(Vec<T>, Shape::sequence(T::shape()), T);
