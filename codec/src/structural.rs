//! Structural codecs for fixed-layout composite types.
//!
//! A structural codec is built once per type. Construction resolves the type's
//! [Shape] into a padding-free [ResolvedLayout] and fails if any member's size
//! depends on its value. The resulting codec is immutable: it always accepts the
//! same type, encodes to the same size, and uses the same [ByteOrder].
//!
//! [StructCodec] serves types known at compile time, so type identity is checked by
//! the compiler. [ShapeCodec] serves shapes only known at runtime and checks every
//! [Value] against its shape before encoding.

use crate::{util::prefix, ByteOrder, Codec, Error, Layout, ResolvedLayout, Shape, Value};
use bytes::BufMut;
use std::{fmt, marker::PhantomData};
use tracing::{debug, trace};

/// Resolves `shape`, logging the outcome.
fn resolve(shape: &Shape, order: ByteOrder) -> Result<ResolvedLayout, Error> {
    match ResolvedLayout::resolve(shape) {
        Ok(layout) => {
            debug!(
                %shape,
                %order,
                size = layout.size(),
                slots = layout.slots().len(),
                "resolved layout"
            );
            Ok(layout)
        }
        Err(err) => {
            debug!(%shape, %err, "rejected layout");
            Err(err)
        }
    }
}

/// Encodes and decodes values of the fixed-layout type `T`.
///
/// # Example
///
/// ```
/// use tessera_codec::{Codec, Layout, StructCodec};
///
/// #[derive(Debug, PartialEq, Layout)]
/// struct Pair {
///     a: i32,
///     b: i64,
/// }
///
/// let codec = StructCodec::<Pair>::new().unwrap();
/// let encoded = codec.encode(&Pair { a: 1, b: 2 }).unwrap();
/// assert_eq!(encoded, &[1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0][..]);
/// assert_eq!(codec.decode(&encoded).unwrap(), (12, Pair { a: 1, b: 2 }));
/// ```
pub struct StructCodec<T> {
    order: ByteOrder,
    layout: ResolvedLayout,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Layout> StructCodec<T> {
    /// Creates a little-endian codec for `T`.
    pub fn new() -> Result<Self, Error> {
        Self::with_order(ByteOrder::default())
    }

    /// Creates a codec for `T` using `order` for every multi-byte field.
    ///
    /// Fails with [Error::NotFixedSize] if `T` is a sequence or has a member whose
    /// size is not fixed.
    pub fn with_order(order: ByteOrder) -> Result<Self, Error> {
        let layout = resolve(&T::shape(), order)?;
        Ok(Self {
            order,
            layout,
            _marker: PhantomData,
        })
    }

    /// Creates a codec for the type of a representative value.
    pub fn for_value(_: &T, order: ByteOrder) -> Result<Self, Error> {
        Self::with_order(order)
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// The resolved layout of `T`.
    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }

    /// Encoded size of every value of `T`.
    pub fn fixed_size(&self) -> usize {
        self.layout.size()
    }
}

impl<T> Clone for StructCodec<T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            layout: self.layout.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for StructCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructCodec")
            .field("type", &std::any::type_name::<T>())
            .field("order", &self.order)
            .field("size", &self.layout.size())
            .finish()
    }
}

impl<T: Layout> Codec for StructCodec<T> {
    type Value<'a> = T;

    #[inline]
    fn size(&self, _: &T) -> usize {
        self.layout.size()
    }

    fn write(&self, value: &T, buf: &mut impl BufMut) -> Result<(), Error> {
        value.write_layout(buf, self.order)
    }

    #[inline]
    fn encoded_size(&self, _: &[u8]) -> Result<usize, Error> {
        Ok(self.layout.size())
    }

    fn decode<'a>(&self, buf: &'a [u8]) -> Result<(usize, T), Error> {
        let size = self.layout.size();
        let mut bytes = prefix(buf, size)?;
        let value = T::read_layout(&mut bytes, self.order)?;
        if !bytes.is_empty() {
            return Err(Error::LayoutMismatch(size, size - bytes.len()));
        }
        Ok((size, value))
    }
}

/// Encodes and decodes [Value]s of a [Shape] described at runtime.
///
/// # Example
///
/// ```
/// use tessera_codec::{ByteOrder, Codec, Error, Field, Kind, Shape, ShapeCodec, Value};
///
/// let shape = Shape::structure(
///     "Point",
///     vec![
///         Field::new("x", Shape::Scalar(Kind::I16)),
///         Field::new("y", Shape::Scalar(Kind::I16)),
///     ],
/// );
/// let codec = ShapeCodec::new(shape, ByteOrder::Big).unwrap();
///
/// let point = Value::Struct(vec![Value::I16(1), Value::I16(-1)]);
/// assert_eq!(codec.encode(&point).unwrap(), &[0x00, 0x01, 0xFF, 0xFF][..]);
///
/// let wrong = Value::Struct(vec![Value::I16(1), Value::U16(1)]);
/// assert!(matches!(codec.encode(&wrong), Err(Error::TypeMismatch { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct ShapeCodec {
    shape: Shape,
    order: ByteOrder,
    layout: ResolvedLayout,
}

impl ShapeCodec {
    /// Creates a codec for `shape` using `order` for every multi-byte field.
    ///
    /// Fails with [Error::NotFixedSize] if `shape` is a sequence or has a member
    /// whose size is not fixed.
    pub fn new(shape: Shape, order: ByteOrder) -> Result<Self, Error> {
        let layout = resolve(&shape, order)?;
        Ok(Self {
            shape,
            order,
            layout,
        })
    }

    /// Creates a codec for the shape of `T`.
    pub fn of<T: Layout>(order: ByteOrder) -> Result<Self, Error> {
        Self::new(T::shape(), order)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// The resolved layout of the shape.
    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }

    /// Encoded size of every value of the shape.
    pub fn fixed_size(&self) -> usize {
        self.layout.size()
    }
}

impl Codec for ShapeCodec {
    type Value<'a> = Value;

    #[inline]
    fn size(&self, _: &Value) -> usize {
        self.layout.size()
    }

    /// Fails with [Error::TypeMismatch], writing nothing, if `value` does not have
    /// exactly the codec's shape.
    fn write(&self, value: &Value, buf: &mut impl BufMut) -> Result<(), Error> {
        if !value.conforms(&self.shape) {
            trace!(expected = %self.shape, found = %value, "type mismatch");
            return Err(Error::TypeMismatch {
                expected: self.shape.to_string(),
                found: value.to_string(),
            });
        }
        value.write_value(buf, self.order)
    }

    #[inline]
    fn encoded_size(&self, _: &[u8]) -> Result<usize, Error> {
        Ok(self.layout.size())
    }

    fn decode<'a>(&self, buf: &'a [u8]) -> Result<(usize, Value), Error> {
        let size = self.layout.size();
        let mut bytes = prefix(buf, size)?;
        let value = Value::read_value(&self.shape, &mut bytes, self.order)?;
        Ok((size, value))
    }
}
