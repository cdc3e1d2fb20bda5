//! Values whose shape is only known at runtime.

use crate::{ByteOrder, Error, Kind, Layout, Shape};
use bytes::{Buf, BufMut};
use std::fmt;

/// A dynamically shaped value.
///
/// Struct fields are positional, in the declaration order of the [Shape] the value
/// is encoded against.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Bool(bool),
    F32(f32),
    F64(f64),
    Array(Vec<Value>),
    Struct(Vec<Value>),
}

impl Value {
    /// The scalar kind, or `None` for arrays and structs.
    pub fn kind(&self) -> Option<Kind> {
        Some(match self {
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::Bool(_) => Kind::Bool,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::Array(_) | Self::Struct(_) => return None,
        })
    }

    /// Returns true if the value has exactly the given shape.
    pub fn conforms(&self, shape: &Shape) -> bool {
        match (self, shape) {
            (Self::Array(items), Shape::Array(elem, len)) => {
                items.len() == *len && items.iter().all(|item| item.conforms(elem))
            }
            (Self::Struct(values), Shape::Struct { fields, .. }) => {
                values.len() == fields.len()
                    && values.iter().zip(fields).all(|(v, f)| v.conforms(&f.shape))
            }
            (value, Shape::Scalar(kind)) => value.kind() == Some(*kind),
            _ => false,
        }
    }

    /// Writes the value field by field. The caller checks [Value::conforms] first.
    pub(crate) fn write_value(
        &self,
        buf: &mut impl BufMut,
        order: ByteOrder,
    ) -> Result<(), Error> {
        match self {
            Self::U8(v) => v.write_layout(buf, order),
            Self::U16(v) => v.write_layout(buf, order),
            Self::U32(v) => v.write_layout(buf, order),
            Self::U64(v) => v.write_layout(buf, order),
            Self::I8(v) => v.write_layout(buf, order),
            Self::I16(v) => v.write_layout(buf, order),
            Self::I32(v) => v.write_layout(buf, order),
            Self::I64(v) => v.write_layout(buf, order),
            Self::Bool(v) => v.write_layout(buf, order),
            Self::F32(v) => v.write_layout(buf, order),
            Self::F64(v) => v.write_layout(buf, order),
            Self::Array(values) | Self::Struct(values) => {
                for value in values {
                    value.write_value(buf, order)?;
                }
                Ok(())
            }
        }
    }

    /// Reads a value of `shape`.
    pub(crate) fn read_value(
        shape: &Shape,
        buf: &mut impl Buf,
        order: ByteOrder,
    ) -> Result<Self, Error> {
        match shape {
            Shape::Scalar(kind) => Self::read_scalar(*kind, buf, order),
            Shape::Array(elem, len) => {
                let mut items = Vec::with_capacity(*len);
                for _ in 0..*len {
                    items.push(Self::read_value(elem, buf, order)?);
                }
                Ok(Self::Array(items))
            }
            Shape::Struct { fields, .. } => {
                let mut values = Vec::with_capacity(fields.len());
                for field in fields {
                    values.push(Self::read_value(&field.shape, buf, order)?);
                }
                Ok(Self::Struct(values))
            }
            Shape::Sequence(_) | Shape::Text | Shape::Native(_) => {
                Err(Error::NotFixedSize(shape.to_string()))
            }
        }
    }

    /// Reads one scalar of `kind`.
    pub(crate) fn read_scalar(
        kind: Kind,
        buf: &mut impl Buf,
        order: ByteOrder,
    ) -> Result<Self, Error> {
        Ok(match kind {
            Kind::U8 => Self::U8(u8::read_layout(buf, order)?),
            Kind::U16 => Self::U16(u16::read_layout(buf, order)?),
            Kind::U32 => Self::U32(u32::read_layout(buf, order)?),
            Kind::U64 => Self::U64(u64::read_layout(buf, order)?),
            Kind::I8 => Self::I8(i8::read_layout(buf, order)?),
            Kind::I16 => Self::I16(i16::read_layout(buf, order)?),
            Kind::I32 => Self::I32(i32::read_layout(buf, order)?),
            Kind::I64 => Self::I64(i64::read_layout(buf, order)?),
            Kind::Bool => Self::Bool(bool::read_layout(buf, order)?),
            Kind::F32 => Self::F32(f32::read_layout(buf, order)?),
            Kind::F64 => Self::F64(f64::read_layout(buf, order)?),
        })
    }
}

impl fmt::Display for Value {
    /// Describes the value's shape, as used in type mismatch errors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(items) => {
                f.write_str("[")?;
                list(f, items)?;
                f.write_str("]")
            }
            Self::Struct(values) => {
                f.write_str("{")?;
                list(f, values)?;
                f.write_str("}")
            }
            scalar => match scalar.kind() {
                Some(kind) => write!(f, "{kind}"),
                None => Ok(()),
            },
        }
    }
}

fn list(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

macro_rules! impl_from_scalar {
    ($($type:ty => $variant:ident),*) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar!(
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    bool => Bool, f32 => F32, f64 => F64
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    fn point() -> Shape {
        Shape::structure(
            "Point",
            vec![
                Field::new("x", Shape::Scalar(Kind::I32)),
                Field::new("y", Shape::Scalar(Kind::I32)),
            ],
        )
    }

    #[test]
    fn test_conforms() {
        let p = Value::Struct(vec![Value::I32(1), Value::I32(2)]);
        assert!(p.conforms(&point()));
        assert!(!Value::Struct(vec![Value::I32(1)]).conforms(&point()));
        assert!(!Value::Struct(vec![Value::I32(1), Value::U32(2)]).conforms(&point()));
        assert!(!Value::I32(1).conforms(&point()));

        let arr = Shape::array(Shape::Scalar(Kind::U8), 2);
        assert!(Value::Array(vec![1u8.into(), 2u8.into()]).conforms(&arr));
        assert!(!Value::Array(vec![1u8.into()]).conforms(&arr));
        assert!(!Value::Array(vec![]).conforms(&Shape::sequence(Shape::Scalar(Kind::U8))));
    }

    #[test]
    fn test_write_read() {
        let value = Value::Struct(vec![Value::I32(-1), Value::I32(0x0102)]);
        let mut buf = Vec::new();
        value.write_value(&mut buf, ByteOrder::Big).unwrap();
        assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x01, 0x02]);

        let mut reader = &buf[..];
        let decoded = Value::read_value(&point(), &mut reader, ByteOrder::Big).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_display() {
        let value = Value::Struct(vec![
            Value::U8(1),
            Value::Array(vec![Value::Bool(true), Value::Bool(false)]),
        ]);
        assert_eq!(value.to_string(), "{u8, [bool, bool]}");
    }
}
