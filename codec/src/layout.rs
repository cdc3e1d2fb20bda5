//! Type-layout introspection.
//!
//! A [Layout] type describes its declared [Shape] and knows how to visit its fields,
//! in declaration order, against a buffer. [ResolvedLayout] turns a [Shape] into the
//! padding-free byte layout structural codecs encode with, rejecting any shape whose
//! size cannot be known without looking at a value.

use crate::{ByteOrder, Error};
use bytes::{Buf, BufMut};
use std::fmt;

/// The numeric interpretation of a scalar field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    Bool,
    F32,
    F64,
}

impl Kind {
    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::U8 | Self::I8 | Self::Bool => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }

    /// Returns true for the two's-complement integer kinds.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Returns true for the eight fixed-width integer kinds.
    pub const fn is_integer(self) -> bool {
        !matches!(self, Self::Bool | Self::F32 | Self::F64)
    }

    /// The Rust name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Bool => "bool",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The declared shape of a type.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A single numeric or boolean value.
    Scalar(Kind),
    /// A fixed number of elements of one shape.
    Array(Box<Shape>, usize),
    /// Named (or, for tuples, positional) fields in declaration order.
    Struct { name: String, fields: Vec<Field> },
    /// A run of elements whose count is only known from a value.
    Sequence(Box<Shape>),
    /// UTF-8 text of any length.
    Text,
    /// An integer whose width depends on the target platform.
    Native(&'static str),
}

impl Shape {
    /// Shape of a struct named `name`.
    pub fn structure(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::Struct {
            name: name.into(),
            fields,
        }
    }

    /// Shape of `len` elements of `elem`.
    pub fn array(elem: Shape, len: usize) -> Self {
        Self::Array(Box::new(elem), len)
    }

    /// Shape of a variable-length run of `elem`.
    pub fn sequence(elem: Shape) -> Self {
        Self::Sequence(Box::new(elem))
    }

    /// Returns true for shapes that are themselves runs of elements of unknown count.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Text)
    }

    /// Returns the encoded size if every value of this shape has the same size.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Self::Scalar(kind) => Some(kind.width()),
            Self::Array(elem, len) => elem.fixed_size()?.checked_mul(*len),
            Self::Struct { fields, .. } => fields
                .iter()
                .try_fold(0usize, |acc, f| acc.checked_add(f.shape.fixed_size()?)),
            Self::Sequence(_) | Self::Text | Self::Native(_) => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Array(elem, len) => write!(f, "[{elem}; {len}]"),
            Self::Struct { name, fields } if name.is_empty() => {
                f.write_str("(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", field.shape)?;
                }
                if fields.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::Struct { name, fields } => {
                f.write_str(name)?;
                if fields.is_empty() {
                    return Ok(());
                }
                f.write_str(" { ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.shape)?;
                }
                f.write_str(" }")
            }
            Self::Sequence(elem) => write!(f, "Vec<{elem}>"),
            Self::Text => f.write_str("String"),
            Self::Native(name) => f.write_str(name),
        }
    }
}

/// A named member of a [Shape::Struct].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub shape: Shape,
}

impl Field {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// Types whose layout can be introspected and visited field by field.
///
/// Implemented for the fixed-width primitives, `bool`, arrays, tuples and `()`.
/// `Vec<T>`, `String`, `usize` and `isize` describe themselves so that structural
/// codecs can reject them, but refuse to be written or read.
///
/// Structs implement it with `#[derive(Layout)]`:
///
/// ```
/// use tessera_codec::{Layout, Shape};
///
/// #[derive(Layout)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// assert_eq!(Point::shape().fixed_size(), Some(8));
/// ```
pub trait Layout: Sized {
    /// Describes the declared shape of the type.
    fn shape() -> Shape;

    /// Writes every field, in declaration order, using `order` for multi-byte values.
    fn write_layout(&self, buf: &mut impl BufMut, order: ByteOrder) -> Result<(), Error>;

    /// Reads every field, in declaration order, using `order` for multi-byte values.
    fn read_layout(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error>;
}

/// One run of same-kind scalars at a fixed offset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slot {
    /// Field path from the root, e.g. `header.flags` or `samples[].left`.
    ///
    /// `[]` marks an array of composite elements; see [Slot::repeat].
    pub path: String,
    /// Byte offset of the first run from the start of the encoding.
    pub offset: usize,
    pub kind: Kind,
    /// Number of consecutive scalars in one run (the length, for scalar arrays).
    pub count: usize,
    /// Enclosing arrays of composite elements, outermost first, as `(len, stride)`.
    ///
    /// The run recurs `len` times per level, `stride` bytes apart. Empty when the run
    /// occurs once.
    pub repeat: Vec<(usize, usize)>,
}

impl Slot {
    /// Bytes covered by one run.
    pub fn width(&self) -> usize {
        self.kind.width() * self.count
    }

    /// Number of times the run occurs in the encoding.
    pub fn occurrences(&self) -> usize {
        self.repeat.iter().map(|(len, _)| len).product()
    }
}

/// The byte layout of a fixed-size shape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedLayout {
    slots: Vec<Slot>,
    size: usize,
}

impl ResolvedLayout {
    /// Resolves `shape` into its padding-free layout.
    ///
    /// Fails with [Error::NotFixedSize] if `shape` is itself a sequence, or if any
    /// member's size depends on its value.
    pub fn resolve(shape: &Shape) -> Result<Self, Error> {
        if shape.is_sequence() {
            return Err(Error::NotFixedSize(format!(
                "{shape} is a sequence, its size is not fixed"
            )));
        }
        let mut resolved = Self {
            slots: Vec::new(),
            size: 0,
        };
        resolved.push(shape, String::new())?;
        Ok(resolved)
    }

    fn push(&mut self, shape: &Shape, path: String) -> Result<(), Error> {
        match shape {
            Shape::Scalar(kind) => self.push_slot(path, *kind, 1),
            Shape::Array(elem, len) => match elem.as_ref() {
                Shape::Scalar(kind) => self.push_slot(path, *kind, *len),
                elem => self.push_repeated(elem, *len, path),
            },
            Shape::Struct { fields, .. } => {
                for field in fields {
                    let path = if path.is_empty() {
                        field.name.clone()
                    } else {
                        format!("{path}.{}", field.name)
                    };
                    self.push(&field.shape, path)?;
                }
                Ok(())
            }
            Shape::Sequence(_) | Shape::Text | Shape::Native(_) => {
                let at = if path.is_empty() { "value" } else { &path };
                Err(Error::NotFixedSize(format!("{at}: {shape}")))
            }
        }
    }

    /// Resolves `elem` once and lays its slots out `len` times.
    ///
    /// Zero-width elements contribute no slots, however long the array.
    fn push_repeated(&mut self, elem: &Shape, len: usize, path: String) -> Result<(), Error> {
        let mut element = Self {
            slots: Vec::new(),
            size: 0,
        };
        element.push(elem, format!("{path}[]"))?;
        let stride = element.size;
        let base = self.size;
        self.size = stride
            .checked_mul(len)
            .and_then(|width| base.checked_add(width))
            .ok_or_else(|| Error::NotFixedSize(format!("{path}: size overflows usize")))?;
        if stride == 0 || len == 0 {
            return Ok(());
        }
        for mut slot in element.slots {
            slot.offset += base;
            slot.repeat.insert(0, (len, stride));
            self.slots.push(slot);
        }
        Ok(())
    }

    fn push_slot(&mut self, path: String, kind: Kind, count: usize) -> Result<(), Error> {
        let offset = self.size;
        self.size = kind
            .width()
            .checked_mul(count)
            .and_then(|width| offset.checked_add(width))
            .ok_or_else(|| Error::NotFixedSize(format!("{path}: size overflows usize")))?;
        self.slots.push(Slot {
            path,
            offset,
            kind,
            count,
            repeat: Vec::new(),
        });
        Ok(())
    }

    /// Total encoded size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Scalar runs in encoding order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}
