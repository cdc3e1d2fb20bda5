//! Encode and decode fixed-layout data.
//!
//! # Overview
//!
//! A binary encoding library built around a uniform [Codec] contract:
//! - Every codec reports the exact size of a value's encoding before writing it
//! - Every codec can tell how many bytes at the front of a buffer make up one value
//! - Decoding untrusted input returns an [Error] rather than panicking
//!
//! # Codecs
//!
//! - [scalar]: one codec per fixed-width integer (`u8` through `i64`, little-endian)
//! - [Text16]: UTF-8 text behind a 2-byte big-endian length header
//! - [ByteView]: a fixed-length window of raw bytes that decodes without copying
//! - [Discard]: maps anything to zero bytes
//! - [ScalarCodec]: one of the integer codecs, picked from a [Kind] at runtime
//! - [StructCodec] and [ShapeCodec]: composite values with a fixed layout
//!
//! # Structural Codecs
//!
//! Any type implementing [Layout] can be encoded by a [StructCodec]. Fields are
//! written in declaration order, with no padding, using one [ByteOrder] for the whole
//! value. Construction fails if the layout contains a member whose size depends on
//! its value (such as `Vec<T>`, `String` or `usize`).
//!
//! ```
//! use tessera_codec::{ByteOrder, Codec, Layout, StructCodec};
//!
//! #[derive(Debug, PartialEq, Layout)]
//! struct Sample {
//!     channel: u8,
//!     level: i16,
//!     gains: [u16; 2],
//! }
//!
//! let codec = StructCodec::<Sample>::with_order(ByteOrder::Big).unwrap();
//! assert_eq!(codec.fixed_size(), 7);
//!
//! let sample = Sample { channel: 3, level: -2, gains: [1, 256] };
//! let encoded = codec.encode(&sample).unwrap();
//! assert_eq!(encoded, &[3, 0xFF, 0xFE, 0x00, 0x01, 0x01, 0x00][..]);
//! assert_eq!(codec.decode(&encoded).unwrap(), (7, sample));
//! ```
//!
//! # Rejected Layouts
//!
//! ```
//! use tessera_codec::{Error, Layout, StructCodec};
//!
//! #[derive(Layout)]
//! struct Message {
//!     id: u32,
//!     body: Vec<u8>,
//! }
//!
//! assert_eq!(
//!     StructCodec::<Message>::new().unwrap_err(),
//!     Error::NotFixedSize("body: Vec<u8>".into()),
//! );
//! ```

// Lets the derive's `::tessera_codec` paths resolve inside this crate.
extern crate self as tessera_codec;

pub mod codec;
pub mod config;
pub mod discard;
pub mod error;
pub mod layout;
pub mod registry;
pub mod scalar;
pub mod structural;
pub mod text;
pub mod types;
pub mod util;
pub mod value;
pub mod view;

// Re-export main types and traits
pub use codec::Codec;
pub use config::{ByteOrder, LenRange};
pub use discard::Discard;
pub use error::Error;
pub use layout::{Field, Kind, Layout, ResolvedLayout, Shape, Slot};
pub use registry::{codec_for, codec_of, element_codec, ScalarCodec};
pub use structural::{ShapeCodec, StructCodec};
pub use tessera_codec_derive::Layout;
pub use text::Text16;
pub use value::Value;
pub use view::ByteView;

#[doc(hidden)]
pub use bytes;
