#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::fmt::Debug;
use tessera_codec::{
    scalar::{I16, I32, I64, I8, U16, U32, U64, U8},
    ByteOrder, ByteView, Codec, Layout, ShapeCodec, StructCodec, Text16,
};

#[derive(Arbitrary, Debug, Clone, PartialEq, Layout)]
struct Inner {
    flag: bool,
    value: i16,
    pair: (u8, u64),
}

#[derive(Arbitrary, Debug, Clone, PartialEq, Layout)]
struct Outer {
    id: u32,
    inner: [Inner; 3],
    tail: i64,
}

#[derive(Arbitrary, Debug, Clone, PartialEq, Layout)]
struct Tuple(u16, [i8; 5], bool);

fn roundtrip<C, V>(codec: &C, value: V)
where
    C: for<'a> Codec<Value<'a> = V>,
    V: Debug + PartialEq,
{
    let encoded = codec.encode(&value).expect("Failed to encode a valid value!");
    assert_eq!(encoded.len(), codec.size(&value));
    assert_eq!(codec.encoded_size(&encoded).unwrap(), encoded.len());
    let (consumed, decoded) = codec.decode(&encoded).expect("Failed to decode!");
    assert_eq!(consumed, encoded.len());
    assert_eq!(decoded, value);
}

fn roundtrip_struct<T>(value: T, big: bool)
where
    T: Layout + Debug + Clone + PartialEq,
{
    let order = if big { ByteOrder::Big } else { ByteOrder::Little };
    let codec = StructCodec::<T>::with_order(order).unwrap();
    roundtrip(&codec, value.clone());

    // The shape codec must produce identical bytes.
    let encoded = codec.encode(&value).unwrap();
    let shape = ShapeCodec::of::<T>(order).unwrap();
    let (consumed, dynamic) = shape.decode(&encoded).unwrap();
    assert_eq!(consumed, encoded.len());
    assert_eq!(shape.encode(&dynamic).unwrap(), encoded);
}

fn roundtrip_text(text: String) {
    let codec = Text16::new();
    if text.len() > u16::MAX as usize {
        assert!(codec.encode(&text).is_err());
        return;
    }
    let encoded = codec.encode(&text).unwrap();
    assert_eq!(&encoded[..2], &(text.len() as u16).to_be_bytes());
    roundtrip(&codec, text);
}

fn roundtrip_view(bytes: &[u8]) {
    let codec = ByteView::new(bytes.len());
    assert!(std::ptr::eq(codec.encode_borrowed(bytes).unwrap(), bytes));
    let encoded = codec.encode(&bytes).unwrap();
    assert_eq!(encoded.len(), codec.size(&bytes));
    let (consumed, view) = codec.decode(&encoded).unwrap();
    assert_eq!(consumed, bytes.len());
    assert_eq!(view, bytes);
}

#[derive(Arbitrary, Debug)]
enum FuzzInput<'a> {
    // Structural
    Outer(Outer, bool),
    Tuple(Tuple, bool),
    Array([u32; 7], bool),

    // Variable length
    Text(String),
    View(&'a [u8]),

    // Scalars
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Outer(v, big) => roundtrip_struct(v, big),
        FuzzInput::Tuple(v, big) => roundtrip_struct(v, big),
        FuzzInput::Array(v, big) => roundtrip_struct(v, big),
        FuzzInput::Text(v) => roundtrip_text(v),
        FuzzInput::View(v) => roundtrip_view(v),
        FuzzInput::U8(v) => roundtrip(&U8, v),
        FuzzInput::U16(v) => roundtrip(&U16, v),
        FuzzInput::U32(v) => roundtrip(&U32, v),
        FuzzInput::U64(v) => roundtrip(&U64, v),
        FuzzInput::I8(v) => roundtrip(&I8, v),
        FuzzInput::I16(v) => roundtrip(&I16, v),
        FuzzInput::I32(v) => roundtrip(&I32, v),
        FuzzInput::I64(v) => roundtrip(&I64, v),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
