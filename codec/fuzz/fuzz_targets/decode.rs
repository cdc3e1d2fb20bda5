#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tessera_codec::{ByteOrder, Codec, Layout, ShapeCodec, StructCodec, Text16};

#[derive(Debug, PartialEq, Layout)]
struct Record {
    kind: u8,
    valid: bool,
    ratio: f64,
    samples: [i32; 4],
}

#[derive(Arbitrary, Debug)]
struct FuzzInput<'a> {
    big: bool,
    limit: u16,
    data: &'a [u8],
}

fn fuzz(input: FuzzInput) {
    let order = if input.big { ByteOrder::Big } else { ByteOrder::Little };

    // Decoding arbitrary bytes either fails or consumes exactly the fixed size.
    let codec = StructCodec::<Record>::with_order(order).unwrap();
    match codec.decode(input.data) {
        Ok((consumed, record)) => {
            assert_eq!(consumed, codec.fixed_size());
            let encoded = codec.encode(&record).unwrap();
            // NaN payloads survive since floats are copied bit for bit.
            assert_eq!(&encoded[..], &input.data[..consumed]);
        }
        Err(_) => assert!(input.data.len() < codec.fixed_size() || input.data[1] > 1),
    }

    let shape = ShapeCodec::of::<Record>(order).unwrap();
    if let Ok((consumed, value)) = shape.decode(input.data) {
        assert_eq!(&shape.encode(&value).unwrap()[..], &input.data[..consumed]);
    }

    let text = Text16::with_limit(..=input.limit as usize);
    if let Ok((consumed, decoded)) = text.decode(input.data) {
        assert!(decoded.len() <= input.limit as usize);
        assert_eq!(consumed, text.encoded_size(input.data).unwrap());
        assert_eq!(&text.encode(&decoded).unwrap()[..], &input.data[..consumed]);
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
