//! End-to-end tests for encoder/decoder sessions through the facade crate.

use argwire::prelude::*;

#[derive(Debug, Default, Clone, PartialEq, Serializable)]
struct Position {
    account: u32,
    instrument: u32,
    net: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serializable)]
struct Basket {
    id: u16,
    weights: Vec<u8>,
}

/// Writes four bytes but claims to have read eight.
#[derive(Debug, Default, Clone, PartialEq)]
struct Greedy(u32);

impl Serializable for Greedy {
    fn serialize_into(&self, out: &mut Vec<u8>) -> Result<()> {
        self.0.serialize_into(out)
    }

    fn deserialize(&mut self, data: &[u8], offset: usize) -> Result<usize> {
        self.0.deserialize(data, offset)?;
        Ok(offset + 8)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("argwire_core=trace"))
        .with_test_writer()
        .try_init();
}

#[test]
fn test_scalar_array_wire_bytes() {
    let mut encoder = Encoder::new();
    encoder.add(&[1u32, 2, 3]).unwrap();
    let bytes = encoder.finish();
    assert_eq!(
        bytes,
        vec![
            0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03, 0x00,
            0x00, 0x00,
        ]
    );

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(decoder.next_array::<u32>().unwrap(), vec![1, 2, 3]);
    assert_eq!(decoder.position(), 16);
}

#[test]
fn test_empty_array_wire_bytes() {
    let empty: Vec<u32> = Vec::new();
    let mut encoder = Encoder::new();
    encoder.add(&empty).unwrap();
    let bytes = encoder.finish();
    assert_eq!(bytes, vec![0, 0, 0, 0]);

    let mut decoder = Decoder::new(&bytes);
    assert!(decoder.next_array::<u32>().unwrap().is_empty());
    assert_eq!(decoder.position(), 4);
}

#[test]
fn test_full_message_roundtrip() {
    init_tracing();
    let positions = vec![
        Position {
            account: 1,
            instrument: 42,
            net: -300,
        },
        Position {
            account: 1,
            instrument: 43,
            net: 1_000_000,
        },
    ];

    let mut encoder = Encoder::builder()
        .initial_capacity(128)
        .verify_records(true)
        .build();
    encoder.add(2u8).unwrap();
    encoder.add(&[-1i64, 1]).unwrap();
    encoder.add_any(&vec![9u16, 8, 7]).unwrap();
    encoder.add(Value::records(&positions)).unwrap();
    assert_eq!(encoder.value_count(), 4);
    let bytes = encoder.finish();

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(decoder.next_scalar::<u8>().unwrap(), 2);
    assert_eq!(decoder.next_array::<i64>().unwrap(), vec![-1, 1]);
    assert_eq!(decoder.next_array::<u16>().unwrap(), vec![9, 8, 7]);
    assert_eq!(
        decoder.next_object_array::<Position>().unwrap(),
        positions
    );
    decoder.finish().unwrap();
}

#[test]
fn test_records_with_nested_arrays() {
    let baskets = [
        Basket {
            id: 1,
            weights: vec![50, 50],
        },
        Basket {
            id: 2,
            weights: vec![],
        },
        Basket {
            id: 3,
            weights: vec![100],
        },
    ];

    let mut encoder = Encoder::new();
    encoder.add_records(&baskets).unwrap();
    let bytes = encoder.finish();
    assert_eq!(bytes.len(), (2 + 4 + 2) + (2 + 4) + (2 + 4 + 1));

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(
        decoder.next_object_array::<Basket>().unwrap(),
        baskets.to_vec()
    );
    assert!(decoder.is_exhausted());
}

#[test]
fn test_empty_object_array_at_end() {
    let none: Vec<Position> = Vec::new();
    let mut encoder = Encoder::new();
    encoder.add(5u32).unwrap();
    encoder.add(Value::records(&none)).unwrap();
    let bytes = encoder.finish();
    assert_eq!(bytes.len(), 4);

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(decoder.next_u32().unwrap(), 5);
    assert!(decoder.next_object_array::<Position>().unwrap().is_empty());
}

#[test]
fn test_greedy_record_is_rejected_both_ways() {
    let records = vec![Greedy(1)];

    let mut checked = Encoder::builder().verify_records(true).build();
    let result = checked.add(Value::records(&records));
    assert_eq!(
        result,
        Err(Error::RecordLengthMismatch {
            produced: 4,
            consumed: 8,
        })
    );
    assert!(checked.is_empty());

    let mut unchecked = Encoder::builder().verify_records(false).build();
    unchecked.add(Value::records(&records)).unwrap();
    let bytes = unchecked.finish();

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(
        decoder.next_object_array::<Greedy>(),
        Err(Error::MisalignedDecode {
            start: 0,
            end: 8,
            limit: 4,
        })
    );
    assert_eq!(decoder.position(), 0);
}

#[test]
fn test_unsupported_type_is_fatal_for_the_call() {
    let mut encoder = Encoder::new();
    encoder.add(1u8).unwrap();

    let result = encoder.add_any(&"text");
    assert!(matches!(result, Err(Error::UnsupportedType { .. })));
    assert_eq!(encoder.as_bytes(), &[1]);
}

#[test]
fn test_capacity_limit() {
    let mut encoder = Encoder::builder().max_message_size(8).build();
    encoder.add(1u64).unwrap();
    assert_eq!(
        encoder.add(1u8),
        Err(Error::CapacityExceeded {
            required: 9,
            limit: 8,
        })
    );
    assert_eq!(encoder.len(), 8);
}

#[test]
fn test_value_after_object_array_is_read_as_records() {
    init_tracing();
    let records = vec![1u32];
    let mut encoder = Encoder::new();
    encoder.add(Value::records(&records)).unwrap();
    encoder.add(2u32).unwrap();
    let bytes = encoder.finish();

    let mut decoder = Decoder::new(&bytes);
    assert_eq!(decoder.next_object_array::<u32>().unwrap(), vec![1, 2]);
}

#[test]
fn test_mismatched_decode_type_is_malformed() {
    let mut encoder = Encoder::new();
    encoder.add(&[1u8, 2, 3]).unwrap();
    let bytes = encoder.finish();

    let mut decoder = Decoder::new(&bytes);
    assert!(matches!(
        decoder.next_array::<u32>(),
        Err(Error::MalformedInput { .. })
    ));
    assert_eq!(decoder.next_array::<u8>().unwrap(), vec![1, 2, 3]);
}
