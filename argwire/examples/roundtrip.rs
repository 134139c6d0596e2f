//! Encodes a call's arguments, then decodes them as the receiving side would.
//!
//! Run with `RUST_LOG=argwire_core=trace` to see every append and decode.

use argwire::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Clone, PartialEq, Serializable)]
struct Order {
    id: u64,
    side: u8,
    qty: u32,
    price_mantissa: i64,
}

fn encode_call(orders: &[Order]) -> Result<Vec<u8>> {
    let mut encoder = Encoder::builder()
        .initial_capacity(256)
        .max_message_size(64 * 1024)
        .build();
    encoder.add(1u32)?;
    encoder.add(&[3u16, 5, 8])?;
    encoder.add_records(orders)?;
    Ok(encoder.finish())
}

fn decode_call(bytes: &[u8]) -> Result<(u32, Vec<u16>, Vec<Order>)> {
    let mut decoder = Decoder::new(bytes);
    let version = decoder.next_u32()?;
    let venues = decoder.next_array::<u16>()?;
    let orders = decoder.next_object_array::<Order>()?;
    decoder.finish()?;
    Ok((version, venues, orders))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let orders = vec![
        Order {
            id: 1,
            side: 0,
            qty: 100,
            price_mantissa: 15050,
        },
        Order {
            id: 2,
            side: 1,
            qty: 25,
            price_mantissa: 15100,
        },
    ];

    let bytes = encode_call(&orders)?;
    tracing::info!("Encoded {} bytes", bytes.len());

    let (version, venues, decoded) = decode_call(&bytes)?;
    tracing::info!(
        "Decoded version={} venues={:?} orders={}",
        version,
        venues,
        decoded.len()
    );
    assert_eq!(decoded, orders);
    Ok(())
}
