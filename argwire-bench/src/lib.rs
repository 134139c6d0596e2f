//! # argwire Bench
//!
//! Fixtures shared by the argwire benchmarks.

use argwire::{Encoder, Result, Serializable, Value};

/// Representative record with scalar fields and a nested array.
#[derive(Debug, Default, Clone, PartialEq, Serializable)]
pub struct Quote {
    /// Instrument identifier.
    pub instrument_id: u32,
    /// Best bid mantissa.
    pub bid: i64,
    /// Best ask mantissa.
    pub ask: i64,
    /// Sizes per book level.
    pub levels: Vec<u32>,
}

/// Builds `count` deterministic quotes with `depth` levels each.
#[must_use]
pub fn sample_quotes(count: usize, depth: usize) -> Vec<Quote> {
    (0..count)
        .map(|i| Quote {
            instrument_id: i as u32,
            bid: 10_000 + i as i64,
            ask: 10_001 + i as i64,
            levels: (0..depth).map(|d| (d * 100) as u32).collect(),
        })
        .collect()
}

/// Builds `count` deterministic scalar values.
#[must_use]
pub fn sample_prices(count: usize) -> Vec<i64> {
    (0..count as i64).map(|i| i * 7 - 3).collect()
}

/// Encodes a header scalar, a price array and a quote object array.
///
/// # Errors
/// Propagates encoder errors.
pub fn encode_message(prices: &[i64], quotes: &[Quote], verify: bool) -> Result<Vec<u8>> {
    let mut encoder = Encoder::builder().verify_records(verify).build();
    encoder.add(prices.len() as u32)?;
    encoder.add(prices)?;
    encoder.add(Value::records(&quotes))?;
    Ok(encoder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argwire::Decoder;

    #[test]
    fn test_encode_message_decodes() {
        let prices = sample_prices(4);
        let quotes = sample_quotes(3, 2);
        let bytes = encode_message(&prices, &quotes, true).unwrap();

        let mut decoder = Decoder::new(&bytes);
        assert_eq!(decoder.next_u32().unwrap(), 4);
        assert_eq!(decoder.next_array::<i64>().unwrap(), prices);
        assert_eq!(decoder.next_object_array::<Quote>().unwrap(), quotes);
    }
}
