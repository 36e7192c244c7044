//! Forward encodings with their bytes in opposite order.
//!
//! Reading starts at the last byte of a buffer and walks toward the front,
//! which yields the digits most significant first. Since the end of the data
//! must already be known, there is no progressive mode.

use super::*;

pub fn encode(n: u64) -> Vec<u8> {
  let mut v = Vec::new();
  encode_to_vec(n, &mut v);
  v
}

pub fn encode_to_vec(n: u64, v: &mut Vec<u8>) {
  v.extend(Encoding::new(n).as_slice().iter().rev());
}

/// Write the reversed encoding of `n` to the front of `buffer`, returning its
/// length.
pub fn encode_to_slice(n: u64, buffer: &mut [u8]) -> Result<usize> {
  let encoding = Encoding::new(n);
  let digits = encoding.as_slice();

  if buffer.len() < digits.len() {
    return Err(Error::BufferTooSmall {
      needed: digits.len(),
      available: buffer.len(),
    });
  }

  for (destination, digit) in buffer.iter_mut().zip(digits.iter().rev()) {
    *destination = *digit;
  }

  Ok(digits.len())
}

/// Decode from the back of `buffer`, returning the value and the number of
/// trailing bytes it occupied.
pub fn decode(buffer: &[u8]) -> Result<(u64, usize)> {
  let mut n = 0;

  for (i, &b) in buffer.iter().rev().enumerate() {
    n = accumulate(n, b)?;

    if is_terminal(b) {
      return Ok((n, i + 1));
    }
  }

  Err(Error::Truncated {
    length: buffer.len(),
  })
}
