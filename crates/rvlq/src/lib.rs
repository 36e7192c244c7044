//! Big-endian variable-length quantities.
//!
//! A value is split into 7-bit digits, most significant digit first. Every
//! byte except the last carries the continuation bit, so a reader moving
//! forward knows where the number ends. The reversed form is the same bytes in
//! opposite order, and is parsed by walking backward from a known end.

use thiserror::Error;

pub use {decode_state::DecodeState, forward::Decoded};

mod decode_state;
pub mod forward;
pub mod reversed;

/// Longest encoding of a `u64`.
pub const MAX_LENGTH: usize = 10;

const CONTINUATION: u8 = 0b1000_0000;
const DIGIT: u8 = 0b0111_1111;

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
  #[error("encoding needs {needed} bytes but buffer holds {available}")]
  BufferTooSmall { needed: usize, available: usize },
  #[error("value does not fit in 64 bits")]
  Overflow,
  #[error("no terminating byte in {length} byte buffer")]
  Truncated { length: usize },
}

/// Number of bytes needed to encode `n`.
pub fn length(n: u64) -> usize {
  let mut length = 1;
  let mut n = n >> 7;

  while n > 0 {
    n >>= 7;
    length += 1;
  }

  length
}

/// The forward encoding of a value, held inline.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Encoding {
  buffer: [u8; MAX_LENGTH],
  start: usize,
}

impl Encoding {
  pub fn new(mut n: u64) -> Self {
    let mut buffer = [0; MAX_LENGTH];
    let mut i = MAX_LENGTH - 1;

    buffer[i] = n.to_le_bytes()[0] & DIGIT;

    while n > u64::from(DIGIT) {
      n >>= 7;
      i -= 1;
      buffer[i] = n.to_le_bytes()[0] | CONTINUATION;
    }

    Self { buffer, start: i }
  }

  pub fn as_slice(&self) -> &[u8] {
    &self.buffer[self.start..]
  }

  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> usize {
    MAX_LENGTH - self.start
  }

  /// The last byte of the forward encoding, and the first of the reversed
  /// one. Its high bit is always clear.
  pub fn terminal(&self) -> u8 {
    self.buffer[MAX_LENGTH - 1]
  }
}

fn accumulate(n: u64, byte: u8) -> Result<u64> {
  if n > u64::MAX >> 7 {
    return Err(Error::Overflow);
  }

  Ok(n << 7 | u64::from(byte & DIGIT))
}

fn is_terminal(byte: u8) -> bool {
  byte & CONTINUATION == 0
}
