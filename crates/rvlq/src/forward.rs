//! Most significant digit first, terminated by the first byte with a clear
//! high bit.

use super::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Decoded {
  /// A terminating byte was found after `length` bytes of this buffer.
  Complete { value: u64, length: usize },
  /// The buffer ran out first. Pass `state` along with the next bytes.
  Incomplete { state: DecodeState, length: usize },
}

impl Decoded {
  pub fn is_complete(self) -> bool {
    matches!(self, Self::Complete { .. })
  }

  /// Bytes consumed from the buffer handed to this call.
  pub fn length(self) -> usize {
    match self {
      Self::Complete { length, .. } | Self::Incomplete { length, .. } => length,
    }
  }

  pub fn value(self) -> Option<u64> {
    match self {
      Self::Complete { value, .. } => Some(value),
      Self::Incomplete { .. } => None,
    }
  }
}

pub fn encode(n: u64) -> Vec<u8> {
  let mut v = Vec::new();
  encode_to_vec(n, &mut v);
  v
}

pub fn encode_to_vec(n: u64, v: &mut Vec<u8>) {
  v.extend_from_slice(Encoding::new(n).as_slice());
}

/// Write the encoding of `n` to the front of `buffer`, returning its length.
pub fn encode_to_slice(n: u64, buffer: &mut [u8]) -> Result<usize> {
  let encoding = Encoding::new(n);
  let digits = encoding.as_slice();

  let available = buffer.len();

  let destination = buffer
    .get_mut(..digits.len())
    .ok_or(Error::BufferTooSmall {
      needed: digits.len(),
      available,
    })?;

  destination.copy_from_slice(digits);

  Ok(digits.len())
}

/// Decode from the front of `buffer`, resuming from `state`.
///
/// Running out of bytes is not an error. The returned
/// [`Decoded::Incomplete`] carries the state to resume from once more bytes
/// of the same number are available. Bytes after the terminating byte are
/// never read.
pub fn decode(buffer: &[u8], state: DecodeState) -> Result<Decoded> {
  let mut n = state.value();

  for (i, &b) in buffer.iter().enumerate() {
    n = accumulate(n, b)?;

    if is_terminal(b) {
      return Ok(Decoded::Complete {
        value: n,
        length: i + 1,
      });
    }
  }

  let state = if buffer.is_empty() {
    state
  } else {
    DecodeState::Partial {
      value: n,
      length: state.length() + buffer.len(),
    }
  };

  Ok(Decoded::Incomplete {
    state,
    length: buffer.len(),
  })
}
