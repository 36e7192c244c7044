use {super::*, std::num::ParseIntError};

/// A padding length, encoded into exactly that many bytes.
///
/// The block for a value `n` begins with the forward encoding of `n`, ends
/// with the reversed encoding of `n`, and is filled in between with the last
/// byte of the forward encoding. That byte is also the first byte of the
/// reversed encoding, so the filler run and the tail blend together and the
/// block reads the same way from both ends. For `n` below 128 the block is
/// simply `n` copies of the byte `n`.
///
/// A padding of zero encodes to nothing at all, which leaves no length for a
/// reader to find. [`Varpad::padding`] never produces zero for a modulus of 2
/// or more, and [`envelope`] refuses to build envelopes without a marker.
#[derive(
  Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Varpad(pub usize);

#[derive(Debug, Error)]
pub enum Error {
  #[error("not enough bytes in buffer to store {padding} padding bytes (buffer size is {capacity})")]
  InsufficientCapacity { padding: usize, capacity: usize },
  #[error("padding of {value} bytes is too large for this platform")]
  Oversized { value: u64 },
  #[error(transparent)]
  Codec(#[from] rvlq::Error),
  #[error("modulus {modulus} produces no padding, so there would be no length to read back")]
  Modulus { modulus: usize },
  #[error("padding length still unterminated after {length} bytes")]
  Unterminated { length: usize },
  #[error("padding of {padding} bytes overruns {length} byte envelope")]
  Overrun { padding: usize, length: usize },
  #[error("padding of {padding} bytes is shorter than its {length} byte length marker")]
  Undersized { padding: usize, length: usize },
  #[error("I/O error reading padding")]
  Io(#[from] io::Error),
  #[error("invalid padding: {0}")]
  Parse(#[from] ParseIntError),
}

/// Result of reading padding from the front of a buffer.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Progress {
  /// The leading length run ended after `length` bytes of this buffer.
  Complete { padding: Varpad, length: usize },
  /// More bytes are needed. Hand `state` to the next call.
  Incomplete { state: DecodeState, length: usize },
}

impl Progress {
  pub fn is_complete(self) -> bool {
    matches!(self, Self::Complete { .. })
  }

  pub fn length(self) -> usize {
    match self {
      Self::Complete { length, .. } | Self::Incomplete { length, .. } => length,
    }
  }
}

impl Varpad {
  /// Padding needed to round `length` up to a multiple of `modulus`.
  ///
  /// A modulus below 2 disables padding. Content that is already aligned gets
  /// a full `modulus` of padding rather than none.
  pub fn padding(length: usize, modulus: usize) -> Self {
    if modulus < 2 {
      return Self(0);
    }

    Self(modulus - length % modulus)
  }

  pub fn n(self) -> usize {
    self.0
  }

  /// Encode into the first `self.n()` bytes of `buffer`, leaving the rest
  /// untouched. Returns the number of bytes written.
  pub fn encode_to(self, buffer: &mut [u8]) -> Result<usize, Error> {
    if self.0 == 0 {
      return Ok(0);
    }

    let capacity = buffer.len();

    let block = buffer
      .get_mut(..self.0)
      .ok_or(Error::InsufficientCapacity {
        padding: self.0,
        capacity,
      })?;

    self.write(block);

    Ok(self.0)
  }

  pub fn encode(self) -> Vec<u8> {
    let mut block = vec![0; self.0];
    self.write(&mut block);
    block
  }

  /// Read padding from the front of `buffer`, resuming from `state`.
  ///
  /// Only the leading length run is examined, so any prefix of a block that
  /// covers it is enough.
  pub fn decode_from_beginning(buffer: &[u8], state: DecodeState) -> Result<Progress, Error> {
    Ok(match rvlq::forward::decode(buffer, state)? {
      Decoded::Complete { value, length } => Progress::Complete {
        padding: value.try_into()?,
        length,
      },
      Decoded::Incomplete { state, length } => Progress::Incomplete { state, length },
    })
  }

  /// Read padding from the back of `buffer`, returning it along with the
  /// number of trailing bytes its length run occupied.
  pub fn decode_from_end(buffer: &[u8]) -> Result<(Self, usize), Error> {
    let (value, length) = rvlq::reversed::decode(buffer)?;
    Ok((value.try_into()?, length))
  }

  fn write(self, block: &mut [u8]) {
    if block.is_empty() {
      return;
    }

    let encoding = Encoding::new(self.0 as u64);
    let forward = encoding.as_slice();
    let k = forward.len();

    let (head, rest) = block.split_at_mut(k);
    let (fill, tail) = rest.split_at_mut(fill_len(self.0, k));

    head.copy_from_slice(forward);

    fill.fill(encoding.terminal());

    for (byte, digit) in tail.iter_mut().zip(forward[..k - 1].iter().rev()) {
      *byte = *digit;
    }
  }
}

// The tail shows only the last k - 1 bytes of the reversed run, since its
// first byte is the filler. Every n >= 1 is at least 2k - 1.
fn fill_len(n: usize, k: usize) -> usize {
  n + 1 - 2 * k
}

/// Fill all of `buffer` with padding of its own length.
pub fn fill_with_padding(buffer: &mut [u8]) {
  Varpad(buffer.len()).write(buffer);
}

impl TryFrom<u64> for Varpad {
  type Error = Error;

  fn try_from(value: u64) -> Result<Self, Error> {
    usize::try_from(value)
      .map(Self)
      .map_err(|_| Error::Oversized { value })
  }
}

impl From<Varpad> for usize {
  fn from(padding: Varpad) -> Self {
    padding.0
  }
}

impl Display for Varpad {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for Varpad {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self(s.parse()?))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn block(header: &[u8], filler: u8, count: usize, footer: &[u8]) -> Vec<u8> {
    let mut block = header.to_vec();
    block.extend(std::iter::repeat(filler).take(count));
    block.extend_from_slice(footer);
    block
  }

  fn case(n: usize, expected: Vec<u8>) {
    let padding = Varpad(n);

    let mut buffer = vec![0xee; n];
    assert_eq!(padding.encode_to(&mut buffer).unwrap(), n);
    assert_eq!(buffer, expected);
    assert_eq!(padding.encode(), expected);

    let Progress::Complete { padding: decoded, .. } =
      Varpad::decode_from_beginning(&buffer, DecodeState::Empty).unwrap()
    else {
      panic!("decode from beginning of {n} byte block was incomplete");
    };
    assert_eq!(decoded, padding);

    assert_eq!(Varpad::decode_from_end(&buffer).unwrap().0, padding);
  }

  #[test]
  fn single_byte_values() {
    for n in 1..128 {
      let byte = u8::try_from(n).unwrap();
      case(n, vec![byte; n]);

      assert_eq!(
        Varpad::decode_from_beginning(&vec![byte; n], DecodeState::Empty).unwrap(),
        Progress::Complete {
          padding: Varpad(n),
          length: 1
        }
      );
      assert_eq!(
        Varpad::decode_from_end(&vec![byte; n]).unwrap(),
        (Varpad(n), 1)
      );
    }
  }

  #[test]
  fn one() {
    case(1, vec![1]);
  }

  #[test]
  fn x80() {
    case(128, block(&[0x81], 0x00, 126, &[0x81]));
  }

  #[test]
  fn x81() {
    case(129, block(&[0x81], 0x01, 127, &[0x81]));
  }

  #[test]
  fn xff() {
    case(255, block(&[0x81], 0x7f, 253, &[0x81]));
  }

  #[test]
  fn x4000() {
    case(0x4000, block(&[0x81, 0x80], 0x00, 0x4000 - 4, &[0x80, 0x81]));
  }

  #[test]
  fn x200000() {
    case(
      0x200000,
      block(
        &[0x81, 0x80, 0x80],
        0x00,
        0x200000 - 6,
        &[0x80, 0x80, 0x81],
      ),
    );
  }

  #[test]
  fn x200000_digit_runs() {
    let block = Varpad(0x200000).encode();

    assert_eq!(
      Varpad::decode_from_beginning(&block, DecodeState::Empty).unwrap(),
      Progress::Complete {
        padding: Varpad(0x200000),
        length: 4
      }
    );

    assert_eq!(
      Varpad::decode_from_end(&block).unwrap(),
      (Varpad(0x200000), 4)
    );
  }

  #[test]
  fn all_values_round_trip() {
    for n in (1..0x1000).chain([0x3fff, 0x4000, 0x4001, 0x1fffff, 0x200001]) {
      let block = Varpad(n).encode();

      assert_eq!(block.len(), n);

      let Progress::Complete { padding, .. } =
        Varpad::decode_from_beginning(&block, DecodeState::Empty).unwrap()
      else {
        panic!("decode from beginning of {n} byte block was incomplete");
      };
      assert_eq!(padding, Varpad(n));

      assert_eq!(Varpad::decode_from_end(&block).unwrap().0, Varpad(n));
    }
  }

  #[test]
  fn encoding_is_deterministic() {
    assert_eq!(Varpad(300).encode(), Varpad(300).encode());
  }

  #[test]
  fn zero_writes_nothing() {
    let mut buffer = [0xee; 4];
    assert_eq!(Varpad(0).encode_to(&mut buffer).unwrap(), 0);
    assert_eq!(buffer, [0xee; 4]);
    assert_eq!(Varpad(0).encode(), Vec::<u8>::new());
  }

  #[test]
  fn fill_empty_buffer() {
    let mut buffer = [];
    fill_with_padding(&mut buffer);
    assert_eq!(buffer, [0u8; 0]);
  }

  #[test]
  fn fill_buffer() {
    for n in 1..128 {
      let mut buffer = vec![0; n];
      fill_with_padding(&mut buffer);
      assert_eq!(buffer, vec![u8::try_from(n).unwrap(); n]);
    }
  }

  #[test]
  fn fill_buffer_with_multi_byte_padding() {
    let mut buffer = vec![0xee; 200];
    fill_with_padding(&mut buffer);
    assert_eq!(buffer, Varpad(200).encode());
  }

  #[test]
  fn surplus_capacity_untouched() {
    let mut buffer = [0xee; 8];
    assert_eq!(Varpad(3).encode_to(&mut buffer).unwrap(), 3);
    assert_eq!(buffer, [3, 3, 3, 0xee, 0xee, 0xee, 0xee, 0xee]);
  }

  #[test]
  fn insufficient_capacity() {
    for (n, capacity) in [(1, 0), (4, 3), (128, 127), (0x200000, 10)] {
      let mut buffer = vec![0xee; capacity];
      assert!(matches!(
        Varpad(n).encode_to(&mut buffer),
        Err(Error::InsufficientCapacity { padding, capacity: c }) if padding == n && c == capacity
      ));
      assert_eq!(buffer, vec![0xee; capacity]);
    }
  }

  #[test]
  fn insufficient_capacity_message() {
    assert_eq!(
      Varpad(5).encode_to(&mut [0; 2]).unwrap_err().to_string(),
      "not enough bytes in buffer to store 5 padding bytes (buffer size is 2)"
    );
  }

  #[test]
  fn padding_for_modulus() {
    assert_eq!(Varpad::padding(5, 4), Varpad(3));
    assert_eq!(Varpad::padding(7, 4), Varpad(1));
    assert_eq!(Varpad::padding(0, 16), Varpad(16));
  }

  #[test]
  fn aligned_content_gets_full_modulus() {
    assert_eq!(Varpad::padding(8, 4), Varpad(4));
    assert_eq!(Varpad::padding(256, 256), Varpad(256));
  }

  #[test]
  fn small_modulus_disables_padding() {
    assert_eq!(Varpad::padding(5, 0), Varpad(0));
    assert_eq!(Varpad::padding(5, 1), Varpad(0));
  }

  #[test]
  fn trailing_padding_after_message() {
    let message = b"12345";
    let padding = Varpad::padding(message.len(), 4);
    let mut envelope = vec![0; message.len() + padding.n()];
    envelope[..message.len()].copy_from_slice(message);
    padding.encode_to(&mut envelope[message.len()..]).unwrap();
    assert_eq!(envelope, [0x31, 0x32, 0x33, 0x34, 0x35, 0x03, 0x03, 0x03]);
  }

  #[test]
  fn decode_ignores_bytes_after_length_run() {
    assert_eq!(
      Varpad::decode_from_beginning(&[0x81, 0x00, 0xaa, 0xbb], DecodeState::Empty).unwrap(),
      Progress::Complete {
        padding: Varpad(128),
        length: 2
      }
    );
  }

  #[test]
  fn decode_from_end_ignores_leading_bytes() {
    assert_eq!(
      Varpad::decode_from_end(&[0xaa, 0xbb, 3, 3, 3]).unwrap(),
      (Varpad(3), 1)
    );
  }

  #[test]
  fn progressive_decode() {
    let block = Varpad(0x200000).encode();

    let progress = Varpad::decode_from_beginning(&block[..1], DecodeState::Empty).unwrap();
    assert!(!progress.is_complete());
    assert_eq!(progress.length(), 1);

    let Progress::Incomplete { state, .. } = progress else {
      unreachable!();
    };

    assert_eq!(
      Varpad::decode_from_beginning(&block[1..], state).unwrap(),
      Progress::Complete {
        padding: Varpad(0x200000),
        length: 3
      }
    );
  }

  #[test]
  fn progressive_decode_byte_at_a_time() {
    let block = Varpad(0x4000).encode();

    let mut state = DecodeState::Empty;

    for i in 0.. {
      match Varpad::decode_from_beginning(&block[i..i + 1], state).unwrap() {
        Progress::Complete { padding, length } => {
          assert_eq!(padding, Varpad(0x4000));
          assert_eq!(length, 1);
          assert_eq!(i, 2);
          break;
        }
        Progress::Incomplete { state: next, length } => {
          assert_eq!(length, 1);
          state = next;
        }
      }
    }
  }

  #[test]
  fn decode_from_end_truncated() {
    assert!(matches!(
      Varpad::decode_from_end(&[0x80, 0x81]),
      Err(Error::Codec(rvlq::Error::Truncated { length: 2 }))
    ));
    assert!(matches!(
      Varpad::decode_from_end(&[]),
      Err(Error::Codec(rvlq::Error::Truncated { length: 0 }))
    ));
  }

  #[test]
  fn decode_from_beginning_of_empty_buffer() {
    assert_eq!(
      Varpad::decode_from_beginning(&[], DecodeState::Empty).unwrap(),
      Progress::Incomplete {
        state: DecodeState::Empty,
        length: 0
      }
    );
  }

  #[test]
  fn from_str() {
    assert_eq!("42".parse::<Varpad>().unwrap(), Varpad(42));
    assert!("-1".parse::<Varpad>().is_err());
  }

  #[test]
  fn display() {
    assert_eq!(Varpad(128).to_string(), "128");
  }
}
