/// Progress of a forward decode, threaded by the caller between calls.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum DecodeState {
  #[default]
  Empty,
  Partial {
    /// Digits accumulated so far.
    value: u64,
    /// Bytes those digits occupied.
    length: usize,
  },
}

impl DecodeState {
  pub fn value(self) -> u64 {
    match self {
      Self::Empty => 0,
      Self::Partial { value, .. } => value,
    }
  }

  pub fn length(self) -> usize {
    match self {
      Self::Empty => 0,
      Self::Partial { length, .. } => length,
    }
  }
}
