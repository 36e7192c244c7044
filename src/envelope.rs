//! Padding whole messages to a modulus.
//!
//! An envelope is the content followed by padding, or padding followed by the
//! content. Either way the padding records its own length, so it can be
//! stripped again without knowing the original content length.

use {super::*, crate::varpad::Error};

/// Pad `content` to the next multiple of `modulus`.
///
/// Content that is already aligned gets a full `modulus` of padding, so every
/// envelope carries a length marker. A modulus below 2 would produce no
/// padding at all and is rejected.
pub fn pad(content: &[u8], modulus: usize, position: Position) -> Result<Vec<u8>, Error> {
  let padding = Varpad::padding(content.len(), modulus);

  if padding.n() == 0 {
    return Err(Error::Modulus { modulus });
  }

  let mut envelope = vec![0; content.len() + padding.n()];

  let (block, body) = match position {
    Position::Leading => envelope.split_at_mut(padding.n()),
    Position::Trailing => {
      let (body, block) = envelope.split_at_mut(content.len());
      (block, body)
    }
  };

  body.copy_from_slice(content);
  padding.encode_to(block)?;

  Ok(envelope)
}

/// The content of `envelope` with its padding removed.
pub fn strip(envelope: &[u8], position: Position) -> Result<&[u8], Error> {
  let overrun = |padding: Varpad| Error::Overrun {
    padding: padding.n(),
    length: envelope.len(),
  };

  match position {
    Position::Leading => {
      let (padding, length) = match Varpad::decode_from_beginning(envelope, DecodeState::Empty)? {
        Progress::Complete { padding, length } => (padding, length),
        Progress::Incomplete { length, .. } => return Err(Error::Unterminated { length }),
      };

      covers_marker(padding, length)?;

      envelope.get(padding.n()..).ok_or_else(|| overrun(padding))
    }
    Position::Trailing => {
      let (padding, length) = Varpad::decode_from_end(envelope)?;

      covers_marker(padding, length)?;

      envelope
        .len()
        .checked_sub(padding.n())
        .map(|end| &envelope[..end])
        .ok_or_else(|| overrun(padding))
    }
  }
}

// A well-formed block is at least as long as the digits recording its length.
fn covers_marker(padding: Varpad, length: usize) -> Result<(), Error> {
  if padding.n() < length {
    return Err(Error::Undersized {
      padding: padding.n(),
      length,
    });
  }

  Ok(())
}

/// Consume leading padding from `reader`, leaving it at the start of the
/// content.
///
/// The length is decoded progressively from whatever `reader` has buffered,
/// so no content bytes are consumed.
pub fn skip_leading<R: BufRead>(reader: &mut R) -> Result<Varpad, Error> {
  let mut state = DecodeState::Empty;

  let (padding, consumed) = loop {
    let buffer = reader.fill_buf()?;

    if buffer.is_empty() {
      return Err(Error::Unterminated {
        length: state.length(),
      });
    }

    match Varpad::decode_from_beginning(buffer, state)? {
      Progress::Complete { padding, length } => {
        reader.consume(length);
        break (padding, state.length() + length);
      }
      Progress::Incomplete {
        state: next,
        length,
      } => {
        reader.consume(length);
        state = next;
      }
    }
  };

  covers_marker(padding, consumed)?;

  let remaining = padding.n() - consumed;

  let skipped = io::copy(&mut reader.by_ref().take(remaining as u64), &mut io::sink())?;

  if skipped < remaining as u64 {
    return Err(Error::Io(io::ErrorKind::UnexpectedEof.into()));
  }

  Ok(padding)
}
