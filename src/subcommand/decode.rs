use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Decode {
  #[arg(help = "Decode padding from hex-encoded <BLOCK>.")]
  block: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub complete: bool,
  pub length: usize,
  pub padding: Option<Varpad>,
}

impl Decode {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let block = hex::decode(self.block.trim()).context("block is not valid hex")?;

    let output = match settings.position() {
      Position::Leading => match Varpad::decode_from_beginning(&block, DecodeState::Empty)? {
        Progress::Complete { padding, length } => Output {
          complete: true,
          length,
          padding: Some(padding),
        },
        Progress::Incomplete { length, .. } => Output {
          complete: false,
          length,
          padding: None,
        },
      },
      Position::Trailing => {
        let (padding, length) = Varpad::decode_from_end(&block)?;
        Output {
          complete: true,
          length,
          padding: Some(padding),
        }
      }
    };

    if let Some(padding) = output.padding {
      if padding.n() > block.len() {
        log::warn!(
          "decoded padding of {padding} bytes is longer than the {} byte block",
          block.len()
        );
      }

      if padding.n() < output.length {
        log::warn!(
          "decoded padding of {padding} bytes is shorter than its {} byte length marker",
          output.length
        );
      }
    }

    Ok(Some(Box::new(output)))
  }
}
