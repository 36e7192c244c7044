use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Encode {
  #[arg(help = "Encode a block of <PADDING> bytes.")]
  padding: Varpad,
  #[arg(long, help = "Write the raw block to <OUTPUT> instead of printing it as hex.")]
  output: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub padding: Varpad,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub block: Option<String>,
}

impl Encode {
  pub(crate) fn run(self) -> SubcommandResult {
    let mut block: Vec<u8> = Vec::new();

    block
      .try_reserve_exact(self.padding.n())
      .with_context(|| format!("padding of {} bytes is too large to encode", self.padding))?;

    block.resize(self.padding.n(), 0);

    self.padding.encode_to(&mut block)?;

    if let Some(path) = &self.output {
      write_output(Some(path), &block)?;
      log::info!("wrote {} byte block to `{}`", block.len(), path.display());
    }

    Ok(Some(Box::new(Output {
      padding: self.padding,
      block: self.output.is_none().then(|| hex::encode(&block)),
    })))
  }
}
