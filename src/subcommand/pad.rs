use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Pad {
  #[arg(long, help = "Read content from <INPUT>. [default: stdin]")]
  input: Option<PathBuf>,
  #[arg(long, help = "Write padded content to <OUTPUT>. [default: stdout]")]
  output: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub content: usize,
  pub padding: Varpad,
  pub position: Position,
  pub total: usize,
}

impl Pad {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let content = read_input(self.input.as_deref())?;

    let envelope = envelope::pad(&content, settings.modulus(), settings.position())?;

    let padding = Varpad(envelope.len() - content.len());

    log::info!(
      "padding {} bytes of content with {padding} {} bytes",
      content.len(),
      settings.position(),
    );

    write_output(self.output.as_deref(), &envelope)?;

    if self.output.is_none() {
      return Ok(None);
    }

    Ok(Some(Box::new(Output {
      content: content.len(),
      padding,
      position: settings.position(),
      total: envelope.len(),
    })))
  }
}
