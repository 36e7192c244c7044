use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Padding {
  #[arg(help = "Calculate padding for content of <LENGTH> bytes.")]
  length: usize,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub length: usize,
  pub modulus: usize,
  pub padding: Varpad,
  pub total: usize,
}

impl Padding {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let modulus = settings.modulus();

    let padding = Varpad::padding(self.length, modulus);

    Ok(Some(Box::new(Output {
      length: self.length,
      modulus,
      padding,
      total: self
        .length
        .checked_add(padding.n())
        .ok_or_else(|| anyhow!("content length {} too large to pad", self.length))?,
    })))
  }
}
