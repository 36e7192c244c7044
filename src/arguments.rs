use super::*;

#[derive(Debug, Parser)]
#[command(version, about = "Self-describing padding, readable from either end")]
pub struct Arguments {
  #[command(flatten)]
  pub(crate) options: Options,
  #[command(subcommand)]
  pub(crate) subcommand: Subcommand,
}

impl Arguments {
  pub(crate) fn run(self) -> SubcommandResult {
    let settings = Settings::load(self.options)?;

    log::debug!(
      "modulus {} position {}",
      settings.modulus(),
      settings.position()
    );

    self.subcommand.run(settings)
  }
}
