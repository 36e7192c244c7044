use super::*;

#[derive(Clone, Default, Debug, Parser)]
pub struct Options {
  #[arg(long, help = "Load configuration from <CONFIG>.")]
  pub(crate) config: Option<PathBuf>,
  #[arg(long, help = "Load configuration from <CONFIG_DIR>/varpad.yaml.")]
  pub(crate) config_dir: Option<PathBuf>,
  #[arg(long, help = "Minify JSON output.")]
  pub(crate) minify: bool,
  #[arg(
    long,
    short,
    help = "Pad content to a multiple of <MODULUS> bytes. [default: 16]"
  )]
  pub(crate) modulus: Option<usize>,
  #[arg(
    long,
    help = "Put padding <POSITION> the content, `leading` or `trailing`. [default: trailing]"
  )]
  pub(crate) position: Option<Position>,
}
