use super::*;

pub mod decode;
pub mod encode;
pub mod pad;
pub mod padding;
pub mod strip;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Decode padding from the front (leading) or back (trailing) of a hex-encoded block")]
  Decode(decode::Decode),
  #[command(about = "Encode a padding block")]
  Encode(encode::Encode),
  #[command(about = "Pad content to a multiple of the modulus")]
  Pad(pad::Pad),
  #[command(about = "Calculate padding for content of a given length")]
  Padding(padding::Padding),
  #[command(about = "Remove padding from padded content")]
  Strip(strip::Strip),
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Decode(decode) => decode.run(settings),
      Self::Encode(encode) => encode.run(),
      Self::Pad(pad) => pad.run(settings),
      Self::Padding(padding) => padding.run(settings),
      Self::Strip(strip) => strip.run(settings),
    }
  }
}

pub trait Output: Send {
  fn print_json(&self, minify: bool);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print_json(&self, minify: bool) {
    if minify {
      serde_json::to_writer(io::stdout(), self).ok();
    } else {
      serde_json::to_writer_pretty(io::stdout(), self).ok();
    }
    println!();
  }
}

pub(crate) type SubcommandResult = Result<Option<Box<dyn Output>>>;

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
  if let Some(path) = path {
    fs::read(path).with_context(|| format!("I/O error reading `{}`", path.display()))
  } else {
    let mut input = Vec::new();
    io::stdin()
      .lock()
      .read_to_end(&mut input)
      .context("I/O error reading stdin")?;
    Ok(input)
  }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result {
  if let Some(path) = path {
    fs::write(path, bytes).with_context(|| format!("I/O error writing `{}`", path.display()))
  } else {
    let mut stdout = io::stdout().lock();
    stdout
      .write_all(bytes)
      .and_then(|()| stdout.flush())
      .context("I/O error writing stdout")
  }
}
