use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Strip {
  #[arg(long, help = "Read padded content from <INPUT>. [default: stdin]")]
  input: Option<PathBuf>,
  #[arg(long, help = "Write content to <OUTPUT>. [default: stdout]")]
  output: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub content: usize,
  pub padding: Varpad,
  pub position: Position,
}

impl Strip {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let position = settings.position();

    let (padding, content) = match position {
      Position::Leading => self.stream_leading()?,
      Position::Trailing => {
        let input = read_input(self.input.as_deref())?;
        let content = envelope::strip(&input, position)?;
        write_output(self.output.as_deref(), content)?;
        (Varpad(input.len() - content.len()), content.len())
      }
    };

    log::info!("stripped {padding} bytes of {position} padding");

    if self.output.is_none() {
      return Ok(None);
    }

    Ok(Some(Box::new(Output {
      content,
      padding,
      position,
    })))
  }

  fn stream_leading(&self) -> Result<(Varpad, usize)> {
    let mut reader: Box<dyn BufRead> = if let Some(path) = &self.input {
      Box::new(BufReader::new(File::open(path).with_context(|| {
        format!("I/O error reading `{}`", path.display())
      })?))
    } else {
      Box::new(BufReader::new(io::stdin()))
    };

    let padding = envelope::skip_leading(&mut reader)?;

    let mut writer: Box<dyn Write> = if let Some(path) = &self.output {
      Box::new(
        File::create(path)
          .with_context(|| format!("I/O error writing `{}`", path.display()))?,
      )
    } else {
      Box::new(io::stdout().lock())
    };

    let content = io::copy(&mut reader, &mut writer).context("I/O error copying content")?;

    writer.flush().context("I/O error flushing content")?;

    Ok((padding, usize::try_from(content)?))
  }
}
