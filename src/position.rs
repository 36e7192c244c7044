use super::*;

/// Where an envelope carries its padding relative to the content.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
  Leading,
  #[default]
  Trailing,
}

impl Display for Position {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Leading => "leading",
        Self::Trailing => "trailing",
      }
    )
  }
}

impl FromStr for Position {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "leading" => Ok(Self::Leading),
      "trailing" => Ok(Self::Trailing),
      _ => bail!("invalid position `{s}`"),
    }
  }
}
