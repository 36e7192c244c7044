use super::*;

pub const DEFAULT_MODULUS: usize = 16;

const CONFIG_FILE: &str = "varpad.yaml";
const ENV_PREFIX: &str = "VARPAD_";

/// Configuration resolved from, in order of precedence, command line
/// options, `VARPAD_*` environment variables, and a YAML config file.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
  config: Option<PathBuf>,
  config_dir: Option<PathBuf>,
  modulus: Option<usize>,
  position: Option<Position>,
}

impl Settings {
  pub(crate) fn load(options: Options) -> Result<Settings> {
    let mut env = BTreeMap::<String, String>::new();

    for (var, value) in env::vars_os() {
      let Some(var) = var.to_str() else {
        continue;
      };

      let Some(key) = var.strip_prefix(ENV_PREFIX) else {
        continue;
      };

      env.insert(
        key.into(),
        value.into_string().map_err(|value| {
          anyhow!(
            "environment variable `{var}` not valid unicode: `{}`",
            value.to_string_lossy()
          )
        })?,
      );
    }

    Self::merge(options, env)
  }

  pub(crate) fn merge(options: Options, env: BTreeMap<String, String>) -> Result<Self> {
    let settings = Settings::from_options(options).or(Settings::from_env(env)?);

    let config_path = if let Some(path) = &settings.config {
      Some(path.clone())
    } else {
      settings
        .config_dir
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join("varpad")))
        .map(|dir| dir.join(CONFIG_FILE))
        .filter(|path| path.exists())
    };

    let config = if let Some(config_path) = config_path {
      log::debug!("loading config from `{}`", config_path.display());
      Self::from_config(&config_path)?
    } else {
      Settings::default()
    };

    let settings = settings.or(config);

    if let Some(modulus) = settings.modulus {
      ensure!(
        modulus >= 2,
        "modulus must be at least 2 so padding always carries its length, got {modulus}"
      );
    }

    Ok(settings)
  }

  fn from_config(path: &Path) -> Result<Self> {
    let config: Settings = serde_yaml::from_reader(
      File::open(path).with_context(|| format!("failed to open config file `{}`", path.display()))?,
    )
    .with_context(|| format!("failed to deserialize config file `{}`", path.display()))?;

    ensure!(
      config.config.is_none() && config.config_dir.is_none(),
      "config file `{}` may not set `config` or `config_dir`",
      path.display()
    );

    Ok(config)
  }

  pub(crate) fn or(self, source: Settings) -> Self {
    Self {
      config: self.config.or(source.config),
      config_dir: self.config_dir.or(source.config_dir),
      modulus: self.modulus.or(source.modulus),
      position: self.position.or(source.position),
    }
  }

  pub(crate) fn from_env(env: BTreeMap<String, String>) -> Result<Self> {
    let get_path = |key: &str| env.get(key).map(PathBuf::from);

    let modulus = env
      .get("MODULUS")
      .map(|modulus| modulus.parse::<usize>())
      .transpose()
      .with_context(|| format!("failed to parse environment variable {ENV_PREFIX}MODULUS"))?;

    let position = env
      .get("POSITION")
      .map(|position| position.parse::<Position>())
      .transpose()
      .with_context(|| format!("failed to parse environment variable {ENV_PREFIX}POSITION"))?;

    Ok(Self {
      config: get_path("CONFIG"),
      config_dir: get_path("CONFIG_DIR"),
      modulus,
      position,
    })
  }

  pub(crate) fn from_options(options: Options) -> Self {
    Self {
      config: options.config,
      config_dir: options.config_dir,
      modulus: options.modulus,
      position: options.position,
    }
  }

  pub fn modulus(&self) -> usize {
    self.modulus.unwrap_or(DEFAULT_MODULUS)
  }

  pub fn position(&self) -> Position {
    self.position.unwrap_or_default()
  }
}
