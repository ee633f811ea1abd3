//! Loading the auto-pairing configuration.
//!
//! The built-in `autopairs.toml` enables every group. A user file in the
//! config directory is layered on top of it; groups it does not mention keep
//! their built-in value.

use std::{
  ffi::OsString,
  path::{
    Path,
    PathBuf,
  },
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use eyre::{
  Result,
  WrapErr,
};
use the_dispatch::{
  AutopairExtension,
  autopair_extension,
};
use the_pairs::{
  config::AutopairConfig,
  host::PairHost,
};

pub const CONFIG_DIR_ENV: &str = "THE_AUTOPAIR_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "autopairs.toml";

/// Directory holding the user's `autopairs.toml`.
pub fn config_dir() -> Result<PathBuf> {
  resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV))
}

fn resolve_config_dir(override_dir: Option<OsString>) -> Result<PathBuf> {
  if let Some(dir) = override_dir.filter(|dir| !dir.is_empty()) {
    return expand_tilde(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().wrap_err("unable to find the config directory")?;
  let mut path = strategy.config_dir();
  path.push("the-editor");
  Ok(path)
}

fn expand_tilde(path: PathBuf) -> Result<PathBuf> {
  let Ok(rest) = path.strip_prefix("~") else {
    return Ok(path);
  };
  let home = etcetera::home_dir().wrap_err("unable to find the home directory")?;
  Ok(home.join(rest))
}

pub fn config_file() -> Result<PathBuf> {
  Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Built-in autopairs.toml.
pub fn default_config() -> Result<AutopairConfig> {
  parse_config(include_str!("../autopairs.toml")).wrap_err("failed to parse built-in autopairs.toml")
}

pub fn parse_config(src: &str) -> Result<AutopairConfig> {
  Ok(toml::from_str(src)?)
}

pub fn load_config(path: &Path) -> Result<AutopairConfig> {
  let src = std::fs::read_to_string(path)
    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
  parse_config(&src).wrap_err_with(|| format!("failed to parse {}", path.display()))
}

/// User configured autopairs.toml, merged with the default config.
pub fn user_config() -> Result<AutopairConfig> {
  user_config_from(&config_file()?)
}

/// Like [`user_config`], reading the user file from `path`. A missing file
/// yields the defaults; an unreadable or malformed one is an error.
pub fn user_config_from(path: &Path) -> Result<AutopairConfig> {
  let default = default_config()?;
  if !path.exists() {
    tracing::debug!("no user autopairs config at {}", path.display());
    return Ok(default);
  }

  let user = load_config(path)?;
  tracing::debug!(?user, "loaded user autopairs config");
  Ok(default.merge(user))
}

/// Build the auto-pairing extension from the user's configuration.
pub fn build_extension<H>() -> Result<AutopairExtension<H>>
where
  H: PairHost + 'static,
{
  let config = user_config()?;
  Ok(autopair_extension(config))
}
