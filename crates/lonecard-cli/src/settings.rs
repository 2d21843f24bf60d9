//! Shell configuration: where the database and the durable photo root live.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Deserialised from the optional TOML file, then `LONECARD_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
  #[serde(default = "default_store_path")]
  pub store_path:   PathBuf,
  #[serde(default = "default_durable_root")]
  pub durable_root: PathBuf,
}

fn default_store_path() -> PathBuf {
  PathBuf::from("~/.local/share/lonecard/contacts.db")
}

fn default_durable_root() -> PathBuf {
  PathBuf::from("~/.local/share/lonecard/documents")
}

impl ShellConfig {
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    Self::from_sources(file, Some(config::Environment::with_prefix("LONECARD")))
  }

  /// Layer `env` (if any) over `file`, then fill in defaults.
  fn from_sources(
    file: &Path,
    env: Option<config::Environment>,
  ) -> anyhow::Result<Self> {
    let mut builder =
      config::Config::builder().add_source(config::File::from(file).required(false));
    if let Some(env) = env {
      builder = builder.add_source(env);
    }
    let settings = builder.build().context("failed to read config file")?;

    let mut cfg: Self = settings
      .try_deserialize()
      .context("failed to deserialise ShellConfig")?;
    cfg.store_path = expand_tilde(&cfg.store_path);
    cfg.durable_root = expand_tilde(&cfg.durable_root);
    Ok(cfg)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
