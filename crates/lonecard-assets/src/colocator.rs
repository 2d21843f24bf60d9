//! [`FsColocator`] moves staged photos under a fixed durable root.

use std::{
  io,
  path::{Path, PathBuf},
};

use tokio::fs;
use tracing::{debug, info};

use lonecard_core::{
  asset::{AssetColocator, AssetKey},
  candidate::StagedImage,
};

use crate::{Error, Result};

/// Places each contact photo at `<root>/<firstName><lastName>.jpg`.
#[derive(Debug, Clone)]
pub struct FsColocator {
  root: PathBuf,
}

impl FsColocator {
  /// Use `root` as the durable directory, creating it if needed.
  pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
    let root = root.into();
    fs::create_dir_all(&root)
      .await
      .map_err(|e| Error::io(&root, "creating durable root", e))?;
    Ok(Self { root })
  }

  pub fn root(&self) -> &Path { &self.root }

  /// Where the photo for `key` lives (or would live).
  pub fn final_path(&self, key: &AssetKey) -> PathBuf {
    self.root.join(key.file_name())
  }
}

impl AssetColocator for FsColocator {
  type Error = Error;

  async fn relocate(&self, staged: &StagedImage, key: &AssetKey) -> Result<String> {
    let from = staged.path();
    let to   = self.final_path(key);

    match fs::metadata(from).await {
      Ok(meta) if meta.is_file() => {}
      Ok(_) => return Err(Error::NotAFile(from.to_path_buf())),
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        return Err(Error::MissingSource(from.to_path_buf()));
      }
      Err(e) => return Err(Error::io(from, "reading staged image", e)),
    }

    move_file(from, &to).await?;
    info!(from = %from.display(), to = %to.display(), "photo colocated");
    Ok(to.to_string_lossy().into_owned())
  }
}

/// Rename `from` to `to`, falling back to copy-then-remove when they sit on
/// different filesystems. Either way `from` is gone on success.
async fn move_file(from: &Path, to: &Path) -> Result<()> {
  match fs::rename(from, to).await {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
      debug!(from = %from.display(), "cross-device move, copying instead");
      fs::copy(from, to)
        .await
        .map_err(|e| Error::io(to, "copying staged image", e))?;
      fs::remove_file(from)
        .await
        .map_err(|e| Error::io(from, "removing staged image", e))
    }
    Err(e) => Err(Error::io(to, "moving staged image", e)),
  }
}
