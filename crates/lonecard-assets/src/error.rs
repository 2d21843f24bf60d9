//! Error type for `lonecard-assets`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The staged image is no longer at its picked location.
  #[error("staged image not found: '{}'", .0.display())]
  MissingSource(PathBuf),

  /// The staged path exists but is a directory or other non-regular file.
  #[error("staged image is not a regular file: '{}'", .0.display())]
  NotAFile(PathBuf),

  #[error("file I/O error ({context}): {source}; path: '{}'", .path.display())]
  Io {
    path:    PathBuf,
    context: &'static str,
    #[source]
    source:  std::io::Error,
  },
}

impl Error {
  pub(crate) fn io(
    path: impl Into<PathBuf>,
    context: &'static str,
    source: std::io::Error,
  ) -> Self {
    Self::Io { path: path.into(), context, source }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
