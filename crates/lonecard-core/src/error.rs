//! Error types for `lonecard-core`.

use thiserror::Error;

use crate::{contact::ContactId, validate::ValidationError};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a lifecycle operation did not happen. Every variant leaves the stored
/// row and the [`crate::session::EditingSession`] as they were.
#[derive(Debug, Error)]
pub enum Error {
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),

  /// The staged photo could not be moved; nothing was written.
  #[error("asset error: {0}")]
  Asset(#[source] BoxError),

  #[error("store error: {0}")]
  Store(#[source] BoxError),

  /// A create-mode save found a contact stored by someone else. The staged
  /// photo was not moved.
  #[error("contact {0} was saved elsewhere; reload before saving")]
  SessionOutdated(ContactId),

  #[error("no contact to delete")]
  NothingToDelete,
}

impl Error {
  pub(crate) fn asset(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Asset(Box::new(e))
  }

  pub(crate) fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
