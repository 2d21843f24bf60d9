//! Error type for `lonecard-store-sqlite`.

use lonecard_core::contact::ContactId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("unknown province code in stored row: {0:?}")]
  UnknownProvince(String),

  #[error("stored row has no {0}")]
  MissingColumn(&'static str),

  /// An insert was attempted while a contact row already exists.
  #[error("a contact is already stored (id {0})")]
  SingletonOccupied(ContactId),

  #[error("contact not found: {0}")]
  ContactNotFound(ContactId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
