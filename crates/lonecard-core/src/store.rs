//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `lonecard-store-sqlite`). The
//! lifecycle layer depends on this abstraction, not on a concrete backend.

use std::future::Future;

use crate::contact::{Contact, ContactFields, ContactId};

/// What an update does with the stored `image_uri`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageUpdate {
  /// Leave the stored value exactly as it is.
  Keep,
  /// Point at a newly colocated photo.
  Replace(String),
}

/// Abstraction over the backend holding the single contact row.
///
/// Every method is atomic with respect to the backend: a failed call leaves
/// the stored row as it was before the call.
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create the contact table if it does not exist. Safe to call repeatedly.
  fn ensure_schema(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Return the contact row, if one has been saved.
  fn load_singleton(
    &self,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Insert the contact row and return it with its assigned id.
  ///
  /// Fails if a row already exists; the store never holds more than one.
  fn insert(
    &self,
    fields: ContactFields,
    image_uri: Option<String>,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Overwrite every field of the row `id` and return the row as stored.
  fn update(
    &self,
    id: ContactId,
    fields: ContactFields,
    image: ImageUpdate,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Remove the row `id`. Any photo it references is left on disk.
  fn delete(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
