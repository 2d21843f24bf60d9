//! The `AssetColocator` trait: moving a staged photo into durable storage.

use std::{fmt, future::Future};

use crate::{candidate::StagedImage, contact::ContactFields};

/// Extension given to every colocated photo.
pub const ASSET_EXTENSION: &str = "jpg";

/// The file stem a contact's photo is stored under.
///
/// Derived from the *current* first and last name, so renaming a contact
/// yields a new key and leaves the previous file in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey(String);

impl AssetKey {
  pub fn from_fields(fields: &ContactFields) -> Self {
    let stem: String = fields
      .first_name
      .chars()
      .chain(fields.last_name.chars())
      .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
      .collect();
    Self(stem)
  }

  /// `<stem>.jpg`
  pub fn file_name(&self) -> String {
    format!("{}.{ASSET_EXTENSION}", self.0)
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for AssetKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Moves picked images out of their staging location.
///
/// Implementations must move, not copy: once `relocate` succeeds the staged
/// file is no longer reachable at its original path.
pub trait AssetColocator: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Move `staged` to the location derived from `key` and return that
  /// location as it should be stored in `image_uri`.
  fn relocate<'a>(
    &'a self,
    staged: &'a StagedImage,
    key: &'a AssetKey,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a;
}
