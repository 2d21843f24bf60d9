//! The in-progress form values, before they pass validation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use url::Url;

use crate::contact::{Contact, ContactFields, Province};

/// URI scheme a picked image must carry to count as local.
pub const FILE_SCHEME: &str = "file://";

// ─── Field names ─────────────────────────────────────────────────────────────

/// Names of the required fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
  FirstName,
  LastName,
  Address1,
  City,
  Province,
  Country,
  PostalCode,
  Email,
  PhoneNumber,
}

// ─── Candidate ───────────────────────────────────────────────────────────────

/// Form state held by the editing surface. Nothing here is checked; see
/// [`crate::validate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
  pub first_name:   String,
  pub last_name:    String,
  pub address1:     String,
  pub address2:     String,
  pub city:         String,
  pub province:     Option<Province>,
  pub country:      String,
  pub postal_code:  String,
  pub email:        String,
  pub phone_number: String,
  /// A freshly picked image, as a `file://` URI. `None` when this edit does
  /// not change the photo.
  pub staged_image: Option<String>,
}

impl Candidate {
  /// Prefill a form from a persisted contact. The stored image is not
  /// staged again.
  pub fn from_contact(contact: &Contact) -> Self {
    let f = &contact.fields;
    Self {
      first_name:   f.first_name.clone(),
      last_name:    f.last_name.clone(),
      address1:     f.address1.clone(),
      address2:     f.address2.clone().unwrap_or_default(),
      city:         f.city.clone(),
      province:     Some(f.province),
      country:      f.country.clone(),
      postal_code:  f.postal_code.clone(),
      email:        f.email.clone(),
      phone_number: f.phone_number.clone(),
      staged_image: None,
    }
  }

  /// The value of a required field; `None` stands for an unselected
  /// province.
  pub fn get(&self, field: Field) -> Option<&str> {
    match field {
      Field::FirstName => Some(self.first_name.as_str()),
      Field::LastName => Some(self.last_name.as_str()),
      Field::Address1 => Some(self.address1.as_str()),
      Field::City => Some(self.city.as_str()),
      Field::Province => self.province.map(Province::code),
      Field::Country => Some(self.country.as_str()),
      Field::PostalCode => Some(self.postal_code.as_str()),
      Field::Email => Some(self.email.as_str()),
      Field::PhoneNumber => Some(self.phone_number.as_str()),
    }
  }
}

// ─── Staged image ────────────────────────────────────────────────────────────

/// A picked image that has passed the provenance check and still sits at its
/// transient location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
  uri:  String,
  path: PathBuf,
}

impl StagedImage {
  /// Accept `uri` only if it names a local file. Remote URLs, bare paths,
  /// an empty `file://` and `file://` URIs naming another host all yield
  /// `None`. Percent-escapes are decoded, so `my%20photo.jpg` names
  /// `my photo.jpg`.
  pub fn parse(uri: &str) -> Option<Self> {
    let rest = uri.strip_prefix(FILE_SCHEME)?;
    if rest.is_empty() {
      return None;
    }
    let path = Url::parse(uri).ok()?.to_file_path().ok()?;
    Some(Self { uri: uri.to_owned(), path })
  }

  /// Build a staged image from an absolute filesystem path; relative paths
  /// yield `None`.
  pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
    let path = path.into();
    let uri = Url::from_file_path(&path).ok()?;
    Some(Self { uri: uri.into(), path })
  }

  pub fn uri(&self) -> &str { &self.uri }

  pub fn path(&self) -> &Path { &self.path }
}


// ─── Submission ──────────────────────────────────────────────────────────────

/// A candidate that has passed the validation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
  pub fields:       ContactFields,
  pub staged_image: Option<StagedImage>,
}
