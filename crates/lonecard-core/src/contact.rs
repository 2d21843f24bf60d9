//! The contact record — the single entity this store persists.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned row identifier. Absent until the first insert succeeds and
/// stable from then on.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl fmt::Display for ContactId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

// ─── Province ────────────────────────────────────────────────────────────────

/// One of the thirteen Canadian provinces and territories. Stored and parsed
/// by its two-letter postal code.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  EnumString,
  EnumIter,
  IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Province {
  #[serde(rename = "AB")]
  #[strum(serialize = "AB")]
  Alberta,
  #[serde(rename = "BC")]
  #[strum(serialize = "BC")]
  BritishColumbia,
  #[serde(rename = "MB")]
  #[strum(serialize = "MB")]
  Manitoba,
  #[serde(rename = "NB")]
  #[strum(serialize = "NB")]
  NewBrunswick,
  #[serde(rename = "NL")]
  #[strum(serialize = "NL")]
  NewfoundlandAndLabrador,
  #[serde(rename = "NT")]
  #[strum(serialize = "NT")]
  NorthwestTerritories,
  #[serde(rename = "NS")]
  #[strum(serialize = "NS")]
  NovaScotia,
  #[serde(rename = "NU")]
  #[strum(serialize = "NU")]
  Nunavut,
  #[serde(rename = "ON")]
  #[strum(serialize = "ON")]
  Ontario,
  #[serde(rename = "PE")]
  #[strum(serialize = "PE")]
  PrinceEdwardIsland,
  #[serde(rename = "QC")]
  #[strum(serialize = "QC")]
  Quebec,
  #[serde(rename = "SK")]
  #[strum(serialize = "SK")]
  Saskatchewan,
  #[serde(rename = "YT")]
  #[strum(serialize = "YT")]
  Yukon,
}

impl Province {
  /// The two-letter code stored in the `province` column.
  pub fn code(self) -> &'static str { self.into() }

  /// Human-readable name, as shown in a picker.
  pub fn name(self) -> &'static str {
    match self {
      Self::Alberta => "Alberta",
      Self::BritishColumbia => "British Columbia",
      Self::Manitoba => "Manitoba",
      Self::NewBrunswick => "New Brunswick",
      Self::NewfoundlandAndLabrador => "Newfoundland and Labrador",
      Self::NorthwestTerritories => "Northwest Territories",
      Self::NovaScotia => "Nova Scotia",
      Self::Nunavut => "Nunavut",
      Self::Ontario => "Ontario",
      Self::PrinceEdwardIsland => "Prince Edward Island",
      Self::Quebec => "Quebec",
      Self::Saskatchewan => "Saskatchewan",
      Self::Yukon => "Yukon",
    }
  }
}

impl fmt::Display for Province {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

// ─── Fields ──────────────────────────────────────────────────────────────────

/// The validated text fields of a contact. Everything except `address2` is
/// guaranteed non-empty once a value of this type exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
  pub first_name:   String,
  pub last_name:    String,
  pub address1:     String,
  pub address2:     Option<String>,
  pub city:         String,
  pub province:     Province,
  pub country:      String,
  pub postal_code:  String,
  pub email:        String,
  pub phone_number: String,
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A persisted contact row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:        ContactId,
  #[serde(flatten)]
  pub fields:    ContactFields,
  /// Location of the colocated photo under the durable root, if any. Never a
  /// staging path.
  pub image_uri: Option<String>,
}
