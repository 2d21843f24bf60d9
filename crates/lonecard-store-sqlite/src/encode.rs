//! Conversion between [`Contact`] and the all-TEXT `contacts` row.
//!
//! Every column is nullable in the schema, so rows are read into
//! [`RawContact`] first and checked on the way out.

use lonecard_core::contact::{Contact, ContactFields, ContactId, Province};

use crate::{Error, Result};

// ─── Province ────────────────────────────────────────────────────────────────

pub fn encode_province(p: Province) -> &'static str { p.code() }

pub fn decode_province(s: &str) -> Result<Province> {
  s.parse().map_err(|_| Error::UnknownProvince(s.to_owned()))
}

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// A `contacts` row exactly as SQLite returned it.
pub struct RawContact {
  pub id:           i64,
  pub first_name:   Option<String>,
  pub last_name:    Option<String>,
  pub address1:     Option<String>,
  pub address2:     Option<String>,
  pub city:         Option<String>,
  pub province:     Option<String>,
  pub country:      Option<String>,
  pub postal_code:  Option<String>,
  pub email:        Option<String>,
  pub phone_number: Option<String>,
  pub image_uri:    Option<String>,
}

impl RawContact {
  /// Map a row selected with [`crate::schema::CONTACT_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      first_name:   row.get(1)?,
      last_name:    row.get(2)?,
      address1:     row.get(3)?,
      address2:     row.get(4)?,
      city:         row.get(5)?,
      province:     row.get(6)?,
      country:      row.get(7)?,
      postal_code:  row.get(8)?,
      email:        row.get(9)?,
      phone_number: row.get(10)?,
      image_uri:    row.get(11)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    let province = decode_province(&required(self.province, "province")?)?;
    Ok(Contact {
      id:        ContactId(self.id),
      fields:    ContactFields {
        first_name: required(self.first_name, "firstName")?,
        last_name: required(self.last_name, "lastName")?,
        address1: required(self.address1, "address1")?,
        address2: self.address2.filter(|a| !a.is_empty()),
        city: required(self.city, "city")?,
        province,
        country: required(self.country, "country")?,
        postal_code: required(self.postal_code, "postalCode")?,
        email: required(self.email, "email")?,
        phone_number: required(self.phone_number, "phoneNumber")?,
      },
      image_uri: self.image_uri.filter(|u| !u.is_empty()),
    })
  }
}

fn required(value: Option<String>, column: &'static str) -> Result<String> {
  value.ok_or(Error::MissingColumn(column))
}
