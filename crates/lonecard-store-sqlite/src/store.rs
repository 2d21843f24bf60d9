//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;

use lonecard_core::{
  contact::{Contact, ContactFields, ContactId},
  store::{ContactStore, ImageUpdate},
};

use crate::{
  Error, Result,
  encode::{RawContact, encode_province},
  schema::{CONTACT_COLUMNS, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// The contact record backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.ensure_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.ensure_schema().await?;
    Ok(store)
  }
}

/// Owned copies of the field columns, movable into a connection closure.
struct FieldParams {
  first_name:   String,
  last_name:    String,
  address1:     String,
  address2:     Option<String>,
  city:         String,
  province:     &'static str,
  country:      String,
  postal_code:  String,
  email:        String,
  phone_number: String,
}

impl From<&ContactFields> for FieldParams {
  fn from(f: &ContactFields) -> Self {
    Self {
      first_name:   f.first_name.clone(),
      last_name:    f.last_name.clone(),
      address1:     f.address1.clone(),
      address2:     f.address2.clone(),
      city:         f.city.clone(),
      province:     encode_province(f.province),
      country:      f.country.clone(),
      postal_code:  f.postal_code.clone(),
      email:        f.email.clone(),
      phone_number: f.phone_number.clone(),
    }
  }
}

fn select_first(conn: &rusqlite::Connection) -> rusqlite::Result<Option<RawContact>> {
  conn
    .query_row(
      &format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id LIMIT 1"),
      [],
      RawContact::from_row,
    )
    .optional()
}

fn select_by_id(
  conn: &rusqlite::Connection,
  id: i64,
) -> rusqlite::Result<Option<RawContact>> {
  conn
    .query_row(
      &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
      rusqlite::params![id],
      RawContact::from_row,
    )
    .optional()
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn ensure_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn load_singleton(&self) -> Result<Option<Contact>> {
    let raw = self
      .conn
      .call(|conn| Ok(select_first(conn)?))
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn insert(
    &self,
    fields: ContactFields,
    image_uri: Option<String>,
  ) -> Result<Contact> {
    let p   = FieldParams::from(&fields);
    let uri = image_uri.clone();

    // Ok(new id) or Err(id of the row already present).
    let outcome: std::result::Result<i64, i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let existing: Option<i64> = tx
          .query_row("SELECT id FROM contacts LIMIT 1", [], |r| r.get(0))
          .optional()?;
        if let Some(id) = existing {
          return Ok(Err(id));
        }

        tx.execute(
          "INSERT INTO contacts (
             firstName, lastName, address1, address2, city, province,
             country, postalCode, email, phoneNumber, imageUri
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
          rusqlite::params![
            p.first_name,
            p.last_name,
            p.address1,
            p.address2,
            p.city,
            p.province,
            p.country,
            p.postal_code,
            p.email,
            p.phone_number,
            uri,
          ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Ok(id))
      })
      .await?;

    let id = outcome
      .map(ContactId)
      .map_err(|existing| Error::SingletonOccupied(ContactId(existing)))?;
    debug!(%id, "contact row inserted");
    Ok(Contact { id, fields, image_uri })
  }

  async fn update(
    &self,
    id: ContactId,
    fields: ContactFields,
    image: ImageUpdate,
  ) -> Result<Contact> {
    let p      = FieldParams::from(&fields);
    let row_id = id.0;

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let changed = match image {
          ImageUpdate::Keep => tx.execute(
            "UPDATE contacts SET
               firstName = ?1, lastName = ?2, address1 = ?3, address2 = ?4,
               city = ?5, province = ?6, country = ?7, postalCode = ?8,
               email = ?9, phoneNumber = ?10
             WHERE id = ?11",
            rusqlite::params![
              p.first_name,
              p.last_name,
              p.address1,
              p.address2,
              p.city,
              p.province,
              p.country,
              p.postal_code,
              p.email,
              p.phone_number,
              row_id,
            ],
          )?,
          ImageUpdate::Replace(uri) => tx.execute(
            "UPDATE contacts SET
               firstName = ?1, lastName = ?2, address1 = ?3, address2 = ?4,
               city = ?5, province = ?6, country = ?7, postalCode = ?8,
               email = ?9, phoneNumber = ?10, imageUri = ?11
             WHERE id = ?12",
            rusqlite::params![
              p.first_name,
              p.last_name,
              p.address1,
              p.address2,
              p.city,
              p.province,
              p.country,
              p.postal_code,
              p.email,
              p.phone_number,
              uri,
              row_id,
            ],
          )?,
        };

        // Nothing matched; dropping `tx` rolls back.
        if changed == 0 {
          return Ok(None);
        }

        let row = select_by_id(&tx, row_id)?;
        tx.commit()?;
        Ok(row)
      })
      .await?;

    let contact = raw
      .ok_or(Error::ContactNotFound(id))?
      .into_contact()?;
    debug!(%id, "contact row updated");
    Ok(contact)
  }

  async fn delete(&self, id: ContactId) -> Result<()> {
    let row_id = id.0;

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE id = ?1",
          rusqlite::params![row_id],
        )?)
      })
      .await?;

    if removed == 0 {
      return Err(Error::ContactNotFound(id));
    }
    debug!(%id, "contact row deleted");
    Ok(())
  }
}
