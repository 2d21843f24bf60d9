//! SQL schema for the lonecard SQLite store.
//!
//! Column names keep the camelCase layout of existing `contacts.db` files so
//! those open unchanged.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    firstName   TEXT,
    lastName    TEXT,
    address1    TEXT,
    address2    TEXT,
    city        TEXT,
    province    TEXT,   -- two-letter code, e.g. 'ON'
    country     TEXT,
    postalCode  TEXT,
    email       TEXT,
    phoneNumber TEXT,
    imageUri    TEXT    -- colocated photo path or NULL
);

PRAGMA user_version = 1;
";

/// Column list shared by every `SELECT`; order matches [`crate::encode::RawContact`].
pub const CONTACT_COLUMNS: &str = "id, firstName, lastName, address1, \
  address2, city, province, country, postalCode, email, phoneNumber, imageUri";
