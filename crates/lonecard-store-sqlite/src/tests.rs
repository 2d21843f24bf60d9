//! Integration tests for `SqliteStore`, plus the full lifecycle over SQLite
//! and a temporary durable root.

use std::path::{Path, PathBuf};

use lonecard_assets::FsColocator;
use lonecard_core::{
  candidate::{Candidate, StagedImage},
  contact::{ContactFields, ContactId, Province},
  lifecycle::ContactLifecycle,
  session::Mode,
  store::{ContactStore, ImageUpdate},
};
use tempfile::TempDir;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

/// A file-backed store plus a second, raw connection for inspecting it.
async fn file_store() -> (TempDir, SqliteStore, rusqlite::Connection) {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("contacts.db");
  let store = SqliteStore::open(&path).await.expect("file store");
  let raw = rusqlite::Connection::open(&path).unwrap();
  (tmp, store, raw)
}

fn jane() -> ContactFields {
  ContactFields {
    first_name:   "Jane".into(),
    last_name:    "Doe".into(),
    address1:     "1 Yonge St".into(),
    address2:     Some("Unit 4".into()),
    city:         "Toronto".into(),
    province:     Province::Ontario,
    country:      "Canada".into(),
    postal_code:  "M5E 1E5".into(),
    email:        "jane@example.com".into(),
    phone_number: "4165551234".into(),
  }
}

// ─── Schema ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ensure_schema_twice_leaves_one_table() {
  let (_tmp, s, raw) = file_store().await;
  s.ensure_schema().await.unwrap();
  s.ensure_schema().await.unwrap();

  let tables: i64 = raw
    .query_row(
      "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'contacts'",
      [],
      |r| r.get(0),
    )
    .unwrap();
  assert_eq!(tables, 1);
}

#[tokio::test]
async fn ensure_schema_keeps_existing_row() {
  let s = store().await;
  let saved = s.insert(jane(), None).await.unwrap();
  s.ensure_schema().await.unwrap();
  assert_eq!(s.load_singleton().await.unwrap(), Some(saved));
}

// ─── Load / insert ───────────────────────────────────────────────────────────

#[tokio::test]
async fn load_singleton_on_empty_store_is_none() {
  let s = store().await;
  assert_eq!(s.load_singleton().await.unwrap(), None);
}

#[tokio::test]
async fn insert_then_load_roundtrip() {
  let s = store().await;
  let saved = s
    .insert(jane(), Some("/docs/JaneDoe.jpg".into()))
    .await
    .unwrap();
  assert_eq!(saved.id, ContactId(1));

  let loaded = s.load_singleton().await.unwrap().unwrap();
  assert_eq!(loaded, saved);
  assert_eq!(loaded.fields, jane());
  assert_eq!(loaded.image_uri.as_deref(), Some("/docs/JaneDoe.jpg"));
}

#[tokio::test]
async fn insert_without_image_stores_null() {
  let (_tmp, s, raw) = file_store().await;
  s.insert(jane(), None).await.unwrap();

  let uri: Option<String> = raw
    .query_row("SELECT imageUri FROM contacts", [], |r| r.get(0))
    .unwrap();
  assert_eq!(uri, None);
}

#[tokio::test]
async fn second_insert_is_refused() {
  let s = store().await;
  let first = s.insert(jane(), None).await.unwrap();

  let mut other = jane();
  other.first_name = "John".into();
  let err = s.insert(other, None).await.unwrap_err();
  assert!(matches!(err, Error::SingletonOccupied(id) if id == first.id));
  assert_eq!(s.load_singleton().await.unwrap(), Some(first));
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_keep_preserves_image() {
  let s = store().await;
  let saved = s
    .insert(jane(), Some("/docs/JaneDoe.jpg".into()))
    .await
    .unwrap();

  let mut edit = jane();
  edit.first_name = "Janet".into();
  edit.address2 = None;
  let updated = s.update(saved.id, edit.clone(), ImageUpdate::Keep).await.unwrap();

  assert_eq!(updated.id, saved.id);
  assert_eq!(updated.fields, edit);
  assert_eq!(updated.image_uri.as_deref(), Some("/docs/JaneDoe.jpg"));
  assert_eq!(s.load_singleton().await.unwrap(), Some(updated));
}

#[tokio::test]
async fn update_replace_sets_image() {
  let s = store().await;
  let saved = s.insert(jane(), None).await.unwrap();

  let updated = s
    .update(saved.id, jane(), ImageUpdate::Replace("/docs/JaneDoe.jpg".into()))
    .await
    .unwrap();
  assert_eq!(updated.image_uri.as_deref(), Some("/docs/JaneDoe.jpg"));
}

#[tokio::test]
async fn update_missing_row_is_not_found() {
  let s = store().await;
  let err = s
    .update(ContactId(7), jane(), ImageUpdate::Keep)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::ContactNotFound(ContactId(7))));
  assert_eq!(s.load_singleton().await.unwrap(), None);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_clears_singleton() {
  let s = store().await;
  let saved = s.insert(jane(), None).await.unwrap();
  s.delete(saved.id).await.unwrap();
  assert_eq!(s.load_singleton().await.unwrap(), None);

  // The slot is free again.
  let again = s.insert(jane(), None).await.unwrap();
  assert_eq!(again.id, ContactId(2));
}

#[tokio::test]
async fn delete_missing_row_is_not_found() {
  let s = store().await;
  let err = s.delete(ContactId(1)).await.unwrap_err();
  assert!(matches!(err, Error::ContactNotFound(ContactId(1))));
}

// ─── Decoding stored rows ────────────────────────────────────────────────────

#[tokio::test]
async fn empty_address2_and_image_read_as_absent() {
  let (_tmp, s, raw) = file_store().await;
  raw
    .execute(
      "INSERT INTO contacts (firstName, lastName, address1, address2, city,
         province, country, postalCode, email, phoneNumber, imageUri)
       VALUES ('Jane', 'Doe', '1 Yonge St', '', 'Toronto', 'ON', 'Canada',
         'M5E 1E5', 'jane@example.com', '4165551234', '')",
      [],
    )
    .unwrap();

  let loaded = s.load_singleton().await.unwrap().unwrap();
  assert_eq!(loaded.fields.address2, None);
  assert_eq!(loaded.image_uri, None);
}

#[tokio::test]
async fn unknown_province_is_rejected() {
  let (_tmp, s, raw) = file_store().await;
  raw
    .execute(
      "INSERT INTO contacts (firstName, lastName, address1, city, province,
         country, postalCode, email, phoneNumber)
       VALUES ('Jane', 'Doe', '1 Yonge St', 'Toronto', 'XX', 'Canada',
         'M5E 1E5', 'jane@example.com', '4165551234')",
      [],
    )
    .unwrap();

  let err = s.load_singleton().await.unwrap_err();
  assert!(matches!(err, Error::UnknownProvince(code) if code == "XX"));
}

#[tokio::test]
async fn engine_failure_surfaces_as_database_error() {
  let (_tmp, s, raw) = file_store().await;
  raw.execute_batch("DROP TABLE contacts").unwrap();

  let err = s.insert(jane(), None).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));
}

// ─── Full lifecycle ──────────────────────────────────────────────────────────

struct World {
  _tmp:      TempDir,
  staging:   PathBuf,
  root:      PathBuf,
  lifecycle: ContactLifecycle<SqliteStore, FsColocator>,
}

async fn world() -> World {
  let tmp = tempfile::tempdir().unwrap();
  let staging = tmp.path().join("staging");
  std::fs::create_dir(&staging).unwrap();
  let root = tmp.path().join("documents");

  let store = SqliteStore::open(tmp.path().join("contacts.db")).await.unwrap();
  let assets = FsColocator::open(&root).await.unwrap();
  World { _tmp: tmp, staging, root, lifecycle: ContactLifecycle::new(store, assets) }
}

fn stage(dir: &Path, name: &str) -> String {
  let path = dir.join(name);
  std::fs::write(&path, b"jpeg").unwrap();
  StagedImage::from_path(path).unwrap().uri().to_owned()
}

fn candidate(staged_image: Option<String>) -> Candidate {
  Candidate {
    first_name: "Jane".into(),
    last_name: "Doe".into(),
    address1: "1 Yonge St".into(),
    address2: String::new(),
    city: "Toronto".into(),
    province: Some(Province::Ontario),
    country: "Canada".into(),
    postal_code: "M5E 1E5".into(),
    email: "jane@example.com".into(),
    phone_number: "4165551234".into(),
    staged_image,
  }
}

#[tokio::test]
async fn save_rename_delete_scenario() {
  let w = world().await;
  let lc = &w.lifecycle;
  let mut session = lc.start().await.unwrap();
  assert_eq!(session.mode(), Mode::Create);

  let staged = stage(&w.staging, "img1.jpg");
  let photo = w.root.join("JaneDoe.jpg");

  // Insert: photo moved, row points at the durable path.
  let saved = lc
    .save(&mut session, candidate(Some(staged)))
    .await
    .unwrap()
    .clone();
  assert_eq!(saved.id, ContactId(1));
  assert_eq!(saved.image_uri.as_deref(), Some(&*photo.to_string_lossy()));
  assert!(photo.exists());
  assert!(!w.staging.join("img1.jpg").exists());

  // Round trip through a fresh session.
  let reloaded = lc.start().await.unwrap();
  assert_eq!(reloaded.contact(), Some(&saved));

  // Rename without a new photo: the stored path does not follow the name.
  let mut edit = session.candidate();
  edit.first_name = "Janet".into();
  let renamed = lc.save(&mut session, edit).await.unwrap().clone();
  assert_eq!(renamed.id, ContactId(1));
  assert_eq!(renamed.fields.first_name, "Janet");
  assert_eq!(renamed.image_uri, saved.image_uri);

  // Delete: row gone, photo stays.
  lc.delete(&mut session).await.unwrap();
  assert_eq!(session.mode(), Mode::Create);
  assert_eq!(lc.store().load_singleton().await.unwrap(), None);
  assert!(photo.exists());
}

#[tokio::test]
async fn update_with_new_photo_orphans_old_one() {
  let w = world().await;
  let lc = &w.lifecycle;
  let mut session = lc.start().await.unwrap();
  lc.save(&mut session, candidate(Some(stage(&w.staging, "img1.jpg"))))
    .await
    .unwrap();

  let mut edit = session.candidate();
  edit.first_name = "Janet".into();
  edit.staged_image = Some(stage(&w.staging, "img2.jpg"));
  let updated = lc.save(&mut session, edit).await.unwrap();

  let new_photo = w.root.join("JanetDoe.jpg");
  assert_eq!(updated.image_uri.as_deref(), Some(&*new_photo.to_string_lossy()));
  assert!(new_photo.exists());
  assert!(w.root.join("JaneDoe.jpg").exists());
}

#[tokio::test]
async fn failed_relocation_writes_no_row() {
  let w = world().await;
  let lc = &w.lifecycle;
  let mut session = lc.start().await.unwrap();

  let missing = StagedImage::from_path(w.staging.join("gone.jpg"))
    .unwrap()
    .uri()
    .to_owned();
  let err = lc
    .save(&mut session, candidate(Some(missing)))
    .await
    .unwrap_err();
  assert!(matches!(err, lonecard_core::Error::Asset(_)));
  assert_eq!(session.mode(), Mode::Create);
  assert_eq!(lc.store().load_singleton().await.unwrap(), None);
}

#[tokio::test]
async fn stale_create_session_cannot_insert_second_row() {
  let w = world().await;
  let lc = &w.lifecycle;
  let mut stale = lc.start().await.unwrap();
  let mut current = lc.start().await.unwrap();

  let first = stage(&w.staging, "img1.jpg");
  let saved = lc
    .save(&mut current, candidate(Some(first)))
    .await
    .unwrap()
    .clone();
  let photo = w.root.join("JaneDoe.jpg");

  std::fs::write(w.staging.join("img2.jpg"), b"other jpeg").unwrap();
  let second = StagedImage::from_path(w.staging.join("img2.jpg"))
    .unwrap()
    .uri()
    .to_owned();
  let err = lc
    .save(&mut stale, candidate(Some(second)))
    .await
    .unwrap_err();
  assert!(matches!(err, lonecard_core::Error::SessionOutdated(id) if id == saved.id));
  assert_eq!(stale.mode(), Mode::Create);
  assert_eq!(lc.store().load_singleton().await.unwrap(), Some(saved));

  // The stored contact's photo is untouched and the new one is still staged.
  assert_eq!(std::fs::read(&photo).unwrap(), b"jpeg");
  assert!(w.staging.join("img2.jpg").exists());
}
