//! [`ContactLifecycle`] — validation, photo colocation and persistence
//! composed into save and delete.
//!
//! Ordering is the whole point of this module: a staged photo is always moved
//! before the row that references it is written, and the session is only
//! touched once the store has confirmed the write.

use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  asset::{AssetColocator, AssetKey},
  candidate::{Candidate, Submission},
  contact::Contact,
  session::{EditingSession, Mode},
  store::{ContactStore, ImageUpdate},
};

/// Drives the single contact through create, update and delete.
#[derive(Debug, Clone)]
pub struct ContactLifecycle<S, A> {
  store:  S,
  assets: A,
}

impl<S, A> ContactLifecycle<S, A>
where
  S: ContactStore,
  A: AssetColocator,
{
  pub fn new(store: S, assets: A) -> Self { Self { store, assets } }

  pub fn store(&self) -> &S { &self.store }

  pub fn assets(&self) -> &A { &self.assets }

  /// Ensure the schema exists and hydrate a session from the stored row.
  pub async fn start(&self) -> Result<EditingSession> {
    self.store.ensure_schema().await.map_err(Error::store)?;
    let loaded = self.store.load_singleton().await.map_err(Error::store)?;
    let session = EditingSession::new(loaded);
    debug!(mode = ?session.mode(), "session hydrated");
    Ok(session)
  }

  /// Validate `candidate` and insert or update depending on the session's
  /// mode. Returns the contact as now stored.
  pub async fn save<'s>(
    &self,
    session: &'s mut EditingSession,
    candidate: Candidate,
  ) -> Result<&'s Contact> {
    let Submission { fields, staged_image } =
      Submission::try_from(candidate).inspect_err(|e| {
        debug!(error = %e, "candidate rejected");
      })?;

    // A create-mode session may be stale. Refuse before the photo move so an
    // existing contact's photo cannot be overwritten by a save that will not
    // be stored.
    if session.mode() == Mode::Create {
      self.ensure_slot_free().await?;
    }

    // The photo must be in place before any row points at it.
    let relocated = match &staged_image {
      Some(staged) => {
        let key = AssetKey::from_fields(&fields);
        debug!(staged = %staged.uri(), %key, "relocating photo");
        let uri = self
          .assets
          .relocate(staged, &key)
          .await
          .map_err(Error::asset)?;
        Some(uri)
      }
      None => None,
    };

    let stored = match session.mode() {
      Mode::Create => {
        let contact = self
          .store
          .insert(fields, relocated)
          .await
          .map_err(Error::store)?;
        info!(id = %contact.id, "contact added");
        contact
      }
      Mode::Edit(id) => {
        let image = match relocated {
          Some(uri) => ImageUpdate::Replace(uri),
          None => ImageUpdate::Keep,
        };
        let contact = self
          .store
          .update(id, fields, image)
          .await
          .map_err(Error::store)?;
        info!(id = %contact.id, "contact updated");
        contact
      }
    };

    Ok(session.hold(stored))
  }

  async fn ensure_slot_free(&self) -> Result<()> {
    let existing = self.store.load_singleton().await.map_err(Error::store)?;
    match existing {
      Some(Contact { id, .. }) => {
        warn!(%id, "create-mode save while a contact is stored");
        Err(Error::SessionOutdated(id))
      }
      None => Ok(()),
    }
  }

  /// Delete the held contact and return the session to create mode. The
  /// photo file stays where it is.
  pub async fn delete(&self, session: &mut EditingSession) -> Result<()> {
    let Some(id) = session.id() else {
      warn!("delete requested with no contact held");
      return Err(Error::NothingToDelete);
    };

    self.store.delete(id).await.map_err(Error::store)?;
    session.clear();
    info!(%id, "contact deleted");
    Ok(())
  }
}
