//! Editing session — the caller-owned mirror of the persisted row.

use crate::{
  candidate::Candidate,
  contact::{Contact, ContactId},
};

/// Whether a save will insert or update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// No contact is held; the next save inserts.
  Create,
  /// The contact `id` is held; the next save updates it.
  Edit(ContactId),
}

/// The last known-good persisted contact, or nothing.
///
/// Built from [`crate::store::ContactStore::load_singleton`] at startup and
/// only changed by successful lifecycle operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditingSession {
  held: Option<Contact>,
}

impl EditingSession {
  pub fn new(loaded: Option<Contact>) -> Self { Self { held: loaded } }

  pub fn mode(&self) -> Mode {
    match &self.held {
      Some(c) => Mode::Edit(c.id),
      None => Mode::Create,
    }
  }

  pub fn id(&self) -> Option<ContactId> { self.held.as_ref().map(|c| c.id) }

  pub fn contact(&self) -> Option<&Contact> { self.held.as_ref() }

  /// A form prefilled from the held contact, or a blank one in create mode.
  pub fn candidate(&self) -> Candidate {
    self
      .held
      .as_ref()
      .map(Candidate::from_contact)
      .unwrap_or_default()
  }

  pub(crate) fn hold(&mut self, contact: Contact) -> &Contact {
    self.held.insert(contact)
  }

  pub(crate) fn clear(&mut self) { self.held = None; }
}
