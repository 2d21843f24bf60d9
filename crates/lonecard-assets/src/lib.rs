//! Filesystem photo storage for lonecard.
//!
//! Picked images arrive at a transient staging path; [`FsColocator`] moves
//! them into the durable root under a name derived from the contact.

mod colocator;

pub mod error;

pub use colocator::FsColocator;
pub use error::{Error, Result};
