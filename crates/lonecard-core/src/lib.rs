//! Core types and trait definitions for the lonecard contact record.
//!
//! This crate is deliberately free of database and filesystem dependencies.
//! Backends implement [`store::ContactStore`] and [`asset::AssetColocator`];
//! [`lifecycle::ContactLifecycle`] composes them.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod asset;
pub mod candidate;
pub mod contact;
pub mod error;
pub mod lifecycle;
pub mod session;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
