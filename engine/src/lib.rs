//! Deal availability and pricing engine for the restaurant deals marketplace.
//!
//! A pure computation library: the listing view and the claim flow call into
//! the services here with snapshots of datastore rows and an explicit `now`,
//! and issue their own reads and writes against the store afterwards.

pub mod domain;

pub use domain::*;
pub use shared;
