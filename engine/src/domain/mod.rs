//! # Domain Module
//!
//! Business logic for the restaurant deals marketplace.
//!
//! This module holds the deal availability, pricing, ranking, and claim
//! rules as pure services. Nothing here touches the network or the
//! datastore: callers fetch denormalized rows, hand them in together with
//! an explicit `now`, and get derived values back.
//!
//! ## Module Organization
//!
//! - **schedule_service**: HH:MM window and active-day predicates
//! - **availability_service**: deal lifecycle classification
//! - **pricing_service**: discount math and dual-tier price resolution
//! - **ranking_service**: marketplace ordering of classified deals
//! - **claim_service**: per-user daily claim allowance guard
//! - **listing_service**: the one-call-per-render listing pipeline
//!
//! ## Design Principles
//!
//! - **Explicit clock**: `now` is a parameter everywhere, never read ambiently
//! - **Normalize at the boundary**: raw day/time representations become typed
//!   values on ingestion and only those flow downstream
//! - **Total on the hot path**: malformed store data degrades (never-active
//!   window, every-day fallback) instead of panicking a list render
//! - **Advisory guards**: the datastore stays the authority on counters; see
//!   `claim_service` on the concurrent-claim race

pub mod availability_service;
pub mod claim_service;
pub mod listing_service;
pub mod pricing_service;
pub mod ranking_service;
pub mod schedule_service;

pub use availability_service::*;
pub use claim_service::*;
pub use listing_service::*;
pub use pricing_service::*;
pub use ranking_service::*;
pub use schedule_service::*;
