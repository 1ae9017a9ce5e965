//! Shared core components for the finmock tool server.
//!
//! Everything here is transport-agnostic: configuration and the allow-list,
//! the session registry, the fixture resolver, and the static tool catalog.
//! The HTTP layer in `finmock-api` composes these pieces and owns all
//! response shaping.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod session;
pub mod tools;
