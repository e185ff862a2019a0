//! Outfit-of-the-day judge - sends a photo to a vision-capable chat model
//! and returns a structured critique.
//!
//! The interesting part is the resilience layer around a single remote call:
//! credential gating, response validation, and a static fallback table that
//! guarantees callers always receive a fully-populated [`models::Judgment`],
//! whatever the remote service does.

pub mod ai;
pub mod data_url;
pub mod error;
pub mod fallback;
pub mod judge;
pub mod models;
pub mod prompts;

pub use error::{Error, Result};
pub use judge::OutfitJudge;
pub use models::Judgment;
