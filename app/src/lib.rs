//! Deterministic seed data for the Bangladesh `stations` catalog.
//!
//! Reads the administrative divisions dataset, assigns every district a
//! stable UUID key and a unique three-character station code, and renders
//! an idempotent upsert batch.

pub mod codes;
pub mod config;
pub mod divisions;
pub mod error;
pub mod keys;
pub mod loader;
pub mod seed;
pub mod sql;
pub mod stations;
pub mod summary;
pub mod types;
