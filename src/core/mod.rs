//! Core library components.
//!
//! Reusable logic for decrypting secret files, writing them to a secret
//! store and rewriting companion documents with vault references.

pub mod companion;
pub mod config;
pub mod constants;
pub mod decrypt;
pub mod document;
pub mod flatten;
pub mod import;
pub mod location;
pub mod patch;
pub mod store;
