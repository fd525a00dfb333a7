//! Frontend configuration and build metadata.
//!
//! The pool and client ids are public identifiers that ship in the bundle.
//! Tokens live in `localStorage` and must never be logged.

pub(crate) mod build_info;
pub(crate) mod config;
