//! # Domain
//!
//! Pure types shared by every `ClaimsHub` crate, with `serde` as the only dependency.
//! No I/O, networking or business rules here.

pub mod config;
pub mod constants;
pub mod registry;
