//! carematch-api
//!
//! Blocking client for the Carematch REST backend. Every call is a single
//! request/response; responses are parsed into the endpoint's schema from
//! `carematch_core::models` at this boundary.

pub mod accounts;
pub mod client;
pub mod error;
pub mod insurer;
pub mod patient;

pub use client::ApiClient;
pub use error::ApiError;
