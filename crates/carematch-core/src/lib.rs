//! carematch-core
//!
//! Pure domain types, backend route conventions, and navigation landings.
//! No HTTP dependency; this is the shared vocabulary of the Carematch system.

pub mod error;
pub mod models;
pub mod routes;
