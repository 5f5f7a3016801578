//! carematch-auth
//!
//! Session context and account flows: the on-disk session store, login and
//! signup against the backend, and where each user lands afterwards.

pub mod credentials;
pub mod error;
pub mod flows;
pub mod session;
pub mod storage;
