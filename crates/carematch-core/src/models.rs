pub mod application;
pub mod appointment;
pub mod auth;
pub mod care;
pub mod insurer;
pub mod mood_score;
pub mod navigation;
pub mod patient;
pub mod session;
