//! Route handlers
//!
//! All HTTP request handlers organized by feature.

pub mod auth;
pub mod health;
pub mod home;
pub mod password;
pub mod profile;
pub mod protected;
pub mod theme;
pub mod verify;
