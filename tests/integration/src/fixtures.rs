//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use atrium_common::hash_password;
use atrium_core::User;
use chrono::Utc;
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Password used by every fixture account
pub const TEST_PASSWORD: &str = "TestPass123!";

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup form values
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Unique across the whole test run, so live databases can be reused
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let nonce = Uuid::new_v4().simple().to_string();
        Self {
            username: format!("user{suffix}{}", &nonce[..8]),
            email: format!("test{suffix}-{}@example.com", &nonce[..8]),
            password: TEST_PASSWORD.to_string(),
        }
    }

    pub fn fields(&self) -> Vec<(&str, &str)> {
        vec![
            ("username", self.username.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
            ("password_confirm", self.password.as_str()),
        ]
    }

    pub fn login_fields(&self) -> Vec<(&str, &str)> {
        vec![
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

/// A verified account with [`TEST_PASSWORD`], ready to store
pub fn verified_user(username: &str, email: &str) -> (User, String) {
    let mut user = User::new(Uuid::new_v4(), username.to_string(), email.to_string());
    user.mark_verified(Utc::now());
    let hash = hash_password(TEST_PASSWORD).expect("hash test password");
    (user, hash)
}

/// Smallest valid PNG: a 1x1 transparent pixel
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];
