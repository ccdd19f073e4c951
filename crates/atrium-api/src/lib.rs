//! # atrium-api
//!
//! Server-rendered account pages built with Axum and htmx.
//!
//! Forms post with htmx and receive HTML fragments back; errors are
//! retargeted into the page's `#errors` container.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
