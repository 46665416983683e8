//! # Blog API Server
//!
//! Actix-web adapters over the blog services. The binary in `main.rs` wires
//! configuration, telemetry and state; everything it uses lives here so the
//! HTTP surface can be exercised from integration tests.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
pub mod validation;

pub use config::AppConfig;
pub use state::AppState;
