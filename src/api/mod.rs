//! HTTP API for the task-list generator.
//!
//! ## Endpoints
//!
//! - `GET /` - Generator form
//! - `POST /` - Submit the form; returns a file download or a download page
//! - `POST /api/generate` - JSON variant of the form submission
//! - `GET /api/health` - Health check

mod generate;
mod pages;
mod routes;
pub mod types;

pub use routes::{app, serve, AppState};
