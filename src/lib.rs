//! # Tile Tasks
//!
//! Turns a list of numeric tile identifiers into mock task-list XML files
//! for the building-creation pipeline.
//!
//! This library provides:
//! - A pure generator that renders tile IDs into `<task>` documents
//! - Chunking of large batches into files of at most 99 tasks
//! - An HTTP form (and a JSON endpoint) in front of the generator
//!
//! ## Request Flow
//! 1. Receive the form (environment, base filename, tile IDs)
//! 2. Validate every field before anything is rendered
//! 3. Split the tile IDs into chunks and render one document per chunk
//! 4. Return a single attachment, or a page linking every generated file
//!
//! ## Modules
//! - `task`: validation, XML rendering and chunking
//! - `api`: axum routes and HTML pages
//! - `config`: environment-driven server configuration

pub mod api;
pub mod config;
pub mod task;

pub use config::Config;
pub use task::{Delivery, Environment, GeneratedFile, GenerateRequest, TileId, ValidationError};
