//! Task module - validates tile IDs and renders them into task-list files.
//!
//! This module has no knowledge of HTTP:
//! - Input is validated all-or-nothing before any document is rendered
//! - Rendering and chunking are pure functions over validated input

mod batch;
mod environment;
mod template;
mod tile;

pub use batch::{build_delivery, chunk_count, Delivery, GeneratedFile, MAX_TASKS_PER_FILE};
pub use environment::{Environment, PROD_URL, UAT_URL};
pub use template::{generate, render_task, XML_FOOTER, XML_HEADER};
pub use tile::{parse_tile_ids, GenerateRequest, TileId, ValidationError};
