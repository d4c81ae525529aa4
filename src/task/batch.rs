//! Chunking of a validated request into one or more task-list files.

use serde::Serialize;

use super::template::generate;
use super::tile::GenerateRequest;

/// Maximum number of `<task>` elements in a single file.
pub const MAX_TASKS_PER_FILE: usize = 99;

/// One rendered file, held in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub filename: String,
    pub content: String,
}

/// How the generated output is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Everything fit into one file: send it as a direct download.
    Single(GeneratedFile),
    /// Two or more files: list them for individual download.
    Multiple(Vec<GeneratedFile>),
}

impl Delivery {
    pub fn files(&self) -> &[GeneratedFile] {
        match self {
            Delivery::Single(file) => std::slice::from_ref(file),
            Delivery::Multiple(files) => files,
        }
    }

    pub fn into_files(self) -> Vec<GeneratedFile> {
        match self {
            Delivery::Single(file) => vec![file],
            Delivery::Multiple(files) => files,
        }
    }
}

/// Number of files needed for `tile_count` tiles.
pub fn chunk_count(tile_count: usize) -> usize {
    tile_count.div_ceil(MAX_TASKS_PER_FILE)
}

/// Render a validated request.
///
/// Task IDs start at 1 and keep counting across file boundaries.
pub fn build_delivery(request: &GenerateRequest) -> Delivery {
    let url = request.environment.earthcore_url();
    let base = request.base_filename.as_str();

    if chunk_count(request.tile_ids.len()) <= 1 {
        return Delivery::Single(GeneratedFile {
            filename: format!("{base}.txt"),
            content: generate(&request.tile_ids, 1, url),
        });
    }

    let mut next_task_id: u64 = 1;
    let files = request
        .tile_ids
        .chunks(MAX_TASKS_PER_FILE)
        .enumerate()
        .map(|(index, chunk)| {
            let content = generate(chunk, next_task_id, url);
            next_task_id += chunk.len() as u64;
            GeneratedFile {
                filename: format!("{base}_{}.txt", index + 1),
                content,
            }
        })
        .collect();

    Delivery::Multiple(files)
}
