//! On-disk store for the to-do list.
//!
//! The file holds one record per line, `<0|1> <content>`, in list order. It is
//! read once when the application starts and rewritten in full on save.

pub mod parser;
pub mod writer;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::item_list::ItemList;
use parser::{ParsedStore, RecordError, RecordParser};
use writer::RecordWriter;

/// Name of the store file inside the home directory.
pub const STORE_FILE_NAME: &str = ".gtodo";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no home directory to place .gtodo in")]
    NoHomeDir,
}

/// `<home>/.gtodo`, or `NoHomeDir` when the platform has no home directory.
pub fn default_path() -> Result<PathBuf, StoreError> {
    dirs::home_dir()
        .map(|home| home.join(STORE_FILE_NAME))
        .ok_or(StoreError::NoHomeDir)
}

/// Read and decode the store without building a list.
///
/// A missing file decodes as an empty store. Content is kept as raw bytes,
/// so text that is not UTF-8 is written back unchanged.
pub fn read_records(path: &Path) -> Result<ParsedStore, StoreError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ParsedStore::default()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    Ok(RecordParser::parse(&bytes))
}

/// Read the store into a list, logging and skipping malformed lines.
pub fn read(path: &Path) -> Result<ItemList, StoreError> {
    let parsed = read_records(path)?;

    for err in &parsed.errors {
        log::warn!("{}", malformed_warning(path, err));
    }

    let mut list = ItemList::new();
    for record in parsed.records {
        list.add_bytes(record.content, record.done);
    }
    Ok(list)
}

/// Journal text for a skipped line. The line is gone after the next save.
pub fn malformed_warning(path: &Path, err: &RecordError) -> String {
    format!(
        "Skipping malformed record in {}: {} (the line will be dropped on next save)",
        path.display(),
        err
    )
}

/// Load the store, treating every failure as an empty list.
pub fn load(path: &Path) -> ItemList {
    match read(path) {
        Ok(list) => {
            log::info!("Loaded {} items from {}", list.len(), path.display());
            list
        }
        Err(e) => {
            log::error!("Failed to load to-do list: {}", e);
            ItemList::new()
        }
    }
}

/// Overwrite the store with `list`.
pub fn save(path: &Path, list: &ItemList) -> Result<(), StoreError> {
    let content = RecordWriter::write_file(list);
    std::fs::write(path, content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Saved {} items to {}", list.len(), path.display());
    Ok(())
}
