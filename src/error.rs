//! Fatal errors of the file loader.
//!
//! Content problems are never represented here; they are returned as plain
//! strings by `validate::validate_schedules`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
