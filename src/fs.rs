//! File system utilities.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{SessionError, SessionResult};

/// Destination for finished chat logs.
pub trait Persistence {
    /// Appends `content` to the file at `path`, creating it if needed.
    fn append_to_file(&self, path: &Path, content: &str) -> SessionResult<()>;
}

/// Appends chat logs to plain files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFile;

impl Persistence for LogFile {
    /// The file is closed before returning, whether or not the write succeeded.
    fn append_to_file(&self, path: &Path, content: &str) -> SessionResult<()> {
        let persistence_error = |source| SessionError::Persistence {
            path: path.to_path_buf(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(persistence_error)?;

        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(persistence_error)
    }
}
