use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// User-facing errors.
#[derive(Error, Debug)]
pub enum SqlfixError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, SqlfixError>;
